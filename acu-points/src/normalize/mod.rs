//! Name and description normalization
//!
//! Both normalizers are fixed, ordered pipelines of small pure steps. The step
//! tables below are the single source of truth for that order.

pub mod description;
pub mod name;

pub use description::normalize_description;
pub use name::normalize_name;

/// A named text rewrite applied as part of a pipeline
pub type Step = (&'static str, fn(&str) -> String);

/// Run `steps` over `input` in order
pub(crate) fn run_pipeline(steps: &[Step], input: &str) -> String {
    steps.iter().fold(input.to_string(), |acc, (name, step)| {
        let next = step(&acc);
        if next != acc {
            log::trace!("{}: {:?} -> {:?}", name, acc, next);
        }
        next
    })
}
