//! Description normalizer
//!
//! Strips unit asides and value ranges from the quoted free text of a point,
//! e.g. `Elevation Angle (degrees) -10 to +10` becomes `Elevation Angle`.

use super::{run_pipeline, Step};

/// Description normalization steps, in application order
pub const DESCRIPTION_STEPS: &[Step] = &[
    ("strip_parenthesized", strip_parenthesized),
    ("strip_numeric_ranges", strip_numeric_ranges),
    ("trim", trim),
];

/// Normalize the quoted description of a point line
///
/// # Example
/// ```
/// use acu_points::normalize_description;
///
/// assert_eq!(normalize_description("Elevation Angle (degrees) -10 to +10"), "Elevation Angle");
/// ```
pub fn normalize_description(raw: &str) -> String {
    run_pipeline(DESCRIPTION_STEPS, raw)
}

/// Remove every `(...)` aside together with the whitespace in front of it
pub fn strip_parenthesized(text: &str) -> String {
    regex!(r"\s*\(.*?\)").replace_all(text, "").into_owned()
}

/// Remove `<n> to <m>` ranges together with the whitespace in front of them
///
/// A range only counts when it starts the text or follows whitespace.
pub fn strip_numeric_ranges(text: &str) -> String {
    regex!(r"(?i)(?:^|\s+)-?\d+(?:\.\d+)?\s*to\s*\+?\d+(?:\.\d+)?")
        .replace_all(text, "")
        .into_owned()
}

pub fn trim(text: &str) -> String {
    text.trim().to_string()
}
