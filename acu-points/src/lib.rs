//! ACU Point Table Library
//!
//! Turns loosely structured equipment documentation into a fixed-format ACU
//! point table. The input is a single text document mixing free-form
//! documentation with point definition lines (lines starting with `:ACU`).
//!
//! # Architecture
//!
//! The local path is a pure, synchronous pipeline:
//! - The classifier partitions the document into documentation lines and
//!   point lines
//! - Documentation lines are scanned for `<value>: <label>` event mappings
//! - Each point line is parsed, its name and description are normalized, and
//!   one output record is emitted (with `evt` annotations when the record
//!   describes AOS timing or ephemeris table selection)
//!
//! The optional `ai` feature adds a collaborator that hands the same document
//! to a chat-completion model instead and returns its answer verbatim.
//!
//! # Example Usage
//!
//! ```
//! use acu_points::transform;
//!
//! let doc = "0: Ephemeris Table 1\n\
//!            1: Ephemeris Table 2\n\
//!            :ACU:PNT:FI:10004:EPHEMERIS_TABLE:\"Ephemeris Table\":grp \"Slave Table\":";
//!
//! let table = transform(doc);
//! assert_eq!(
//!     table,
//!     ":ACU:PNT:FI:10004:EPHEMERIS:\"Ephemeris Table\":grp \"Slave Table\"\
//!      :evt \"Ephemeris Table 1\"==0,0::evt \"Ephemeris Table 2\"==1,0:"
//! );
//! ```

#[macro_use]
mod macros;

// Public modules
pub mod classifier;
pub mod config;
pub mod mapping;
pub mod normalize;
pub mod transformer;
pub mod types;

#[cfg(feature = "ai")]
pub mod delegate;

// Re-export main types for convenience
pub use classifier::{classify, ClassifiedLines, NumberedLine};
pub use config::{MalformedLinePolicy, TransformConfig};
pub use mapping::{build_event_mapping, EventMapping};
pub use normalize::{normalize_description, normalize_name};
pub use transformer::{transform, TransformOutput, Transformer};
pub use types::{
    AcuError, EventAnnotation, MalformedReason, OutputRecord, PointLine, RejectedLine, Result,
};

#[cfg(feature = "ai")]
pub use delegate::{build_prompt, parse_completion, ModelClient, ModelConfig};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
