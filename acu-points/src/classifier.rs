//! Line classifier
//!
//! Partitions a raw document into point definition lines and documentation
//! lines. Nothing is trimmed or rewritten here.

use crate::types::RECORD_MARKER;

/// A line together with its 1-based position in the source document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberedLine<'a> {
    pub number: usize,
    pub text: &'a str,
}

/// The two line groups of a document, each in original order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassifiedLines<'a> {
    /// Lines starting with `:ACU`
    pub point_lines: Vec<NumberedLine<'a>>,
    /// Every other line
    pub doc_lines: Vec<&'a str>,
}

/// Split `raw` into point lines and documentation lines
pub fn classify(raw: &str) -> ClassifiedLines<'_> {
    let mut classified = ClassifiedLines::default();

    for (idx, text) in raw.lines().enumerate() {
        if text.starts_with(RECORD_MARKER) {
            classified.point_lines.push(NumberedLine { number: idx + 1, text });
        } else {
            classified.doc_lines.push(text);
        }
    }

    log::debug!(
        "Classified {} point lines and {} documentation lines",
        classified.point_lines.len(),
        classified.doc_lines.len()
    );

    classified
}
