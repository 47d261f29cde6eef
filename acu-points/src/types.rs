//! Core types for the ACU point table library
//!
//! This module defines the parsed point line, the emitted output record and
//! the error type shared by the local pipeline and the model collaborator.

use serde::Serialize;
use std::fmt;

/// Result type for library operations
pub type Result<T> = std::result::Result<T, AcuError>;

/// Marker that identifies a point definition line
pub const RECORD_MARKER: &str = ":ACU";

/// Fixed prefix of every emitted record
pub const RECORD_PREFIX: &str = ":ACU:PNT:FI:";

/// Grouping tag carried on every emitted record
pub const GROUP_TAG: &str = "Slave Table";

/// Errors that can occur while building a point table
#[derive(Debug, thiserror::Error)]
pub enum AcuError {
    #[error("Malformed point line {line}: {reason}")]
    MalformedPointLine { line: usize, reason: MalformedReason },

    #[error("Model request failed: {0}")]
    Transport(String),

    #[error("Model API returned HTTP {status}: {body}")]
    Api { status: u16, body: String },

    #[error("Invalid model response: {0}")]
    InvalidResponse(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Why a point line could not be parsed
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MalformedReason {
    /// Fewer than five colon-delimited fields
    TooFewFields { found: usize },
    /// No pair of double quotes on the line
    MissingDescription,
}

impl fmt::Display for MalformedReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MalformedReason::TooFewFields { found } => {
                write!(f, "expected at least 5 ':'-delimited fields, found {}", found)
            }
            MalformedReason::MissingDescription => write!(f, "no quoted description"),
        }
    }
}

/// A point definition line split into the fields the transformer needs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PointLine {
    /// 1-based line number in the source document
    pub line_number: usize,
    /// Point ID (field 3), carried verbatim
    pub id: String,
    /// Raw point name (field 4), before normalization
    pub raw_name: String,
    /// Content of the first pair of double quotes, before normalization
    pub raw_description: String,
}

impl PointLine {
    /// Parse one `:ACU` line
    ///
    /// # Example
    /// ```
    /// use acu_points::PointLine;
    ///
    /// let line = PointLine::parse(1, ":ACU:PNT:FI:10007:ELEVATION_MINIMUM_ANGLE:\"Elevation Minimum Angle\":").unwrap();
    /// assert_eq!(line.id, "10007");
    /// assert_eq!(line.raw_name, "ELEVATION_MINIMUM_ANGLE");
    /// assert_eq!(line.raw_description, "Elevation Minimum Angle");
    /// ```
    pub fn parse(line_number: usize, text: &str) -> Result<Self> {
        let fields: Vec<&str> = text.split(':').collect();
        if fields.len() < 5 {
            return Err(AcuError::MalformedPointLine {
                line: line_number,
                reason: MalformedReason::TooFewFields { found: fields.len() },
            });
        }

        let raw_description = quoted_description(text).ok_or_else(|| AcuError::MalformedPointLine {
            line: line_number,
            reason: MalformedReason::MissingDescription,
        })?;

        Ok(Self {
            line_number,
            id: fields[3].to_string(),
            raw_name: fields[4].to_string(),
            raw_description: raw_description.to_string(),
        })
    }
}

/// Content between the first two double quotes of `text`
fn quoted_description(text: &str) -> Option<&str> {
    let (_, rest) = text.split_once('"')?;
    let (inner, _) = rest.split_once('"')?;
    Some(inner)
}

/// One `evt` annotation on an output record
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EventAnnotation {
    pub label: String,
    /// Value exactly as written in the documentation
    pub value: String,
}

impl fmt::Display for EventAnnotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, ":evt \"{}\"=={},0:", self.label, self.value)
    }
}

/// A normalized point ready to be rendered as one table line
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutputRecord {
    pub id: String,
    pub name: String,
    pub description: String,
    pub events: Vec<EventAnnotation>,
}

impl fmt::Display for OutputRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}:{}:\"{}\":grp \"{}\"",
            RECORD_PREFIX, self.id, self.name, self.description, GROUP_TAG
        )?;
        for event in &self.events {
            write!(f, "{}", event)?;
        }
        Ok(())
    }
}

/// A point line that was dropped from the table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RejectedLine {
    /// 1-based line number in the source document
    pub line: usize,
    pub text: String,
    pub reason: MalformedReason,
}
