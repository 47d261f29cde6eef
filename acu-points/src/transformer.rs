//! Record transformer
//!
//! This module provides the main entry points of the library. The Transformer
//! classifies a raw document, builds the event mapping and emits one record
//! per valid point line.

use crate::classifier::{classify, NumberedLine};
use crate::config::{MalformedLinePolicy, TransformConfig};
use crate::mapping::{build_event_mapping, EventMapping};
use crate::normalize::{normalize_description, normalize_name};
use crate::types::{
    AcuError, EventAnnotation, MalformedReason, OutputRecord, PointLine, RejectedLine, Result,
};

/// Description phrases that mark a point as taking the documented events
///
/// Matched case-insensitively against the normalized description.
pub const EVENT_TRIGGER_PHRASES: &[&str] = &["aos time", "ephemeris table"];

/// Everything produced by one transformation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransformOutput {
    /// Emitted records, in point line order
    pub records: Vec<OutputRecord>,
    /// Event mapping built from the documentation lines
    pub mapping: EventMapping,
    /// Point lines dropped under [`MalformedLinePolicy::Skip`]
    pub rejected: Vec<RejectedLine>,
}

impl TransformOutput {
    /// Render the point table: one record per line, no trailing newline
    pub fn render(&self) -> String {
        self.records
            .iter()
            .map(|record| record.to_string())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// The local, deterministic point table builder
#[derive(Debug, Clone, Default)]
pub struct Transformer {
    config: TransformConfig,
}

impl Transformer {
    /// Create a transformer with the given configuration
    pub fn new(config: TransformConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &TransformConfig {
        &self.config
    }

    /// Transform a raw document
    ///
    /// # Returns
    /// * `Result<TransformOutput>` - Err only under [`MalformedLinePolicy::Fail`]
    ///
    /// # Example
    /// ```
    /// use acu_points::{TransformConfig, Transformer};
    ///
    /// let doc = ":ACU:PNT:FI:10007:ELEVATION_MINIMUM_ANGLE:\"Elevation Minimum Angle\":grp \"Slave Table\":\n\
    ///            :ACU:broken";
    ///
    /// let output = Transformer::default().run(doc).unwrap();
    /// assert_eq!(output.records.len(), 1);
    /// assert_eq!(output.rejected.len(), 1);
    ///
    /// let strict = Transformer::new(TransformConfig::new().strict());
    /// assert!(strict.run(doc).is_err());
    /// ```
    pub fn run(&self, raw: &str) -> Result<TransformOutput> {
        let classified = classify(raw);
        let mapping = build_event_mapping(classified.doc_lines.iter().copied());

        let mut records = Vec::with_capacity(classified.point_lines.len());
        let mut rejected = Vec::new();

        for line in &classified.point_lines {
            match PointLine::parse(line.number, line.text) {
                Ok(point) => records.push(self.build_record(&point, &mapping)),
                Err(AcuError::MalformedPointLine { line: number, reason }) => {
                    match self.config.malformed_lines {
                        MalformedLinePolicy::Fail => {
                            return Err(AcuError::MalformedPointLine { line: number, reason });
                        }
                        MalformedLinePolicy::Skip => {
                            log::warn!("Skipping point line {}: {}", number, reason);
                            rejected.push(reject(line, reason));
                        }
                    }
                }
                Err(e) => return Err(e),
            }
        }

        log::info!(
            "Transformed {} point lines into {} records ({} event mappings, {} rejected)",
            classified.point_lines.len(),
            records.len(),
            mapping.len(),
            rejected.len()
        );

        Ok(TransformOutput { records, mapping, rejected })
    }

    /// Build the output record for one parsed point line
    pub fn build_record(&self, point: &PointLine, mapping: &EventMapping) -> OutputRecord {
        let name = normalize_name(&point.raw_name);
        let description = normalize_description(&point.raw_description);

        let events = if self.config.annotate_events && takes_events(&description, mapping) {
            mapping
                .iter()
                .map(|(value, label)| EventAnnotation {
                    label: label.to_string(),
                    value: value.to_string(),
                })
                .collect()
        } else {
            Vec::new()
        };

        OutputRecord {
            id: point.id.clone(),
            name,
            description,
            events,
        }
    }
}

/// Whether a record with this normalized description gets `evt` annotations
fn takes_events(description: &str, mapping: &EventMapping) -> bool {
    if mapping.is_empty() {
        return false;
    }
    let lowered = description.to_lowercase();
    EVENT_TRIGGER_PHRASES.iter().any(|phrase| lowered.contains(phrase))
}

fn reject(line: &NumberedLine<'_>, reason: MalformedReason) -> RejectedLine {
    RejectedLine {
        line: line.number,
        text: line.text.to_string(),
        reason,
    }
}

/// Transform a raw document into a point table with the default configuration
///
/// Malformed point lines are dropped; see [`Transformer::run`] for the report.
pub fn transform(raw: &str) -> String {
    match Transformer::default().run(raw) {
        Ok(output) => output.render(),
        Err(e) => {
            log::error!("Transformation failed: {}", e);
            String::new()
        }
    }
}
