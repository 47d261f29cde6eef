//! Transformation configuration types
//!
//! The local pipeline has almost nothing to configure: the record grammar,
//! the group tag and the event trigger phrases are fixed. What is left is
//! how malformed point lines are treated and whether `evt` annotations are
//! emitted at all.

use serde::{Deserialize, Serialize};

/// What to do with a `:ACU` line that cannot be parsed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MalformedLinePolicy {
    /// Drop the line and list it in the transformation report
    #[default]
    Skip,
    /// Abort the whole transformation on the first malformed line
    Fail,
}

/// Configuration for the local transformer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransformConfig {
    /// Handling of malformed point lines
    #[serde(default)]
    pub malformed_lines: MalformedLinePolicy,

    /// Whether to append `evt` annotations to triggering records
    #[serde(default = "default_true")]
    pub annotate_events: bool,
}

fn default_true() -> bool {
    true
}

impl Default for TransformConfig {
    fn default() -> Self {
        Self {
            malformed_lines: MalformedLinePolicy::default(),
            annotate_events: true,
        }
    }
}

impl TransformConfig {
    /// Create a new configuration with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method: set the malformed line policy
    pub fn with_malformed_lines(mut self, policy: MalformedLinePolicy) -> Self {
        self.malformed_lines = policy;
        self
    }

    /// Builder method: shorthand for [`MalformedLinePolicy::Fail`]
    pub fn strict(self) -> Self {
        self.with_malformed_lines(MalformedLinePolicy::Fail)
    }

    /// Builder method: enable or disable `evt` annotations
    pub fn with_event_annotations(mut self, enabled: bool) -> Self {
        self.annotate_events = enabled;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transform_config_builder() {
        let config = TransformConfig::new().strict().with_event_annotations(false);

        assert_eq!(config.malformed_lines, MalformedLinePolicy::Fail);
        assert!(!config.annotate_events);
    }

    #[test]
    fn test_defaults() {
        let config = TransformConfig::new();
        assert_eq!(config.malformed_lines, MalformedLinePolicy::Skip);
        assert!(config.annotate_events);
    }

    #[test]
    fn test_deserialize_partial() {
        let config: TransformConfig = serde_json::from_str(r#"{"malformed_lines":"fail"}"#).unwrap();
        assert_eq!(config.malformed_lines, MalformedLinePolicy::Fail);
        assert!(config.annotate_events);

        let config: TransformConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, TransformConfig::default());
    }
}
