//! Event mapping extraction
//!
//! Documentation lines of the form `<digits> : <label>` or `<digits> = <label>`
//! describe the states a point can take. They are collected into an ordered
//! map that the transformer turns into `evt` annotations.

use indexmap::IndexMap;
use serde::Serialize;

/// Ordered map from a value string to its display label
///
/// Iteration follows first insertion. Re-inserting a value replaces its label
/// but keeps its position. Values are never parsed as numbers, so `"01"` and
/// `"1"` are distinct keys.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct EventMapping {
    entries: IndexMap<String, String>,
}

impl EventMapping {
    /// Create an empty mapping
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite the label for `value`
    ///
    /// Returns the previous label if the value was already present.
    pub fn insert(&mut self, value: impl Into<String>, label: impl Into<String>) -> Option<String> {
        self.entries.insert(value.into(), label.into())
    }

    /// Look up the label for `value`
    pub fn get(&self, value: &str) -> Option<&str> {
        self.entries.get(value).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate `(value, label)` pairs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(v, l)| (v.as_str(), l.as_str()))
    }
}

/// Build the event mapping from documentation lines
///
/// Lines that do not contain a `<digits> [:=] <text>` pair are skipped.
/// The pattern is not anchored, so a mapping may follow leading prose on the
/// same line.
pub fn build_event_mapping<'a, I>(doc_lines: I) -> EventMapping
where
    I: IntoIterator<Item = &'a str>,
{
    let pattern = regex!(r"(\d+)\s*[:=]\s*(.+)");
    let mut mapping = EventMapping::new();

    for line in doc_lines {
        let Some(caps) = pattern.captures(line) else {
            continue;
        };

        let value = caps[1].trim();
        let label = capitalize_first(caps[2].trim());

        if let Some(previous) = mapping.insert(value, label) {
            log::debug!("Event value {} redefined (was {:?})", value, previous);
        }
    }

    log::debug!("Built event mapping with {} entries", mapping.len());
    mapping
}

/// Upper-case the first character and leave the rest untouched
fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
