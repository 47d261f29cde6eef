//! Point name normalizer
//!
//! Raw names look like `AOS_TIME_FOR_T0_TRIGGER_IN_SECOND_SINCE_BEGIN` or
//! `EPHEMERIS_TABLE_12_UNUSED`. The pipeline cuts unit and index suffixes,
//! drops `TABLE`, and re-joins the remaining words with single underscores.
//!
//! `strip_table` must run while the original underscores are still in place:
//! it removes the literal substring, not a word.
//!
//! Steps before `underscores_to_spaces` accept any run of whitespace or
//! underscores wherever they expect an underscore, since such a run becomes a
//! single underscore in the output.

use super::{run_pipeline, Step};

/// Name normalization steps, in application order
pub const NAME_STEPS: &[Step] = &[
    ("strip_in_second_suffix", strip_in_second_suffix),
    ("strip_index_suffix", strip_index_suffix),
    ("strip_unused_marker", strip_unused_marker),
    ("strip_table", strip_table),
    ("underscores_to_spaces", underscores_to_spaces),
    ("trim", trim),
    ("join_words", join_words),
    ("to_upper", to_upper),
];

/// Normalize a raw point name into an upper-case, underscore-joined token
///
/// # Example
/// ```
/// use acu_points::normalize_name;
///
/// assert_eq!(normalize_name("Elevation_Minimum_Angle_IN_SECOND"), "ELEVATION_MINIMUM_ANGLE");
/// assert_eq!(normalize_name("EPHEMERIS_TABLE"), "EPHEMERIS");
/// ```
pub fn normalize_name(raw: &str) -> String {
    run_pipeline(NAME_STEPS, raw)
}

/// Drop `_IN_SECOND` and everything after it
pub fn strip_in_second_suffix(name: &str) -> String {
    regex!(r"(?i)[_\s]+IN[_\s]+SECOND.*$").replace(name, "").into_owned()
}

/// Drop `_<digits>_` and everything after it
pub fn strip_index_suffix(name: &str) -> String {
    regex!(r"[_\s]+\d+[_\s]+.*$").replace(name, "").into_owned()
}

/// Drop a trailing `UNUSED` marker with its optional digits and underscores
pub fn strip_unused_marker(name: &str) -> String {
    regex!(r"(?i)[_\s]*\d*[_\s]*UNUSED$").replace(name, "").into_owned()
}

/// Remove `TABLE`, case-insensitively, until none is left
///
/// A single pass over `TABTABLELE` would leave a new `TABLE` behind.
pub fn strip_table(name: &str) -> String {
    let pattern = regex!(r"(?i)TABLE");
    let mut current = name.to_string();
    while pattern.is_match(&current) {
        current = pattern.replace_all(&current, "").into_owned();
    }
    current
}

pub fn underscores_to_spaces(name: &str) -> String {
    name.replace('_', " ")
}

pub fn trim(name: &str) -> String {
    name.trim().to_string()
}

/// Replace each whitespace run with one underscore
pub fn join_words(name: &str) -> String {
    regex!(r"\s+").replace_all(name, "_").into_owned()
}

pub fn to_upper(name: &str) -> String {
    name.to_uppercase()
}
