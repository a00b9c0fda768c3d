//! Keystroke masking for the name field.

#[cfg(test)]
#[path = "masking_test.rs"]
mod masking_test;

use regex::Regex;

pub const ILLEGAL_CHARACTER_MESSAGE: &str = "Illegal character typed";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MaskOutcome {
    Accepted,
    /// The last character was dropped; `restored` is the value to write back.
    Rejected { restored: String },
}

/// Check the full field value after a keystroke against `pattern`.
///
/// An empty value is always accepted so clearing the field never counts as
/// an illegal keystroke.
#[must_use]
pub fn mask(pattern: &Regex, value: &str) -> MaskOutcome {
    if value.is_empty() || pattern.is_match(value) {
        return MaskOutcome::Accepted;
    }
    let mut restored = value.to_owned();
    restored.pop();
    MaskOutcome::Rejected { restored }
}
