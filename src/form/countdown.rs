//! Remaining-character countdown for the message field.

#[cfg(test)]
#[path = "countdown_test.rs"]
mod countdown_test;

use super::validation::utf16_len;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Countdown {
    pub remaining: usize,
    /// Near the limit; shown in the warning style.
    pub emphasized: bool,
}

impl Countdown {
    #[must_use]
    pub fn label(self) -> String {
        format!("({} left)", self.remaining)
    }
}

/// Countdown for `value` against `max` UTF-16 units, emphasized once
/// `remaining <= warning`.
#[must_use]
pub fn countdown(value: &str, max: usize, warning: usize) -> Countdown {
    let remaining = max.saturating_sub(utf16_len(value));
    Countdown { remaining, emphasized: remaining <= warning }
}

/// `value` cut down to at most `max` UTF-16 units, or `None` if it already
/// fits. Never splits a character.
#[must_use]
pub fn truncate_to(value: &str, max: usize) -> Option<String> {
    if utf16_len(value) <= max {
        return None;
    }
    let mut used = 0;
    let kept = value
        .chars()
        .take_while(|c| {
            used += c.len_utf16();
            used <= max
        })
        .collect();
    Some(kept)
}
