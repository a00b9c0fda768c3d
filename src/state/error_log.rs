//! Session-wide history of contact form errors.
//!
//! Every form controller instance created during a page session (including
//! the ones re-created after a soft navigation) appends to the same log.
//! Entries are never removed or deduplicated; the whole history travels
//! with a successful submit as a JSON array.

#[cfg(test)]
#[path = "error_log_test.rs"]
mod error_log_test;

use std::cell::RefCell;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

/// One recorded validation failure.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormErrorEntry {
    pub field: String,
    pub value: String,
    pub message: String,
    /// ISO-8601 timestamp of when the error was recorded.
    pub time: String,
}

/// Shared, append-only error log handle.
///
/// Clones share the same underlying log. Single-threaded: it is only
/// touched from UI event handlers.
#[derive(Clone, Debug, Default)]
pub struct ErrorLog {
    entries: Rc<RefCell<Vec<FormErrorEntry>>>,
}

impl ErrorLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, entry: FormErrorEntry) {
        self.entries.borrow_mut().push(entry);
    }

    /// Append an entry stamped with `time`.
    pub fn record(&self, field: &str, value: &str, message: &str, time: String) {
        self.push(FormErrorEntry {
            field: field.to_owned(),
            value: value.to_owned(),
            message: message.to_owned(),
            time,
        });
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }

    /// Copy of the entries in insertion order.
    #[must_use]
    pub fn snapshot(&self) -> Vec<FormErrorEntry> {
        self.entries.borrow().clone()
    }

    /// Serialize the full history as a JSON array of
    /// `{field, value, message, time}` records.
    ///
    /// # Errors
    ///
    /// Returns the serializer error; plain string records do not fail in
    /// practice.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&*self.entries.borrow())
    }
}
