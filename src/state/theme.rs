//! Light/dark theme preference.
//!
//! The toggle control is the single source of truth on the page: checked
//! means dark. The preference is persisted as the strings `dark` / `light`.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use std::cell::RefCell;
use std::collections::HashMap;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Parse a stored preference. Anything other than `dark` or `light` is
    /// treated as no preference.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "dark" => Some(Self::Dark),
            "light" => Some(Self::Light),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    #[must_use]
    pub fn from_checked(checked: bool) -> Self {
        if checked { Self::Dark } else { Self::Light }
    }

    #[must_use]
    pub fn is_checked(self) -> bool {
        self == Self::Dark
    }
}

/// Key-value store that outlives the page session.
///
/// Writes are best-effort: an unavailable store just means the preference
/// is not remembered.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
}

/// In-memory store used off-browser and in tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: RefCell<HashMap<String, String>>,
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.values.borrow_mut().insert(key.to_owned(), value.to_owned());
    }
}

/// Stored theme under `key`, if any.
pub fn read_preference(store: &dyn PreferenceStore, key: &str) -> Option<Theme> {
    store.get(key).as_deref().and_then(Theme::parse)
}

/// Toggle state to show at startup, or `None` to leave the control's
/// default untouched.
pub fn initial_checked(store: &dyn PreferenceStore, key: &str) -> Option<bool> {
    read_preference(store, key).map(Theme::is_checked)
}

/// Persist the theme matching a user-driven toggle change.
pub fn record_toggle(store: &dyn PreferenceStore, key: &str, checked: bool) -> Theme {
    let theme = Theme::from_checked(checked);
    store.set(key, theme.as_str());
    theme
}
