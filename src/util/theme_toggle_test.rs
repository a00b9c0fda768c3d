#![cfg(not(feature = "csr"))]

use super::*;
use crate::state::theme::PreferenceStore;
use crate::util::storage::{LocalStorage, preference_store};

#[test]
fn install_is_noop_off_browser() {
    assert!(!install(&SiteConfig::default()));
}

#[test]
fn local_storage_reads_nothing_off_browser() {
    LocalStorage.set("preferred-theme", "dark");
    assert_eq!(LocalStorage.get("preferred-theme"), None);
}

#[test]
fn preference_store_off_browser_remembers_within_session() {
    let store = preference_store();
    store.set("preferred-theme", "dark");
    assert_eq!(store.get("preferred-theme").as_deref(), Some("dark"));
}

#[test]
fn now_iso_is_epoch_off_browser() {
    assert_eq!(crate::util::time::now_iso(), "1970-01-01T00:00:00.000Z");
}
