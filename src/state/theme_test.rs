use super::*;

const KEY: &str = "preferred-theme";

#[test]
fn parse_accepts_only_known_values() {
    assert_eq!(Theme::parse("dark"), Some(Theme::Dark));
    assert_eq!(Theme::parse("light"), Some(Theme::Light));
    assert_eq!(Theme::parse("Dark"), None);
    assert_eq!(Theme::parse(""), None);
}

#[test]
fn checked_maps_to_dark() {
    assert_eq!(Theme::from_checked(true), Theme::Dark);
    assert_eq!(Theme::from_checked(false), Theme::Light);
    assert!(Theme::Dark.is_checked());
    assert!(!Theme::Light.is_checked());
}

#[test]
fn initial_checked_leaves_default_when_nothing_stored() {
    let store = MemoryStore::default();
    assert_eq!(initial_checked(&store, KEY), None);
}

#[test]
fn initial_checked_reflects_stored_preference() {
    let store = MemoryStore::default();
    store.set(KEY, "dark");
    assert_eq!(initial_checked(&store, KEY), Some(true));
    store.set(KEY, "light");
    assert_eq!(initial_checked(&store, KEY), Some(false));
}

#[test]
fn initial_checked_ignores_garbage() {
    let store = MemoryStore::default();
    store.set(KEY, "solarized");
    assert_eq!(initial_checked(&store, KEY), None);
}

#[test]
fn record_toggle_writes_back_and_round_trips() {
    let store = MemoryStore::default();
    assert_eq!(record_toggle(&store, KEY, true), Theme::Dark);
    assert_eq!(store.get(KEY).as_deref(), Some("dark"));
    assert_eq!(read_preference(&store, KEY), Some(Theme::Dark));

    record_toggle(&store, KEY, false);
    assert_eq!(store.get(KEY).as_deref(), Some("light"));
}
