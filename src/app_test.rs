#![cfg(not(feature = "csr"))]

use super::*;

#[test]
fn site_clones_share_config_and_error_log() {
    let site = Site::new(SiteConfig::default());
    let copy = site.clone();
    copy.errors.record("name", "x", "Illegal character typed", "t".into());
    assert_eq!(site.errors.len(), 1);
    assert!(Rc::ptr_eq(&site.config, &copy.config));
}

#[test]
fn init_content_finds_nothing_off_browser() {
    let site = Site::new(SiteConfig::default());
    assert_eq!(init_content(&site), ContentReport::default());
}

#[test]
fn reinitialising_content_keeps_the_error_history() {
    let site = Site::new(SiteConfig::default());
    site.errors.record("email", "", "Email is required.", "t".into());
    init_content(&site);
    init_content(&site);
    assert_eq!(site.errors.len(), 1);
}

#[test]
fn boot_is_safe_off_browser() {
    boot();
}
