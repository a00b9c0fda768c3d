use super::*;

#[test]
fn defaults_match_conventional_hookups() {
    let config = SiteConfig::default();
    assert_eq!(config.theme_storage_key, "preferred-theme");
    assert_eq!(config.error_log_field_id, "form-errors-field");
    assert_eq!(config.soft_nav_header_name, "X-Requested-With");
    assert_eq!(config.soft_nav_header_value, "view-transition");
    assert_eq!(config.flash_ms, 200);
    assert_eq!(config.countdown_warning, 50);
    assert_eq!(config.log_level().ok(), Some(log::Level::Warn));
}

#[test]
fn from_json_overrides_only_given_keys() {
    let config = SiteConfig::from_json(r#"{"flashMs": 350, "formId": "hire-me"}"#).unwrap();
    assert_eq!(config.flash_ms, 350);
    assert_eq!(config.form_id, "hire-me");
    assert_eq!(config.name_field_id, "name");
    assert_eq!(config.active_class, "active");
}

#[test]
fn from_json_ignores_unknown_keys() {
    let config = SiteConfig::from_json(r#"{"somethingElse": true}"#).unwrap();
    assert_eq!(config, SiteConfig::default());
}

#[test]
fn from_json_rejects_malformed_input() {
    assert!(matches!(SiteConfig::from_json("{not json"), Err(ConfigError::Parse(_))));
    assert!(matches!(SiteConfig::from_json(r#"{"flashMs": "slow"}"#), Err(ConfigError::Parse(_))));
}

#[test]
fn from_json_rejects_unknown_log_level() {
    let err = SiteConfig::from_json(r#"{"logLevel": "chatty"}"#).unwrap_err();
    assert!(matches!(err, ConfigError::LogLevel(ref level) if level == "chatty"));
}

#[test]
fn log_level_is_case_insensitive() {
    let config = SiteConfig::from_json(r#"{"logLevel": "DEBUG"}"#).unwrap();
    assert_eq!(config.log_level().ok(), Some(log::Level::Debug));
}

#[cfg(not(feature = "csr"))]
#[test]
fn load_falls_back_to_defaults_off_browser() {
    assert_eq!(SiteConfig::load().unwrap(), SiteConfig::default());
}
