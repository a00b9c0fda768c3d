//! Site hookup configuration.
//!
//! Every element id, selector and tuning constant the controllers rely on
//! lives in [`SiteConfig`]. Defaults match the conventional page markup; a
//! page may override any subset with an inline JSON block:
//!
//! ```html
//! <script type="application/json" id="folio-config">{"flashMs": 300}</script>
//! ```

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

/// Id of the optional inline JSON block holding config overrides.
pub const CONFIG_ELEMENT_ID: &str = "folio-config";

pub const DEFAULT_THEME_STORAGE_KEY: &str = "preferred-theme";
pub const DEFAULT_FLASH_MS: u32 = 200;
pub const DEFAULT_COUNTDOWN_WARNING: usize = 50;

/// Errors produced while loading configuration overrides.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The override block was not valid JSON for [`SiteConfig`].
    #[error("config parse failed: {0}")]
    Parse(#[from] serde_json::Error),

    /// `logLevel` named something other than a `log` level.
    #[error("unknown log level: {0}")]
    LogLevel(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SiteConfig {
    pub theme_toggle_id: String,
    pub theme_storage_key: String,

    pub form_id: String,
    pub name_field_id: String,
    pub email_field_id: String,
    pub message_field_id: String,
    pub error_output_id: String,
    pub info_output_id: String,
    pub error_log_field_id: String,
    pub char_count_id: String,
    pub flash_class: String,
    pub flash_ms: u32,
    pub countdown_warning: usize,
    pub countdown_warning_color: String,
    pub countdown_warning_weight: String,

    pub project_cards_id: String,
    pub project_card_tag: String,

    pub soft_nav_link_selector: String,
    pub soft_nav_header_name: String,
    pub soft_nav_header_value: String,
    pub nav_link_selector: String,
    pub active_class: String,

    pub log_level: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            theme_toggle_id: "theme-toggle".into(),
            theme_storage_key: DEFAULT_THEME_STORAGE_KEY.into(),
            form_id: "contact-form".into(),
            name_field_id: "name".into(),
            email_field_id: "email".into(),
            message_field_id: "message".into(),
            error_output_id: "error-output".into(),
            info_output_id: "info-output".into(),
            error_log_field_id: "form-errors-field".into(),
            char_count_id: "char-count".into(),
            flash_class: "field-flash".into(),
            flash_ms: DEFAULT_FLASH_MS,
            countdown_warning: DEFAULT_COUNTDOWN_WARNING,
            countdown_warning_color: "crimson".into(),
            countdown_warning_weight: "600".into(),
            project_cards_id: "project-cards".into(),
            project_card_tag: "project-card".into(),
            soft_nav_link_selector: "a[data-view-transition]".into(),
            soft_nav_header_name: "X-Requested-With".into(),
            soft_nav_header_value: "view-transition".into(),
            nav_link_selector: "nav a".into(),
            active_class: "active".into(),
            log_level: "warn".into(),
        }
    }
}

impl SiteConfig {
    /// Parse an override block. Missing keys keep their defaults and unknown
    /// keys are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON or mistyped values
    /// and [`ConfigError::LogLevel`] for an unrecognised `logLevel`.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.log_level()?;
        Ok(config)
    }

    /// Configured console log level.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::LogLevel`] if `log_level` is not a level name.
    pub fn log_level(&self) -> Result<log::Level, ConfigError> {
        self.log_level
            .trim()
            .parse::<log::Level>()
            .map_err(|_| ConfigError::LogLevel(self.log_level.clone()))
    }

    /// Load config from the page. A page without an override block gets the
    /// defaults.
    ///
    /// # Errors
    ///
    /// Returns the [`from_json`](Self::from_json) error for an invalid
    /// override block.
    pub fn load() -> Result<Self, ConfigError> {
        #[cfg(feature = "csr")]
        {
            match crate::util::dom::by_id(CONFIG_ELEMENT_ID).and_then(|el| el.text_content()) {
                Some(raw) => Self::from_json(&raw),
                None => Ok(Self::default()),
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            Ok(Self::default())
        }
    }
}
