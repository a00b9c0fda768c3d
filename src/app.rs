//! Page-load entry point and shared context.
//!
//! [`boot`] runs once per full page load: it sets up console logging, wires
//! the theme toggle and soft navigation, then initialises the content
//! controllers. Soft navigation calls [`init_content`] again after every
//! swap, because those controllers hold references into `<main>`.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use std::rc::Rc;

use crate::components::project_list;
use crate::config::SiteConfig;
use crate::form::controller as contact_form;
use crate::state::error_log::ErrorLog;

/// Context shared by every controller for the lifetime of the page.
#[derive(Clone, Debug)]
pub struct Site {
    pub config: Rc<SiteConfig>,
    /// Form error history, kept across soft navigations.
    pub errors: ErrorLog,
}

impl Site {
    #[must_use]
    pub fn new(config: SiteConfig) -> Self {
        Self { config: Rc::new(config), errors: ErrorLog::new() }
    }
}

/// Which controllers found their hookups on the current content.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ContentReport {
    pub contact_form: bool,
    pub project_cards: usize,
}

/// (Re-)initialise the controllers bound to `<main>` content.
pub fn init_content(site: &Site) -> ContentReport {
    ContentReport {
        contact_form: contact_form::install(&site.config, &site.errors),
        project_cards: project_list::install(&site.config),
    }
}

/// Full page-load initialisation.
pub fn boot() {
    let (config, config_error) = match SiteConfig::load() {
        Ok(config) => (config, None),
        Err(e) => (SiteConfig::default(), Some(e)),
    };
    init_logging(&config);
    if let Some(e) = config_error {
        log::warn!("ignoring #{}: {e}", crate::config::CONFIG_ELEMENT_ID);
    }

    let site = Site::new(config);
    crate::util::theme_toggle::install(&site.config);
    crate::net::soft_nav::install(&site);
    let report = init_content(&site);
    log::debug!("page initialised: {report:?}");
}

fn init_logging(config: &SiteConfig) {
    #[cfg(feature = "csr")]
    {
        let level = config.log_level().unwrap_or(log::Level::Warn);
        if console_log::init_with_level(level).is_err() {
            return;
        }
        log::debug!("console logging at {level}");
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = config;
    }
}
