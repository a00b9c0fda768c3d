//! Theme toggle initialization and persistence.
//!
//! Reflects the stored preference into the `#theme-toggle` checkbox at page
//! load and writes the preference back on every change. The stylesheet
//! reacts to the checkbox itself; nothing else on the page is touched.
//!
//! TRADE-OFFS
//! ==========
//! Persistence is best-effort browser-only behavior; without a toggle on the
//! page, or off-browser, installation is a no-op.

#[cfg(test)]
#[path = "theme_toggle_test.rs"]
mod theme_toggle_test;

use crate::config::SiteConfig;
#[cfg(feature = "csr")]
use crate::state::theme;
#[cfg(feature = "csr")]
use crate::util::{dom, storage};

/// Wire the theme toggle. Returns `true` if a toggle was found.
pub fn install(config: &SiteConfig) -> bool {
    #[cfg(feature = "csr")]
    {
        let Some(toggle) = dom::by_id_as::<web_sys::HtmlInputElement>(&config.theme_toggle_id) else {
            log::debug!("no #{} on this page; theme toggle disabled", config.theme_toggle_id);
            return false;
        };

        let store = storage::preference_store();
        if let Some(checked) = theme::initial_checked(store.as_ref(), &config.theme_storage_key) {
            toggle.set_checked(checked);
        }

        let key = config.theme_storage_key.clone();
        let source = toggle.clone();
        dom::listen(&toggle, "change", move |_| {
            let theme = theme::record_toggle(store.as_ref(), &key, source.checked());
            log::debug!("theme preference set to {}", theme.as_str());
        });
        true
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = config;
        false
    }
}
