//! Origin-scoped `localStorage` access.
//!
//! Reads and writes are best-effort: private browsing modes and disabled
//! storage simply mean nothing is remembered.

use crate::state::theme::PreferenceStore;
#[cfg(not(feature = "csr"))]
use crate::state::theme::MemoryStore;

/// `window.localStorage`, resolved on every access.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

#[cfg(feature = "csr")]
fn storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl PreferenceStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        #[cfg(feature = "csr")]
        {
            storage()?.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
            None
        }
    }

    fn set(&self, key: &str, value: &str) {
        #[cfg(feature = "csr")]
        {
            let Some(storage) = storage() else {
                return;
            };
            if storage.set_item(key, value).is_err() {
                log::debug!("localStorage write for {key} rejected");
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (key, value);
        }
    }
}

/// Store backing the theme preference in this build.
pub fn preference_store() -> Box<dyn PreferenceStore> {
    #[cfg(feature = "csr")]
    {
        Box::new(LocalStorage)
    }
    #[cfg(not(feature = "csr"))]
    {
        Box::new(MemoryStore::default())
    }
}
