//! # folio
//!
//! WASM enhancement layer for a static portfolio site. The HTML pages work
//! without it; when loaded, it adds a remembered light/dark toggle, live
//! contact form validation, project cards rendered from static data, and
//! same-origin soft navigation wrapped in a view transition.
//!
//! Pure logic (validation, masking, card models, nav matching) compiles and
//! is tested natively. Browser glue lives behind the `csr` feature.

pub mod app;
pub mod components;
pub mod config;
pub mod form;
pub mod net;
pub mod state;
pub mod util;

/// WASM entry point, run once per full page load.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    app::boot();
}
