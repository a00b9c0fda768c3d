//! Browser glue shared across controllers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate `web-sys` access from the controllers so the
//! decision logic they call stays testable off-browser.

#[cfg(feature = "csr")]
pub mod dom;
pub mod storage;
pub mod theme_toggle;
pub mod time;
