//! Same-origin page navigation without full reloads.
//!
//! SYSTEM CONTEXT
//! ==============
//! `page_fetch` retrieves and parses the target page; `soft_nav` decides which
//! clicks to intercept and splices the fetched content into the live page.

pub mod page_fetch;
pub mod soft_nav;
