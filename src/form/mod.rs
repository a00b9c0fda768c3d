//! Contact form validation.
//!
//! SYSTEM CONTEXT
//! ==============
//! `validation`, `masking` and `countdown` are pure and decide everything
//! about field values. `controller` only reads values out of the DOM, feeds
//! them through those functions and writes the results back.

pub mod controller;
pub mod countdown;
pub mod masking;
pub mod validation;
