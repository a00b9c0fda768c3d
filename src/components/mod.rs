//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components turn static project data into card markup and mount it into
//! the page's existing container elements.

pub mod project_card;
pub mod project_list;
