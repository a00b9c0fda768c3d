//! Page-session state and static data.
//!
//! DESIGN
//! ======
//! State is split by concern (`theme`, `error_log`, `projects`) so each
//! controller depends only on the small model it drives.

pub mod error_log;
pub mod projects;
pub mod theme;
