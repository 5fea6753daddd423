//! CLI library components for the storefront host.

pub mod logging;
pub mod script;
pub mod summary;
