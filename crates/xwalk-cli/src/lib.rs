//! CLI library components for the unit crosswalk.

pub mod config;
pub mod logging;
