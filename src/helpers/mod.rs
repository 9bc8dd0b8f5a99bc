//! Helper Utilities
//!
//! Common utilities used across the application.

mod fs;
mod log_filter;

pub use fs::*;
pub use log_filter::*;
