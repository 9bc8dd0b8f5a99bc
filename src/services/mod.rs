//! Services - Background Work
//!
//! The only background activity is the one-shot remote image fetch.

pub mod image_loader;
