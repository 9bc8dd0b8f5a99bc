//! Domain - Plain Data Types
//!
//! Configuration and static content, free of any UI dependency beyond `Global`.

pub mod config;
pub mod sample;
