//! Layout Components
//!
//! Header and bottom tab bar of the navigation shell.

pub mod header;
pub mod tab_bar;
