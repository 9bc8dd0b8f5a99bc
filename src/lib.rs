//! UI Demo Library
//!
//! This crate provides the application logic for the UI Demo, a single-screen
//! showcase of a touchable button, a modal dialog, a remote image, a counter
//! button and a static list.

rust_i18n::i18n!("locales", fallback = "en");

pub mod app;
pub mod assets;
pub mod components;
pub mod constants;
pub mod domain;
pub mod error;
pub mod features;
pub mod helpers;
pub mod i18n;
pub mod services;
pub mod state;
pub mod theme;
