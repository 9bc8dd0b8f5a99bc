//! UI Components Demo
//!
//! The one screen of the app: five sections, each demonstrating a widget.

pub mod page;
