//! State - GPUI Entity State Modules
//!
//! Each state module represents a distinct piece of application state.
//! App-wide pieces live in `AppEntities`; screen-local pieces are owned by
//! the view that renders them.

pub mod demo_state;
pub mod i18n_state;
pub mod image_state;
pub mod tabs_state;
