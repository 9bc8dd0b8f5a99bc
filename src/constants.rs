//! UI Constants
//!
//! Centralized UI constants for consistent layout across the application.

/// Default window dimensions (portrait, phone-like)
pub const DEFAULT_WINDOW_WIDTH: f32 = 420.0;
pub const DEFAULT_WINDOW_HEIGHT: f32 = 820.0;
pub const MIN_WINDOW_WIDTH: f32 = 320.0;
pub const MIN_WINDOW_HEIGHT: f32 = 480.0;

/// Header and bottom tab bar heights
pub const HEADER_HEIGHT: f32 = 48.0;
pub const TAB_BAR_HEIGHT: f32 = 56.0;

/// Remote image shown in the image section
pub const DEFAULT_IMAGE_URL: &str = "https://picsum.photos/200/150";
pub const IMAGE_WIDTH: f32 = 200.0;
pub const IMAGE_HEIGHT: f32 = 150.0;
pub const IMAGE_FETCH_TIMEOUT_SECS: u64 = 15;

/// Static list container height cap
pub const LIST_MAX_HEIGHT: f32 = 150.0;

/// Key context used by the demo page for modal dismissal
pub const DEMO_KEY_CONTEXT: &str = "UiDemo";
