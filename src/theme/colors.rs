//! Colors - Demo Theme Colors

use gpui::{Rgba, rgb, rgba};

/// Demo color palette - All colors are accessed via associated functions
pub struct DemoColors;

impl DemoColors {
    // Background colors
    /// Screen background
    pub fn background() -> Rgba { rgb(0xffffff) }
    /// Section card background
    pub fn section_bg() -> Rgba { rgb(0xf0f0f0) }
    /// List row background
    pub fn list_item_bg() -> Rgba { rgb(0xffffff) }
    /// Image placeholder while loading or after a failure
    pub fn image_placeholder() -> Rgba { rgb(0xd9d9d9) }

    // Text colors
    /// Primary text
    pub fn text_primary() -> Rgba { rgb(0x000000) }
    /// Secondary text (captions, descriptions in lists)
    pub fn text_secondary() -> Rgba { rgb(0x808080) }
    /// Section titles
    pub fn section_title() -> Rgba { rgb(0x0000ff) }
    /// Light text (on dark backgrounds)
    pub fn text_light() -> Rgba { rgb(0xffffff) }

    // Touchable button
    /// Touchable background
    pub fn touchable_bg() -> Rgba { rgb(0x0000ff) }

    // Shell colors
    /// Header and tab bar background
    pub fn bar_bg() -> Rgba { rgb(0xffffff) }
    /// Default border
    pub fn border() -> Rgba { rgb(0xd8d8d8) }
    /// Active tab tint
    pub fn tab_active() -> Rgba { rgb(0x007aff) }
    /// Inactive tab tint
    pub fn tab_inactive() -> Rgba { rgb(0x8e8e93) }

    // Modal colors
    /// Modal backdrop - 50% black
    pub fn modal_backdrop() -> Rgba { rgba(0x00000080) }
    /// Modal card background
    pub fn modal_bg() -> Rgba { rgb(0xffffff) }
}
