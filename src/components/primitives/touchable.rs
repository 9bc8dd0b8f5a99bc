//! Touchable Component
//!
//! A filled button that fades while pressed instead of changing color.

use gpui::{
    App, ClickEvent, ElementId, InteractiveElement, IntoElement, ParentElement, RenderOnce,
    SharedString, StatefulInteractiveElement, Styled, Window, div, prelude::*, px,
};

use crate::theme::colors::DemoColors;
use crate::theme::typography::Typography;

/// Opacity applied while the pointer is held down
pub const DEFAULT_ACTIVE_OPACITY: f32 = 0.2;

/// A touchable with opacity feedback
#[derive(IntoElement)]
pub struct Touchable {
    id: ElementId,
    label: SharedString,
    active_opacity: f32,
    on_click: Option<Box<dyn Fn(&ClickEvent, &mut Window, &mut App) + 'static>>,
}

impl Touchable {
    /// Create a new touchable
    pub fn new(id: impl Into<ElementId>, label: impl Into<SharedString>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            active_opacity: DEFAULT_ACTIVE_OPACITY,
            on_click: None,
        }
    }

    /// Set the click handler
    pub fn on_click(
        mut self,
        handler: impl Fn(&ClickEvent, &mut Window, &mut App) + 'static,
    ) -> Self {
        self.on_click = Some(Box::new(handler));
        self
    }
}

impl RenderOnce for Touchable {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let active_opacity = self.active_opacity;

        div()
            .id(self.id)
            .w_full()
            .p(px(10.0))
            .bg(DemoColors::touchable_bg())
            .rounded(px(5.0))
            .flex()
            .items_center()
            .justify_center()
            .text_color(DemoColors::text_light())
            .text_size(px(Typography::TEXT_BASE))
            .cursor_pointer()
            .active(move |s| s.opacity(active_opacity))
            .when_some(self.on_click, |el, handler| el.on_click(handler))
            .child(self.label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_touchable_fades_to_default_opacity() {
        let touchable = Touchable::new("t", "x");
        assert_eq!(touchable.active_opacity, DEFAULT_ACTIVE_OPACITY);
        assert!(touchable.on_click.is_none());
    }
}
