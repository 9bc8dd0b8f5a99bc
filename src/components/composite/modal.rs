//! Modal Component
//!
//! A dimmed full-size backdrop with a centered card. Rendering it at all is
//! the caller's decision; the modal only reports presses on the backdrop.

use gpui::{
    AnyElement, App, FontWeight, InteractiveElement, IntoElement, MouseButton, MouseDownEvent,
    ParentElement, RenderOnce, SharedString, Styled, Window, div, prelude::*, px,
};

use crate::theme::colors::DemoColors;
use crate::theme::typography::Typography;

/// Modal component
#[derive(IntoElement)]
pub struct Modal {
    title: SharedString,
    children: Vec<AnyElement>,
    on_close: Option<Box<dyn Fn(&mut Window, &mut App) + 'static>>,
}

impl Modal {
    /// Create a new modal
    pub fn new(title: impl Into<SharedString>) -> Self {
        Self {
            title: title.into(),
            children: Vec::new(),
            on_close: None,
        }
    }

    /// Add a child element
    pub fn child(mut self, child: impl IntoElement) -> Self {
        self.children.push(child.into_any_element());
        self
    }

    /// Called when the user presses the backdrop outside the card
    pub fn on_close(mut self, handler: impl Fn(&mut Window, &mut App) + 'static) -> Self {
        self.on_close = Some(Box::new(handler));
        self
    }
}

impl RenderOnce for Modal {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        // Backdrop
        div()
            .id("modal-backdrop")
            .absolute()
            .inset_0()
            .occlude()
            .bg(DemoColors::modal_backdrop())
            .when_some(self.on_close, |el, handler| {
                el.on_mouse_down(MouseButton::Left, move |_event: &MouseDownEvent, window, cx| {
                    handler(window, cx);
                })
            })
            .flex()
            .items_center()
            .justify_center()
            .child(
                // Modal card
                div()
                    .m(px(20.0))
                    .p(px(20.0))
                    .bg(DemoColors::modal_bg())
                    .rounded(px(5.0))
                    .shadow_lg()
                    .flex()
                    .flex_col()
                    // Presses inside the card never reach the backdrop
                    .on_mouse_down(MouseButton::Left, |_event: &MouseDownEvent, _window, cx| {
                        cx.stop_propagation();
                    })
                    .child(
                        div()
                            .mb(px(15.0))
                            .text_size(px(Typography::TEXT_LG))
                            .font_weight(FontWeight::BOLD)
                            .text_color(DemoColors::text_primary())
                            .child(self.title),
                    )
                    .children(self.children),
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modal_builder() {
        let modal = Modal::new("Title").child(div()).child(div());
        assert_eq!(modal.title.as_ref(), "Title");
        assert_eq!(modal.children.len(), 2);
        assert!(modal.on_close.is_none());

        let modal = modal.on_close(|_, _| {});
        assert!(modal.on_close.is_some());
    }
}
