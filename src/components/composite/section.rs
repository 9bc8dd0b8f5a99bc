//! Section Component
//!
//! Gray card with a numbered title, a one-line description and its widget.

use gpui::{
    AnyElement, App, FontWeight, IntoElement, ParentElement, RenderOnce, SharedString, Styled,
    Window, div, px,
};

use crate::theme::colors::DemoColors;
use crate::theme::typography::Typography;

#[derive(IntoElement)]
pub struct Section {
    title: SharedString,
    description: SharedString,
    children: Vec<AnyElement>,
}

impl Section {
    pub fn new(title: impl Into<SharedString>, description: impl Into<SharedString>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            children: Vec::new(),
        }
    }

    /// Add a child element below the description
    pub fn child(mut self, child: impl IntoElement) -> Self {
        self.children.push(child.into_any_element());
        self
    }
}

impl RenderOnce for Section {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        div()
            .w_full()
            .flex()
            .flex_col()
            .bg(DemoColors::section_bg())
            .p(px(15.0))
            .mb(px(15.0))
            .rounded(px(5.0))
            .child(
                div()
                    .mb(px(10.0))
                    .text_size(px(Typography::TEXT_BASE))
                    .font_weight(FontWeight::BOLD)
                    .text_color(DemoColors::section_title())
                    .child(self.title),
            )
            .child(
                div()
                    .mb(px(15.0))
                    .text_size(px(Typography::TEXT_SM))
                    .text_color(DemoColors::text_primary())
                    .child(self.description),
            )
            .children(self.children)
    }
}
