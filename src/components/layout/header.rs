//! Header Component
//!
//! Title of the active page and the language switcher.

use gpui::{
    ClickEvent, Context, FontWeight, InteractiveElement, IntoElement, ParentElement, Render,
    StatefulInteractiveElement, Styled, Window, div, px, rgba,
};

use crate::app::actions::LocaleAction;
use crate::app::entities::AppEntities;
use crate::constants::HEADER_HEIGHT;
use crate::i18n::tr;
use crate::theme::colors::DemoColors;
use crate::theme::typography::Typography;

/// Header component
pub struct Header {
    entities: AppEntities,
}

impl Header {
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        // Observe i18n changes
        cx.observe(&entities.i18n, |_this, _, cx| cx.notify())
            .detach();

        // Observe tabs changes
        cx.observe(&entities.tabs, |_this, _, cx| cx.notify())
            .detach();

        Self { entities }
    }
}

impl Render for Header {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let locale = self.entities.i18n.read(cx).locale;
        let page = self.entities.tabs.read(cx).active_page;
        let title = tr(locale, page.header_title_key());
        let next_locale = locale.toggled();

        div()
            .h(px(HEADER_HEIGHT))
            .w_full()
            .flex_none()
            .bg(DemoColors::bar_bg())
            .border_b_1()
            .border_color(DemoColors::border())
            .flex()
            .items_center()
            .justify_between()
            .px_4()
            .child(
                div()
                    .text_color(DemoColors::text_primary())
                    .text_size(px(Typography::TEXT_LG))
                    .font_weight(FontWeight::SEMIBOLD)
                    .child(title),
            )
            // Language switcher
            .child(
                div()
                    .id("lang-switcher")
                    .px_3()
                    .py_1()
                    .rounded_md()
                    .text_color(DemoColors::tab_active())
                    .text_size(px(13.0))
                    .cursor_pointer()
                    .hover(|s| s.bg(rgba(0x007aff14)))
                    .on_click(move |_event: &ClickEvent, window, cx| {
                        window.dispatch_action(Box::new(LocaleAction::from(next_locale)), cx);
                    })
                    .child(next_locale.display_name()),
            )
    }
}
