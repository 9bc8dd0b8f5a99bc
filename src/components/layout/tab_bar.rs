//! Tab Bar Component
//!
//! Bottom navigation bar listing every registered page.

use gpui::{
    ClickEvent, Context, InteractiveElement, IntoElement, ParentElement, Render, SharedString,
    StatefulInteractiveElement, Styled, Window, div, px,
};
use gpui_component::Icon;

use crate::app::entities::AppEntities;
use crate::app::navigation::ActivePage;
use crate::constants::TAB_BAR_HEIGHT;
use crate::i18n::{Locale, tr};
use crate::theme::colors::DemoColors;
use crate::theme::typography::Typography;

/// Tab bar component
pub struct TabBar {
    entities: AppEntities,
}

impl TabBar {
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        cx.observe(&entities.i18n, |_this, _, cx| cx.notify())
            .detach();
        cx.observe(&entities.tabs, |_this, _, cx| cx.notify())
            .detach();

        Self { entities }
    }

    fn render_tab(
        &self,
        page: ActivePage,
        locale: Locale,
        active_page: ActivePage,
    ) -> impl IntoElement {
        let is_active = page == active_page;
        let label = tr(locale, page.tab_title_key());
        let entities = self.entities.clone();

        let tint = if is_active {
            DemoColors::tab_active()
        } else {
            DemoColors::tab_inactive()
        };

        div()
            .id(SharedString::from(format!("tab-{:?}", page)))
            .flex_1()
            .h_full()
            .flex()
            .flex_col()
            .items_center()
            .justify_center()
            .gap_1()
            .text_color(tint)
            .cursor_pointer()
            .on_click(move |_event: &ClickEvent, _window, cx| {
                entities.tabs.update(cx, |tabs, cx| {
                    if tabs.set_active_page(page) {
                        tracing::debug!(page = ?page, "Tab selected");
                        cx.notify();
                    }
                });
            })
            .child(Icon::from(page.icon()).text_color(tint))
            .child(
                div()
                    .text_size(px(Typography::TEXT_XS))
                    .child(label),
            )
    }
}

impl Render for TabBar {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let locale = self.entities.i18n.read(cx).locale;
        let active_page = self.entities.tabs.read(cx).active_page;

        div()
            .h(px(TAB_BAR_HEIGHT))
            .w_full()
            .flex_none()
            .flex()
            .flex_row()
            .bg(DemoColors::bar_bg())
            .border_t_1()
            .border_color(DemoColors::border())
            .children(
                ActivePage::all()
                    .iter()
                    .map(|page| self.render_tab(*page, locale, active_page)),
            )
    }
}
