//! Workspace - Main Shell with Header, Active Page and Tab Bar
//!
//! The workspace is the window's first-level view. It mounts the active page,
//! any full-window overlay the page shows, and the notification layer
//! provided by `gpui-component`.

use gpui::{AnyElement, AppContext, Context, Entity, IntoElement, ParentElement, Render, Styled, Window, div};
use gpui_component::Root;

use crate::app::entities::AppEntities;
use crate::app::navigation::ActivePage;
use crate::components::layout::header::Header;
use crate::components::layout::tab_bar::TabBar;
use crate::features::ui_demo::page::UiComponentsDemo;
use crate::theme::colors::DemoColors;

/// Main workspace containing the application layout
pub struct Workspace {
    entities: AppEntities,
    header: Entity<Header>,
    tab_bar: Entity<TabBar>,
    // Page views are created on first visit and cached
    ui_demo_page: Option<Entity<UiComponentsDemo>>,
}

impl Workspace {
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        let header = cx.new(|cx| Header::new(entities.clone(), cx));
        let tab_bar = cx.new(|cx| TabBar::new(entities.clone(), cx));

        // Observe tabs state for page changes
        cx.observe(&entities.tabs, |_this, _, cx| cx.notify())
            .detach();

        Self {
            entities,
            header,
            tab_bar,
            ui_demo_page: None,
        }
    }

    /// Get or create the view for the given page
    fn page_element(&mut self, page: ActivePage, cx: &mut Context<Self>) -> AnyElement {
        match page {
            ActivePage::UiDemo => {
                let entities = self.entities.clone();
                self.ui_demo_page
                    .get_or_insert_with(|| {
                        let page = cx.new(|cx| UiComponentsDemo::new(entities, cx));
                        // Re-render when the page opens or closes its modal
                        cx.observe(&page, |_this, _, cx| cx.notify()).detach();
                        page
                    })
                    .clone()
                    .into_any_element()
            }
        }
    }

    /// Overlay owned by the given page, mounted above header and tab bar
    fn page_overlay(&mut self, page: ActivePage, cx: &mut Context<Self>) -> Option<AnyElement> {
        match page {
            ActivePage::UiDemo => self.ui_demo_page.clone().and_then(|page| {
                page.update(cx, |page, cx| page.modal_overlay(cx))
                    .map(IntoElement::into_any_element)
            }),
        }
    }
}

impl Render for Workspace {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let active_page = self.entities.tabs.read(cx).active_page;
        let content = self.page_element(active_page, cx);
        let overlay = self.page_overlay(active_page, cx);

        div()
            .relative()
            .size_full()
            .flex()
            .flex_col()
            .bg(DemoColors::background())
            .child(self.header.clone())
            .child(
                // Content
                div()
                    .flex_1()
                    .flex()
                    .flex_col()
                    .overflow_hidden()
                    .child(content),
            )
            .child(self.tab_bar.clone())
            .children(overlay)
            .children(Root::render_notification_layer(window, cx))
    }
}
