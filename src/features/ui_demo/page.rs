//! UI Components Demo Page
//!
//! Scrollable column of five sections: touchable, modal, image, counter
//! button and static list. Owns the screen-local `DemoState`.

use gpui::{
    App, AppContext, ClickEvent, Context, Entity, FocusHandle, FontWeight, InteractiveElement, IntoElement,
    ParentElement, Render, SharedString, StatefulInteractiveElement, Styled, Subscription, Window,
    div, px,
};
use gpui_component::{
    WindowExt,
    button::{Button, ButtonVariants},
    notification::Notification,
};
use tracing::{debug, info};

use crate::app::actions::DismissModal;
use crate::app::entities::AppEntities;
use crate::components::composite::modal::Modal;
use crate::components::composite::section::Section;
use crate::components::primitives::remote_image::RemoteImage;
use crate::components::primitives::touchable::Touchable;
use crate::constants::{
    DEFAULT_IMAGE_URL, DEMO_KEY_CONTEXT, IMAGE_HEIGHT, IMAGE_WIDTH, LIST_MAX_HEIGHT,
};
use crate::domain::config::DemoConfig;
use crate::domain::sample::{SAMPLE_ITEMS, SampleItem};
use crate::i18n::{Locale, press_count_label, press_notification, tr};
use crate::state::demo_state::{DemoState, ModalClose};
use crate::theme::colors::DemoColors;
use crate::theme::typography::Typography;

/// UI components demo page
pub struct UiComponentsDemo {
    entities: AppEntities,
    state: DemoState,
    image: Entity<RemoteImage>,
    focus_handle: FocusHandle,
    _subscriptions: Vec<Subscription>,
}

impl UiComponentsDemo {
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        let image_url: SharedString = cx
            .try_global::<DemoConfig>()
            .map(|config| config.image_url.clone())
            .unwrap_or_else(|| DEFAULT_IMAGE_URL.to_string())
            .into();
        let image = cx.new(|cx| RemoteImage::new(image_url, IMAGE_WIDTH, IMAGE_HEIGHT, cx));

        // Observe i18n changes
        let subscriptions = vec![cx.observe(&entities.i18n, |_this, _, cx| cx.notify())];

        info!("UI components demo mounted");

        Self {
            entities,
            state: DemoState::new(),
            image,
            focus_handle: cx.focus_handle(),
            _subscriptions: subscriptions,
        }
    }

    fn locale(&self, cx: &App) -> Locale {
        self.entities.i18n.read(cx).locale
    }

    fn on_touchable(&mut self, _: &ClickEvent, window: &mut Window, cx: &mut Context<Self>) {
        let locale = self.locale(cx);
        debug!("Touchable activated");
        window.push_notification(
            Notification::info(tr(locale, "demo.touchable.alert_message"))
                .title(tr(locale, "demo.touchable.alert_title")),
            cx,
        );
    }

    fn on_press_counter(&mut self, _: &ClickEvent, window: &mut Window, cx: &mut Context<Self>) {
        let count = self.state.press();
        info!(count, "Counter button pressed");

        let (title, message) = press_notification(self.locale(cx), count);
        window.push_notification(Notification::info(message).title(title), cx);
        cx.notify();
    }

    fn on_open_modal(&mut self, _: &ClickEvent, window: &mut Window, cx: &mut Context<Self>) {
        self.state.open_modal();
        // Escape is routed through this page's key context
        self.focus_handle.focus(window);
        debug!("Modal opened");
        cx.notify();
    }

    fn on_dismiss_modal(&mut self, _: &DismissModal, _window: &mut Window, cx: &mut Context<Self>) {
        self.close_modal(ModalClose::Dismissed, cx);
    }

    fn close_modal(&mut self, how: ModalClose, cx: &mut Context<Self>) {
        if self.state.close_modal() {
            debug!(how = how.label(), "Modal closed");
            cx.notify();
        }
    }

    fn render_heading(&self, locale: Locale) -> impl IntoElement {
        div()
            .w_full()
            .my(px(20.0))
            .text_center()
            .text_size(px(Typography::TEXT_XL))
            .font_weight(FontWeight::BOLD)
            .text_color(DemoColors::text_primary())
            .child(tr(locale, "demo.heading"))
    }

    fn render_touchable_section(&self, locale: Locale, cx: &mut Context<Self>) -> Section {
        Section::new(
            tr(locale, "demo.touchable.title"),
            tr(locale, "demo.touchable.description"),
        )
        .child(
            Touchable::new("touchable", tr(locale, "demo.touchable.button"))
                .on_click(cx.listener(Self::on_touchable)),
        )
    }

    fn render_modal_section(&self, locale: Locale, cx: &mut Context<Self>) -> Section {
        Section::new(
            tr(locale, "demo.modal.title"),
            tr(locale, "demo.modal.description"),
        )
        .child(
            Button::new("open-modal")
                .primary()
                .w_full()
                .label(tr(locale, "demo.modal.open"))
                .on_click(cx.listener(Self::on_open_modal)),
        )
    }

    fn render_image_section(&self, locale: Locale) -> Section {
        Section::new(
            tr(locale, "demo.image.title"),
            tr(locale, "demo.image.description"),
        )
        .child(
            div()
                .w_full()
                .flex()
                .flex_col()
                .items_center()
                .child(self.image.clone())
                .child(
                    div()
                        .mt(px(10.0))
                        .text_size(px(Typography::TEXT_XS))
                        .text_color(DemoColors::text_secondary())
                        .child(tr(locale, "demo.image.caption")),
                ),
        )
    }

    fn render_counter_section(&self, locale: Locale, cx: &mut Context<Self>) -> Section {
        Section::new(
            tr(locale, "demo.button.title"),
            tr(locale, "demo.button.description"),
        )
        .child(
            Button::new("press-counter")
                .primary()
                .w_full()
                .label(press_count_label(locale, self.state.press_count()))
                .on_click(cx.listener(Self::on_press_counter)),
        )
    }

    fn render_list_section(&self, locale: Locale) -> Section {
        Section::new(
            tr(locale, "demo.list.title"),
            tr(locale, "demo.list.description"),
        )
        .child(
            div()
                .id("sample-list")
                .w_full()
                .max_h(px(LIST_MAX_HEIGHT))
                .overflow_y_scroll()
                .flex()
                .flex_col()
                .children(SAMPLE_ITEMS.iter().map(render_list_item)),
        )
    }

    /// The modal overlay while it is visible. The workspace mounts it above
    /// the whole window so header and tab bar are covered too.
    pub fn modal_overlay(&mut self, cx: &mut Context<Self>) -> Option<Modal> {
        let locale = self.locale(cx);
        self.state
            .modal_visible()
            .then(|| self.render_modal(locale, cx))
    }

    fn render_modal(&self, locale: Locale, cx: &mut Context<Self>) -> Modal {
        let page = cx.entity().downgrade();

        Modal::new(tr(locale, "demo.modal.heading"))
            .child(
                div()
                    .mb(px(20.0))
                    .text_size(px(Typography::TEXT_SM))
                    .text_color(DemoColors::text_primary())
                    .child(tr(locale, "demo.modal.body")),
            )
            .child(
                Button::new("close-modal")
                    .primary()
                    .label(tr(locale, "demo.modal.close"))
                    .on_click(cx.listener(|this, _: &ClickEvent, _window, cx| {
                        this.close_modal(ModalClose::Button, cx);
                    })),
            )
            .on_close(move |_window, cx| {
                page.update(cx, |this, cx| this.close_modal(ModalClose::Dismissed, cx))
                    .ok();
            })
    }
}

fn render_list_item(item: &SampleItem) -> impl IntoElement {
    div()
        .w_full()
        .bg(DemoColors::list_item_bg())
        .p(px(10.0))
        .my(px(2.0))
        .rounded(px(3.0))
        .child(
            div()
                .text_size(px(Typography::TEXT_SM))
                .font_weight(FontWeight::BOLD)
                .text_color(DemoColors::text_primary())
                .child(item.title),
        )
        .child(
            div()
                .text_size(px(Typography::TEXT_XS))
                .text_color(DemoColors::text_secondary())
                .child(item.description),
        )
}

impl Render for UiComponentsDemo {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let locale = self.locale(cx);

        div()
            .id("ui-demo")
            .key_context(DEMO_KEY_CONTEXT)
            .track_focus(&self.focus_handle)
            .on_action(cx.listener(Self::on_dismiss_modal))
            .size_full()
            .bg(DemoColors::background())
            .child(
                div()
                    .id("ui-demo-scroll")
                    .size_full()
                    .overflow_y_scroll()
                    .p(px(10.0))
                    .flex()
                    .flex_col()
                    .child(self.render_heading(locale))
                    .child(self.render_touchable_section(locale, cx))
                    .child(self.render_modal_section(locale, cx))
                    .child(self.render_image_section(locale))
                    .child(self.render_counter_section(locale, cx))
                    .child(self.render_list_section(locale)),
            )
    }
}
