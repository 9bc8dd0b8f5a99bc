//! Remote Image Component
//!
//! Fetches one image URL on creation and renders it at a fixed size. While
//! loading, or after a failure, a neutral placeholder of the same size is
//! shown instead.

use gpui::{
    Context, IntoElement, ParentElement, Pixels, Render, SharedString, Styled, Task, Window, div,
    img, px,
};
use gpui_component::Icon;
use tracing::warn;

use crate::assets::CustomIconName;
use crate::i18n::i18n;
use crate::services::image_loader::fetch_image;
use crate::state::image_state::ImageState;
use crate::theme::colors::DemoColors;
use crate::theme::typography::Typography;

/// Remote image view
pub struct RemoteImage {
    state: ImageState,
    width: Pixels,
    height: Pixels,
    _fetch: Task<()>,
}

impl RemoteImage {
    /// Create the view and start fetching `url` in the background
    pub fn new(
        url: impl Into<SharedString>,
        width: f32,
        height: f32,
        cx: &mut Context<Self>,
    ) -> Self {
        let fetch = Self::spawn_fetch(url.into(), cx);

        Self {
            state: ImageState::Loading,
            width: px(width),
            height: px(height),
            _fetch: fetch,
        }
    }

    fn spawn_fetch(url: SharedString, cx: &mut Context<Self>) -> Task<()> {
        cx.spawn(async move |this, cx| {
            let request_url = url.clone();
            let result = cx
                .background_executor()
                .spawn(async move { fetch_image(&request_url) })
                .await;

            if let Err(e) = &result {
                warn!(url = %url, error = %e, "Remote image failed to load");
            }

            let state = ImageState::from_result(result);
            this.update(cx, |this, cx| {
                this.state = state;
                cx.notify();
            })
            .ok();
        })
    }

    fn render_placeholder(&self, cx: &mut Context<Self>) -> impl IntoElement {
        let content = match &self.state {
            ImageState::Failed(_) => div()
                .flex()
                .flex_col()
                .items_center()
                .gap_1()
                .text_size(px(Typography::TEXT_XS))
                .text_color(DemoColors::text_secondary())
                .child(
                    Icon::from(CustomIconName::ImageOff).text_color(DemoColors::text_secondary()),
                )
                .child(i18n(cx, "demo.image.failed"))
                .into_any_element(),
            _ => div()
                .text_size(px(Typography::TEXT_XS))
                .text_color(DemoColors::text_secondary())
                .child(i18n(cx, "demo.image.loading"))
                .into_any_element(),
        };

        div()
            .w(self.width)
            .h(self.height)
            .bg(DemoColors::image_placeholder())
            .flex()
            .items_center()
            .justify_center()
            .child(content)
    }
}

impl Render for RemoteImage {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        match self.state.image() {
            Some(image) => img(image.clone())
                .w(self.width)
                .h(self.height)
                .into_any_element(),
            None => self.render_placeholder(cx).into_any_element(),
        }
    }
}
