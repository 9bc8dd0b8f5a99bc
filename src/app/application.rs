//! Application - App Initialization and Window Management
//!
//! Main entry point for the GPUI application.

use gpui::{
    App, AppContext, Application, Bounds, TitlebarOptions, WindowBounds, WindowOptions, px, size,
};
use gpui_component::Root;
use tracing::{error, info};

use crate::app::actions::{LocaleAction, Quit, key_bindings};
use crate::app::entities::AppEntities;
use crate::app::workspace::Workspace;
use crate::assets::Assets;
use crate::constants::{MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH};
use crate::domain::config::DemoConfig;
use crate::i18n::{Locale, tr};

/// Run the UI Demo application
pub fn run_app() {
    let config = DemoConfig::load_or_default();

    Application::new().with_assets(Assets).run(move |cx: &mut App| {
        gpui_component::init(cx);

        cx.bind_keys(key_bindings());
        cx.on_action(|_: &Quit, cx: &mut App| cx.quit());

        // Quit the app when all windows are closed (macOS behavior)
        cx.on_window_closed(|cx| {
            if cx.windows().is_empty() {
                cx.quit();
            }
        })
        .detach();

        let system_locale = locale_config::Locale::current().to_string();
        let locale = Locale::resolve(config.locale.as_deref(), Some(&system_locale));
        info!(locale = locale.code(), system = %system_locale, "Resolved locale");

        let entities = AppEntities::init(locale, cx);
        cx.set_global(entities.clone());

        cx.on_action({
            let entities = entities.clone();
            move |action: &LocaleAction, cx: &mut App| {
                let locale = action.locale();
                entities.i18n.update(cx, |state, cx| {
                    state.set_locale(locale);
                    cx.notify();
                });
                info!(locale = locale.code(), "Locale switched");
                cx.refresh_windows();
            }
        });

        let bounds = Bounds::centered(
            None,
            size(px(config.window.width), px(config.window.height)),
            cx,
        );
        let window_options = WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(bounds)),
            window_min_size: Some(size(px(MIN_WINDOW_WIDTH), px(MIN_WINDOW_HEIGHT))),
            titlebar: Some(TitlebarOptions {
                title: Some(tr(locale, "app.title")),
                ..Default::default()
            }),
            ..Default::default()
        };

        info!(image_url = %config.image_url, "Configuration applied");
        cx.set_global(config);

        let opened = cx.open_window(window_options, |window, cx| {
            let workspace = cx.new(|cx| Workspace::new(entities.clone(), cx));
            cx.new(|cx| Root::new(workspace, window, cx))
        });

        if let Err(e) = opened {
            error!(error = %e, "Failed to open main window");
            cx.quit();
            return;
        }

        cx.activate(true);
    });
}
