//! UI Demo - Main Entry Point
//!
//! Single-screen showcase of five standard UI widgets.

use tracing::warn;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, prelude::*};
use ui_demo::app::application::run_app;
use ui_demo::helpers::{env_filter, get_or_create_data_dir};

const LOG_FILE_NAME: &str = "ui-demo.log";

/// Install stderr logging plus a daily rolling file in the data directory.
///
/// The returned guard flushes the file writer and must live until exit.
fn init_logging() -> Option<WorkerGuard> {
    let (file_layer, guard, file_error) = match get_or_create_data_dir() {
        Ok(dir) => {
            let appender = tracing_appender::rolling::daily(dir, LOG_FILE_NAME);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_timer(fmt::time::LocalTime::rfc_3339())
                .with_filter(env_filter());
            (Some(layer), Some(guard), None)
        }
        Err(e) => (None, None, Some(e)),
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_filter(env_filter()))
        .with(file_layer)
        .init();

    if let Some(e) = file_error {
        warn!(error = %e, "File logging disabled");
    }

    guard
}

fn main() {
    let _log_guard = init_logging();

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "Starting UI Demo...");

    run_app();
}
