//! File logging for TUI mode
//!
//! The terminal is owned by ratatui, so all log output goes to
//! `<temp dir>/resadmin.log` through a non-blocking appender.

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::utils::{get_log_dir, LOG_FILE_NAME};

/// Default filter when `RUST_LOG` is unset
pub fn default_filter(debug: bool) -> &'static str {
    if debug {
        "resadmin=debug,info"
    } else {
        "info"
    }
}

/// Initialize file logging.
///
/// Returns a `WorkerGuard` that must stay alive for the duration of the
/// application so buffered lines are flushed on shutdown.
pub fn init_tui(debug: bool) -> WorkerGuard {
    let file_appender = tracing_appender::rolling::never(get_log_dir(), LOG_FILE_NAME);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(debug)));

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_target(true)
        .with_line_number(debug)
        .with_filter(env_filter);

    // A second init (e.g. from tests) keeps the first subscriber
    let _ = tracing_subscriber::registry().with(file_layer).try_init();

    tracing::info!(
        "Logging initialized. Writing to: {:?}",
        get_log_dir().join(LOG_FILE_NAME)
    );

    guard
}
