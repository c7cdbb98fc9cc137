// src/log.rs
//
// Logging front door. Call sites use logf!/logd!/loge!; those forward to
// `tracing`. Frontends pick a sink once at startup: the GUI writes to
// `.store/debug.log`, the CLI writes to stderr when asked to be verbose.

use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt};

const DEFAULT_FILTER: &str = "info,trip_finder=debug";

fn env_filter(default: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

/// Install a file sink. Keep the returned guard alive for the whole run,
/// dropping it flushes and stops the background writer.
pub fn init_file(path: &Path) -> Option<WorkerGuard> {
    let dir = path.parent().filter(|p| !p.as_os_str().is_empty()).unwrap_or(Path::new("."));
    let file = path.file_name()?;
    if std::fs::create_dir_all(dir).is_err() {
        return None;
    }

    let appender = tracing_appender::rolling::never(dir, file);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let installed = fmt()
        .with_env_filter(env_filter(DEFAULT_FILTER))
        .with_writer(writer)
        .with_ansi(false)
        .with_target(false)
        .with_timer(fmt::time::uptime())
        .try_init()
        .is_ok();

    installed.then_some(guard)
}

/// Install a stderr sink (CLI `--verbose`).
pub fn init_stderr() {
    let _ = fmt()
        .with_env_filter(env_filter(DEFAULT_FILTER))
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_timer(fmt::time::uptime())
        .try_init();
}

/// Info-level logging
#[macro_export]
macro_rules! logf {
    ($($arg:tt)*) => {
        ::tracing::info!($($arg)*)
    };
}

/// Debug-level logging
#[macro_export]
macro_rules! logd {
    ($($arg:tt)*) => {
        ::tracing::debug!($($arg)*)
    };
}

/// Error-level logging
#[macro_export]
macro_rules! loge {
    ($($arg:tt)*) => {
        ::tracing::error!($($arg)*)
    };
}
