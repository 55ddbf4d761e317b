//! Logging setup: stderr always, plus a daily-rolling file when a log
//! directory is configured or already present.

use std::env;
use std::path::{Path, PathBuf};

use fs_err as fs;
use launch_core::config::parse_flag;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

const DEBUG_ENV: &str = "LAUNCH_DEBUG_LOG";
const LOG_DIR_ENV: &str = "LAUNCH_LOG_DIR";
const LOG_FILE_PREFIX: &str = "launch-probe.log";

/// Installs the global subscriber. Hold the returned guard until exit so the
/// file writer flushes.
pub fn init() -> Option<WorkerGuard> {
    let debug_value = env::var(DEBUG_ENV).ok();
    let filter = if debug_enabled(debug_value.as_deref()) {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    let stderr_layer = fmt::layer().with_writer(std::io::stderr).with_target(false);

    let log_dir = select_log_dir(env::var(LOG_DIR_ENV).ok(), default_log_dir());
    let mut dir_error = None;
    let (file_layer, guard) = match log_dir.as_deref().map(prepare_log_dir) {
        Some(Ok(dir)) => {
            let appender = tracing_appender::rolling::daily(&dir, LOG_FILE_PREFIX);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer().with_ansi(false).with_writer(writer);
            (Some(layer), Some(guard))
        }
        Some(Err(err)) => {
            dir_error = Some(err);
            (None, None)
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .init();

    if let Some(err) = dir_error {
        tracing::warn!(error = %err, "File logging disabled");
    }

    guard
}

/// Same vocabulary as the launch flags; unparseable values leave debug off.
fn debug_enabled(value: Option<&str>) -> bool {
    value
        .and_then(|value| parse_flag(DEBUG_ENV, value).ok())
        .unwrap_or(false)
}

fn default_log_dir() -> Option<PathBuf> {
    dirs::data_local_dir().map(|d| d.join("launch-probe").join("logs"))
}

/// An explicit directory is always used; the default only when it exists.
fn select_log_dir(explicit: Option<String>, default: Option<PathBuf>) -> Option<PathBuf> {
    match explicit.filter(|value| !value.trim().is_empty()) {
        Some(value) => Some(PathBuf::from(value)),
        None => default.filter(|dir| dir.is_dir()),
    }
}

fn prepare_log_dir(dir: &Path) -> std::io::Result<PathBuf> {
    fs::create_dir_all(dir)?;
    Ok(dir.to_path_buf())
}
