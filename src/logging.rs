//! Tracing subscriber setup.

use std::path::PathBuf;

use directories::ProjectDirs;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LoggingConfig;

/// Directory for rolling log files, if the platform exposes one.
pub fn log_dir() -> Option<PathBuf> {
    ProjectDirs::from("com", "Gianged", "DeptRegistry").map(|dirs| dirs.data_local_dir().join("logs"))
}

/// Initialize logging to stdout and, when enabled, a daily log file.
///
/// `RUST_LOG` takes precedence over the configured level. The returned guard
/// must be held until exit so buffered file output gets flushed.
pub fn init(config: &LoggingConfig) -> Option<WorkerGuard> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    let (file_layer, guard) = match config.to_file.then(log_dir).flatten() {
        Some(dir) => {
            let appender = tracing_appender::rolling::daily(dir, "dept-registry.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer().with_writer(writer).with_ansi(false);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer())
        .with(file_layer)
        .init();

    guard
}
