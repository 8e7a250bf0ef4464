//! # Logging
//!
//! Console logging always; a daily rolling file when the config asks for it.

use crate::config::{self, AppConfig};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Installs the global subscriber. `RUST_LOG` wins over the configured
/// filter. Keep the returned guard alive until exit so buffered file
/// output is flushed.
pub fn init(config: &AppConfig) -> Option<WorkerGuard> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_filter))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let console = fmt::layer().with_target(false);

    let (file_layer, guard, log_dir) = if config.log_to_file {
        match config::log_dir() {
            Ok(dir) => {
                let appender = tracing_appender::rolling::daily(&dir, "taskshell.log");
                let (writer, guard) = tracing_appender::non_blocking(appender);
                let layer = fmt::layer().with_ansi(false).with_writer(writer);
                (Some(layer), Some(guard), Some(dir))
            }
            Err(e) => {
                eprintln!("File logging disabled: {}", e);
                (None, None, None)
            }
        }
    } else {
        (None, None, None)
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(console)
        .with(file_layer)
        .init();

    if let Some(dir) = log_dir {
        tracing::info!("Writing logs to {}", dir.display());
    }

    guard
}
