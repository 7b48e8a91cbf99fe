//! Structured logger setup.
//!
//! Console output for interactive use, plus an optional rolling NDJSON file
//! for deployments that keep logs on disk. Level control comes from
//! `RUST_LOG` when set, otherwise from the configured default.

use std::path::Path;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize the global logger.
///
/// When `log_dir` is given, a daily-rotated `harvest.log.YYYY-MM-DD` NDJSON
/// file is written there alongside console output. Safe to call more than
/// once; later calls are no-ops.
pub fn init_logger(log_dir: Option<&Path>, default_level: &str) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    let console_layer = fmt::layer()
        .with_writer(std::io::stdout)
        .with_target(false)
        .with_ansi(true);

    let file_layer = log_dir.map(|dir| {
        let appender = RollingFileAppender::new(Rotation::DAILY, dir, "harvest.log");
        fmt::layer().json().with_writer(appender).with_ansi(false)
    });

    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer)
        .with(file_layer)
        .try_init();
}
