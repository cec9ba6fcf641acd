use anyhow::{Context, Result};
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::filter::{Directive, LevelFilter};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::config::Config;

/// Keeps the non-blocking file writer alive for the lifetime of the process.
#[allow(dead_code)]
pub struct LoggerGuard(Option<WorkerGuard>);

/// Installs the global subscriber: stdout always, plus a daily-rotated file
/// when `LOG_DIR` is configured. `RUST_LOG` overrides the configured level.
pub fn init_logging(config: &Config) -> Result<LoggerGuard> {
    let default_directive = config
        .log_level
        .parse::<Directive>()
        .unwrap_or_else(|_| LevelFilter::INFO.into());
    let builder = EnvFilter::builder().with_default_directive(default_directive);
    let stdout_filter = builder.clone().from_env_lossy();

    let (file_layer, guard) = match &config.log_dir {
        Some(dir) => {
            let appender = RollingFileAppender::builder()
                .rotation(Rotation::DAILY)
                .filename_prefix("apod-bot")
                .filename_suffix("log")
                .build(dir)
                .with_context(|| format!("failed to create log file appender in {dir}"))?;
            let (writer, guard) = NonBlocking::new(appender);
            let layer = fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_filter(builder.from_env_lossy());
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    let stdout_layer = fmt::layer()
        .with_writer(std::io::stdout)
        .with_ansi(true)
        .with_filter(stdout_filter);
    tracing_subscriber::registry()
        .with(file_layer)
        .with(stdout_layer)
        .init();

    Ok(LoggerGuard(guard))
}
