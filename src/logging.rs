use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{InitError, RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Daily rolling `overhead.<date>.log` under `dir`, creating the directory if needed.
pub fn file_appender(dir: &Path) -> Result<RollingFileAppender, InitError> {
    RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix("overhead")
        .filename_suffix("log")
        .build(dir)
}

fn env_filter() -> EnvFilter {
    EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into())
}

/// Sends logs to a file under `dir`. Stdout carries only the answer.
///
/// If the directory can't be used, logs go to stderr instead and `None` is
/// returned; a logging problem never stops the lookup.
pub fn initialize_logging(dir: &Path) -> Option<WorkerGuard> {
    match file_appender(dir) {
        Ok(appender) => {
            let (non_blocking, guard) = tracing_appender::non_blocking(appender);
            tracing_subscriber::registry()
                .with(env_filter())
                .with(fmt::layer().with_writer(non_blocking).with_ansi(false))
                .init();

            tracing::info!("Logging initialized in {}.", dir.display());
            Some(guard)
        }
        Err(e) => {
            tracing_subscriber::registry()
                .with(env_filter())
                .with(fmt::layer().with_writer(std::io::stderr).with_ansi(false))
                .init();

            tracing::warn!("Cannot log to {}: {}. Logging to stderr.", dir.display(), e);
            None
        }
    }
}
