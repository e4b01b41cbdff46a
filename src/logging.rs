//! Simple tracing subscriber setup used by the application.

use std::env;

use tracing_appender::{
    non_blocking,
    non_blocking::{NonBlocking, WorkerGuard},
    rolling::{RollingFileAppender, Rotation},
};
use tracing_subscriber::{
    EnvFilter,
    fmt::{fmt, time::ChronoLocal, writer::MakeWriterExt},
};

/// Installs the global subscriber. Keep the returned guard alive until exit so
/// buffered file logs get flushed.
pub fn init() -> Option<WorkerGuard> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let builder = fmt()
        .with_env_filter(env_filter)
        .with_timer(ChronoLocal::new("%Y-%m-%d %H:%M:%S".to_string()))
        .with_target(false)
        .with_ansi(true)
        .with_level(true);

    let guard = match env::var("LOG_DIR").ok().and_then(init_file_writer) {
        Some((file_writer, guard)) => {
            let stderr = std::io::stderr.with_max_level(tracing::Level::INFO);
            builder.with_writer(stderr.and(file_writer)).init();
            Some(guard)
        }
        None => {
            builder.with_writer(std::io::stderr).init();
            None
        }
    };

    tracing::debug!("logger initialized");

    guard
}

fn init_file_writer(dir: String) -> Option<(NonBlocking, WorkerGuard)> {
    let max_files = env::var("LOG_MAX_FILES")
        .ok()
        .and_then(|v| v.parse::<usize>().ok());

    let mut file_builder = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix("rankedstats.log");

    if let Some(n) = max_files {
        file_builder = file_builder.max_log_files(n);
    }

    let file_appender = match file_builder.build(&dir) {
        Ok(appender) => appender,
        Err(e) => {
            eprintln!("failed to create log file in {dir}: {e}");
            return None;
        }
    };

    Some(non_blocking(file_appender))
}
