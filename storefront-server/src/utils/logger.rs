//! Logging Infrastructure
//!
//! Structured logging for development (pretty, stdout) and production
//! (JSON, daily rolling files).

use std::path::Path;

use tracing_subscriber::EnvFilter;

const LOG_FILE_PREFIX: &str = "storefront-server";

/// Initialize the logger with optional JSON format and file output
///
/// `RUST_LOG` takes precedence over `log_level`. Repeated initialization is
/// ignored.
pub fn init_logger_with_file(log_level: Option<&str>, json: bool, log_dir: Option<&str>) {
    let level = log_level.unwrap_or("info");
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(false);

    // File output only when the directory exists or can be created
    let file_dir = log_dir
        .map(Path::new)
        .filter(|dir| std::fs::create_dir_all(dir).is_ok());

    let result = match (json, file_dir) {
        (true, Some(dir)) => subscriber
            .json()
            .with_writer(tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX))
            .try_init(),
        (true, None) => subscriber.json().try_init(),
        (false, Some(dir)) => subscriber
            .with_ansi(false)
            .with_writer(tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX))
            .try_init(),
        (false, None) => subscriber.try_init(),
    };

    if let Err(e) = result {
        eprintln!("Logger already initialized: {e}");
    }
}
