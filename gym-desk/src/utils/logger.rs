//! Logging Infrastructure
//!
//! Structured logging setup. Logs go to stderr so they never interleave with
//! shell output, or to a daily rolling file when a log directory is given.

use std::path::Path;
use tracing_subscriber::EnvFilter;

/// Initialize the logger with optional JSON format and file output
///
/// `RUST_LOG` takes precedence over `log_level` when set.
pub fn init_logger_with_file(log_level: Option<&str>, json: bool, log_dir: Option<&str>) {
    let level = log_level.unwrap_or("info");
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(false);

    // Add file output if log_dir exists
    let file_appender = log_dir
        .map(Path::new)
        .filter(|p| p.is_dir())
        .map(|p| tracing_appender::rolling::daily(p, "gym-desk"));

    match (file_appender, json) {
        (Some(writer), true) => subscriber.json().with_writer(writer).init(),
        (Some(writer), false) => subscriber.with_ansi(false).with_writer(writer).init(),
        (None, true) => subscriber.json().with_writer(std::io::stderr).init(),
        (None, false) => subscriber.with_writer(std::io::stderr).init(),
    }
}
