//! Tracing subscriber setup.
//!
//! The TUI owns stdout, so interactive sessions log to a file under the
//! platform cache directory. `--print` runs log to stderr instead.

use std::path::PathBuf;

use color_eyre::Result;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Log file name inside the log directory.
pub const LOG_FILE_NAME: &str = "carbonboard.log";

/// Where log output goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget {
    /// Append to [`LOG_FILE_NAME`] in [`log_directory`]
    File,
    /// Write to stderr
    Stderr,
}

/// Default filter, overridden by `RUST_LOG`.
fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Install the global subscriber.
pub fn setup_logging(target: LogTarget) -> Result<()> {
    match target {
        LogTarget::File => {
            let log_dir = log_directory();
            std::fs::create_dir_all(&log_dir)?;

            let file_appender = tracing_appender::rolling::never(&log_dir, LOG_FILE_NAME);
            let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

            let file_layer = tracing_subscriber::fmt::layer()
                .with_writer(non_blocking_file)
                .with_ansi(false);

            tracing_subscriber::registry()
                .with(env_filter())
                .with(file_layer)
                .try_init()?;

            // Keep the writer alive for the rest of the process
            std::mem::forget(guard);

            tracing::info!("Log file: {}", log_dir.join(LOG_FILE_NAME).display());
        }
        LogTarget::Stderr => {
            let stderr_layer = tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false);

            tracing_subscriber::registry()
                .with(env_filter())
                .with(stderr_layer)
                .try_init()?;
        }
    }

    Ok(())
}

/// Platform-specific log directory.
///
/// Falls back to the system temp directory when no cache directory exists.
pub fn log_directory() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("carbonboard")
        .join("logs")
}
