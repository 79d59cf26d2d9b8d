//! Logging system initialization
//!
//! Sets up tracing-based logging with file output to `gopher.log` in the
//! config directory and rotation on application startup keeping the last
//! sessions' logs.

use crate::error::{GopherError, Result, StringError};
use std::path::Path;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, fmt};

/// Maximum number of historical log files to keep (gopher.log.1 through gopher.log.9)
const MAX_LOG_FILES: u8 = 9;

/// Base name of the log file
const LOG_FILE_NAME: &str = "gopher.log";

/// Initialize the logging system writing into `log_dir`
///
/// Log level defaults to INFO but can be configured via `RUST_LOG` environment variable.
/// Rotates existing logs on startup to maintain a history of previous sessions.
pub fn init_logging(log_dir: &Path) -> Result<()> {
    std::fs::create_dir_all(log_dir)?;

    rotate_logs_on_startup(&log_dir.join(LOG_FILE_NAME))?;

    // Rotation is handled above, once per session
    let file_appender = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix("gopher")
        .filename_suffix("log")
        .build(log_dir)
        .map_err(|e| GopherError::ConfigError(Box::new(e)))?;

    let subscriber = fmt()
        .with_writer(file_appender)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_ansi(false)
        .with_target(true)
        .with_thread_ids(true)
        .with_file(true)
        .with_line_number(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| GopherError::ConfigError(Box::new(e)))?;

    tracing::info!("Logging to {}", log_dir.join(LOG_FILE_NAME).display());

    Ok(())
}

/// Rotate log files on application startup
///
/// - gopher.log.9 is deleted (oldest log)
/// - gopher.log.8 -> gopher.log.9, ..., gopher.log.1 -> gopher.log.2
/// - gopher.log -> gopher.log.1
/// - A fresh gopher.log will be created by the logger
fn rotate_logs_on_startup(log_path: &Path) -> Result<()> {
    if !log_path.exists() {
        return Ok(());
    }

    let log_dir = log_path
        .parent()
        .ok_or_else(|| GopherError::ConfigError(StringError::new("Invalid log path")))?;

    let log_name = log_path
        .file_name()
        .ok_or_else(|| GopherError::ConfigError(StringError::new("Invalid log filename")))?
        .to_string_lossy();

    let oldest_log = log_dir.join(format!("{log_name}.{MAX_LOG_FILES}"));
    if oldest_log.exists() {
        std::fs::remove_file(&oldest_log)?;
    }

    for i in (1..MAX_LOG_FILES).rev() {
        let current_log = log_dir.join(format!("{log_name}.{i}"));
        let next_log = log_dir.join(format!("{log_name}.{}", i + 1));

        if current_log.exists() {
            std::fs::rename(&current_log, &next_log)?;
        }
    }

    std::fs::rename(log_path, log_dir.join(format!("{log_name}.1")))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_rotate_moves_current_log() {
        let dir = tempfile::tempdir().unwrap();
        let log_path = dir.path().join(LOG_FILE_NAME);
        fs::write(&log_path, "Session 1").unwrap();

        rotate_logs_on_startup(&log_path).unwrap();

        assert!(!log_path.exists());
        let content = fs::read_to_string(dir.path().join("gopher.log.1")).unwrap();
        assert_eq!(content, "Session 1");
    }

    #[test]
    fn test_rotate_keeps_most_recent_sessions() {
        let dir = tempfile::tempdir().unwrap();
        let log_path = dir.path().join(LOG_FILE_NAME);

        for i in 1..=12 {
            fs::write(&log_path, format!("Session {i}")).unwrap();
            rotate_logs_on_startup(&log_path).unwrap();
        }

        for i in 1..=MAX_LOG_FILES {
            assert!(dir.path().join(format!("gopher.log.{i}")).exists());
        }
        assert!(!dir.path().join("gopher.log.10").exists());

        let newest = fs::read_to_string(dir.path().join("gopher.log.1")).unwrap();
        let oldest = fs::read_to_string(dir.path().join("gopher.log.9")).unwrap();
        assert_eq!(newest, "Session 12");
        assert_eq!(oldest, "Session 4");
    }

    #[test]
    fn test_rotate_without_existing_log() {
        let dir = tempfile::tempdir().unwrap();
        let log_path = dir.path().join(LOG_FILE_NAME);

        assert!(rotate_logs_on_startup(&log_path).is_ok());
        assert!(!dir.path().join("gopher.log.1").exists());
    }
}
