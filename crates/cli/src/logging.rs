//! Logging setup for CLI commands and the editor

use dazzlo_core::LoggingConfig;
use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

pub const LOG_FILE_NAME: &str = "dazzlo.log";

/// Get the DazzloDocs data directory (respects env vars)
pub fn data_dir() -> PathBuf {
  if let Ok(path) = std::env::var("DAZZLO_DATA_DIR") {
    return PathBuf::from(path);
  }
  dirs::data_local_dir()
    .map(|p| p.join("dazzlo"))
    .unwrap_or_else(|| PathBuf::from(".dazzlo"))
}

/// Parse log level from config string
pub fn parse_log_level(level: &str) -> tracing::Level {
  match level.to_lowercase().as_str() {
    "off" | "error" => tracing::Level::ERROR,
    "warn" => tracing::Level::WARN,
    "info" => tracing::Level::INFO,
    "debug" => tracing::Level::DEBUG,
    "trace" => tracing::Level::TRACE,
    _ => tracing::Level::INFO,
  }
}

fn env_filter(config: &LoggingConfig) -> EnvFilter {
  // RUST_LOG overrides the configured level
  EnvFilter::builder()
    .with_default_directive(parse_log_level(&config.level).into())
    .from_env_lossy()
}

/// Initialize logging for CLI commands (stderr only, so stdout stays pipeable)
pub fn init_cli_logging(config: &LoggingConfig) {
  tracing_subscriber::fmt()
    .with_env_filter(env_filter(config))
    .with_writer(std::io::stderr)
    .init();
}

/// Initialize logging for the editor.
///
/// The editor owns the terminal, so logs go to a rolling file in the data
/// directory. Returns the guard that must be kept alive for the duration of
/// the program.
pub fn init_tui_logging(config: &LoggingConfig) -> Option<WorkerGuard> {
  let log_dir = data_dir();
  if std::fs::create_dir_all(&log_dir).is_err() {
    return None;
  }

  let file_appender = match config.rotation.as_str() {
    "hourly" => tracing_appender::rolling::hourly(&log_dir, LOG_FILE_NAME),
    "never" => tracing_appender::rolling::never(&log_dir, LOG_FILE_NAME),
    _ => tracing_appender::rolling::daily(&log_dir, LOG_FILE_NAME),
  };

  let (file_writer, guard) = tracing_appender::non_blocking(file_appender);

  tracing_subscriber::fmt()
    .with_env_filter(env_filter(config))
    .with_target(true)
    .with_ansi(false)
    .with_writer(file_writer)
    .init();

  Some(guard)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_parse_log_level() {
    assert_eq!(parse_log_level("DEBUG"), tracing::Level::DEBUG);
    assert_eq!(parse_log_level("off"), tracing::Level::ERROR);
    assert_eq!(parse_log_level("loud"), tracing::Level::INFO);
  }
}
