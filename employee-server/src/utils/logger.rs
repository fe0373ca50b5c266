//! Logging Infrastructure
//!
//! Structured logging setup with optional daily-rolling file output.
//!
//! | 环境 | 格式 |
//! |------|------|
//! | production | JSON, one object per line |
//! | other | human-readable text |

use std::path::Path;

use tracing_appender::rolling::{self, RollingFileAppender};
use tracing_subscriber::EnvFilter;

use crate::core::Config;

/// Initialize the logger from server configuration
pub fn init_logger(config: &Config) {
    init_logger_with_file(
        Some(&config.log_level),
        config.log_dir.as_deref(),
        config.is_production(),
    );
}

/// Initialize the logger with optional file output
///
/// `RUST_LOG` wins over `log_level` when set. Calling this twice is harmless:
/// the second global subscriber is silently refused.
pub fn init_logger_with_file(log_level: Option<&str>, log_dir: Option<&str>, json: bool) {
    let filter = env_filter(log_level.unwrap_or("info"));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(false);

    let _ = match (json, log_dir.and_then(file_appender)) {
        (true, Some(appender)) => builder.json().with_writer(appender).try_init(),
        (true, None) => builder.json().try_init(),
        (false, Some(appender)) => builder.with_ansi(false).with_writer(appender).try_init(),
        (false, None) => builder.try_init(),
    };
}

fn env_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("employee_server={level},tower_http={level}")))
}

/// Daily file in `dir`, or `None` (stdout) when the directory is missing
fn file_appender(dir: &str) -> Option<RollingFileAppender> {
    let log_path = Path::new(dir);
    if !log_path.exists() {
        eprintln!("LOG_DIR {dir} does not exist, logging to stdout");
        return None;
    }
    Some(rolling::daily(log_path, "employee-server"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_log_dir_falls_back_to_stdout() {
        assert!(file_appender("/definitely/not/a/real/log/dir").is_none());
    }

    #[test]
    fn test_existing_log_dir_gets_appender() {
        let dir = tempfile::tempdir().unwrap();
        assert!(file_appender(&dir.path().to_string_lossy()).is_some());
    }
}
