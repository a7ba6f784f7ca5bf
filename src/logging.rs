//! Logging setup using `tracing` and `tracing-subscriber`.
//!
//! The TUI owns the terminal, so interactive sessions write logs to a file
//! when one is given and drop them otherwise.  Headless runs log to stderr.
//!
//! # Log Levels
//!
//! - `error`: a run aborted on an engine error
//! - `warn`: the bell could not be rung
//! - `info`: run summaries
//! - `debug`: selection, start, reset
//! - `trace`: every step

use std::fs::OpenOptions;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;

use tracing::level_filters::LevelFilter;
use tracing_subscriber::{
    fmt::{self, writer::BoxMakeWriter},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

/// Where log lines go
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    Stderr,
    File(PathBuf),
    Discard,
}

#[derive(Debug, Clone)]
pub struct LogConfig {
    pub level: LevelFilter,
    pub target: LogTarget,
}

impl LogConfig {
    /// Logs for an interactive session: the file if given, nowhere otherwise
    pub fn interactive(level: LevelFilter, log_file: Option<PathBuf>) -> Self {
        LogConfig {
            level,
            target: log_file.map_or(LogTarget::Discard, LogTarget::File),
        }
    }

    /// Logs for a headless run: the file if given, stderr otherwise
    pub fn headless(level: LevelFilter, log_file: Option<PathBuf>) -> Self {
        LogConfig {
            level,
            target: log_file.map_or(LogTarget::Stderr, LogTarget::File),
        }
    }
}

/// Install the global subscriber.  Call once at startup.
///
/// # Errors
///
/// Returns an error if the log file cannot be opened.
pub fn init_logging(config: &LogConfig) -> io::Result<()> {
    let (writer, ansi) = match &config.target {
        LogTarget::Stderr => (BoxMakeWriter::new(io::stderr), true),
        LogTarget::File(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            (BoxMakeWriter::new(Mutex::new(file)), false)
        }
        LogTarget::Discard => (BoxMakeWriter::new(io::sink), false),
    };

    let layer = fmt::layer()
        .with_writer(writer)
        .with_ansi(ansi)
        .with_target(false);

    tracing_subscriber::registry()
        .with(build_env_filter(config.level))
        .with(layer)
        .init();
    Ok(())
}

/// `RUST_LOG` wins over the configured level
fn build_env_filter(level: LevelFilter) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = level.to_string().to_lowercase();
        EnvFilter::new(format!("warn,sortty={level}"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_targets() {
        let path = PathBuf::from("sortty.log");
        assert_eq!(
            LogConfig::interactive(LevelFilter::INFO, None).target,
            LogTarget::Discard
        );
        assert_eq!(
            LogConfig::headless(LevelFilter::INFO, None).target,
            LogTarget::Stderr
        );
        assert_eq!(
            LogConfig::interactive(LevelFilter::INFO, Some(path.clone())).target,
            LogTarget::File(path)
        );
    }
}
