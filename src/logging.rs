//! Tracing subscriber setup.
//!
//! The TUI owns stdout, so interactive runs write logs to a file or not at
//! all. Script runs log to stderr and keep stdout for JSON.

use std::fs::{File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;

/// Where log lines go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogSink {
    Stderr,
    File(PathBuf),
    Disabled,
}

impl LogSink {
    /// Picks a sink: an explicit path wins, then the config file, then the
    /// mode default.
    pub fn resolve(cli_file: Option<&Path>, config: &LoggingConfig, interactive: bool) -> Self {
        if let Some(path) = cli_file {
            return LogSink::File(path.to_path_buf());
        }
        if let Some(path) = &config.file {
            return LogSink::File(PathBuf::from(path));
        }
        if interactive {
            LogSink::Disabled
        } else {
            LogSink::Stderr
        }
    }
}

/// Builds the filter: `RUST_LOG` first, then the configured level.
pub fn build_filter(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

pub fn init_tracing(sink: &LogSink, default_level: &str) -> io::Result<()> {
    let filter = build_filter(default_level);

    match sink {
        LogSink::Disabled => Ok(()),
        LogSink::Stderr => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_target(true)
                .with_level(true)
                .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
                .with_writer(io::stderr)
                .init();
            Ok(())
        }
        LogSink::File(path) => {
            let file = open_log_file(path)?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_target(true)
                .with_level(true)
                .with_ansi(false)
                .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
                .with_writer(Mutex::new(file))
                .init();
            Ok(())
        }
    }
}

fn open_log_file(path: &Path) -> io::Result<File> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}
