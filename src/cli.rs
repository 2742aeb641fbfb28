use std::path::PathBuf;

use clap::Parser;

use crate::config::{Config, Locale};

/// Two-screen login demo: sign in, then count clicks.
#[derive(Debug, Parser)]
#[command(name = "login-pad", version)]
pub struct Cli {
    /// Config file (default: <config dir>/login-pad/config.toml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Language for labels and messages
    #[arg(long, value_enum)]
    pub locale: Option<Locale>,

    /// Run commands from a file ("-" for stdin) instead of the UI
    #[arg(long, value_name = "PATH|-")]
    pub script: Option<String>,

    /// Write logs to this file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    pub fn config_path(&self) -> PathBuf {
        self.config.clone().unwrap_or_else(Config::config_path)
    }

    pub fn is_interactive(&self) -> bool {
        self.script.is_none()
    }

    /// Applies command-line overrides on top of the loaded config.
    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(locale) = self.locale {
            config.ui.locale = locale;
        }
    }
}
