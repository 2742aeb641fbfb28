//! Configuration loading.
//!
//! The config file is optional; every field has a default. Credentials are
//! never read from here.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{
    Config, Locale, LoggingConfig, UiConfig, MAX_TICK_RATE_MS, MIN_TICK_RATE_MS,
};
