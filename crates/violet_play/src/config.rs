//! Front-end configuration.
//!
//! Values come from an optional TOML file; command-line flags override
//! them in `main`.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Settings for the terminal front end.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct PlayConfig {
    /// Tracing filter used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    log_filter: String,

    /// Show empty cells as their 1-based number instead of `.`.
    #[serde(default = "default_show_indices")]
    show_indices: bool,

    /// Ask before resetting a game that is still in progress.
    #[serde(default)]
    confirm_reset: bool,
}

fn default_log_filter() -> String {
    "warn".to_string()
}

fn default_show_indices() -> bool {
    true
}

impl Default for PlayConfig {
    fn default() -> Self {
        Self {
            log_filter: default_log_filter(),
            show_indices: default_show_indices(),
            confirm_reset: false,
        }
    }
}

impl PlayConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(log_filter = %config.log_filter, "Config loaded");
        Ok(config)
    }

    /// Replaces the log filter.
    pub fn with_log_filter(mut self, filter: impl Into<String>) -> Self {
        self.log_filter = filter.into();
        self
    }

    /// Replaces the empty-cell rendering choice.
    pub fn with_show_indices(mut self, show: bool) -> Self {
        self.show_indices = show;
        self
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error at the caller's location.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
