//! Configuration for the checkers front end.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use strictly_checkers::BoardPreset;
use tracing::{debug, info, instrument};

/// Settings read from a TOML file. Every field is optional in the file.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct CheckersConfig {
    /// Name of the Red player.
    #[serde(default = "default_red_name")]
    red_name: String,

    /// Name of the White player.
    #[serde(default = "default_white_name")]
    white_name: String,

    /// Starting layout for new games.
    #[serde(default)]
    preset: BoardPreset,

    /// Tracing filter used when `RUST_LOG` is not set.
    #[serde(default = "default_log_filter")]
    log_filter: String,
}

fn default_red_name() -> String {
    "Red".to_string()
}

fn default_white_name() -> String {
    "White".to_string()
}

fn default_log_filter() -> String {
    "warn".to_string()
}

impl Default for CheckersConfig {
    fn default() -> Self {
        Self {
            red_name: default_red_name(),
            white_name: default_white_name(),
            preset: BoardPreset::default(),
            log_filter: default_log_filter(),
        }
    }
}

impl CheckersConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::new(path, format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(path, format!("Failed to parse config: {}", e)))?;

        info!(preset = %config.preset, "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` if given, otherwise the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Applies command-line overrides on top of the file values.
    pub fn with_overrides(
        mut self,
        red_name: Option<String>,
        white_name: Option<String>,
        preset: Option<BoardPreset>,
    ) -> Self {
        if let Some(red_name) = red_name {
            self.red_name = red_name;
        }
        if let Some(white_name) = white_name {
            self.white_name = white_name;
        }
        if let Some(preset) = preset {
            self.preset = preset;
        }
        self
    }
}

/// A config file that could not be loaded.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error in {}: {} at {}:{}", path.display(), message, file, line)]
pub struct ConfigError {
    /// The file being loaded.
    pub path: PathBuf,
    /// What went wrong.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates an error for `path`, recording the caller's location.
    #[track_caller]
    pub fn new(path: impl Into<PathBuf>, message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            path: path.into(),
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
