//! Configuration file loading.
//!
//! Settings come from `hotseat.toml` in the working directory unless a path
//! is given on the command line. A missing default file means defaults.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur when loading the configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("Failed to read config file {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Failed to parse the configuration file as valid TOML.
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// How the board is drawn.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct DisplayConfig {
    /// Draw pieces as Unicode chess glyphs instead of letters.
    #[serde(default = "default_true")]
    pub unicode: bool,
    /// Print row and column labels around the board.
    #[serde(default = "default_true")]
    pub coordinates: bool,
    /// Mark the legal destinations of the selected piece.
    #[serde(default = "default_true")]
    pub show_destinations: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        DisplayConfig {
            unicode: true,
            coordinates: true,
            show_destinations: true,
        }
    }
}

fn default_true() -> bool {
    true
}

/// Top-level configuration.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub display: DisplayConfig,
    /// Default tracing filter, e.g. "warn" or "hotseat_engine=debug".
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            display: DisplayConfig::default(),
            log_level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Config {
    /// Loads the configuration.
    ///
    /// With an explicit path the file must exist. Without one, the default
    /// path is tried and defaults are used if it is absent.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let (path, required) = match path {
            Some(p) => (p.to_path_buf(), true),
            None => (Self::config_path(), false),
        };

        if !required && !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&path).map_err(|source| ConfigError::ReadError {
            path: path.clone(),
            source,
        })?;
        Self::parse(&content)
    }

    /// Parses a configuration from TOML text.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Returns the default configuration path.
    pub fn config_path() -> PathBuf {
        PathBuf::from("hotseat.toml")
    }
}
