//! Configuration file loading for the console front end.
//!
//! Settings come from an optional TOML file; command-line flags override them.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;
use tracing::Level;

/// Errors that can occur when loading or parsing configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),
    /// Failed to parse the configuration file as valid TOML.
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),
    /// The log level is not one of trace, debug, info, warn or error.
    #[error("Unknown log level: {0}")]
    InvalidLogLevel(String),
}

/// Settings for a console session.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Print the board after every move. Defaults to true.
    pub show_board: bool,
    /// Maximum level of log events written to stderr. Defaults to "warn".
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            show_board: true,
            log_level: "warn".to_string(),
        }
    }
}

impl Config {
    /// Loads the configuration at `path`, or the defaults if there is no file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ReadError`] if the file exists but cannot be read,
    /// or [`ConfigError::ParseError`] if the file contains invalid TOML.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            Self::parse(&content)
        } else {
            Ok(Self::default())
        }
    }

    /// Parses configuration from TOML text.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Returns the configured log level.
    pub fn level(&self) -> Result<Level, ConfigError> {
        self.log_level
            .parse()
            .map_err(|_| ConfigError::InvalidLogLevel(self.log_level.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_uses_defaults() {
        assert_eq!(Config::parse("").unwrap(), Config::default());
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let config = Config::parse("show_board = false").unwrap();
        assert!(!config.show_board);
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    fn log_level_parses() {
        let config = Config::parse("log_level = \"debug\"").unwrap();
        assert_eq!(config.level().unwrap(), Level::DEBUG);
    }

    #[test]
    fn bad_log_level_is_reported() {
        let config = Config::parse("log_level = \"loud\"").unwrap();
        assert!(matches!(config.level(), Err(ConfigError::InvalidLogLevel(level)) if level == "loud"));
    }

    #[test]
    fn invalid_toml_is_an_error() {
        assert!(matches!(Config::parse("show_board = "), Err(ConfigError::ParseError(_))));
    }

    #[test]
    fn missing_file_uses_defaults() {
        let config = Config::load(Path::new("does-not-exist/chess.toml")).unwrap();
        assert_eq!(config, Config::default());
    }
}
