//! `DataShelf` Configuration Module
//!
//! Provides configuration file support via `datashelf.toml`, environment
//! variables, and command-line overrides.
//!
//! # Priority (highest to lowest)
//!
//! 1. Command-line flags (server binary)
//! 2. Environment variables (`DATASHELF_*`, nested keys split on `__`,
//!    e.g. `DATASHELF_DATASET__DATA_DIR`)
//! 3. Configuration file (`datashelf.toml`)
//! 4. Default values

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use crate::output::Orient;

/// Default configuration file name.
pub const DEFAULT_CONFIG_FILE: &str = "datashelf.toml";

/// Configuration errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to parse configuration.
    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    /// Invalid configuration value.
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue {
        /// Configuration key that failed validation.
        key: String,
        /// Validation error message.
        message: String,
    },
}

/// Server configuration section.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Host address.
    pub host: String,
    /// Port number.
    pub port: u16,
    /// Enable permissive CORS.
    pub cors_enabled: bool,
    /// Body returned by `POST /`.
    pub greeting: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 5000,
            cors_enabled: true,
            greeting: "welcomeeee".to_string(),
        }
    }
}

/// Dataset configuration section.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DatasetConfig {
    /// Directory holding the dataset files.
    pub data_dir: String,
    /// Dataset served by the book endpoints.
    pub books: String,
    /// Field delimiter.
    pub delimiter: char,
    /// Response layout when the request does not pick one.
    pub default_orient: Orient,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            data_dir: "./data".to_string(),
            books: "books_c.csv".to_string(),
            delimiter: ',',
            default_orient: Orient::Records,
        }
    }
}

impl DatasetConfig {
    /// Delimiter as the single byte the CSV reader expects.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] for non-ASCII delimiters and for
    /// quote or line-break characters.
    pub fn delimiter_byte(&self) -> Result<u8, ConfigError> {
        let invalid = |message: &str| ConfigError::InvalidValue {
            key: "dataset.delimiter".to_string(),
            message: format!("{:?} {message}", self.delimiter),
        };
        let byte = u8::try_from(self.delimiter).map_err(|_| invalid("is not a single byte"))?;
        if !byte.is_ascii() {
            return Err(invalid("is not ASCII"));
        }
        if matches!(byte, b'"' | b'\n' | b'\r') {
            return Err(invalid("cannot be used as a delimiter"));
        }
        Ok(byte)
    }
}

/// Logging configuration section.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level: error, warn, info, debug, trace.
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

/// Main `DataShelf` configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ShelfConfig {
    /// Server configuration.
    pub server: ServerConfig,
    /// Dataset configuration.
    pub dataset: DatasetConfig,
    /// Logging configuration.
    pub logging: LoggingConfig,
}

impl ShelfConfig {
    /// Loads configuration from a specific file path.
    ///
    /// A missing file is not an error; defaults and environment still apply.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration parsing fails.
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        Figment::new()
            .merge(Serialized::defaults(Self::default()))
            .merge(Toml::file(path.as_ref()))
            .merge(Env::prefixed("DATASHELF_").split("__"))
            .extract()
            .map_err(|e| ConfigError::ParseError(e.to_string()))
    }

    /// Creates a configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if parsing fails.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        Figment::new()
            .merge(Serialized::defaults(Self::default()))
            .merge(Toml::string(toml_str))
            .extract()
            .map_err(|e| ConfigError::ParseError(e.to_string()))
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::InvalidValue {
                key: "server.port".to_string(),
                message: "value 0 is not a valid port".to_string(),
            });
        }

        self.dataset.delimiter_byte()?;

        if crate::store::validate_identifier(&self.dataset.books).is_err() {
            return Err(ConfigError::InvalidValue {
                key: "dataset.books".to_string(),
                message: format!("'{}' is not a plain file name", self.dataset.books),
            });
        }

        let valid_levels = ["error", "warn", "info", "debug", "trace"];
        if !valid_levels.contains(&self.logging.level.as_str()) {
            return Err(ConfigError::InvalidValue {
                key: "logging.level".to_string(),
                message: format!(
                    "value '{}' is invalid, expected one of: {:?}",
                    self.logging.level, valid_levels
                ),
            });
        }

        Ok(())
    }

    /// Serializes the configuration to TOML.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError(e.to_string()))
    }
}
