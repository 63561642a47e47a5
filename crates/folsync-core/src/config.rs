// Rust guideline compliant 2026-10-19

//! Configuration management for Folsync.

use crate::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Name of the configuration file inside the config directory.
pub const CONFIG_FILE_NAME: &str = "folsync.toml";

/// Output format for command results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// JSON output format.
    Json,
    /// Human-readable table format.
    #[default]
    Table,
    /// Plain text format.
    Plain,
}

impl OutputFormat {
    /// Parses a format name.
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_lowercase().as_str() {
            "json" => Some(Self::Json),
            "table" => Some(Self::Table),
            "plain" => Some(Self::Plain),
            _ => None,
        }
    }
}

/// Configuration for Folsync behavior.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Path of the reference dataset JSON file.
    #[serde(default = "default_dataset_path")]
    pub dataset_path: PathBuf,

    /// Default output format for commands.
    #[serde(default)]
    pub output_format: OutputFormat,

    /// Address the HTTP variant binds to.
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,

    /// Port the HTTP variant listens on.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Log level (error, warn, info, debug, trace).
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Optional log file; logs go to stderr when unset.
    #[serde(default)]
    pub log_file: Option<PathBuf>,
}

fn default_dataset_path() -> PathBuf {
    PathBuf::from("data/dataset.json")
}

fn default_bind_addr() -> String {
    "127.0.0.1".to_string()
}

/// Default HTTP port.
fn default_port() -> u16 {
    3000
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dataset_path: default_dataset_path(),
            output_format: OutputFormat::default(),
            bind_addr: default_bind_addr(),
            port: default_port(),
            log_level: default_log_level(),
            log_file: None,
        }
    }
}

impl Config {
    /// Loads configuration from file and environment variables.
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values
    /// 2. Configuration file at `<config_dir>/folsync.toml`
    /// 3. Environment variables with `FOLSYNC_` prefix
    ///
    /// # Arguments
    ///
    /// * `config_dir` - Directory holding `folsync.toml`
    ///
    /// # Returns
    ///
    /// A Config struct with values from file and environment variables applied.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Configuration file exists but cannot be read
    /// - Configuration file contains invalid TOML
    /// - Configuration values fail validation
    pub fn load(config_dir: &Path) -> Result<Self> {
        let mut config = Self::default();

        let config_path = config_dir.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            config = toml::from_str(&content).map_err(|e| {
                crate::Error::InvalidConfig(format!("Invalid config file: {}", e))
            })?;
        }

        config.apply_env_overrides()?;
        config.validate()?;

        Ok(config)
    }

    /// Applies environment variable overrides to the configuration.
    ///
    /// Supported environment variables:
    /// - `FOLSYNC_DATASET_PATH` - Dataset JSON path
    /// - `FOLSYNC_OUTPUT_FORMAT` - Output format (json/table/plain)
    /// - `FOLSYNC_BIND_ADDR` - HTTP bind address
    /// - `FOLSYNC_PORT` - HTTP port
    /// - `FOLSYNC_LOG_LEVEL` - Log level
    /// - `FOLSYNC_LOG_FILE` - Log file path
    ///
    /// # Errors
    ///
    /// Returns an error if environment variable values are invalid.
    fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(val) = std::env::var("FOLSYNC_DATASET_PATH") {
            self.dataset_path = PathBuf::from(val);
        }

        if let Ok(val) = std::env::var("FOLSYNC_OUTPUT_FORMAT") {
            self.output_format = OutputFormat::parse(&val).ok_or_else(|| {
                crate::Error::InvalidConfig(
                    "FOLSYNC_OUTPUT_FORMAT must be json, table, or plain".to_string(),
                )
            })?;
        }

        if let Ok(val) = std::env::var("FOLSYNC_BIND_ADDR") {
            self.bind_addr = val;
        }

        if let Ok(val) = std::env::var("FOLSYNC_PORT") {
            self.port = val.parse().map_err(|_| {
                crate::Error::InvalidConfig("FOLSYNC_PORT must be a number 1-65535".to_string())
            })?;
        }

        if let Ok(val) = std::env::var("FOLSYNC_LOG_LEVEL") {
            self.log_level = val;
        }

        if let Ok(val) = std::env::var("FOLSYNC_LOG_FILE") {
            self.log_file = Some(PathBuf::from(val));
        }

        Ok(())
    }

    /// Validates the configuration values.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - dataset_path is empty
    /// - port is zero
    /// - log_level is not a known level
    fn validate(&self) -> Result<()> {
        if self.dataset_path.as_os_str().is_empty() {
            return Err(crate::Error::InvalidConfig(
                "dataset_path cannot be empty".to_string(),
            ));
        }

        if self.port == 0 {
            return Err(crate::Error::InvalidConfig(
                "port must be greater than 0".to_string(),
            ));
        }

        if !matches!(
            self.log_level.to_lowercase().as_str(),
            "error" | "warn" | "info" | "debug" | "trace"
        ) {
            return Err(crate::Error::InvalidConfig(format!(
                "log_level must be error, warn, info, debug, or trace, got {}",
                self.log_level
            )));
        }

        Ok(())
    }

    /// Saves the configuration to `<config_dir>/folsync.toml`.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be created or written
    /// - Serialization fails
    pub fn save(&self, config_dir: &Path) -> Result<()> {
        let config_path = config_dir.join(CONFIG_FILE_NAME);
        let content = toml::to_string_pretty(self).map_err(|e| {
            crate::Error::InvalidConfig(format!("Failed to serialize config: {}", e))
        })?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }
}
