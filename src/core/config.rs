//! Configuration management for the VUTTR API.
//!
//! This module provides a centralized configuration structure populated
//! from defaults, a `.env` file and `VUTTR_*` environment variables.

use super::error::{Error, Result};
use super::transport::HttpConfig;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::str::FromStr;

/// Main configuration structure for the API server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// HTTP transport configuration.
    pub http: HttpConfig,

    /// Tool store configuration.
    pub storage: StorageConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported by the info endpoint.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,
}

/// Which document store backs the tool collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// Process memory; contents are lost on restart.
    #[default]
    Memory,

    /// A JSON document file at `StorageConfig::data_path`.
    File,
}

impl FromStr for StorageBackend {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "memory" | "mem" => Ok(Self::Memory),
            "file" | "json" => Ok(Self::File),
            other => Err(format!("unknown storage backend '{other}'")),
        }
    }
}

/// Configuration for the tool store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    pub backend: StorageBackend,

    /// Location of the collection file for the `file` backend.
    pub data_path: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackend::Memory,
            data_path: PathBuf::from("data/tools.json"),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "vuttr-api".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
            },
            http: HttpConfig::default(),
            storage: StorageConfig::default(),
        }
    }
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables.
    ///
    /// Environment variables are expected to be prefixed with `VUTTR_`.
    /// For example: `VUTTR_SERVER_NAME`, `VUTTR_LOG_LEVEL`, `VUTTR_STORAGE`.
    /// Nothing is logged here: this runs before logging is initialized.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("VUTTR_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("VUTTR_LOG_LEVEL") {
            config.logging.level = level;
        }

        config.http = HttpConfig::from_env();

        if let Ok(backend) = std::env::var("VUTTR_STORAGE") {
            config.storage.backend = backend
                .parse()
                .map_err(|e| Error::config(format!("VUTTR_STORAGE: {e}")))?;
        }

        if let Ok(path) = std::env::var("VUTTR_DATA_PATH") {
            config.storage.data_path = PathBuf::from(path);
        }

        Ok(config)
    }
}
