//! Configuration for modelmetrics.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::store::{KeyValueStore, MemoryStore};
use crate::MetricsResult;

/// Main configuration for modelmetrics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// General settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Store settings.
    #[serde(default)]
    pub store: StoreConfig,
}

/// General settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Log format (text, json).
    #[serde(default = "default_log_format")]
    pub log_format: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_format: default_log_format(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "text".to_string()
}

/// Available store backends.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum StoreBackend {
    /// In-process LRU store, lost on exit.
    Memory,
    /// SQLite file.
    Sqlite,
}

/// Key-value store settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Backend to use.
    #[serde(default = "default_backend")]
    pub backend: StoreBackend,

    /// SQLite database path.
    #[serde(default = "default_db_path")]
    pub db_path: PathBuf,

    /// Maximum number of entries for the memory backend.
    #[serde(default = "default_capacity")]
    pub capacity: usize,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            backend: default_backend(),
            db_path: default_db_path(),
            capacity: default_capacity(),
        }
    }
}

fn default_backend() -> StoreBackend {
    StoreBackend::Sqlite
}

fn default_db_path() -> PathBuf {
    PathBuf::from(".modelmetrics/metrics.db")
}

fn default_capacity() -> usize {
    10_000
}

impl Config {
    /// Loads configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> MetricsResult<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Saves configuration to a TOML file.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> MetricsResult<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Creates default configuration.
    pub fn default_config() -> Self {
        Self {
            general: GeneralConfig::default(),
            store: StoreConfig::default(),
        }
    }

    /// Tries to load configuration from current directory or uses default.
    pub fn load_or_default() -> Self {
        Self::load("modelmetrics.toml").unwrap_or_else(|_| Self::default_config())
    }

    /// Opens the configured store backend.
    pub fn open_store(&self) -> MetricsResult<Arc<dyn KeyValueStore>> {
        match self.store.backend {
            StoreBackend::Memory => Ok(Arc::new(MemoryStore::new(self.store.capacity))),
            #[cfg(feature = "sqlite")]
            StoreBackend::Sqlite => Ok(Arc::new(crate::store::SqliteStore::new(
                &self.store.db_path,
            )?)),
            #[cfg(not(feature = "sqlite"))]
            StoreBackend::Sqlite => Err(crate::MetricsError::config(
                "sqlite backend requires the `sqlite` feature",
            )),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::default_config()
    }
}
