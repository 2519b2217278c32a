//! Issue indexer configuration.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_DATABASE_PATH, DEFAULT_LOG_FILTER};
use crate::errors::ConfigError;

/// Configuration for the issue index feed.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct IndexerConfig {
    /// Path to the Vigil SQLite database. Default: `.vigil/vigil.db`.
    pub database_path: Option<PathBuf>,
    /// Log filter applied when `VIGIL_LOG` is not set (e.g. `vigil=debug`).
    pub log_filter: Option<String>,
}

impl IndexerConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;
        toml::from_str(&raw).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Returns the effective database path, defaulting to `.vigil/vigil.db`.
    pub fn effective_database_path(&self) -> PathBuf {
        self.database_path
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATABASE_PATH))
    }

    /// Returns the effective log filter, defaulting to `vigil=info`.
    pub fn effective_log_filter(&self) -> &str {
        self.log_filter.as_deref().unwrap_or(DEFAULT_LOG_FILTER)
    }
}
