//! Storage errors.

use std::path::PathBuf;

/// Errors raised by the SQLite layer.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("SQLite error: {message}")]
    SqliteError { message: String },

    #[error("Failed to open database {path}: {message}")]
    OpenFailed { path: PathBuf, message: String },

    #[error("Migration to version {version} failed: {message}")]
    MigrationFailed { version: u32, message: String },
}
