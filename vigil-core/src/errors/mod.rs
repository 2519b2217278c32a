//! Error types for the Vigil issue index feed.

pub mod config_error;
pub mod index_error;
pub mod storage_error;

pub use config_error::ConfigError;
pub use index_error::IndexError;
pub use storage_error::StorageError;
