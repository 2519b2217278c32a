//! Configuration for the Vigil issue index feed.

pub mod indexer_config;

pub use indexer_config::IndexerConfig;
