//! Shared foundation for the Vigil issue index feed: error enums, domain
//! types, configuration, tracing setup, and process-wide constants.

pub mod config;
pub mod constants;
pub mod errors;
pub mod tracing;
pub mod types;
