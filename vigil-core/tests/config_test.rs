//! Tests for indexer configuration loading.

use std::io::Write;
use std::path::PathBuf;

use vigil_core::config::IndexerConfig;
use vigil_core::errors::ConfigError;

#[test]
fn defaults_apply_when_fields_are_absent() {
    let config: IndexerConfig = toml::from_str("").unwrap();
    assert_eq!(config.effective_database_path(), PathBuf::from(".vigil/vigil.db"));
    assert_eq!(config.effective_log_filter(), "vigil=info");
}

#[test]
fn explicit_values_override_defaults() {
    let config: IndexerConfig = toml::from_str(
        r#"
        database_path = "/var/lib/vigil/vigil.db"
        log_filter = "indexer=debug"
        "#,
    )
    .unwrap();
    assert_eq!(
        config.effective_database_path(),
        PathBuf::from("/var/lib/vigil/vigil.db")
    );
    assert_eq!(config.effective_log_filter(), "indexer=debug");
}

#[test]
fn load_reads_a_toml_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "log_filter = \"vigil=warn\"").unwrap();

    let config = IndexerConfig::load(file.path()).unwrap();
    assert_eq!(config.effective_log_filter(), "vigil=warn");
}

#[test]
fn load_missing_file_fails() {
    let err = IndexerConfig::load(std::path::Path::new("/nonexistent/vigil.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::FileNotFound { .. }));
}

#[test]
fn load_rejects_invalid_toml() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "database_path = [not toml").unwrap();

    let err = IndexerConfig::load(file.path()).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
}
