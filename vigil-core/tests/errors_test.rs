//! Tests for the Vigil error types.

use vigil_core::errors::{ConfigError, IndexError, StorageError};

#[test]
fn too_many_issue_keys_names_the_limit_and_advises_chunking() {
    let err = IndexError::TooManyIssueKeys {
        limit: 1000,
        count: 1001,
    };
    let message = err.to_string();
    assert!(message.contains("1000"), "message must state the limit: {message}");
    assert!(message.contains("1001"), "message must state the count: {message}");
    assert!(
        message.contains("smaller chunks"),
        "message must advise chunking: {message}"
    );
}

#[test]
fn prepare_failed_carries_the_cause() {
    let err = IndexError::PrepareFailed {
        message: "no such table: issues".into(),
    };
    assert!(err.to_string().contains("no such table: issues"));
}

#[test]
fn malformed_row_names_the_column() {
    let err = IndexError::MalformedRow {
        column: "module_uuid_path",
        message: "expected at least one module segment".into(),
    };
    assert!(err.to_string().contains("module_uuid_path"));
}

#[test]
fn cursor_exhausted_display() {
    assert_eq!(IndexError::CursorExhausted.to_string(), "Issue cursor is exhausted");
}

#[test]
fn storage_error_display() {
    let err = StorageError::MigrationFailed {
        version: 1,
        message: "syntax error".into(),
    };
    let message = err.to_string();
    assert!(message.contains("version 1"));
    assert!(message.contains("syntax error"));
}

#[test]
fn config_error_display() {
    let err = ConfigError::FileNotFound {
        path: "/etc/vigil.toml".into(),
    };
    assert!(err.to_string().contains("/etc/vigil.toml"));
}
