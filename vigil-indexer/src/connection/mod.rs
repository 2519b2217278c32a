//! SQLite connection handling for the index feed.

pub mod pragmas;

use std::path::Path;

use rusqlite::{Connection, OpenFlags};
use vigil_core::errors::StorageError;

/// Open the Vigil database with the standard pragmas applied.
pub fn open(path: &Path) -> Result<Connection, StorageError> {
    let conn = Connection::open(path).map_err(|e| StorageError::OpenFailed {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    pragmas::apply_pragmas(&conn)?;
    Ok(conn)
}

/// Open a read-only connection for scrolling an existing database.
pub fn open_readonly(path: &Path) -> Result<Connection, StorageError> {
    let flags = OpenFlags::SQLITE_OPEN_READ_ONLY
        | OpenFlags::SQLITE_OPEN_URI
        | OpenFlags::SQLITE_OPEN_NO_MUTEX;
    let conn = Connection::open_with_flags(path, flags).map_err(|e| StorageError::OpenFailed {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    pragmas::apply_read_pragmas(&conn)?;
    Ok(conn)
}

/// Open an in-memory database (tests and ephemeral runs).
pub fn open_in_memory() -> Result<Connection, StorageError> {
    let conn = Connection::open_in_memory().map_err(|e| StorageError::OpenFailed {
        path: ":memory:".into(),
        message: e.to_string(),
    })?;
    pragmas::apply_pragmas(&conn)?;
    Ok(conn)
}

/// Close a connection, best effort.
///
/// Runs the optimize pragma, then closes. Each step is attempted even if
/// the previous one failed; failures are logged, never raised, so a close
/// problem on one resource cannot leak the others.
pub fn close_quietly(conn: Connection) {
    if let Err(e) = pragmas::optimize_on_close(&conn) {
        tracing::warn!(error = %e, "optimize on close failed");
    }
    if let Err((_conn, e)) = conn.close() {
        tracing::warn!(error = %e, "failed to close connection");
    }
}
