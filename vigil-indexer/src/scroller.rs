//! Streaming scroller over the issues projection.
//!
//! One prepared statement, one live forward-only cursor, one [`IssueDoc`]
//! flattened per pull. Nothing is buffered beyond the single lookahead row
//! `has_next` needs.
//!
//! Release order falls out of the borrow chain: the cursor borrows the
//! scroller's statement, the statement borrows the caller's connection, so
//! drops release cursor, then statement, then session — on every exit
//! path, including a failure during construction. Callers who want the
//! session close logged rather than dropped use
//! [`crate::connection::close_quietly`].

use rusqlite::{params_from_iter, Connection, Row, Rows, Statement};
use vigil_core::errors::IndexError;
use vigil_core::types::IssueType;

use crate::document::IssueDoc;
use crate::query::{col, IssueQuery};
use crate::{security, transform};

/// A prepared issue scroll bound to one connection.
///
/// Not safe for concurrent use: the live cursor holds mutable position
/// state, and the borrow rules enforce exactly one cursor at a time.
pub struct IssueScroller<'conn> {
    stmt: Statement<'conn>,
    binds: Vec<String>,
}

impl std::fmt::Debug for IssueScroller<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IssueScroller")
            .field("binds", &self.binds)
            .finish_non_exhaustive()
    }
}

impl<'conn> IssueScroller<'conn> {
    /// Prepare the scroll statement for `query`.
    ///
    /// Fails with [`IndexError::PrepareFailed`] when the statement cannot
    /// be prepared; nothing is left allocated on the failure path.
    pub fn open(conn: &'conn Connection, query: &IssueQuery) -> Result<Self, IndexError> {
        let sql = query.sql();
        let stmt = conn.prepare(&sql).map_err(|e| IndexError::PrepareFailed {
            message: e.to_string(),
        })?;
        let binds = query.binds();
        tracing::debug!(binds = binds.len(), "prepared issue scroll");
        Ok(Self { stmt, binds })
    }

    /// Bind parameters, execute, and hand back the live cursor.
    pub fn scroll(&mut self) -> Result<IssueCursor<'_>, IndexError> {
        let rows = self
            .stmt
            .query(params_from_iter(self.binds.iter()))
            .map_err(|e| IndexError::PrepareFailed {
                message: e.to_string(),
            })?;
        Ok(IssueCursor {
            rows,
            lookahead: None,
            exhausted: false,
        })
    }
}

/// Live forward-only cursor producing one [`IssueDoc`] per pull.
pub struct IssueCursor<'stmt> {
    rows: Rows<'stmt>,
    lookahead: Option<IssueDoc>,
    exhausted: bool,
}

impl IssueCursor<'_> {
    /// Whether another document can be pulled.
    ///
    /// Fetches at most one row into the lookahead buffer and never
    /// advances the caller-visible position.
    pub fn has_next(&mut self) -> Result<bool, IndexError> {
        self.fill()?;
        Ok(self.lookahead.is_some())
    }

    /// Pull the next document, advancing the cursor by exactly one row.
    ///
    /// Fails with [`IndexError::CursorExhausted`] once the scroll is done;
    /// calling past exhaustion is a caller bug, not a transient state.
    pub fn next_doc(&mut self) -> Result<IssueDoc, IndexError> {
        self.fill()?;
        self.lookahead.take().ok_or(IndexError::CursorExhausted)
    }

    fn fill(&mut self) -> Result<(), IndexError> {
        if self.lookahead.is_some() || self.exhausted {
            return Ok(());
        }
        let row = self.rows.next().map_err(|e| IndexError::RowRead {
            message: e.to_string(),
        })?;
        match row {
            Some(row) => self.lookahead = Some(read_document(row)?),
            None => self.exhausted = true,
        }
        Ok(())
    }
}

impl Iterator for IssueCursor<'_> {
    type Item = Result<IssueDoc, IndexError>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.has_next() {
            Ok(true) => Some(self.next_doc()),
            Ok(false) => None,
            Err(e) => Some(Err(e)),
        }
    }
}

/// Flatten one row into a document.
///
/// All fields are populated, even when the source value is null — the
/// index interprets a missing field as unchanged.
fn read_document(row: &Row<'_>) -> Result<IssueDoc, IndexError> {
    let module_uuid_path: String = get(row, col::MODULE_UUID_PATH)?;
    let module_uuid = transform::extract_module(&module_uuid_path)?;

    let scope: String = get(row, col::SCOPE)?;
    let file_path = transform::extract_file_path(get(row, col::PATH)?, &scope);
    let directory_path = transform::extract_directory_path(file_path.as_deref(), &scope);

    let branch_uuid: String = get(row, col::PROJECT_UUID)?;
    let branch = transform::resolve_branch(&branch_uuid, get(row, col::MAIN_BRANCH_PROJECT_UUID)?);

    let tags: Option<String> = get(row, col::TAGS)?;
    let standards: Option<String> = get(row, col::SECURITY_STANDARDS)?;
    let (owasp, cwe) = security::parse_security_standards(standards.as_deref());
    let sans_top_25 = security::sans_top_25_categories(&cwe);

    Ok(IssueDoc {
        key: get(row, col::KEE)?,
        assignee: get(row, col::ASSIGNEE)?,
        line: get(row, col::LINE)?,
        resolution: get(row, col::RESOLUTION)?,
        severity: get(row, col::SEVERITY)?,
        status: get(row, col::STATUS)?,
        effort: get(row, col::EFFORT)?,
        author_login: get(row, col::AUTHOR_LOGIN)?,
        close_date: get(row, col::CLOSE_DATE)?,
        creation_date: get(row, col::CREATION_DATE)?,
        update_date: get(row, col::UPDATE_DATE)?,
        rule_id: get(row, col::RULE_ID)?,
        language: get(row, col::LANGUAGE)?,
        component_uuid: get(row, col::COMPONENT_UUID)?,
        module_uuid,
        module_uuid_path,
        file_path,
        directory_path,
        organization_uuid: get(row, col::ORGANIZATION_UUID)?,
        branch_uuid,
        project_uuid: branch.project_uuid,
        is_main_branch: branch.is_main_branch,
        tags: transform::split_comma_list(tags.as_deref()),
        issue_type: IssueType::from_ordinal(get(row, col::ISSUE_TYPE)?)?,
        owasp_top_10: security::or_unknown(owasp),
        cwe: security::or_unknown(cwe),
        sans_top_25,
    })
}

fn get<T: rusqlite::types::FromSql>(row: &Row<'_>, index: usize) -> Result<T, IndexError> {
    row.get(index).map_err(|e| IndexError::RowRead {
        message: e.to_string(),
    })
}
