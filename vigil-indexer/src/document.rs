//! The flattened issue record consumed by the search index.

use serde::Serialize;
use vigil_core::types::IssueType;

/// Component scope marker for projects.
pub const SCOPE_PROJECT: &str = "PRJ";
/// Component scope marker for directories.
pub const SCOPE_DIRECTORY: &str = "DIR";
/// Component scope marker for files.
pub const SCOPE_FILE: &str = "FIL";

/// One issue row flattened for the search index.
///
/// Every field serializes even when the source value is absent: the index
/// treats a missing field as "unchanged" rather than "cleared", so absent
/// values must reach it as explicit nulls or empty lists. None of the
/// `Option` fields may grow a `skip_serializing_if` attribute.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueDoc {
    pub key: String,
    pub assignee: Option<String>,
    pub line: Option<i64>,
    pub resolution: Option<String>,
    pub severity: Option<String>,
    pub status: Option<String>,
    pub effort: Option<i64>,
    pub author_login: Option<String>,
    /// Epoch milliseconds.
    pub close_date: Option<i64>,
    /// Epoch milliseconds.
    pub creation_date: Option<i64>,
    /// Epoch milliseconds.
    pub update_date: Option<i64>,
    pub rule_id: i64,
    pub language: Option<String>,
    pub component_uuid: String,
    /// Last segment of `module_uuid_path`.
    pub module_uuid: String,
    /// Dot-delimited module ancestor chain, as stored.
    pub module_uuid_path: String,
    /// Null on project-scope rows, whose stored path is module-relative.
    pub file_path: Option<String>,
    /// Null whenever `file_path` is null.
    pub directory_path: Option<String>,
    pub organization_uuid: Option<String>,
    pub branch_uuid: String,
    /// The main-branch project uuid for branch rows, the branch uuid itself
    /// for main-branch rows.
    pub project_uuid: String,
    pub is_main_branch: bool,
    pub tags: Vec<String>,
    #[serde(rename = "type")]
    pub issue_type: IssueType,
    /// OWASP Top 10 codes, or the unknown sentinel when the rule carries none.
    pub owasp_top_10: Vec<String>,
    /// CWE identifiers, or the unknown sentinel when the rule carries none.
    pub cwe: Vec<String>,
    /// SANS Top 25 categories derived from the CWE identifiers; may be empty.
    pub sans_top_25: Vec<String>,
}
