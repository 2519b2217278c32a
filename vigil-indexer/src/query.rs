//! The issue scroll query: shared projection and filter composition.

use vigil_core::constants::MAX_ISSUE_KEYS_PER_SCROLL;
use vigil_core::errors::IndexError;

/// Number of projected columns.
pub const COLUMN_COUNT: usize = 23;

/// Ordered column projection over `issues i`, `rules r`, `components c`.
///
/// The row reader addresses columns through [`col`]; the two must stay
/// aligned, so adding or reordering a column is a change here and in
/// [`col`] only, pinned by the projection-length test.
pub const ISSUE_PROJECTION: [&str; COLUMN_COUNT] = [
    "i.kee",
    "i.assignee",
    "i.line",
    "i.resolution",
    "i.severity",
    "i.status",
    "i.effort",
    "i.author_login",
    "i.issue_close_date",
    "i.issue_creation_date",
    "i.issue_update_date",
    "r.id",
    "r.language",
    "c.uuid",
    "c.module_uuid_path",
    "c.path",
    "c.scope",
    "c.organization_uuid",
    "c.project_uuid",
    "c.main_branch_project_uuid",
    "i.tags",
    "i.issue_type",
    "r.security_standards",
];

/// Zero-based indices into [`ISSUE_PROJECTION`].
pub mod col {
    pub const KEE: usize = 0;
    pub const ASSIGNEE: usize = 1;
    pub const LINE: usize = 2;
    pub const RESOLUTION: usize = 3;
    pub const SEVERITY: usize = 4;
    pub const STATUS: usize = 5;
    pub const EFFORT: usize = 6;
    pub const AUTHOR_LOGIN: usize = 7;
    pub const CLOSE_DATE: usize = 8;
    pub const CREATION_DATE: usize = 9;
    pub const UPDATE_DATE: usize = 10;
    pub const RULE_ID: usize = 11;
    pub const LANGUAGE: usize = 12;
    pub const COMPONENT_UUID: usize = 13;
    pub const MODULE_UUID_PATH: usize = 14;
    pub const PATH: usize = 15;
    pub const SCOPE: usize = 16;
    pub const ORGANIZATION_UUID: usize = 17;
    pub const PROJECT_UUID: usize = 18;
    pub const MAIN_BRANCH_PROJECT_UUID: usize = 19;
    pub const TAGS: usize = 20;
    pub const ISSUE_TYPE: usize = 21;
    pub const SECURITY_STANDARDS: usize = 22;
}

/// One filter variant: a predicate fragment paired with the bind values
/// its placeholders consume, composed into the WHERE clause in
/// construction order.
#[derive(Debug, Clone)]
struct Predicate {
    fragment: String,
    binds: Vec<String>,
}

/// A parameterized scroll over the issues projection.
///
/// Filters are optional and combine freely: by owning project, by an
/// explicit bounded set of issue keys, both, or neither (full scan).
#[derive(Debug, Clone)]
pub struct IssueQuery {
    predicates: Vec<Predicate>,
}

impl IssueQuery {
    /// Build a query for the given filters.
    ///
    /// The project filter restricts both the component's project reference
    /// and the issue's own, binding the uuid twice. Fails with
    /// [`IndexError::TooManyIssueKeys`] when `issue_keys` exceeds
    /// [`MAX_ISSUE_KEYS_PER_SCROLL`]; callers must chunk larger key sets.
    pub fn new(
        project_uuid: Option<&str>,
        issue_keys: Option<&[String]>,
    ) -> Result<Self, IndexError> {
        let key_count = issue_keys.map_or(0, <[String]>::len);
        if key_count > MAX_ISSUE_KEYS_PER_SCROLL {
            return Err(IndexError::TooManyIssueKeys {
                limit: MAX_ISSUE_KEYS_PER_SCROLL,
                count: key_count,
            });
        }

        let mut predicates = Vec::new();
        if let Some(uuid) = project_uuid {
            predicates.push(Predicate {
                fragment: "c.project_uuid = ? AND i.project_uuid = ?".to_string(),
                binds: vec![uuid.to_string(), uuid.to_string()],
            });
        }
        if let Some(keys) = issue_keys {
            if !keys.is_empty() {
                let placeholders = vec!["?"; keys.len()].join(",");
                predicates.push(Predicate {
                    fragment: format!("i.kee IN ({placeholders})"),
                    binds: keys.to_vec(),
                });
            }
        }
        Ok(Self { predicates })
    }

    /// A full-table scroll with no filters.
    pub fn all() -> Self {
        Self {
            predicates: Vec::new(),
        }
    }

    /// Render the SQL statement.
    pub fn sql(&self) -> String {
        let mut sql = format!(
            "SELECT {} FROM issues i \
             INNER JOIN rules r ON r.id = i.rule_id \
             INNER JOIN components c ON c.uuid = i.component_uuid",
            ISSUE_PROJECTION.join(",")
        );
        if !self.predicates.is_empty() {
            let clauses: Vec<&str> = self
                .predicates
                .iter()
                .map(|predicate| predicate.fragment.as_str())
                .collect();
            sql.push_str(" WHERE ");
            sql.push_str(&clauses.join(" AND "));
        }
        sql
    }

    /// Bind values, ordered to match the placeholders in [`Self::sql`].
    pub fn binds(&self) -> Vec<String> {
        self.predicates
            .iter()
            .flat_map(|predicate| predicate.binds.iter().cloned())
            .collect()
    }
}
