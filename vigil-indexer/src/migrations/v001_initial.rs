//! V001: source tables read by the issue index feed.

pub const MIGRATION_SQL: &str = r#"
-- Rules: one row per analysis rule referenced by issues.
CREATE TABLE IF NOT EXISTS rules (
    id INTEGER PRIMARY KEY,
    language TEXT,
    security_standards TEXT
) STRICT;

-- Components: projects, modules, directories and files, one tree per
-- branch. scope is 'PRJ' | 'DIR' | 'FIL'; module_uuid_path is the
-- dot-delimited module ancestor chain; project_uuid is the branch root;
-- main_branch_project_uuid is set only on non-main branches.
CREATE TABLE IF NOT EXISTS components (
    uuid TEXT PRIMARY KEY,
    module_uuid_path TEXT NOT NULL,
    path TEXT,
    scope TEXT NOT NULL,
    organization_uuid TEXT,
    project_uuid TEXT NOT NULL,
    main_branch_project_uuid TEXT
) STRICT;

CREATE INDEX IF NOT EXISTS idx_components_project ON components(project_uuid);

-- Issues: dates are epoch milliseconds, tags a comma-delimited list,
-- issue_type the 1-based rule-type ordinal.
CREATE TABLE IF NOT EXISTS issues (
    kee TEXT NOT NULL UNIQUE,
    assignee TEXT,
    line INTEGER,
    resolution TEXT,
    severity TEXT,
    status TEXT,
    effort INTEGER,
    author_login TEXT,
    issue_close_date INTEGER,
    issue_creation_date INTEGER,
    issue_update_date INTEGER,
    rule_id INTEGER NOT NULL,
    component_uuid TEXT NOT NULL,
    project_uuid TEXT NOT NULL,
    tags TEXT,
    issue_type INTEGER NOT NULL
) STRICT;

CREATE INDEX IF NOT EXISTS idx_issues_component ON issues(component_uuid);
CREATE INDEX IF NOT EXISTS idx_issues_rule ON issues(rule_id);
CREATE INDEX IF NOT EXISTS idx_issues_project ON issues(project_uuid);
"#;
