//! Serialization tests for the index document.

use serde_json::Value;
use vigil_core::types::IssueType;
use vigil_indexer::document::IssueDoc;

fn minimal_doc() -> IssueDoc {
    IssueDoc {
        key: "I-1".into(),
        assignee: None,
        line: None,
        resolution: None,
        severity: None,
        status: None,
        effort: None,
        author_login: None,
        close_date: None,
        creation_date: None,
        update_date: None,
        rule_id: 1,
        language: None,
        component_uuid: "FILE-1".into(),
        module_uuid: "MOD-1".into(),
        module_uuid_path: "MOD-1".into(),
        file_path: None,
        directory_path: None,
        organization_uuid: None,
        branch_uuid: "P-1".into(),
        project_uuid: "P-1".into(),
        is_main_branch: true,
        tags: Vec::new(),
        issue_type: IssueType::Bug,
        owasp_top_10: vec!["unknown".into()],
        cwe: vec!["unknown".into()],
        sans_top_25: Vec::new(),
    }
}

#[test]
fn absent_values_serialize_as_explicit_nulls() {
    let json = serde_json::to_value(minimal_doc()).unwrap();
    let object = json.as_object().unwrap();

    // The index treats a missing field as "unchanged"; every field must be
    // present, nulls included.
    for field in [
        "assignee",
        "line",
        "resolution",
        "severity",
        "status",
        "effort",
        "authorLogin",
        "closeDate",
        "creationDate",
        "updateDate",
        "language",
        "filePath",
        "directoryPath",
        "organizationUuid",
    ] {
        assert_eq!(object.get(field), Some(&Value::Null), "field {field}");
    }
    assert_eq!(object.get("tags"), Some(&Value::Array(Vec::new())));
    assert_eq!(object.get("sansTop25"), Some(&Value::Array(Vec::new())));
}

#[test]
fn field_names_are_camel_case_and_complete() {
    let json = serde_json::to_value(minimal_doc()).unwrap();
    let object = json.as_object().unwrap();
    assert_eq!(object.len(), 27, "one JSON field per document field");

    for field in [
        "key",
        "ruleId",
        "componentUuid",
        "moduleUuid",
        "moduleUuidPath",
        "branchUuid",
        "projectUuid",
        "isMainBranch",
        "type",
        "owaspTop10",
        "cwe",
        "sansTop25",
    ] {
        assert!(object.contains_key(field), "missing field {field}");
    }
    assert_eq!(object.get("type"), Some(&Value::String("BUG".into())));
}
