//! Per-row transformation rules: module extraction, path derivation,
//! tag splitting, branch resolution.

use vigil_core::errors::IndexError;

use crate::document::{SCOPE_DIRECTORY, SCOPE_PROJECT};

/// Split a comma-delimited column into trimmed, non-empty tokens.
/// A null column yields an empty list.
pub fn split_comma_list(raw: Option<&str>) -> Vec<String> {
    raw.map(|value| {
        value
            .split(',')
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .map(str::to_string)
            .collect()
    })
    .unwrap_or_default()
}

/// The component's own module: the last segment of the dot-delimited
/// module ancestor chain, empty segments omitted.
///
/// A well-formed chain carries at least one segment; an empty chain marks
/// a corrupt row and fails the scroll rather than producing a document
/// with no module.
pub fn extract_module(module_uuid_path: &str) -> Result<String, IndexError> {
    module_uuid_path
        .split('.')
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .last()
        .map(str::to_string)
        .ok_or_else(|| IndexError::MalformedRow {
            column: "module_uuid_path",
            message: "expected at least one module segment".to_string(),
        })
}

/// The file path for the index.
///
/// On projects the stored path is the module-relative path, not a real
/// file path, so project-scope rows index a null file path.
pub fn extract_file_path(path: Option<String>, scope: &str) -> Option<String> {
    match path {
        Some(p) if scope != SCOPE_PROJECT => Some(p),
        _ => None,
    }
}

/// The directory path derived from the file path.
///
/// Directory-scope rows keep the file path verbatim; otherwise the file
/// path is truncated at its last `/`, falling back to the root `/` when
/// no slash exists past position zero. A null file path stays null.
pub fn extract_directory_path(file_path: Option<&str>, scope: &str) -> Option<String> {
    let file_path = file_path?;
    if scope == SCOPE_DIRECTORY {
        return Some(file_path.to_string());
    }
    match file_path.rfind('/') {
        Some(index) if index > 0 => Some(file_path[..index].to_string()),
        _ => Some("/".to_string()),
    }
}

/// Branch resolution for one row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BranchResolution {
    pub project_uuid: String,
    pub is_main_branch: bool,
}

/// Resolve the document's project uuid and main-branch flag.
///
/// `main_branch_project_uuid` is null on main-branch rows, where the
/// branch uuid doubles as the project uuid.
pub fn resolve_branch(
    branch_uuid: &str,
    main_branch_project_uuid: Option<String>,
) -> BranchResolution {
    match main_branch_project_uuid {
        Some(main_project_uuid) => BranchResolution {
            project_uuid: main_project_uuid,
            is_main_branch: false,
        },
        None => BranchResolution {
            project_uuid: branch_uuid.to_string(),
            is_main_branch: true,
        },
    }
}
