//! Issue classification types.

use serde::{Deserialize, Serialize};

use crate::errors::IndexError;

/// The kind of an issue, stored as a 1-based ordinal in `issues.issue_type`.
///
/// Serializes SCREAMING_SNAKE_CASE for the index payload (`CODE_SMELL`,
/// `BUG`, `VULNERABILITY`, `SECURITY_HOTSPOT`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IssueType {
    CodeSmell,
    Bug,
    Vulnerability,
    SecurityHotspot,
}

impl IssueType {
    /// Decode the database ordinal.
    ///
    /// An unknown ordinal is a malformed row, not a default: the index
    /// must never carry an issue type the platform does not define.
    pub fn from_ordinal(ordinal: i64) -> Result<Self, IndexError> {
        match ordinal {
            1 => Ok(Self::CodeSmell),
            2 => Ok(Self::Bug),
            3 => Ok(Self::Vulnerability),
            4 => Ok(Self::SecurityHotspot),
            other => Err(IndexError::MalformedRow {
                column: "issue_type",
                message: format!("unknown issue type ordinal {other}"),
            }),
        }
    }

    /// The ordinal stored in the database for this type.
    pub fn ordinal(self) -> i64 {
        match self {
            Self::CodeSmell => 1,
            Self::Bug => 2,
            Self::Vulnerability => 3,
            Self::SecurityHotspot => 4,
        }
    }
}
