//! Security-standard parsing and SANS Top 25 classification.
//!
//! `rules.security_standards` is a comma-delimited list of prefixed tokens
//! (`owaspTop10:a1`, `cwe:89`). Tokens are partitioned by prefix into the
//! OWASP and CWE code lists; the CWE codes then place the issue into the
//! fixed SANS Top 25 categories.

use crate::transform::split_comma_list;

/// Prefix of OWASP Top 10 tokens.
pub const OWASP_TOP10_PREFIX: &str = "owaspTop10:";

/// Prefix of CWE tokens.
pub const CWE_PREFIX: &str = "cwe:";

/// Placeholder reported when a record carries no token of a given kind.
/// The index never receives an empty OWASP or CWE list.
pub const UNKNOWN_STANDARD: &str = "unknown";

/// SANS Top 25: insecure interaction between components.
pub const SANS_TOP_25_INSECURE_INTERACTION: &str = "insecure-interaction";

/// SANS Top 25: risky resource management.
pub const SANS_TOP_25_RISKY_RESOURCE: &str = "risky-resource";

/// SANS Top 25: porous defenses.
pub const SANS_TOP_25_POROUS_DEFENSES: &str = "porous-defenses";

// See https://www.sans.org/top25-software-errors
const INSECURE_CWE: &[&str] = &["89", "78", "79", "434", "352", "601"];
const RISKY_CWE: &[&str] = &["120", "22", "494", "829", "676", "131", "134", "190"];
const POROUS_CWE: &[&str] = &[
    "306", "862", "798", "311", "807", "250", "863", "732", "327", "307", "759",
];

/// Fixed mapping from SANS category to its CWE codes. Classified categories
/// are emitted in this table's order, not in input order.
pub const SANS_TOP_25_CWE_MAPPING: [(&str, &[&str]); 3] = [
    (SANS_TOP_25_INSECURE_INTERACTION, INSECURE_CWE),
    (SANS_TOP_25_RISKY_RESOURCE, RISKY_CWE),
    (SANS_TOP_25_POROUS_DEFENSES, POROUS_CWE),
];

/// Split a raw `security_standards` column into its OWASP and CWE code
/// lists, prefixes stripped, token order preserved. Unprefixed tokens are
/// ignored. A null column yields two empty lists.
pub fn parse_security_standards(raw: Option<&str>) -> (Vec<String>, Vec<String>) {
    let mut owasp = Vec::new();
    let mut cwe = Vec::new();
    for token in split_comma_list(raw) {
        if let Some(code) = token.strip_prefix(OWASP_TOP10_PREFIX) {
            owasp.push(code.to_string());
        } else if let Some(code) = token.strip_prefix(CWE_PREFIX) {
            cwe.push(code.to_string());
        }
    }
    (owasp, cwe)
}

/// Substitute the unknown sentinel for an empty code list.
pub fn or_unknown(codes: Vec<String>) -> Vec<String> {
    if codes.is_empty() {
        vec![UNKNOWN_STANDARD.to_string()]
    } else {
        codes
    }
}

/// SANS Top 25 categories whose CWE set intersects the parsed codes, each
/// at most once, in mapping order.
///
/// Must run against the parsed codes, before any unknown-sentinel
/// substitution: a record with no CWE tokens belongs to no category.
pub fn sans_top_25_categories(cwe: &[String]) -> Vec<String> {
    SANS_TOP_25_CWE_MAPPING
        .iter()
        .filter(|(_, codes)| cwe.iter().any(|code| codes.contains(&code.as_str())))
        .map(|(category, _)| (*category).to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partitions_tokens_by_prefix() {
        let (owasp, cwe) = parse_security_standards(Some("owaspTop10:a1,cwe:89,owaspTop10:a2"));
        assert_eq!(owasp, vec!["a1", "a2"]);
        assert_eq!(cwe, vec!["89"]);
    }

    #[test]
    fn null_column_yields_empty_lists() {
        let (owasp, cwe) = parse_security_standards(None);
        assert!(owasp.is_empty());
        assert!(cwe.is_empty());
    }

    #[test]
    fn unprefixed_tokens_are_ignored() {
        let (owasp, cwe) = parse_security_standards(Some("misc,cwe:22"));
        assert!(owasp.is_empty());
        assert_eq!(cwe, vec!["22"]);
    }

    #[test]
    fn empty_list_becomes_unknown_sentinel() {
        assert_eq!(or_unknown(Vec::new()), vec![UNKNOWN_STANDARD.to_string()]);
        assert_eq!(or_unknown(vec!["89".into()]), vec!["89".to_string()]);
    }

    #[test]
    fn classifies_into_mapping_order() {
        // A risky code listed before an insecure one still yields
        // mapping order.
        let cwe = vec!["22".to_string(), "89".to_string()];
        assert_eq!(
            sans_top_25_categories(&cwe),
            vec![SANS_TOP_25_INSECURE_INTERACTION, SANS_TOP_25_RISKY_RESOURCE]
        );
    }

    #[test]
    fn single_code_single_category() {
        let cwe = vec!["89".to_string()];
        assert_eq!(sans_top_25_categories(&cwe), vec![SANS_TOP_25_INSECURE_INTERACTION]);
    }

    #[test]
    fn category_appears_at_most_once() {
        let cwe = vec!["89".to_string(), "79".to_string()];
        assert_eq!(sans_top_25_categories(&cwe), vec![SANS_TOP_25_INSECURE_INTERACTION]);
    }

    #[test]
    fn classification_runs_before_sentinel_substitution() {
        // No CWE tokens: classification sees the empty parsed list and
        // yields no category, while the document's cwe list carries the
        // sentinel. The sentinel itself never classifies.
        let (_, cwe) = parse_security_standards(Some("owaspTop10:a1"));
        assert!(sans_top_25_categories(&cwe).is_empty());
        assert_eq!(or_unknown(cwe), vec![UNKNOWN_STANDARD.to_string()]);
        assert!(sans_top_25_categories(&[UNKNOWN_STANDARD.to_string()]).is_empty());
    }

    #[test]
    fn unknown_codes_classify_nowhere() {
        let cwe = vec!["9999".to_string()];
        assert!(sans_top_25_categories(&cwe).is_empty());
    }
}
