//! Check result value objects.
//!
//! A [`CheckResult`] is immutable data describing one detected violation:
//! what is wrong, where, how severe, and (when an anchor exists in the
//! target text) how to fix it. Identical inputs always produce bit-identical
//! results, highlight formatting included.

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::fix::Fix;

/// How serious a reported violation is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
    Suggestion,
}

/// One detected violation, consumable by an external fix-application engine
/// or reporter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckResult {
    pub severity: Severity,
    /// Stable identifier of the rule that produced this result.
    pub rule_id: String,
    /// Human-readable statement of the problem, naming both the expected
    /// and the found characters with their Unicode code points.
    pub description: String,
    /// The target string with the offending span wrapped in `<e0>…</e0>`
    /// (and `<e1>…</e1>` for a second span), or `<e0/>` at an insertion
    /// point when the violation is an absence.
    pub highlight: String,
    /// The source string, passed through for reporting.
    pub source: String,
    /// The target locale spec.
    pub locale: String,
    /// Resource key, passed through verbatim.
    pub key: String,
    /// Path hint, passed through verbatim.
    pub path_hint: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fix: Option<Fix>,
}

impl CheckResult {
    /// Serialize this result to a JSON string.
    pub fn to_json(&self) -> Result<String, Error> {
        serde_json::to_string(self).map_err(Error::ConfigParse)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fix::EditCommand;

    fn sample() -> CheckResult {
        CheckResult {
            severity: Severity::Warning,
            rule_id: "resource-sentence-ending".to_string(),
            description: "Sentence ending should be \"。\" (U+3002) for ja-JP locale instead of \".\" (U+002E)".to_string(),
            highlight: "これは文です<e0>. (U+002E)</e0>".to_string(),
            source: "This is a sentence.".to_string(),
            locale: "ja-JP".to_string(),
            key: "sentence.test".to_string(),
            path_hint: "a/b/c.xliff".to_string(),
            fix: Some(Fix::new(vec![EditCommand::replace(6, 1, "。")]).unwrap()),
        }
    }

    #[test]
    fn test_severity_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Severity::Warning).unwrap(), "\"warning\"");
        assert_eq!(serde_json::to_string(&Severity::Error).unwrap(), "\"error\"");
    }

    #[test]
    fn test_to_json_round_trips_fields() {
        let json = sample().to_json().unwrap();
        assert!(json.contains("\"rule_id\":\"resource-sentence-ending\""));
        assert!(json.contains("\"locale\":\"ja-JP\""));
        assert!(json.contains("\"position\":6"));
    }

    #[test]
    fn test_fix_omitted_when_absent() {
        let mut result = sample();
        result.fix = None;
        let json = result.to_json().unwrap();
        assert!(!json.contains("\"fix\""));
    }

    #[test]
    fn test_determinism() {
        assert_eq!(sample(), sample());
        assert_eq!(sample().to_json().unwrap(), sample().to_json().unwrap());
    }
}
