//! All error types for the loclint crate.
//!
//! These are returned from fallible construction (configuration parsing and
//! validation). Detected lint violations are never errors; they are reported
//! as [`crate::result::CheckResult`] values.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("unknown punctuation kind `{given}`; valid kinds are {valid}")]
    UnknownPunctuationKind { given: String, valid: String },

    #[error("invalid locale key `{0}` in configuration")]
    InvalidLocaleKey(String),

    #[error("configuration parse error: {0}")]
    ConfigParse(#[from] serde_json::Error),

    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("invalid fix: {0}")]
    InvalidFix(String),
}

impl Error {
    /// Creates a new invalid-configuration error.
    pub fn invalid_configuration(message: impl Into<String>) -> Self {
        Error::InvalidConfiguration(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_punctuation_kind_display() {
        let error = Error::UnknownPunctuationKind {
            given: "semicolon".to_string(),
            valid: "period, question, exclamation, ellipsis, colon".to_string(),
        };
        let display = error.to_string();
        assert!(display.contains("semicolon"));
        assert!(display.contains("ellipsis"));
    }

    #[test]
    fn test_invalid_locale_key_display() {
        let error = Error::InvalidLocaleKey("!!".to_string());
        assert_eq!(
            error.to_string(),
            "invalid locale key `!!` in configuration"
        );
    }

    #[test]
    fn test_invalid_configuration_display() {
        let error = Error::invalid_configuration("minimum length out of range");
        assert!(error.to_string().contains("minimum length out of range"));
    }
}
