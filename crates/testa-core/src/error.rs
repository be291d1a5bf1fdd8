//! # Error Hierarchy
//!
//! Structured error types shared across the Testament Stack, built with
//! `thiserror`. No `Box<dyn Error>`, no `.unwrap()` outside tests.
//!
//! Two families live here. [`IdentifierError`] covers domain-primitive
//! construction failures; [`CoreError`] is the umbrella the higher crates
//! wrap into their own error enums. Errors that indicate a broken template
//! or configuration are defined next to the crates that raise them —
//! user-data deficiencies are never errors at all, they are reported as
//! validation issues.

use thiserror::Error;

/// Umbrella error type for foundational operations.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Domain primitive validation failure.
    #[error("identifier error: {0}")]
    Identifier(#[from] IdentifierError),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Validation errors for domain primitive newtypes.
///
/// Each identifier type enforces format constraints at construction time.
/// These errors carry the invalid input and the expected format so that
/// misconfiguration can be diagnosed without guesswork.
#[derive(Error, Debug)]
pub enum IdentifierError {
    /// Jurisdiction code is not an ISO 3166-1 alpha-2 code.
    #[error("invalid jurisdiction code: \"{0}\" (expected two ASCII uppercase letters, e.g. \"SK\")")]
    InvalidJurisdictionCode(String),

    /// Language code is not an ISO 639-1 code.
    #[error("invalid language code: \"{0}\" (expected two ASCII lowercase letters, e.g. \"sk\")")]
    InvalidLanguageCode(String),

    /// User identifier is empty.
    #[error("invalid user id: must be non-empty")]
    InvalidUserId,

    /// Will type string does not name a known execution form.
    #[error("unknown will type: \"{0}\" (expected holographic, witnessed, or notarial)")]
    UnknownWillType(String),

    /// Date string is not a valid calendar date.
    #[error("invalid date: \"{value}\" ({reason})")]
    InvalidDate {
        /// The string that failed to parse.
        value: String,
        /// Why it was rejected.
        reason: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identifier_error_jurisdiction_display() {
        let err = IdentifierError::InvalidJurisdictionCode("slovakia".to_string());
        let msg = format!("{err}");
        assert!(msg.contains("slovakia"));
        assert!(msg.contains("uppercase"));
    }

    #[test]
    fn identifier_error_language_display() {
        let err = IdentifierError::InvalidLanguageCode("SK".to_string());
        assert!(format!("{err}").contains("lowercase"));
    }

    #[test]
    fn identifier_error_will_type_display() {
        let err = IdentifierError::UnknownWillType("oral".to_string());
        let msg = format!("{err}");
        assert!(msg.contains("oral"));
        assert!(msg.contains("holographic"));
    }

    #[test]
    fn core_error_wraps_identifier() {
        let err = CoreError::from(IdentifierError::InvalidUserId);
        assert!(format!("{err}").contains("non-empty"));
    }

    #[test]
    fn identifier_error_invalid_date() {
        let err = IdentifierError::InvalidDate {
            value: "2026-13-40".to_string(),
            reason: "month out of range".to_string(),
        };
        let msg = format!("{err}");
        assert!(msg.contains("2026-13-40"));
        assert!(msg.contains("month out of range"));
    }
}
