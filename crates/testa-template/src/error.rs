//! Template error types.
//!
//! Everything here is a **structural** failure — a broken template or an
//! unsupported combination. Bad user data never surfaces as a
//! `TemplateError`; that is the validation engine's output, not an error.

use testa_core::{JurisdictionCode, LanguageCode, WillType};
use thiserror::Error;

/// Errors raised by the template store and consistency checks.
#[derive(Error, Debug)]
pub enum TemplateError {
    /// The jurisdiction registry does not support this combination at all.
    /// Checked before any template lookup.
    #[error("unsupported combination: {jurisdiction}/{will_type}/{language}")]
    UnsupportedCombination {
        jurisdiction: JurisdictionCode,
        will_type: WillType,
        language: LanguageCode,
    },

    /// The combination is legal but no template is registered for it.
    #[error("template not found: {jurisdiction}/{will_type}/{language}")]
    TemplateNotFound {
        jurisdiction: JurisdictionCode,
        will_type: WillType,
        language: LanguageCode,
    },

    /// A section body or predicate references a variable the template does
    /// not declare. This is a broken template, not bad user input — it is
    /// fatal and never silently degraded.
    #[error("template {template_id}: {location} references undeclared variable \"{variable}\"")]
    UnresolvedVariableReference {
        template_id: String,
        /// Where the reference sits (section id, clause id, or predicate).
        location: String,
        variable: String,
    },

    /// The template is internally inconsistent (duplicate keys, an invalid
    /// rule pattern, a malformed structure).
    #[error("invalid template {template_id}: {reason}")]
    InvalidTemplate {
        template_id: String,
        reason: String,
    },

    /// A template for this key is already registered; the store is
    /// append-only.
    #[error("template already registered: {jurisdiction}/{will_type}/{language}")]
    DuplicateTemplate {
        jurisdiction: JurisdictionCode,
        will_type: WillType,
        language: LanguageCode,
    },

    /// YAML parse failure while loading a template definition.
    #[error("template YAML parse error: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    /// JSON parse failure while loading a template definition.
    #[error("template JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unresolved_reference_names_the_variable() {
        let err = TemplateError::UnresolvedVariableReference {
            template_id: "sk-holographic-sk".to_string(),
            location: "section beneficiaries".to_string(),
            variable: "heirs".to_string(),
        };
        let msg = format!("{err}");
        assert!(msg.contains("sk-holographic-sk"));
        assert!(msg.contains("heirs"));
    }

    #[test]
    fn unsupported_combination_display() {
        let err = TemplateError::UnsupportedCombination {
            jurisdiction: JurisdictionCode::new("DE").unwrap(),
            will_type: WillType::Witnessed,
            language: LanguageCode::new("de").unwrap(),
        };
        assert_eq!(format!("{err}"), "unsupported combination: DE/witnessed/de");
    }
}
