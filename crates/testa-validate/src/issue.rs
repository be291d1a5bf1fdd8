//! # Validation Issues
//!
//! One finding per rule violation, carrying the severity, the offending
//! field, a stable machine code, a human message, and optionally a legal
//! citation and a suggested fix.

use serde::{Deserialize, Serialize};

use testa_core::Severity;

/// Stable machine-readable code of a finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueCode {
    RequiredFieldMissing,
    MinLength,
    MaxLength,
    PatternMismatch,
    MinItems,
    LegalAgeRequirement,
    UnusualAge,
    DateOfBirthMissing,
    WitnessCountBelowMinimum,
    WitnessIsBeneficiary,
    WitnessLacksCapacity,
    NotarizationMissing,
    ForcedHeirshipShortfall,
    SpouseNotBeneficiary,
    PercentageOverflow,
    PercentageUnderflow,
    InvalidPercentage,
    InvalidValue,
    MinorChildrenNoGuardian,
    NoAlternateGuardian,
    NoExecutor,
    NoPrimaryExecutor,
    MultiplePrimaryExecutors,
    MissingContact,
    InvalidEmail,
    NoAssets,
}

/// A single validation finding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationIssue {
    pub severity: Severity,
    /// Dotted path of the offending field (`personal.date_of_birth`,
    /// `beneficiaries[2].share`, `witnesses`).
    pub field: String,
    pub code: IssueCode,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub legal_reference: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggested_fix: Option<String>,
}

impl ValidationIssue {
    pub fn error(code: IssueCode, field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(Severity::Error, code, field, message)
    }

    pub fn warning(code: IssueCode, field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, code, field, message)
    }

    pub fn info(code: IssueCode, field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(Severity::Info, code, field, message)
    }

    pub fn new(
        severity: Severity,
        code: IssueCode,
        field: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            severity,
            field: field.into(),
            code,
            message: message.into(),
            legal_reference: None,
            suggested_fix: None,
        }
    }

    pub fn with_legal_reference(mut self, reference: impl Into<String>) -> Self {
        self.legal_reference = Some(reference.into());
        self
    }

    pub fn with_suggested_fix(mut self, fix: impl Into<String>) -> Self {
        self.suggested_fix = Some(fix.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_sets_optional_context() {
        let issue = ValidationIssue::error(
            IssueCode::LegalAgeRequirement,
            "personal.date_of_birth",
            "Testator must be at least 18 years old",
        )
        .with_legal_reference("Minimum age requirement for SK")
        .with_suggested_fix("Verify the date of birth");
        assert_eq!(issue.severity, Severity::Error);
        assert!(issue.legal_reference.is_some());
        assert!(issue.suggested_fix.is_some());
    }

    #[test]
    fn code_serde_snake_case() {
        assert_eq!(
            serde_json::to_string(&IssueCode::WitnessCountBelowMinimum).unwrap(),
            "\"witness_count_below_minimum\""
        );
    }
}
