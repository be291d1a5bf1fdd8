//! # Validation Result
//!
//! Derived and recomputed on demand from the current facts — never stored
//! independently of the generation that produced it.

use serde::{Deserialize, Serialize};

use testa_core::Severity;

use crate::issue::ValidationIssue;

/// The structured outcome of one validation pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationResult {
    /// All findings, in evaluation order, deduplicated by (field, code).
    pub issues: Vec<ValidationIssue>,
    /// Required-field coverage, 0–100 with two decimals. Independent of
    /// warnings: a complete document can still carry legal findings.
    pub completeness_score: f64,
    /// Whether the jurisdiction's legal rule family produced no errors.
    pub legal_requirements_met: bool,
    /// Keys of required template variables with no resolved value, in
    /// declaration order.
    pub missing_required_fields: Vec<String>,
}

impl ValidationResult {
    /// True only when no error-severity findings exist. Warnings never
    /// affect validity.
    pub fn is_valid(&self) -> bool {
        !self
            .issues
            .iter()
            .any(|issue| issue.severity == Severity::Error)
    }

    /// Error-severity findings.
    pub fn errors(&self) -> impl Iterator<Item = &ValidationIssue> {
        self.issues
            .iter()
            .filter(|i| i.severity == Severity::Error)
    }

    /// Warning-severity findings.
    pub fn warnings(&self) -> impl Iterator<Item = &ValidationIssue> {
        self.issues
            .iter()
            .filter(|i| i.severity == Severity::Warning)
    }

    /// The gravest severity present, if any finding exists.
    pub fn worst_severity(&self) -> Option<Severity> {
        self.issues.iter().map(|i| i.severity).max()
    }
}
