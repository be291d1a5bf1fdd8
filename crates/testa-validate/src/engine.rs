//! # Validation Orchestration
//!
//! Runs the three rule families in order, accumulates their findings,
//! computes the completeness score, and packages the result.

use std::collections::BTreeSet;

use chrono::NaiveDate;

use testa_core::{Severity, Timestamp};
use testa_facts::UserFacts;
use testa_registry::JurisdictionConfig;
use testa_render::resolve_variables;
use testa_template::WillTemplate;

use crate::cross;
use crate::error::ValidateError;
use crate::issue::ValidationIssue;
use crate::legal;
use crate::result::ValidationResult;
use crate::structural;

/// Validate against the current UTC date.
///
/// # Errors
///
/// Only structural template defects; see [`ValidateError`].
pub fn validate(
    facts: &UserFacts,
    template: &WillTemplate,
    config: &JurisdictionConfig,
) -> Result<ValidationResult, ValidateError> {
    validate_at(facts, template, config, Timestamp::now().date())
}

/// Validate with an explicit reference date for age and minor checks.
///
/// Evaluation accumulates across all rule families; it never
/// short-circuits, so a caller sees every finding at once.
pub fn validate_at(
    facts: &UserFacts,
    template: &WillTemplate,
    config: &JurisdictionConfig,
    as_of: NaiveDate,
) -> Result<ValidationResult, ValidateError> {
    let resolved = resolve_variables(template, facts, as_of)?;

    // 1. Structural rules over resolved values.
    let (mut issues, missing_required_fields) = structural::evaluate(template, &resolved);

    // 2. Jurisdiction legal rules.
    let legal_issues = legal::evaluate(facts, template.will_type, config, as_of);
    let legal_requirements_met = !legal_issues
        .iter()
        .any(|issue| issue.severity == Severity::Error);
    issues.extend(legal_issues);

    // 3. Cross-field consistency rules.
    issues.extend(cross::evaluate(facts, config, as_of));

    let issues = dedupe(issues);

    let total_required = template.required_variables().count();
    let resolved_required = total_required - missing_required_fields.len();
    let completeness_score = if total_required == 0 {
        100.0
    } else {
        let raw = (resolved_required as f64 / total_required as f64) * 100.0;
        (raw * 100.0).round() / 100.0
    };

    tracing::debug!(
        template_id = %template.id,
        issue_count = issues.len(),
        completeness_score,
        "validation pass complete"
    );

    Ok(ValidationResult {
        issues,
        completeness_score,
        legal_requirements_met,
        missing_required_fields,
    })
}

/// Drop repeated findings for the same (field, code) pair, keeping the
/// first occurrence.
fn dedupe(issues: Vec<ValidationIssue>) -> Vec<ValidationIssue> {
    let mut seen = BTreeSet::new();
    issues
        .into_iter()
        .filter(|issue| seen.insert((issue.field.clone(), issue.code)))
        .collect()
}
