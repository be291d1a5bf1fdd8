//! # Structural Rules
//!
//! Required-field and declared-rule evaluation over the resolver's
//! resolved values — never over the raw template content.

use regex::Regex;

use testa_render::ResolvedVariables;
use testa_template::{RuleCheck, WillTemplate};

use crate::issue::{IssueCode, ValidationIssue};

/// Evaluate required flags and per-variable rules.
///
/// Returns the findings plus the missing required keys in declaration
/// order. Pattern rules were regex-checked at template verification, so a
/// non-compiling pattern here is unreachable in practice; it is skipped
/// with a log rather than failing the whole pass on template data the
/// user cannot influence.
pub fn evaluate(
    template: &WillTemplate,
    resolved: &ResolvedVariables,
) -> (Vec<ValidationIssue>, Vec<String>) {
    let mut issues = Vec::new();
    let mut missing = Vec::new();

    for variable in &template.variables {
        if variable.required && !resolved.is_resolved(&variable.key) {
            missing.push(variable.key.clone());
            issues.push(ValidationIssue::error(
                IssueCode::RequiredFieldMissing,
                variable.key.clone(),
                format!("{} is required", variable.label),
            ));
            continue;
        }
        let Some(value) = resolved.value(&variable.key) else {
            continue;
        };

        for rule in &variable.rules {
            let violated = match &rule.check {
                RuleCheck::MinLength { value: min } => value
                    .as_str()
                    .map(|s| s.trim().chars().count() < *min)
                    .unwrap_or(false),
                RuleCheck::MaxLength { value: max } => value
                    .as_str()
                    .map(|s| s.chars().count() > *max)
                    .unwrap_or(false),
                RuleCheck::Pattern { regex } => match Regex::new(regex) {
                    Ok(re) => value.as_str().map(|s| !re.is_match(s)).unwrap_or(false),
                    Err(e) => {
                        tracing::warn!(
                            key = %variable.key,
                            error = %e,
                            "pattern rule failed to compile; skipping"
                        );
                        false
                    }
                },
                RuleCheck::MinItems { value: min } => value
                    .as_array()
                    .map(|items| items.len() < *min)
                    .unwrap_or(false),
            };
            if violated {
                let code = match &rule.check {
                    RuleCheck::MinLength { .. } => IssueCode::MinLength,
                    RuleCheck::MaxLength { .. } => IssueCode::MaxLength,
                    RuleCheck::Pattern { .. } => IssueCode::PatternMismatch,
                    RuleCheck::MinItems { .. } => IssueCode::MinItems,
                };
                issues.push(ValidationIssue::new(
                    rule.severity,
                    code,
                    variable.key.clone(),
                    rule.message.clone(),
                ));
            }
        }
    }

    (issues, missing)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use testa_core::{JurisdictionCode, LanguageCode, Severity, WillType};
    use testa_facts::UserFacts;
    use testa_render::resolve_variables;

    fn template() -> WillTemplate {
        testa_template::builtin::lookup(
            &JurisdictionCode::new("SK").unwrap(),
            WillType::Holographic,
            &LanguageCode::new("sk").unwrap(),
        )
        .unwrap()
    }

    fn as_of() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 6).unwrap()
    }

    #[test]
    fn missing_required_fields_reported_in_declaration_order() {
        let facts = UserFacts::default();
        let resolved = resolve_variables(&template(), &facts, as_of()).unwrap();
        let (issues, missing) = evaluate(&template(), &resolved);

        assert!(missing.contains(&"testator_name".to_string()));
        assert!(missing.contains(&"beneficiaries".to_string()));
        let name_pos = missing.iter().position(|k| k == "testator_name").unwrap();
        let ben_pos = missing.iter().position(|k| k == "beneficiaries").unwrap();
        assert!(name_pos < ben_pos, "declaration order preserved");
        assert!(issues
            .iter()
            .any(|i| i.code == IssueCode::RequiredFieldMissing));
    }

    #[test]
    fn pattern_rule_flags_malformed_personal_id() {
        let mut facts = UserFacts::default();
        facts.personal.full_name = "Ján Novák".to_string();
        facts.personal.personal_id = Some("not-a-personal-id".to_string());
        let resolved = resolve_variables(&template(), &facts, as_of()).unwrap();
        let (issues, _) = evaluate(&template(), &resolved);
        let pattern_issue = issues
            .iter()
            .find(|i| i.code == IssueCode::PatternMismatch)
            .expect("pattern issue present");
        assert_eq!(pattern_issue.severity, Severity::Warning);
        assert_eq!(pattern_issue.field, "personal_id");
    }

    #[test]
    fn rules_skip_unresolved_values() {
        // personal_id absent entirely: the pattern rule must not fire.
        let facts = UserFacts::default();
        let resolved = resolve_variables(&template(), &facts, as_of()).unwrap();
        let (issues, _) = evaluate(&template(), &resolved);
        assert!(!issues.iter().any(|i| i.code == IssueCode::PatternMismatch));
    }
}
