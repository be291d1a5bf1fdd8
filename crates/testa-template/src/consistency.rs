//! # Closed-World Consistency Check
//!
//! Every variable referenced anywhere in a template — section bodies,
//! section predicates, conditional clause predicates — must appear in the
//! template's declared variable list. An unresolved reference is a
//! structural template defect, reported as a fatal
//! [`TemplateError::UnresolvedVariableReference`], never a silent no-op.
//!
//! The check runs at store insertion time, so a store can only ever hand
//! out templates that passed it.

use std::collections::BTreeSet;
use std::sync::OnceLock;

use regex::Regex;

use crate::error::TemplateError;
use crate::model::{RuleCheck, WillTemplate};

/// Placeholder syntax: `{{key}}`, key restricted to identifier characters.
fn placeholder_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"\{\{\s*([A-Za-z0-9_]+)\s*\}\}").expect("BUG: placeholder regex rejected")
    })
}

/// Extract every placeholder key appearing in a section body.
pub fn placeholder_keys(body: &str) -> Vec<String> {
    placeholder_regex()
        .captures_iter(body)
        .map(|cap| cap[1].to_string())
        .collect()
}

/// Verify a template's structural invariants.
///
/// # Errors
///
/// - [`TemplateError::InvalidTemplate`] for duplicate variable keys,
///   duplicate section ids, or a rule pattern that does not compile.
/// - [`TemplateError::UnresolvedVariableReference`] for any placeholder or
///   predicate variable missing from the declared list.
pub fn verify_template(template: &WillTemplate) -> Result<(), TemplateError> {
    let template_id = template.id.to_string();

    let mut declared: BTreeSet<&str> = BTreeSet::new();
    for variable in &template.variables {
        if !declared.insert(variable.key.as_str()) {
            return Err(TemplateError::InvalidTemplate {
                template_id: template_id.clone(),
                reason: format!("duplicate variable key \"{}\"", variable.key),
            });
        }
        // Rule patterns must compile before the template is accepted.
        for rule in &variable.rules {
            if let RuleCheck::Pattern { regex } = &rule.check {
                if let Err(e) = Regex::new(regex) {
                    return Err(TemplateError::InvalidTemplate {
                        template_id: template_id.clone(),
                        reason: format!(
                            "variable \"{}\" has an invalid pattern rule: {e}",
                            variable.key
                        ),
                    });
                }
            }
        }
    }

    let mut section_ids: BTreeSet<&str> = BTreeSet::new();
    for section in &template.sections {
        if !section_ids.insert(section.id.as_str()) {
            return Err(TemplateError::InvalidTemplate {
                template_id: template_id.clone(),
                reason: format!("duplicate section id \"{}\"", section.id),
            });
        }

        for key in placeholder_keys(&section.body) {
            if !declared.contains(key.as_str()) {
                return Err(TemplateError::UnresolvedVariableReference {
                    template_id: template_id.clone(),
                    location: format!("section {}", section.id),
                    variable: key,
                });
            }
        }

        if let Some(rule) = &section.rule {
            let variable = &rule.predicate().variable;
            if !declared.contains(variable.as_str()) {
                return Err(TemplateError::UnresolvedVariableReference {
                    template_id: template_id.clone(),
                    location: format!("predicate of section {}", section.id),
                    variable: variable.clone(),
                });
            }
        }
    }

    for clause in &template.clauses {
        if let crate::model::ClauseKind::Conditional(predicate) = &clause.kind {
            if !declared.contains(predicate.variable.as_str()) {
                return Err(TemplateError::UnresolvedVariableReference {
                    template_id: template_id.clone(),
                    location: format!("predicate of clause {}", clause.id),
                    variable: predicate.variable.clone(),
                });
            }
        }
    }

    Ok(())
}
