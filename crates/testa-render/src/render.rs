//! # Section Rendering
//!
//! Walks sections in declared order, applies visibility rules against the
//! resolved variables, substitutes placeholders, and buckets the surviving
//! sections by placement.

use chrono::NaiveDate;

use testa_facts::UserFacts;
use testa_template::{
    consistency::placeholder_keys, ClauseKind, SectionPlacement, TemplateError, WillTemplate,
};

use crate::document::{RenderedClause, RenderedDocument, RenderedSection};
use crate::error::RenderError;
use crate::resolve::{resolve_variables, ResolvedVariables};

/// Render a template against a facts snapshot.
///
/// `as_of` is the reference date for derived values (minor children);
/// callers supply it explicitly so rendering never reads a clock.
///
/// # Errors
///
/// Only structural failures: an undeclared placeholder
/// ([`TemplateError::UnresolvedVariableReference`]) or facts that cannot
/// be serialized. Missing user data renders as empty placeholders.
pub fn render(
    template: &WillTemplate,
    facts: &UserFacts,
    as_of: NaiveDate,
) -> Result<RenderedDocument, RenderError> {
    let resolved = resolve_variables(template, facts, as_of)?;

    let mut header = Vec::new();
    let mut body = Vec::new();
    let mut footer = Vec::new();

    for section in template.ordered_sections() {
        let include = match &section.rule {
            Some(rule) => rule.include(resolved.values()),
            None => true,
        };
        if !include {
            continue;
        }

        let text = substitute(template, &section.id, &section.body, &resolved)?;
        let rendered = RenderedSection {
            id: section.id.clone(),
            title: section.title.clone(),
            text,
        };
        match section.placement {
            SectionPlacement::Header => header.push(rendered),
            SectionPlacement::Body => body.push(rendered),
            SectionPlacement::Footer => footer.push(rendered),
        }
    }

    let clauses = template
        .clauses
        .iter()
        .filter(|clause| match &clause.kind {
            ClauseKind::Mandatory => true,
            ClauseKind::Optional => false,
            ClauseKind::Conditional(predicate) => predicate.evaluate(resolved.values()),
        })
        .map(|clause| RenderedClause {
            id: clause.id.clone(),
            legal_basis: clause.legal_basis.clone(),
            text: clause.text.clone(),
        })
        .collect();

    Ok(RenderedDocument {
        template_id: template.id.clone(),
        template_version: template.version.clone(),
        jurisdiction: template.jurisdiction.clone(),
        will_type: template.will_type,
        language: template.language.clone(),
        header,
        body,
        footer,
        clauses,
        execution: template.execution.clone(),
    })
}

/// Substitute every `{{placeholder}}` in a section body.
///
/// A declared-but-unresolved variable substitutes as an empty string; an
/// undeclared placeholder is a fatal structural defect. The store verifies
/// templates at insertion, but render re-checks rather than trusting its
/// caller — this error must never be swallowed.
fn substitute(
    template: &WillTemplate,
    section_id: &str,
    raw: &str,
    resolved: &ResolvedVariables,
) -> Result<String, RenderError> {
    for key in placeholder_keys(raw) {
        if template.variable(&key).is_none() {
            return Err(RenderError::Template(
                TemplateError::UnresolvedVariableReference {
                    template_id: template.id.to_string(),
                    location: format!("section {section_id}"),
                    variable: key,
                },
            ));
        }
    }

    let mut out = String::with_capacity(raw.len());
    let mut rest = raw;
    while let Some(start) = rest.find("{{") {
        let Some(end_rel) = rest[start..].find("}}") else {
            break;
        };
        let end = start + end_rel;
        out.push_str(&rest[..start]);
        let key = rest[start + 2..end].trim();
        out.push_str(resolved.formatted(key));
        rest = &rest[end + 2..];
    }
    out.push_str(rest);
    Ok(out)
}
