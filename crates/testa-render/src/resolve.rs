//! # Variable Resolution
//!
//! Resolves each declared [`TemplateVariable`] from the facts aggregate
//! using its data-source hint. Well-known keys (`testator_name`,
//! `has_minor_children`, `beneficiaries`, ...) resolve through derived
//! accessors; anything else falls back to a dotted-path lookup into the
//! serialized source subtree, and finally to the variable's declared
//! default.
//!
//! Resolution never fails on missing user data: an unresolvable variable
//! simply stays unresolved, which makes predicates referencing it evaluate
//! false and its placeholders render empty.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde_json::{json, Value};

use testa_core::LanguageCode;
use testa_facts::{Beneficiary, BeneficiaryShare, ExecutorKind, InstructionKind, UserFacts};
use testa_template::{TemplateVariable, VariableSource, VariableType, WillTemplate};

use crate::error::RenderError;
use crate::format;

/// The outcome of variable resolution: raw values for predicate
/// evaluation and completeness accounting, formatted strings for
/// placeholder substitution.
#[derive(Debug, Clone, Default)]
pub struct ResolvedVariables {
    values: BTreeMap<String, Value>,
    formatted: BTreeMap<String, String>,
}

impl ResolvedVariables {
    /// The raw resolved value, if the variable resolved at all.
    pub fn value(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    /// The formatted substitution text; empty for unresolved variables.
    pub fn formatted(&self, key: &str) -> &str {
        self.formatted.get(key).map(String::as_str).unwrap_or("")
    }

    /// Raw values, keyed by variable key — the input predicates see.
    pub fn values(&self) -> &BTreeMap<String, Value> {
        &self.values
    }

    /// Whether a variable resolved to a non-empty value. Empty strings,
    /// empty arrays, and empty objects all count as unresolved for
    /// completeness purposes.
    pub fn is_resolved(&self, key: &str) -> bool {
        self.values.get(key).is_some_and(|v| !is_empty_value(v))
    }
}

/// Null, blank strings, empty arrays, and empty objects are "no value".
fn is_empty_value(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.trim().is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
        _ => false,
    }
}

/// Resolve every declared variable of the template from the facts.
///
/// `as_of` is the reference date for minor-child classification; it is an
/// explicit argument so rendering stays clock-free.
pub fn resolve_variables(
    template: &WillTemplate,
    facts: &UserFacts,
    as_of: NaiveDate,
) -> Result<ResolvedVariables, RenderError> {
    let language = &template.language;
    let mut resolved = ResolvedVariables::default();

    for variable in &template.variables {
        let mut value = derived_value(variable.source, &variable.key, facts, as_of, language);

        if value.is_none() {
            value = path_value(variable.source, &variable.key, facts)?;
        }
        if value.as_ref().map(is_empty_value).unwrap_or(true) && !variable.default.is_null() {
            value = Some(variable.default.clone());
        }

        let Some(value) = value.filter(|v| !is_empty_value(v)) else {
            tracing::debug!(key = %variable.key, "variable unresolved");
            continue;
        };

        let formatted = format_value(&value, variable.data_type, language);
        resolved.formatted.insert(variable.key.clone(), formatted);
        resolved.values.insert(variable.key.clone(), value);
    }

    Ok(resolved)
}

/// Format a resolved value for placeholder substitution.
fn format_value(value: &Value, data_type: VariableType, language: &LanguageCode) -> String {
    match data_type {
        VariableType::Date => value
            .as_str()
            .and_then(|s| NaiveDate::parse_from_str(s, "%Y-%m-%d").ok())
            .map(|d| format::format_date(d, language))
            .unwrap_or_else(|| display_value(value)),
        VariableType::Number => value
            .as_f64()
            .map(|n| format::format_number(n, language))
            .unwrap_or_else(|| display_value(value)),
        VariableType::Boolean => value
            .as_bool()
            .map(|b| format::format_bool(b, language).to_string())
            .unwrap_or_else(|| display_value(value)),
        VariableType::Array => {
            let items: Vec<String> = value
                .as_array()
                .map(|a| a.iter().map(display_value).collect())
                .unwrap_or_default();
            format::join_list(&items, language)
        }
        VariableType::Text | VariableType::Select | VariableType::Object => display_value(value),
    }
}

/// Plain display form of a JSON value: strings verbatim, objects by their
/// `name` field when they have one, everything else compact JSON.
fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Object(map) => map
            .get("name")
            .and_then(Value::as_str)
            .map(str::to_string)
            .unwrap_or_else(|| value.to_string()),
        other => other.to_string(),
    }
}

/// Dotted-path lookup into the serialized source subtree, for variables
/// without a derived accessor.
fn path_value(
    source: VariableSource,
    key: &str,
    facts: &UserFacts,
) -> Result<Option<Value>, RenderError> {
    let subtree = match source {
        VariableSource::Personal => serde_json::to_value(&facts.personal)?,
        VariableSource::Family => serde_json::to_value(&facts.family)?,
        VariableSource::Beneficiaries => serde_json::to_value(&facts.beneficiaries)?,
        VariableSource::Executors => serde_json::to_value(&facts.executors)?,
        VariableSource::Guardians => serde_json::to_value(&facts.guardianship)?,
        VariableSource::Assets => serde_json::to_value(&facts.assets)?,
        VariableSource::Witnesses => serde_json::to_value(&facts.witnesses)?,
        VariableSource::Notarization => serde_json::to_value(&facts.notarization)?,
        VariableSource::Special => serde_json::to_value(&facts.special_instructions)?,
    };
    let mut current = &subtree;
    for part in key.split('.') {
        match current.get(part) {
            Some(next) => current = next,
            None => return Ok(None),
        }
    }
    Ok(Some(current.clone()))
}

fn non_blank(s: &str) -> Option<Value> {
    if s.trim().is_empty() {
        None
    } else {
        Some(json!(s))
    }
}

fn date_value(date: Option<NaiveDate>) -> Option<Value> {
    date.map(|d| json!(d.format("%Y-%m-%d").to_string()))
}

/// Derived accessors for the well-known variable keys.
fn derived_value(
    source: VariableSource,
    key: &str,
    facts: &UserFacts,
    as_of: NaiveDate,
    language: &LanguageCode,
) -> Option<Value> {
    match (source, key) {
        (VariableSource::Personal, "testator_name") => non_blank(&facts.personal.full_name),
        (VariableSource::Personal, "birth_date") => date_value(facts.personal.date_of_birth),
        (VariableSource::Personal, "birth_place") => {
            facts.personal.place_of_birth.as_deref().and_then(non_blank)
        }
        (VariableSource::Personal, "personal_id") => {
            facts.personal.personal_id.as_deref().and_then(non_blank)
        }
        (VariableSource::Personal, "address") => facts
            .personal
            .address
            .as_ref()
            .filter(|a| a.is_complete())
            .map(|a| json!(a.formatted())),
        (VariableSource::Personal, "citizenship") => {
            facts.personal.citizenship.as_deref().and_then(non_blank)
        }
        (VariableSource::Personal, "declaration_city") => {
            facts.personal.declaration_city.as_deref().and_then(non_blank)
        }

        (VariableSource::Family, "has_spouse") => Some(json!(facts.family.spouse.is_some())),
        (VariableSource::Family, "spouse_name") => facts
            .family
            .spouse
            .as_ref()
            .and_then(|s| non_blank(&s.full_name)),
        (VariableSource::Family, "has_children") => {
            Some(json!(!facts.family.children.is_empty()))
        }
        (VariableSource::Family, "children") => Some(json!(facts
            .family
            .children
            .iter()
            .map(|c| c.full_name.clone())
            .collect::<Vec<_>>())),
        (VariableSource::Family, "minor_children") => Some(json!(facts
            .minor_children(as_of)
            .iter()
            .map(|c| c.full_name.clone())
            .collect::<Vec<_>>())),
        (VariableSource::Family, "adult_children") => Some(json!(facts
            .family
            .children
            .iter()
            .filter(|c| !c.is_minor(as_of))
            .map(|c| c.full_name.clone())
            .collect::<Vec<_>>())),
        (VariableSource::Family, "has_minor_children") => {
            Some(json!(facts.has_minor_children(as_of)))
        }
        (VariableSource::Family, "has_protected_heirs") => {
            Some(json!(facts.family.has_protected_heirs()))
        }

        (VariableSource::Beneficiaries, "beneficiaries") => Some(json!(facts
            .beneficiaries
            .iter()
            .map(|b| beneficiary_display(b, language))
            .collect::<Vec<_>>())),
        (VariableSource::Beneficiaries, "residuary_beneficiary") => facts
            .residuary_beneficiary()
            .and_then(|b| non_blank(&b.name)),

        (VariableSource::Executors, "has_executor") => {
            Some(json!(!facts.executors.is_empty()))
        }
        (VariableSource::Executors, "executor_name") => facts
            .executors
            .iter()
            .find(|e| e.kind == ExecutorKind::Primary)
            .or_else(|| facts.executors.first())
            .and_then(|e| non_blank(&e.name)),
        (VariableSource::Executors, "executor_relationship") => facts
            .executors
            .iter()
            .find(|e| e.kind == ExecutorKind::Primary)
            .or_else(|| facts.executors.first())
            .and_then(|e| non_blank(&e.relationship)),
        (VariableSource::Executors, "backup_executor") => facts
            .executors
            .iter()
            .find(|e| e.kind == ExecutorKind::Alternate)
            .and_then(|e| non_blank(&e.name)),

        (VariableSource::Guardians, "guardian_primary") => facts
            .guardianship
            .first()
            .and_then(|g| non_blank(&g.primary.name)),
        (VariableSource::Guardians, "guardian_alternate") => facts
            .guardianship
            .first()
            .and_then(|g| g.alternate.as_ref())
            .and_then(|g| non_blank(&g.name)),
        (VariableSource::Guardians, "guardianship_instructions") => facts
            .guardianship
            .first()
            .and_then(|g| g.special_instructions.as_deref())
            .and_then(non_blank),

        (VariableSource::Assets, "assets") => Some(json!(facts
            .assets
            .iter()
            .map(|a| a.description.clone())
            .collect::<Vec<_>>())),

        (VariableSource::Witnesses, "witnesses") => Some(json!(facts
            .witnesses
            .iter()
            .map(|w| w.full_name.clone())
            .collect::<Vec<_>>())),
        (VariableSource::Witnesses, "witness_count") => {
            Some(json!(facts.witnesses.len()))
        }

        (VariableSource::Notarization, "notary_name") => facts
            .notarization
            .as_ref()
            .and_then(|n| non_blank(&n.notary_name)),
        (VariableSource::Notarization, "notary_city") => facts
            .notarization
            .as_ref()
            .and_then(|n| non_blank(&n.office_city)),
        (VariableSource::Notarization, "notarization_date") => {
            date_value(facts.notarization.as_ref().map(|n| n.date))
        }

        (VariableSource::Special, "has_special_instructions") => {
            Some(json!(!facts.special_instructions.is_empty()))
        }
        (VariableSource::Special, "special_instructions") => Some(json!(facts
            .special_instructions
            .iter()
            .map(|i| match &i.title {
                Some(title) => format!("{title}: {}", i.content),
                None => i.content.clone(),
            })
            .collect::<Vec<_>>())),
        (VariableSource::Special, "funeral_wishes") => facts
            .special_instructions
            .iter()
            .find(|i| i.kind == InstructionKind::FuneralWishes)
            .and_then(|i| non_blank(&i.content)),

        _ => None,
    }
}

/// One-line display of a beneficiary with their share.
fn beneficiary_display(beneficiary: &Beneficiary, language: &LanguageCode) -> String {
    let share = match &beneficiary.share {
        BeneficiaryShare::Percentage { value } => match language.as_str() {
            "en" => format!("{}%", format::format_number(*value, language)),
            _ => format!("{} %", format::format_number(*value, language)),
        },
        BeneficiaryShare::FixedAmount { amount, currency } => {
            format!("{} {currency}", format::format_number(*amount, language))
        }
        BeneficiaryShare::SpecificAssets { asset_ids } => asset_ids.join(", "),
        BeneficiaryShare::Remainder => format::remainder_word(language).to_string(),
    };
    format!(
        "{} ({}) - {share}",
        beneficiary.name, beneficiary.relationship
    )
}
