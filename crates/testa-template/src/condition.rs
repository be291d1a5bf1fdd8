//! # Declarative Section Predicates
//!
//! A [`Predicate`] is a single `(variable, comparator, literal)` triple.
//! That is deliberately the entire expression language: predicates are data
//! that can be statically checked against the template's declared variable
//! list, not scripts that need a sandbox.
//!
//! ## Fail-closed evaluation
//!
//! A predicate that references a variable with no resolved value evaluates
//! to `false` — the renderer omits rather than guesses.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Comparison operator of a predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Comparator {
    /// Resolved value equals the literal.
    Equals,
    /// Resolved value differs from the literal.
    NotEquals,
    /// Resolved value is a member of the literal array.
    In,
    /// Resolved value is boolean `true`.
    IsTrue,
    /// Resolved value is boolean `false`.
    IsFalse,
    /// A value is resolved at all (non-null).
    IsPresent,
}

/// A declarative condition over one resolved variable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Predicate {
    /// Key of the template variable the predicate inspects.
    pub variable: String,
    pub op: Comparator,
    /// Comparison literal; unused by `is_true`/`is_false`/`is_present`.
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub value: Value,
}

impl Predicate {
    /// Evaluate against resolved variable values.
    ///
    /// Unresolved (absent or null) variables make every comparator except
    /// nothing at all — even `is_present` — come out `false`.
    pub fn evaluate(&self, resolved: &BTreeMap<String, Value>) -> bool {
        let value = match resolved.get(&self.variable) {
            Some(v) if !v.is_null() => v,
            _ => return false,
        };
        match self.op {
            Comparator::Equals => *value == self.value,
            Comparator::NotEquals => *value != self.value,
            Comparator::In => self
                .value
                .as_array()
                .map(|set| set.contains(value))
                .unwrap_or(false),
            Comparator::IsTrue => value.as_bool() == Some(true),
            Comparator::IsFalse => value.as_bool() == Some(false),
            Comparator::IsPresent => true,
        }
    }
}

/// Visibility rule attached to a template section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionRule {
    /// Include the section only when the predicate holds.
    ShowIf(Predicate),
    /// Include the section unless the predicate holds.
    HideIf(Predicate),
}

impl SectionRule {
    /// Whether a section carrying this rule should be included.
    pub fn include(&self, resolved: &BTreeMap<String, Value>) -> bool {
        match self {
            Self::ShowIf(p) => p.evaluate(resolved),
            Self::HideIf(p) => !p.evaluate(resolved),
        }
    }

    /// The underlying predicate, for consistency checking.
    pub fn predicate(&self) -> &Predicate {
        match self {
            Self::ShowIf(p) | Self::HideIf(p) => p,
        }
    }
}
