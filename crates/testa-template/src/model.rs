//! # Will Template Model
//!
//! The data model for one template: ordered sections with placeholder
//! variables, the declared variable list with validation rules, legal
//! clauses, and execution instructions for the template's will type.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use testa_core::{JurisdictionCode, LanguageCode, Severity, WillType};

use crate::condition::{Predicate, SectionRule};

/// Identifier of a template: `{jurisdiction}-{will_type}-{language}`,
/// lowercase (e.g. `sk-holographic-sk`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TemplateId(String);

impl TemplateId {
    /// Compose the id from its parts.
    pub fn from_parts(
        jurisdiction: &JurisdictionCode,
        will_type: WillType,
        language: &LanguageCode,
    ) -> Self {
        Self(format!(
            "{}-{}-{}",
            jurisdiction.as_str().to_ascii_lowercase(),
            will_type.as_str(),
            language.as_str()
        ))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for TemplateId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Which bucket of the rendered document a section lands in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionPlacement {
    Header,
    #[default]
    Body,
    Footer,
}

/// One ordered section of a template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemplateSection {
    pub id: String,
    pub title: String,
    /// Raw content with `{{variable}}` placeholders.
    pub body: String,
    /// Required sections count toward document structure even when their
    /// variables are unresolved; optional sections may be dropped by
    /// visibility rules.
    #[serde(default)]
    pub required: bool,
    /// Declarative visibility rule; a section with no rule is always
    /// included.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rule: Option<SectionRule>,
    /// Ordering index within the document.
    pub order: u32,
    #[serde(default)]
    pub placement: SectionPlacement,
}

/// Data type of a template variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VariableType {
    Text,
    Number,
    Date,
    Boolean,
    Select,
    Array,
    Object,
}

/// Which part of the user facts a variable resolves from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VariableSource {
    Personal,
    Family,
    Beneficiaries,
    Executors,
    Guardians,
    Assets,
    Witnesses,
    Notarization,
    Special,
}

/// A single structural check attached to a variable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "check", rename_all = "snake_case")]
pub enum RuleCheck {
    /// Minimum string length after trimming.
    MinLength { value: usize },
    /// Maximum string length.
    MaxLength { value: usize },
    /// The value must match this regular expression.
    Pattern { regex: String },
    /// Minimum number of items for array-typed variables.
    MinItems { value: usize },
}

/// A validation rule declared on a template variable.
///
/// Rules are evaluated by the validation engine against the *resolved*
/// value, not the raw template content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariableRule {
    #[serde(flatten)]
    pub check: RuleCheck,
    /// Human message surfaced when the rule fails.
    pub message: String,
    #[serde(default = "default_rule_severity")]
    pub severity: Severity,
}

fn default_rule_severity() -> Severity {
    Severity::Error
}

/// A variable declared by a template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemplateVariable {
    /// Placeholder key, as referenced by `{{key}}` in section bodies.
    pub key: String,
    /// Human label used in validation messages.
    pub label: String,
    pub data_type: VariableType,
    #[serde(default)]
    pub required: bool,
    /// Which part of the facts the value comes from.
    pub source: VariableSource,
    /// Fallback value when the facts hold nothing and the variable is not
    /// required.
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub default: Value,
    #[serde(default)]
    pub rules: Vec<VariableRule>,
}

/// Whether a legal clause always applies, is opt-in, or is driven by a
/// predicate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClauseKind {
    Mandatory,
    Optional,
    Conditional(Predicate),
}

/// A jurisdiction-tied legal clause appended to the document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegalClause {
    pub id: String,
    pub kind: ClauseKind,
    /// Statutory basis, e.g. "§ 476 Občianskeho zákonníka".
    pub legal_basis: String,
    pub text: String,
}

/// Execution instructions for the template's will type: how to actually
/// make the document legally effective.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionInstructions {
    pub title: String,
    /// Ordered steps the testator follows.
    pub steps: Vec<String>,
    /// Hard requirements; failing one risks invalidity.
    pub requirements: Vec<String>,
    /// Pitfalls worth calling out.
    pub warnings: Vec<String>,
}

/// One will template for one (jurisdiction, will type, language) triple.
/// Read-only reference data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WillTemplate {
    pub id: TemplateId,
    pub jurisdiction: JurisdictionCode,
    pub will_type: WillType,
    pub language: LanguageCode,
    pub version: String,
    pub sections: Vec<TemplateSection>,
    pub variables: Vec<TemplateVariable>,
    #[serde(default)]
    pub clauses: Vec<LegalClause>,
    pub execution: ExecutionInstructions,
}

impl WillTemplate {
    /// Look up a declared variable by key.
    pub fn variable(&self, key: &str) -> Option<&TemplateVariable> {
        self.variables.iter().find(|v| v.key == key)
    }

    /// Declared required variables, in declaration order.
    pub fn required_variables(&self) -> impl Iterator<Item = &TemplateVariable> {
        self.variables.iter().filter(|v| v.required)
    }

    /// Sections in their declared order index.
    pub fn ordered_sections(&self) -> Vec<&TemplateSection> {
        let mut sections: Vec<&TemplateSection> = self.sections.iter().collect();
        sections.sort_by_key(|s| s.order);
        sections
    }
}
