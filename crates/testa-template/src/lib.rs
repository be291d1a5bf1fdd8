//! # testa-template — Will Template Store
//!
//! One [`WillTemplate`] per (jurisdiction, will type, language) triple:
//! ordered sections with `{{placeholder}}` variables, declared template
//! variables with validation rules, legal clauses, and per-type execution
//! instructions. Templates are read-only reference data — never mutated at
//! runtime.
//!
//! ## Conditional logic as data
//!
//! Section visibility is expressed as a declarative [`Predicate`]
//! (variable → comparator → literal), never as executable script embedded
//! in template content. This keeps templates statically checkable: the
//! closed-world [`consistency`] pass verifies that every variable a
//! section's body or predicate references is declared by the template.
//!
//! ## Caching
//!
//! [`TemplateStore`] populates its cache lazily on first access; concurrent
//! first loads of the same key converge on a single cached instance.

pub mod builtin;
pub mod condition;
pub mod consistency;
pub mod error;
pub mod loader;
pub mod model;
pub mod store;

pub use condition::{Comparator, Predicate, SectionRule};
pub use consistency::verify_template;
pub use error::TemplateError;
pub use model::{
    ClauseKind, ExecutionInstructions, LegalClause, RuleCheck, SectionPlacement, TemplateId,
    TemplateSection, TemplateVariable, VariableRule, VariableSource, VariableType, WillTemplate,
};
pub use store::{TemplateKey, TemplateStore};
