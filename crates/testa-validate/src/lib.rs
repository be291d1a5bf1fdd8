//! # testa-validate — Validation Engine
//!
//! Evaluates a facts snapshot against a template's declared rules and the
//! jurisdiction's legal requirements, producing a structured
//! [`ValidationResult`] — never an exception for bad user data.
//!
//! ## Rule families, in evaluation order
//!
//! 1. **Structural** — required/pattern/length/min-items rules declared on
//!    template variables, evaluated against the *resolved* values.
//! 2. **Jurisdiction legal** — minimum testator age, witness count and
//!    eligibility, notarization, forced heirship at the jurisdiction's
//!    configured severity.
//! 3. **Cross-field consistency** — percentage totals, guardianship for
//!    minors, executor and contact well-formedness, asset sanity.
//!
//! Evaluation accumulates; it never short-circuits. A result can carry a
//! perfect completeness score and still hold legal warnings.
//!
//! The only fatal failures are structural template defects propagated from
//! variable resolution.

pub mod cross;
pub mod engine;
pub mod error;
pub mod issue;
pub mod legal;
pub mod result;
pub mod structural;

pub use engine::{validate, validate_at};
pub use error::ValidateError;
pub use issue::{IssueCode, ValidationIssue};
pub use result::ValidationResult;
