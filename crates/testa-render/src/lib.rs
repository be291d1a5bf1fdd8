//! # testa-render — Template Resolver
//!
//! Turns a [`WillTemplate`](testa_template::WillTemplate) plus a
//! [`UserFacts`](testa_facts::UserFacts) snapshot into a
//! [`RenderedDocument`]: variables resolved from the facts by their
//! data-source hints, section predicates evaluated fail-closed, values
//! formatted for the template's language, placeholders substituted, and
//! the included sections collected into header/body/footer buckets with
//! the execution instructions attached.
//!
//! ## Rendering is decoupled from validation
//!
//! A required variable with no resolvable value does not abort rendering —
//! it renders as an empty placeholder so a partial document can be
//! previewed, while the validation engine reports the missing field. The
//! only fatal failures here are structural template defects.
//!
//! ## Determinism
//!
//! Rendering reads no clock and no randomness. The reference date used for
//! minor-child detection is an explicit argument; identical inputs produce
//! byte-identical output.

pub mod document;
pub mod error;
pub mod format;
pub mod html;
pub mod render;
pub mod resolve;

pub use document::{RenderedClause, RenderedDocument, RenderedSection};
pub use error::RenderError;
pub use render::render;
pub use resolve::{resolve_variables, ResolvedVariables};
