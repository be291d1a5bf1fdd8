//! # testa-engine — Generation Facade
//!
//! The library entry point consumers use: one [`WillEngine`] wires the
//! jurisdiction registry, template store, rendering, validation,
//! assembly, and (optionally) role reconciliation together.
//!
//! ```no_run
//! use testa_core::{JurisdictionCode, LanguageCode, WillType};
//! use testa_engine::WillEngine;
//! use testa_facts::UserFacts;
//!
//! # fn main() -> Result<(), testa_engine::EngineError> {
//! let engine = WillEngine::new();
//! let facts = UserFacts::default();
//! let generated = engine.generate(
//!     &JurisdictionCode::new("SK")?,
//!     WillType::Holographic,
//!     &LanguageCode::new("sk")?,
//!     &facts,
//! )?;
//! println!("{}", generated.rendered.to_text());
//! # Ok(())
//! # }
//! ```
//!
//! Persisting a [`GeneratedWill`] is the caller's document store's job;
//! the engine only produces in-memory structures.

pub mod assemble;
pub mod engine;
pub mod error;

pub use assemble::{assemble, GeneratedWill, GenerationMetadata};
pub use engine::WillEngine;
pub use error::EngineError;

// Re-export the surface types callers touch through the facade.
pub use testa_registry::{JurisdictionConfig, JurisdictionRegistry, JurisdictionSummary};
pub use testa_render::RenderedDocument;
pub use testa_roles::{ContactRegistry, ReconciliationReport, RoleSuggestions};
pub use testa_validate::ValidationResult;
