//! # Document Assembly
//!
//! The final combination step: rendered document + validation result +
//! jurisdiction disclaimer + generation metadata, packaged into an
//! immutable [`GeneratedWill`]. Assembly never mutates its inputs and is
//! the only place in the generation path that reads the clock.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use testa_core::{sha256_digest, ContentDigest, LanguageCode, Timestamp};
use testa_registry::JurisdictionConfig;
use testa_render::RenderedDocument;
use testa_template::{ExecutionInstructions, TemplateId};
use testa_validate::ValidationResult;

/// Rough words-per-page estimate used for the page count.
const WORDS_PER_PAGE: usize = 250;

/// Provenance of one generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationMetadata {
    pub generated_at: Timestamp,
    pub template_id: TemplateId,
    pub template_version: String,
    /// SHA-256 over the rendered plain text; detects post-generation
    /// tampering.
    pub checksum: ContentDigest,
    pub word_count: usize,
    pub page_count_estimate: usize,
}

/// The output aggregate of one generation. Immutable once produced — a
/// facts edit requires regenerating.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedWill {
    pub id: Uuid,
    pub rendered: RenderedDocument,
    /// The validation result at generation time. Recomputed from current
    /// facts on every generation, never carried over.
    pub validation: ValidationResult,
    pub execution: ExecutionInstructions,
    pub legal_disclaimer: String,
    pub metadata: GenerationMetadata,
}

impl GeneratedWill {
    /// Whether the document may be treated as final. Error findings
    /// block finalization; warnings are advisory.
    pub fn is_finalizable(&self) -> bool {
        self.validation.is_valid()
    }
}

/// Combine a rendered document and its validation result into a
/// [`GeneratedWill`].
pub fn assemble(
    rendered: RenderedDocument,
    validation: ValidationResult,
    config: &JurisdictionConfig,
    language: &LanguageCode,
) -> GeneratedWill {
    let text = rendered.to_text();
    let word_count = text.split_whitespace().count();
    let page_count_estimate = word_count.div_ceil(WORDS_PER_PAGE).max(1);
    let metadata = GenerationMetadata {
        generated_at: Timestamp::now(),
        template_id: rendered.template_id.clone(),
        template_version: rendered.template_version.clone(),
        checksum: sha256_digest(text.as_bytes()),
        word_count,
        page_count_estimate,
    };

    GeneratedWill {
        id: Uuid::new_v4(),
        execution: rendered.execution.clone(),
        legal_disclaimer: config.disclaimer(language).to_string(),
        metadata,
        rendered,
        validation,
    }
}
