//! Render error types.

use thiserror::Error;

use testa_template::TemplateError;

/// Errors raised while rendering a template.
///
/// Every variant is structural. Bad or missing user data never fails a
/// render — it produces empty placeholders and validation findings.
#[derive(Error, Debug)]
pub enum RenderError {
    /// A structural template defect (notably an unresolved variable
    /// reference). Must not be swallowed; it indicates a broken template.
    #[error(transparent)]
    Template(#[from] TemplateError),

    /// The facts aggregate failed to serialize for path lookup.
    #[error("facts serialization error: {0}")]
    Facts(#[from] serde_json::Error),
}
