//! Validation engine error types.

use thiserror::Error;

use testa_render::RenderError;

/// Fatal validation failures.
///
/// Validation never throws for bad user data — those become
/// [`ValidationIssue`](crate::ValidationIssue)s. The engine fails only
/// when the template or configuration itself is structurally broken,
/// propagated from the resolver.
#[derive(Error, Debug)]
pub enum ValidateError {
    /// Structural template defect surfaced during variable resolution.
    #[error(transparent)]
    Render(#[from] RenderError),
}
