//! Facade error types.

use thiserror::Error;

use testa_core::IdentifierError;
use testa_registry::RegistryError;
use testa_render::RenderError;
use testa_template::TemplateError;
use testa_validate::ValidateError;

/// Errors surfaced by the [`WillEngine`](crate::WillEngine) facade.
///
/// These are all structural or configuration failures. Incomplete or
/// legally deficient user data is reported inside
/// [`ValidationResult`](testa_validate::ValidationResult), never here.
#[derive(Error, Debug)]
pub enum EngineError {
    /// Identifier construction failure (bad jurisdiction/language code).
    #[error(transparent)]
    Identifier(#[from] IdentifierError),

    /// Unknown jurisdiction or invalid registry configuration.
    #[error(transparent)]
    Registry(#[from] RegistryError),

    /// Unsupported combination, missing template, or broken template.
    #[error(transparent)]
    Template(#[from] TemplateError),

    /// Structural failure while rendering.
    #[error(transparent)]
    Render(#[from] RenderError),

    /// Structural failure while validating.
    #[error(transparent)]
    Validate(#[from] ValidateError),

    /// A role operation was requested but no contact registry was wired
    /// into the engine.
    #[error("no contact registry configured; call WillEngine::with_contact_registry first")]
    ContactRegistryNotConfigured,
}
