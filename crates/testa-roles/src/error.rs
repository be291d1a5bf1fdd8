//! Contact registry error types.

use testa_core::ContactId;
use thiserror::Error;

/// Errors surfaced by a [`ContactRegistry`](crate::ContactRegistry)
/// implementation.
#[derive(Error, Debug, Clone)]
pub enum ContactRegistryError {
    /// The registry backend could not be reached.
    #[error("contact registry unavailable: {reason}")]
    Unavailable {
        /// Backend-specific description.
        reason: String,
    },

    /// No contact with the given id exists for this user.
    #[error("contact not found: {id}")]
    NotFound {
        /// The id that failed to resolve.
        id: ContactId,
    },

    /// The registry refused the request (validation, quota, permissions).
    #[error("contact registry rejected the request: {reason}")]
    Rejected {
        /// Backend-specific description.
        reason: String,
    },
}
