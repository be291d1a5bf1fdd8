//! # Contact Registry Collaborator
//!
//! The seam between the core and whatever stores trusted contacts. The
//! synchronizer only ever talks through this trait, so tests run against
//! [`InMemoryContactRegistry`](crate::InMemoryContactRegistry) and
//! deployments plug in their backend client.

use async_trait::async_trait;

use testa_core::{ContactId, UserId};

use crate::contact::{ContactPatch, CreateContactRequest, TrustedContact};
use crate::error::ContactRegistryError;

/// External trusted-contact registry interface.
#[async_trait]
pub trait ContactRegistry: Send + Sync {
    /// All contacts of the user, active and inactive.
    async fn list(&self, user: &UserId) -> Result<Vec<TrustedContact>, ContactRegistryError>;

    /// Create a new contact record.
    async fn create(
        &self,
        user: &UserId,
        request: CreateContactRequest,
    ) -> Result<TrustedContact, ContactRegistryError>;

    /// Apply a sparse patch to an existing contact.
    async fn update(
        &self,
        user: &UserId,
        id: &ContactId,
        patch: ContactPatch,
    ) -> Result<TrustedContact, ContactRegistryError>;
}
