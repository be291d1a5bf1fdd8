//! # In-Memory Contact Registry
//!
//! A complete [`ContactRegistry`] over a mutex-guarded map. Used by the
//! test suites and by embedders that have no external registry yet.

use std::collections::BTreeMap;

use async_trait::async_trait;
use parking_lot::Mutex;

use testa_core::{ContactId, UserId};

use crate::contact::{ContactPatch, CreateContactRequest, TrustedContact};
use crate::error::ContactRegistryError;
use crate::registry::ContactRegistry;

/// In-memory registry keyed by user id.
#[derive(Debug, Default)]
pub struct InMemoryContactRegistry {
    contacts: Mutex<BTreeMap<String, Vec<TrustedContact>>>,
}

impl InMemoryContactRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the registry with existing contacts for a user.
    pub fn seed(&self, user: &UserId, contacts: Vec<TrustedContact>) {
        self.contacts
            .lock()
            .entry(user.as_str().to_string())
            .or_default()
            .extend(contacts);
    }

    /// Number of contacts currently stored for a user.
    pub fn count(&self, user: &UserId) -> usize {
        self.contacts
            .lock()
            .get(user.as_str())
            .map(Vec::len)
            .unwrap_or(0)
    }
}

#[async_trait]
impl ContactRegistry for InMemoryContactRegistry {
    async fn list(&self, user: &UserId) -> Result<Vec<TrustedContact>, ContactRegistryError> {
        Ok(self
            .contacts
            .lock()
            .get(user.as_str())
            .cloned()
            .unwrap_or_default())
    }

    async fn create(
        &self,
        user: &UserId,
        request: CreateContactRequest,
    ) -> Result<TrustedContact, ContactRegistryError> {
        let contact = TrustedContact {
            id: ContactId::new(),
            name: request.name,
            email: request.email,
            phone: request.phone,
            relationship: request.relationship,
            can_trigger_emergency: request.can_trigger_emergency,
            can_access_financial_docs: request.can_access_financial_docs,
            can_access_health_docs: request.can_access_health_docs,
            is_will_executor: request.is_will_executor,
            is_child_guardian: request.is_child_guardian,
            emergency_priority: request.emergency_priority,
            is_active: true,
            notes: request.notes,
        };
        self.contacts
            .lock()
            .entry(user.as_str().to_string())
            .or_default()
            .push(contact.clone());
        Ok(contact)
    }

    async fn update(
        &self,
        user: &UserId,
        id: &ContactId,
        patch: ContactPatch,
    ) -> Result<TrustedContact, ContactRegistryError> {
        let mut contacts = self.contacts.lock();
        let user_contacts =
            contacts
                .get_mut(user.as_str())
                .ok_or_else(|| ContactRegistryError::NotFound {
                    id: id.clone(),
                })?;
        let slot = user_contacts
            .iter_mut()
            .find(|c| c.id == *id)
            .ok_or_else(|| ContactRegistryError::NotFound { id: id.clone() })?;
        *slot = patch.apply(slot.clone());
        Ok(slot.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::Relationship;

    fn user() -> UserId {
        UserId::new("user-1").unwrap()
    }

    fn request(name: &str, email: &str) -> CreateContactRequest {
        CreateContactRequest {
            name: name.to_string(),
            email: Some(email.to_string()),
            phone: None,
            relationship: Relationship::Friend,
            can_trigger_emergency: false,
            can_access_financial_docs: false,
            can_access_health_docs: false,
            is_will_executor: false,
            is_child_guardian: false,
            emergency_priority: 999,
            notes: None,
        }
    }

    #[tokio::test]
    async fn create_list_update_cycle() {
        let registry = InMemoryContactRegistry::new();
        let created = registry
            .create(&user(), request("Jana", "jana@example.sk"))
            .await
            .unwrap();

        let listed = registry.list(&user()).await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, created.id);

        let patch = ContactPatch {
            is_will_executor: Some(true),
            ..ContactPatch::default()
        };
        let updated = registry.update(&user(), &created.id, patch).await.unwrap();
        assert!(updated.is_will_executor);
    }

    #[tokio::test]
    async fn update_unknown_contact_is_not_found() {
        let registry = InMemoryContactRegistry::new();
        let err = registry
            .update(&user(), &ContactId::new(), ContactPatch::default())
            .await
            .unwrap_err();
        assert!(matches!(err, ContactRegistryError::NotFound { .. }));
    }

    #[tokio::test]
    async fn users_are_isolated() {
        let registry = InMemoryContactRegistry::new();
        registry
            .create(&user(), request("Jana", "jana@example.sk"))
            .await
            .unwrap();
        let other = UserId::new("user-2").unwrap();
        assert!(registry.list(&other).await.unwrap().is_empty());
    }
}
