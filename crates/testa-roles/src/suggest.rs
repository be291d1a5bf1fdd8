//! # Role Suggestions
//!
//! Ranks the user's existing active contacts by suitability for the
//! executor and minor-guardian roles. Advisory only — suggestions are
//! never written back into the facts.

use serde::Serialize;

use testa_core::UserId;

use crate::contact::{Relationship, TrustedContact};
use crate::registry::ContactRegistry;

/// Top candidates per category, when any qualify.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RoleSuggestions {
    pub suggested_executor: Option<TrustedContact>,
    pub suggested_backup_executor: Option<TrustedContact>,
    pub suggested_guardian: Option<TrustedContact>,
    pub suggested_backup_guardian: Option<TrustedContact>,
}

/// Executor suitability: an existing executor flag outranks professional
/// standing, lawyers outrank financial advisors.
fn executor_score(contact: &TrustedContact) -> u32 {
    let mut score = 0;
    if contact.is_will_executor {
        score += 3;
    }
    if contact.relationship == Relationship::Lawyer {
        score += 2;
    }
    if contact.relationship == Relationship::FinancialAdvisor {
        score += 1;
    }
    score
}

/// Guardian suitability: an existing guardian flag outranks kinship.
fn guardian_score(contact: &TrustedContact) -> u32 {
    let mut score = 0;
    if contact.is_child_guardian {
        score += 2;
    }
    if contact.relationship.is_close_family() {
        score += 1;
    }
    score
}

fn top_two(mut candidates: Vec<(u32, TrustedContact)>) -> (Option<TrustedContact>, Option<TrustedContact>) {
    // Highest score first; emergency priority and name break ties so the
    // ranking is stable across calls.
    candidates.sort_by(|(score_a, a), (score_b, b)| {
        score_b
            .cmp(score_a)
            .then(a.emergency_priority.cmp(&b.emergency_priority))
            .then(a.name.cmp(&b.name))
    });
    let mut iter = candidates.into_iter().map(|(_, c)| c);
    (iter.next(), iter.next())
}

/// Rank the user's contacts for unfilled will roles.
///
/// A registry failure yields empty suggestions — this path is advisory
/// and must never block the caller.
pub async fn suggest_roles(registry: &dyn ContactRegistry, user: &UserId) -> RoleSuggestions {
    let contacts = match registry.list(user).await {
        Ok(contacts) => contacts,
        Err(e) => {
            tracing::warn!(error = %e, "contact listing failed; no role suggestions");
            return RoleSuggestions::default();
        }
    };

    let executors: Vec<(u32, TrustedContact)> = contacts
        .iter()
        .filter(|c| {
            c.is_active
                && (c.is_will_executor
                    || matches!(
                        c.relationship,
                        Relationship::Lawyer | Relationship::FinancialAdvisor
                    ))
        })
        .map(|c| (executor_score(c), c.clone()))
        .collect();

    let guardians: Vec<(u32, TrustedContact)> = contacts
        .iter()
        .filter(|c| {
            c.is_active
                && (c.is_child_guardian
                    || matches!(c.relationship, Relationship::Sibling | Relationship::Friend))
        })
        .map(|c| (guardian_score(c), c.clone()))
        .collect();

    let (suggested_executor, suggested_backup_executor) = top_two(executors);
    let (suggested_guardian, suggested_backup_guardian) = top_two(guardians);

    RoleSuggestions {
        suggested_executor,
        suggested_backup_executor,
        suggested_guardian,
        suggested_backup_guardian,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::CreateContactRequest;
    use crate::memory::InMemoryContactRegistry;

    fn user() -> UserId {
        UserId::new("user-1").unwrap()
    }

    async fn seed(
        registry: &InMemoryContactRegistry,
        name: &str,
        relationship: Relationship,
        is_will_executor: bool,
        is_child_guardian: bool,
    ) {
        registry
            .create(
                &user(),
                CreateContactRequest {
                    name: name.to_string(),
                    email: Some(format!("{}@example.sk", name.to_lowercase().replace(' ', "."))),
                    phone: None,
                    relationship,
                    can_trigger_emergency: false,
                    can_access_financial_docs: false,
                    can_access_health_docs: false,
                    is_will_executor,
                    is_child_guardian,
                    emergency_priority: 10,
                    notes: None,
                },
            )
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn flagged_executor_outranks_lawyer() {
        let registry = InMemoryContactRegistry::new();
        seed(&registry, "Lawyer Person", Relationship::Lawyer, false, false).await;
        seed(&registry, "Flagged Person", Relationship::Friend, true, false).await;

        let suggestions = suggest_roles(&registry, &user()).await;
        assert_eq!(
            suggestions.suggested_executor.unwrap().name,
            "Flagged Person"
        );
        assert_eq!(
            suggestions.suggested_backup_executor.unwrap().name,
            "Lawyer Person"
        );
    }

    #[tokio::test]
    async fn close_family_preferred_for_guardianship() {
        let registry = InMemoryContactRegistry::new();
        seed(&registry, "A Friend", Relationship::Friend, false, false).await;
        seed(&registry, "The Sibling", Relationship::Sibling, false, false).await;

        let suggestions = suggest_roles(&registry, &user()).await;
        assert_eq!(suggestions.suggested_guardian.unwrap().name, "The Sibling");
        assert_eq!(
            suggestions.suggested_backup_guardian.unwrap().name,
            "A Friend"
        );
    }

    #[tokio::test]
    async fn inactive_contacts_are_ignored() {
        let registry = InMemoryContactRegistry::new();
        let inactive = TrustedContact {
            id: testa_core::ContactId::new(),
            name: "Retired Lawyer".to_string(),
            email: Some("retired@example.sk".to_string()),
            phone: None,
            relationship: Relationship::Lawyer,
            can_trigger_emergency: false,
            can_access_financial_docs: false,
            can_access_health_docs: false,
            is_will_executor: true,
            is_child_guardian: false,
            emergency_priority: 1,
            is_active: false,
            notes: None,
        };
        registry.seed(&user(), vec![inactive]);

        let suggestions = suggest_roles(&registry, &user()).await;
        assert!(suggestions.suggested_executor.is_none());
    }

    #[tokio::test]
    async fn no_candidates_yields_empty_suggestions() {
        let registry = InMemoryContactRegistry::new();
        let suggestions = suggest_roles(&registry, &user()).await;
        assert_eq!(suggestions, RoleSuggestions::default());
    }
}
