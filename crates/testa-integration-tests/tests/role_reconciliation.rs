//! Reconciliation against the contact registry collaborator: identity
//! matching, idempotence, and per-contact failure isolation.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use testa_core::{ContactId, UserId};
use testa_facts::{ContactInfo, Executor, ExecutorKind, UserFacts};
use testa_roles::{
    ContactPatch, ContactRegistry, ContactRegistryError, CreateContactRequest,
    InMemoryContactRegistry, Relationship, RoleSynchronizer, TrustedContact,
};

fn user() -> UserId {
    init_tracing();
    UserId::new("user-1").unwrap()
}

/// Surface reconciliation logs when tests run with RUST_LOG set.
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn executor(name: &str, email: Option<&str>, kind: ExecutorKind) -> Executor {
    Executor {
        kind,
        name: name.to_string(),
        relationship: "friend".to_string(),
        contact: ContactInfo {
            email: email.map(str::to_string),
            phone: None,
        },
        is_professional: false,
        specialization: None,
    }
}

/// Wraps the in-memory registry and fails creates for one specific email.
struct FailingCreateRegistry {
    inner: InMemoryContactRegistry,
    poison_email: String,
}

#[async_trait]
impl ContactRegistry for FailingCreateRegistry {
    async fn list(&self, user: &UserId) -> Result<Vec<TrustedContact>, ContactRegistryError> {
        self.inner.list(user).await
    }

    async fn create(
        &self,
        user: &UserId,
        request: CreateContactRequest,
    ) -> Result<TrustedContact, ContactRegistryError> {
        if request.email.as_deref() == Some(self.poison_email.as_str()) {
            return Err(ContactRegistryError::Unavailable {
                reason: "backend write failed".to_string(),
            });
        }
        self.inner.create(user, request).await
    }

    async fn update(
        &self,
        user: &UserId,
        id: &ContactId,
        patch: ContactPatch,
    ) -> Result<TrustedContact, ContactRegistryError> {
        self.inner.update(user, id, patch).await
    }
}

/// A registry whose create never completes — exercises the per-call
/// timeout path.
struct HangingCreateRegistry {
    inner: InMemoryContactRegistry,
}

#[async_trait]
impl ContactRegistry for HangingCreateRegistry {
    async fn list(&self, user: &UserId) -> Result<Vec<TrustedContact>, ContactRegistryError> {
        self.inner.list(user).await
    }

    async fn create(
        &self,
        _user: &UserId,
        _request: CreateContactRequest,
    ) -> Result<TrustedContact, ContactRegistryError> {
        std::future::pending().await
    }

    async fn update(
        &self,
        user: &UserId,
        id: &ContactId,
        patch: ContactPatch,
    ) -> Result<TrustedContact, ContactRegistryError> {
        self.inner.update(user, id, patch).await
    }
}

#[tokio::test]
async fn registered_executor_is_updated_and_unreachable_one_skipped() {
    // Two executors: one already present in the registry (matched by
    // email), one with no email at all.
    let registry = Arc::new(InMemoryContactRegistry::new());
    registry
        .create(
            &user(),
            CreateContactRequest {
                name: "Jana Kováčová".to_string(),
                email: Some("jana@example.sk".to_string()),
                phone: None,
                relationship: Relationship::Sibling,
                can_trigger_emergency: false,
                can_access_financial_docs: false,
                can_access_health_docs: false,
                is_will_executor: false,
                is_child_guardian: false,
                emergency_priority: 9,
                notes: None,
            },
        )
        .await
        .unwrap();

    let sync = RoleSynchronizer::new(Arc::clone(&registry) as Arc<dyn ContactRegistry>);
    let mut facts = UserFacts::default();
    facts.executors = vec![
        executor("Jana Kováčová", Some("jana@example.sk"), ExecutorKind::Primary),
        executor("Bez Emailu", None, ExecutorKind::Alternate),
    ];

    let report = sync.reconcile(&user(), &facts).await;

    assert_eq!(report.updated.len(), 1);
    assert!(report.created.is_empty());
    assert_eq!(report.skipped_no_contact, vec!["Bez Emailu".to_string()]);
    assert!(report.failures.is_empty());

    let stored = registry.list(&user()).await.unwrap();
    assert_eq!(stored.len(), 1);
    assert!(stored[0].is_will_executor);
}

#[tokio::test]
async fn second_reconcile_creates_nothing_new() {
    let registry = Arc::new(InMemoryContactRegistry::new());
    let sync = RoleSynchronizer::new(Arc::clone(&registry) as Arc<dyn ContactRegistry>);

    let mut facts = UserFacts::default();
    facts.executors = vec![executor(
        "JUDr. Novak",
        Some("novak@example.sk"),
        ExecutorKind::Primary,
    )];

    let first = sync.reconcile(&user(), &facts).await;
    assert_eq!(first.created.len(), 1);
    assert_eq!(registry.count(&user()), 1);

    let second = sync.reconcile(&user(), &facts).await;
    assert!(second.created.is_empty());
    assert_eq!(second.updated.len(), 1);
    assert_eq!(registry.count(&user()), 1, "no duplicate contacts");
}

#[tokio::test]
async fn one_failing_contact_does_not_abort_the_others() {
    let registry = Arc::new(FailingCreateRegistry {
        inner: InMemoryContactRegistry::new(),
        poison_email: "broken@example.sk".to_string(),
    });
    let sync = RoleSynchronizer::new(Arc::clone(&registry) as Arc<dyn ContactRegistry>);

    let mut facts = UserFacts::default();
    facts.executors = vec![
        executor("Working", Some("works@example.sk"), ExecutorKind::Primary),
        executor("Broken", Some("broken@example.sk"), ExecutorKind::Alternate),
    ];

    let report = sync.reconcile(&user(), &facts).await;

    assert_eq!(report.created.len(), 1);
    assert_eq!(report.created[0].name, "Working");
    assert_eq!(report.failures.len(), 1);
    assert_eq!(report.failures[0].name, "Broken");
    assert!(report.failures[0].reason.contains("backend write failed"));
    assert!(!report.is_fully_applied());
}

#[tokio::test]
async fn hanging_registry_call_times_out_per_contact() {
    let registry = Arc::new(HangingCreateRegistry {
        inner: InMemoryContactRegistry::new(),
    });
    let sync = RoleSynchronizer::new(Arc::clone(&registry) as Arc<dyn ContactRegistry>)
        .with_call_timeout(Duration::from_millis(50));

    let mut facts = UserFacts::default();
    facts.executors = vec![executor(
        "Hangs",
        Some("hangs@example.sk"),
        ExecutorKind::Primary,
    )];

    let report = sync.reconcile(&user(), &facts).await;

    assert_eq!(report.failures.len(), 1);
    assert!(report.failures[0].reason.contains("timed out"));
}

#[tokio::test]
async fn engine_facade_routes_role_calls() {
    let registry = Arc::new(InMemoryContactRegistry::new());
    let engine = testa_engine::WillEngine::new()
        .with_contact_registry(Arc::clone(&registry) as Arc<dyn ContactRegistry>);

    let mut facts = UserFacts::default();
    facts.executors = vec![executor(
        "JUDr. Novak",
        Some("novak@example.sk"),
        ExecutorKind::Primary,
    )];

    let report = engine.reconcile_roles(&user(), &facts).await.unwrap();
    assert_eq!(report.created.len(), 1);

    let suggestions = engine.suggest_roles(&user()).await.unwrap();
    assert_eq!(
        suggestions.suggested_executor.unwrap().email.as_deref(),
        Some("novak@example.sk")
    );
}
