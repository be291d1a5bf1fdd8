//! # Reconciliation
//!
//! Turns the people named in a facts snapshot into creates/updates
//! against the contact registry. Matching is by email identity; people
//! without an email are skipped, never fabricated. The whole pass is
//! idempotent — a second run with unchanged facts matches everyone it
//! created the first time and creates nothing new.

use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;
use tokio::task::JoinSet;

use testa_core::{ContactId, UserId};
use testa_facts::{BeneficiaryShare, ExecutorKind, UserFacts};

use crate::contact::{ContactPatch, CreateContactRequest, Relationship};
use crate::registry::ContactRegistry;
use crate::suggest::{self, RoleSuggestions};

/// Default per-call timeout for registry operations.
const DEFAULT_CALL_TIMEOUT: Duration = Duration::from_secs(5);

/// Emergency priority given to beneficiaries with no will role.
const BENEFICIARY_PRIORITY: u32 = 999;

/// Reference to a contact touched by reconciliation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContactRef {
    pub id: ContactId,
    pub name: String,
    pub email: String,
}

/// A per-contact reconciliation failure. Collected, never raised.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReconcileFailure {
    pub name: String,
    pub email: Option<String>,
    pub reason: String,
}

/// The joined outcome of one reconciliation pass.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ReconciliationReport {
    pub created: Vec<ContactRef>,
    pub updated: Vec<ContactRef>,
    /// People already registered with nothing to change.
    pub unchanged: Vec<String>,
    /// People named in the will without contact details.
    pub skipped_no_contact: Vec<String>,
    pub failures: Vec<ReconcileFailure>,
}

impl ReconciliationReport {
    /// Whether every reachable person reconciled cleanly.
    pub fn is_fully_applied(&self) -> bool {
        self.failures.is_empty()
    }
}

/// A person named in the will, with every role they hold merged together
/// so one registry operation covers all of them.
#[derive(Debug, Clone)]
struct DesiredPerson {
    name: String,
    email: Option<String>,
    phone: Option<String>,
    relationship: Relationship,
    /// `Some(primary)` when the person is an executor.
    executor: Option<bool>,
    /// `Some(primary)` when the person is a minor-guardian nominee.
    guardian: Option<bool>,
    /// Set when the person is a beneficiary with contact data.
    beneficiary_note: Option<String>,
}

impl DesiredPerson {
    fn priority(&self) -> u32 {
        match (self.executor, self.guardian) {
            (Some(true), _) | (_, Some(true)) => 1,
            (Some(false), _) | (_, Some(false)) => 2,
            _ => BENEFICIARY_PRIORITY,
        }
    }

    /// Capability flags for a newly created contact, derived from the
    /// will roles: executors get document access, guardians get the
    /// emergency trigger (and financial access only when primary).
    fn create_request(&self) -> CreateContactRequest {
        let is_executor = self.executor.is_some();
        let is_guardian = self.guardian.is_some();
        let guardian_primary = self.guardian == Some(true);
        CreateContactRequest {
            name: self.name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            relationship: self.relationship,
            can_trigger_emergency: is_executor || is_guardian,
            can_access_financial_docs: is_executor || guardian_primary,
            can_access_health_docs: is_executor || is_guardian,
            is_will_executor: is_executor,
            is_child_guardian: is_guardian,
            emergency_priority: self.priority(),
            notes: self.beneficiary_note.clone(),
        }
    }

    /// Sparse patch for an existing contact: role flags and priority
    /// only, unrelated fields untouched.
    fn patch(&self) -> ContactPatch {
        let mut patch = ContactPatch::default();
        if self.executor.is_some() {
            patch.is_will_executor = Some(true);
        }
        if self.guardian.is_some() {
            patch.is_child_guardian = Some(true);
        }
        if self.executor.is_some() || self.guardian.is_some() {
            patch.emergency_priority = Some(self.priority());
        }
        patch
    }

    fn has_role_update(&self) -> bool {
        self.executor.is_some() || self.guardian.is_some()
    }
}

enum Outcome {
    Created(ContactRef),
    Updated(ContactRef),
    Unchanged(String),
    Failed(ReconcileFailure),
}

/// Reconciles will roles against the injected contact registry.
pub struct RoleSynchronizer {
    registry: Arc<dyn ContactRegistry>,
    call_timeout: Duration,
}

impl std::fmt::Debug for RoleSynchronizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RoleSynchronizer")
            .field("call_timeout", &self.call_timeout)
            .finish_non_exhaustive()
    }
}

impl RoleSynchronizer {
    pub fn new(registry: Arc<dyn ContactRegistry>) -> Self {
        Self {
            registry,
            call_timeout: DEFAULT_CALL_TIMEOUT,
        }
    }

    /// Override the per-call registry timeout.
    pub fn with_call_timeout(mut self, timeout: Duration) -> Self {
        self.call_timeout = timeout;
        self
    }

    /// Reconcile with no overall deadline.
    pub async fn reconcile(&self, user: &UserId, facts: &UserFacts) -> ReconciliationReport {
        self.reconcile_with_deadline(user, facts, None).await
    }

    /// Reconcile every person named in the facts, fanning out one
    /// registry operation per person. Idempotent per call.
    ///
    /// Per-person calls are bounded by the per-call timeout; a timeout or
    /// registry error is reported for that person only. When `deadline`
    /// is given, people whose operations have not finished by then are
    /// reported as failures rather than awaited further.
    pub async fn reconcile_with_deadline(
        &self,
        user: &UserId,
        facts: &UserFacts,
        deadline: Option<Duration>,
    ) -> ReconciliationReport {
        let mut report = ReconciliationReport::default();
        let persons = desired_persons(facts);

        let (reachable, unreachable): (Vec<_>, Vec<_>) =
            persons.into_iter().partition(|p| p.email.is_some());
        report
            .skipped_no_contact
            .extend(unreachable.into_iter().map(|p| p.name));

        if reachable.is_empty() {
            return report;
        }

        let existing = match tokio::time::timeout(self.call_timeout, self.registry.list(user))
            .await
        {
            Ok(Ok(contacts)) => contacts,
            Ok(Err(e)) => {
                // Without the listing there is nothing to match against;
                // report every reachable person rather than aborting.
                tracing::warn!(error = %e, "contact listing failed; reconciliation skipped");
                report.failures.extend(reachable.into_iter().map(|p| {
                    ReconcileFailure {
                        name: p.name,
                        email: p.email,
                        reason: format!("contact listing failed: {e}"),
                    }
                }));
                return report;
            }
            Err(_) => {
                tracing::warn!("contact listing timed out; reconciliation skipped");
                report.failures.extend(reachable.into_iter().map(|p| {
                    ReconcileFailure {
                        name: p.name,
                        email: p.email,
                        reason: "contact listing timed out".to_string(),
                    }
                }));
                return report;
            }
        };

        let mut tasks: JoinSet<Outcome> = JoinSet::new();
        for person in reachable {
            let email = person.email.clone().unwrap_or_default();
            let matched = existing.iter().find(|c| {
                c.email
                    .as_deref()
                    .is_some_and(|e| e.eq_ignore_ascii_case(&email))
            });
            let matched_id = matched.map(|c| c.id.clone());
            let registry = Arc::clone(&self.registry);
            let user = user.clone();
            let timeout = self.call_timeout;
            tasks.spawn(async move {
                reconcile_person(registry, user, person, matched_id, timeout).await
            });
        }

        let total = tasks.len();
        let mut outcomes = Vec::with_capacity(total);
        let joining = async {
            while let Some(joined) = tasks.join_next().await {
                match joined {
                    Ok(outcome) => outcomes.push(outcome),
                    Err(e) => outcomes.push(Outcome::Failed(ReconcileFailure {
                        name: "<task>".to_string(),
                        email: None,
                        reason: format!("reconciliation task failed: {e}"),
                    })),
                }
            }
        };
        match deadline {
            Some(limit) => {
                if tokio::time::timeout(limit, joining).await.is_err() {
                    tasks.abort_all();
                    let missing = total - outcomes.len();
                    for _ in 0..missing {
                        outcomes.push(Outcome::Failed(ReconcileFailure {
                            name: "<pending>".to_string(),
                            email: None,
                            reason: "overall reconciliation deadline exceeded".to_string(),
                        }));
                    }
                }
            }
            None => joining.await,
        }

        for outcome in outcomes {
            match outcome {
                Outcome::Created(c) => report.created.push(c),
                Outcome::Updated(c) => report.updated.push(c),
                Outcome::Unchanged(name) => report.unchanged.push(name),
                Outcome::Failed(f) => report.failures.push(f),
            }
        }
        // Joined order is completion order; sort for stable reports.
        report.created.sort_by(|a, b| a.name.cmp(&b.name));
        report.updated.sort_by(|a, b| a.name.cmp(&b.name));
        report.unchanged.sort();
        report.failures.sort_by(|a, b| a.name.cmp(&b.name));

        tracing::info!(
            created = report.created.len(),
            updated = report.updated.len(),
            unchanged = report.unchanged.len(),
            skipped = report.skipped_no_contact.len(),
            failures = report.failures.len(),
            "role reconciliation complete"
        );
        report
    }

    /// Advisory role suggestions from the user's existing contacts.
    pub async fn suggest_roles(&self, user: &UserId) -> RoleSuggestions {
        suggest::suggest_roles(self.registry.as_ref(), user).await
    }
}

async fn reconcile_person(
    registry: Arc<dyn ContactRegistry>,
    user: UserId,
    person: DesiredPerson,
    matched_id: Option<ContactId>,
    call_timeout: Duration,
) -> Outcome {
    let email = person.email.clone().unwrap_or_default();
    match matched_id {
        Some(id) => {
            if !person.has_role_update() {
                return Outcome::Unchanged(person.name);
            }
            let patch = person.patch();
            match tokio::time::timeout(call_timeout, registry.update(&user, &id, patch)).await {
                Ok(Ok(updated)) => Outcome::Updated(ContactRef {
                    id: updated.id,
                    name: updated.name,
                    email,
                }),
                Ok(Err(e)) => Outcome::Failed(ReconcileFailure {
                    name: person.name,
                    email: person.email,
                    reason: e.to_string(),
                }),
                Err(_) => Outcome::Failed(ReconcileFailure {
                    name: person.name,
                    email: person.email,
                    reason: "registry update timed out".to_string(),
                }),
            }
        }
        None => {
            let request = person.create_request();
            match tokio::time::timeout(call_timeout, registry.create(&user, request)).await {
                Ok(Ok(created)) => Outcome::Created(ContactRef {
                    id: created.id,
                    name: created.name,
                    email,
                }),
                Ok(Err(e)) => Outcome::Failed(ReconcileFailure {
                    name: person.name,
                    email: person.email,
                    reason: e.to_string(),
                }),
                Err(_) => Outcome::Failed(ReconcileFailure {
                    name: person.name,
                    email: person.email,
                    reason: "registry create timed out".to_string(),
                }),
            }
        }
    }
}

fn share_note(share: &BeneficiaryShare) -> String {
    match share {
        BeneficiaryShare::Percentage { value } => {
            format!("Added from will beneficiaries - percentage: {value}")
        }
        BeneficiaryShare::FixedAmount { amount, currency } => {
            format!("Added from will beneficiaries - fixed amount: {amount} {currency}")
        }
        BeneficiaryShare::SpecificAssets { asset_ids } => format!(
            "Added from will beneficiaries - specific assets: {}",
            asset_ids.join(", ")
        ),
        BeneficiaryShare::Remainder => "Added from will beneficiaries - remainder".to_string(),
    }
}

/// Collect everyone named in the will, merging multiple roles held by the
/// same person (matched by email, falling back to name).
fn desired_persons(facts: &UserFacts) -> Vec<DesiredPerson> {
    let mut merged: BTreeMap<String, DesiredPerson> = BTreeMap::new();

    let key_for = |email: Option<&str>, name: &str| -> String {
        email
            .map(|e| format!("email:{}", e.to_lowercase()))
            .unwrap_or_else(|| format!("name:{}", name.trim().to_lowercase()))
    };

    for executor in &facts.executors {
        let key = key_for(executor.email(), &executor.name);
        let primary = executor.kind == ExecutorKind::Primary;
        let entry = merged.entry(key).or_insert_with(|| DesiredPerson {
            name: executor.name.clone(),
            email: executor.email().map(str::to_string),
            phone: executor.contact.phone.clone(),
            relationship: Relationship::parse(&executor.relationship),
            executor: None,
            guardian: None,
            beneficiary_note: None,
        });
        // Primary standing wins over alternate when both appear.
        entry.executor = Some(entry.executor.unwrap_or(false) || primary);
    }

    for appointment in &facts.guardianship {
        for (nominee, primary) in [
            (Some(&appointment.primary), true),
            (appointment.alternate.as_ref(), false),
        ] {
            let Some(nominee) = nominee else { continue };
            let key = key_for(nominee.email(), &nominee.name);
            let entry = merged.entry(key).or_insert_with(|| DesiredPerson {
                name: nominee.name.clone(),
                email: nominee.email().map(str::to_string),
                phone: nominee.contact.phone.clone(),
                relationship: Relationship::parse(&nominee.relationship),
                executor: None,
                guardian: None,
                beneficiary_note: None,
            });
            entry.guardian = Some(entry.guardian.unwrap_or(false) || primary);
        }
    }

    for beneficiary in &facts.beneficiaries {
        // Only beneficiaries with contact data participate at all.
        let Some(contact) = &beneficiary.contact else {
            continue;
        };
        if !contact.is_reachable() {
            continue;
        }
        let key = key_for(beneficiary.email(), &beneficiary.name);
        let entry = merged.entry(key).or_insert_with(|| DesiredPerson {
            name: beneficiary.name.clone(),
            email: beneficiary.email().map(str::to_string),
            phone: contact.phone.clone(),
            relationship: Relationship::parse(&beneficiary.relationship),
            executor: None,
            guardian: None,
            beneficiary_note: None,
        });
        entry.beneficiary_note = Some(share_note(&beneficiary.share));
    }

    merged.into_values().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::InMemoryContactRegistry;
    use testa_facts::{ContactInfo, Executor, GuardianNominee, GuardianshipAppointment};

    fn user() -> UserId {
        UserId::new("user-1").unwrap()
    }

    fn executor(name: &str, email: Option<&str>, kind: ExecutorKind) -> Executor {
        Executor {
            kind,
            name: name.to_string(),
            relationship: "lawyer".to_string(),
            contact: ContactInfo {
                email: email.map(str::to_string),
                phone: None,
            },
            is_professional: true,
            specialization: None,
        }
    }

    fn synchronizer(registry: Arc<InMemoryContactRegistry>) -> RoleSynchronizer {
        RoleSynchronizer::new(registry)
    }

    #[tokio::test]
    async fn creates_contacts_for_new_executors() {
        let registry = Arc::new(InMemoryContactRegistry::new());
        let sync = synchronizer(Arc::clone(&registry));

        let mut facts = UserFacts::default();
        facts.executors = vec![executor(
            "JUDr. Novak",
            Some("novak@example.sk"),
            ExecutorKind::Primary,
        )];
        let report = sync.reconcile(&user(), &facts).await;

        assert_eq!(report.created.len(), 1);
        assert!(report.failures.is_empty());
        let stored = registry.list(&user()).await.unwrap();
        assert_eq!(stored.len(), 1);
        assert!(stored[0].is_will_executor);
        assert!(stored[0].can_access_financial_docs);
        assert!(stored[0].can_access_health_docs);
        assert_eq!(stored[0].emergency_priority, 1);
    }

    #[tokio::test]
    async fn matches_existing_contact_by_email_and_updates_flags() {
        let registry = Arc::new(InMemoryContactRegistry::new());
        let existing = registry
            .create(
                &user(),
                CreateContactRequest {
                    name: "Jana Kováčová".to_string(),
                    email: Some("JANA@example.sk".to_string()),
                    phone: Some("+421900111222".to_string()),
                    relationship: Relationship::Sibling,
                    can_trigger_emergency: true,
                    can_access_financial_docs: false,
                    can_access_health_docs: false,
                    is_will_executor: false,
                    is_child_guardian: false,
                    emergency_priority: 7,
                    notes: Some("seeded".to_string()),
                },
            )
            .await
            .unwrap();

        let sync = synchronizer(Arc::clone(&registry));
        let mut facts = UserFacts::default();
        facts.executors = vec![executor(
            "Jana Kováčová",
            Some("jana@example.sk"),
            ExecutorKind::Primary,
        )];
        let report = sync.reconcile(&user(), &facts).await;

        assert_eq!(report.updated.len(), 1);
        assert!(report.created.is_empty());
        let stored = registry.list(&user()).await.unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].id, existing.id);
        assert!(stored[0].is_will_executor);
        // Unrelated fields untouched.
        assert!(stored[0].can_trigger_emergency);
        assert_eq!(stored[0].phone.as_deref(), Some("+421900111222"));
    }

    #[tokio::test]
    async fn person_without_email_is_skipped_not_failed() {
        let registry = Arc::new(InMemoryContactRegistry::new());
        let sync = synchronizer(Arc::clone(&registry));

        let mut facts = UserFacts::default();
        facts.executors = vec![
            executor("With Email", Some("with@example.sk"), ExecutorKind::Primary),
            executor("No Email", None, ExecutorKind::Alternate),
        ];
        let report = sync.reconcile(&user(), &facts).await;

        assert_eq!(report.created.len(), 1);
        assert_eq!(report.skipped_no_contact, vec!["No Email".to_string()]);
        assert!(report.failures.is_empty());
        assert_eq!(registry.count(&user()), 1);
    }

    #[tokio::test]
    async fn reconcile_is_idempotent() {
        let registry = Arc::new(InMemoryContactRegistry::new());
        let sync = synchronizer(Arc::clone(&registry));

        let mut facts = UserFacts::default();
        facts.executors = vec![executor(
            "JUDr. Novak",
            Some("novak@example.sk"),
            ExecutorKind::Primary,
        )];
        facts.guardianship = vec![GuardianshipAppointment {
            child_name: "Anna".to_string(),
            primary: GuardianNominee {
                name: "Jana Kováčová".to_string(),
                relationship: "sibling".to_string(),
                contact: ContactInfo {
                    email: Some("jana@example.sk".to_string()),
                    phone: None,
                },
            },
            alternate: None,
            special_instructions: None,
        }];

        let first = sync.reconcile(&user(), &facts).await;
        assert_eq!(first.created.len(), 2);

        let second = sync.reconcile(&user(), &facts).await;
        assert!(second.created.is_empty(), "second run must create nothing");
        assert_eq!(second.updated.len(), 2);
        assert_eq!(registry.count(&user()), 2);
    }

    #[tokio::test]
    async fn guardian_capabilities_depend_on_primacy() {
        let registry = Arc::new(InMemoryContactRegistry::new());
        let sync = synchronizer(Arc::clone(&registry));

        let mut facts = UserFacts::default();
        facts.guardianship = vec![GuardianshipAppointment {
            child_name: "Anna".to_string(),
            primary: GuardianNominee {
                name: "Primary G".to_string(),
                relationship: "sibling".to_string(),
                contact: ContactInfo {
                    email: Some("primary@example.sk".to_string()),
                    phone: None,
                },
            },
            alternate: Some(GuardianNominee {
                name: "Alternate G".to_string(),
                relationship: "friend".to_string(),
                contact: ContactInfo {
                    email: Some("alternate@example.sk".to_string()),
                    phone: None,
                },
            }),
            special_instructions: None,
        }];
        sync.reconcile(&user(), &facts).await;

        let stored = registry.list(&user()).await.unwrap();
        let primary = stored
            .iter()
            .find(|c| c.name == "Primary G")
            .expect("primary stored");
        let alternate = stored
            .iter()
            .find(|c| c.name == "Alternate G")
            .expect("alternate stored");
        assert!(primary.can_trigger_emergency);
        assert!(primary.can_access_financial_docs);
        assert_eq!(primary.emergency_priority, 1);
        assert!(alternate.can_trigger_emergency);
        assert!(!alternate.can_access_financial_docs);
        assert_eq!(alternate.emergency_priority, 2);
    }

    #[tokio::test]
    async fn beneficiary_with_contact_is_created_without_capabilities() {
        let registry = Arc::new(InMemoryContactRegistry::new());
        let sync = synchronizer(Arc::clone(&registry));

        let mut facts = UserFacts::default();
        facts.beneficiaries = vec![testa_facts::Beneficiary {
            name: "Eva Malá".to_string(),
            relationship: "friend".to_string(),
            contact: Some(ContactInfo {
                email: Some("eva@example.sk".to_string()),
                phone: None,
            }),
            share: BeneficiaryShare::Percentage { value: 100.0 },
            conditions: None,
        }];
        sync.reconcile(&user(), &facts).await;

        let stored = registry.list(&user()).await.unwrap();
        assert_eq!(stored.len(), 1);
        assert!(!stored[0].can_trigger_emergency);
        assert!(!stored[0].is_will_executor);
        assert_eq!(stored[0].emergency_priority, BENEFICIARY_PRIORITY);
        assert!(stored[0]
            .notes
            .as_deref()
            .is_some_and(|n| n.contains("percentage: 100")));
    }

    #[tokio::test]
    async fn same_person_in_two_roles_reconciles_once() {
        let registry = Arc::new(InMemoryContactRegistry::new());
        let sync = synchronizer(Arc::clone(&registry));

        let mut facts = UserFacts::default();
        facts.executors = vec![executor(
            "Jana Kováčová",
            Some("jana@example.sk"),
            ExecutorKind::Primary,
        )];
        facts.beneficiaries = vec![testa_facts::Beneficiary {
            name: "Jana Kováčová".to_string(),
            relationship: "sibling".to_string(),
            contact: Some(ContactInfo {
                email: Some("jana@example.sk".to_string()),
                phone: None,
            }),
            share: BeneficiaryShare::Remainder,
            conditions: None,
        }];
        let report = sync.reconcile(&user(), &facts).await;

        assert_eq!(report.created.len(), 1);
        assert_eq!(registry.count(&user()), 1);
        let stored = registry.list(&user()).await.unwrap();
        assert!(stored[0].is_will_executor);
        assert!(stored[0].notes.as_deref().is_some_and(|n| n.contains("remainder")));
    }

    #[tokio::test]
    async fn existing_beneficiary_only_contact_is_left_unchanged() {
        let registry = Arc::new(InMemoryContactRegistry::new());
        registry
            .create(
                &user(),
                CreateContactRequest {
                    name: "Eva Malá".to_string(),
                    email: Some("eva@example.sk".to_string()),
                    phone: None,
                    relationship: Relationship::Friend,
                    can_trigger_emergency: false,
                    can_access_financial_docs: false,
                    can_access_health_docs: false,
                    is_will_executor: false,
                    is_child_guardian: false,
                    emergency_priority: 4,
                    notes: None,
                },
            )
            .await
            .unwrap();

        let sync = synchronizer(Arc::clone(&registry));
        let mut facts = UserFacts::default();
        facts.beneficiaries = vec![testa_facts::Beneficiary {
            name: "Eva Malá".to_string(),
            relationship: "friend".to_string(),
            contact: Some(ContactInfo {
                email: Some("eva@example.sk".to_string()),
                phone: None,
            }),
            share: BeneficiaryShare::Percentage { value: 100.0 },
            conditions: None,
        }];
        let report = sync.reconcile(&user(), &facts).await;

        assert_eq!(report.unchanged, vec!["Eva Malá".to_string()]);
        assert!(report.updated.is_empty());
        let stored = registry.list(&user()).await.unwrap();
        assert_eq!(stored[0].emergency_priority, 4);
    }
}
