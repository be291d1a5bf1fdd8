//! # WillEngine
//!
//! Wires the components into the caller-facing entry points: jurisdiction
//! listings, render-and-validate, full generation, and role operations.
//!
//! Rendering and validation are deliberately separate pure steps composed
//! here — a caller can preview an incomplete document without being
//! blocked, while finalization gates on the validation result.

use std::sync::Arc;

use chrono::NaiveDate;

use testa_core::{JurisdictionCode, LanguageCode, Timestamp, UserId, WillType};
use testa_facts::UserFacts;
use testa_registry::{JurisdictionConfig, JurisdictionRegistry, JurisdictionSummary};
use testa_render::{render, RenderedDocument};
use testa_roles::{ContactRegistry, ReconciliationReport, RoleSuggestions, RoleSynchronizer};
use testa_template::TemplateStore;
use testa_validate::{validate_at, ValidationResult};

use crate::assemble::{assemble, GeneratedWill};
use crate::error::EngineError;

/// The generation engine. Cheap to share behind an `Arc`; every
/// operation takes `&self`.
pub struct WillEngine {
    registry: Arc<JurisdictionRegistry>,
    store: TemplateStore,
    roles: Option<RoleSynchronizer>,
}

impl std::fmt::Debug for WillEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WillEngine")
            .field("jurisdictions", &self.registry.len())
            .field("roles_configured", &self.roles.is_some())
            .finish_non_exhaustive()
    }
}

impl WillEngine {
    /// An engine over the built-in jurisdictions and templates.
    pub fn new() -> Self {
        let registry = Arc::new(JurisdictionRegistry::builtin());
        let store = TemplateStore::builtin(Arc::clone(&registry));
        Self {
            registry,
            store,
            roles: None,
        }
    }

    /// An engine over an explicit registry and store.
    pub fn with_parts(registry: Arc<JurisdictionRegistry>, store: TemplateStore) -> Self {
        Self {
            registry,
            store,
            roles: None,
        }
    }

    /// Wire in the external contact registry, enabling
    /// [`reconcile_roles`](Self::reconcile_roles) and
    /// [`suggest_roles`](Self::suggest_roles).
    pub fn with_contact_registry(mut self, contacts: Arc<dyn ContactRegistry>) -> Self {
        self.roles = Some(RoleSynchronizer::new(contacts));
        self
    }

    /// The template store (for seeding deployment-specific templates).
    pub fn store(&self) -> &TemplateStore {
        &self.store
    }

    /// Localized summaries of every supported jurisdiction.
    pub fn list_supported_jurisdictions(
        &self,
        language: &LanguageCode,
    ) -> Vec<JurisdictionSummary> {
        self.registry.summaries(language)
    }

    /// Full legal requirements of one jurisdiction.
    pub fn jurisdiction_requirements(
        &self,
        code: &JurisdictionCode,
    ) -> Result<&JurisdictionConfig, EngineError> {
        Ok(self.registry.get(code)?)
    }

    /// Render a preview and validate the same facts snapshot, as of the
    /// current UTC date.
    pub fn render_and_validate(
        &self,
        jurisdiction: &JurisdictionCode,
        will_type: WillType,
        language: &LanguageCode,
        facts: &UserFacts,
    ) -> Result<(RenderedDocument, ValidationResult), EngineError> {
        self.render_and_validate_at(
            jurisdiction,
            will_type,
            language,
            facts,
            Timestamp::now().date(),
        )
    }

    /// As [`render_and_validate`](Self::render_and_validate), with an
    /// explicit reference date.
    pub fn render_and_validate_at(
        &self,
        jurisdiction: &JurisdictionCode,
        will_type: WillType,
        language: &LanguageCode,
        facts: &UserFacts,
        as_of: NaiveDate,
    ) -> Result<(RenderedDocument, ValidationResult), EngineError> {
        let config = self.registry.get(jurisdiction)?;
        let template = self.store.get(jurisdiction, will_type, language)?;
        let rendered = render(&template, facts, as_of)?;
        let validation = validate_at(facts, &template, config, as_of)?;
        Ok((rendered, validation))
    }

    /// Full generation: render, validate, assemble.
    pub fn generate(
        &self,
        jurisdiction: &JurisdictionCode,
        will_type: WillType,
        language: &LanguageCode,
        facts: &UserFacts,
    ) -> Result<GeneratedWill, EngineError> {
        self.generate_at(jurisdiction, will_type, language, facts, Timestamp::now().date())
    }

    /// As [`generate`](Self::generate), with an explicit reference date.
    pub fn generate_at(
        &self,
        jurisdiction: &JurisdictionCode,
        will_type: WillType,
        language: &LanguageCode,
        facts: &UserFacts,
        as_of: NaiveDate,
    ) -> Result<GeneratedWill, EngineError> {
        let config = self.registry.get(jurisdiction)?;
        let (rendered, validation) =
            self.render_and_validate_at(jurisdiction, will_type, language, facts, as_of)?;
        tracing::info!(
            jurisdiction = %jurisdiction,
            will_type = %will_type,
            language = %language,
            is_valid = validation.is_valid(),
            completeness = validation.completeness_score,
            "will generated"
        );
        Ok(assemble(rendered, validation, config, language))
    }

    /// Reconcile will roles against the configured contact registry.
    ///
    /// # Errors
    ///
    /// [`EngineError::ContactRegistryNotConfigured`] when the engine was
    /// built without a registry. Per-contact registry failures are
    /// reported inside the [`ReconciliationReport`], never here.
    pub async fn reconcile_roles(
        &self,
        user: &UserId,
        facts: &UserFacts,
    ) -> Result<ReconciliationReport, EngineError> {
        let roles = self
            .roles
            .as_ref()
            .ok_or(EngineError::ContactRegistryNotConfigured)?;
        Ok(roles.reconcile(user, facts).await)
    }

    /// Advisory role suggestions from the user's existing contacts.
    pub async fn suggest_roles(&self, user: &UserId) -> Result<RoleSuggestions, EngineError> {
        let roles = self
            .roles
            .as_ref()
            .ok_or(EngineError::ContactRegistryNotConfigured)?;
        Ok(roles.suggest_roles(user).await)
    }
}

impl Default for WillEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use testa_template::TemplateError;

    fn sk() -> JurisdictionCode {
        JurisdictionCode::new("SK").unwrap()
    }

    fn lang(s: &str) -> LanguageCode {
        LanguageCode::new(s).unwrap()
    }

    #[test]
    fn listing_is_localized_and_sorted() {
        let engine = WillEngine::new();
        let summaries = engine.list_supported_jurisdictions(&lang("en"));
        assert!(summaries.len() >= 6);
        assert!(summaries.iter().any(|s| s.country_name == "Slovakia"));
    }

    #[test]
    fn requirements_surface_registry_errors() {
        let engine = WillEngine::new();
        assert!(engine
            .jurisdiction_requirements(&JurisdictionCode::new("ZZ").unwrap())
            .is_err());
    }

    #[test]
    fn unsupported_combination_propagates() {
        let engine = WillEngine::new();
        let err = engine
            .render_and_validate(
                &JurisdictionCode::new("DE").unwrap(),
                WillType::Witnessed,
                &lang("de"),
                &testa_facts::UserFacts::default(),
            )
            .unwrap_err();
        assert!(matches!(
            err,
            EngineError::Template(TemplateError::UnsupportedCombination { .. })
        ));
    }

    #[test]
    fn preview_works_on_incomplete_facts() {
        let engine = WillEngine::new();
        let (rendered, validation) = engine
            .render_and_validate(
                &sk(),
                WillType::Holographic,
                &lang("sk"),
                &testa_facts::UserFacts::default(),
            )
            .unwrap();
        // Preview renders even though validation fails.
        assert!(!rendered.to_text().is_empty());
        assert!(!validation.is_valid());
    }

    #[tokio::test]
    async fn role_calls_require_a_configured_registry() {
        let engine = WillEngine::new();
        let user = UserId::new("user-1").unwrap();
        let err = engine
            .reconcile_roles(&user, &testa_facts::UserFacts::default())
            .await
            .unwrap_err();
        assert!(matches!(err, EngineError::ContactRegistryNotConfigured));
    }
}
