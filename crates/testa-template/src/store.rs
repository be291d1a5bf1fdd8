//! # Template Store
//!
//! Holds one verified [`WillTemplate`] per (jurisdiction, will type,
//! language) key. The store is append-only at runtime — templates are
//! reference data, and there is no mutation API.
//!
//! ## Lookup order
//!
//! `get` first asks the jurisdiction registry whether the combination is
//! legally supported at all ([`TemplateError::UnsupportedCombination`]),
//! then consults the cache, then the lazy loader, then the English
//! fallback for the same jurisdiction and will type, and only then gives
//! up with [`TemplateError::TemplateNotFound`].
//!
//! ## Concurrency
//!
//! The cache populates lazily on first access. Concurrent first loads of
//! the same key converge on a single cached instance: the insertion path
//! re-checks under the write lock and keeps whichever instance got there
//! first. Duplicate loader work is harmless — templates are pure data.

use std::collections::BTreeMap;
use std::sync::Arc;

use parking_lot::RwLock;

use testa_core::{JurisdictionCode, LanguageCode, WillType};
use testa_registry::JurisdictionRegistry;

use crate::builtin;
use crate::consistency::verify_template;
use crate::error::TemplateError;
use crate::model::WillTemplate;

/// Cache key: the (jurisdiction, will type, language) triple.
pub type TemplateKey = (JurisdictionCode, WillType, LanguageCode);

/// Lazy template producer. Returns `None` when it has nothing for the key.
type Loader = fn(&JurisdictionCode, WillType, &LanguageCode) -> Option<WillTemplate>;

/// The template store.
pub struct TemplateStore {
    registry: Arc<JurisdictionRegistry>,
    cache: RwLock<BTreeMap<TemplateKey, Arc<WillTemplate>>>,
    loader: Option<Loader>,
    /// Keys the loader knows about, for [`TemplateStore::list_all`].
    catalog: Vec<TemplateKey>,
}

impl std::fmt::Debug for TemplateStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TemplateStore")
            .field("cached", &self.cache.read().len())
            .field("catalog", &self.catalog.len())
            .finish_non_exhaustive()
    }
}

impl TemplateStore {
    /// A store backed by the built-in template catalog.
    pub fn builtin(registry: Arc<JurisdictionRegistry>) -> Self {
        Self {
            registry,
            cache: RwLock::new(BTreeMap::new()),
            loader: Some(builtin::lookup),
            catalog: builtin::catalog(),
        }
    }

    /// An empty store; templates arrive via [`TemplateStore::insert`].
    pub fn empty(registry: Arc<JurisdictionRegistry>) -> Self {
        Self {
            registry,
            cache: RwLock::new(BTreeMap::new()),
            loader: None,
            catalog: Vec::new(),
        }
    }

    /// Register a template. Append-only: re-registering a key is an error.
    ///
    /// # Errors
    ///
    /// - [`TemplateError::UnsupportedCombination`] if the registry does not
    ///   support the template's triple (templates must belong to the
    ///   registry's supported set).
    /// - Any [`verify_template`] failure.
    /// - [`TemplateError::DuplicateTemplate`] if the key is taken.
    pub fn insert(&self, template: WillTemplate) -> Result<(), TemplateError> {
        if !self
            .registry
            .is_supported(&template.jurisdiction, template.will_type, &template.language)
        {
            return Err(TemplateError::UnsupportedCombination {
                jurisdiction: template.jurisdiction.clone(),
                will_type: template.will_type,
                language: template.language.clone(),
            });
        }
        verify_template(&template)?;

        let key = (
            template.jurisdiction.clone(),
            template.will_type,
            template.language.clone(),
        );
        let mut cache = self.cache.write();
        if cache.contains_key(&key) {
            return Err(TemplateError::DuplicateTemplate {
                jurisdiction: key.0,
                will_type: key.1,
                language: key.2,
            });
        }
        cache.insert(key, Arc::new(template));
        Ok(())
    }

    /// Fetch the template for a combination.
    ///
    /// # Errors
    ///
    /// [`TemplateError::UnsupportedCombination`] when the registry rejects
    /// the triple (checked first), [`TemplateError::TemplateNotFound`] when
    /// the combination is legal but no template (or English fallback)
    /// exists, and any structural error a lazily-loaded template fails
    /// verification with.
    pub fn get(
        &self,
        jurisdiction: &JurisdictionCode,
        will_type: WillType,
        language: &LanguageCode,
    ) -> Result<Arc<WillTemplate>, TemplateError> {
        if !self.registry.is_supported(jurisdiction, will_type, language) {
            return Err(TemplateError::UnsupportedCombination {
                jurisdiction: jurisdiction.clone(),
                will_type,
                language: language.clone(),
            });
        }

        if let Some(found) = self.lookup(jurisdiction, will_type, language)? {
            return Ok(found);
        }

        // Fall back to the English rendering of the same document when the
        // requested language is supported but untranslated.
        let english = LanguageCode::english();
        if *language != english
            && self.registry.is_supported(jurisdiction, will_type, &english)
        {
            if let Some(found) = self.lookup(jurisdiction, will_type, &english)? {
                tracing::warn!(
                    jurisdiction = %jurisdiction,
                    will_type = %will_type,
                    requested = %language,
                    "template missing for requested language; serving English fallback"
                );
                return Ok(found);
            }
        }

        Err(TemplateError::TemplateNotFound {
            jurisdiction: jurisdiction.clone(),
            will_type,
            language: language.clone(),
        })
    }

    /// Cache consult + lazy load for one exact key.
    fn lookup(
        &self,
        jurisdiction: &JurisdictionCode,
        will_type: WillType,
        language: &LanguageCode,
    ) -> Result<Option<Arc<WillTemplate>>, TemplateError> {
        let key = (jurisdiction.clone(), will_type, language.clone());
        if let Some(hit) = self.cache.read().get(&key) {
            return Ok(Some(Arc::clone(hit)));
        }

        let Some(loader) = self.loader else {
            return Ok(None);
        };
        let Some(template) = loader(jurisdiction, will_type, language) else {
            return Ok(None);
        };
        verify_template(&template)?;
        tracing::debug!(template_id = %template.id, "template loaded into cache");

        let mut cache = self.cache.write();
        // Another caller may have loaded the same key while we were
        // building; converge on whichever instance is already cached.
        let entry = cache
            .entry(key)
            .or_insert_with(|| Arc::new(template));
        Ok(Some(Arc::clone(entry)))
    }

    /// Every template the store can produce, in key order. Finite and
    /// restartable; used for inventory and seeding checks.
    pub fn list_all(&self) -> Result<Vec<Arc<WillTemplate>>, TemplateError> {
        for (jurisdiction, will_type, language) in self.catalog.clone() {
            // Force-load catalog entries through the normal path.
            self.lookup(&jurisdiction, will_type, &language)?;
        }
        Ok(self.cache.read().values().map(Arc::clone).collect())
    }

    /// Whether a template is currently cached for the exact key.
    pub fn contains(
        &self,
        jurisdiction: &JurisdictionCode,
        will_type: WillType,
        language: &LanguageCode,
    ) -> bool {
        self.cache
            .read()
            .contains_key(&(jurisdiction.clone(), will_type, language.clone()))
    }

    /// The registry this store validates combinations against.
    pub fn registry(&self) -> &JurisdictionRegistry {
        &self.registry
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sk() -> JurisdictionCode {
        JurisdictionCode::new("SK").unwrap()
    }

    fn lang(s: &str) -> LanguageCode {
        LanguageCode::new(s).unwrap()
    }

    fn store() -> TemplateStore {
        TemplateStore::builtin(Arc::new(JurisdictionRegistry::builtin()))
    }

    #[test]
    fn get_loads_builtin_template_lazily() {
        let store = store();
        assert!(!store.contains(&sk(), WillType::Holographic, &lang("sk")));
        let template = store.get(&sk(), WillType::Holographic, &lang("sk")).unwrap();
        assert_eq!(template.id.as_str(), "sk-holographic-sk");
        assert!(store.contains(&sk(), WillType::Holographic, &lang("sk")));
    }

    #[test]
    fn repeated_gets_converge_on_one_instance() {
        let store = store();
        let a = store.get(&sk(), WillType::Witnessed, &lang("sk")).unwrap();
        let b = store.get(&sk(), WillType::Witnessed, &lang("sk")).unwrap();
        assert!(Arc::ptr_eq(&a, &b));
    }

    #[test]
    fn unsupported_combination_checked_before_lookup() {
        let store = store();
        // DE offers no witnessed form, so this is UnsupportedCombination,
        // not TemplateNotFound.
        let err = store
            .get(
                &JurisdictionCode::new("DE").unwrap(),
                WillType::Witnessed,
                &lang("de"),
            )
            .unwrap_err();
        assert!(matches!(err, TemplateError::UnsupportedCombination { .. }));
    }

    #[test]
    fn supported_but_untranslated_language_falls_back_to_english() {
        let store = store();
        // Ukrainian is a supported SK language with no dedicated template.
        let template = store.get(&sk(), WillType::Holographic, &lang("uk")).unwrap();
        assert_eq!(template.language, lang("en"));
    }

    #[test]
    fn empty_store_reports_not_found() {
        let store = TemplateStore::empty(Arc::new(JurisdictionRegistry::builtin()));
        let err = store
            .get(&sk(), WillType::Holographic, &lang("sk"))
            .unwrap_err();
        assert!(matches!(err, TemplateError::TemplateNotFound { .. }));
    }

    #[test]
    fn insert_is_append_only() {
        let store = TemplateStore::empty(Arc::new(JurisdictionRegistry::builtin()));
        let template = crate::builtin::lookup(&sk(), WillType::Holographic, &lang("sk")).unwrap();
        store.insert(template.clone()).unwrap();
        let err = store.insert(template).unwrap_err();
        assert!(matches!(err, TemplateError::DuplicateTemplate { .. }));
    }

    #[test]
    fn insert_rejects_unsupported_combination() {
        let store = TemplateStore::empty(Arc::new(JurisdictionRegistry::builtin()));
        let mut template =
            crate::builtin::lookup(&sk(), WillType::Holographic, &lang("sk")).unwrap();
        template.jurisdiction = JurisdictionCode::new("ZZ").unwrap();
        let err = store.insert(template).unwrap_err();
        assert!(matches!(err, TemplateError::UnsupportedCombination { .. }));
    }

    #[test]
    fn list_all_is_finite_and_restartable() {
        let store = store();
        let first = store.list_all().unwrap();
        let second = store.list_all().unwrap();
        assert!(!first.is_empty());
        assert_eq!(first.len(), second.len());
    }

    #[test]
    fn concurrent_first_loads_converge() {
        let store = Arc::new(store());
        let mut handles = Vec::new();
        for _ in 0..8 {
            let store = Arc::clone(&store);
            handles.push(std::thread::spawn(move || {
                store
                    .get(&sk(), WillType::Holographic, &lang("sk"))
                    .unwrap()
            }));
        }
        let templates: Vec<Arc<WillTemplate>> =
            handles.into_iter().map(|h| h.join().unwrap()).collect();
        for t in &templates[1..] {
            assert!(Arc::ptr_eq(&templates[0], t));
        }
    }
}
