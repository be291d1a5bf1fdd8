//! # Registry Lookup
//!
//! [`JurisdictionRegistry`] holds the loaded configurations behind a plain
//! ordered map. Pure lookup, no side effects, no interior mutability —
//! safe for concurrent reads from any number of callers.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use testa_core::{JurisdictionCode, LanguageCode, WillType};

use crate::builtin;
use crate::config::JurisdictionConfig;
use crate::error::RegistryError;

/// The jurisdiction knowledge base.
#[derive(Debug, Clone)]
pub struct JurisdictionRegistry {
    configs: BTreeMap<JurisdictionCode, JurisdictionConfig>,
}

/// Caller-facing summary of one jurisdiction, localized to the
/// requested language.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JurisdictionSummary {
    pub code: JurisdictionCode,
    pub country_name: String,
    pub supported_languages: Vec<LanguageCode>,
    pub supported_will_types: Vec<WillType>,
    pub default_will_type: WillType,
}

impl JurisdictionRegistry {
    /// A registry preloaded with the built-in jurisdictions.
    pub fn builtin() -> Self {
        let configs = builtin::all()
            .into_iter()
            .map(|c| (c.code.clone(), c))
            .collect();
        Self { configs }
    }

    /// Build a registry from explicit configurations.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::DuplicateJurisdiction`] if two configs
    /// claim the same code, and [`RegistryError::InvalidConfig`] when a
    /// config's default will type is not among its supported types.
    pub fn from_configs(
        configs: impl IntoIterator<Item = JurisdictionConfig>,
    ) -> Result<Self, RegistryError> {
        let mut map = BTreeMap::new();
        for config in configs {
            if !config.supports_will_type(config.default_will_type) {
                return Err(RegistryError::InvalidConfig {
                    code: config.code.clone(),
                    reason: format!(
                        "default will type {} is not in the supported set",
                        config.default_will_type
                    ),
                });
            }
            let code = config.code.clone();
            if map.insert(code.clone(), config).is_some() {
                return Err(RegistryError::DuplicateJurisdiction { code });
            }
        }
        Ok(Self { configs: map })
    }

    /// Look up one jurisdiction.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::UnsupportedJurisdiction`] for unknown codes.
    pub fn get(&self, code: &JurisdictionCode) -> Result<&JurisdictionConfig, RegistryError> {
        self.configs
            .get(code)
            .ok_or_else(|| RegistryError::UnsupportedJurisdiction { code: code.clone() })
    }

    /// Whether the (jurisdiction, will type, language) combination is
    /// legally supported. Unknown jurisdictions are simply unsupported.
    pub fn is_supported(
        &self,
        code: &JurisdictionCode,
        will_type: WillType,
        language: &LanguageCode,
    ) -> bool {
        match self.configs.get(code) {
            Some(config) => {
                config.supports_will_type(will_type) && config.supports_language(language)
            }
            None => false,
        }
    }

    /// Iterate configurations in code order.
    pub fn iter(&self) -> impl Iterator<Item = &JurisdictionConfig> {
        self.configs.values()
    }

    /// Number of registered jurisdictions.
    pub fn len(&self) -> usize {
        self.configs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.configs.is_empty()
    }

    /// Localized summaries of every jurisdiction, in code order.
    pub fn summaries(&self, language: &LanguageCode) -> Vec<JurisdictionSummary> {
        self.configs
            .values()
            .map(|config| JurisdictionSummary {
                code: config.code.clone(),
                country_name: config.display_name(language).to_string(),
                supported_languages: config.supported_languages.clone(),
                supported_will_types: config.supported_will_types.clone(),
                default_will_type: config.default_will_type,
            })
            .collect()
    }
}

impl Default for JurisdictionRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}
