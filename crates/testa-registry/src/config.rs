//! # Jurisdiction Configuration
//!
//! One [`JurisdictionConfig`] per supported legal regime. Everything the
//! validation engine needs to apply a jurisdiction's formal rules lives
//! here as data — witness counts, notarization demands, forced-heirship
//! floors — so adding a jurisdiction is a configuration exercise, not a
//! code change.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use testa_core::{JurisdictionCode, LanguageCode, Severity, WillType};

/// Fallback disclaimer used when a jurisdiction has no text for the
/// requested language and no English text either.
pub const DEFAULT_DISCLAIMER: &str = "This document is generated based on applicable law. \
     Consult a qualified attorney for legal advice.";

/// Restrictions on who may act as a witness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WitnessRestriction {
    /// A witness must not also inherit under the will.
    NotBeneficiary,
    /// A witness must not be a close relative of a beneficiary.
    NotRelativeOfBeneficiary,
    /// A witness must have full legal capacity (adult, competent).
    LegalCapacity,
}

/// Witness requirements for witnessed execution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WitnessRequirement {
    /// Whether witnessed execution demands witnesses at all. Always true
    /// where the witnessed form is offered; kept explicit so a config is
    /// self-describing.
    pub required: bool,
    /// Minimum number of distinct witnesses.
    pub minimum_count: u32,
    /// Who may not serve.
    #[serde(default)]
    pub restrictions: Vec<WitnessRestriction>,
}

/// How a will may be revoked in this jurisdiction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RevocationMechanism {
    /// Making a later will revokes the earlier one.
    NewWill,
    /// An express written declaration of revocation.
    ExpressRevocation,
    /// Physically destroying the document.
    PhysicalDestruction,
    /// Revocation recorded before a notary.
    NotarialRevocation,
}

/// Formal requirements attached to a specific execution form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormalRequirement {
    /// The entire document must be written in the testator's hand.
    EntirelyHandwritten,
    /// The testator must sign the document.
    SignedByTestator,
    /// Dating the document is recommended (establishes will ordering).
    DateRecommended,
    /// All witnesses must be present at the same time.
    SimultaneousWitnessPresence,
    /// The will must be read aloud before signing.
    ReadAloudBeforeSigning,
}

/// Forced-heirship rule: protected relatives are guaranteed a minimum
/// share of the estate regardless of the testator's stated wishes.
///
/// The enforcement severity is per-jurisdiction data: some regimes treat a
/// shortfall as invalidating (error), others as a claim the heirs may
/// raise later (warning).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForcedHeirshipRule {
    /// Minimum combined percentage of the estate that must flow to
    /// protected heirs (spouse and children).
    pub minimum_protected_share: f64,
    /// Severity of the finding when the floor is not met.
    pub severity: Severity,
}

/// Inheritance-tax notes surfaced to callers; informational only.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxNotes {
    pub has_inheritance_tax: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// The legal requirements a will must satisfy in one jurisdiction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegalRequirements {
    /// Minimum testator age in completed years.
    pub minimum_testator_age: u32,
    /// Witness rules for witnessed execution.
    pub witnesses: WitnessRequirement,
    /// Execution forms that demand a notarization record.
    #[serde(default)]
    pub notarization_required_for: Vec<WillType>,
    /// Forced-heirship floor, if this regime has one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub forced_heirship: Option<ForcedHeirshipRule>,
    /// Severity of leaving minor children without an addressed
    /// guardianship (error where appointment is mandatory, warning where
    /// merely recommended).
    pub guardianship_for_minors: Severity,
    /// Recognized revocation mechanisms.
    #[serde(default)]
    pub revocation: Vec<RevocationMechanism>,
    /// Formal requirements per execution form.
    #[serde(default)]
    pub formal: BTreeMap<WillType, Vec<FormalRequirement>>,
}

/// Everything the stack knows about one jurisdiction. Immutable after load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JurisdictionConfig {
    pub code: JurisdictionCode,
    /// Country name per language, with English fallback.
    pub display_names: BTreeMap<LanguageCode, String>,
    /// Supported document languages, in preference order. The first entry
    /// is the jurisdiction's default.
    pub supported_languages: Vec<LanguageCode>,
    /// Execution forms this regime recognizes.
    pub supported_will_types: Vec<WillType>,
    /// The form suggested to callers who do not choose one.
    pub default_will_type: WillType,
    pub legal: LegalRequirements,
    #[serde(default)]
    pub tax: TaxNotes,
    /// Legal disclaimer text per language.
    #[serde(default)]
    pub disclaimers: BTreeMap<LanguageCode, String>,
}

impl JurisdictionConfig {
    /// The country name in the requested language, falling back to English
    /// and then to the bare code.
    pub fn display_name(&self, language: &LanguageCode) -> &str {
        self.display_names
            .get(language)
            .or_else(|| self.display_names.get(&LanguageCode::english()))
            .map(String::as_str)
            .unwrap_or_else(|| self.code.as_str())
    }

    /// The jurisdiction's default document language.
    pub fn default_language(&self) -> Option<&LanguageCode> {
        self.supported_languages.first()
    }

    pub fn supports_language(&self, language: &LanguageCode) -> bool {
        self.supported_languages.contains(language)
    }

    pub fn supports_will_type(&self, will_type: WillType) -> bool {
        self.supported_will_types.contains(&will_type)
    }

    /// Whether the given execution form demands a notarization record.
    pub fn requires_notarization(&self, will_type: WillType) -> bool {
        self.legal.notarization_required_for.contains(&will_type)
    }

    /// The disclaimer in the requested language, with English and then
    /// [`DEFAULT_DISCLAIMER`] as fallbacks.
    pub fn disclaimer(&self, language: &LanguageCode) -> &str {
        self.disclaimers
            .get(language)
            .or_else(|| self.disclaimers.get(&LanguageCode::english()))
            .map(String::as_str)
            .unwrap_or(DEFAULT_DISCLAIMER)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builtin;

    #[test]
    fn display_name_falls_back_to_english_then_code() {
        let config = builtin::slovakia();
        let sk = LanguageCode::new("sk").unwrap();
        let fr = LanguageCode::new("fr").unwrap();
        assert_eq!(config.display_name(&sk), "Slovensko");
        // No French name registered; falls back to English.
        assert_eq!(config.display_name(&fr), "Slovakia");
    }

    #[test]
    fn disclaimer_falls_back_to_default() {
        let mut config = builtin::slovakia();
        config.disclaimers.clear();
        let en = LanguageCode::english();
        assert_eq!(config.disclaimer(&en), DEFAULT_DISCLAIMER);
    }

    #[test]
    fn notarization_required_only_for_notarial() {
        let config = builtin::slovakia();
        assert!(config.requires_notarization(WillType::Notarial));
        assert!(!config.requires_notarization(WillType::Holographic));
    }

    #[test]
    fn default_language_is_first_supported() {
        let config = builtin::czechia();
        assert_eq!(config.default_language().unwrap().as_str(), "cs");
    }
}
