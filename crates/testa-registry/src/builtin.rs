//! # Built-in Jurisdiction Configurations
//!
//! The jurisdictions shipped with the stack. Values mirror the formal
//! requirements of each regime's succession law at the level of detail the
//! validation engine consumes: ages, witness counts, notarization demands,
//! forced-heirship floors and their enforcement severity.
//!
//! Per-jurisdiction notes:
//!
//! - **SK / CZ**: holographic, witnessed (2 witnesses, not beneficiaries),
//!   and notarial forms; descendants are protected heirs, and a shortfall
//!   can invalidate dispositions — severity `Error`.
//! - **DE**: no witnessed private will; the Pflichtteil is a monetary claim
//!   against the heirs rather than grounds for invalidity — severity
//!   `Warning`.
//! - **AT**: a private witnessed will needs three witnesses.
//! - **PL**: the zachowek works like the German Pflichtteil — a claim, not
//!   invalidity.
//! - **UK** (England & Wales baseline): witnessed form only, two witnesses,
//!   no forced heirship, no notarial wills.

use std::collections::BTreeMap;

use testa_core::{JurisdictionCode, LanguageCode, Severity, WillType};

use crate::config::{
    ForcedHeirshipRule, FormalRequirement, JurisdictionConfig, LegalRequirements,
    RevocationMechanism, TaxNotes, WitnessRequirement, WitnessRestriction,
};

fn code(value: &str) -> JurisdictionCode {
    JurisdictionCode::new(value).expect("BUG: hardcoded jurisdiction code rejected")
}

fn lang(value: &str) -> LanguageCode {
    LanguageCode::new(value).expect("BUG: hardcoded language code rejected")
}

fn langs(values: &[&str]) -> Vec<LanguageCode> {
    values.iter().map(|v| lang(v)).collect()
}

fn names(pairs: &[(&str, &str)]) -> BTreeMap<LanguageCode, String> {
    pairs
        .iter()
        .map(|(l, name)| (lang(l), (*name).to_string()))
        .collect()
}

/// All built-in configurations, in code order.
pub fn all() -> Vec<JurisdictionConfig> {
    vec![
        austria(),
        czechia(),
        germany(),
        united_kingdom(),
        poland(),
        slovakia(),
    ]
}

/// Slovakia — Občiansky zákonník §§ 476–480.
pub fn slovakia() -> JurisdictionConfig {
    JurisdictionConfig {
        code: code("SK"),
        display_names: names(&[
            ("sk", "Slovensko"),
            ("cs", "Slovensko"),
            ("en", "Slovakia"),
            ("de", "Slowakei"),
        ]),
        supported_languages: langs(&["sk", "cs", "en", "de", "uk"]),
        supported_will_types: vec![WillType::Holographic, WillType::Witnessed, WillType::Notarial],
        default_will_type: WillType::Holographic,
        legal: LegalRequirements {
            minimum_testator_age: 18,
            witnesses: WitnessRequirement {
                required: true,
                minimum_count: 2,
                restrictions: vec![
                    WitnessRestriction::NotBeneficiary,
                    WitnessRestriction::NotRelativeOfBeneficiary,
                    WitnessRestriction::LegalCapacity,
                ],
            },
            notarization_required_for: vec![WillType::Notarial],
            forced_heirship: Some(ForcedHeirshipRule {
                minimum_protected_share: 50.0,
                severity: Severity::Error,
            }),
            guardianship_for_minors: Severity::Error,
            revocation: vec![
                RevocationMechanism::NewWill,
                RevocationMechanism::ExpressRevocation,
                RevocationMechanism::PhysicalDestruction,
            ],
            formal: BTreeMap::from([
                (
                    WillType::Holographic,
                    vec![
                        FormalRequirement::EntirelyHandwritten,
                        FormalRequirement::SignedByTestator,
                        FormalRequirement::DateRecommended,
                    ],
                ),
                (
                    WillType::Witnessed,
                    vec![
                        FormalRequirement::SignedByTestator,
                        FormalRequirement::SimultaneousWitnessPresence,
                    ],
                ),
                (WillType::Notarial, vec![FormalRequirement::SignedByTestator]),
            ]),
        },
        tax: TaxNotes {
            has_inheritance_tax: false,
            note: None,
        },
        disclaimers: BTreeMap::from([
            (
                lang("sk"),
                "Tento dokument je generovaný na základe súčasného slovenského práva. \
                 Pre personalizované právne poradenstvo sa obráťte na kvalifikovaného \
                 slovenského právnika."
                    .to_string(),
            ),
            (
                lang("en"),
                "This document is generated based on current Slovak law. For personalized \
                 legal advice, consult a qualified Slovak attorney."
                    .to_string(),
            ),
        ]),
    }
}

/// Czech Republic — občanský zákoník §§ 1540–1542.
pub fn czechia() -> JurisdictionConfig {
    JurisdictionConfig {
        code: code("CZ"),
        display_names: names(&[
            ("cs", "Česká republika"),
            ("sk", "Česká republika"),
            ("en", "Czech Republic"),
            ("de", "Tschechische Republik"),
        ]),
        supported_languages: langs(&["cs", "sk", "en", "de", "uk"]),
        supported_will_types: vec![WillType::Holographic, WillType::Witnessed, WillType::Notarial],
        default_will_type: WillType::Holographic,
        legal: LegalRequirements {
            minimum_testator_age: 18,
            witnesses: WitnessRequirement {
                required: true,
                minimum_count: 2,
                restrictions: vec![
                    WitnessRestriction::NotBeneficiary,
                    WitnessRestriction::NotRelativeOfBeneficiary,
                    WitnessRestriction::LegalCapacity,
                ],
            },
            notarization_required_for: vec![WillType::Notarial],
            forced_heirship: Some(ForcedHeirshipRule {
                minimum_protected_share: 50.0,
                severity: Severity::Error,
            }),
            guardianship_for_minors: Severity::Error,
            revocation: vec![
                RevocationMechanism::NewWill,
                RevocationMechanism::ExpressRevocation,
                RevocationMechanism::PhysicalDestruction,
            ],
            formal: BTreeMap::from([
                (
                    WillType::Holographic,
                    vec![
                        FormalRequirement::EntirelyHandwritten,
                        FormalRequirement::SignedByTestator,
                        FormalRequirement::DateRecommended,
                    ],
                ),
                (
                    WillType::Witnessed,
                    vec![
                        FormalRequirement::SignedByTestator,
                        FormalRequirement::SimultaneousWitnessPresence,
                    ],
                ),
                (WillType::Notarial, vec![FormalRequirement::SignedByTestator]),
            ]),
        },
        tax: TaxNotes {
            has_inheritance_tax: false,
            note: None,
        },
        disclaimers: BTreeMap::from([
            (
                lang("cs"),
                "Tento dokument je generován na základě současného českého práva. \
                 Pro personalizované právní poradenství se obraťte na kvalifikovaného \
                 českého právníka."
                    .to_string(),
            ),
            (
                lang("en"),
                "This document is generated based on current Czech law. For personalized \
                 legal advice, consult a qualified Czech attorney."
                    .to_string(),
            ),
        ]),
    }
}

/// Germany — BGB §§ 2229–2247. No witnessed private form.
pub fn germany() -> JurisdictionConfig {
    JurisdictionConfig {
        code: code("DE"),
        display_names: names(&[("de", "Deutschland"), ("en", "Germany")]),
        supported_languages: langs(&["de", "en", "pl", "uk"]),
        supported_will_types: vec![WillType::Holographic, WillType::Notarial],
        default_will_type: WillType::Holographic,
        legal: LegalRequirements {
            minimum_testator_age: 16,
            witnesses: WitnessRequirement {
                required: false,
                minimum_count: 0,
                restrictions: vec![],
            },
            notarization_required_for: vec![WillType::Notarial],
            forced_heirship: Some(ForcedHeirshipRule {
                minimum_protected_share: 50.0,
                severity: Severity::Warning,
            }),
            guardianship_for_minors: Severity::Warning,
            revocation: vec![
                RevocationMechanism::NewWill,
                RevocationMechanism::ExpressRevocation,
                RevocationMechanism::PhysicalDestruction,
            ],
            formal: BTreeMap::from([
                (
                    WillType::Holographic,
                    vec![
                        FormalRequirement::EntirelyHandwritten,
                        FormalRequirement::SignedByTestator,
                        FormalRequirement::DateRecommended,
                    ],
                ),
                (WillType::Notarial, vec![FormalRequirement::SignedByTestator]),
            ]),
        },
        tax: TaxNotes {
            has_inheritance_tax: true,
            note: Some("Inheritance tax 7–50% depending on class and amount".to_string()),
        },
        disclaimers: BTreeMap::from([
            (
                lang("de"),
                "Dieses Dokument wurde auf Grundlage des geltenden deutschen Rechts erstellt. \
                 Für eine individuelle Rechtsberatung wenden Sie sich an einen qualifizierten \
                 deutschen Rechtsanwalt oder Notar."
                    .to_string(),
            ),
            (
                lang("en"),
                "This document is generated based on current German law. For personalized \
                 legal advice, consult a qualified German attorney or notary."
                    .to_string(),
            ),
        ]),
    }
}

/// Austria — ABGB §§ 577–601. A private witnessed will needs three witnesses.
pub fn austria() -> JurisdictionConfig {
    JurisdictionConfig {
        code: code("AT"),
        display_names: names(&[("de", "Österreich"), ("en", "Austria")]),
        supported_languages: langs(&["de", "en", "cs", "uk"]),
        supported_will_types: vec![WillType::Holographic, WillType::Witnessed, WillType::Notarial],
        default_will_type: WillType::Holographic,
        legal: LegalRequirements {
            minimum_testator_age: 18,
            witnesses: WitnessRequirement {
                required: true,
                minimum_count: 3,
                restrictions: vec![
                    WitnessRestriction::NotBeneficiary,
                    WitnessRestriction::NotRelativeOfBeneficiary,
                    WitnessRestriction::LegalCapacity,
                ],
            },
            notarization_required_for: vec![WillType::Notarial],
            forced_heirship: Some(ForcedHeirshipRule {
                minimum_protected_share: 50.0,
                severity: Severity::Warning,
            }),
            guardianship_for_minors: Severity::Warning,
            revocation: vec![
                RevocationMechanism::NewWill,
                RevocationMechanism::ExpressRevocation,
                RevocationMechanism::PhysicalDestruction,
            ],
            formal: BTreeMap::from([
                (
                    WillType::Holographic,
                    vec![
                        FormalRequirement::EntirelyHandwritten,
                        FormalRequirement::SignedByTestator,
                    ],
                ),
                (
                    WillType::Witnessed,
                    vec![
                        FormalRequirement::SignedByTestator,
                        FormalRequirement::SimultaneousWitnessPresence,
                    ],
                ),
                (WillType::Notarial, vec![FormalRequirement::SignedByTestator]),
            ]),
        },
        tax: TaxNotes {
            has_inheritance_tax: false,
            note: None,
        },
        disclaimers: BTreeMap::from([(
            lang("en"),
            "This document is generated based on current Austrian law. For personalized \
             legal advice, consult a qualified Austrian attorney or notary."
                .to_string(),
        )]),
    }
}

/// Poland — Kodeks cywilny art. 949–958.
pub fn poland() -> JurisdictionConfig {
    JurisdictionConfig {
        code: code("PL"),
        display_names: names(&[("pl", "Polska"), ("en", "Poland")]),
        supported_languages: langs(&["pl", "en", "de", "uk"]),
        supported_will_types: vec![WillType::Holographic, WillType::Witnessed, WillType::Notarial],
        default_will_type: WillType::Holographic,
        legal: LegalRequirements {
            minimum_testator_age: 18,
            witnesses: WitnessRequirement {
                required: true,
                minimum_count: 2,
                restrictions: vec![
                    WitnessRestriction::NotBeneficiary,
                    WitnessRestriction::LegalCapacity,
                ],
            },
            notarization_required_for: vec![WillType::Notarial],
            forced_heirship: Some(ForcedHeirshipRule {
                minimum_protected_share: 50.0,
                severity: Severity::Warning,
            }),
            guardianship_for_minors: Severity::Warning,
            revocation: vec![
                RevocationMechanism::NewWill,
                RevocationMechanism::ExpressRevocation,
                RevocationMechanism::PhysicalDestruction,
            ],
            formal: BTreeMap::from([
                (
                    WillType::Holographic,
                    vec![
                        FormalRequirement::EntirelyHandwritten,
                        FormalRequirement::SignedByTestator,
                        FormalRequirement::DateRecommended,
                    ],
                ),
                (
                    WillType::Witnessed,
                    vec![
                        FormalRequirement::SignedByTestator,
                        FormalRequirement::ReadAloudBeforeSigning,
                    ],
                ),
                (WillType::Notarial, vec![FormalRequirement::SignedByTestator]),
            ]),
        },
        tax: TaxNotes {
            has_inheritance_tax: true,
            note: Some("Inheritance tax 3–20%; close family often exempt".to_string()),
        },
        disclaimers: BTreeMap::from([(
            lang("en"),
            "This document is generated based on current Polish law. For personalized \
             legal advice, consult a qualified Polish attorney or notary."
                .to_string(),
        )]),
    }
}

/// United Kingdom (England & Wales baseline) — Wills Act 1837 s.9.
pub fn united_kingdom() -> JurisdictionConfig {
    JurisdictionConfig {
        code: code("GB"),
        display_names: names(&[("en", "United Kingdom")]),
        supported_languages: langs(&["en", "pl", "uk"]),
        supported_will_types: vec![WillType::Witnessed],
        default_will_type: WillType::Witnessed,
        legal: LegalRequirements {
            minimum_testator_age: 18,
            witnesses: WitnessRequirement {
                required: true,
                minimum_count: 2,
                restrictions: vec![
                    WitnessRestriction::NotBeneficiary,
                    WitnessRestriction::LegalCapacity,
                ],
            },
            notarization_required_for: vec![],
            forced_heirship: None,
            guardianship_for_minors: Severity::Warning,
            revocation: vec![
                RevocationMechanism::NewWill,
                RevocationMechanism::ExpressRevocation,
                RevocationMechanism::PhysicalDestruction,
            ],
            formal: BTreeMap::from([(
                WillType::Witnessed,
                vec![
                    FormalRequirement::SignedByTestator,
                    FormalRequirement::SimultaneousWitnessPresence,
                ],
            )]),
        },
        tax: TaxNotes {
            has_inheritance_tax: true,
            note: Some("Inheritance tax 40% above the nil-rate band".to_string()),
        },
        disclaimers: BTreeMap::from([(
            lang("en"),
            "This document is generated based on the law of England and Wales. For \
             personalized legal advice, consult a qualified solicitor."
                .to_string(),
        )]),
    }
}
