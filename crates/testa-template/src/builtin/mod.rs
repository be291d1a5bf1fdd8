//! # Built-in Template Catalog
//!
//! The templates shipped with the stack: Slovakia and the Czech Republic,
//! each in the national language and English, across all three execution
//! forms. Additional jurisdictions and languages load through
//! [`crate::loader`] at deployment time.
//!
//! Template text follows the sectioning conventions of Czech and Slovak
//! testamentary practice (numbered articles: testator, revocation, heirs,
//! forced heirs, executor, guardianship, residuary estate, signature).

mod czechia;
mod slovakia;

use testa_core::{JurisdictionCode, LanguageCode, WillType};

use crate::model::WillTemplate;
use crate::store::TemplateKey;

/// Produce the built-in template for a key, if the catalog has one.
pub fn lookup(
    jurisdiction: &JurisdictionCode,
    will_type: WillType,
    language: &LanguageCode,
) -> Option<WillTemplate> {
    match jurisdiction.as_str() {
        "SK" => slovakia::build(will_type, language),
        "CZ" => czechia::build(will_type, language),
        _ => None,
    }
}

/// Every key the catalog can produce, for inventory listing.
pub fn catalog() -> Vec<TemplateKey> {
    let mut keys = Vec::new();
    let sk = JurisdictionCode::new("SK").expect("BUG: hardcoded jurisdiction code rejected");
    let cz = JurisdictionCode::new("CZ").expect("BUG: hardcoded jurisdiction code rejected");
    let en = LanguageCode::english();
    let sk_lang = LanguageCode::new("sk").expect("BUG: hardcoded language code rejected");
    let cs_lang = LanguageCode::new("cs").expect("BUG: hardcoded language code rejected");

    for &will_type in WillType::all() {
        keys.push((sk.clone(), will_type, sk_lang.clone()));
        keys.push((sk.clone(), will_type, en.clone()));
        keys.push((cz.clone(), will_type, cs_lang.clone()));
        keys.push((cz.clone(), will_type, en.clone()));
    }
    keys
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consistency::verify_template;

    #[test]
    fn every_catalog_entry_builds_and_verifies() {
        for (jurisdiction, will_type, language) in catalog() {
            let template = lookup(&jurisdiction, will_type, &language)
                .unwrap_or_else(|| panic!("catalog entry {jurisdiction}/{will_type}/{language} missing"));
            verify_template(&template).unwrap_or_else(|e| {
                panic!("template {} failed verification: {e}", template.id)
            });
            assert_eq!(template.jurisdiction, jurisdiction);
            assert_eq!(template.will_type, will_type);
            assert_eq!(template.language, language);
        }
    }

    #[test]
    fn witnessed_templates_declare_a_witness_variable() {
        for (jurisdiction, will_type, language) in catalog() {
            if will_type != WillType::Witnessed {
                continue;
            }
            let template = lookup(&jurisdiction, will_type, &language).unwrap();
            assert!(
                template.variable("witnesses").is_some(),
                "{} lacks a witnesses variable",
                template.id
            );
        }
    }

    #[test]
    fn unknown_jurisdiction_yields_nothing() {
        let de = JurisdictionCode::new("DE").unwrap();
        let de_lang = LanguageCode::new("de").unwrap();
        assert!(lookup(&de, WillType::Holographic, &de_lang).is_none());
    }
}
