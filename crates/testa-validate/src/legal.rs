//! # Jurisdiction Legal Rules
//!
//! Minimum testator age, witness count and eligibility, notarization, and
//! forced heirship — all driven by the jurisdiction's
//! [`LegalRequirements`](testa_registry::LegalRequirements) rather than
//! hardcoded policy.

use std::collections::BTreeSet;

use chrono::NaiveDate;

use testa_core::{age_in_years, WillType};
use testa_facts::{BeneficiaryShare, UserFacts};
use testa_registry::{JurisdictionConfig, WitnessRestriction};

use crate::issue::{IssueCode, ValidationIssue};

/// Ages past this draw a verify-your-input warning.
const IMPLAUSIBLE_AGE: u32 = 100;

/// Evaluate the jurisdiction's legal rule family.
pub fn evaluate(
    facts: &UserFacts,
    will_type: WillType,
    config: &JurisdictionConfig,
    as_of: NaiveDate,
) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();
    check_age(facts, config, as_of, &mut issues);
    check_witnesses(facts, will_type, config, as_of, &mut issues);
    check_notarization(facts, will_type, config, &mut issues);
    check_forced_heirship(facts, config, &mut issues);
    issues
}

fn check_age(
    facts: &UserFacts,
    config: &JurisdictionConfig,
    as_of: NaiveDate,
    issues: &mut Vec<ValidationIssue>,
) {
    let Some(dob) = facts.personal.date_of_birth else {
        // Absence is reported by the structural required-field pass.
        return;
    };
    let age = age_in_years(dob, as_of);
    let minimum = config.legal.minimum_testator_age;
    if age < minimum {
        issues.push(
            ValidationIssue::error(
                IssueCode::LegalAgeRequirement,
                "personal.date_of_birth",
                format!("Testator must be at least {minimum} years old to make a will"),
            )
            .with_legal_reference(format!("Minimum age requirement for {}", config.code)),
        );
    } else if age > IMPLAUSIBLE_AGE {
        issues.push(ValidationIssue::warning(
            IssueCode::UnusualAge,
            "personal.date_of_birth",
            "Please verify the date of birth is correct",
        ));
    }
}

fn check_witnesses(
    facts: &UserFacts,
    will_type: WillType,
    config: &JurisdictionConfig,
    as_of: NaiveDate,
    issues: &mut Vec<ValidationIssue>,
) {
    if will_type != WillType::Witnessed || !config.legal.witnesses.required {
        return;
    }
    let requirement = &config.legal.witnesses;

    // Distinct by normalized name; an email match also collapses entries.
    let mut names: BTreeSet<String> = BTreeSet::new();
    let mut emails: BTreeSet<String> = BTreeSet::new();
    let mut distinct = 0u32;
    for witness in &facts.witnesses {
        let name = witness.full_name.trim().to_lowercase();
        let email = witness.email.as_deref().map(|e| e.trim().to_lowercase());
        let duplicate = (!name.is_empty() && names.contains(&name))
            || email.as_ref().is_some_and(|e| emails.contains(e));
        if !duplicate && !name.is_empty() {
            distinct += 1;
        }
        if !name.is_empty() {
            names.insert(name);
        }
        if let Some(e) = email {
            emails.insert(e);
        }
    }

    if distinct < requirement.minimum_count {
        issues.push(
            ValidationIssue::error(
                IssueCode::WitnessCountBelowMinimum,
                "witnesses",
                format!(
                    "{} requires at least {} witnesses for a witnessed will; {} declared",
                    config.code, requirement.minimum_count, distinct
                ),
            )
            .with_legal_reference("Witness requirements"),
        );
    }

    for (index, witness) in facts.witnesses.iter().enumerate() {
        for restriction in &requirement.restrictions {
            match restriction {
                WitnessRestriction::NotBeneficiary => {
                    let name = witness.full_name.trim().to_lowercase();
                    let email = witness.email.as_deref().map(|e| e.trim().to_lowercase());
                    let conflict = facts.beneficiaries.iter().any(|b| {
                        b.name.trim().to_lowercase() == name
                            || (b.email().map(|e| e.trim().to_lowercase()) == email
                                && email.is_some())
                    });
                    if conflict {
                        issues.push(
                            ValidationIssue::error(
                                IssueCode::WitnessIsBeneficiary,
                                format!("witnesses[{index}]"),
                                format!(
                                    "Witness {} may not also be a beneficiary of the will",
                                    witness.full_name
                                ),
                            )
                            .with_legal_reference("Witness eligibility"),
                        );
                    }
                }
                WitnessRestriction::LegalCapacity => {
                    if let Some(dob) = witness.date_of_birth {
                        if age_in_years(dob, as_of) < 18 {
                            issues.push(
                                ValidationIssue::error(
                                    IssueCode::WitnessLacksCapacity,
                                    format!("witnesses[{index}]"),
                                    format!(
                                        "Witness {} must be an adult with legal capacity",
                                        witness.full_name
                                    ),
                                )
                                .with_legal_reference("Witness eligibility"),
                            );
                        }
                    }
                }
                // Kinship between witnesses and beneficiaries is not part
                // of the facts model; it cannot be checked mechanically.
                WitnessRestriction::NotRelativeOfBeneficiary => {}
            }
        }
    }
}

fn check_notarization(
    facts: &UserFacts,
    will_type: WillType,
    config: &JurisdictionConfig,
    issues: &mut Vec<ValidationIssue>,
) {
    if config.requires_notarization(will_type) && facts.notarization.is_none() {
        issues.push(
            ValidationIssue::error(
                IssueCode::NotarizationMissing,
                "notarization",
                format!(
                    "A {will_type} will in {} requires a notarization record",
                    config.code
                ),
            )
            .with_legal_reference("Notarization requirements"),
        );
    }
}

fn check_forced_heirship(
    facts: &UserFacts,
    config: &JurisdictionConfig,
    issues: &mut Vec<ValidationIssue>,
) {
    let Some(rule) = &config.legal.forced_heirship else {
        return;
    };
    if !facts.family.has_protected_heirs() {
        return;
    }

    // A protected heir holding the remainder can absorb any share, so the
    // floor cannot be judged short.
    let remainder_to_protected = facts
        .beneficiaries
        .iter()
        .any(|b| b.is_protected_heir() && matches!(b.share, BeneficiaryShare::Remainder));

    let protected_total: f64 = facts
        .beneficiaries
        .iter()
        .filter(|b| b.is_protected_heir())
        .filter_map(|b| match b.share {
            BeneficiaryShare::Percentage { value } => Some(value),
            _ => None,
        })
        .sum();

    if !remainder_to_protected && protected_total + f64::EPSILON < rule.minimum_protected_share {
        issues.push(
            ValidationIssue::new(
                rule.severity,
                IssueCode::ForcedHeirshipShortfall,
                "beneficiaries",
                format!(
                    "Protected heirs receive {protected_total}% of the estate; {} mandates \
                     at least {}%",
                    config.code, rule.minimum_protected_share
                ),
            )
            .with_legal_reference("Forced heirship provisions")
            .with_suggested_fix(
                "Review beneficiary shares to satisfy the mandatory inheritance floor",
            ),
        );
    }

    if facts.family.spouse.is_some()
        && !facts
            .beneficiaries
            .iter()
            .any(|b| b.relationship == "spouse")
    {
        issues.push(
            ValidationIssue::new(
                rule.severity,
                IssueCode::SpouseNotBeneficiary,
                "beneficiaries",
                "The spouse is not named as a beneficiary despite forced heirship rules",
            )
            .with_legal_reference("Forced heirship provisions"),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use testa_facts::{Beneficiary, Witness};
    use testa_registry::builtin;

    fn as_of() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 6).unwrap()
    }

    fn adult_facts() -> UserFacts {
        let mut facts = UserFacts::default();
        facts.personal.full_name = "Ján Novák".to_string();
        facts.personal.date_of_birth = NaiveDate::from_ymd_opt(1980, 3, 12);
        facts
    }

    fn beneficiary(name: &str, relationship: &str, pct: f64) -> Beneficiary {
        Beneficiary {
            name: name.to_string(),
            relationship: relationship.to_string(),
            contact: None,
            share: BeneficiaryShare::Percentage { value: pct },
            conditions: None,
        }
    }

    #[test]
    fn underage_testator_is_an_error() {
        let mut facts = adult_facts();
        facts.personal.date_of_birth = NaiveDate::from_ymd_opt(2012, 1, 1);
        let issues = evaluate(&facts, WillType::Holographic, &builtin::slovakia(), as_of());
        assert!(issues
            .iter()
            .any(|i| i.code == IssueCode::LegalAgeRequirement));
    }

    #[test]
    fn witnessed_will_without_witnesses_names_the_minimum() {
        let facts = adult_facts();
        let issues = evaluate(&facts, WillType::Witnessed, &builtin::slovakia(), as_of());
        let issue = issues
            .iter()
            .find(|i| i.code == IssueCode::WitnessCountBelowMinimum)
            .expect("witness count issue");
        assert!(issue.message.contains("at least 2"));
        assert_eq!(issue.field, "witnesses");
    }

    #[test]
    fn duplicate_witnesses_do_not_count_twice() {
        let mut facts = adult_facts();
        facts.witnesses = vec![
            Witness {
                full_name: "Peter Malý".to_string(),
                email: None,
                date_of_birth: None,
            },
            Witness {
                full_name: "peter malý ".to_string(),
                email: None,
                date_of_birth: None,
            },
        ];
        let issues = evaluate(&facts, WillType::Witnessed, &builtin::slovakia(), as_of());
        assert!(issues
            .iter()
            .any(|i| i.code == IssueCode::WitnessCountBelowMinimum));
    }

    #[test]
    fn witness_who_inherits_is_flagged() {
        let mut facts = adult_facts();
        facts.beneficiaries = vec![beneficiary("Eva Nováková", "friend", 100.0)];
        facts.witnesses = vec![
            Witness {
                full_name: "Eva Nováková".to_string(),
                email: None,
                date_of_birth: None,
            },
            Witness {
                full_name: "Peter Malý".to_string(),
                email: None,
                date_of_birth: None,
            },
        ];
        let issues = evaluate(&facts, WillType::Witnessed, &builtin::slovakia(), as_of());
        assert!(issues
            .iter()
            .any(|i| i.code == IssueCode::WitnessIsBeneficiary));
    }

    #[test]
    fn notarial_will_needs_a_record() {
        let facts = adult_facts();
        let issues = evaluate(&facts, WillType::Notarial, &builtin::slovakia(), as_of());
        assert!(issues
            .iter()
            .any(|i| i.code == IssueCode::NotarizationMissing));

        // Holographic execution does not.
        let issues = evaluate(&facts, WillType::Holographic, &builtin::slovakia(), as_of());
        assert!(!issues
            .iter()
            .any(|i| i.code == IssueCode::NotarizationMissing));
    }

    #[test]
    fn forced_heirship_shortfall_uses_configured_severity() {
        let mut facts = adult_facts();
        facts.family.children = vec![testa_facts::ChildInfo {
            full_name: "Anna".to_string(),
            date_of_birth: NaiveDate::from_ymd_opt(1999, 1, 1),
        }];
        facts.beneficiaries = vec![
            beneficiary("Anna", "child", 20.0),
            beneficiary("Museum", "charity", 80.0),
        ];

        // SK treats a shortfall as a hard error.
        let issues = evaluate(&facts, WillType::Holographic, &builtin::slovakia(), as_of());
        let sk_issue = issues
            .iter()
            .find(|i| i.code == IssueCode::ForcedHeirshipShortfall)
            .expect("shortfall issue");
        assert_eq!(sk_issue.severity, testa_core::Severity::Error);

        // DE treats it as a claim, so only a warning.
        let issues = evaluate(&facts, WillType::Holographic, &builtin::germany(), as_of());
        let de_issue = issues
            .iter()
            .find(|i| i.code == IssueCode::ForcedHeirshipShortfall)
            .expect("shortfall issue");
        assert_eq!(de_issue.severity, testa_core::Severity::Warning);
    }

    #[test]
    fn remainder_to_protected_heir_satisfies_the_floor() {
        let mut facts = adult_facts();
        facts.family.children = vec![testa_facts::ChildInfo {
            full_name: "Anna".to_string(),
            date_of_birth: NaiveDate::from_ymd_opt(1999, 1, 1),
        }];
        facts.beneficiaries = vec![
            Beneficiary {
                name: "Anna".to_string(),
                relationship: "child".to_string(),
                contact: None,
                share: BeneficiaryShare::Remainder,
                conditions: None,
            },
            beneficiary("Museum", "charity", 40.0),
        ];
        let issues = evaluate(&facts, WillType::Holographic, &builtin::slovakia(), as_of());
        assert!(!issues
            .iter()
            .any(|i| i.code == IssueCode::ForcedHeirshipShortfall));
    }

    #[test]
    fn omitted_spouse_is_flagged_under_forced_heirship() {
        let mut facts = adult_facts();
        facts.family.spouse = Some(testa_facts::SpouseInfo {
            full_name: "Marta Nováková".to_string(),
            date_of_birth: None,
        });
        facts.beneficiaries = vec![beneficiary("Museum", "charity", 100.0)];
        let issues = evaluate(&facts, WillType::Holographic, &builtin::slovakia(), as_of());
        assert!(issues
            .iter()
            .any(|i| i.code == IssueCode::SpouseNotBeneficiary));
    }

    #[test]
    fn no_forced_heirship_rule_means_no_finding() {
        let mut facts = adult_facts();
        facts.family.spouse = Some(testa_facts::SpouseInfo {
            full_name: "Alex".to_string(),
            date_of_birth: None,
        });
        facts.beneficiaries = vec![beneficiary("Museum", "charity", 100.0)];
        let issues = evaluate(
            &facts,
            WillType::Witnessed,
            &builtin::united_kingdom(),
            as_of(),
        );
        assert!(!issues
            .iter()
            .any(|i| i.code == IssueCode::SpouseNotBeneficiary));
    }
}
