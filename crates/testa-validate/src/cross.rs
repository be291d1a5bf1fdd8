//! # Cross-Field Consistency Rules
//!
//! Rules that relate several parts of the facts to each other: percentage
//! totals, guardianship coverage for minors, executor structure, contact
//! well-formedness, and asset sanity.

use std::sync::OnceLock;

use chrono::NaiveDate;
use regex::Regex;

use testa_core::Severity;
use testa_facts::{BeneficiaryShare, ExecutorKind, UserFacts};
use testa_registry::JurisdictionConfig;

use crate::issue::{IssueCode, ValidationIssue};

/// Tolerance for floating-point share arithmetic.
const SHARE_EPSILON: f64 = 0.01;

/// Minimal email shape check; full address validation is not the goal.
fn email_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("BUG: email regex rejected"))
}

fn is_valid_email(email: &str) -> bool {
    email_regex().is_match(email)
}

/// Evaluate the cross-field rule family.
pub fn evaluate(
    facts: &UserFacts,
    config: &JurisdictionConfig,
    as_of: NaiveDate,
) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();
    check_shares(facts, &mut issues);
    check_children(facts, &mut issues);
    check_guardianship(facts, config, as_of, &mut issues);
    check_executors(facts, &mut issues);
    check_beneficiary_contacts(facts, &mut issues);
    check_assets(facts, &mut issues);
    issues
}

fn check_shares(facts: &UserFacts, issues: &mut Vec<ValidationIssue>) {
    let mut any_percentage = false;
    for (index, beneficiary) in facts.beneficiaries.iter().enumerate() {
        if let BeneficiaryShare::Percentage { value } = beneficiary.share {
            any_percentage = true;
            if value <= 0.0 || value > 100.0 {
                issues.push(ValidationIssue::error(
                    IssueCode::InvalidPercentage,
                    format!("beneficiaries[{index}].share"),
                    format!(
                        "Share of {} must be between 1 and 100 percent",
                        beneficiary.name
                    ),
                ));
            }
        }
    }
    if !any_percentage {
        return;
    }

    let total = facts.percentage_share_total();
    if total > 100.0 + SHARE_EPSILON {
        issues.push(
            ValidationIssue::warning(
                IssueCode::PercentageOverflow,
                "beneficiaries",
                format!("Total percentage ({total}%) exceeds 100%"),
            )
            .with_suggested_fix("Reduce beneficiary shares so they sum to 100%"),
        );
    } else if total < 100.0 - SHARE_EPSILON {
        issues.push(
            ValidationIssue::warning(
                IssueCode::PercentageUnderflow,
                "beneficiaries",
                format!(
                    "Total percentage ({total}%) is less than 100%; the remainder falls to \
                     the residuary estate"
                ),
            )
            .with_suggested_fix("Account for the full estate or name a residuary beneficiary"),
        );
    }
}

fn check_children(facts: &UserFacts, issues: &mut Vec<ValidationIssue>) {
    for (index, child) in facts.family.children.iter().enumerate() {
        if child.full_name.trim().is_empty() {
            issues.push(ValidationIssue::error(
                IssueCode::RequiredFieldMissing,
                format!("family.children[{index}].full_name"),
                format!("Child {} name is required", index + 1),
            ));
        }
        if child.date_of_birth.is_none() {
            issues.push(ValidationIssue::error(
                IssueCode::DateOfBirthMissing,
                format!("family.children[{index}].date_of_birth"),
                format!("Child {} date of birth is required", index + 1),
            ));
        }
    }
}

fn check_guardianship(
    facts: &UserFacts,
    config: &JurisdictionConfig,
    as_of: NaiveDate,
    issues: &mut Vec<ValidationIssue>,
) {
    if !facts.has_minor_children(as_of) {
        return;
    }

    if !facts.guardianship_addressed() {
        // Severity is the jurisdiction's call: mandatory appointment
        // regimes raise an error, advisory regimes a warning.
        issues.push(
            ValidationIssue::new(
                config.legal.guardianship_for_minors,
                IssueCode::MinorChildrenNoGuardian,
                "guardianship",
                "Guardians must be appointed for minor children",
            )
            .with_legal_reference("Guardian appointment for minors")
            .with_suggested_fix("Appoint a guardian or record an explicit decline with \
                                 instructions"),
        );
        return;
    }

    for (index, appointment) in facts.guardianship.iter().enumerate() {
        if appointment.primary.name.trim().is_empty() {
            issues.push(ValidationIssue::error(
                IssueCode::RequiredFieldMissing,
                format!("guardianship[{index}].primary.name"),
                format!("Primary guardian name is required for appointment {}", index + 1),
            ));
        }
        if appointment.alternate.is_none() {
            issues.push(ValidationIssue::warning(
                IssueCode::NoAlternateGuardian,
                format!("guardianship[{index}].alternate"),
                format!(
                    "Consider appointing an alternate guardian for {}",
                    appointment.child_name
                ),
            ));
        }
        for (nominee, role) in [
            (Some(&appointment.primary), "primary"),
            (appointment.alternate.as_ref(), "alternate"),
        ] {
            let Some(nominee) = nominee else { continue };
            if let Some(email) = nominee.contact.email.as_deref() {
                if !is_valid_email(email) {
                    issues.push(ValidationIssue::error(
                        IssueCode::InvalidEmail,
                        format!("guardianship[{index}].{role}.contact.email"),
                        format!("Guardian {} email format is invalid", nominee.name),
                    ));
                }
            }
        }
    }
}

fn check_executors(facts: &UserFacts, issues: &mut Vec<ValidationIssue>) {
    if facts.executors.is_empty() {
        issues.push(
            ValidationIssue::warning(
                IssueCode::NoExecutor,
                "executors",
                "Consider appointing an executor to manage your estate",
            )
            .with_suggested_fix("Appoint a trusted person or professional as executor"),
        );
        return;
    }

    let primary_count = facts
        .executors
        .iter()
        .filter(|e| e.kind == ExecutorKind::Primary)
        .count();
    if primary_count == 0 {
        issues.push(ValidationIssue::error(
            IssueCode::NoPrimaryExecutor,
            "executors",
            "At least one primary executor must be appointed",
        ));
    } else if primary_count > 1 {
        issues.push(ValidationIssue::warning(
            IssueCode::MultiplePrimaryExecutors,
            "executors",
            "Multiple primary executors may complicate estate administration",
        ));
    }

    for (index, executor) in facts.executors.iter().enumerate() {
        if executor.name.trim().is_empty() {
            issues.push(ValidationIssue::error(
                IssueCode::RequiredFieldMissing,
                format!("executors[{index}].name"),
                format!("Executor {} name is required", index + 1),
            ));
        }
        if !executor.contact.is_reachable() {
            issues.push(ValidationIssue::error(
                IssueCode::MissingContact,
                format!("executors[{index}].contact"),
                format!(
                    "Executor {} must have email or phone contact information",
                    index + 1
                ),
            ));
        }
        if let Some(email) = executor.contact.email.as_deref() {
            if !is_valid_email(email) {
                issues.push(ValidationIssue::error(
                    IssueCode::InvalidEmail,
                    format!("executors[{index}].contact.email"),
                    format!("Executor {} email format is invalid", index + 1),
                ));
            }
        }
    }
}

fn check_beneficiary_contacts(facts: &UserFacts, issues: &mut Vec<ValidationIssue>) {
    for (index, beneficiary) in facts.beneficiaries.iter().enumerate() {
        if beneficiary.name.trim().is_empty() {
            issues.push(ValidationIssue::error(
                IssueCode::RequiredFieldMissing,
                format!("beneficiaries[{index}].name"),
                format!("Beneficiary {} name is required", index + 1),
            ));
        }
        if beneficiary.relationship.trim().is_empty() {
            issues.push(ValidationIssue::error(
                IssueCode::RequiredFieldMissing,
                format!("beneficiaries[{index}].relationship"),
                format!("Beneficiary {} relationship is required", index + 1),
            ));
        }
        if let Some(email) = beneficiary.email() {
            if !is_valid_email(email) {
                issues.push(ValidationIssue::error(
                    IssueCode::InvalidEmail,
                    format!("beneficiaries[{index}].contact.email"),
                    format!("Beneficiary {} email format is invalid", index + 1),
                ));
            }
        }
    }
}

fn check_assets(facts: &UserFacts, issues: &mut Vec<ValidationIssue>) {
    if facts.assets.is_empty() {
        issues.push(ValidationIssue::new(
            Severity::Info,
            IssueCode::NoAssets,
            "assets",
            "No assets specified; consider adding asset information for a complete estate \
             plan",
        ));
        return;
    }
    for (index, asset) in facts.assets.iter().enumerate() {
        if asset.description.trim().is_empty() {
            issues.push(ValidationIssue::error(
                IssueCode::RequiredFieldMissing,
                format!("assets[{index}].description"),
                format!("Asset {} description is required", index + 1),
            ));
        }
        if let Some(value) = asset.value {
            if value < 0.0 || !value.is_finite() {
                issues.push(ValidationIssue::error(
                    IssueCode::InvalidValue,
                    format!("assets[{index}].value"),
                    format!("Asset {} value must be a positive number", index + 1),
                ));
            }
        }
        if let Some(pct) = asset.ownership_percentage {
            if pct <= 0.0 || pct > 100.0 {
                issues.push(ValidationIssue::error(
                    IssueCode::InvalidPercentage,
                    format!("assets[{index}].ownership_percentage"),
                    format!(
                        "Asset {} ownership percentage must be between 1 and 100",
                        index + 1
                    ),
                ));
            }
        }
    }
}
