//! # testa-facts — User Facts Aggregate
//!
//! [`UserFacts`] is the mutable input aggregate the caller builds up across
//! a multi-step flow and hands to the resolver and validation engine. The
//! core never persists it; it is validated repeatedly as it grows and a
//! fresh [`UserFacts`] snapshot feeds every render.
//!
//! Everything here is plain data with serde derives. Derived predicates
//! that need a calendar date (minor detection) take an explicit `as_of`
//! argument rather than reading a clock.

pub mod assets;
pub mod beneficiaries;
pub mod contact;
pub mod executors;
pub mod family;
pub mod guardianship;
pub mod personal;
pub mod special;
pub mod witnesses;

pub use assets::{Asset, AssetKind};
pub use beneficiaries::{Beneficiary, BeneficiaryShare};
pub use contact::ContactInfo;
pub use executors::{Executor, ExecutorKind};
pub use family::{ChildInfo, FamilyInfo, SpouseInfo};
pub use guardianship::{GuardianNominee, GuardianshipAppointment};
pub use personal::{Address, MaritalStatus, PersonalInfo};
pub use special::{InstructionKind, SpecialInstruction};
pub use witnesses::{NotarizationRecord, Witness};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Everything a testator has told us, in one aggregate.
///
/// All collections default to empty so a caller can start from
/// `UserFacts::default()` and fill in sections as its flow progresses.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserFacts {
    /// Testator identity.
    pub personal: PersonalInfo,
    /// Spouse and children.
    pub family: FamilyInfo,
    /// Estate assets.
    #[serde(default)]
    pub assets: Vec<Asset>,
    /// Who inherits, and how much.
    #[serde(default)]
    pub beneficiaries: Vec<Beneficiary>,
    /// Appointed executors.
    #[serde(default)]
    pub executors: Vec<Executor>,
    /// Guardianship appointments for minor children.
    #[serde(default)]
    pub guardianship: Vec<GuardianshipAppointment>,
    /// Set when the testator explicitly declines to appoint guardians,
    /// with the instructions they recorded instead.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guardianship_declined: Option<String>,
    /// Witnesses for a witnessed execution.
    #[serde(default)]
    pub witnesses: Vec<Witness>,
    /// Notarization record for a notarial execution.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notarization: Option<NotarizationRecord>,
    /// Free-form special instructions (funeral wishes, digital assets, ...).
    #[serde(default)]
    pub special_instructions: Vec<SpecialInstruction>,
}

impl UserFacts {
    /// Children who are minors as of the given date.
    ///
    /// A child with no recorded date of birth is not counted — the missing
    /// date is surfaced separately as a validation error.
    pub fn minor_children(&self, as_of: NaiveDate) -> Vec<&ChildInfo> {
        self.family
            .children
            .iter()
            .filter(|c| c.is_minor(as_of))
            .collect()
    }

    /// Whether any child is a minor as of the given date.
    pub fn has_minor_children(&self, as_of: NaiveDate) -> bool {
        self.family.children.iter().any(|c| c.is_minor(as_of))
    }

    /// Sum of all percentage-type beneficiary shares.
    pub fn percentage_share_total(&self) -> f64 {
        self.beneficiaries
            .iter()
            .filter_map(|b| match b.share {
                BeneficiaryShare::Percentage { value } => Some(value),
                _ => None,
            })
            .sum()
    }

    /// The beneficiary designated to take the remainder of the estate,
    /// if one exists.
    pub fn residuary_beneficiary(&self) -> Option<&Beneficiary> {
        self.beneficiaries
            .iter()
            .find(|b| matches!(b.share, BeneficiaryShare::Remainder))
    }

    /// Whether guardianship for minors has been addressed at all — either
    /// an appointment exists or the testator explicitly declined.
    pub fn guardianship_addressed(&self) -> bool {
        !self.guardianship.is_empty() || self.guardianship_declined.is_some()
    }
}
