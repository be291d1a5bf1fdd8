//! Beneficiaries and their shares of the estate.

use serde::{Deserialize, Serialize};

use crate::contact::ContactInfo;

/// How a beneficiary's share of the estate is expressed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BeneficiaryShare {
    /// A percentage of the whole estate. Percentage-type shares across all
    /// beneficiaries are expected to sum to 100; the validation engine
    /// flags any other total as a warning.
    Percentage { value: f64 },
    /// A fixed monetary amount.
    FixedAmount { amount: f64, currency: String },
    /// Specific assets, referenced by asset id.
    SpecificAssets { asset_ids: Vec<String> },
    /// Whatever remains after all other dispositions.
    Remainder,
}

/// A person or organization inheriting under the will.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Beneficiary {
    pub name: String,
    /// Relationship to the testator (`spouse`, `child`, `friend`,
    /// `charity`, ...). Free-form because bequests reach beyond family.
    pub relationship: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact: Option<ContactInfo>,
    pub share: BeneficiaryShare,
    /// Conditions attached to the bequest, verbatim.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conditions: Option<String>,
}

impl Beneficiary {
    /// Whether this beneficiary counts as a protected heir for
    /// forced-heirship purposes.
    pub fn is_protected_heir(&self) -> bool {
        matches!(self.relationship.as_str(), "spouse" | "child")
    }

    /// The email on file, if any — the identity the role synchronizer
    /// matches against the contact registry.
    pub fn email(&self) -> Option<&str> {
        self.contact.as_ref().and_then(|c| c.email.as_deref())
    }
}
