//! Family composition: spouse and children.
//!
//! Minor status is never stored — it is derived from the child's date of
//! birth against an explicit `as_of` date, so facts snapshots do not go
//! stale as birthdays pass.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use testa_core::age_in_years;

/// Age of majority applied when classifying children as minors.
///
/// Uniform across currently supported jurisdictions; a per-jurisdiction
/// override would live in the registry's legal requirements if one is
/// ever needed.
pub const AGE_OF_MAJORITY: u32 = 18;

/// The testator's spouse or registered partner.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SpouseInfo {
    #[serde(default)]
    pub full_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<NaiveDate>,
}

/// A child of the testator.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChildInfo {
    #[serde(default)]
    pub full_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<NaiveDate>,
}

impl ChildInfo {
    /// Whether the child is a minor as of the given date.
    ///
    /// A child with no recorded date of birth is treated as not minor here;
    /// the missing date is reported as its own validation error.
    pub fn is_minor(&self, as_of: NaiveDate) -> bool {
        match self.date_of_birth {
            Some(dob) => age_in_years(dob, as_of) < AGE_OF_MAJORITY,
            None => false,
        }
    }
}

/// Spouse and children together.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FamilyInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spouse: Option<SpouseInfo>,
    #[serde(default)]
    pub children: Vec<ChildInfo>,
}

impl FamilyInfo {
    /// Whether the testator has any protected heirs at all
    /// (spouse or children) — the trigger for forced-heirship checks.
    pub fn has_protected_heirs(&self) -> bool {
        self.spouse.is_some() || !self.children.is_empty()
    }
}
