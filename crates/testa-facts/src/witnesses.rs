//! Witnesses and notarization — the execution evidence for witnessed and
//! notarial wills.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A witness to the will's execution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Witness {
    pub full_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Used to check legal capacity where the jurisdiction restricts who
    /// may witness.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<NaiveDate>,
}

/// Record of a notarial execution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotarizationRecord {
    pub notary_name: String,
    pub office_city: String,
    pub date: NaiveDate,
    /// Registration number in the notarial central registry, where the
    /// jurisdiction maintains one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub registry_number: Option<String>,
}
