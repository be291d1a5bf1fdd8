//! Contact details attached to people named in a will.

use serde::{Deserialize, Serialize};

/// How to reach a person named in the will.
///
/// Both fields are optional: the role synchronizer skips people without an
/// email rather than fabricating contact details, and validation reports
/// executors with no reachable contact at all.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

impl ContactInfo {
    /// Whether any way of contacting the person is recorded.
    pub fn is_reachable(&self) -> bool {
        self.email.is_some() || self.phone.is_some()
    }
}
