//! # Trusted Contact Records
//!
//! The external registry's view of a person: identity, capability flags,
//! and emergency-contact ordering. The core reads these records and
//! requests creates/updates; the registry owns them.

use serde::{Deserialize, Serialize};

use testa_core::ContactId;

/// Relationship of a contact to the account owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Relationship {
    Spouse,
    Child,
    Parent,
    Sibling,
    Friend,
    Lawyer,
    FinancialAdvisor,
    Guardian,
    Other,
}

// Deserialization goes through the loose parser so registry records with
// relationship values outside our vocabulary land on `Other` instead of
// failing the whole listing.
impl<'de> Deserialize<'de> for Relationship {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Ok(Self::parse(&value))
    }
}

impl Relationship {
    /// Loose parse from the free-form relationship strings used in facts.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "spouse" | "husband" | "wife" => Self::Spouse,
            "child" | "son" | "daughter" => Self::Child,
            "parent" | "mother" | "father" => Self::Parent,
            "sibling" | "brother" | "sister" => Self::Sibling,
            "friend" => Self::Friend,
            "lawyer" | "attorney" => Self::Lawyer,
            "financial_advisor" => Self::FinancialAdvisor,
            "guardian" => Self::Guardian,
            _ => Self::Other,
        }
    }

    /// Family relationships favored for guardian suggestions.
    pub fn is_close_family(self) -> bool {
        matches!(self, Self::Spouse | Self::Sibling | Self::Parent)
    }
}

/// A record in the external trusted-contact registry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrustedContact {
    pub id: ContactId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub relationship: Relationship,
    /// May initiate the emergency-access protocol.
    #[serde(default)]
    pub can_trigger_emergency: bool,
    #[serde(default)]
    pub can_access_financial_docs: bool,
    #[serde(default)]
    pub can_access_health_docs: bool,
    /// Appointed executor of the account owner's will.
    #[serde(default)]
    pub is_will_executor: bool,
    /// Appointed guardian of the owner's minor children.
    #[serde(default)]
    pub is_child_guardian: bool,
    /// Position in the emergency contact sequence; lower fires first.
    pub emergency_priority: u32,
    #[serde(default = "default_active")]
    pub is_active: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

fn default_active() -> bool {
    true
}

/// Request to create a new trusted contact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateContactRequest {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub relationship: Relationship,
    pub can_trigger_emergency: bool,
    pub can_access_financial_docs: bool,
    pub can_access_health_docs: bool,
    pub is_will_executor: bool,
    pub is_child_guardian: bool,
    pub emergency_priority: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Sparse update of a trusted contact. Only set fields change; the
/// registry leaves everything else untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub can_trigger_emergency: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub can_access_financial_docs: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub can_access_health_docs: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_will_executor: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_child_guardian: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emergency_priority: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl ContactPatch {
    /// Apply the patch to a record, returning the updated record.
    pub fn apply(&self, mut contact: TrustedContact) -> TrustedContact {
        if let Some(v) = self.can_trigger_emergency {
            contact.can_trigger_emergency = v;
        }
        if let Some(v) = self.can_access_financial_docs {
            contact.can_access_financial_docs = v;
        }
        if let Some(v) = self.can_access_health_docs {
            contact.can_access_health_docs = v;
        }
        if let Some(v) = self.is_will_executor {
            contact.is_will_executor = v;
        }
        if let Some(v) = self.is_child_guardian {
            contact.is_child_guardian = v;
        }
        if let Some(v) = self.emergency_priority {
            contact.emergency_priority = v;
        }
        if let Some(v) = &self.notes {
            contact.notes = Some(v.clone());
        }
        contact
    }
}
