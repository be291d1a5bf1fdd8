//! Testator identity.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A postal address.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub street: String,
    pub city: String,
    pub postal_code: String,
    pub country: String,
}

impl Address {
    /// Single-line rendering used in document bodies.
    pub fn formatted(&self) -> String {
        format!(
            "{}, {} {}, {}",
            self.street, self.postal_code, self.city, self.country
        )
    }

    /// An address is usable when street, city and country are present.
    /// Postal code conventions vary too much to require one.
    pub fn is_complete(&self) -> bool {
        !self.street.trim().is_empty()
            && !self.city.trim().is_empty()
            && !self.country.trim().is_empty()
    }
}

/// Marital status of the testator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaritalStatus {
    Single,
    Married,
    RegisteredPartnership,
    Divorced,
    Widowed,
}

/// Identity of the person making the will.
///
/// Everything is optional at the type level; what is actually required is
/// the validation engine's call, driven by the template's declared
/// variables and the jurisdiction's legal requirements.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PersonalInfo {
    #[serde(default)]
    pub full_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub place_of_birth: Option<String>,
    /// National identifier where the jurisdiction uses one
    /// (e.g. rodné číslo in SK/CZ).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub personal_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub citizenship: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub marital_status: Option<MaritalStatus>,
    /// City where the will is declared and signed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub declaration_city: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn address_formatting() {
        let addr = Address {
            street: "Hlavná 12".to_string(),
            city: "Bratislava".to_string(),
            postal_code: "811 01".to_string(),
            country: "Slovakia".to_string(),
        };
        assert_eq!(addr.formatted(), "Hlavná 12, 811 01 Bratislava, Slovakia");
        assert!(addr.is_complete());
    }

    #[test]
    fn address_completeness_does_not_require_postal_code() {
        let addr = Address {
            street: "Main St 1".to_string(),
            city: "London".to_string(),
            postal_code: String::new(),
            country: "United Kingdom".to_string(),
        };
        assert!(addr.is_complete());
    }

    #[test]
    fn blank_street_is_incomplete() {
        let addr = Address {
            street: "   ".to_string(),
            city: "Praha".to_string(),
            postal_code: "110 00".to_string(),
            country: "Czech Republic".to_string(),
        };
        assert!(!addr.is_complete());
    }
}
