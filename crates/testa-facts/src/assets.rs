//! Estate assets.

use serde::{Deserialize, Serialize};

/// Classification of an estate asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssetKind {
    RealEstate,
    BankAccount,
    Vehicle,
    BusinessInterest,
    PersonalProperty,
    DigitalAsset,
    Other,
}

/// A single asset in the estate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Asset {
    /// Caller-assigned identifier, referenced by specific-asset bequests.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub kind: AssetKind,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    /// Percentage of the asset the testator owns, when not sole owner.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ownership_percentage: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

impl Asset {
    pub fn new(kind: AssetKind, description: impl Into<String>) -> Self {
        Self {
            id: None,
            kind,
            description: description.into(),
            value: None,
            currency: None,
            ownership_percentage: None,
            location: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn asset_kind_serde_snake_case() {
        let json = serde_json::to_string(&AssetKind::RealEstate).unwrap();
        assert_eq!(json, "\"real_estate\"");
    }

    #[test]
    fn asset_optional_fields_omitted() {
        let asset = Asset::new(AssetKind::Vehicle, "Škoda Octavia");
        let json = serde_json::to_string(&asset).unwrap();
        assert!(!json.contains("ownership_percentage"));
        assert!(json.contains("vehicle"));
    }
}
