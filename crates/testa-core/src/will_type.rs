//! # Will Type Taxonomy
//!
//! The formal execution method of a will. Each type carries distinct
//! procedural requirements (handwriting, witnesses, notarization) that the
//! jurisdiction registry and validation engine key off this enum.

use serde::{Deserialize, Serialize};

use crate::error::IdentifierError;

/// The formal execution method of a will.
///
/// Adding a variant is a compile error at every `match` in the workspace
/// until validation, rendering, and execution-instruction handling are
/// updated — which is exactly the point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WillType {
    /// Entirely handwritten and signed by the testator; no witnesses.
    Holographic,
    /// Signed before witnesses who attest simultaneously.
    Witnessed,
    /// Drawn up and recorded by a notary.
    Notarial,
}

impl WillType {
    /// All will types, in a stable order.
    pub fn all() -> &'static [WillType] {
        &[Self::Holographic, Self::Witnessed, Self::Notarial]
    }

    /// Parse from the wire form used in template ids and configs.
    ///
    /// # Errors
    ///
    /// Returns [`IdentifierError::UnknownWillType`] for anything other than
    /// `holographic`, `witnessed`, or `notarial`.
    pub fn parse(s: &str) -> Result<Self, IdentifierError> {
        match s {
            "holographic" => Ok(Self::Holographic),
            "witnessed" => Ok(Self::Witnessed),
            "notarial" => Ok(Self::Notarial),
            other => Err(IdentifierError::UnknownWillType(other.to_string())),
        }
    }

    /// The wire form used in template ids and configs.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Holographic => "holographic",
            Self::Witnessed => "witnessed",
            Self::Notarial => "notarial",
        }
    }
}

impl std::fmt::Display for WillType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_roundtrip() {
        for &wt in WillType::all() {
            assert_eq!(WillType::parse(wt.as_str()).unwrap(), wt);
        }
    }

    #[test]
    fn parse_rejects_unknown() {
        assert!(WillType::parse("oral").is_err());
        assert!(WillType::parse("Holographic").is_err());
    }

    #[test]
    fn serde_uses_snake_case() {
        let json = serde_json::to_string(&WillType::Holographic).unwrap();
        assert_eq!(json, "\"holographic\"");
        let back: WillType = serde_json::from_str("\"witnessed\"").unwrap();
        assert_eq!(back, WillType::Witnessed);
    }

    #[test]
    fn all_lists_three_types() {
        assert_eq!(WillType::all().len(), 3);
    }
}
