//! # Identifier Newtypes
//!
//! Newtypes for the addressing primitives of the Testament Stack — a
//! jurisdiction identifies the legal regime a will is drafted under, a
//! language selects the document rendering locale, and user/contact ids
//! address records in the external collaborators.
//!
//! ## Validation
//!
//! [`JurisdictionCode`] and [`LanguageCode`] are validated to their ISO
//! two-letter shapes at construction time. [`ContactId`] is UUID-based and
//! always valid by construction.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::IdentifierError;

/// An ISO 3166-1 alpha-2 jurisdiction code (e.g. `SK`, `CZ`, `DE`).
///
/// # Validation
///
/// Must be exactly two ASCII uppercase letters. Sub-national regimes are a
/// registry concern (regional variation flags), not an addressing concern.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct JurisdictionCode(String);

impl JurisdictionCode {
    /// Create a jurisdiction code, validating the ISO alpha-2 shape.
    ///
    /// # Errors
    ///
    /// Returns [`IdentifierError::InvalidJurisdictionCode`] if the input is
    /// not two ASCII uppercase letters.
    pub fn new(value: impl Into<String>) -> Result<Self, IdentifierError> {
        let s = value.into();
        if s.len() == 2 && s.chars().all(|c| c.is_ascii_uppercase()) {
            Ok(Self(s))
        } else {
            Err(IdentifierError::InvalidJurisdictionCode(s))
        }
    }

    /// Access the code string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for JurisdictionCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for JurisdictionCode {
    type Err = IdentifierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

/// An ISO 639-1 language code (e.g. `sk`, `cs`, `en`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct LanguageCode(String);

impl LanguageCode {
    /// Create a language code, validating the ISO 639-1 shape.
    ///
    /// # Errors
    ///
    /// Returns [`IdentifierError::InvalidLanguageCode`] if the input is not
    /// two ASCII lowercase letters.
    pub fn new(value: impl Into<String>) -> Result<Self, IdentifierError> {
        let s = value.into();
        if s.len() == 2 && s.chars().all(|c| c.is_ascii_lowercase()) {
            Ok(Self(s))
        } else {
            Err(IdentifierError::InvalidLanguageCode(s))
        }
    }

    /// The English language code, the store-wide rendering fallback.
    pub fn english() -> Self {
        Self("en".to_string())
    }

    /// Access the code string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for LanguageCode {
    type Err = IdentifierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

/// An opaque identifier for the person assembling a will.
///
/// Owned by the caller's account system; the core only threads it through
/// to the contact registry collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(String);

impl UserId {
    /// Create a user identifier, validating non-emptiness.
    ///
    /// # Errors
    ///
    /// Returns [`IdentifierError::InvalidUserId`] if the string is empty or
    /// whitespace-only.
    pub fn new(value: impl Into<String>) -> Result<Self, IdentifierError> {
        let s = value.into();
        if s.trim().is_empty() {
            return Err(IdentifierError::InvalidUserId);
        }
        Ok(Self(s))
    }

    /// Access the identifier string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A unique identifier for a trusted-contact record in the external registry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContactId(Uuid);

impl ContactId {
    /// Create a new random contact identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create a contact identifier from an existing UUID.
    pub fn from_uuid(id: Uuid) -> Self {
        Self(id)
    }

    /// Access the underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for ContactId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ContactId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn jurisdiction_code_valid() {
        let code = JurisdictionCode::new("SK").unwrap();
        assert_eq!(code.as_str(), "SK");
    }

    #[test]
    fn jurisdiction_code_rejects_bad_shapes() {
        assert!(JurisdictionCode::new("").is_err());
        assert!(JurisdictionCode::new("sk").is_err());
        assert!(JurisdictionCode::new("SVK").is_err());
        assert!(JurisdictionCode::new("S1").is_err());
    }

    #[test]
    fn language_code_valid() {
        let lang = LanguageCode::new("cs").unwrap();
        assert_eq!(lang.as_str(), "cs");
    }

    #[test]
    fn language_code_rejects_bad_shapes() {
        assert!(LanguageCode::new("CS").is_err());
        assert!(LanguageCode::new("ces").is_err());
        assert!(LanguageCode::new("").is_err());
    }

    #[test]
    fn language_code_english_fallback() {
        assert_eq!(LanguageCode::english().as_str(), "en");
    }

    #[test]
    fn user_id_rejects_empty() {
        assert!(UserId::new("").is_err());
        assert!(UserId::new("   ").is_err());
        assert!(UserId::new("user-1").is_ok());
    }

    #[test]
    fn contact_id_unique() {
        let a = ContactId::new();
        let b = ContactId::new();
        assert_ne!(a, b);
    }

    #[test]
    fn contact_id_from_uuid_roundtrip() {
        let uuid = Uuid::new_v4();
        let cid = ContactId::from_uuid(uuid);
        assert_eq!(*cid.as_uuid(), uuid);
    }

    #[test]
    fn jurisdiction_code_from_str() {
        let code: JurisdictionCode = "CZ".parse().unwrap();
        assert_eq!(code.as_str(), "CZ");
    }

    #[test]
    fn serde_roundtrip() {
        let code = JurisdictionCode::new("DE").unwrap();
        let json = serde_json::to_string(&code).unwrap();
        assert_eq!(json, "\"DE\"");
        let back: JurisdictionCode = serde_json::from_str(&json).unwrap();
        assert_eq!(back, code);
    }
}
