//! # testa-registry — Jurisdiction Registry
//!
//! The knowledge base of per-jurisdiction legal requirements: who may make
//! a will, which execution forms exist, how many witnesses are needed, and
//! whether forced heirship constrains the distribution.
//!
//! ## Design
//!
//! [`JurisdictionConfig`] records are immutable after load and keyed by
//! [`JurisdictionCode`](testa_core::JurisdictionCode). The registry is a
//! pure lookup structure, safe for concurrent read access from any number
//! of callers — there is no interior mutability here at all.
//!
//! Forced-heirship enforcement is data, not policy: each jurisdiction
//! carries its own [`Severity`](testa_core::Severity) for the shortfall
//! finding instead of a hardcoded global rule.

pub mod builtin;
pub mod config;
pub mod error;
pub mod registry;

pub use config::{
    ForcedHeirshipRule, FormalRequirement, JurisdictionConfig, LegalRequirements,
    RevocationMechanism, TaxNotes, WitnessRequirement, WitnessRestriction,
};
pub use error::RegistryError;
pub use registry::{JurisdictionRegistry, JurisdictionSummary};
