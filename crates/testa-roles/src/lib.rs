//! # testa-roles — Role Synchronizer
//!
//! Reconciles the people named in a will — executors, guardians of
//! minors, beneficiaries with contact data — against an external
//! trusted-contact registry, and suggests suitable contacts for unfilled
//! roles.
//!
//! ## Collaborator, not singleton
//!
//! The registry is an injected [`ContactRegistry`] trait object with
//! `list`/`create`/`update`, so the synchronizer is testable against the
//! bundled [`InMemoryContactRegistry`] and deployable against any real
//! backend.
//!
//! ## Failure isolation
//!
//! Registry calls fan out per contact with a per-call timeout. A failure
//! or timeout for one contact never aborts the others; failures are
//! collected into the [`ReconciliationReport`], not raised.

pub mod contact;
pub mod error;
pub mod memory;
pub mod reconcile;
pub mod registry;
pub mod suggest;

pub use contact::{ContactPatch, CreateContactRequest, Relationship, TrustedContact};
pub use error::ContactRegistryError;
pub use memory::InMemoryContactRegistry;
pub use reconcile::{ContactRef, ReconcileFailure, ReconciliationReport, RoleSynchronizer};
pub use registry::ContactRegistry;
pub use suggest::RoleSuggestions;
