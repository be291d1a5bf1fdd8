//! # Issue Severity
//!
//! Shared severity scale for validation findings and for the
//! per-jurisdiction enforcement knobs in the registry (a jurisdiction
//! configures whether a forced-heirship shortfall is an error or only
//! advisory).

use serde::{Deserialize, Serialize};

/// Severity of a validation finding.
///
/// Only [`Severity::Error`] blocks finalization; warnings and infos are
/// advisory. The ordering is by gravity — `Error > Warning > Info` — so
/// the worst finding in a batch is simply `max()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// Advisory notice; no action strictly required.
    Info,
    /// Legally risky or incomplete, but does not block finalization.
    Warning,
    /// Blocks treating the document as final.
    Error,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Info => write!(f, "info"),
            Self::Warning => write!(f, "warning"),
            Self::Error => write!(f, "error"),
        }
    }
}
