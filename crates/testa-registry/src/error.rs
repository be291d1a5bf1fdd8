//! Registry error types.

use testa_core::JurisdictionCode;
use thiserror::Error;

/// Errors raised by registry lookups and construction.
#[derive(Error, Debug)]
pub enum RegistryError {
    /// The jurisdiction code is not in the registry.
    #[error("unsupported jurisdiction: {code}")]
    UnsupportedJurisdiction {
        /// The code that was looked up.
        code: JurisdictionCode,
    },

    /// Two configurations claim the same jurisdiction code.
    #[error("duplicate jurisdiction config: {code}")]
    DuplicateJurisdiction {
        /// The code registered twice.
        code: JurisdictionCode,
    },

    /// A configuration is internally inconsistent.
    #[error("invalid jurisdiction config for {code}: {reason}")]
    InvalidConfig {
        /// The offending jurisdiction.
        code: JurisdictionCode,
        /// What is wrong with it.
        reason: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_carries_code() {
        let err = RegistryError::UnsupportedJurisdiction {
            code: JurisdictionCode::new("XX").unwrap(),
        };
        assert!(format!("{err}").contains("XX"));
    }
}
