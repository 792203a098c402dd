//! Registry error types with stable numeric codes.
//!
//! [`RegistryError`] covers the only ways a registry call can be refused.
//! An absent identifier is never an error: lookups return `Option` and
//! existence checks return `bool`.

use crate::domain::DeviceId;

/// Reasons a registration is refused.
///
/// # Error Code Ranges
///
/// | Range     | Category   |
/// |-----------|------------|
/// | 1000–1999 | Validation |
/// | 2000–2999 | Conflict   |
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    /// The handle did not report a usable identifier.
    #[error("invalid device handle: {0}")]
    InvalidHandle(String),

    /// A different device already holds this identifier and the registry
    /// is configured to reject duplicates.
    #[error("device already registered: {0}")]
    DuplicateDevice(DeviceId),
}

impl RegistryError {
    /// Returns the numeric error code for this variant.
    #[must_use]
    pub const fn error_code(&self) -> u32 {
        match self {
            Self::InvalidHandle(_) => 1001,
            Self::DuplicateDevice(_) => 2001,
        }
    }
}
