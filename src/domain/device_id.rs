//! Type-safe device identifier.
//!
//! [`DeviceId`] is a newtype wrapper around the textual name a device
//! reports for itself, so identifiers cannot be confused with signal names
//! or device types.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::RegistryError;

/// Unique name of a device within one registry.
///
/// Holds the identifier exactly as the device reports it; never empty or
/// whitespace-only. Used as the map key in [`super::DeviceRegistry`].
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DeviceId(String);

impl DeviceId {
    /// Creates a `DeviceId` from the raw identifier, unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::InvalidHandle`] if the identifier is empty
    /// or whitespace-only.
    pub fn new(raw: impl AsRef<str>) -> Result<Self, RegistryError> {
        let raw = raw.as_ref();
        if raw.trim().is_empty() {
            return Err(RegistryError::InvalidHandle(
                "device identifier is empty".to_string(),
            ));
        }
        Ok(Self(raw.to_string()))
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DeviceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for DeviceId {
    type Error = RegistryError;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        Self::new(raw)
    }
}

impl TryFrom<&str> for DeviceId {
    type Error = RegistryError;

    fn try_from(raw: &str) -> Result<Self, Self::Error> {
        Self::new(raw)
    }
}

impl From<DeviceId> for String {
    fn from(id: DeviceId) -> Self {
        id.0
    }
}

impl AsRef<str> for DeviceId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
