//! Registry entry combining a device handle with registration metadata.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::{DeviceHandle, DeviceId};

/// What the registry stores for each identifier.
#[derive(Debug, Clone)]
pub struct DeviceEntry {
    /// Identifier the handle reported at registration, unchanged.
    pub device_id: DeviceId,

    /// Device class captured at registration. Listings filter on this
    /// instead of calling into the device.
    pub device_type: String,

    /// The registry's share of the device.
    pub handle: DeviceHandle,

    /// When this handle was registered.
    pub registered_at: DateTime<Utc>,
}

impl DeviceEntry {
    /// Creates an entry stamped with the current time.
    #[must_use]
    pub fn new(device_id: DeviceId, device_type: String, handle: DeviceHandle) -> Self {
        Self {
            device_id,
            device_type,
            handle,
            registered_at: Utc::now(),
        }
    }

    /// Returns `true` if this entry holds exactly `handle`.
    #[must_use]
    pub fn holds(&self, handle: &DeviceHandle) -> bool {
        Arc::ptr_eq(&self.handle, handle)
    }
}

/// Lightweight view of an entry for listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeviceSummary {
    /// Device identifier.
    pub device_id: DeviceId,
    /// Device class.
    pub device_type: String,
    /// Registration timestamp.
    pub registered_at: DateTime<Utc>,
}

impl From<&DeviceEntry> for DeviceSummary {
    fn from(entry: &DeviceEntry) -> Self {
        Self {
            device_id: entry.device_id.clone(),
            device_type: entry.device_type.clone(),
            registered_at: entry.registered_at,
        }
    }
}
