//! Concurrent identifier → device handle storage.
//!
//! [`DeviceRegistry`] stores every known device in a `HashMap` behind a
//! single [`parking_lot::RwLock`]: lookups, existence checks and counts
//! run concurrently, while registrations and removals are serialized.
//! No reference into the map ever leaves the lock; callers receive cloned
//! [`DeviceHandle`]s or owned snapshots.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

use super::device_entry::{DeviceEntry, DeviceSummary};
use super::{DeviceHandle, DeviceId};
use crate::config::{DuplicatePolicy, RegistryConfig};
use crate::error::RegistryError;

/// Source of truth for which devices a broker node currently knows.
///
/// # Concurrency
///
/// - Any number of threads may read at once.
/// - Mutations take the write lock and exclude readers.
/// - The device's identifier and type are read once, before the lock is
///   taken, and displaced handles are released after it is dropped, so
///   device code never runs under the registry lock.
#[derive(Debug)]
pub struct DeviceRegistry {
    devices: RwLock<HashMap<DeviceId, DeviceEntry>>,
    duplicate_policy: DuplicatePolicy,
}

impl DeviceRegistry {
    /// Creates an empty registry with default settings (last write wins).
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(&RegistryConfig::default())
    }

    /// Creates an empty registry from a loaded configuration.
    #[must_use]
    pub fn with_config(config: &RegistryConfig) -> Self {
        Self {
            devices: RwLock::new(HashMap::with_capacity(config.initial_capacity)),
            duplicate_policy: config.duplicate_policy,
        }
    }

    /// Returns the policy applied to duplicate identifiers.
    #[must_use]
    pub const fn duplicate_policy(&self) -> DuplicatePolicy {
        self.duplicate_policy
    }

    /// Registers a device under the identifier it reports.
    ///
    /// Under [`DuplicatePolicy::Replace`] an existing entry for the same
    /// identifier is overwritten and its handle returned. Re-registering
    /// the very same handle refreshes the entry under either policy.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::InvalidHandle`] if the handle reports an
    /// empty identifier, and [`RegistryError::DuplicateDevice`] if another
    /// handle already holds the identifier under
    /// [`DuplicatePolicy::Reject`]. The map is unchanged in both cases.
    pub fn register(&self, handle: DeviceHandle) -> Result<Option<DeviceHandle>, RegistryError> {
        let raw_id = handle.id();
        let device_id = DeviceId::new(raw_id).inspect_err(|err| {
            tracing::warn!(raw_id, %err, "rejected device registration");
        })?;
        let device_type = handle.device_type().to_string();

        let displaced = {
            let mut map = self.devices.write();
            if self.duplicate_policy == DuplicatePolicy::Reject
                && map
                    .get(&device_id)
                    .is_some_and(|existing| !existing.holds(&handle))
            {
                drop(map);
                tracing::warn!(%device_id, "duplicate device registration rejected");
                return Err(RegistryError::DuplicateDevice(device_id));
            }
            let entry =
                DeviceEntry::new(device_id.clone(), device_type.clone(), Arc::clone(&handle));
            map.insert(device_id.clone(), entry)
                .map(|previous| previous.handle)
        };

        match &displaced {
            Some(previous) if !Arc::ptr_eq(previous, &handle) => {
                tracing::warn!(%device_id, %device_type, "device handle replaced");
            }
            _ => tracing::debug!(%device_id, %device_type, "device registered"),
        }
        Ok(displaced)
    }

    /// Removes the entry for `device_id`, returning the registry's handle.
    ///
    /// Removing an absent identifier is a no-op that returns `None`.
    pub fn unregister(&self, device_id: &DeviceId) -> Option<DeviceHandle> {
        let removed = self.devices.write().remove(device_id).map(|entry| entry.handle);
        if removed.is_some() {
            tracing::debug!(%device_id, "device unregistered");
        } else {
            tracing::trace!(%device_id, "unregister of unknown device ignored");
        }
        removed
    }

    /// Returns a share of the device registered under `device_id`.
    #[must_use]
    pub fn get(&self, device_id: &DeviceId) -> Option<DeviceHandle> {
        self.devices
            .read()
            .get(device_id)
            .map(|entry| Arc::clone(&entry.handle))
    }

    /// Returns `true` if a device is registered under `device_id`.
    #[must_use]
    pub fn contains(&self, device_id: &DeviceId) -> bool {
        self.devices.read().contains_key(device_id)
    }

    /// Returns the number of registered devices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.devices.read().len()
    }

    /// Returns `true` if no devices are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.devices.read().is_empty()
    }

    /// Sorted snapshot of every registered identifier.
    #[must_use]
    pub fn ids(&self) -> Vec<DeviceId> {
        let mut ids: Vec<DeviceId> = self.devices.read().keys().cloned().collect();
        ids.sort();
        ids
    }

    /// Handles of every device of the given type, ordered by identifier.
    #[must_use]
    pub fn devices_of_type(&self, device_type: &str) -> Vec<DeviceHandle> {
        let mut matches: Vec<(DeviceId, DeviceHandle)> = self
            .devices
            .read()
            .values()
            .filter(|entry| entry.device_type == device_type)
            .map(|entry| (entry.device_id.clone(), Arc::clone(&entry.handle)))
            .collect();
        matches.sort_by(|a, b| a.0.cmp(&b.0));
        matches.into_iter().map(|(_, handle)| handle).collect()
    }

    /// Summaries of all devices, optionally filtered by device type,
    /// ordered by identifier.
    #[must_use]
    pub fn list(&self, device_type_filter: Option<&str>) -> Vec<DeviceSummary> {
        let map = self.devices.read();
        let mut summaries = Vec::with_capacity(map.len());
        for entry in map.values() {
            if let Some(filter) = device_type_filter
                && entry.device_type != filter
            {
                continue;
            }
            summaries.push(DeviceSummary::from(entry));
        }
        drop(map);
        summaries.sort_by(|a, b| a.device_id.cmp(&b.device_id));
        summaries
    }

    /// Removes every entry and returns how many were removed.
    pub fn clear(&self) -> usize {
        let drained: Vec<DeviceEntry> = {
            let mut map = self.devices.write();
            map.drain().map(|(_, entry)| entry).collect()
        };
        let count = drained.len();
        tracing::debug!(count, "device registry cleared");
        count
    }
}

impl Default for DeviceRegistry {
    fn default() -> Self {
        Self::new()
    }
}
