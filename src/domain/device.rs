//! Device abstraction shared between the registry and its collaborators.
//!
//! Drivers and connection adapters hand the registry a [`DeviceHandle`], a
//! reference-counted [`Device`]. The registry keeps one share per entry;
//! whoever drops the last share tears the device down.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use parking_lot::RwLock;

/// Shared handle to a device.
pub type DeviceHandle = Arc<dyn Device>;

/// A device that can be tracked by [`super::DeviceRegistry`].
///
/// Implementations must not call back into the registry from [`Device::id`]
/// or [`Device::device_type`].
pub trait Device: Send + Sync + fmt::Debug {
    /// Identifier the device reports for itself.
    fn id(&self) -> &str;

    /// Device class, e.g. `"Sst"` or `"Load"`.
    fn device_type(&self) -> &str;
}

/// Stock [`Device`] backed by a table of named floating-point signals.
///
/// Signal access is guarded by the device's own lock.
#[derive(Debug)]
pub struct PhysicalDevice {
    id: String,
    device_type: String,
    signals: RwLock<HashMap<String, f64>>,
}

impl PhysicalDevice {
    /// Creates a device with no signals.
    #[must_use]
    pub fn new(id: impl Into<String>, device_type: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            device_type: device_type.into(),
            signals: RwLock::new(HashMap::new()),
        }
    }

    /// Adds a signal with its initial value.
    #[must_use]
    pub fn with_signal(mut self, name: impl Into<String>, value: f64) -> Self {
        self.signals.get_mut().insert(name.into(), value);
        self
    }

    /// Current value of a signal, if the device has it.
    #[must_use]
    pub fn signal(&self, name: &str) -> Option<f64> {
        self.signals.read().get(name).copied()
    }

    /// Updates an existing signal and returns its previous value.
    ///
    /// Unknown signals are left untouched and `None` is returned.
    pub fn set_signal(&self, name: &str, value: f64) -> Option<f64> {
        let mut signals = self.signals.write();
        signals
            .get_mut(name)
            .map(|slot| std::mem::replace(slot, value))
    }

    /// Names of all signals, sorted.
    #[must_use]
    pub fn signal_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.signals.read().keys().cloned().collect();
        names.sort();
        names
    }
}

impl Device for PhysicalDevice {
    fn id(&self) -> &str {
        &self.id
    }

    fn device_type(&self) -> &str {
        &self.device_type
    }
}
