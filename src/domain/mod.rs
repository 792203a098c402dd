//! Domain layer: device identity, device handles, and the registry.
//!
//! This module contains the device model shared with drivers and adapters
//! ([`Device`], [`DeviceHandle`], [`PhysicalDevice`]), the validated
//! [`DeviceId`] key, and the concurrent [`DeviceRegistry`].

pub mod device;
pub mod device_entry;
pub mod device_id;
pub mod device_registry;

pub use device::{Device, DeviceHandle, PhysicalDevice};
pub use device_entry::{DeviceEntry, DeviceSummary};
pub use device_id::DeviceId;
pub use device_registry::DeviceRegistry;
