//! # device-registry
//!
//! Registry of the physical devices currently known to a broker node.
//!
//! Drivers and connection adapters register a shared [`DeviceHandle`] when
//! a device comes online and unregister it when it is withdrawn. Broker
//! logic and protocol handlers resolve identifiers to handles through the
//! registry instead of holding devices directly.
//!
//! ## Architecture
//!
//! ```text
//! Drivers / Adapters ──register/unregister──┐
//!                                           ▼
//!                              DeviceRegistry (domain/)
//!                       RwLock<HashMap<DeviceId, DeviceEntry>>
//!                                           ▲
//! Broker logic / Handlers ──get/contains/len┘
//! ```
//!
//! ## Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use device_registry::domain::{DeviceId, DeviceRegistry, PhysicalDevice};
//!
//! let registry = DeviceRegistry::new();
//! let sst = Arc::new(PhysicalDevice::new("SST1", "Sst").with_signal("gateway", 0.0));
//! registry.register(sst)?;
//!
//! let id = DeviceId::new("SST1")?;
//! assert!(registry.contains(&id));
//! assert_eq!(registry.len(), 1);
//! # Ok::<(), device_registry::error::RegistryError>(())
//! ```

pub mod config;
pub mod domain;
pub mod error;

pub use config::{DuplicatePolicy, RegistryConfig};
pub use domain::{Device, DeviceHandle, DeviceId, DeviceRegistry, PhysicalDevice};
pub use error::RegistryError;
