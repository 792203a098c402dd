//! End-to-end behaviour of the registry as seen by drivers and broker logic.

#![allow(clippy::panic)]

use std::sync::Arc;

use device_registry::{
    DeviceHandle, DeviceId, DeviceRegistry, DuplicatePolicy, PhysicalDevice, RegistryConfig,
    RegistryError,
};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new("device_registry=trace"))
        .with_test_writer()
        .try_init();
}

fn device(id: &str) -> DeviceHandle {
    Arc::new(PhysicalDevice::new(id, "Load"))
}

fn id(raw: &str) -> DeviceId {
    let Ok(id) = DeviceId::new(raw) else {
        panic!("valid id {raw}");
    };
    id
}

#[test]
fn single_registration_is_visible() {
    init_tracing();
    let registry = DeviceRegistry::new();
    let d1 = device("D1");
    assert!(registry.register(Arc::clone(&d1)).is_ok());

    assert_eq!(registry.len(), 1);
    assert!(registry.contains(&id("D1")));
    let Some(found) = registry.get(&id("D1")) else {
        panic!("D1 should be registered");
    };
    assert!(Arc::ptr_eq(&found, &d1));
    assert_eq!(found.id(), "D1");
}

#[test]
fn unregister_leaves_other_devices() {
    init_tracing();
    let registry = DeviceRegistry::new();
    let _ = registry.register(device("D1"));
    let _ = registry.register(device("D2"));
    let _ = registry.unregister(&id("D1"));

    assert_eq!(registry.len(), 1);
    assert!(!registry.contains(&id("D1")));
    assert!(registry.contains(&id("D2")));
}

#[test]
fn lookup_on_empty_registry_is_absent() {
    let registry = DeviceRegistry::new();
    assert!(registry.get(&id("D9")).is_none());
}

#[test]
fn last_registration_wins() {
    init_tracing();
    let registry = DeviceRegistry::new();
    let h1 = device("D1");
    let h2 = device("D1");
    let _ = registry.register(Arc::clone(&h1));
    let _ = registry.register(Arc::clone(&h2));

    let Some(found) = registry.get(&id("D1")) else {
        panic!("D1 should be registered");
    };
    assert!(Arc::ptr_eq(&found, &h2));
    assert_eq!(registry.len(), 1);
    // registry released its share of the replaced handle
    assert_eq!(Arc::strong_count(&h1), 1);
}

#[test]
fn unregister_twice_is_harmless() {
    let registry = DeviceRegistry::new();
    let _ = registry.register(device("D1"));

    assert!(registry.unregister(&id("D1")).is_some());
    assert!(!registry.contains(&id("D1")));
    assert!(registry.unregister(&id("D1")).is_none());
    assert!(!registry.contains(&id("D1")));
}

#[test]
fn contains_agrees_with_get_and_len() {
    let registry = DeviceRegistry::new();
    for name in ["A", "B", "C", "D"] {
        let _ = registry.register(device(name));
    }
    let _ = registry.unregister(&id("B"));
    let _ = registry.register(device("A"));

    let mut present = 0;
    for name in ["A", "B", "C", "D", "E"] {
        let key = id(name);
        assert_eq!(registry.contains(&key), registry.get(&key).is_some());
        if registry.contains(&key) {
            present += 1;
        }
    }
    assert_eq!(registry.len(), present);
    assert_eq!(registry.ids(), vec![id("A"), id("C"), id("D")]);
}

#[test]
fn handle_outlives_unregister() {
    let registry = DeviceRegistry::new();
    let _ = registry.register(Arc::new(
        PhysicalDevice::new("SST1", "Sst").with_signal("gateway", 2.5),
    ));

    let Some(held) = registry.get(&id("SST1")) else {
        panic!("SST1 should be registered");
    };
    let _ = registry.unregister(&id("SST1"));

    assert!(registry.is_empty());
    assert_eq!(held.id(), "SST1");
    assert_eq!(held.device_type(), "Sst");
}

#[test]
fn invalid_handle_is_distinct_from_absence() {
    let registry = DeviceRegistry::new();
    let result = registry.register(device(""));
    let Err(err) = result else {
        panic!("blank id must be rejected");
    };
    assert!(matches!(err, RegistryError::InvalidHandle(_)));
    assert_eq!(err.error_code(), 1001);
    assert!(registry.is_empty());
}

#[test]
fn reject_policy_from_config() {
    let config = RegistryConfig {
        duplicate_policy: DuplicatePolicy::Reject,
        ..RegistryConfig::default()
    };
    let registry = DeviceRegistry::with_config(&config);
    assert_eq!(registry.duplicate_policy(), DuplicatePolicy::Reject);

    let _ = registry.register(device("D1"));
    let Err(err) = registry.register(device("D1")) else {
        panic!("duplicate must be rejected");
    };
    assert_eq!(err, RegistryError::DuplicateDevice(id("D1")));
    assert_eq!(registry.len(), 1);
}

#[test]
fn listing_is_ordered_and_filterable() {
    let registry = DeviceRegistry::new();
    let _ = registry.register(Arc::new(PhysicalDevice::new("SST1", "Sst")));
    let _ = registry.register(Arc::new(PhysicalDevice::new("LOAD2", "Load")));
    let _ = registry.register(Arc::new(PhysicalDevice::new("LOAD1", "Load")));

    let all: Vec<String> = registry
        .list(None)
        .into_iter()
        .map(|s| s.device_id.to_string())
        .collect();
    assert_eq!(all, vec!["LOAD1", "LOAD2", "SST1"]);

    let loads = registry.list(Some("Load"));
    assert_eq!(loads.len(), 2);
    assert!(loads.iter().all(|s| s.device_type == "Load"));

    let json = serde_json::to_string(&loads).unwrap_or_default();
    assert!(json.contains("LOAD1"));
}

#[test]
fn identifiers_are_kept_verbatim() {
    let registry = DeviceRegistry::new();
    let padded = device("D1 ");
    let plain = device("D1");
    let _ = registry.register(Arc::clone(&padded));
    let Ok(displaced) = registry.register(Arc::clone(&plain)) else {
        panic!("plain id must register");
    };

    assert!(displaced.is_none());
    assert_eq!(registry.len(), 2);
    let Some(found) = registry.get(&id("D1 ")) else {
        panic!("padded id should be registered");
    };
    assert_eq!(found.id(), "D1 ");
    assert_eq!(registry.ids(), vec![id("D1"), id("D1 ")]);
}
