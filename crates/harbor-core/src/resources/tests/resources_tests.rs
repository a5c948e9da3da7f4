use super::super::{ResourceError, ResourceRegistry};
use crate::utils::Shared;
use crate::value::Value;

#[test]
fn test_register_then_get() {
    let registry = ResourceRegistry::new();
    registry.register("threads", Value::U32(8));

    let handle = registry.get("threads").unwrap();
    assert_eq!(*handle.get(), Value::U32(8));
    assert!(registry.contains("threads"));
}

#[test]
fn test_get_missing_fails() {
    let registry = ResourceRegistry::new();
    assert_eq!(
        registry.get("missing").unwrap_err(),
        ResourceError::NotFound("missing".to_string())
    );
}

#[test]
fn test_locked_resource_is_refused() {
    let registry = ResourceRegistry::new();
    registry.register("db", Value::from("postgres://local"));

    registry.lock("db").unwrap();
    assert_eq!(
        registry.get("db").unwrap_err(),
        ResourceError::Locked("db".to_string())
    );

    registry.unlock("db").unwrap();
    let handle = registry.get("db").unwrap();
    assert_eq!(*handle.get(), Value::Text("postgres://local".into()));
}

#[test]
fn test_lock_missing_fails() {
    let registry = ResourceRegistry::new();
    assert_eq!(
        registry.lock("missing").unwrap_err(),
        ResourceError::NotFound("missing".to_string())
    );
    assert_eq!(
        registry.unlock("missing").unwrap_err(),
        ResourceError::NotFound("missing".to_string())
    );
}

#[test]
fn test_duplicate_names_resolve_first_match() {
    let registry = ResourceRegistry::new();
    registry.register("cfg", Value::U8(1));
    registry.register("cfg", Value::U8(2));

    assert_eq!(registry.names(), vec!["cfg", "cfg"]);
    assert_eq!(*registry.get("cfg").unwrap().get(), Value::U8(1));
}

#[test]
fn test_handle_outlives_registry_lock() {
    // Weak consistency: a handle fetched before lock() stays usable.
    let registry = ResourceRegistry::new();
    registry.register("buffer", Value::U64(1024));

    let handle = registry.get("buffer").unwrap();
    registry.lock("buffer").unwrap();

    assert_eq!(*handle.get(), Value::U64(1024));
    assert!(registry.get("buffer").is_err());
}

#[test]
fn test_concurrent_access_is_serialized() {
    let registry = Shared::new(ResourceRegistry::new());
    registry.register("shared", Value::U32(0));

    let mut handles = Vec::new();
    for i in 0..4u32 {
        let registry = registry.clone();
        handles.push(std::thread::spawn(move || {
            // Go through the pointee: `Shared` has its own `get`, which would
            // otherwise shadow `ResourceRegistry::get`.
            let resources: &ResourceRegistry = &registry;
            resources.register(format!("res-{}", i), Value::U32(i));
            resources.get("shared").unwrap();
        }));
    }
    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(registry.names().len(), 5);
}
