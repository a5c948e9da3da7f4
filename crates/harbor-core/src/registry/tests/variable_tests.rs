use super::super::error::RegistryError;
use super::super::variable::VariableRegistry;
use crate::value::Value;

#[test]
fn test_add_then_get_round_trips() {
    let mut registry = VariableRegistry::new();
    registry.add("rate", "Sampling rate", Value::U32(48_000)).unwrap();
    assert_eq!(registry.get("rate").unwrap(), Value::U32(48_000));
    assert!(registry.contains("rate"));
}

#[test]
fn test_add_duplicate_fails_and_keeps_value() {
    let mut registry = VariableRegistry::new();
    registry.add("mode", "Operating mode", Value::from("idle")).unwrap();

    let err = registry
        .add("mode", "Other description", Value::from("busy"))
        .unwrap_err();
    assert!(matches!(err, RegistryError::AlreadyRegistered(name) if name == "mode"));
    assert_eq!(registry.get("mode").unwrap(), Value::Text("idle".into()));
    assert_eq!(registry.describe("mode").unwrap(), "Operating mode");
}

#[test]
fn test_set_updates_existing() {
    let mut registry = VariableRegistry::new();
    registry.add("count", "Counter", Value::U64(0)).unwrap();
    registry.set("count", Value::U64(5)).unwrap();
    assert_eq!(registry.get("count").unwrap(), Value::U64(5));
}

#[test]
fn test_set_on_absent_name_does_not_create() {
    let mut registry = VariableRegistry::new();
    let err = registry.set("ghost", Value::Bool(true)).unwrap_err();
    assert!(matches!(err, RegistryError::VariableNotFound(name) if name == "ghost"));
    assert!(!registry.contains("ghost"));
}

#[test]
fn test_get_absent_fails() {
    let registry = VariableRegistry::new();
    assert!(matches!(
        registry.get("missing"),
        Err(RegistryError::VariableNotFound(_))
    ));
}

#[test]
fn test_remove() {
    let mut registry = VariableRegistry::new();
    registry.add("tmp", "", Value::U8(1)).unwrap();
    assert!(registry.remove("tmp"));
    assert!(!registry.contains("tmp"));
    assert!(!registry.remove("tmp"));
}

#[test]
fn test_names_in_registration_order() {
    let mut registry = VariableRegistry::new();
    registry.add("c", "", Value::U8(0)).unwrap();
    registry.add("a", "", Value::U8(0)).unwrap();
    registry.add("b", "", Value::U8(0)).unwrap();
    assert_eq!(registry.names(), vec!["c", "a", "b"]);
}

#[test]
fn test_describe_absent_fails() {
    let registry = VariableRegistry::new();
    assert!(matches!(
        registry.describe("missing"),
        Err(RegistryError::VariableNotFound(_))
    ));
}
