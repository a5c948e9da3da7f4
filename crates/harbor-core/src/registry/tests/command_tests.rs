use std::sync::{Arc, Mutex};

use super::super::command::CommandRegistry;
use super::super::error::RegistryError;
use crate::value::Value;

fn echo_registry() -> CommandRegistry {
    let mut registry = CommandRegistry::new();
    registry
        .register(
            "echo",
            "Returns its arguments unchanged",
            2,
            2,
            Box::new(|args| args.to_vec()),
            vec![],
        )
        .unwrap();
    registry
}

#[test]
fn test_register_and_invoke() {
    let registry = echo_registry();
    let result = registry
        .invoke("echo", &[Value::from(1u8), Value::from(2u8)])
        .unwrap();
    assert_eq!(result, vec![Value::U8(1), Value::U8(2)]);
}

#[test]
fn test_invoke_unknown_command_fails() {
    let registry = echo_registry();
    let err = registry.invoke("nope", &[]).unwrap_err();
    assert!(matches!(err, RegistryError::CommandNotFound(name) if name == "nope"));
}

#[test]
fn test_register_rejects_excess_defaults() {
    let mut registry = CommandRegistry::new();
    let err = registry
        .register(
            "bad",
            "More defaults than parameters",
            1,
            0,
            Box::new(|_| vec![]),
            vec![Value::U8(1), Value::U8(2)],
        )
        .unwrap_err();
    assert!(matches!(
        err,
        RegistryError::TooManyDefaults { expected: 1, defaults: 2, .. }
    ));
}

#[test]
fn test_arity_window_with_defaults() {
    // arg_count = 3, two trailing defaults: 1..=3 provided args are valid.
    let mut registry = CommandRegistry::new();
    registry
        .register(
            "sum",
            "Adds three u32 values",
            3,
            1,
            Box::new(|args| {
                let total: u32 = args
                    .iter()
                    .map(|v| u32::try_from(v.clone()).unwrap())
                    .sum();
                vec![Value::U32(total)]
            }),
            vec![Value::U32(10), Value::U32(100)],
        )
        .unwrap();

    for provided in 1..=3usize {
        let args: Vec<Value> = (0..provided).map(|_| Value::U32(1)).collect();
        assert!(
            registry.invoke("sum", &args).is_ok(),
            "{} arguments should be accepted",
            provided
        );
    }

    let too_many: Vec<Value> = (0..4).map(|_| Value::U32(1)).collect();
    let err = registry.invoke("sum", &too_many).unwrap_err();
    assert!(matches!(
        err,
        RegistryError::ArityMismatch { expected: 3, defaults: 2, provided: 4, .. }
    ));

    let err = registry.invoke("sum", &[]).unwrap_err();
    assert!(matches!(err, RegistryError::ArityMismatch { provided: 0, .. }));
}

#[test]
fn test_handler_receives_merged_defaults() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let seen_in_handler = seen.clone();

    let mut registry = CommandRegistry::new();
    registry
        .register(
            "greet",
            "Builds a greeting",
            2,
            1,
            Box::new(move |args| {
                seen_in_handler.lock().unwrap().extend(args.to_vec());
                vec![Value::from(format!("{} {}", args[0], args[1]))]
            }),
            vec![Value::from("world")],
        )
        .unwrap();

    let result = registry.invoke("greet", &[Value::from("hello")]).unwrap();
    assert_eq!(result, vec![Value::Text("hello world".into())]);
    assert_eq!(
        *seen.lock().unwrap(),
        vec![Value::Text("hello".into()), Value::Text("world".into())]
    );
}

#[test]
fn test_provided_args_override_defaults() {
    let mut registry = CommandRegistry::new();
    registry
        .register(
            "pair",
            "Returns both arguments",
            2,
            2,
            Box::new(|args| args.to_vec()),
            vec![Value::U8(9), Value::U8(8)],
        )
        .unwrap();

    // Full argument list: defaults are unused.
    let result = registry.invoke("pair", &[Value::U8(1), Value::U8(2)]).unwrap();
    assert_eq!(result, vec![Value::U8(1), Value::U8(2)]);

    // Partial: the trailing default fills the gap.
    let result = registry.invoke("pair", &[Value::U8(1)]).unwrap();
    assert_eq!(result, vec![Value::U8(1), Value::U8(8)]);
}

#[test]
fn test_alias_resolution() {
    let mut registry = echo_registry();
    assert!(registry.set_alias("echo", "e"));
    assert!(registry.is_alias("e"));
    assert_eq!(registry.alias_of("echo").unwrap(), Some("e"));

    let result = registry.invoke("e", &[Value::U8(1), Value::U8(2)]).unwrap();
    assert_eq!(result.len(), 2);
}

#[test]
fn test_set_alias_on_missing_command() {
    let mut registry = CommandRegistry::new();
    assert!(!registry.set_alias("ghost", "g"));
    assert!(!registry.is_alias("g"));
}

#[test]
fn test_remove_by_alias() {
    let mut registry = echo_registry();
    registry.set_alias("echo", "e");
    assert!(registry.remove("e"));
    assert!(!registry.contains("echo"));
    assert!(!registry.remove("echo"));
}

#[test]
fn test_metadata_lookups() {
    let registry = echo_registry();
    assert_eq!(registry.describe("echo").unwrap(), "Returns its arguments unchanged");
    assert_eq!(registry.arg_count("echo").unwrap(), 2);
    assert_eq!(registry.return_count("echo").unwrap(), 2);
    assert!(registry.describe("missing").is_err());
}

#[test]
fn test_duplicate_name_keeps_first_match() {
    let mut registry = CommandRegistry::new();
    registry
        .register("dup", "first", 0, 1, Box::new(|_| vec![Value::U8(1)]), vec![])
        .unwrap();
    registry
        .register("dup", "second", 0, 1, Box::new(|_| vec![Value::U8(2)]), vec![])
        .unwrap();

    assert_eq!(registry.names(), vec!["dup", "dup"]);
    assert_eq!(registry.invoke("dup", &[]).unwrap(), vec![Value::U8(1)]);

    // Removing the first entry exposes the shadowed one.
    assert!(registry.remove("dup"));
    assert_eq!(registry.invoke("dup", &[]).unwrap(), vec![Value::U8(2)]);
}
