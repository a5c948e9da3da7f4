use super::super::{OpaquePtr, Value};

#[test]
fn test_display_formats() {
    assert_eq!(Value::U32(42).to_string(), "42");
    assert_eq!(Value::I8(-7).to_string(), "-7");
    assert_eq!(Value::F64(1.5).to_string(), "1.5");
    assert_eq!(Value::Bool(true).to_string(), "true");
    assert_eq!(Value::Bool(false).to_string(), "false");
    assert_eq!(Value::Text("hello".into()).to_string(), "hello");

    let ptr = Value::Ptr(OpaquePtr(std::ptr::null_mut()));
    assert!(ptr.to_string().starts_with("Pointer: 0x"));
}

#[test]
fn test_type_names() {
    assert_eq!(Value::U8(0).type_name(), "u8");
    assert_eq!(Value::U64(0).type_name(), "u64");
    assert_eq!(Value::I64(0).type_name(), "i64");
    assert_eq!(Value::F32(0.0).type_name(), "f32");
    assert_eq!(Value::Bool(false).type_name(), "bool");
    assert_eq!(Value::Text(String::new()).type_name(), "text");
    assert_eq!(Value::Ptr(OpaquePtr(std::ptr::null_mut())).type_name(), "ptr");
}

#[test]
fn test_default_is_zero_u8() {
    assert_eq!(Value::default(), Value::U8(0));
}

#[test]
fn test_from_primitives() {
    assert_eq!(Value::from(5u16), Value::U16(5));
    assert_eq!(Value::from(-3i32), Value::I32(-3));
    assert_eq!(Value::from(true), Value::Bool(true));
    assert_eq!(Value::from("abc"), Value::Text("abc".to_string()));
}

#[test]
fn test_try_from_round_trip() {
    let v = Value::from(1234u64);
    let back: u64 = v.try_into().expect("u64 round trip");
    assert_eq!(back, 1234);

    let v = Value::from("text".to_string());
    let back: String = v.try_into().expect("string round trip");
    assert_eq!(back, "text");
}

#[test]
fn test_try_from_wrong_variant() {
    let err = u8::try_from(Value::Bool(true)).unwrap_err();
    assert_eq!(err.expected, "u8");
    assert_eq!(err.found, "bool");
}
