//! Tagged exchange value.
//!
//! [`Value`] is the sole exchange type for command arguments and returns,
//! plugin variables and shared resources. It is a closed variant: plugins
//! cannot extend it, which keeps the set of types crossing the module
//! boundary fixed.

use std::ffi::c_void;
use std::fmt;

/// Opaque pointer payload for [`Value::Ptr`].
///
/// The registry machinery never dereferences it; it is carried verbatim
/// between the parties that agreed on what it points to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpaquePtr(pub *mut c_void);

// The pointer is never dereferenced by the core; whoever stores one is
// responsible for the safety of whatever it designates.
unsafe impl Send for OpaquePtr {}
unsafe impl Sync for OpaquePtr {}

impl fmt::Display for OpaquePtr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:p}", self.0)
    }
}

/// Closed variant over the types exchanged with plugins.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    F32(f32),
    F64(f64),
    Bool(bool),
    Text(String),
    Ptr(OpaquePtr),
}

impl Value {
    /// Name of the contained variant, for diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::U8(_) => "u8",
            Value::U16(_) => "u16",
            Value::U32(_) => "u32",
            Value::U64(_) => "u64",
            Value::I8(_) => "i8",
            Value::I16(_) => "i16",
            Value::I32(_) => "i32",
            Value::I64(_) => "i64",
            Value::F32(_) => "f32",
            Value::F64(_) => "f64",
            Value::Bool(_) => "bool",
            Value::Text(_) => "text",
            Value::Ptr(_) => "ptr",
        }
    }
}

impl Default for Value {
    /// The empty value handed out when a lenient lookup misses.
    fn default() -> Self {
        Value::U8(0)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::U8(v) => write!(f, "{}", v),
            Value::U16(v) => write!(f, "{}", v),
            Value::U32(v) => write!(f, "{}", v),
            Value::U64(v) => write!(f, "{}", v),
            Value::I8(v) => write!(f, "{}", v),
            Value::I16(v) => write!(f, "{}", v),
            Value::I32(v) => write!(f, "{}", v),
            Value::I64(v) => write!(f, "{}", v),
            Value::F32(v) => write!(f, "{}", v),
            Value::F64(v) => write!(f, "{}", v),
            Value::Bool(v) => write!(f, "{}", if *v { "true" } else { "false" }),
            Value::Text(v) => write!(f, "{}", v),
            Value::Ptr(v) => write!(f, "Pointer: {}", v),
        }
    }
}

/// Error returned when extracting a typed value from the wrong variant.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("expected {expected} value, found {found}")]
pub struct ValueTypeError {
    pub expected: &'static str,
    pub found: &'static str,
}

macro_rules! value_conversions {
    ($($variant:ident => $ty:ty, $name:expr;)*) => {
        $(
            impl From<$ty> for Value {
                fn from(v: $ty) -> Self {
                    Value::$variant(v)
                }
            }

            impl TryFrom<Value> for $ty {
                type Error = ValueTypeError;

                fn try_from(value: Value) -> Result<Self, Self::Error> {
                    match value {
                        Value::$variant(v) => Ok(v),
                        other => Err(ValueTypeError {
                            expected: $name,
                            found: other.type_name(),
                        }),
                    }
                }
            }
        )*
    };
}

value_conversions! {
    U8 => u8, "u8";
    U16 => u16, "u16";
    U32 => u32, "u32";
    U64 => u64, "u64";
    I8 => i8, "i8";
    I16 => i16, "i16";
    I32 => i32, "i32";
    I64 => i64, "i64";
    F32 => f32, "f32";
    F64 => f64, "f64";
    Bool => bool, "bool";
    Text => String, "text";
    Ptr => OpaquePtr, "ptr";
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Text(v.to_string())
    }
}

#[cfg(test)]
mod tests;
