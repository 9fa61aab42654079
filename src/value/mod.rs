//! The dynamic value of an XML-RPC struct member.
//!
//! This module is centered around the [`Value`] type, which can represent
//! every value the wire format carries. It is the default value type of
//! [`Map`], and the key and value type of the [untyped facet](crate::untyped).
//!
//! ```
//! use rpc_struct::{Map, Value};
//!
//! let mut fault = Map::new();
//! fault.insert("faultCode".to_owned(), Value::from(4));
//! fault.insert("faultString".to_owned(), Value::from("Too many parameters."));
//! let value = Value::Struct(fault);
//!
//! assert_eq!(value.type_name(), "struct");
//! assert_eq!(value["faultCode"], 4);
//! ```

use crate::map::Map;
use std::ops;

mod de;
mod from;
mod partial_eq;
mod ser;

/// Represents any valid XML-RPC value.
#[derive(Clone, PartialEq, Debug, Default)]
pub enum Value {
    /// Represents the `nil` extension value.
    #[default]
    Nil,

    /// Represents a `boolean`.
    Bool(bool),

    /// Represents a 32-bit `int` (also spelled `i4`).
    Int(i32),

    /// Represents the 64-bit `i8` extension.
    Int64(i64),

    /// Represents a `double`.
    Double(f64),

    /// Represents a `string`.
    String(String),

    /// Represents `base64` encoded binary data.
    Base64(Vec<u8>),

    /// Represents an `array`.
    Array(Vec<Value>),

    /// Represents a `struct`.
    Struct(Map<Value>),
}

impl Value {
    /// The element name of this value's type on the wire.
    ///
    /// ```
    /// # use rpc_struct::Value;
    /// assert_eq!(Value::from(1).type_name(), "int");
    /// assert_eq!(Value::from(1_i64 << 40).type_name(), "i8");
    /// assert_eq!(Value::Nil.type_name(), "nil");
    /// ```
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Nil => "nil",
            Value::Bool(_) => "boolean",
            Value::Int(_) => "int",
            Value::Int64(_) => "i8",
            Value::Double(_) => "double",
            Value::String(_) => "string",
            Value::Base64(_) => "base64",
            Value::Array(_) => "array",
            Value::Struct(_) => "struct",
        }
    }

    /// Returns true if the `Value` is `Nil`.
    pub fn is_nil(&self) -> bool {
        matches!(self, Value::Nil)
    }

    /// If the `Value` is a Boolean, returns the associated bool. Returns None
    /// otherwise.
    pub fn as_bool(&self) -> Option<bool> {
        match *self {
            Value::Bool(b) => Some(b),
            _ => None,
        }
    }

    /// If the `Value` is an `int` or `i8`, represents it as i64. Returns None
    /// otherwise.
    pub fn as_i64(&self) -> Option<i64> {
        match *self {
            Value::Int(i) => Some(i64::from(i)),
            Value::Int64(i) => Some(i),
            _ => None,
        }
    }

    /// If the `Value` is a non-negative `int` or `i8`, represents it as u64.
    /// Returns None otherwise.
    pub fn as_u64(&self) -> Option<u64> {
        self.as_i64().and_then(|i| u64::try_from(i).ok())
    }

    /// If the `Value` is a `double`, returns the associated f64. Returns None
    /// otherwise.
    pub fn as_f64(&self) -> Option<f64> {
        match *self {
            Value::Double(f) => Some(f),
            _ => None,
        }
    }

    /// If the `Value` is a String, returns the associated str. Returns None
    /// otherwise.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// If the `Value` is `base64` data, returns the decoded bytes. Returns
    /// None otherwise.
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Value::Base64(bytes) => Some(bytes),
            _ => None,
        }
    }

    /// If the `Value` is an Array, returns the associated vector. Returns None
    /// otherwise.
    pub fn as_array(&self) -> Option<&Vec<Value>> {
        match self {
            Value::Array(array) => Some(array),
            _ => None,
        }
    }

    /// If the `Value` is an Array, returns the associated mutable vector.
    /// Returns None otherwise.
    pub fn as_array_mut(&mut self) -> Option<&mut Vec<Value>> {
        match self {
            Value::Array(array) => Some(array),
            _ => None,
        }
    }

    /// If the `Value` is a Struct, returns the associated Map. Returns None
    /// otherwise.
    pub fn as_struct(&self) -> Option<&Map<Value>> {
        match self {
            Value::Struct(map) => Some(map),
            _ => None,
        }
    }

    /// If the `Value` is a Struct, returns the associated mutable Map.
    /// Returns None otherwise.
    pub fn as_struct_mut(&mut self) -> Option<&mut Map<Value>> {
        match self {
            Value::Struct(map) => Some(map),
            _ => None,
        }
    }

    /// Takes the value out of the `Value`, leaving a `Nil` in its place.
    pub fn take(&mut self) -> Value {
        std::mem::take(self)
    }
}

/// Index into a struct member by name. Panics if the value is not a struct or
/// the member does not exist.
impl ops::Index<&str> for Value {
    type Output = Value;

    fn index(&self, key: &str) -> &Value {
        match self {
            Value::Struct(map) => &map[key],
            other => panic!("cannot index into {} with a member name", other.type_name()),
        }
    }
}

/// Index into an array element. Panics if the value is not an array or the
/// index is out of bounds.
impl ops::Index<usize> for Value {
    type Output = Value;

    fn index(&self, index: usize) -> &Value {
        match self {
            Value::Array(array) => &array[index],
            other => panic!("cannot index into {} with a position", other.type_name()),
        }
    }
}
