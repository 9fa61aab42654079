use super::Value;
use crate::map::Map;
use std::borrow::Cow;

macro_rules! from_integer {
    ($variant:ident: $($ty:ident)*) => {
        $(
            impl From<$ty> for Value {
                fn from(n: $ty) -> Self {
                    Value::$variant(n.into())
                }
            }
        )*
    };
}

from_integer! { Int: i8 i16 i32 u8 u16 }
from_integer! { Int64: i64 u32 }

impl From<f32> for Value {
    /// Convert 32-bit floating point number to `Value::Double`.
    fn from(f: f32) -> Self {
        Value::Double(f.into())
    }
}

impl From<f64> for Value {
    /// Convert 64-bit floating point number to `Value::Double`.
    fn from(f: f64) -> Self {
        Value::Double(f)
    }
}

impl From<bool> for Value {
    /// Convert boolean to `Value::Bool`.
    fn from(f: bool) -> Self {
        Value::Bool(f)
    }
}

impl From<String> for Value {
    /// Convert `String` to `Value::String`.
    ///
    /// # Examples
    ///
    /// ```
    /// use rpc_struct::Value;
    ///
    /// let s: String = "lorem".to_owned();
    /// let x: Value = s.into();
    /// ```
    fn from(f: String) -> Self {
        Value::String(f)
    }
}

impl From<&str> for Value {
    /// Convert string slice to `Value::String`.
    fn from(f: &str) -> Self {
        Value::String(f.to_owned())
    }
}

impl<'a> From<Cow<'a, str>> for Value {
    /// Convert copy-on-write string to `Value::String`.
    fn from(f: Cow<'a, str>) -> Self {
        Value::String(f.into_owned())
    }
}

impl From<Map<Value>> for Value {
    /// Convert map (with string keys) to `Value::Struct`.
    ///
    /// # Examples
    ///
    /// ```
    /// use rpc_struct::{Map, Value};
    ///
    /// let mut m = Map::new();
    /// m.insert("Lorem".to_owned(), "ipsum".into());
    /// let x: Value = m.into();
    /// ```
    fn from(f: Map<Value>) -> Self {
        Value::Struct(f)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    /// Convert a `Vec` to `Value::Array`.
    ///
    /// Bytes are not special-cased: `Vec<u8>` becomes an array of `int`.
    /// Build `Value::Base64` explicitly for binary data.
    fn from(f: Vec<T>) -> Self {
        Value::Array(f.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    /// `None` becomes `Value::Nil`.
    fn from(opt: Option<T>) -> Self {
        match opt {
            None => Value::Nil,
            Some(value) => Into::into(value),
        }
    }
}

impl From<()> for Value {
    /// Convert `()` to `Value::Nil`.
    fn from((): ()) -> Self {
        Value::Nil
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Value {
    /// Create a `Value::Struct` by collecting an iterator of key-value pairs.
    ///
    /// A key that repeats overwrites the earlier value in place.
    ///
    /// # Examples
    ///
    /// ```
    /// use rpc_struct::Value;
    ///
    /// let v: Vec<_> = vec![("lorem", 40), ("ipsum", 2)];
    /// let x: Value = v.into_iter().collect();
    /// assert_eq!(x["ipsum"], 2);
    /// ```
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Value::Struct(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect::<Map<Value>>(),
        )
    }
}
