use super::Value;
use serde_core::ser::{Serialize, Serializer};

impl Serialize for Value {
    #[inline]
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Value::Nil => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Int(i) => serializer.serialize_i32(*i),
            Value::Int64(i) => serializer.serialize_i64(*i),
            Value::Double(f) => serializer.serialize_f64(*f),
            Value::String(s) => serializer.serialize_str(s),
            Value::Base64(bytes) => serializer.serialize_bytes(bytes),
            Value::Array(v) => v.serialize(serializer),
            Value::Struct(m) => m.serialize(serializer),
        }
    }
}
