//! `serde_json` bridge.
//!
//! Conversion from JSON is lossless except for numbers outside `i64`, which
//! become floats. Conversion to JSON renders integer keys as strings and
//! non-finite floats as `null`.

use serde::Serialize;
use serde_json::{Map as JsonMap, Number, Value as JsonValue};

use crate::{
    error::DictError,
    value::{Key, Value},
};

impl From<JsonValue> for Value {
    fn from(json: JsonValue) -> Self {
        match json {
            JsonValue::Null => Value::Null,
            JsonValue::Bool(b) => Value::Bool(b),
            JsonValue::Number(n) => n
                .as_i64()
                .map_or_else(|| Value::Float(n.as_f64().unwrap_or(f64::NAN)), Value::Int),
            JsonValue::String(s) => Value::Str(s),
            JsonValue::Array(items) => Value::Seq(items.into_iter().map(Value::from).collect()),
            JsonValue::Object(map) => Value::Map(
                map.into_iter()
                    .map(|(key, value)| (Key::Str(key), Value::from(value)))
                    .collect(),
            ),
        }
    }
}

impl From<&Value> for JsonValue {
    fn from(value: &Value) -> Self {
        match value {
            Value::Null => JsonValue::Null,
            Value::Bool(b) => JsonValue::Bool(*b),
            Value::Int(n) => JsonValue::Number(Number::from(*n)),
            Value::Float(x) => Number::from_f64(*x).map_or(JsonValue::Null, JsonValue::Number),
            Value::Str(s) => JsonValue::String(s.clone()),
            Value::Seq(items) => JsonValue::Array(items.iter().map(JsonValue::from).collect()),
            Value::Map(map) => JsonValue::Object(
                map.iter()
                    .map(|(key, value)| (key.to_string(), JsonValue::from(value)))
                    .collect::<JsonMap<String, JsonValue>>(),
            ),
        }
    }
}

impl From<Value> for JsonValue {
    fn from(value: Value) -> Self {
        JsonValue::from(&value)
    }
}

impl Value {
    pub fn to_json(&self) -> JsonValue {
        JsonValue::from(self)
    }

    /// Converts any serializable value into the dynamic value model.
    pub fn from_serialize<T: Serialize + ?Sized>(value: &T) -> Result<Self, DictError> {
        serde_json::to_value(value)
            .map(Value::from)
            .map_err(|err| DictError::Conversion(err.to_string()))
    }
}
