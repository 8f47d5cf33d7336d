use serde_json::Value;

use crate::{Error, Json, JsonValue, Number, Object, Reflect};

impl From<&serde_json::Number> for Number {
    fn from(value: &serde_json::Number) -> Self {
        if let Some(u) = value.as_u64() {
            Number::PositiveInteger(u)
        } else if let Some(i) = value.as_i64() {
            Number::NegativeInteger(i)
        } else {
            Number::Float(value.as_f64().unwrap_or(f64::NAN))
        }
    }
}

impl From<Value> for JsonValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => JsonValue::Null,
            Value::Bool(b) => JsonValue::Bool(b),
            Value::Number(num) => JsonValue::Number(Number::from(&num)),
            Value::String(s) => JsonValue::String(s.into_boxed_str()),
            Value::Array(old) => old.into_iter().map(JsonValue::from).collect(),
            Value::Object(old) => JsonValue::Object(
                old.into_iter()
                    .map(|(k, v)| (k, JsonValue::from(v)))
                    .collect::<Object>(),
            ),
        }
    }
}

impl From<&Value> for JsonValue {
    fn from(value: &Value) -> Self {
        match value {
            Value::Null => JsonValue::Null,
            Value::Bool(b) => JsonValue::Bool(*b),
            Value::Number(num) => JsonValue::Number(Number::from(num)),
            Value::String(s) => JsonValue::from(s.as_str()),
            Value::Array(old) => old.iter().map(JsonValue::from).collect(),
            Value::Object(old) => JsonValue::Object(
                old.iter()
                    .map(|(k, v)| (k.as_str(), JsonValue::from(v)))
                    .collect::<Object>(),
            ),
        }
    }
}

/// Non-finite floats have no JSON representation and become `null`.
impl From<JsonValue> for Value {
    fn from(value: JsonValue) -> Self {
        match value {
            JsonValue::Null => Value::Null,
            JsonValue::Bool(b) => Value::Bool(b),
            JsonValue::Number(Number::PositiveInteger(u)) => Value::from(u),
            JsonValue::Number(Number::NegativeInteger(i)) => Value::from(i),
            JsonValue::Number(Number::Float(f)) => {
                serde_json::Number::from_f64(f).map_or(Value::Null, Value::Number)
            }
            JsonValue::String(s) => Value::String(s.into_string()),
            JsonValue::Array(items) => Value::Array(
                items
                    .into_vec()
                    .into_iter()
                    .map(Value::from)
                    .collect(),
            ),
            JsonValue::Object(object) => Value::Object(
                object
                    .into_entries()
                    .map(|(k, v)| (k.into_string(), Value::from(v)))
                    .collect(),
            ),
        }
    }
}

impl From<Json> for Value {
    fn from(json: Json) -> Self {
        Value::from(json.into_value())
    }
}

impl Reflect for Value {
    fn to_json(&self) -> Result<JsonValue, Error> {
        Ok(JsonValue::from(self))
    }
}

impl PartialEq<Value> for JsonValue {
    fn eq(&self, other: &Value) -> bool {
        eq(other, self)
    }
}

impl PartialEq<JsonValue> for Value {
    fn eq(&self, other: &JsonValue) -> bool {
        eq(self, other)
    }
}

fn eq(lhs: &Value, rhs: &JsonValue) -> bool {
    match (lhs, rhs) {
        (Value::Null, JsonValue::Null) => true,
        (Value::Bool(l), JsonValue::Bool(r)) => l == r,
        (Value::Number(l), JsonValue::Number(r)) => Number::from(l) == *r,
        (Value::String(l), JsonValue::String(r)) => l.as_str() == &**r,
        (Value::Array(l), JsonValue::Array(r)) => {
            l.len() == r.len() && l.iter().zip(r.iter()).all(|(l, r)| eq(l, r))
        }
        (Value::Object(l), JsonValue::Object(r)) => {
            // Lookup by key keeps this independent of either side's iteration order.
            l.len() == r.len()
                && l
                    .iter()
                    .all(|(key, lv)| r.get(key).is_some_and(|rv| eq(lv, rv)))
        }
        _ => false,
    }
}
