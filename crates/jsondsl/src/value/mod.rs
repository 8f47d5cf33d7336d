mod number;
mod object;

use core::fmt;

pub use number::Number;
pub use object::{Iter as ObjectIter, Object};

/// An immutable JSON value.
///
/// Values are compared structurally: arrays element by element in order, objects by their set of
/// entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JsonValue {
    Null,
    Bool(bool),
    Number(Number),
    String(Box<str>),
    Array(Box<[JsonValue]>),
    Object(Object),
}

/// The variant of a [`JsonValue`] without its payload.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Kind {
    Null,
    Bool,
    Number,
    String,
    Array,
    Object,
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Kind::Null => "null",
            Kind::Bool => "boolean",
            Kind::Number => "number",
            Kind::String => "string",
            Kind::Array => "array",
            Kind::Object => "object",
        })
    }
}

impl JsonValue {
    #[must_use]
    pub fn kind(&self) -> Kind {
        match self {
            JsonValue::Null => Kind::Null,
            JsonValue::Bool(_) => Kind::Bool,
            JsonValue::Number(_) => Kind::Number,
            JsonValue::String(_) => Kind::String,
            JsonValue::Array(_) => Kind::Array,
            JsonValue::Object(_) => Kind::Object,
        }
    }

    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, JsonValue::Null)
    }

    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            JsonValue::Bool(value) => Some(*value),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_number(&self) -> Option<&Number> {
        match self {
            JsonValue::Number(value) => Some(value),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            JsonValue::String(value) => Some(&**value),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_array(&self) -> Option<&[JsonValue]> {
        match self {
            JsonValue::Array(items) => Some(&**items),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_object(&self) -> Option<&Object> {
        match self {
            JsonValue::Object(object) => Some(object),
            _ => None,
        }
    }

    /// Look up `key` if this value is an object.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&JsonValue> {
        self.as_object().and_then(|object| object.get(key))
    }

    /// Look up the element at `index` if this value is an array.
    #[must_use]
    pub fn get_index(&self, index: usize) -> Option<&JsonValue> {
        self.as_array().and_then(|items| items.get(index))
    }
}

/// A complete JSON document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Json(JsonValue);

impl Json {
    #[must_use]
    pub fn new(value: JsonValue) -> Json {
        Json(value)
    }

    #[must_use]
    pub fn value(&self) -> &JsonValue {
        &self.0
    }

    #[must_use]
    pub fn into_value(self) -> JsonValue {
        self.0
    }
}

impl From<JsonValue> for Json {
    fn from(value: JsonValue) -> Self {
        Json(value)
    }
}

impl From<Json> for JsonValue {
    fn from(json: Json) -> Self {
        json.0
    }
}

impl From<Number> for JsonValue {
    fn from(value: Number) -> Self {
        JsonValue::Number(value)
    }
}

impl From<bool> for JsonValue {
    fn from(value: bool) -> Self {
        JsonValue::Bool(value)
    }
}

impl From<&str> for JsonValue {
    fn from(value: &str) -> Self {
        JsonValue::String(value.into())
    }
}

impl From<String> for JsonValue {
    fn from(value: String) -> Self {
        JsonValue::String(value.into_boxed_str())
    }
}

impl From<Box<str>> for JsonValue {
    fn from(value: Box<str>) -> Self {
        JsonValue::String(value)
    }
}

impl From<Object> for JsonValue {
    fn from(value: Object) -> Self {
        JsonValue::Object(value)
    }
}

impl<T: Into<JsonValue>> From<Option<T>> for JsonValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(JsonValue::Null, Into::into)
    }
}

impl<T: Into<JsonValue>> From<Vec<T>> for JsonValue {
    fn from(value: Vec<T>) -> Self {
        value.into_iter().collect()
    }
}

impl<T: Into<JsonValue>> FromIterator<T> for JsonValue {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        JsonValue::Array(iter.into_iter().map(Into::into).collect())
    }
}

macro_rules! impl_from_number {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for JsonValue {
                fn from(value: $ty) -> Self {
                    JsonValue::Number(Number::from(value))
                }
            }
        )*
    };
}

impl_from_number!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize, f32, f64);

#[cfg(test)]
mod tests {
    use super::{Json, JsonValue, Kind, Number, Object};
    use test_case::test_case;

    fn object(entries: &[(&str, JsonValue)]) -> JsonValue {
        entries.iter().cloned().collect::<Object>().into()
    }

    #[test_case(JsonValue::Null, Kind::Null, "null")]
    #[test_case(JsonValue::from(true), Kind::Bool, "boolean")]
    #[test_case(JsonValue::from(1), Kind::Number, "number")]
    #[test_case(JsonValue::from("a"), Kind::String, "string")]
    #[test_case(JsonValue::from(vec![1]), Kind::Array, "array")]
    #[test_case(object(&[]), Kind::Object, "object")]
    fn kinds(value: JsonValue, kind: Kind, name: &str) {
        assert_eq!(value.kind(), kind);
        assert_eq!(kind.to_string(), name);
    }

    #[test_case(JsonValue::from(vec![1, 2]), JsonValue::from(vec![1, 2]); "arrays")]
    #[test_case(
        object(&[("a", 1.into()), ("b", 2.into())]),
        object(&[("b", 2.into()), ("a", 1.into())]);
        "objects in any order"
    )]
    #[test_case(JsonValue::from(1u8), JsonValue::from(1.0); "numbers by value")]
    #[test_case(JsonValue::from(None::<i32>), JsonValue::Null; "none is null")]
    #[test_case(JsonValue::from(String::from("x")), JsonValue::from("x"); "owned and borrowed text")]
    fn structural_equality(left: JsonValue, right: JsonValue) {
        assert_eq!(left, right);
    }

    #[test_case(JsonValue::from(vec![1, 2]), JsonValue::from(vec![2, 1]); "array order")]
    #[test_case(JsonValue::from(vec![1]), JsonValue::from(vec![1, 1]); "array length")]
    #[test_case(object(&[("a", 1.into())]), object(&[("a", 2.into())]); "object values")]
    #[test_case(object(&[("a", 1.into())]), object(&[("b", 1.into())]); "object keys")]
    #[test_case(JsonValue::Null, JsonValue::from(false); "null and false")]
    #[test_case(JsonValue::from("1"), JsonValue::from(1); "text and number")]
    fn structural_inequality(left: JsonValue, right: JsonValue) {
        assert_ne!(left, right);
    }

    #[test]
    fn accessors() {
        let value = object(&[
            ("flag", true.into()),
            ("items", JsonValue::from(vec!["x", "y"])),
        ]);
        assert_eq!(value.get("flag").and_then(JsonValue::as_bool), Some(true));
        assert_eq!(
            value
                .get("items")
                .and_then(|items| items.get_index(1))
                .and_then(JsonValue::as_str),
            Some("y")
        );
        assert!(value.get("missing").is_none());
        assert!(value.as_array().is_none());
        assert!(JsonValue::Null.is_null());
        assert_eq!(
            JsonValue::from(3).as_number(),
            Some(&Number::PositiveInteger(3))
        );
    }

    #[test]
    fn document_wraps_value() {
        let json = Json::new(JsonValue::from(1));
        assert_eq!(json.value(), &JsonValue::from(1));
        assert_eq!(json.clone().into_value(), JsonValue::from(1));
        assert_eq!(Json::from(JsonValue::from(1)), json);
        assert_eq!(JsonValue::from(json), JsonValue::from(1));
    }
}
