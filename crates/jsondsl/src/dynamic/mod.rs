//! Conversion of arbitrary runtime values into [`JsonValue`].
//!
//! Every representation the converter understands implements [`Reflect`]: null, bool, numbers,
//! text, ordered sequences and key-value maps, recursively through their elements. Type-erased
//! values (`dyn Any`) are checked against the concrete types in the same order at runtime, and
//! anything not recognised there is rejected with [`Error::UnsupportedValue`].
mod implicit;

pub use implicit::{from_args, from_block, from_value, DynamicObjectBuilder};

use core::fmt;
use std::{
    any::{type_name_of_val, Any},
    collections::{BTreeMap, HashMap, VecDeque},
    hash::BuildHasher,
    rc::Rc,
    sync::Arc,
};

use indexmap::IndexMap;

use crate::{Error, Json, JsonValue, Number, Object};

/// A value the dynamic converter can inspect.
///
/// Containers convert element by element, so `Vec<Vec<i32>>`, `HashMap<char, Option<f64>>` or
/// `Vec<Box<dyn Reflect>>` with mixed element types all work. Map keys are stringified with
/// `Display`.
pub trait Reflect {
    /// Convert `self` into the [`JsonValue`] it represents.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::UnsupportedValue`] if a type-erased value at any depth is not
    /// recognised.
    fn to_json(&self) -> Result<JsonValue, Error>;

    fn type_name(&self) -> &'static str {
        type_name_of_val(self)
    }
}

impl Reflect for () {
    fn to_json(&self) -> Result<JsonValue, Error> {
        Ok(JsonValue::Null)
    }
}

impl Reflect for bool {
    fn to_json(&self) -> Result<JsonValue, Error> {
        Ok(JsonValue::Bool(*self))
    }
}

macro_rules! impl_reflect_number {
    ($($ty:ty),*) => {
        $(
            impl Reflect for $ty {
                fn to_json(&self) -> Result<JsonValue, Error> {
                    Ok(JsonValue::Number(Number::from(*self)))
                }
            }
        )*
    };
}

impl_reflect_number!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize, f32, f64);

impl Reflect for Number {
    fn to_json(&self) -> Result<JsonValue, Error> {
        Ok(JsonValue::Number(*self))
    }
}

impl Reflect for str {
    fn to_json(&self) -> Result<JsonValue, Error> {
        Ok(JsonValue::from(self))
    }
}

impl Reflect for String {
    fn to_json(&self) -> Result<JsonValue, Error> {
        Ok(JsonValue::from(self.as_str()))
    }
}

impl Reflect for char {
    fn to_json(&self) -> Result<JsonValue, Error> {
        Ok(JsonValue::String(self.to_string().into_boxed_str()))
    }
}

impl Reflect for JsonValue {
    fn to_json(&self) -> Result<JsonValue, Error> {
        Ok(self.clone())
    }
}

impl Reflect for Json {
    fn to_json(&self) -> Result<JsonValue, Error> {
        Ok(self.value().clone())
    }
}

impl Reflect for Object {
    fn to_json(&self) -> Result<JsonValue, Error> {
        Ok(JsonValue::Object(self.clone()))
    }
}

impl<T: Reflect> Reflect for Option<T> {
    fn to_json(&self) -> Result<JsonValue, Error> {
        match self {
            Some(value) => value.to_json(),
            None => Ok(JsonValue::Null),
        }
    }
}

macro_rules! impl_reflect_pointer {
    ($($pointer:ident),*) => {
        $(
            impl<T: Reflect + ?Sized> Reflect for $pointer<T> {
                fn to_json(&self) -> Result<JsonValue, Error> {
                    (**self).to_json()
                }
            }
        )*
    };
}

impl_reflect_pointer!(Box, Rc, Arc);

impl<T: Reflect + ?Sized> Reflect for &T {
    fn to_json(&self) -> Result<JsonValue, Error> {
        (**self).to_json()
    }
}

impl<T: Reflect> Reflect for [T] {
    fn to_json(&self) -> Result<JsonValue, Error> {
        sequence(self.type_name(), self.iter())
    }
}

impl<T: Reflect, const N: usize> Reflect for [T; N] {
    fn to_json(&self) -> Result<JsonValue, Error> {
        sequence(self.type_name(), self.iter())
    }
}

impl<T: Reflect> Reflect for Vec<T> {
    fn to_json(&self) -> Result<JsonValue, Error> {
        sequence(self.type_name(), self.iter())
    }
}

impl<T: Reflect> Reflect for VecDeque<T> {
    fn to_json(&self) -> Result<JsonValue, Error> {
        sequence(self.type_name(), self.iter())
    }
}

impl<K: fmt::Display, V: Reflect> Reflect for BTreeMap<K, V> {
    fn to_json(&self) -> Result<JsonValue, Error> {
        mapping(self.type_name(), self.iter())
    }
}

impl<K: fmt::Display, V: Reflect, S: BuildHasher> Reflect for HashMap<K, V, S> {
    fn to_json(&self) -> Result<JsonValue, Error> {
        mapping(self.type_name(), self.iter())
    }
}

impl<K: fmt::Display, V: Reflect, S: BuildHasher> Reflect for IndexMap<K, V, S> {
    fn to_json(&self) -> Result<JsonValue, Error> {
        mapping(self.type_name(), self.iter())
    }
}

macro_rules! impl_reflect_erased {
    ($($ty:ty),*) => {
        $(
            impl Reflect for $ty {
                fn to_json(&self) -> Result<JsonValue, Error> {
                    erased(self)
                }
            }
        )*
    };
}

impl_reflect_erased!(dyn Any, dyn Any + Send, dyn Any + Send + Sync);

macro_rules! try_downcast {
    ($any:ident; $($ty:ty),*) => {
        $(
            if let Some(value) = $any.downcast_ref::<$ty>() {
                return value.to_json();
            }
        )*
    };
}

/// Convert a runtime value into the [`JsonValue`] it represents.
///
/// ```rust
/// use std::collections::BTreeMap;
/// use jsondsl::{convert, JsonValue, Reflect};
///
/// let mut map: BTreeMap<&str, Box<dyn Reflect>> = BTreeMap::new();
/// map.insert("a", Box::new(10));
/// map.insert("b", Box::new(vec![10, 20]));
/// let value = convert(&map).unwrap();
/// assert_eq!(value.get("b"), Some(&JsonValue::from(vec![10, 20])));
/// ```
///
/// # Errors
///
/// Returns [`Error::UnsupportedValue`] for the first value, at any depth, whose type is not
/// recognised. Nothing is returned for the rest of the input in that case.
pub fn convert(value: &dyn Reflect) -> Result<JsonValue, Error> {
    value.to_json()
}

fn sequence<'a, T, I>(type_name: &'static str, items: I) -> Result<JsonValue, Error>
where
    T: Reflect + 'a,
    I: Iterator<Item = &'a T>,
{
    tracing::trace!(type_name, "Converting sequence");
    items
        .map(Reflect::to_json)
        .collect::<Result<Vec<_>, _>>()
        .map(JsonValue::from)
}

fn mapping<'a, K, V, I>(type_name: &'static str, entries: I) -> Result<JsonValue, Error>
where
    K: fmt::Display + 'a,
    V: Reflect + 'a,
    I: Iterator<Item = (&'a K, &'a V)>,
{
    tracing::trace!(type_name, "Converting mapping");
    let mut object = Object::new();
    for (key, value) in entries {
        object.insert(key.to_string().into_boxed_str(), value.to_json()?);
    }
    Ok(JsonValue::Object(object))
}

/// Runtime check of a type-erased value against the concrete types above.
fn erased(any: &dyn Any) -> Result<JsonValue, Error> {
    try_downcast!(any; Box<dyn Reflect>, Box<dyn Any>, Box<dyn Any + Send>,
        Box<dyn Any + Send + Sync>, JsonValue, Json, Object);
    try_downcast!(any; (), bool, u8, u16, u32, u64, usize, i8, i16, i32, i64, isize, f32, f64,
        Number, String, &'static str, Box<str>, char);
    try_downcast!(any; Vec<Box<dyn Reflect>>, Vec<Box<dyn Any>>, Option<Box<dyn Reflect>>,
        Option<Box<dyn Any>>);
    #[cfg(feature = "serde_json")]
    if let Some(value) = any.downcast_ref::<serde_json::Value>() {
        return value.to_json();
    }
    let type_name = type_name_of_val(any);
    tracing::debug!(type_name, "Rejected unsupported value");
    Err(Error::unsupported_value(type_name, format!("{any:?}")))
}
