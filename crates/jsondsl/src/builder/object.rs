use crate::{JsonValue, Object};

use super::{construct_array, construct_object, ArrayBuilder};

/// An object scope. Values are associated with keys through [`ObjectBuilder::pair`] and its
/// variants; writing the same key again replaces the earlier value.
#[derive(Debug)]
pub struct ObjectBuilder {
    entries: Object,
}

impl ObjectBuilder {
    pub(super) fn new() -> ObjectBuilder {
        ObjectBuilder {
            entries: Object::new(),
        }
    }

    /// Associate `value` with `key`.
    ///
    /// `value` may be a scalar, an `Option` (where `None` stores `null`) or any finished
    /// [`JsonValue`], such as the result of [`construct_array`](crate::construct_array).
    pub fn pair(&mut self, key: impl Into<Box<str>>, value: impl Into<JsonValue>) -> &mut Self {
        self.entries.insert(key.into(), value.into());
        self
    }

    pub fn pair_null(&mut self, key: impl Into<Box<str>>) -> &mut Self {
        self.pair(key, JsonValue::Null)
    }

    /// Open a nested array scope and store the array under `key` once `build` returns.
    pub fn pair_array<F>(&mut self, key: impl Into<Box<str>>, build: F) -> &mut Self
    where
        F: FnOnce(&mut ArrayBuilder),
    {
        self.pair(key, construct_array(build))
    }

    /// Open a nested object scope and store the object under `key` once `build` returns.
    pub fn pair_object<F>(&mut self, key: impl Into<Box<str>>, build: F) -> &mut Self
    where
        F: FnOnce(&mut ObjectBuilder),
    {
        self.pair(key, construct_object(build))
    }

    /// Number of distinct keys written so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub(super) fn finish(self) -> JsonValue {
        JsonValue::Object(self.entries)
    }
}
