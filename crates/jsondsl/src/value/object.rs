use ahash::RandomState;
use indexmap::IndexMap;

use super::JsonValue;

type Entries = IndexMap<Box<str>, JsonValue, RandomState>;

/// An immutable mapping from keys to JSON values.
///
/// Entries are enumerated in the order their keys were first written. That order carries no
/// meaning: two objects with the same entries are equal regardless of it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Object {
    entries: Entries,
}

impl Object {
    #[must_use]
    pub fn new() -> Object {
        Object::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&JsonValue> {
        self.entries.get(key)
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.entries.iter(),
        }
    }

    pub fn keys(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.entries.keys().map(|key| &**key)
    }

    pub fn values(&self) -> impl ExactSizeIterator<Item = &JsonValue> + '_ {
        self.entries.values()
    }

    /// Store `value` under `key`, replacing any earlier value for the same key.
    ///
    /// Only builders reach this; a finished `Object` is never mutated.
    pub(crate) fn insert(&mut self, key: Box<str>, value: JsonValue) {
        self.entries.insert(key, value);
    }

    /// Move the entries out in enumeration order.
    #[cfg_attr(not(feature = "serde_json"), allow(dead_code))]
    pub(crate) fn into_entries(self) -> impl ExactSizeIterator<Item = (Box<str>, JsonValue)> {
        self.entries.into_iter()
    }
}

impl<K, V> FromIterator<(K, V)> for Object
where
    K: Into<Box<str>>,
    V: Into<JsonValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut object = Object::new();
        for (key, value) in iter {
            object.insert(key.into(), value.into());
        }
        object
    }
}

impl<'a> IntoIterator for &'a Object {
    type Item = (&'a str, &'a JsonValue);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the entries of an [`Object`], created by [`Object::iter`].
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    inner: indexmap::map::Iter<'a, Box<str>, JsonValue>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, &'a JsonValue);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(key, value)| (&**key, value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Iter<'_> {}

#[cfg(test)]
mod tests {
    use super::Object;
    use crate::JsonValue;

    #[test]
    fn last_write_wins() {
        let object: Object = [("a", 1), ("b", 2), ("a", 3)].into_iter().collect();
        assert_eq!(object.len(), 2);
        assert_eq!(object.get("a"), Some(&JsonValue::from(3)));
        // The first write fixes the position.
        assert_eq!(object.keys().collect::<Vec<_>>(), ["a", "b"]);
    }

    #[test]
    fn equality_ignores_order() {
        let left: Object = [("a", 1), ("b", 2)].into_iter().collect();
        let right: Object = [("b", 2), ("a", 1)].into_iter().collect();
        assert_eq!(left, right);
    }

    #[test]
    fn lookup() {
        let object: Object = [("x", true)].into_iter().collect();
        assert!(object.contains_key("x"));
        assert!(!object.contains_key("y"));
        assert_eq!(object.get("y"), None);
        assert!(!object.is_empty());
        assert!(Object::new().is_empty());
        assert_eq!(
            object.iter().collect::<Vec<_>>(),
            [("x", &JsonValue::Bool(true))]
        );
    }

    #[test]
    fn borrowed_iteration_matches_iter() {
        let object: Object = [("a", 1), ("b", 2)].into_iter().collect();
        let mut keys = Vec::new();
        for (key, value) in &object {
            keys.push(key);
            assert_eq!(object.get(key), Some(value));
        }
        assert_eq!(keys, ["a", "b"]);
        assert_eq!(object.iter().len(), 2);
        assert!((&object).into_iter().eq(object.iter()));
    }

    #[test]
    fn into_entries_moves_values_out() {
        let object: Object = [("a", 1), ("b", 2), ("a", 3)].into_iter().collect();
        let entries: Vec<(Box<str>, JsonValue)> = object.into_entries().collect();
        let expected: Vec<(Box<str>, JsonValue)> =
            vec![("a".into(), JsonValue::from(3)), ("b".into(), JsonValue::from(2))];
        assert_eq!(entries, expected);
    }
}
