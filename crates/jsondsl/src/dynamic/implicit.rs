use crate::{Error, Json, JsonValue, Object};

use super::{convert, Reflect};

/// Build a document from a single runtime value.
///
/// # Errors
///
/// Fails if `value` contains anything [`convert`] does not support.
pub fn from_value(value: &dyn Reflect) -> Result<Json, Error> {
    convert(value).map(Json::new)
}

/// Build an array document from a list of heterogeneous values.
///
/// The [`json_args!`](crate::json_args) macro builds the argument slice.
///
/// # Errors
///
/// Fails on the first argument [`convert`] does not support.
pub fn from_args(args: &[&dyn Reflect]) -> Result<Json, Error> {
    let items = args
        .iter()
        .map(|arg| convert(*arg))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Json::new(JsonValue::from(items)))
}

/// Build an object document from a block of key-value pairs.
///
/// ```rust
/// use jsondsl::{dynamic, JsonValue};
///
/// let json = dynamic::from_block(|o| {
///     o.pair("a", &10)?.pair("b", &vec![10, 20])?;
///     o.block("c", |c| {
///         c.pair("x", &1)?;
///         Ok(())
///     })?;
///     Ok(())
/// })?;
/// assert_eq!(json.value().get("a"), Some(&JsonValue::from(10)));
/// # Ok::<(), jsondsl::Error>(())
/// ```
///
/// # Errors
///
/// Propagates the first error returned by `build`.
pub fn from_block<F>(build: F) -> Result<Json, Error>
where
    F: FnOnce(&mut DynamicObjectBuilder) -> Result<(), Error>,
{
    block_value(build).map(Json::new)
}

fn block_value<F>(build: F) -> Result<JsonValue, Error>
where
    F: FnOnce(&mut DynamicObjectBuilder) -> Result<(), Error>,
{
    let mut builder = DynamicObjectBuilder {
        entries: Object::new(),
    };
    build(&mut builder)?;
    Ok(JsonValue::Object(builder.entries))
}

/// An object scope whose values are converted at runtime.
///
/// Writing the same key again replaces the earlier value.
#[derive(Debug)]
pub struct DynamicObjectBuilder {
    entries: Object,
}

impl DynamicObjectBuilder {
    /// Convert `value` and store it under `key`.
    ///
    /// # Errors
    ///
    /// Fails if `value` is not supported by [`convert`]; the entry is left untouched.
    pub fn pair(
        &mut self,
        key: impl Into<Box<str>>,
        value: &dyn Reflect,
    ) -> Result<&mut Self, Error> {
        let value = convert(value)?;
        self.entries.insert(key.into(), value);
        Ok(self)
    }

    pub fn pair_null(&mut self, key: impl Into<Box<str>>) -> &mut Self {
        self.entries.insert(key.into(), JsonValue::Null);
        self
    }

    /// Run a nested block and store the resulting object under `key`.
    ///
    /// # Errors
    ///
    /// Propagates the first error returned by `build`.
    pub fn block<F>(&mut self, key: impl Into<Box<str>>, build: F) -> Result<&mut Self, Error>
    where
        F: FnOnce(&mut DynamicObjectBuilder) -> Result<(), Error>,
    {
        let value = block_value(build)?;
        self.entries.insert(key.into(), value);
        Ok(self)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Build an array document from heterogeneous arguments.
///
/// ```rust
/// use jsondsl::{json_args, JsonValue};
///
/// let json = json_args![10, (), "hello"].unwrap();
/// assert_eq!(
///     json.into_value(),
///     JsonValue::from(vec![JsonValue::from(10), JsonValue::Null, JsonValue::from("hello")])
/// );
/// ```
#[macro_export]
macro_rules! json_args {
    ($($arg:expr),* $(,)?) => {
        $crate::dynamic::from_args(&[$(&$arg as &dyn $crate::Reflect),*])
    };
}
