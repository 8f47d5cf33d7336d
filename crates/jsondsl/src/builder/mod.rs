//! Scoped builders for [`JsonValue`] trees.
//!
//! Every entry point owns a fresh builder, hands it to the caller's closure and closes it once
//! the closure returns. A nested scope is just another entry point call whose result is emitted
//! into the enclosing builder, so a half-built child is never visible to its parent.
//!
//! ```rust
//! use jsondsl::{construct, Builder, JsonValue};
//!
//! let document = construct(|b| {
//!     b.object(|o| {
//!         o.pair("name", "A");
//!         o.pair_array("tags", |a| {
//!             a.string("x").string("y");
//!         });
//!     });
//! });
//! assert_eq!(document.value().get("name"), Some(&JsonValue::from("A")));
//! ```
mod object;

pub use object::ObjectBuilder;

use crate::{Json, JsonValue, Number};

/// Operations shared by the root and array scopes.
///
/// Implementors only decide where an emitted value goes; every other method is expressed in
/// terms of [`Builder::emit`].
pub trait Builder {
    /// Deliver a finished value to this scope's sink.
    fn emit(&mut self, value: JsonValue);

    /// Emit anything convertible into a [`JsonValue`], including values built elsewhere.
    fn value(&mut self, value: impl Into<JsonValue>) -> &mut Self {
        self.emit(value.into());
        self
    }

    fn null(&mut self) -> &mut Self {
        self.emit(JsonValue::Null);
        self
    }

    fn number(&mut self, value: impl Into<Number>) -> &mut Self {
        self.emit(JsonValue::Number(value.into()));
        self
    }

    fn bool(&mut self, value: bool) -> &mut Self {
        self.emit(JsonValue::Bool(value));
        self
    }

    fn string(&mut self, value: impl Into<Box<str>>) -> &mut Self {
        self.emit(JsonValue::String(value.into()));
        self
    }

    /// Open a nested array scope and emit the array once `build` returns.
    fn array<F>(&mut self, build: F) -> &mut Self
    where
        F: FnOnce(&mut ArrayBuilder),
    {
        self.emit(construct_array(build));
        self
    }

    /// Open a nested object scope and emit the object once `build` returns.
    fn object<F>(&mut self, build: F) -> &mut Self
    where
        F: FnOnce(&mut ObjectBuilder),
    {
        self.emit(construct_object(build));
        self
    }
}

/// The top-level scope. It holds at most one value and every emit replaces it.
#[derive(Debug)]
pub struct RootBuilder {
    slot: Option<JsonValue>,
}

impl RootBuilder {
    fn new() -> RootBuilder {
        RootBuilder { slot: None }
    }

    /// An empty root produces `null`.
    fn finish(self) -> Json {
        Json::new(self.slot.unwrap_or(JsonValue::Null))
    }
}

impl Builder for RootBuilder {
    fn emit(&mut self, value: JsonValue) {
        self.slot = Some(value);
    }
}

/// An array scope. Emitted values are appended in call order.
#[derive(Debug)]
pub struct ArrayBuilder {
    items: Vec<JsonValue>,
}

impl ArrayBuilder {
    fn new() -> ArrayBuilder {
        ArrayBuilder { items: Vec::new() }
    }

    /// Number of elements emitted so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Emit every item of `values` in iteration order.
    pub fn extend<I>(&mut self, values: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Into<JsonValue>,
    {
        self.items.extend(values.into_iter().map(Into::into));
        self
    }

    fn finish(self) -> JsonValue {
        JsonValue::Array(self.items.into_boxed_slice())
    }
}

impl Builder for ArrayBuilder {
    fn emit(&mut self, value: JsonValue) {
        self.items.push(value);
    }
}

/// Build a complete document.
///
/// If `build` emits several values only the last one is kept; if it emits nothing the document
/// is `null`.
pub fn construct<F>(build: F) -> Json
where
    F: FnOnce(&mut RootBuilder),
{
    let mut builder = RootBuilder::new();
    build(&mut builder);
    builder.finish()
}

/// Build a standalone array value.
pub fn construct_array<F>(build: F) -> JsonValue
where
    F: FnOnce(&mut ArrayBuilder),
{
    let mut builder = ArrayBuilder::new();
    build(&mut builder);
    builder.finish()
}

/// Build a standalone object value.
pub fn construct_object<F>(build: F) -> JsonValue
where
    F: FnOnce(&mut ObjectBuilder),
{
    let mut builder = ObjectBuilder::new();
    build(&mut builder);
    builder.finish()
}

#[cfg(test)]
mod tests {
    use super::{construct, construct_array, construct_object, Builder};
    use crate::{Json, JsonValue, Number};
    use test_case::test_case;

    #[test_case(construct(|b| { b.null(); }), JsonValue::Null; "null")]
    #[test_case(construct(|b| { b.number(10); }), JsonValue::Number(Number::PositiveInteger(10)); "integer")]
    #[test_case(construct(|b| { b.number(-2.5); }), JsonValue::Number(Number::Float(-2.5)); "float")]
    #[test_case(construct(|b| { b.bool(false); }), JsonValue::Bool(false); "bool")]
    #[test_case(construct(|b| { b.string("hello"); }), JsonValue::String("hello".into()); "string")]
    #[test_case(construct(|b| { b.value(Some(3)); }), JsonValue::from(3); "value")]
    fn scalars(json: Json, expected: JsonValue) {
        assert_eq!(json, Json::new(expected));
    }

    #[test]
    fn empty_root_is_null() {
        assert_eq!(construct(|_| {}), Json::new(JsonValue::Null));
    }

    #[test]
    fn root_keeps_last_emit() {
        let json = construct(|b| {
            b.number(1).string("two");
            b.array(|a| {
                a.number(3);
            });
        });
        assert_eq!(json.into_value(), JsonValue::from(vec![3]));
    }

    #[test]
    fn array_preserves_order_and_duplicates() {
        let value = construct_array(|a| {
            a.number(1).number(1).null().number(2).number(1);
        });
        assert_eq!(
            value,
            JsonValue::Array(Box::new([
                1.into(),
                1.into(),
                JsonValue::Null,
                2.into(),
                1.into()
            ]))
        );
    }

    #[test]
    fn empty_array() {
        assert_eq!(construct_array(|_| {}), JsonValue::Array(Vec::new().into_boxed_slice()));
    }

    #[test]
    fn array_extend() {
        let value = construct_array(|a| {
            a.extend(["x", "y"]).bool(true);
            assert_eq!(a.len(), 3);
            assert!(!a.is_empty());
        });
        assert_eq!(
            value,
            JsonValue::from(vec![
                JsonValue::from("x"),
                JsonValue::from("y"),
                JsonValue::from(true)
            ])
        );
    }

    #[test]
    fn siblings_do_not_share_state() {
        let value = construct_array(|a| {
            a.array(|inner| {
                inner.number(1);
            });
            a.array(|inner| {
                assert!(inner.is_empty());
                inner.number(2);
            });
            a.object(|o| {
                o.pair("k", 1);
            });
            a.object(|o| {
                assert!(o.is_empty());
            });
        });
        assert_eq!(
            value,
            JsonValue::from(vec![
                JsonValue::from(vec![1]),
                JsonValue::from(vec![2]),
                construct_object(|o| {
                    o.pair("k", 1);
                }),
                construct_object(|_| {}),
            ])
        );
    }

    #[test]
    fn deep_nesting() {
        fn nest(depth: usize) -> JsonValue {
            if depth == 0 {
                return JsonValue::from("leaf");
            }
            construct_array(|a| {
                a.object(|o| {
                    o.pair("depth", depth);
                    o.pair("child", nest(depth - 1));
                });
            })
        }

        let mut current = &nest(64);
        for depth in (1..=64).rev() {
            let object = current.get_index(0).expect("Array with one object");
            assert_eq!(object.get("depth"), Some(&JsonValue::from(depth)));
            current = object.get("child").expect("Nested child");
        }
        assert_eq!(current, &JsonValue::from("leaf"));
    }
}
