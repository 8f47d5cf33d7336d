//! # jsondsl
//!
//! Immutable JSON values and scoped builders that construct them.
//!
//! The explicit builders mirror the shape of the document they produce:
//!
//! ```rust
//! use jsondsl::{construct, Builder, JsonValue};
//!
//! let json = construct(|b| {
//!     b.array(|a| {
//!         a.number(10).null().string("hello");
//!     });
//! });
//! assert_eq!(
//!     json.into_value(),
//!     JsonValue::from(vec![JsonValue::from(10), JsonValue::Null, JsonValue::from("hello")])
//! );
//! ```
//!
//! Values that are only known at runtime go through the [`dynamic`] converter instead.
mod builder;
pub mod dynamic;
mod error;
mod impls;
mod value;

pub use builder::{
    construct, construct_array, construct_object, ArrayBuilder, Builder, ObjectBuilder,
    RootBuilder,
};
pub use dynamic::{convert, Reflect};
pub use error::Error;
pub use value::{Json, JsonValue, Kind, Number, Object, ObjectIter};
