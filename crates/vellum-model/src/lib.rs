//! Template value model for Vellum.
//!
//! This crate defines the dynamic values a template works with and the
//! contracts host code implements to extend the engine:
//!
//! - [`Value`] / [`ValueKind`]: the dynamically typed template value and its
//!   runtime kind, with typed accessors that fail with [`TypeError`]
//! - [`Environment`]: per-render state (output sink plus variable scope)
//!   handed to executing tags
//! - [`DirectiveTag`] / [`TransformTag`]: the two renderable contracts —
//!   block rendering with a nested [`Body`], and output-sink filtering
//! - [`Function`] / [`NativeFunction`]: the two callable contracts — generic
//!   argument lists, and the fixed native convention checked by
//!   [`check_args`]
//!
//! Higher layers (the tag-library integration in `vellum-taglib`) build on
//! these contracts without adding error semantics of their own: everything a
//! delegate raises ([`TypeError`], [`CallError`], [`RenderError`]) propagates
//! unchanged.
//!
//! # Example
//!
//! ```
//! use std::collections::BTreeMap;
//! use vellum_model::Value;
//!
//! let mut fields = BTreeMap::new();
//! fields.insert("name".to_owned(), Value::from("ada"));
//! let user = Value::Hash(fields);
//!
//! assert_eq!(user.get("name").unwrap(), Some(&Value::from("ada")));
//!
//! // Accessing a non-hash value as a hash yields the typed diagnostic.
//! let err = Value::from(1.0).as_hash().unwrap_err();
//! assert_eq!(err.to_string(), "expected hash value here, found number");
//! ```

mod directive;
mod environment;
mod error;
mod function;
mod params;
mod transform;
mod value;

pub use directive::{Body, DirectiveTag};
pub use environment::Environment;
pub use error::{CallError, RenderError, TypeError};
pub use function::{Function, NativeFunction, check_args};
pub use params::Params;
pub use transform::TransformTag;
pub use value::{Value, ValueKind};
