//! Tag library integration for Vellum.
//!
//! Template markup has no separate namespaces for custom tags and functions:
//! one name resolves to one value. Host tag libraries, however, may register
//! a tag implementation and a function implementation under the same name.
//! This crate closes that gap:
//!
//! - [`TagLibValue`] is the union stored in a library entry: a custom tag
//!   ([`CustomTag`]), a function ([`TagFunction`]), or both merged
//! - [`combine`] merges an eligible tag and function into a single value
//!   answering to both calling conventions, with
//!   [`can_combine_as_custom_tag`] / [`can_combine_as_function`] screening
//!   candidates
//! - [`TagLibrary`] is the name-keyed registry whose builder detects the
//!   collision and performs the merge
//!
//! The merged value is a pure routing layer: rendering goes to the tag,
//! invocation to the function, and every delegate error propagates
//! unchanged.
//!
//! # Example
//!
//! ```
//! use vellum_model::{
//!     Body, CallError, DirectiveTag, Environment, Function, Params, RenderError, Value,
//! };
//! use vellum_taglib::TagLibrary;
//!
//! struct GreetTag;
//!
//! impl DirectiveTag for GreetTag {
//!     fn execute(
//!         &self,
//!         env: &mut Environment<'_>,
//!         params: &Params,
//!         _loop_vars: &mut [Value],
//!         _body: Option<&mut dyn Body>,
//!     ) -> Result<(), RenderError> {
//!         let name = params.require("name")?.as_str()?;
//!         env.write(&format!("Hello, {name}!"))
//!     }
//! }
//!
//! struct GreetFn;
//!
//! impl Function for GreetFn {
//!     fn call(&self, args: &[Value]) -> Result<Value, CallError> {
//!         let name = args.first().map_or(Ok("world"), Value::as_str)?;
//!         Ok(Value::from(format!("Hello, {name}!")))
//!     }
//! }
//!
//! let library = TagLibrary::builder()
//!     .with_directive("greet", GreetTag)
//!     .with_function("greet", GreetFn)
//!     .build();
//!
//! // One name, both calling conventions.
//! let value = library.get("greet").unwrap();
//! assert!(value.as_tag().is_some());
//!
//! let greeting = value
//!     .as_function()
//!     .unwrap()
//!     .call(&[Value::from("ada")])
//!     .unwrap();
//! assert_eq!(greeting, Value::from("Hello, ada!"));
//! ```

mod combiner;
mod library;
mod value;

pub use combiner::{CombinedValue, can_combine_as_custom_tag, can_combine_as_function, combine};
pub use library::{TagLibrary, TagLibraryBuilder};
pub use value::{CustomTag, TagFunction, TagLibValue};
