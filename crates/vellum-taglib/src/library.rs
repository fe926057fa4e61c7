//! Name-keyed tag library registry.

use std::collections::HashMap;
use std::sync::Arc;

use vellum_model::{DirectiveTag, Function, NativeFunction, TransformTag};

use crate::combiner::{can_combine_as_custom_tag, can_combine_as_function, combine};
use crate::value::{CustomTag, TagFunction, TagLibValue};

/// An immutable, name-keyed collection of tag library values.
///
/// Built once through [`TagLibraryBuilder`]; collisions between a custom tag
/// and a function registered under the same name are resolved at build time
/// by merging the pair, so lookups always resolve one name to one value.
///
/// # Example
///
/// ```
/// use vellum_model::{CallError, Function, Value};
/// use vellum_taglib::TagLibrary;
///
/// struct Upper;
///
/// impl Function for Upper {
///     fn call(&self, args: &[Value]) -> Result<Value, CallError> {
///         Ok(Value::from(args[0].as_str()?.to_uppercase()))
///     }
/// }
///
/// let library = TagLibrary::builder().with_function("upper", Upper).build();
///
/// let value = library.get("upper").unwrap();
/// let result = value.as_function().unwrap().call(&[Value::from("hi")]).unwrap();
/// assert_eq!(result, Value::from("HI"));
/// ```
#[derive(Debug, Default)]
pub struct TagLibrary {
    values: HashMap<String, TagLibValue>,
}

impl TagLibrary {
    /// Start building a library.
    #[must_use]
    pub fn builder() -> TagLibraryBuilder {
        TagLibraryBuilder::default()
    }

    /// Look up a value by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&TagLibValue> {
        self.values.get(name)
    }

    /// Registered names, in no particular order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    /// Number of registered names.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True when nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Builder for [`TagLibrary`].
///
/// Registration handles name collisions as they arrive:
///
/// - a function registered over an eligible tag (or a tag over an eligible
///   function) merges the pair into a dual-role value — registration order
///   does not matter;
/// - a same-capability duplicate, or any registration over an already merged
///   entry, replaces the entry wholesale. Merged entries are never partially
///   reused.
#[derive(Debug, Default)]
pub struct TagLibraryBuilder {
    values: HashMap<String, TagLibValue>,
}

impl TagLibraryBuilder {
    /// Register a directive tag.
    #[must_use]
    pub fn with_directive(
        mut self,
        name: impl Into<String>,
        directive: impl DirectiveTag + 'static,
    ) -> Self {
        self.insert_tag(name.into(), CustomTag::Directive(Arc::new(directive)));
        self
    }

    /// Register a transform tag.
    #[must_use]
    pub fn with_transform(
        mut self,
        name: impl Into<String>,
        transform: impl TransformTag + 'static,
    ) -> Self {
        self.insert_tag(name.into(), CustomTag::Transform(Arc::new(transform)));
        self
    }

    /// Register a generic function.
    #[must_use]
    pub fn with_function(
        mut self,
        name: impl Into<String>,
        function: impl Function + 'static,
    ) -> Self {
        self.insert_function(name.into(), TagFunction::Generic(Arc::new(function)));
        self
    }

    /// Register a native function.
    #[must_use]
    pub fn with_native_function(
        mut self,
        name: impl Into<String>,
        function: impl NativeFunction + 'static,
    ) -> Self {
        self.insert_function(name.into(), TagFunction::Native(Arc::new(function)));
        self
    }

    /// Finish building.
    #[must_use]
    pub fn build(self) -> TagLibrary {
        TagLibrary {
            values: self.values,
        }
    }

    fn insert_tag(&mut self, name: String, tag: CustomTag) {
        match self.values.remove(&name) {
            Some(existing) if can_combine_as_function(&existing) => {
                tracing::debug!(
                    name = %name,
                    "combining custom tag with function registered under the same name"
                );
                let TagLibValue::Function(function) = existing else {
                    unreachable!("eligibility check guarantees a function value");
                };
                self.values
                    .insert(name, combine(TagLibValue::Tag(tag), function));
            }
            Some(existing) => {
                tracing::warn!(
                    name = %name,
                    replaced = existing.kind_name(),
                    "replacing previously registered value"
                );
                self.values.insert(name, TagLibValue::Tag(tag));
            }
            None => {
                self.values.insert(name, TagLibValue::Tag(tag));
            }
        }
    }

    fn insert_function(&mut self, name: String, function: TagFunction) {
        match self.values.remove(&name) {
            Some(existing) if can_combine_as_custom_tag(&existing) => {
                tracing::debug!(
                    name = %name,
                    "combining function with custom tag registered under the same name"
                );
                self.values.insert(name, combine(existing, function));
            }
            Some(existing) => {
                tracing::warn!(
                    name = %name,
                    replaced = existing.kind_name(),
                    "replacing previously registered value"
                );
                self.values.insert(name, TagLibValue::Function(function));
            }
            None => {
                self.values.insert(name, TagLibValue::Function(function));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use pretty_assertions::assert_eq;
    use vellum_model::{
        Body, CallError, Environment, Params, RenderError, Value, ValueKind, check_args,
    };

    use super::*;

    #[derive(Default)]
    struct CountingDirective {
        calls: AtomicUsize,
    }

    impl DirectiveTag for CountingDirective {
        fn execute(
            &self,
            env: &mut Environment<'_>,
            _params: &Params,
            _loop_vars: &mut [Value],
            _body: Option<&mut dyn Body>,
        ) -> Result<(), RenderError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            env.write("rendered")
        }
    }

    #[derive(Default)]
    struct CountingFunction {
        calls: AtomicUsize,
    }

    impl Function for CountingFunction {
        fn call(&self, _args: &[Value]) -> Result<Value, CallError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(Value::from("called"))
        }
    }

    struct Length;

    impl Function for Length {
        fn call(&self, args: &[Value]) -> Result<Value, CallError> {
            check_args(self.signature(), args)?;
            Ok(Value::from(args[0].as_str()?.len() as f64))
        }
    }

    impl NativeFunction for Length {
        fn signature(&self) -> &[ValueKind] {
            &[ValueKind::Str]
        }
    }

    #[test]
    fn test_separate_names_stay_separate() {
        let library = TagLibrary::builder()
            .with_directive("greet", CountingDirective::default())
            .with_function("upper", CountingFunction::default())
            .build();

        assert_eq!(library.len(), 2);
        assert!(matches!(library.get("greet"), Some(TagLibValue::Tag(_))));
        assert!(matches!(
            library.get("upper"),
            Some(TagLibValue::Function(_))
        ));
        assert!(library.get("missing").is_none());
    }

    #[test]
    fn test_tag_then_function_merges() {
        let library = TagLibrary::builder()
            .with_directive("greet", CountingDirective::default())
            .with_function("greet", CountingFunction::default())
            .build();

        assert_eq!(library.len(), 1);
        let value = library.get("greet").unwrap();
        assert!(matches!(value, TagLibValue::Combined(_)));
        assert!(value.as_tag().is_some());
        assert!(value.as_function().is_some());
    }

    #[test]
    fn test_function_then_tag_merges() {
        let library = TagLibrary::builder()
            .with_function("greet", CountingFunction::default())
            .with_directive("greet", CountingDirective::default())
            .build();

        let value = library.get("greet").unwrap();
        assert!(matches!(value, TagLibValue::Combined(_)));
        assert!(value.as_tag().is_some());
        assert!(value.as_function().is_some());
    }

    #[test]
    fn test_merged_entry_dispatches_both_ways() {
        let library = TagLibrary::builder()
            .with_transform("upper", PassThrough)
            .with_native_function("upper", Length)
            .build();

        let value = library.get("upper").unwrap();

        let result = value
            .as_function()
            .unwrap()
            .call(&[Value::from("four")])
            .unwrap();
        assert_eq!(result, Value::Number(4.0));

        assert!(value.as_tag().unwrap().as_transform().is_some());
    }

    struct PassThrough;

    impl TransformTag for PassThrough {
        fn wrap<'w>(
            &self,
            out: Box<dyn std::io::Write + 'w>,
            _params: &Params,
        ) -> Result<Box<dyn std::io::Write + 'w>, RenderError> {
            Ok(out)
        }
    }

    #[test]
    fn test_duplicate_function_replaces() {
        let library = TagLibrary::builder()
            .with_function("f", CountingFunction::default())
            .with_native_function("f", Length)
            .build();

        assert_eq!(library.len(), 1);
        let value = library.get("f").unwrap();
        assert_eq!(value.kind_name(), "native function");

        // The replacement is the value that answers calls.
        let err = value.as_function().unwrap().call(&[]).unwrap_err();
        assert!(matches!(err, CallError::ArityMismatch { .. }));
    }

    #[test]
    fn test_duplicate_tag_replaces() {
        let library = TagLibrary::builder()
            .with_directive("t", CountingDirective::default())
            .with_transform("t", PassThrough)
            .build();

        let value = library.get("t").unwrap();
        assert_eq!(value.kind_name(), "transform tag");
    }

    #[test]
    fn test_registration_over_merged_entry_replaces_wholesale() {
        let library = TagLibrary::builder()
            .with_directive("x", CountingDirective::default())
            .with_function("x", CountingFunction::default())
            .with_function("x", CountingFunction::default())
            .build();

        // The merged entry is gone; only the newest function remains.
        let value = library.get("x").unwrap();
        assert!(matches!(value, TagLibValue::Function(_)));
        assert!(value.as_tag().is_none());
    }

    #[test]
    fn test_names_and_emptiness() {
        let empty = TagLibrary::builder().build();
        assert!(empty.is_empty());

        let library = TagLibrary::builder()
            .with_function("b", CountingFunction::default())
            .with_function("a", CountingFunction::default())
            .build();

        let mut names: Vec<&str> = library.names().collect();
        names.sort_unstable();
        assert_eq!(names, vec!["a", "b"]);
        assert!(!library.is_empty());
    }
}
