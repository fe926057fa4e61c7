//! Merging a custom tag and a function registered under one name.
//!
//! When a tag library registers a custom tag and a function under the same
//! name, a single value must answer to both calling conventions. [`combine`]
//! builds that value; the two eligibility predicates tell the registry when
//! it may call it.

use vellum_model::{CallError, Value, ValueKind};

use crate::value::{CustomTag, TagFunction, TagLibValue};

/// A custom tag and a function merged under one name.
///
/// Owns exactly one [`CustomTag`] and one [`TagFunction`], fixed at
/// construction, and routes each capability to the sub-value that implements
/// it: rendering to the tag, invocation to the function. It adds no error
/// semantics of its own — whatever a delegate reports reaches the caller
/// unchanged.
///
/// Combined values are created only by [`combine`] and never feed back into
/// another combination: neither eligibility predicate accepts them, and the
/// halves cannot be extracted as registrable values.
#[derive(Clone, Debug)]
pub struct CombinedValue {
    tag: CustomTag,
    function: TagFunction,
}

impl CombinedValue {
    /// The renderable half.
    #[must_use]
    pub fn tag(&self) -> &CustomTag {
        &self.tag
    }

    /// The callable half.
    #[must_use]
    pub fn function(&self) -> &TagFunction {
        &self.function
    }

    /// Invoke the function half.
    ///
    /// # Errors
    ///
    /// Whatever the underlying function reports, unchanged.
    pub fn call(&self, args: &[Value]) -> Result<Value, CallError> {
        self.function.call(args)
    }

    /// Explain a failed type expectation against the function half.
    ///
    /// `Some` only when the function uses the native calling convention.
    #[must_use]
    pub fn explain_type_error(&self, expected: &[ValueKind]) -> Option<String> {
        self.function.explain_type_error(expected)
    }
}

/// Merge a custom tag and a function into one dual-role value.
///
/// `tag` must be a [`TagLibValue::Tag`]; registries screen candidates with
/// [`can_combine_as_custom_tag`] and [`can_combine_as_function`] before
/// calling this.
///
/// # Panics
///
/// Panics if `tag` is not a custom tag value. That indicates a bug in the
/// calling registry logic, never bad user input; the message names the
/// offending value's kind.
#[must_use]
pub fn combine(tag: TagLibValue, function: TagFunction) -> TagLibValue {
    match tag {
        TagLibValue::Tag(tag) => TagLibValue::Combined(CombinedValue { tag, function }),
        other => panic!("cannot combine {} as a custom tag", other.kind_name()),
    }
}

/// Tells if `value` can be the custom-tag side of [`combine`].
///
/// True only for plain tag values — never for a value produced by a previous
/// combination.
#[must_use]
pub fn can_combine_as_custom_tag(value: &TagLibValue) -> bool {
    matches!(value, TagLibValue::Tag(_))
}

/// Tells if `value` can be the function side of [`combine`].
///
/// True only for plain function values — never for a value produced by a
/// previous combination.
#[must_use]
pub fn can_combine_as_function(value: &TagLibValue) -> bool {
    matches!(value, TagLibValue::Function(_))
}
