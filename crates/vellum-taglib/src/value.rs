//! The value union stored in a tag library entry.

use std::fmt;
use std::sync::Arc;

use vellum_model::{
    CallError, DirectiveTag, Function, NativeFunction, TransformTag, Value, ValueKind,
};

use crate::combiner::CombinedValue;

/// A custom tag: the renderable half of a tag library entry.
///
/// The variant is fixed at registration time; every later invocation
/// dispatches on it directly.
#[derive(Clone)]
pub enum CustomTag {
    /// Renders a block, with parameters, loop variables and a nested body.
    Directive(Arc<dyn DirectiveTag>),
    /// Wraps the output sink, filtering nested content.
    Transform(Arc<dyn TransformTag>),
}

impl CustomTag {
    /// The directive implementation, if this tag is one.
    #[must_use]
    pub fn as_directive(&self) -> Option<&dyn DirectiveTag> {
        match self {
            Self::Directive(directive) => Some(directive.as_ref()),
            Self::Transform(_) => None,
        }
    }

    /// The transform implementation, if this tag is one.
    #[must_use]
    pub fn as_transform(&self) -> Option<&dyn TransformTag> {
        match self {
            Self::Transform(transform) => Some(transform.as_ref()),
            Self::Directive(_) => None,
        }
    }

    /// Human-readable kind, used in diagnostics.
    #[must_use]
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Directive(_) => "directive tag",
            Self::Transform(_) => "transform tag",
        }
    }
}

impl fmt::Debug for CustomTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Directive(_) => f.write_str("Directive(..)"),
            Self::Transform(_) => f.write_str("Transform(..)"),
        }
    }
}

/// A tag library function: the callable half of an entry.
#[derive(Clone)]
pub enum TagFunction {
    /// Fixed native calling convention, with type-error explanation.
    Native(Arc<dyn NativeFunction>),
    /// Generic calling convention.
    Generic(Arc<dyn Function>),
}

impl TagFunction {
    /// Invoke the function.
    ///
    /// # Errors
    ///
    /// Whatever the underlying function reports, unchanged.
    pub fn call(&self, args: &[Value]) -> Result<Value, CallError> {
        match self {
            Self::Native(function) => function.call(args),
            Self::Generic(function) => function.call(args),
        }
    }

    /// Explain a failed type expectation against this function.
    ///
    /// Delegates to the native function; generic functions carry no
    /// explanation capability, so `None`.
    #[must_use]
    pub fn explain_type_error(&self, expected: &[ValueKind]) -> Option<String> {
        match self {
            Self::Native(function) => function.explain_type_error(expected),
            Self::Generic(_) => None,
        }
    }

    /// Human-readable kind, used in diagnostics.
    #[must_use]
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Native(_) => "native function",
            Self::Generic(_) => "function",
        }
    }
}

impl fmt::Debug for TagFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Native(_) => f.write_str("Native(..)"),
            Self::Generic(_) => f.write_str("Generic(..)"),
        }
    }
}

/// A value registered in a tag library under one name.
#[derive(Clone, Debug)]
pub enum TagLibValue {
    /// A custom tag only.
    Tag(CustomTag),
    /// A function only.
    Function(TagFunction),
    /// A tag and a function merged by [`combine`](crate::combine).
    Combined(CombinedValue),
}

impl TagLibValue {
    /// The renderable capability, if the value has one.
    ///
    /// Sees through [`Combined`](Self::Combined) entries, so a merged value
    /// answers to the tag calling convention.
    #[must_use]
    pub fn as_tag(&self) -> Option<&CustomTag> {
        match self {
            Self::Tag(tag) => Some(tag),
            Self::Combined(combined) => Some(combined.tag()),
            Self::Function(_) => None,
        }
    }

    /// The callable capability, if the value has one.
    ///
    /// Sees through [`Combined`](Self::Combined) entries, so a merged value
    /// answers to the function calling convention.
    #[must_use]
    pub fn as_function(&self) -> Option<&TagFunction> {
        match self {
            Self::Function(function) => Some(function),
            Self::Combined(combined) => Some(combined.function()),
            Self::Tag(_) => None,
        }
    }

    /// Human-readable kind, used in diagnostics.
    #[must_use]
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Tag(tag) => tag.kind_name(),
            Self::Function(function) => function.kind_name(),
            Self::Combined(_) => "combined tag and function",
        }
    }
}

impl From<CustomTag> for TagLibValue {
    fn from(tag: CustomTag) -> Self {
        Self::Tag(tag)
    }
}

impl From<TagFunction> for TagLibValue {
    fn from(function: TagFunction) -> Self {
        Self::Function(function)
    }
}
