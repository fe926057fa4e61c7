//! Error types for the value model.
//!
//! [`TypeError`] is the rich unexpected-type diagnostic with optional blame
//! and tips. [`CallError`] and [`RenderError`] cover function invocation and
//! rendering; both absorb `TypeError` via `From` so `?` composes across the
//! layers.

use std::fmt;

use thiserror::Error;

use crate::value::ValueKind;

/// A value had the wrong runtime type for the place it was used.
///
/// Carries the kinds that would have been accepted, the kind actually found,
/// and optionally the source expression to blame and remediation tips.
///
/// # Example
///
/// ```
/// use vellum_model::{TypeError, ValueKind};
///
/// let err = TypeError::non_hash(ValueKind::Str)
///     .with_blamed("user.profile")
///     .with_tip("use ?parse to turn a string into structured data");
///
/// assert_eq!(
///     err.to_string(),
///     "expected hash value here, found string (from `user.profile`); \
///      tip: use ?parse to turn a string into structured data"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeError {
    /// Kinds that would have been accepted here.
    pub expected: Vec<ValueKind>,
    /// Kind actually found.
    pub actual: ValueKind,
    blamed: Option<String>,
    tips: Vec<String>,
}

impl TypeError {
    /// Create a new type error.
    #[must_use]
    pub fn new(expected: impl Into<Vec<ValueKind>>, actual: ValueKind) -> Self {
        Self {
            expected: expected.into(),
            actual,
            blamed: None,
            tips: Vec::new(),
        }
    }

    /// A hash value was expected, but `actual` was found.
    #[must_use]
    pub fn non_hash(actual: ValueKind) -> Self {
        Self::new([ValueKind::Hash], actual)
    }

    /// Attach the source expression the offending value came from.
    #[must_use]
    pub fn with_blamed(mut self, blamed: impl Into<String>) -> Self {
        self.blamed = Some(blamed.into());
        self
    }

    /// Attach a remediation tip.
    #[must_use]
    pub fn with_tip(mut self, tip: impl Into<String>) -> Self {
        self.tips.push(tip.into());
        self
    }

    /// The blamed source expression, if any.
    #[must_use]
    pub fn blamed(&self) -> Option<&str> {
        self.blamed.as_deref()
    }

    /// Remediation tips attached to this error.
    #[must_use]
    pub fn tips(&self) -> &[String] {
        &self.tips
    }
}

impl fmt::Display for TypeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("expected ")?;
        for (index, kind) in self.expected.iter().enumerate() {
            if index > 0 {
                f.write_str(" or ")?;
            }
            write!(f, "{kind}")?;
        }
        write!(f, " value here, found {}", self.actual)?;

        if let Some(blamed) = &self.blamed {
            write!(f, " (from `{blamed}`)")?;
        }

        for tip in &self.tips {
            write!(f, "; tip: {tip}")?;
        }

        Ok(())
    }
}

impl std::error::Error for TypeError {}

/// Function invocation failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CallError {
    /// The argument list length did not match the calling convention.
    #[error("wrong number of arguments: expected {expected}, got {got}")]
    ArityMismatch {
        /// Arguments the function accepts.
        expected: usize,
        /// Arguments actually passed.
        got: usize,
    },

    /// An argument (or the function value itself) had the wrong type.
    #[error("{0}")]
    Type(#[from] TypeError),

    /// Any other failure reported by the function.
    #[error("{0}")]
    Other(String),
}

/// Rendering failure from a directive or transform.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Writing to the output sink failed.
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// A value had the wrong type during rendering.
    #[error("{0}")]
    Type(#[from] TypeError),

    /// A function invoked during rendering failed.
    #[error("{0}")]
    Call(#[from] CallError),

    /// Any other failure reported by the tag.
    #[error("{0}")]
    Other(String),
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_type_error_display_simple() {
        let err = TypeError::new([ValueKind::Bool], ValueKind::Str);
        assert_eq!(err.to_string(), "expected boolean value here, found string");
    }

    #[test]
    fn test_type_error_display_multiple_expected() {
        let err = TypeError::new([ValueKind::Number, ValueKind::Str], ValueKind::List);
        assert_eq!(
            err.to_string(),
            "expected number or string value here, found list"
        );
    }

    #[test]
    fn test_type_error_display_with_blamed() {
        let err = TypeError::non_hash(ValueKind::Number).with_blamed("user.age");
        assert_eq!(
            err.to_string(),
            "expected hash value here, found number (from `user.age`)"
        );
    }

    #[test]
    fn test_type_error_display_with_tips() {
        let err = TypeError::non_hash(ValueKind::Null)
            .with_tip("the variable may be unset")
            .with_tip("check the data model");
        assert_eq!(
            err.to_string(),
            "expected hash value here, found null; tip: the variable may be unset; \
             tip: check the data model"
        );
    }

    #[test]
    fn test_type_error_accessors() {
        let err = TypeError::non_hash(ValueKind::Str)
            .with_blamed("profile")
            .with_tip("a tip");

        assert_eq!(err.expected, vec![ValueKind::Hash]);
        assert_eq!(err.actual, ValueKind::Str);
        assert_eq!(err.blamed(), Some("profile"));
        assert_eq!(err.tips(), &["a tip".to_owned()]);
    }

    #[test]
    fn test_call_error_arity_display() {
        let err = CallError::ArityMismatch {
            expected: 2,
            got: 3,
        };
        assert_eq!(
            err.to_string(),
            "wrong number of arguments: expected 2, got 3"
        );
    }

    #[test]
    fn test_call_error_from_type_error() {
        let err: CallError = TypeError::non_hash(ValueKind::Bool).into();
        assert!(matches!(err, CallError::Type(_)));
    }

    #[test]
    fn test_render_error_from_io() {
        let io = std::io::Error::other("sink closed");
        let err: RenderError = io.into();
        assert_eq!(err.to_string(), "sink closed");
    }

    #[test]
    fn test_render_error_from_call_error() {
        let err: RenderError = CallError::Other("boom".to_owned()).into();
        assert_eq!(err.to_string(), "boom");
    }

    #[test]
    fn test_errors_are_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<TypeError>();
        assert_send_sync::<CallError>();
        assert_send_sync::<RenderError>();
    }
}
