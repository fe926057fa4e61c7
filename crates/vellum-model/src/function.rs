//! Function contracts and the fixed native calling convention.

use crate::error::{CallError, TypeError};
use crate::value::{Value, ValueKind};

/// A value invocable with an ordered argument list.
///
/// This is the generic calling convention: the function inspects its
/// arguments however it likes and reports failures through [`CallError`].
///
/// # Example
///
/// ```
/// use vellum_model::{CallError, Function, Value};
///
/// struct Join;
///
/// impl Function for Join {
///     fn call(&self, args: &[Value]) -> Result<Value, CallError> {
///         let mut parts = Vec::new();
///         for arg in args {
///             parts.push(arg.as_str()?.to_owned());
///         }
///         Ok(Value::from(parts.join("-")))
///     }
/// }
///
/// let joined = Join.call(&[Value::from("a"), Value::from("b")]).unwrap();
/// assert_eq!(joined, Value::from("a-b"));
/// ```
pub trait Function: Send + Sync {
    /// Invoke with `args`, returning the result value.
    ///
    /// # Errors
    ///
    /// Returns [`CallError`] on arity mismatch, argument type mismatch, or
    /// any failure inside the function.
    fn call(&self, args: &[Value]) -> Result<Value, CallError>;
}

/// A function using the fixed native calling convention.
///
/// Native functions declare their parameter kinds up front (checked with
/// [`check_args`]) and can explain a failed type expectation — when the
/// evaluator finds this value somewhere a different kind was required, the
/// explanation tells the template author what the function actually offers.
pub trait NativeFunction: Function {
    /// Declared parameter kinds, in positional order.
    fn signature(&self) -> &[ValueKind];

    /// Explain why this function cannot satisfy the `expected` kinds.
    ///
    /// Returns `None` when no tailored explanation is available. The default
    /// explanation is built from [`signature`](Self::signature).
    fn explain_type_error(&self, expected: &[ValueKind]) -> Option<String> {
        let signature = self
            .signature()
            .iter()
            .copied()
            .map(ValueKind::name)
            .collect::<Vec<_>>()
            .join(", ");
        let wanted = expected
            .iter()
            .copied()
            .map(ValueKind::name)
            .collect::<Vec<_>>()
            .join(" or ");
        Some(format!(
            "a function taking ({signature}) cannot be used where a {wanted} value is expected"
        ))
    }
}

/// Check an argument list against a native signature.
///
/// Verifies arity first, then each argument's kind in positional order,
/// blaming the first failing argument.
///
/// # Errors
///
/// Returns [`CallError::ArityMismatch`] on a length mismatch, or a
/// [`CallError::Type`] blaming `argument N` on the first kind mismatch.
///
/// # Example
///
/// ```
/// use vellum_model::{check_args, Value, ValueKind};
///
/// let signature = [ValueKind::Str, ValueKind::Number];
///
/// assert!(check_args(&signature, &[Value::from("x"), Value::from(1.0)]).is_ok());
///
/// let err = check_args(&signature, &[Value::from("x"), Value::from("y")]).unwrap_err();
/// assert_eq!(
///     err.to_string(),
///     "expected number value here, found string (from `argument 2`)"
/// );
/// ```
pub fn check_args(signature: &[ValueKind], args: &[Value]) -> Result<(), CallError> {
    if args.len() != signature.len() {
        return Err(CallError::ArityMismatch {
            expected: signature.len(),
            got: args.len(),
        });
    }

    for (position, (expected, arg)) in signature.iter().zip(args).enumerate() {
        if arg.kind() != *expected {
            return Err(TypeError::new([*expected], arg.kind())
                .with_blamed(format!("argument {}", position + 1))
                .into());
        }
    }

    Ok(())
}
