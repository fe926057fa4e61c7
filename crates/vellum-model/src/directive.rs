//! Directive tag contract and the nested-body callback.

use crate::environment::Environment;
use crate::error::RenderError;
use crate::params::Params;
use crate::value::Value;

/// Nested content of a directive invocation.
///
/// A directive may render its body zero or more times — once per loop pass,
/// or not at all. Before each pass it may assign the positional loop
/// variables it was handed.
///
/// Closures of the right shape implement `Body`, which keeps test and host
/// code short:
///
/// ```
/// use vellum_model::{Body, Environment};
///
/// let mut out = Vec::new();
/// let mut env = Environment::new(&mut out);
/// let mut body = |env: &mut Environment<'_>| env.write("nested");
///
/// Body::render(&mut body, &mut env).unwrap();
/// drop(env);
/// assert_eq!(out, b"nested");
/// ```
pub trait Body {
    /// Render the nested content into the environment's output sink.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError`] when rendering the nested content fails.
    fn render(&mut self, env: &mut Environment<'_>) -> Result<(), RenderError>;
}

impl<F> Body for F
where
    F: FnMut(&mut Environment<'_>) -> Result<(), RenderError>,
{
    fn render(&mut self, env: &mut Environment<'_>) -> Result<(), RenderError> {
        self(env)
    }
}

/// A template construct invoked to render a block.
///
/// Directives receive named parameters, positional loop variables they may
/// assign before each body pass, and the optional nested body.
///
/// # Thread Safety
///
/// Implementations are `Send + Sync`: a tag library is built once and shared,
/// so per-invocation state belongs in the [`Environment`], not the tag.
///
/// # Example
///
/// ```
/// use vellum_model::{Body, DirectiveTag, Environment, Params, RenderError, Value};
///
/// /// Renders its body `count` times, exposing the pass index.
/// struct Repeat;
///
/// impl DirectiveTag for Repeat {
///     fn execute(
///         &self,
///         env: &mut Environment<'_>,
///         params: &Params,
///         loop_vars: &mut [Value],
///         body: Option<&mut dyn Body>,
///     ) -> Result<(), RenderError> {
///         let count = params.require("count")?.as_number()?;
///         if let Some(body) = body {
///             for pass in 0..count as usize {
///                 if let Some(var) = loop_vars.first_mut() {
///                     *var = Value::from(pass as f64);
///                 }
///                 body.render(env)?;
///             }
///         }
///         Ok(())
///     }
/// }
///
/// let mut out = Vec::new();
/// let mut env = Environment::new(&mut out);
/// let mut loop_vars = [Value::Null];
/// let mut body = |env: &mut Environment<'_>| env.write("x");
///
/// Repeat
///     .execute(
///         &mut env,
///         &Params::new().with("count", 3_i64),
///         &mut loop_vars,
///         Some(&mut body),
///     )
///     .unwrap();
///
/// drop(env);
/// assert_eq!(out, b"xxx");
/// ```
pub trait DirectiveTag: Send + Sync {
    /// Execute the directive.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError`] when parameter handling, body rendering, or
    /// output writing fails.
    fn execute(
        &self,
        env: &mut Environment<'_>,
        params: &Params,
        loop_vars: &mut [Value],
        body: Option<&mut dyn Body>,
    ) -> Result<(), RenderError>;
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    struct Shout;

    impl DirectiveTag for Shout {
        fn execute(
            &self,
            env: &mut Environment<'_>,
            params: &Params,
            _loop_vars: &mut [Value],
            body: Option<&mut dyn Body>,
        ) -> Result<(), RenderError> {
            let text = params.require("text")?.as_str()?.to_uppercase();
            env.write(&text)?;
            if let Some(body) = body {
                body.render(env)?;
            }
            Ok(())
        }
    }

    #[test]
    fn test_execute_without_body() {
        let mut out = Vec::new();
        let mut env = Environment::new(&mut out);

        Shout
            .execute(
                &mut env,
                &Params::new().with("text", "hey"),
                &mut [],
                None,
            )
            .unwrap();

        drop(env);
        assert_eq!(out, b"HEY");
    }

    #[test]
    fn test_execute_renders_body() {
        let mut out = Vec::new();
        let mut env = Environment::new(&mut out);
        let mut body = |env: &mut Environment<'_>| env.write("!");

        Shout
            .execute(
                &mut env,
                &Params::new().with("text", "hey"),
                &mut [],
                Some(&mut body),
            )
            .unwrap();

        drop(env);
        assert_eq!(out, b"HEY!");
    }

    #[test]
    fn test_missing_parameter_propagates() {
        let mut out = Vec::new();
        let mut env = Environment::new(&mut out);

        let err = Shout
            .execute(&mut env, &Params::new(), &mut [], None)
            .unwrap_err();

        assert_eq!(err.to_string(), "missing required parameter `text`");
    }

    #[test]
    fn test_body_error_propagates() {
        let mut out = Vec::new();
        let mut env = Environment::new(&mut out);
        let mut body = |_env: &mut Environment<'_>| -> Result<(), RenderError> {
            Err(RenderError::Other("body failed".to_owned()))
        };

        let err = Shout
            .execute(
                &mut env,
                &Params::new().with("text", "hey"),
                &mut [],
                Some(&mut body),
            )
            .unwrap_err();

        assert_eq!(err.to_string(), "body failed");
    }
}
