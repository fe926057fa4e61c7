//! Rendering environment handed to executing tags.

use std::collections::HashMap;
use std::fmt;
use std::io::Write;

use crate::error::RenderError;
use crate::value::Value;

/// Per-render state: the host's output sink plus a flat variable scope.
///
/// The environment borrows the sink for the duration of the render.
/// Directives write their output through it and may read and set variables;
/// scoping discipline beyond a flat namespace is left to the evaluator.
///
/// # Example
///
/// ```
/// use vellum_model::{Environment, Value};
///
/// let mut out = Vec::new();
/// let mut env = Environment::new(&mut out);
///
/// env.set_var("user", Value::from("ada"));
/// env.write("hello").unwrap();
///
/// assert_eq!(env.var("user"), Some(&Value::from("ada")));
/// assert_eq!(out, b"hello");
/// ```
pub struct Environment<'w> {
    out: &'w mut dyn Write,
    vars: HashMap<String, Value>,
}

impl<'w> Environment<'w> {
    /// Create an environment writing to `out`.
    pub fn new(out: &'w mut dyn Write) -> Self {
        Self {
            out,
            vars: HashMap::new(),
        }
    }

    /// The current output sink.
    pub fn out(&mut self) -> &mut (dyn Write + 'w) {
        &mut *self.out
    }

    /// Write a text fragment to the output sink.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::Io`] when the sink fails.
    pub fn write(&mut self, text: &str) -> Result<(), RenderError> {
        self.out.write_all(text.as_bytes())?;
        Ok(())
    }

    /// Set a variable.
    pub fn set_var(&mut self, name: impl Into<String>, value: Value) {
        self.vars.insert(name.into(), value);
    }

    /// Look up a variable.
    #[must_use]
    pub fn var(&self, name: &str) -> Option<&Value> {
        self.vars.get(name)
    }
}

impl fmt::Debug for Environment<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Environment")
            .field("vars", &self.vars)
            .finish_non_exhaustive()
    }
}
