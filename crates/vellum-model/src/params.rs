//! Named parameters passed to tag invocations.

use std::collections::BTreeMap;

use crate::error::CallError;
use crate::value::Value;

/// Named parameters for a directive or transform invocation.
///
/// # Example
///
/// ```
/// use vellum_model::{Params, Value};
///
/// let params = Params::new().with("count", 3_i64).with("label", "items");
///
/// assert_eq!(params.get("count"), Some(&Value::Number(3.0)));
/// assert_eq!(params.get("missing"), None);
/// assert_eq!(params.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Params {
    entries: BTreeMap<String, Value>,
}

impl Params {
    /// Create an empty parameter set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a parameter (builder style).
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set(name, value);
        self
    }

    /// Set a parameter.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.entries.insert(name.into(), value.into());
    }

    /// Look up a parameter by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.entries.get(name)
    }

    /// Look up a parameter that the tag requires.
    ///
    /// # Errors
    ///
    /// Returns [`CallError::Other`] naming the parameter when it is absent.
    pub fn require(&self, name: &str) -> Result<&Value, CallError> {
        self.get(name)
            .ok_or_else(|| CallError::Other(format!("missing required parameter `{name}`")))
    }

    /// Number of parameters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no parameters were passed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over parameters in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(name, value)| (name.as_str(), value))
    }
}

impl FromIterator<(String, Value)> for Params {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
