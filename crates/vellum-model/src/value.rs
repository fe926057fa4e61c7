//! Template values and their runtime kinds.

use std::collections::BTreeMap;

use crate::error::TypeError;

/// A dynamically typed template value.
///
/// Hashes are ordered maps so that iteration (and any serialized form) is
/// deterministic.
///
/// # Example
///
/// ```
/// use vellum_model::{Value, ValueKind};
///
/// let value = Value::from("hello");
/// assert_eq!(value.kind(), ValueKind::Str);
/// assert_eq!(value.as_str().unwrap(), "hello");
/// assert!(value.as_number().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(untagged)
)]
pub enum Value {
    /// The absent value.
    #[default]
    Null,
    /// A boolean.
    Bool(bool),
    /// A number. All template arithmetic is double precision.
    Number(f64),
    /// A string.
    Str(String),
    /// An ordered sequence of values.
    List(Vec<Value>),
    /// A key-value lookup (unrelated to cryptographic hashing).
    Hash(BTreeMap<String, Value>),
}

impl Value {
    /// The runtime kind of this value.
    #[must_use]
    pub fn kind(&self) -> ValueKind {
        match self {
            Self::Null => ValueKind::Null,
            Self::Bool(_) => ValueKind::Bool,
            Self::Number(_) => ValueKind::Number,
            Self::Str(_) => ValueKind::Str,
            Self::List(_) => ValueKind::List,
            Self::Hash(_) => ValueKind::Hash,
        }
    }

    /// True for [`Value::Null`].
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Access as a boolean.
    ///
    /// # Errors
    ///
    /// Returns [`TypeError`] if the value is not a boolean.
    pub fn as_bool(&self) -> Result<bool, TypeError> {
        match self {
            Self::Bool(value) => Ok(*value),
            other => Err(TypeError::new([ValueKind::Bool], other.kind())),
        }
    }

    /// Access as a number.
    ///
    /// # Errors
    ///
    /// Returns [`TypeError`] if the value is not a number.
    pub fn as_number(&self) -> Result<f64, TypeError> {
        match self {
            Self::Number(value) => Ok(*value),
            other => Err(TypeError::new([ValueKind::Number], other.kind())),
        }
    }

    /// Access as a string.
    ///
    /// # Errors
    ///
    /// Returns [`TypeError`] if the value is not a string.
    pub fn as_str(&self) -> Result<&str, TypeError> {
        match self {
            Self::Str(value) => Ok(value),
            other => Err(TypeError::new([ValueKind::Str], other.kind())),
        }
    }

    /// Access as a list.
    ///
    /// # Errors
    ///
    /// Returns [`TypeError`] if the value is not a list.
    pub fn as_list(&self) -> Result<&[Value], TypeError> {
        match self {
            Self::List(values) => Ok(values),
            other => Err(TypeError::new([ValueKind::List], other.kind())),
        }
    }

    /// Access as a hash.
    ///
    /// # Errors
    ///
    /// Returns the [`TypeError::non_hash`] diagnostic if the value is not a
    /// hash.
    pub fn as_hash(&self) -> Result<&BTreeMap<String, Value>, TypeError> {
        match self {
            Self::Hash(entries) => Ok(entries),
            other => Err(TypeError::non_hash(other.kind())),
        }
    }

    /// Look up a key on a hash value.
    ///
    /// Returns `Ok(None)` when the key is absent.
    ///
    /// # Errors
    ///
    /// Returns the [`TypeError::non_hash`] diagnostic if the value is not a
    /// hash.
    pub fn get(&self, key: &str) -> Result<Option<&Value>, TypeError> {
        Ok(self.as_hash()?.get(key))
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i64> for Value {
    #[allow(clippy::cast_precision_loss)]
    fn from(value: i64) -> Self {
        Self::Number(value as f64)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Str(value.to_owned())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<Vec<Value>> for Value {
    fn from(values: Vec<Value>) -> Self {
        Self::List(values)
    }
}

impl From<BTreeMap<String, Value>> for Value {
    fn from(entries: BTreeMap<String, Value>) -> Self {
        Self::Hash(entries)
    }
}

/// The runtime kind of a [`Value`], used in type diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum ValueKind {
    /// The absent value.
    Null,
    /// A boolean.
    Bool,
    /// A number.
    Number,
    /// A string.
    Str,
    /// A sequence.
    List,
    /// A key-value lookup.
    Hash,
}

impl ValueKind {
    /// Human-readable kind name, as it appears in diagnostics.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool => "boolean",
            Self::Number => "number",
            Self::Str => "string",
            Self::List => "list",
            Self::Hash => "hash",
        }
    }
}

impl std::fmt::Display for ValueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
