//! Typed datastore values.
//!
//! Every field stored in a Nimbus schema is one of five shapes: string,
//! integer, double, list, or object. [`Value`] models that universe, and a
//! full record is a [`Fields`] map from field names to values. Serialization
//! is untagged, so a `Value` reads and writes as natural JSON.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use thiserror::Error;

/// One stored record: a map from field names to typed values.
pub type Fields = BTreeMap<String, Value>;

/// A single value stored in the Nimbus datastore.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// A text value.
    String(String),
    /// An integer value.
    Int(i64),
    /// A floating point value.
    Double(f64),
    /// An ordered list of values.
    List(Vec<Value>),
    /// A nested record.
    Object(Fields),
}

/// The runtime shape of a [`Value`], used in cast diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueKind {
    String,
    Int,
    Double,
    List,
    Object,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::String => "string",
            Self::Int => "int",
            Self::Double => "double",
            Self::List => "list",
            Self::Object => "object",
        };
        f.write_str(name)
    }
}

/// A type-checked downcast failed. Names both the requested and the actual
/// kind so mismatches are diagnosable from the message alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("cannot cast {actual} value to {expected}")]
pub struct CastError {
    /// The kind the caller asked for.
    pub expected: ValueKind,
    /// The kind the value actually holds.
    pub actual: ValueKind,
}

impl Value {
    /// Returns the runtime kind of this value.
    pub fn kind(&self) -> ValueKind {
        match self {
            Self::String(_) => ValueKind::String,
            Self::Int(_) => ValueKind::Int,
            Self::Double(_) => ValueKind::Double,
            Self::List(_) => ValueKind::List,
            Self::Object(_) => ValueKind::Object,
        }
    }

    /// Returns true if this value holds the given kind.
    pub fn is(&self, kind: ValueKind) -> bool {
        self.kind() == kind
    }

    fn cast_error(&self, expected: ValueKind) -> CastError {
        CastError {
            expected,
            actual: self.kind(),
        }
    }

    /// Borrows the text content, or fails naming both kinds.
    pub fn as_str(&self) -> Result<&str, CastError> {
        match self {
            Self::String(s) => Ok(s),
            other => Err(other.cast_error(ValueKind::String)),
        }
    }

    /// Returns the integer content, or fails naming both kinds.
    pub fn as_int(&self) -> Result<i64, CastError> {
        match self {
            Self::Int(i) => Ok(*i),
            other => Err(other.cast_error(ValueKind::Int)),
        }
    }

    /// Returns the floating point content, or fails naming both kinds.
    ///
    /// An `Int` does not silently widen to a double; the cast is strict.
    pub fn as_double(&self) -> Result<f64, CastError> {
        match self {
            Self::Double(d) => Ok(*d),
            other => Err(other.cast_error(ValueKind::Double)),
        }
    }

    /// Borrows the list content, or fails naming both kinds.
    pub fn as_list(&self) -> Result<&[Value], CastError> {
        match self {
            Self::List(values) => Ok(values),
            other => Err(other.cast_error(ValueKind::List)),
        }
    }

    /// Borrows the nested record, or fails naming both kinds.
    pub fn as_object(&self) -> Result<&Fields, CastError> {
        match self {
            Self::Object(fields) => Ok(fields),
            other => Err(other.cast_error(ValueKind::Object)),
        }
    }

    /// Consumes the value and returns the owned text content.
    pub fn into_string(self) -> Result<String, CastError> {
        match self {
            Self::String(s) => Ok(s),
            other => Err(other.cast_error(ValueKind::String)),
        }
    }

    /// Consumes the value and returns the owned list content.
    pub fn into_list(self) -> Result<Vec<Value>, CastError> {
        match self {
            Self::List(values) => Ok(values),
            other => Err(other.cast_error(ValueKind::List)),
        }
    }

    /// Consumes the value and returns the owned nested record.
    pub fn into_object(self) -> Result<Fields, CastError> {
        match self {
            Self::Object(fields) => Ok(fields),
            other => Err(other.cast_error(ValueKind::Object)),
        }
    }
}

impl fmt::Display for Value {
    /// Renders the raw value, the way condition trees quote candidates.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String(s) => f.write_str(s),
            Self::Int(i) => write!(f, "{i}"),
            Self::Double(d) => write!(f, "{d}"),
            Self::List(values) => {
                f.write_str("[")?;
                for (i, v) in values.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{v}")?;
                }
                f.write_str("]")
            }
            Self::Object(fields) => {
                f.write_str("{")?;
                for (i, (k, v)) in fields.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{k}: {v}")?;
                }
                f.write_str("}")
            }
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::String(s.to_owned())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Self::Int(i)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Self::Int(i64::from(i))
    }
}

impl From<f64> for Value {
    fn from(d: f64) -> Self {
        Self::Double(d)
    }
}

impl From<Vec<Value>> for Value {
    fn from(values: Vec<Value>) -> Self {
        Self::List(values)
    }
}

impl From<Fields> for Value {
    fn from(fields: Fields) -> Self {
        Self::Object(fields)
    }
}

impl FromIterator<Value> for Value {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Self::List(iter.into_iter().collect())
    }
}
