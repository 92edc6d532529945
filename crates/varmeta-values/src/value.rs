//! The raw data payload carried alongside a variable.

use std::fmt;

use ndarray::ArrayD;
use serde::{Deserialize, Serialize};

use varmeta_model::Dtype;

/// A dynamically typed value: a scalar, a plain nested sequence, or an
/// n-dimensional array.
///
/// Plain sequences and arrays are kept distinct on purpose: the unpack
/// algorithm returns slices in the same representation it was given
/// (sequence in, sequence out; array in, array out).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    List(Vec<Value>),
    Array(ArrayD<f64>),
}

impl Value {
    /// True for non-decomposable payloads (everything but lists and arrays).
    pub fn is_scalar(&self) -> bool {
        !matches!(self, Value::List(_) | Value::Array(_))
    }

    /// Check the payload against a dtype constraint.
    ///
    /// `Unconstrained` accepts everything; `Null` conforms to any dtype
    /// (a missing datum is not a type violation); lists and arrays conform
    /// when every leaf conforms.
    pub fn conforms_to(&self, dtype: Dtype) -> bool {
        if dtype == Dtype::Unconstrained {
            return true;
        }
        match self {
            Value::Null => true,
            Value::Bool(_) => dtype == Dtype::Bool,
            Value::Int(_) => dtype == Dtype::Int,
            Value::Float(_) => dtype == Dtype::Float,
            Value::Text(_) => dtype == Dtype::Text,
            Value::List(items) => items.iter().all(|item| item.conforms_to(dtype)),
            Value::Array(_) => dtype == Dtype::Float,
        }
    }

    /// Name of the payload's kind, for error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Text(_) => "text",
            Value::List(_) => "list",
            Value::Array(_) => "array",
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Int(i) => write!(f, "{i}"),
            Value::Float(x) => write!(f, "{x}"),
            Value::Text(s) => write!(f, "{s}"),
            Value::List(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "]")
            }
            Value::Array(a) => write!(f, "{a}"),
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::List(items)
    }
}

impl From<ArrayD<f64>> for Value {
    fn from(array: ArrayD<f64>) -> Self {
        Value::Array(array)
    }
}

impl<T: Into<Value>> FromIterator<T> for Value {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Value::List(iter.into_iter().map(Into::into).collect())
    }
}
