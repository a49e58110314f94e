//! Dynamically-typed array elements.

use std::fmt;

use crate::element::{Element, ElementType};

/// A dynamically-typed value.
///
/// Use `Value` as the element type when one array must be declared with a
/// tag chosen at runtime. Writes are then checked against the array's
/// [`ElementType`] and rejected with `TypeMismatch` when they don't conform.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// A 64-bit signed integer.
    Int(i64),
    /// A 64-bit IEEE 754 floating-point number.
    Float(f64),
    /// A boolean.
    Bool(bool),
    /// A UTF-8 text string.
    Text(String),
    /// A raw byte string.
    Bytes(Vec<u8>),
}

impl Value {
    /// Returns the integer payload, if this is an [`Value::Int`].
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Returns the text payload, if this is a [`Value::Text`].
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl Element for Value {
    const STATIC_TYPE: Option<ElementType> = None;

    fn element_type(&self) -> ElementType {
        match self {
            Self::Int(_) => ElementType::Int,
            Self::Float(_) => ElementType::Float,
            Self::Bool(_) => ElementType::Bool,
            Self::Text(_) => ElementType::Text,
            Self::Bytes(_) => ElementType::Bytes,
        }
    }

    fn fmt_element(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(i) => write!(f, "{i}"),
            Self::Float(x) => write!(f, "{x:?}"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Text(s) => write!(f, "'{s}'"),
            Self::Bytes(b) => {
                f.write_str("b\"")?;
                for byte in b {
                    write!(f, "{}", std::ascii::escape_default(*byte))?;
                }
                f.write_str("\"")
            }
        }
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Self::Int(i64::from(v))
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Text(v.to_owned())
    }
}

impl From<Vec<u8>> for Value {
    fn from(v: Vec<u8>) -> Self {
        Self::Bytes(v)
    }
}
