// SPDX-License-Identifier: MIT OR Apache-2.0

//! Typed configuration value.
//!
//! This module provides the `TypedValue` type, the result of coercing a raw
//! `.env` string. Every coercion path produces exactly one of its variants.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// A coerced configuration value.
///
/// List and tuple elements are kept as trimmed strings; they are never typed
/// recursively. Map values are whatever JSON the literal contained.
///
/// # Examples
///
/// ```
/// use hexenv::domain::TypedValue;
///
/// let value = TypedValue::Integer(42);
/// assert_eq!(value.as_i64(), Some(42));
/// assert_eq!(value.to_string(), "42");
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum TypedValue {
    /// A signed 64-bit integer.
    Integer(i64),
    /// A 64-bit float.
    Float(f64),
    /// A boolean.
    Boolean(bool),
    /// An opaque string.
    String(String),
    /// A `[...]` literal, split on commas.
    List(Vec<String>),
    /// A `(...)` literal, split on commas.
    Tuple(Vec<String>),
    /// A `{...}` literal parsed as a JSON object.
    Map(HashMap<String, serde_json::Value>),
}

impl TypedValue {
    /// Returns the name of the variant, matching the kind names accepted by
    /// [`coerce`](crate::domain::coercion::coerce).
    pub fn type_name(&self) -> &'static str {
        match self {
            TypedValue::Integer(_) => "int",
            TypedValue::Float(_) => "float",
            TypedValue::Boolean(_) => "bool",
            TypedValue::String(_) => "str",
            TypedValue::List(_) => "list",
            TypedValue::Tuple(_) => "tuple",
            TypedValue::Map(_) => "map",
        }
    }

    /// Returns the string if this is a `String`.
    ///
    /// # Examples
    ///
    /// ```
    /// use hexenv::domain::TypedValue;
    ///
    /// let value = TypedValue::from("hello");
    /// assert_eq!(value.as_str(), Some("hello"));
    /// assert_eq!(TypedValue::Integer(1).as_str(), None);
    /// ```
    pub fn as_str(&self) -> Option<&str> {
        match self {
            TypedValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the integer if this is an `Integer`.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            TypedValue::Integer(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the value as a float. Integers widen.
    ///
    /// # Examples
    ///
    /// ```
    /// use hexenv::domain::TypedValue;
    ///
    /// assert_eq!(TypedValue::Float(3.5).as_f64(), Some(3.5));
    /// assert_eq!(TypedValue::Integer(2).as_f64(), Some(2.0));
    /// ```
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            TypedValue::Float(f) => Some(*f),
            TypedValue::Integer(n) => Some(*n as f64),
            _ => None,
        }
    }

    /// Returns the boolean if this is a `Boolean`.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            TypedValue::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the elements of a `List` or a `Tuple`.
    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            TypedValue::List(items) | TypedValue::Tuple(items) => Some(items),
            _ => None,
        }
    }

    /// Returns the entries of a `Map`.
    pub fn as_map(&self) -> Option<&HashMap<String, serde_json::Value>> {
        match self {
            TypedValue::Map(map) => Some(map),
            _ => None,
        }
    }
}

impl From<&str> for TypedValue {
    fn from(s: &str) -> Self {
        TypedValue::String(s.to_string())
    }
}

impl From<String> for TypedValue {
    fn from(s: String) -> Self {
        TypedValue::String(s)
    }
}

impl From<i64> for TypedValue {
    fn from(n: i64) -> Self {
        TypedValue::Integer(n)
    }
}

impl From<f64> for TypedValue {
    fn from(f: f64) -> Self {
        TypedValue::Float(f)
    }
}

impl From<bool> for TypedValue {
    fn from(b: bool) -> Self {
        TypedValue::Boolean(b)
    }
}

impl fmt::Display for TypedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypedValue::Integer(n) => write!(f, "{}", n),
            TypedValue::Float(x) => write!(f, "{}", x),
            TypedValue::Boolean(b) => write!(f, "{}", b),
            TypedValue::String(s) => f.write_str(s),
            TypedValue::List(items) => write!(f, "[{}]", items.join(", ")),
            TypedValue::Tuple(items) => write!(f, "({})", items.join(", ")),
            TypedValue::Map(map) => {
                let mut keys: Vec<&String> = map.keys().collect();
                keys.sort();
                f.write_str("{")?;
                for (i, key) in keys.into_iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{:?}: {}", key, map[key])?;
                }
                f.write_str("}")
            }
        }
    }
}
