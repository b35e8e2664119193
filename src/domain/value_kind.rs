// SPDX-License-Identifier: MIT OR Apache-2.0

//! Requested value kinds.
//!
//! Callers ask for a kind by name (`"int"`, `"map"`, ...). This module maps the
//! accepted names onto `ValueKind`.

use crate::domain::errors::{ConfigError, Result};
use std::fmt;
use std::str::FromStr;

/// A kind a caller can request when retrieving a value.
///
/// # Examples
///
/// ```
/// use hexenv::domain::ValueKind;
///
/// let kind: ValueKind = "integer".parse().unwrap();
/// assert_eq!(kind, ValueKind::Integer);
/// assert!("decimal".parse::<ValueKind>().is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ValueKind {
    /// `str`, `string`
    String,
    /// `bool`, `boolean`
    Boolean,
    /// `float`
    Float,
    /// `int`, `integer`
    Integer,
    /// `list`, `array`
    List,
    /// `tuple`
    Tuple,
    /// `dict`, `map`, `json`
    Map,
}

impl ValueKind {
    /// Parses an optional kind name. `None` and the empty string both mean
    /// "infer the kind".
    pub fn parse_optional(kind: Option<&str>) -> Result<Option<Self>> {
        match kind {
            None => Ok(None),
            Some("") => Ok(None),
            Some(k) => k.parse().map(Some),
        }
    }

    /// Canonical name of the kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            ValueKind::String => "str",
            ValueKind::Boolean => "bool",
            ValueKind::Float => "float",
            ValueKind::Integer => "int",
            ValueKind::List => "list",
            ValueKind::Tuple => "tuple",
            ValueKind::Map => "map",
        }
    }
}

impl FromStr for ValueKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "str" | "string" => Ok(ValueKind::String),
            "bool" | "boolean" => Ok(ValueKind::Boolean),
            "float" => Ok(ValueKind::Float),
            "int" | "integer" => Ok(ValueKind::Integer),
            "list" | "array" => Ok(ValueKind::List),
            "tuple" => Ok(ValueKind::Tuple),
            "dict" | "map" | "json" => Ok(ValueKind::Map),
            _ => Err(ConfigError::InvalidTypeName {
                kind: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
