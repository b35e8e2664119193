// SPDX-License-Identifier: MIT OR Apache-2.0

//! Conversion of raw strings into [`TypedValue`]s.
//!
//! Two modes exist. With a requested kind the conversion is strict: the raw
//! string must have the matching shape or the call fails. Without one the kind is
//! inferred by [`classify`] and opaque strings pass through unchanged.

use crate::domain::errors::{ConfigError, Result};
use crate::domain::sniffer::{self, classify, Shape};
use crate::domain::typed_value::TypedValue;
use crate::domain::value_kind::ValueKind;
use std::collections::HashMap;

/// Coerces `s` into the kind named by `requested_kind`, or infers one.
///
/// `None` and `Some("")` both select inference.
///
/// # Errors
///
/// * `InvalidTypeName` if `requested_kind` is not a recognized name
/// * `ConversionError` if the shape does not match the requested kind
/// * `MapFormatError` if a map literal is not a JSON object
///
/// # Examples
///
/// ```
/// use hexenv::domain::coercion::coerce;
/// use hexenv::domain::TypedValue;
///
/// assert_eq!(coerce("42", None).unwrap(), TypedValue::Integer(42));
/// assert_eq!(coerce("42", Some("float")).unwrap(), TypedValue::Float(42.0));
/// assert!(coerce("abc", Some("int")).is_err());
/// ```
pub fn coerce(s: &str, requested_kind: Option<&str>) -> Result<TypedValue> {
    match ValueKind::parse_optional(requested_kind)? {
        Some(kind) => coerce_as(s, kind),
        None => infer(s),
    }
}

/// Strict conversion of `s` into `kind`.
pub fn coerce_as(s: &str, kind: ValueKind) -> Result<TypedValue> {
    let mismatch = || ConfigError::conversion(s, kind.as_str());

    match kind {
        ValueKind::String => Ok(TypedValue::String(s.to_string())),
        ValueKind::Boolean if sniffer::is_boolean(s) => Ok(parse_bool(s)),
        ValueKind::Float if sniffer::is_float(s) => parse_float(s).map(TypedValue::Float),
        ValueKind::Integer if sniffer::is_integer(s) => parse_int(s).map(TypedValue::Integer),
        ValueKind::List if sniffer::is_list(s) || sniffer::is_tuple(s) => {
            Ok(TypedValue::List(split_sequence(s)))
        }
        ValueKind::Tuple if sniffer::is_list(s) || sniffer::is_tuple(s) => {
            Ok(TypedValue::Tuple(split_sequence(s)))
        }
        ValueKind::Map if sniffer::is_map(s) || sniffer::is_json(s) => {
            parse_map(s).map(TypedValue::Map)
        }
        _ => Err(mismatch()),
    }
}

/// Inference-based conversion. Opaque strings never fail; numeric overflow and
/// JSON that is not an object do.
pub fn infer(s: &str) -> Result<TypedValue> {
    match classify(s) {
        Shape::Integer => parse_int(s).map(TypedValue::Integer),
        Shape::Float => parse_float(s).map(TypedValue::Float),
        Shape::Boolean => Ok(parse_bool(s)),
        Shape::List => Ok(TypedValue::List(split_sequence(s))),
        Shape::Tuple => Ok(TypedValue::Tuple(split_sequence(s))),
        Shape::Map | Shape::Json => parse_map(s).map(TypedValue::Map),
        Shape::String => Ok(TypedValue::String(s.to_string())),
    }
}

/// Parses a brace literal into a map.
///
/// Single quotes are swapped for double quotes when the literal contains no
/// double quote at all, so `{'a': 'b'}` is accepted.
///
/// # Examples
///
/// ```
/// use hexenv::domain::coercion::parse_map;
///
/// let map = parse_map("{'host': 'localhost'}").unwrap();
/// assert_eq!(map["host"], "localhost");
/// ```
pub fn parse_map(s: &str) -> Result<HashMap<String, serde_json::Value>> {
    let mut s = s.trim().to_string();
    if s.contains('\'') && !s.contains('"') {
        s = s.replace('\'', "\"");
    }

    if !(s.starts_with('{') && s.ends_with('}')) {
        return Err(ConfigError::MapFormatError {
            message: "missing surrounding braces".to_string(),
        });
    }

    serde_json::from_str(&s).map_err(|e| ConfigError::MapFormatError {
        message: format!("failed to parse map: {}", e),
    })
}

/// Strips the outer bracket pair and splits on every comma.
///
/// Nested brackets and quoted commas are not respected: `[a, [b, c]]` gives
/// `["a", "[b", "c]"]`.
fn split_sequence(s: &str) -> Vec<String> {
    let s = s.trim();
    let inner = &s[1..s.len() - 1];
    inner
        .trim()
        .split(',')
        .map(|item| item.trim().to_string())
        .collect()
}

fn parse_bool(s: &str) -> TypedValue {
    TypedValue::Boolean(s.to_lowercase() == "true")
}

fn parse_int(s: &str) -> Result<i64> {
    s.parse::<i64>()
        .map_err(|_| ConfigError::conversion(s, ValueKind::Integer.as_str()))
}

fn parse_float(s: &str) -> Result<f64> {
    match s.parse::<f64>() {
        Ok(f) if f.is_finite() => Ok(f),
        _ => Err(ConfigError::conversion(s, ValueKind::Float.as_str())),
    }
}
