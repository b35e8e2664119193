// SPDX-License-Identifier: MIT OR Apache-2.0

//! Shape classification of raw values.
//!
//! `classify` looks at a raw string and decides which literal it resembles.
//! The checks overlap (every integer is also a float, a JSON object is also a
//! brace literal), so they run in a fixed order and the first match wins.

use once_cell::sync::Lazy;
use regex::Regex;

static INTEGER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[+-]?[0-9]+$").expect("integer pattern is valid"));

static FLOAT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[+-]?[0-9]+(\.[0-9]+)?$").expect("float pattern is valid"));

/// The lexical shape of a raw value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Shape {
    /// Optional sign followed by digits.
    Integer,
    /// Optional sign, digits, optional fraction.
    Float,
    /// `true`, `false`, `True` or `False`.
    Boolean,
    /// `[ ... ]`
    List,
    /// `( ... )`
    Tuple,
    /// `{ ... }`
    Map,
    /// Any other valid JSON document.
    Json,
    /// Nothing recognizable.
    String,
}

/// Classifies `s`. Always returns a shape, `Shape::String` when nothing else fits.
///
/// # Examples
///
/// ```
/// use hexenv::domain::sniffer::{classify, Shape};
///
/// assert_eq!(classify("42"), Shape::Integer);
/// assert_eq!(classify("3.14"), Shape::Float);
/// assert_eq!(classify("[a, b, c]"), Shape::List);
/// assert_eq!(classify("hello"), Shape::String);
/// ```
pub fn classify(s: &str) -> Shape {
    if is_integer(s) {
        Shape::Integer
    } else if is_float(s) {
        Shape::Float
    } else if is_boolean(s) {
        Shape::Boolean
    } else if is_list(s) {
        Shape::List
    } else if is_tuple(s) {
        Shape::Tuple
    } else if is_map(s) {
        Shape::Map
    } else if is_json(s) {
        Shape::Json
    } else {
        Shape::String
    }
}

/// Full match of an optionally signed run of ASCII digits.
pub fn is_integer(s: &str) -> bool {
    INTEGER_RE.is_match(s)
}

/// Full match of an optionally signed decimal, fraction optional.
pub fn is_float(s: &str) -> bool {
    FLOAT_RE.is_match(s)
}

/// Case-sensitive: only the four spellings `true`, `false`, `True`, `False`.
pub fn is_boolean(s: &str) -> bool {
    matches!(s, "true" | "false" | "True" | "False")
}

/// Wrapped in square brackets after trimming.
pub fn is_list(s: &str) -> bool {
    is_wrapped(s, '[', ']')
}

/// Wrapped in parentheses after trimming.
pub fn is_tuple(s: &str) -> bool {
    is_wrapped(s, '(', ')')
}

/// Wrapped in braces after trimming.
pub fn is_map(s: &str) -> bool {
    is_wrapped(s, '{', '}')
}

/// Parses as any JSON value.
pub fn is_json(s: &str) -> bool {
    serde_json::from_str::<serde_json::Value>(s).is_ok()
}

fn is_wrapped(s: &str, open: char, close: char) -> bool {
    let s = s.trim();
    s.starts_with(open) && s.ends_with(close)
}
