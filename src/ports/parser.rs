// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration parser trait definition.
//!
//! This module defines the `ConfigParser` trait, the interface for turning the text
//! of a configuration file into ordered raw entries.

use crate::domain::{RawEntry, Result};

/// A trait for parsing configuration files.
///
/// Parsers return entries in file order. Order matters: the store lets the first
/// definition of a key win and substitutes variables only from entries that came
/// earlier.
///
/// # Examples
///
/// ```rust
/// use hexenv::ports::ConfigParser;
/// use hexenv::domain::{RawEntry, Result};
///
/// struct LineParser;
///
/// impl ConfigParser for LineParser {
///     fn name(&self) -> &str {
///         "colon"
///     }
///
///     fn parse(&self, content: &str) -> Result<Vec<RawEntry>> {
///         Ok(content
///             .lines()
///             .filter_map(|line| line.split_once(':'))
///             .map(|(k, v)| RawEntry::new(k.trim(), v.trim()))
///             .collect())
///     }
/// }
///
/// let entries = LineParser.parse("a: 1\nb: 2").unwrap();
/// assert_eq!(entries.len(), 2);
/// assert_eq!(entries[0].key, "a");
/// ```
pub trait ConfigParser {
    /// Short identifier used in log messages.
    fn name(&self) -> &str;

    /// Parses file content into raw entries, in file order.
    ///
    /// # Arguments
    ///
    /// * `content` - The raw content of the configuration file
    ///
    /// # Returns
    ///
    /// * `Ok(Vec<RawEntry>)` - The entries, first line first
    /// * `Err(ConfigError)` - The content could not be parsed
    fn parse(&self, content: &str) -> Result<Vec<RawEntry>>;
}
