// SPDX-License-Identifier: MIT OR Apache-2.0

//! Environment lookup trait definition.
//!
//! Variable substitution falls back to an environment when a name is not defined
//! in the store. This module defines that capability as a port so tests can swap
//! the real process environment for a fixed map.

use std::collections::HashMap;

/// A read-only source of environment variables.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` so a store can be moved across threads.
///
/// # Examples
///
/// ```rust
/// use hexenv::ports::EnvLookup;
///
/// struct Fixed;
///
/// impl EnvLookup for Fixed {
///     fn name(&self) -> &str {
///         "fixed"
///     }
///
///     fn lookup(&self, name: &str) -> Option<String> {
///         (name == "HOME").then(|| "/home/app".to_string())
///     }
/// }
///
/// assert_eq!(Fixed.lookup("HOME").as_deref(), Some("/home/app"));
/// assert_eq!(Fixed.lookup("PATH"), None);
/// ```
pub trait EnvLookup: Send + Sync {
    /// Short identifier used in log messages.
    fn name(&self) -> &str;

    /// Returns the value of `name`, or `None` if it is not set.
    fn lookup(&self, name: &str) -> Option<String>;
}

impl EnvLookup for HashMap<String, String> {
    fn name(&self) -> &str {
        "map"
    }

    fn lookup(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}
