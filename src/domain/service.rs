// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration service trait definition.
//!
//! This module defines the `ConfigurationService` trait, the retrieval side of the
//! crate. It returns typed values, decrypts enveloped values and exposes a bulk
//! view of everything that was loaded.

use crate::domain::{ConfigError, LoadReport, Result, TypedValue};
use std::collections::HashMap;

/// Result of [`ConfigurationService::get_all_resolved`].
///
/// Entries that fail coercion are left out of `values`; the last such failure is
/// kept in `last_error` instead of aborting the whole call.
#[derive(Clone, Debug, Default)]
pub struct ResolvedValues {
    /// Every entry that coerced successfully.
    pub values: HashMap<String, TypedValue>,
    /// Keys that failed coercion, in visiting order.
    pub failed: Vec<String>,
    /// The last coercion failure, if any.
    pub last_error: Option<ConfigError>,
}

impl ResolvedValues {
    /// Returns `true` when every entry coerced.
    pub fn is_complete(&self) -> bool {
        self.last_error.is_none()
    }

    /// Looks up a resolved value.
    pub fn get(&self, key: &str) -> Option<&TypedValue> {
        self.values.get(key)
    }
}

/// The main configuration service trait.
///
/// `kind` names a requested type (`"int"`, `"map"`, ...). `None` or `""` lets the
/// value's shape decide. `default` is used, with the same coercion rules, when the
/// key is absent.
///
/// # Examples
///
/// ```rust
/// use hexenv::domain::{ConfigurationService, LoadReport, Result, ResolvedValues, TypedValue};
/// use hexenv::domain::coercion::coerce;
///
/// struct Fixed;
///
/// impl ConfigurationService for Fixed {
///     fn get_value(&self, _key: &str, kind: Option<&str>, _default: Option<&str>) -> Result<TypedValue> {
///         coerce("8080", kind)
///     }
///
///     fn get_encrypted_value(
///         &self,
///         key: &str,
///         kind: Option<&str>,
///         default: Option<&str>,
///         _decryption_key: &str,
///     ) -> Result<TypedValue> {
///         self.get_value(key, kind, default)
///     }
///
///     fn get_all_resolved(&self) -> Result<ResolvedValues> {
///         Ok(ResolvedValues::default())
///     }
///
///     fn has(&self, _key: &str) -> bool {
///         true
///     }
///
///     fn reload(&mut self) -> Result<LoadReport> {
///         Ok(LoadReport::default())
///     }
/// }
///
/// assert_eq!(Fixed.get_value("PORT", None, None).unwrap(), TypedValue::Integer(8080));
/// ```
pub trait ConfigurationService {
    /// Retrieves and coerces the value stored under `key`.
    ///
    /// # Errors
    ///
    /// * the sticky ingestion error, if one is recorded
    /// * `ConfigKeyNotFound` if the key is absent and `default` is `None`
    /// * any coercion error from [`coerce`](crate::domain::coercion::coerce)
    fn get_value(&self, key: &str, kind: Option<&str>, default: Option<&str>)
        -> Result<TypedValue>;

    /// Retrieves an enveloped value, decrypts it and coerces the plaintext.
    ///
    /// An empty `decryption_key` selects base64 mode.
    ///
    /// # Errors
    ///
    /// * the sticky ingestion error, if one is recorded
    /// * `NotEncryptedError` if the value has no `ENC(...)` envelope
    /// * any decryption or coercion error
    fn get_encrypted_value(
        &self,
        key: &str,
        kind: Option<&str>,
        default: Option<&str>,
        decryption_key: &str,
    ) -> Result<TypedValue>;

    /// Coerces every stored value by inference.
    ///
    /// Only the sticky ingestion error makes this fail; per-entry failures are
    /// reported inside [`ResolvedValues`].
    fn get_all_resolved(&self) -> Result<ResolvedValues>;

    /// Returns `true` if `key` was loaded.
    fn has(&self, key: &str) -> bool;

    /// Clears the store and ingests every configured file again.
    fn reload(&mut self) -> Result<LoadReport>;
}
