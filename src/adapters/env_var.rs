// SPDX-License-Identifier: MIT OR Apache-2.0

//! Environment variable lookup adapter.
//!
//! This module provides the adapter that variable substitution uses to fall back
//! to environment variables when a name is not defined in the store.

use crate::ports::EnvLookup;
use std::collections::HashMap;
use std::env;

/// Maximum length for environment variable names (prevents DoS)
const MAX_ENV_KEY_LEN: usize = 512;

/// Maximum length for environment variable values (prevents DoS)
const MAX_ENV_VALUE_LEN: usize = 1048576; // 1MB

/// Environment lookup backed by the process environment or a fixed map.
///
/// With a prefix, `lookup("HOST")` reads `<prefix>HOST`, so only prefixed
/// variables are visible to substitution.
///
/// # Examples
///
/// ```rust
/// use hexenv::adapters::EnvVarAdapter;
/// use hexenv::ports::EnvLookup;
/// use std::collections::HashMap;
///
/// // Read the real process environment
/// let adapter = EnvVarAdapter::new();
///
/// // Or a fixed set of values, which is what tests want
/// let mut values = HashMap::new();
/// values.insert("HOME".to_string(), "/home/app".to_string());
/// let adapter = EnvVarAdapter::with_values(values);
/// assert_eq!(adapter.lookup("HOME").as_deref(), Some("/home/app"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct EnvVarAdapter {
    /// Optional prefix prepended to every looked-up name
    prefix: Option<String>,
    /// Fixed values replacing the process environment
    values: Option<HashMap<String, String>>,
}

impl EnvVarAdapter {
    /// Creates an adapter reading the process environment.
    pub fn new() -> Self {
        Self {
            prefix: None,
            values: None,
        }
    }

    /// Creates an adapter reading `<prefix><NAME>` from the process environment.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use hexenv::adapters::EnvVarAdapter;
    ///
    /// let adapter = EnvVarAdapter::with_prefix("MYAPP_");
    /// ```
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: Some(prefix.into()),
            values: None,
        }
    }

    /// Creates an adapter that never touches the process environment.
    ///
    /// Substitution becomes deterministic, which is what tests need.
    pub fn with_values(values: HashMap<String, String>) -> Self {
        Self {
            prefix: None,
            values: Some(values),
        }
    }

    /// Creates an adapter that resolves nothing.
    pub fn empty() -> Self {
        Self::with_values(HashMap::new())
    }

    fn full_name(&self, name: &str) -> String {
        match &self.prefix {
            Some(prefix) => format!("{}{}", prefix, name),
            None => name.to_string(),
        }
    }
}

impl EnvLookup for EnvVarAdapter {
    fn name(&self) -> &str {
        if self.values.is_some() {
            "env-fixed"
        } else {
            "env"
        }
    }

    fn lookup(&self, name: &str) -> Option<String> {
        let full_name = self.full_name(name);

        if let Some(values) = &self.values {
            return values.get(&full_name).cloned();
        }

        if full_name.len() > MAX_ENV_KEY_LEN {
            tracing::debug!(
                "Skipping oversized environment variable name: len={} (max {})",
                full_name.len(),
                MAX_ENV_KEY_LEN
            );
            return None;
        }

        match env::var(&full_name) {
            Ok(value) if value.len() > MAX_ENV_VALUE_LEN => {
                tracing::debug!(
                    "Skipping oversized environment variable '{}': value_len={} (max {})",
                    full_name,
                    value.len(),
                    MAX_ENV_VALUE_LEN
                );
                None
            }
            Ok(value) => Some(value),
            Err(env::VarError::NotPresent) => None,
            Err(env::VarError::NotUnicode(_)) => {
                tracing::debug!("Ignoring non-unicode environment variable '{}'", full_name);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Helper to set and clean up environment variables
    struct EnvGuard {
        keys: Vec<String>,
    }

    impl EnvGuard {
        fn new() -> Self {
            EnvGuard { keys: Vec::new() }
        }

        fn set(&mut self, key: &str, value: &str) {
            env::set_var(key, value);
            self.keys.push(key.to_string());
        }
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            for key in &self.keys {
                env::remove_var(key);
            }
        }
    }

    #[test]
    fn test_process_lookup() {
        let mut guard = EnvGuard::new();
        guard.set("HEXENV_ADAPTER_TEST_VAR", "test_value");

        let adapter = EnvVarAdapter::new();
        assert_eq!(
            adapter.lookup("HEXENV_ADAPTER_TEST_VAR").as_deref(),
            Some("test_value")
        );
        assert_eq!(adapter.name(), "env");
    }

    #[test]
    fn test_process_lookup_missing() {
        let adapter = EnvVarAdapter::new();
        assert_eq!(adapter.lookup("HEXENV_DEFINITELY_NOT_SET_12345"), None);
    }

    #[test]
    fn test_prefix_lookup() {
        let mut guard = EnvGuard::new();
        guard.set("HEXENV_PFX_DATABASE_HOST", "localhost");
        guard.set("DATABASE_HOST_UNPREFIXED_HEXENV", "other");

        let adapter = EnvVarAdapter::with_prefix("HEXENV_PFX_");
        assert_eq!(
            adapter.lookup("DATABASE_HOST").as_deref(),
            Some("localhost")
        );
        assert_eq!(adapter.lookup("DATABASE_HOST_UNPREFIXED_HEXENV"), None);
    }

    #[test]
    fn test_fixed_values_ignore_process_env() {
        let mut guard = EnvGuard::new();
        guard.set("HEXENV_FIXED_SHADOW", "from_process");

        let mut values = HashMap::new();
        values.insert("ONLY_HERE".to_string(), "fixed".to_string());
        let adapter = EnvVarAdapter::with_values(values);

        assert_eq!(adapter.lookup("ONLY_HERE").as_deref(), Some("fixed"));
        assert_eq!(adapter.lookup("HEXENV_FIXED_SHADOW"), None);
        assert_eq!(adapter.name(), "env-fixed");
    }

    #[test]
    fn test_empty_adapter() {
        let adapter = EnvVarAdapter::empty();
        assert_eq!(adapter.lookup("PATH"), None);
    }

    #[test]
    fn test_oversized_name_is_skipped() {
        let adapter = EnvVarAdapter::new();
        let name = "X".repeat(MAX_ENV_KEY_LEN + 1);
        assert_eq!(adapter.lookup(&name), None);
    }

    #[test]
    fn test_default_reads_process() {
        let adapter = EnvVarAdapter::default();
        assert_eq!(adapter.name(), "env");
    }
}
