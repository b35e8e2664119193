// SPDX-License-Identifier: MIT OR Apache-2.0

//! Variable substitution.
//!
//! Values may reference other variables as `${NAME}` or `$NAME`. References are
//! replaced once, when the value is ingested, using the keys already stored and
//! then the environment. Unknown names are left as written.

use crate::ports::EnvLookup;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use std::collections::HashMap;

static VARIABLE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\$\{?([A-Za-z_][A-Za-z0-9_]*)\}?").expect("variable pattern is valid")
});

/// Replaces every variable reference in `raw`.
///
/// Lookup order is `scope` first, then `env`. The result is not scanned again, so
/// a substituted value that itself contains `$NAME` is kept literally.
///
/// # Examples
///
/// ```
/// use hexenv::domain::substitution::resolve;
/// use std::collections::HashMap;
///
/// let mut scope = HashMap::new();
/// scope.insert("HOST".to_string(), "db.local".to_string());
/// let env: HashMap<String, String> = HashMap::new();
///
/// assert_eq!(resolve("postgres://${HOST}:5432", &scope, &env), "postgres://db.local:5432");
/// assert_eq!(resolve("$MISSING", &scope, &env), "$MISSING");
/// ```
pub fn resolve(raw: &str, scope: &HashMap<String, String>, env: &dyn EnvLookup) -> String {
    VARIABLE_RE
        .replace_all(raw, |caps: &Captures<'_>| {
            let name = &caps[1];
            if let Some(value) = scope.get(name) {
                return value.clone();
            }
            if let Some(value) = env.lookup(name) {
                return value;
            }
            caps[0].to_string()
        })
        .into_owned()
}

/// Returns the names referenced by `raw`, in order of appearance.
///
/// # Examples
///
/// ```
/// use hexenv::domain::substitution::referenced_names;
///
/// assert_eq!(referenced_names("${A}/$B_2"), vec!["A", "B_2"]);
/// ```
pub fn referenced_names(raw: &str) -> Vec<&str> {
    VARIABLE_RE
        .captures_iter(raw)
        .filter_map(|caps| caps.get(1).map(|m| m.as_str()))
        .collect()
}
