// SPDX-License-Identifier: MIT OR Apache-2.0

//! Default configuration service implementation.
//!
//! This module provides `EnvStore`, the store that ingests `.env` files, and its
//! builder. Ingestion substitutes variables once per entry; retrieval coerces and
//! decrypts on demand and never mutates what was stored.

use crate::adapters::dotenv_file::DEFAULT_ENV_FILE;
use crate::adapters::project_root::{find_root, find_root_from_cwd, DEFAULT_ROOT_MARKERS};
use crate::adapters::{DotenvFileAdapter, EnvVarAdapter};
use crate::domain::coercion::{coerce, infer};
use crate::domain::envelope::{self, is_encrypted};
use crate::domain::substitution::{referenced_names, resolve};
use crate::domain::{
    ConfigError, ConfigurationService, LoadReport, RawEntry, ResolvedValues, Result, TypedValue,
};
use crate::ports::EnvLookup;
use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};

/// Where a configured file lives.
#[derive(Clone, Debug, PartialEq, Eq)]
enum FileSource {
    /// Used exactly as given.
    Path(PathBuf),
    /// Joined onto the discovered project root.
    RootRelative(PathBuf),
}

/// Store of `.env` values with typed, on-demand retrieval.
///
/// The first definition of a key wins, across all files. A failure while
/// ingesting a file is recorded as the store's load error: until the next
/// successful [`reload`](ConfigurationService::reload), every retrieval returns
/// that error instead of looking anything up.
///
/// The store has no interior locking. Loading takes `&mut self`; callers sharing
/// a store across threads must synchronize themselves.
///
/// # Examples
///
/// ```rust
/// use hexenv::prelude::*;
///
/// # fn main() -> Result<()> {
/// let mut store = EnvStore::with_env(EnvVarAdapter::empty());
/// store.load([("HOST", "localhost"), ("URL", "http://${HOST}:8080"), ("PORT", "8080")]);
///
/// assert_eq!(store.get_value("PORT", None, None)?, TypedValue::Integer(8080));
/// assert_eq!(
///     store.get_value("URL", None, None)?,
///     TypedValue::from("http://localhost:8080")
/// );
/// # Ok(())
/// # }
/// ```
pub struct EnvStore {
    /// Stored values, after substitution
    values: HashMap<String, String>,
    /// Configured files, in ingestion order
    sources: Vec<FileSource>,
    /// Canonical paths of the files read by the last ingestion
    files: Vec<PathBuf>,
    /// Marker names for project root discovery
    root_markers: Vec<String>,
    /// Directory root discovery starts from; the working directory if unset
    start_dir: Option<PathBuf>,
    /// Fallback for variable substitution
    env: Box<dyn EnvLookup>,
    /// Sticky ingestion error
    load_error: Option<ConfigError>,
}

impl EnvStore {
    /// Creates an empty store whose substitution falls back to the process
    /// environment.
    pub fn new() -> Self {
        Self::with_env(EnvVarAdapter::new())
    }

    /// Creates an empty store with a custom environment lookup.
    pub fn with_env(env: impl EnvLookup + 'static) -> Self {
        Self {
            values: HashMap::new(),
            sources: Vec::new(),
            files: Vec::new(),
            root_markers: DEFAULT_ROOT_MARKERS.iter().map(|m| m.to_string()).collect(),
            start_dir: None,
            env: Box::new(env),
            load_error: None,
        }
    }

    /// Creates a new store builder.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use hexenv::service::EnvStore;
    ///
    /// let store = EnvStore::builder()
    ///     .with_file(".env.local")
    ///     .with_file(".env.defaults")
    ///     .build();
    /// ```
    pub fn builder() -> EnvStoreBuilder {
        EnvStoreBuilder::new()
    }

    /// Ingests entries in order.
    ///
    /// Keys already present are skipped. Each new value has its `${NAME}` /
    /// `$NAME` references replaced using the keys stored so far, then the
    /// environment lookup. References to keys defined later are not resolved.
    pub fn load<I>(&mut self, entries: I) -> LoadReport
    where
        I: IntoIterator,
        I::Item: Into<RawEntry>,
    {
        let mut report = LoadReport::default();

        for entry in entries {
            let entry: RawEntry = entry.into();

            if self.values.contains_key(&entry.key) {
                tracing::debug!(
                    "Skipping duplicate key '{}' (line {})",
                    entry.key,
                    entry.line
                );
                report.skipped_existing += 1;
                continue;
            }

            if tracing::enabled!(tracing::Level::DEBUG) {
                for name in referenced_names(&entry.value) {
                    if !self.values.contains_key(name) && self.env.lookup(name).is_none() {
                        tracing::debug!(
                            "Unresolved reference '{}' in key '{}' left as written",
                            name,
                            entry.key
                        );
                    }
                }
            }

            let resolved = resolve(&entry.value, &self.values, self.env.as_ref());
            self.values.insert(entry.key, resolved);
            report.loaded += 1;
        }

        report
    }

    /// Reads and ingests the file at `path`, used exactly as given.
    ///
    /// The file is remembered for [`reload`](ConfigurationService::reload). A
    /// failure is returned and also recorded as the store's load error.
    pub fn load_file(&mut self, path: impl AsRef<Path>) -> Result<LoadReport> {
        let source = FileSource::Path(path.as_ref().to_path_buf());
        self.load_source(source)
    }

    /// Reads and ingests `file_name` relative to the project root.
    ///
    /// The root is the nearest directory, from the start directory upwards, that
    /// contains one of the root markers.
    pub fn load_from_root(&mut self, file_name: impl AsRef<Path>) -> Result<LoadReport> {
        let source = FileSource::RootRelative(file_name.as_ref().to_path_buf());
        self.load_source(source)
    }

    /// Returns the recorded ingestion error, if any.
    pub fn load_error(&self) -> Option<&ConfigError> {
        self.load_error.as_ref()
    }

    /// Returns the stored string for `key`, after substitution and before coercion.
    pub fn raw(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Returns every stored key, sorted.
    pub fn keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.values.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }

    /// Number of stored keys.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Canonical paths of the files read so far, in order.
    pub fn file_paths(&self) -> &[PathBuf] {
        &self.files
    }

    fn load_source(&mut self, source: FileSource) -> Result<LoadReport> {
        if !self.sources.contains(&source) {
            self.sources.push(source.clone());
        }

        let result = self.ingest(&source);
        if let Err(e) = &result {
            self.record_error(e.clone());
        }
        result
    }

    fn ingest(&mut self, source: &FileSource) -> Result<LoadReport> {
        let path = self.resolve_path(source)?;
        let adapter = DotenvFileAdapter::from_file(&path)?;
        let file_path = adapter.file_path().to_path_buf();

        let mut report = self.load(adapter.into_entries());
        report.files_read = 1;
        report.files.push(file_path.clone());
        self.files.push(file_path);

        tracing::debug!(
            "Loaded {} entries from {} ({} duplicates skipped)",
            report.loaded,
            path.display(),
            report.skipped_existing
        );

        Ok(report)
    }

    fn resolve_path(&self, source: &FileSource) -> Result<PathBuf> {
        match source {
            FileSource::Path(path) => Ok(path.clone()),
            FileSource::RootRelative(name) => {
                let root = match &self.start_dir {
                    Some(dir) => find_root(dir, self.root_markers.as_slice())?,
                    None => find_root_from_cwd(self.root_markers.as_slice())?,
                };
                Ok(root.join(name))
            }
        }
    }

    fn ingest_all(&mut self) -> LoadReport {
        let mut total = LoadReport::default();
        let sources = self.sources.clone();

        for source in &sources {
            match self.ingest(source) {
                Ok(report) => total.merge(report),
                Err(e) => self.record_error(e),
            }
        }

        total
    }

    fn record_error(&mut self, error: ConfigError) {
        tracing::warn!("Failed to load configuration: {}", error);
        self.load_error = Some(error);
    }

    fn check_load_error(&self) -> Result<()> {
        match &self.load_error {
            Some(e) => Err(e.clone()),
            None => Ok(()),
        }
    }

    fn value_or_default<'a>(&'a self, key: &str, default: Option<&'a str>) -> Result<&'a str> {
        self.raw(key)
            .or(default)
            .ok_or_else(|| ConfigError::ConfigKeyNotFound {
                key: key.to_string(),
            })
    }
}

impl Default for EnvStore {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for EnvStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Values may be secrets; only show the shape of the store.
        f.debug_struct("EnvStore")
            .field("keys", &self.values.len())
            .field("sources", &self.sources)
            .field("env", &self.env.name())
            .field("load_error", &self.load_error)
            .finish()
    }
}

impl ConfigurationService for EnvStore {
    fn get_value(
        &self,
        key: &str,
        kind: Option<&str>,
        default: Option<&str>,
    ) -> Result<TypedValue> {
        self.check_load_error()?;
        let raw = self.value_or_default(key, default)?;
        coerce(raw, kind)
    }

    fn get_encrypted_value(
        &self,
        key: &str,
        kind: Option<&str>,
        default: Option<&str>,
        decryption_key: &str,
    ) -> Result<TypedValue> {
        self.check_load_error()?;
        let raw = self.value_or_default(key, default)?;

        if !is_encrypted(raw) {
            return Err(ConfigError::NotEncryptedError);
        }

        let plaintext = envelope::decrypt(raw, decryption_key)?;
        tracing::debug!("Decrypted value for key '{}'", key);
        coerce(&plaintext, kind)
    }

    fn get_all_resolved(&self) -> Result<ResolvedValues> {
        self.check_load_error()?;

        let mut resolved = ResolvedValues::default();
        for key in self.keys() {
            match infer(&self.values[key]) {
                Ok(value) => {
                    resolved.values.insert(key.to_string(), value);
                }
                Err(e) => {
                    tracing::debug!("Skipping key '{}' in resolved view: {}", key, e);
                    resolved.failed.push(key.to_string());
                    resolved.last_error = Some(e);
                }
            }
        }

        Ok(resolved)
    }

    fn has(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    fn reload(&mut self) -> Result<LoadReport> {
        self.values.clear();
        self.files.clear();
        self.load_error = None;

        let report = self.ingest_all();
        self.check_load_error()?;
        Ok(report)
    }
}

/// Builder for constructing an `EnvStore`.
///
/// Extra files are ingested first, in the order they were added, then the main
/// file (`.env` unless changed). Earlier files win. By default file names are
/// resolved against the project root.
///
/// # Examples
///
/// ```rust,no_run
/// use hexenv::service::EnvStoreBuilder;
///
/// let store = EnvStoreBuilder::new()
///     .with_file(".env.local")
///     .main_file(".env.shared")
///     .root_markers(["Cargo.toml"])
///     .build();
///
/// if let Some(err) = store.load_error() {
///     eprintln!("configuration not loaded: {err}");
/// }
/// ```
pub struct EnvStoreBuilder {
    files: Vec<PathBuf>,
    extra_sources: Vec<FileSource>,
    main_file: Option<PathBuf>,
    use_root_path: bool,
    root_markers: Option<Vec<String>>,
    start_dir: Option<PathBuf>,
    env: Option<Box<dyn EnvLookup>>,
}

impl EnvStoreBuilder {
    /// Creates a new builder.
    pub fn new() -> Self {
        Self {
            files: Vec::new(),
            extra_sources: Vec::new(),
            main_file: Some(PathBuf::from(DEFAULT_ENV_FILE)),
            use_root_path: true,
            root_markers: None,
            start_dir: None,
            env: None,
        }
    }

    /// Adds an extra file, ingested before the main file.
    pub fn with_file(mut self, name: impl AsRef<Path>) -> Self {
        self.files.push(name.as_ref().to_path_buf());
        self
    }

    /// Adds several extra files, in order.
    pub fn with_files<I, P>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        self.files
            .extend(names.into_iter().map(|n| n.as_ref().to_path_buf()));
        self
    }

    /// Adds `.env` from the OS-appropriate configuration directory as an extra
    /// file, after the named extra files.
    ///
    /// # Errors
    ///
    /// Fails when the platform has no configuration directory.
    pub fn with_default_location(mut self, app_name: &str, qualifier: &str) -> Result<Self> {
        let path = DotenvFileAdapter::default_location(app_name, qualifier)?;
        self.extra_sources.push(FileSource::Path(path));
        Ok(self)
    }

    /// Replaces the main file, ingested after every extra file.
    pub fn main_file(mut self, name: impl AsRef<Path>) -> Self {
        self.main_file = Some(name.as_ref().to_path_buf());
        self
    }

    /// Ingests only the extra files.
    pub fn without_main_file(mut self) -> Self {
        self.main_file = None;
        self
    }

    /// Whether file names are joined onto the project root (default `true`).
    pub fn use_root_path(mut self, enabled: bool) -> Self {
        self.use_root_path = enabled;
        self
    }

    /// Replaces the marker names used for project root discovery.
    pub fn root_markers<I, S>(mut self, markers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.root_markers = Some(markers.into_iter().map(Into::into).collect());
        self
    }

    /// Starts root discovery from `dir` instead of the working directory.
    pub fn start_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.start_dir = Some(dir.as_ref().to_path_buf());
        self
    }

    /// Sets the environment lookup used by variable substitution.
    pub fn with_env(mut self, env: impl EnvLookup + 'static) -> Self {
        self.env = Some(Box::new(env));
        self
    }

    /// Uses a fixed map instead of the process environment.
    pub fn with_env_values(self, values: HashMap<String, String>) -> Self {
        self.with_env(EnvVarAdapter::with_values(values))
    }

    /// Builds the store and ingests every configured file.
    ///
    /// Ingestion failures do not stop the remaining files; the last one is kept
    /// as the store's [`load_error`](EnvStore::load_error).
    pub fn build(self) -> EnvStore {
        let mut store = EnvStore::new();
        if let Some(env) = self.env {
            store.env = env;
        }
        if let Some(markers) = self.root_markers {
            store.root_markers = markers;
        }
        store.start_dir = self.start_dir;

        let use_root_path = self.use_root_path;
        let named = |f: PathBuf| {
            if use_root_path {
                FileSource::RootRelative(f)
            } else {
                FileSource::Path(f)
            }
        };

        store.sources = self
            .files
            .into_iter()
            .map(named)
            .chain(self.extra_sources)
            .chain(self.main_file.map(named))
            .collect();

        let report = store.ingest_all();
        tracing::debug!(
            "Built store from {} of {} files ({} entries)",
            report.files_read,
            store.sources.len(),
            report.loaded
        );

        store
    }

    /// Builds the store, returning the ingestion error instead of recording it.
    pub fn try_build(self) -> Result<EnvStore> {
        let store = self.build();
        store.check_load_error()?;
        Ok(store)
    }
}

impl Default for EnvStoreBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::engine::general_purpose::STANDARD;
    use base64::Engine;
    use serde_json::json;
    use std::fs;
    use tempfile::TempDir;

    fn store_with(entries: &[(&str, &str)]) -> EnvStore {
        let mut store = EnvStore::with_env(EnvVarAdapter::empty());
        store.load(entries.iter().copied());
        store
    }

    fn project_with(files: &[(&str, &str)]) -> TempDir {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(".root"), "").unwrap();
        for (name, content) in files {
            fs::write(dir.path().join(name), content).unwrap();
        }
        dir
    }

    #[test]
    fn test_load_first_wins() {
        let mut store = store_with(&[("A", "1")]);
        let report = store.load([("A", "2"), ("B", "3")]);
        assert_eq!(report.loaded, 1);
        assert_eq!(report.skipped_existing, 1);
        assert_eq!(store.raw("A"), Some("1"));
        assert_eq!(store.raw("B"), Some("3"));
    }

    #[test]
    fn test_load_substitutes_earlier_keys() {
        let store = store_with(&[("HOST", "db"), ("DSN", "pg://${HOST}/app")]);
        assert_eq!(store.raw("DSN"), Some("pg://db/app"));
    }

    #[test]
    fn test_load_forward_reference_not_resolved() {
        let store = store_with(&[("DSN", "pg://${HOST}/app"), ("HOST", "db")]);
        assert_eq!(store.raw("DSN"), Some("pg://${HOST}/app"));
    }

    #[test]
    fn test_load_uses_environment_fallback() {
        let mut env = HashMap::new();
        env.insert("HOME".to_string(), "/home/app".to_string());
        let mut store = EnvStore::with_env(EnvVarAdapter::with_values(env));
        store.load([("CACHE", "$HOME/.cache")]);
        assert_eq!(store.raw("CACHE"), Some("/home/app/.cache"));
    }

    #[test]
    fn test_get_value_inferred() {
        let store = store_with(&[("PORT", "8080"), ("RATIO", "0.75"), ("DEBUG", "True")]);
        assert_eq!(
            store.get_value("PORT", None, None).unwrap(),
            TypedValue::Integer(8080)
        );
        assert_eq!(
            store.get_value("RATIO", None, None).unwrap(),
            TypedValue::Float(0.75)
        );
        assert_eq!(
            store.get_value("DEBUG", None, None).unwrap(),
            TypedValue::Boolean(true)
        );
    }

    #[test]
    fn test_get_value_strict() {
        let store = store_with(&[("PORT", "8080"), ("NAME", "abc")]);
        assert_eq!(
            store.get_value("PORT", Some("str"), None).unwrap(),
            TypedValue::from("8080")
        );
        let err = store.get_value("NAME", Some("int"), None).unwrap_err();
        assert!(matches!(err, ConfigError::ConversionError { .. }));
    }

    #[test]
    fn test_get_value_default() {
        let store = store_with(&[]);
        assert_eq!(
            store.get_value("MISSING", Some(""), Some("fallback")).unwrap(),
            TypedValue::from("fallback")
        );
        assert_eq!(
            store.get_value("MISSING", None, Some("12")).unwrap(),
            TypedValue::Integer(12)
        );
    }

    #[test]
    fn test_get_value_missing_without_default() {
        let store = store_with(&[]);
        let err = store.get_value("MISSING", None, None).unwrap_err();
        assert!(matches!(err, ConfigError::ConfigKeyNotFound { .. }));
    }

    #[test]
    fn test_get_value_invalid_kind() {
        let store = store_with(&[("A", "1")]);
        let err = store.get_value("A", Some("decimal"), None).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidTypeName { .. }));
    }

    #[test]
    fn test_retrieval_errors_do_not_poison() {
        let store = store_with(&[("A", "abc"), ("B", "1")]);
        assert!(store.get_value("A", Some("int"), None).is_err());
        assert!(store.load_error().is_none());
        assert_eq!(
            store.get_value("B", None, None).unwrap(),
            TypedValue::Integer(1)
        );
    }

    #[test]
    fn test_get_encrypted_value_base64() {
        let store = store_with(&[("SECRET", "ENC(YXNkamtuYWtqc2Ric2prYmRma2pzaGRiZg==)")]);
        assert_eq!(
            store
                .get_encrypted_value("SECRET", None, Some("expected_value"), "")
                .unwrap(),
            TypedValue::from("asdjknakjsdbsjkbdfkjshdbf")
        );
    }

    #[test]
    fn test_get_encrypted_value_coerces_plaintext() {
        let encoded = format!("ENC({})", STANDARD.encode("[a, b]"));
        let store = store_with(&[("LIST", encoded.as_str())]);
        assert_eq!(
            store.get_encrypted_value("LIST", None, None, "").unwrap(),
            TypedValue::List(vec!["a".into(), "b".into()])
        );
        assert_eq!(
            store
                .get_encrypted_value("LIST", Some("tuple"), None, "")
                .unwrap(),
            TypedValue::Tuple(vec!["a".into(), "b".into()])
        );
    }

    #[test]
    fn test_get_encrypted_value_uses_default() {
        let store = store_with(&[]);
        let value = store
            .get_encrypted_value("MISSING", Some("int"), Some("enc(NDI=)"), "")
            .unwrap();
        assert_eq!(value, TypedValue::Integer(42));
    }

    #[test]
    fn test_get_encrypted_value_not_encrypted() {
        let store = store_with(&[("PLAIN", "hello")]);
        let err = store
            .get_encrypted_value("PLAIN", None, None, "")
            .unwrap_err();
        assert!(matches!(err, ConfigError::NotEncryptedError));
    }

    #[test]
    fn test_get_encrypted_value_aes_mode_decodes_envelope() {
        let store = store_with(&[("SECRET", "ENC(YXNkamtuYWtqc2Ric2prYmRma2pzaGRiZg==)")]);
        let err = store
            .get_encrypted_value("SECRET", None, None, "0123456789abcdef")
            .unwrap_err();
        assert!(matches!(err, ConfigError::Base64DecodeError { .. }));
    }

    #[test]
    fn test_get_all_resolved_partial() {
        let store = store_with(&[
            ("PORT", "80"),
            ("HOSTS", "[a, b]"),
            ("BROKEN", "{not json}"),
            ("MAP", "{'k': 'v'}"),
        ]);
        let resolved = store.get_all_resolved().unwrap();

        assert_eq!(resolved.values.len(), 3);
        assert_eq!(resolved.get("PORT"), Some(&TypedValue::Integer(80)));
        assert_eq!(
            resolved.get("MAP").and_then(|v| v.as_map()).unwrap()["k"],
            json!("v")
        );
        assert_eq!(resolved.failed, vec!["BROKEN".to_string()]);
        assert!(matches!(
            resolved.last_error,
            Some(ConfigError::MapFormatError { .. })
        ));
        // stored data untouched
        assert_eq!(store.raw("PORT"), Some("80"));
        assert!(store.load_error().is_none());
    }

    #[test]
    fn test_get_all_resolved_last_error_in_key_order() {
        let store = store_with(&[("A_BAD", "{x}"), ("Z_BAD", "99999999999999999999")]);
        let resolved = store.get_all_resolved().unwrap();
        assert_eq!(resolved.failed, vec!["A_BAD".to_string(), "Z_BAD".to_string()]);
        assert!(matches!(
            resolved.last_error,
            Some(ConfigError::ConversionError { .. })
        ));
    }

    #[test]
    fn test_has_and_keys() {
        let store = store_with(&[("B", "2"), ("A", "1")]);
        assert!(store.has("A"));
        assert!(!store.has("C"));
        assert_eq!(store.keys(), vec!["A", "B"]);
        assert_eq!(store.len(), 2);
        assert!(!store.is_empty());
    }

    #[test]
    fn test_load_file_missing_sets_sticky_error() {
        let mut store = store_with(&[("A", "1")]);
        let err = store.load_file("/nonexistent/hexenv/.env").unwrap_err();
        assert!(matches!(err, ConfigError::FileNotFound { .. }));

        let sticky = store.get_value("A", None, None).unwrap_err();
        assert!(matches!(sticky, ConfigError::FileNotFound { .. }));
        assert!(store.get_all_resolved().is_err());
        assert!(store.get_encrypted_value("A", None, None, "").is_err());
    }

    #[test]
    fn test_load_file_twice_is_idempotent() {
        let dir = project_with(&[(".env", "A=1\nB=${A}2\n")]);
        let path = dir.path().join(".env");

        let mut store = store_with(&[]);
        store.load_file(&path).unwrap();
        let first: Vec<(String, String)> = store
            .keys()
            .into_iter()
            .map(|k| (k.to_string(), store.raw(k).unwrap().to_string()))
            .collect();

        let report = store.load_file(&path).unwrap();
        assert_eq!(report.loaded, 0);
        assert_eq!(report.skipped_existing, 2);
        let second: Vec<(String, String)> = store
            .keys()
            .into_iter()
            .map(|k| (k.to_string(), store.raw(k).unwrap().to_string()))
            .collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_builder_root_relative_files() {
        let dir = project_with(&[
            (".env.local", "HOST=local\n"),
            (".env", "HOST=shared\nURL=http://$HOST\n"),
        ]);
        let nested = dir.path().join("src").join("bin");
        fs::create_dir_all(&nested).unwrap();

        let store = EnvStore::builder()
            .with_file(".env.local")
            .root_markers([".root"])
            .start_dir(&nested)
            .with_env_values(HashMap::new())
            .try_build()
            .unwrap();

        assert_eq!(store.raw("HOST"), Some("local"));
        assert_eq!(store.raw("URL"), Some("http://local"));
        assert_eq!(store.file_paths().len(), 2);
    }

    #[test]
    fn test_builder_main_file_loads_after_extras() {
        let dir = project_with(&[
            ("extra.env", "SHARED=extra\nEXTRA_ONLY=1\n"),
            (".env", "SHARED=main\nMAIN_ONLY=2\n"),
        ]);

        let store = EnvStore::builder()
            .with_file("extra.env")
            .root_markers([".root"])
            .start_dir(dir.path())
            .with_env_values(HashMap::new())
            .try_build()
            .unwrap();

        assert_eq!(store.raw("SHARED"), Some("extra"));
        assert_eq!(store.raw("EXTRA_ONLY"), Some("1"));
        assert_eq!(store.raw("MAIN_ONLY"), Some("2"));
        let names: Vec<_> = store
            .file_paths()
            .iter()
            .map(|p| p.file_name().unwrap().to_owned())
            .collect();
        assert_eq!(names, vec!["extra.env", ".env"]);
    }

    #[test]
    fn test_builder_renamed_main_file() {
        let dir = project_with(&[("app.env", "A=main\n"), (".env", "A=default\n")]);

        let store = EnvStore::builder()
            .main_file("app.env")
            .root_markers([".root"])
            .start_dir(dir.path())
            .try_build()
            .unwrap();

        assert_eq!(store.raw("A"), Some("main"));
        assert_eq!(store.file_paths().len(), 1);
    }

    #[test]
    fn test_builder_without_main_file() {
        let dir = project_with(&[("only.env", "A=1\n")]);

        let store = EnvStore::builder()
            .with_file("only.env")
            .without_main_file()
            .root_markers([".root"])
            .start_dir(dir.path())
            .try_build()
            .unwrap();

        assert_eq!(store.keys(), vec!["A"]);
        assert!(store.load_error().is_none());
    }

    #[test]
    fn test_builder_root_not_found() {
        let dir = TempDir::new().unwrap();
        let store = EnvStore::builder()
            .root_markers(["hexenv-no-such-marker"])
            .start_dir(dir.path())
            .build();

        assert!(matches!(
            store.load_error(),
            Some(ConfigError::RootNotFound { .. })
        ));
        assert!(store.get_value("X", None, Some("d")).is_err());
    }

    #[test]
    fn test_builder_without_root_path() {
        let dir = project_with(&[("app.env", "NAME=app\n")]);
        let store = EnvStore::builder()
            .use_root_path(false)
            .main_file(dir.path().join("app.env"))
            .try_build()
            .unwrap();
        assert_eq!(store.raw("NAME"), Some("app"));
    }

    #[test]
    fn test_builder_continues_after_failure() {
        let dir = project_with(&[(".env", "OK=1\n")]);
        let store = EnvStore::builder()
            .with_file("missing.env")
            .root_markers([".root"])
            .start_dir(dir.path())
            .build();

        assert_eq!(store.raw("OK"), Some("1"));
        assert!(matches!(
            store.load_error(),
            Some(ConfigError::FileNotFound { .. })
        ));
    }

    #[test]
    fn test_reload_picks_up_changes_and_clears_error() {
        let dir = project_with(&[]);
        let path = dir.path().join(".env");

        let mut store = store_with(&[]);
        assert!(store.load_file(&path).is_err());
        assert!(store.load_error().is_some());

        fs::write(&path, "KEY=value\n").unwrap();
        let report = store.reload().unwrap();
        assert_eq!(report.loaded, 1);
        assert!(store.load_error().is_none());
        assert_eq!(
            store.get_value("KEY", None, None).unwrap(),
            TypedValue::from("value")
        );

        fs::write(&path, "KEY=changed\n").unwrap();
        store.reload().unwrap();
        assert_eq!(store.raw("KEY"), Some("changed"));
    }

    #[test]
    fn test_debug_hides_values() {
        let store = store_with(&[("PASSWORD", "hunter2")]);
        let debug = format!("{:?}", store);
        assert!(!debug.contains("hunter2"));
        assert!(debug.contains("EnvStore"));
    }
}
