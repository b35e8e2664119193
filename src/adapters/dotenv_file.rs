// SPDX-License-Identifier: MIT OR Apache-2.0

//! `.env` file adapter.
//!
//! This module provides the line parser for `KEY=value` files and an adapter that
//! reads such a file from disk.

use crate::domain::{ConfigError, RawEntry, Result};
use crate::ports::ConfigParser;
use directories::ProjectDirs;
use std::fs;
use std::path::{Path, PathBuf};

/// Maximum allowed file size for `.env` files (10MB)
/// This prevents denial of service attacks via extremely large files
const MAX_ENV_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// Default file name looked up in root and OS config directories.
pub const DEFAULT_ENV_FILE: &str = ".env";

/// Parser for `KEY=value` files.
///
/// - blank lines and lines starting with `#` are skipped
/// - lines without `=` are skipped
/// - the line is split on the first `=`; key and value are trimmed
/// - a value wrapped in double quotes is unwrapped and `\"` becomes `"`
///
/// # Examples
///
/// ```rust
/// use hexenv::adapters::DotenvParser;
/// use hexenv::ports::ConfigParser;
///
/// let parser = DotenvParser::new();
/// let entries = parser.parse("# comment\nHOST=localhost\nURL=\"a=b\"").unwrap();
/// assert_eq!(entries.len(), 2);
/// assert_eq!(entries[1].value, "a=b");
/// ```
#[derive(Debug, Clone, Default)]
pub struct DotenvParser;

impl DotenvParser {
    /// Creates a new parser.
    pub fn new() -> Self {
        DotenvParser
    }

    fn parse_line(line: &str, number: usize) -> Option<RawEntry> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return None;
        }

        let (key, value) = line.split_once('=')?;
        let key = key.trim();
        let mut value = value.trim().to_string();

        if value.len() >= 2 && value.starts_with('"') && value.ends_with('"') {
            value = value[1..value.len() - 1].replace("\\\"", "\"");
        }

        Some(RawEntry {
            key: key.to_string(),
            value,
            line: number,
        })
    }
}

impl ConfigParser for DotenvParser {
    fn name(&self) -> &str {
        "dotenv"
    }

    fn parse(&self, content: &str) -> Result<Vec<RawEntry>> {
        Ok(content
            .lines()
            .enumerate()
            .filter_map(|(i, line)| Self::parse_line(line, i + 1))
            .collect())
    }
}

/// Configuration source adapter for a single `.env` file.
///
/// The file is read once, when the adapter is created.
///
/// # Examples
///
/// ```rust,no_run
/// use hexenv::adapters::DotenvFileAdapter;
///
/// // Load from a specific file
/// let adapter = DotenvFileAdapter::from_file("/path/to/.env").unwrap();
///
/// // Load from default OS location
/// let adapter = DotenvFileAdapter::from_default_location("myapp", "com.example").unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct DotenvFileAdapter {
    /// Canonical path of the file
    file_path: PathBuf,
    /// Parsed entries, in file order
    entries: Vec<RawEntry>,
}

impl DotenvFileAdapter {
    /// Reads and parses the file at `path`.
    ///
    /// # Errors
    ///
    /// * `FileNotFound` if nothing exists at `path`
    /// * `FileTooLarge` if the file exceeds 10MB
    /// * `IoError` if the file cannot be inspected or read (including non-UTF-8 content)
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let parser = DotenvParser::new();

        match path.try_exists() {
            Ok(true) => {}
            Ok(false) => {
                return Err(ConfigError::FileNotFound {
                    path: path.to_path_buf(),
                })
            }
            Err(e) => return Err(ConfigError::io(path, e)),
        }

        let file_path = path.canonicalize().map_err(|e| ConfigError::io(path, e))?;
        let entries = Self::read_entries(&file_path, &parser)?;

        tracing::debug!(
            "Parsed {} entries from {} with the {} parser",
            entries.len(),
            file_path.display(),
            parser.name()
        );

        Ok(Self { file_path, entries })
    }

    /// Reads `.env` from the OS-appropriate configuration directory.
    ///
    /// # Arguments
    ///
    /// * `app_name` - The application name (e.g., "myapp")
    /// * `qualifier` - The organization/qualifier (e.g., "com.example")
    pub fn from_default_location(app_name: &str, qualifier: &str) -> Result<Self> {
        Self::from_file(Self::default_location(app_name, qualifier)?)
    }

    /// Path of `.env` in the OS-appropriate configuration directory.
    pub fn default_location(app_name: &str, qualifier: &str) -> Result<PathBuf> {
        let proj_dirs = ProjectDirs::from(qualifier, "", app_name).ok_or_else(|| {
            ConfigError::io(
                app_name,
                std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    "failed to determine project directories",
                ),
            )
        })?;

        Ok(proj_dirs.config_dir().join(DEFAULT_ENV_FILE))
    }

    /// Returns the canonical path of the file.
    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    /// Returns the parsed entries, in file order.
    pub fn entries(&self) -> &[RawEntry] {
        &self.entries
    }

    /// Consumes the adapter and returns its entries.
    pub fn into_entries(self) -> Vec<RawEntry> {
        self.entries
    }

    fn read_entries(path: &Path, parser: &DotenvParser) -> Result<Vec<RawEntry>> {
        // Check file size before reading to prevent DoS via large files
        let metadata = fs::metadata(path).map_err(|e| ConfigError::io(path, e))?;
        if metadata.len() > MAX_ENV_FILE_SIZE {
            return Err(ConfigError::FileTooLarge {
                size: metadata.len(),
                max: MAX_ENV_FILE_SIZE,
            });
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::io(path, e))?;
        parser.parse(&content)
    }
}
