// SPDX-License-Identifier: MIT OR Apache-2.0

//! Ingestion records.

use std::path::PathBuf;

/// A parsed `KEY=value` assignment, before variable substitution.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawEntry {
    /// The trimmed key.
    pub key: String,
    /// The trimmed, unquoted value.
    pub value: String,
    /// 1-based line number in the source, `0` for programmatic entries.
    pub line: usize,
}

impl RawEntry {
    /// Creates an entry with no source line.
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            line: 0,
        }
    }
}

impl<K: Into<String>, V: Into<String>> From<(K, V)> for RawEntry {
    fn from((key, value): (K, V)) -> Self {
        RawEntry::new(key, value)
    }
}

/// Summary of an ingestion pass.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Entries inserted into the store.
    pub loaded: usize,
    /// Entries ignored because their key was already defined.
    pub skipped_existing: usize,
    /// Files that were read successfully.
    pub files_read: usize,
    /// Paths of the files that were read, in order.
    pub files: Vec<PathBuf>,
}

impl LoadReport {
    /// Adds the counters of `other` to this report.
    pub fn merge(&mut self, other: LoadReport) {
        self.loaded += other.loaded;
        self.skipped_existing += other.skipped_existing;
        self.files_read += other.files_read;
        self.files.extend(other.files);
    }
}
