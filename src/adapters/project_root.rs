// SPDX-License-Identifier: MIT OR Apache-2.0

//! Project root discovery.
//!
//! Walks from a start directory up through its parents until one of them holds a
//! marker file or directory.

use crate::domain::{ConfigError, Result};
use std::path::{Path, PathBuf};

/// Marker names checked when none are configured.
pub const DEFAULT_ROOT_MARKERS: &[&str] = &["Cargo.toml", ".git", ".project-root", ".root"];

/// Returns the first directory, starting at `start` and moving up, that contains
/// any of `markers`.
///
/// # Errors
///
/// Returns `RootNotFound` when the filesystem root is reached without a match.
///
/// # Examples
///
/// ```rust,no_run
/// use hexenv::adapters::project_root::{find_root, DEFAULT_ROOT_MARKERS};
///
/// let cwd = std::env::current_dir().unwrap();
/// let root = find_root(&cwd, DEFAULT_ROOT_MARKERS).unwrap();
/// println!("project root: {}", root.display());
/// ```
pub fn find_root<S: AsRef<str>>(start: &Path, markers: &[S]) -> Result<PathBuf> {
    for dir in start.ancestors() {
        if markers.iter().any(|m| dir.join(m.as_ref()).exists()) {
            tracing::debug!("Found project root at {}", dir.display());
            return Ok(dir.to_path_buf());
        }
    }

    Err(ConfigError::RootNotFound {
        start: start.to_path_buf(),
        markers: markers.iter().map(|m| m.as_ref().to_string()).collect(),
    })
}

/// Like [`find_root`], starting from the current working directory.
pub fn find_root_from_cwd<S: AsRef<str>>(markers: &[S]) -> Result<PathBuf> {
    let cwd = std::env::current_dir().map_err(|e| ConfigError::io(".", e))?;
    find_root(&cwd, markers)
}
