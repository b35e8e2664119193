// SPDX-License-Identifier: MIT OR Apache-2.0

//! Shared helpers for the integration tests.
//!
//! Each test crate includes this module with `mod common;` and uses the parts it
//! needs.

use hexenv::ports::EnvLookup;
use std::collections::HashMap;
use std::fs;
use tempfile::TempDir;

/// A mock environment lookup for testing.
#[allow(dead_code)]
#[derive(Debug, Default)]
pub struct MockEnv {
    values: HashMap<String, String>,
}

#[allow(dead_code)]
impl MockEnv {
    /// Creates an empty mock environment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a variable.
    pub fn with_var(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(name.into(), value.into());
        self
    }
}

impl EnvLookup for MockEnv {
    fn name(&self) -> &str {
        "mock"
    }

    fn lookup(&self, name: &str) -> Option<String> {
        self.values.get(name).cloned()
    }
}

/// Creates a temporary project directory holding a `.root` marker and the given files.
#[allow(dead_code)]
pub fn create_project(files: &[(&str, &str)]) -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join(".root"), "").unwrap();
    for (name, content) in files {
        fs::write(dir.path().join(name), content).unwrap();
    }
    dir
}

/// A `.env` body covering every inferred shape.
#[allow(dead_code)]
pub fn sample_env() -> &'static str {
    "# sample\n\
     NAME=service\n\
     PORT=8080\n\
     RATIO=0.25\n\
     DEBUG=False\n\
     HOSTS=[a.example, b.example]\n\
     PAIR=(left, right)\n\
     LIMITS={'cpu': 2, 'memory': '512Mi'}\n\
     QUOTED=\"hello \\\"world\\\"\"\n"
}
