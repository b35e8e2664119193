// SPDX-License-Identifier: MIT OR Apache-2.0

//! Adapters layer containing port implementations.
//!
//! This module contains the concrete implementations of the traits defined in the
//! ports layer: the `.env` line parser and file reader, the environment lookup and
//! project root discovery.

pub mod dotenv_file;
pub mod env_var;
pub mod project_root;

// Re-export adapters
pub use dotenv_file::{DotenvFileAdapter, DotenvParser};
pub use env_var::EnvVarAdapter;
pub use project_root::{find_root, DEFAULT_ROOT_MARKERS};
