// SPDX-License-Identifier: MIT OR Apache-2.0

//! Ports layer containing trait definitions.
//!
//! This module contains the trait definitions (ports) that the domain and service
//! layers depend on. Adapters in the adapters layer implement them.

pub mod env_lookup;
pub mod parser;

// Re-export commonly used types
pub use env_lookup::EnvLookup;
pub use parser::ConfigParser;
