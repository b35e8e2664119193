// SPDX-License-Identifier: MIT OR Apache-2.0

//! Service layer containing the configuration service implementation.
//!
//! `EnvStore` implements the `ConfigurationService` trait on top of the `.env`
//! adapters and is the main entry point of the crate.

pub mod env_store;

// Re-export commonly used types
pub use env_store::{EnvStore, EnvStoreBuilder};
