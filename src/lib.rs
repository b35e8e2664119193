// SPDX-License-Identifier: MIT OR Apache-2.0

//! A hexagonal architecture `.env` configuration crate.
//!
//! This crate loads `KEY=value` files into a store and hands values back typed:
//! integers, floats, booleans, lists, tuples and maps are recognized from their
//! textual shape, or coerced to a requested type. Values may reference earlier keys
//! or environment variables with `${NAME}` / `$NAME`, and may be wrapped as
//! `ENC(...)` to be decrypted on retrieval.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain Layer**: Core types and logic (`TypedValue`, type sniffing, coercion,
//!   substitution, encrypted envelopes, errors)
//! - **Ports**: Trait definitions that define interfaces (`ConfigParser`, `EnvLookup`)
//! - **Adapters**: The `.env` file reader, the environment lookup and project root
//!   discovery
//! - **Service**: `EnvStore`, which orchestrates loading and retrieval
//!
//! # Features
//!
//! - **First definition wins**: across lines and across files
//! - **Variable substitution**: against earlier keys, then the environment
//! - **Type sniffing**: `8080` is an integer, `[a, b]` a list, `{'k': 1}` a map
//! - **Decryption**: base64 envelopes, and AES-CFB for raw payloads
//! - **Sticky load errors**: a failed ingestion surfaces on every retrieval
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use hexenv::prelude::*;
//!
//! # fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
//! // Finds the project root and reads `.env` from it
//! let store = EnvStore::builder().try_build()?;
//!
//! let port = store.get_value("PORT", Some("int"), Some("8080"))?;
//! let hosts = store.get_value("HOSTS", Some("list"), Some("[localhost]"))?;
//! let password = store.get_encrypted_value("DB_PASSWORD", Some("str"), None, "")?;
//!
//! println!("port={port} hosts={hosts} password set={}", password.as_str().is_some());
//! # Ok(())
//! # }
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![warn(clippy::all)]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

/// Commonly used types and traits.
///
/// This module re-exports the most commonly used types and traits for convenient access.
pub mod prelude {
    pub use crate::domain::{
        ConfigError, ConfigurationService, LoadReport, RawEntry, ResolvedValues, Result,
        TypedValue, ValueKind,
    };
    pub use crate::ports::{ConfigParser, EnvLookup};

    pub use crate::adapters::{DotenvFileAdapter, DotenvParser, EnvVarAdapter};
    pub use crate::service::{EnvStore, EnvStoreBuilder};
}
