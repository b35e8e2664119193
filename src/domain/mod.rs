// SPDX-License-Identifier: MIT OR Apache-2.0

//! Domain layer containing core business logic and types.
//!
//! This module holds the value-resolution pipeline: shape classification,
//! coercion, variable substitution and envelope decryption. None of it performs
//! I/O; files and the process environment reach it through the ports layer.

pub mod coercion;
pub mod entry;
pub mod envelope;
pub mod errors;
pub mod service;
pub mod sniffer;
pub mod substitution;
pub mod typed_value;
pub mod value_kind;

// Re-export commonly used types
pub use entry::{LoadReport, RawEntry};
pub use envelope::{DecryptionMode, EncryptedEnvelope};
pub use errors::{ConfigError, Result};
pub use service::{ConfigurationService, ResolvedValues};
pub use sniffer::Shape;
pub use typed_value::TypedValue;
pub use value_kind::ValueKind;
