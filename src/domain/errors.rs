// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the configuration crate.
//!
//! This module defines every error that can occur while ingesting `.env` files or
//! resolving values out of the store. All errors use `thiserror` and are `Clone` so
//! that an ingestion failure can be kept on the store and handed back to every
//! subsequent retrieval.

use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;

/// The main error type for configuration operations.
///
/// Ingestion errors (`FileNotFound`, `RootNotFound`, `IoError`, `FileTooLarge`) are
/// sticky on an [`EnvStore`](crate::service::EnvStore); everything else is returned
/// per call.
///
/// # Examples
///
/// ```
/// use hexenv::domain::errors::ConfigError;
///
/// fn get_port() -> Result<i64, ConfigError> {
///     Err(ConfigError::ConfigKeyNotFound {
///         key: "PORT".to_string(),
///     })
/// }
/// ```
#[derive(Debug, Clone, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// The configuration file does not exist.
    #[error("env file does not exist: {}", path.display())]
    FileNotFound {
        /// The path that was checked
        path: PathBuf,
    },

    /// No ancestor of the start directory contains a root marker.
    #[error("project root not found from {} (markers: {})", start.display(), markers.join(", "))]
    RootNotFound {
        /// The directory the search started from
        start: PathBuf,
        /// The marker names that were searched for
        markers: Vec<String>,
    },

    /// An I/O error occurred while checking, opening or reading a file.
    #[error("I/O error on {}: {source}", path.display())]
    IoError {
        /// The path being accessed
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: Arc<std::io::Error>,
    },

    /// The configuration file exceeds the size cap.
    #[error("configuration file too large: {size} bytes (max {max} bytes)")]
    FileTooLarge {
        /// Actual size in bytes
        size: u64,
        /// Maximum accepted size in bytes
        max: u64,
    },

    /// The requested kind is not one of the recognized type names.
    #[error("'{kind}' is not a valid type name")]
    InvalidTypeName {
        /// The rejected kind
        kind: String,
    },

    /// The value's shape does not match the requested kind.
    #[error("unable to convert value '{value}' to {target_type}")]
    ConversionError {
        /// The raw value
        value: String,
        /// The requested kind
        target_type: String,
    },

    /// A map literal is missing its braces or is not a JSON object.
    #[error("invalid map format: {message}")]
    MapFormatError {
        /// What went wrong
        message: String,
    },

    /// The encrypted payload is not valid base64.
    #[error("failed to decode base64 payload: {source}")]
    Base64DecodeError {
        /// The underlying decoder error
        #[source]
        source: base64::DecodeError,
    },

    /// The decoded AES buffer is shorter than one block.
    #[error("encrypted data is too short for AES: {len} bytes")]
    TooShortError {
        /// Length of the decoded buffer
        len: usize,
    },

    /// The decryption key is not a valid AES key size.
    #[error("failed to create cipher: key length {key_len} is not 16, 24 or 32 bytes")]
    CipherInitError {
        /// Length of the supplied key
        key_len: usize,
    },

    /// The value is not wrapped in an `ENC(...)` envelope.
    #[error("value is not an encrypted value")]
    NotEncryptedError,

    /// A value that must be text is not.
    #[error("unable to convert value to string: {message}")]
    StringConversionError {
        /// What went wrong
        message: String,
    },

    /// The key is absent and no default was supplied.
    #[error("Configuration key not found: {key}")]
    ConfigKeyNotFound {
        /// The key that was not found
        key: String,
    },
}

impl ConfigError {
    /// Creates an `IoError` for `path`.
    pub fn io(path: impl Into<PathBuf>, err: std::io::Error) -> Self {
        ConfigError::IoError {
            path: path.into(),
            source: Arc::new(err),
        }
    }

    /// Creates a `ConversionError` for a value and target kind.
    pub fn conversion(value: impl Into<String>, target_type: impl Into<String>) -> Self {
        ConfigError::ConversionError {
            value: value.into(),
            target_type: target_type.into(),
        }
    }

    /// Returns `true` for errors raised while ingesting files.
    pub fn is_ingestion(&self) -> bool {
        matches!(
            self,
            ConfigError::FileNotFound { .. }
                | ConfigError::RootNotFound { .. }
                | ConfigError::IoError { .. }
                | ConfigError::FileTooLarge { .. }
        )
    }
}

impl From<base64::DecodeError> for ConfigError {
    fn from(source: base64::DecodeError) -> Self {
        ConfigError::Base64DecodeError { source }
    }
}

/// A specialized Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;
