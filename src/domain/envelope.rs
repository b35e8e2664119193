// SPDX-License-Identifier: MIT OR Apache-2.0

//! Encrypted value envelopes.
//!
//! A value written as `ENC(<base64>)` or `enc(<base64>)` is encrypted. Without a
//! key the interior is plain base64. With a key the value is AES in CFB mode: the
//! decoded buffer starts with a 16 byte IV followed by the ciphertext, and the key
//! bytes are used as-is (16, 24 or 32 bytes select AES-128, -192 or -256).
//!
//! In AES mode the base64 decode runs over the whole wrapped string, envelope
//! included, while base64 mode strips the envelope first. Existing encrypted
//! configuration depends on this framing, so it is kept.

use crate::domain::errors::{ConfigError, Result};
use aes::{Aes128, Aes192, Aes256};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use cfb_mode::cipher::{AsyncStreamCipher, KeyIvInit};
use cfb_mode::Decryptor;

/// AES block size, which is also the IV length.
pub const AES_BLOCK_SIZE: usize = 16;

const UPPER_PREFIX: &str = "ENC(";
const LOWER_PREFIX: &str = "enc(";
const SUFFIX: &str = ")";

/// How an envelope is decoded.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DecryptionMode {
    /// Base64 only, no key.
    Base64,
    /// AES-CFB keyed by the caller's key.
    Aes,
}

/// A value recognized as encrypted, paired with the mode it will be decoded in.
///
/// # Examples
///
/// ```
/// use hexenv::domain::envelope::{DecryptionMode, EncryptedEnvelope};
///
/// let envelope = EncryptedEnvelope::parse("ENC(aGVsbG8=)", "").unwrap();
/// assert_eq!(envelope.payload(), "aGVsbG8=");
/// assert_eq!(envelope.mode(), DecryptionMode::Base64);
/// assert_eq!(envelope.decrypt("").unwrap(), b"hello");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EncryptedEnvelope<'a> {
    wrapped: &'a str,
    payload: &'a str,
    mode: DecryptionMode,
}

impl<'a> EncryptedEnvelope<'a> {
    /// Recognizes the envelope around `wrapped` and picks the mode from `key`.
    ///
    /// # Errors
    ///
    /// Returns `NotEncryptedError` if `wrapped` has no envelope.
    pub fn parse(wrapped: &'a str, key: &str) -> Result<Self> {
        let wrapped = wrapped.trim();
        if !is_encrypted(wrapped) {
            return Err(ConfigError::NotEncryptedError);
        }

        let payload = wrapped
            .strip_prefix(UPPER_PREFIX)
            .or_else(|| wrapped.strip_prefix(LOWER_PREFIX))
            .and_then(|rest| rest.strip_suffix(SUFFIX))
            .ok_or(ConfigError::NotEncryptedError)?;

        let mode = if key.is_empty() {
            DecryptionMode::Base64
        } else {
            DecryptionMode::Aes
        };

        Ok(Self {
            wrapped,
            payload,
            mode,
        })
    }

    /// The text between the envelope markers.
    pub fn payload(&self) -> &'a str {
        self.payload
    }

    /// The full value, envelope included.
    pub fn wrapped(&self) -> &'a str {
        self.wrapped
    }

    /// The mode selected at parse time.
    pub fn mode(&self) -> DecryptionMode {
        self.mode
    }

    /// Decodes the envelope into raw plaintext bytes.
    pub fn decrypt(&self, key: &str) -> Result<Vec<u8>> {
        match self.mode {
            DecryptionMode::Base64 => Ok(STANDARD.decode(self.payload)?),
            DecryptionMode::Aes => decrypt_aes(self.wrapped, key.as_bytes()),
        }
    }
}

/// Returns `true` if `value` is wrapped in `ENC(...)` or `enc(...)`.
///
/// # Examples
///
/// ```
/// use hexenv::domain::envelope::is_encrypted;
///
/// assert!(is_encrypted("ENC(abc=)"));
/// assert!(is_encrypted("  enc(abc=)  "));
/// assert!(!is_encrypted("abc"));
/// assert!(!is_encrypted("ENC(abc"));
/// ```
pub fn is_encrypted(value: &str) -> bool {
    let value = value.trim();
    (value.starts_with(UPPER_PREFIX) || value.starts_with(LOWER_PREFIX)) && value.ends_with(SUFFIX)
}

/// Decrypts an enveloped value into a string.
///
/// An empty `key` selects base64 mode, anything else AES mode.
///
/// # Errors
///
/// * `NotEncryptedError` if `wrapped` has no envelope
/// * `Base64DecodeError` if the payload is not valid base64
/// * `TooShortError` if the AES buffer is shorter than the IV
/// * `CipherInitError` if the key is not a valid AES key length
/// * `StringConversionError` if the plaintext is not UTF-8
///
/// # Examples
///
/// ```
/// use hexenv::domain::envelope::decrypt;
///
/// let plain = decrypt("ENC(YXNkamtuYWtqc2Ric2prYmRma2pzaGRiZg==)", "").unwrap();
/// assert_eq!(plain, "asdjknakjsdbsjkbdfkjshdbf");
/// ```
pub fn decrypt(wrapped: &str, key: &str) -> Result<String> {
    let envelope = EncryptedEnvelope::parse(wrapped, key)?;
    let bytes = envelope.decrypt(key)?;
    String::from_utf8(bytes).map_err(|e| ConfigError::StringConversionError {
        message: format!("decrypted value is not valid UTF-8: {}", e),
    })
}

/// Decrypts a base64 buffer laid out as `IV || ciphertext` with AES-CFB.
///
/// # Errors
///
/// * `Base64DecodeError` if `encoded` is not valid base64
/// * `TooShortError` if the decoded buffer is shorter than [`AES_BLOCK_SIZE`]
/// * `CipherInitError` if `key` is not 16, 24 or 32 bytes long
pub fn decrypt_aes(encoded: &str, key: &[u8]) -> Result<Vec<u8>> {
    let decoded = STANDARD.decode(encoded)?;
    if decoded.len() < AES_BLOCK_SIZE {
        return Err(ConfigError::TooShortError { len: decoded.len() });
    }

    let (iv, ciphertext) = decoded.split_at(AES_BLOCK_SIZE);
    let mut buffer = ciphertext.to_vec();

    let init_error = |_| ConfigError::CipherInitError { key_len: key.len() };
    match key.len() {
        16 => Decryptor::<Aes128>::new_from_slices(key, iv)
            .map_err(init_error)?
            .decrypt(&mut buffer),
        24 => Decryptor::<Aes192>::new_from_slices(key, iv)
            .map_err(init_error)?
            .decrypt(&mut buffer),
        32 => Decryptor::<Aes256>::new_from_slices(key, iv)
            .map_err(init_error)?
            .decrypt(&mut buffer),
        key_len => return Err(ConfigError::CipherInitError { key_len }),
    }

    Ok(buffer)
}
