//! # Secure Secret Type
//!
//! Wrapper for swap secrets that zeroizes memory on drop.
//!
//! ## Security
//!
//! A secret is the only thing standing between a resolver and the maker's
//! funds until the maker decides to reveal it. The wrapper keeps it out of
//! `Debug` output and zeroes it when dropped.

use super::errors::{CommitmentError, SECRET_LEN};
use super::value_objects::{decode_hex32, encode_hex};
use serde::{Deserialize, Serialize};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// A 32-byte secret that zeroizes on drop.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct SecureSecret {
    inner: [u8; SECRET_LEN],
}

impl SecureSecret {
    /// Create a new secure secret from bytes.
    pub fn new(bytes: [u8; SECRET_LEN]) -> Self {
        Self { inner: bytes }
    }

    /// Create from a slice; fails unless exactly 32 bytes.
    pub fn from_slice(slice: &[u8]) -> Result<Self, CommitmentError> {
        if slice.len() != SECRET_LEN {
            return Err(CommitmentError::InvalidInputLength {
                expected: SECRET_LEN,
                actual: slice.len(),
            });
        }
        let mut inner = [0u8; SECRET_LEN];
        inner.copy_from_slice(slice);
        Ok(Self { inner })
    }

    /// Parse `0x`-prefixed hex.
    pub fn from_hex(s: &str) -> Result<Self, CommitmentError> {
        decode_hex32(s).map(Self::new)
    }

    /// Get the secret bytes.
    ///
    /// Avoid keeping references to the returned slice.
    pub fn as_bytes(&self) -> &[u8; SECRET_LEN] {
        &self.inner
    }

    /// Hex form for handing the secret to a relayer. Only call when revealing.
    pub fn reveal_hex(&self) -> String {
        encode_hex(&self.inner)
    }
}

impl std::fmt::Debug for SecureSecret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("SecureSecret(***)")
    }
}

impl Serialize for SecureSecret {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.reveal_hex())
    }
}

impl<'de> Deserialize<'de> for SecureSecret {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::from_hex(&s).map_err(serde::de::Error::custom)
    }
}
