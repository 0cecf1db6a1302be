//! # Secret Generation and Verification
//!
//! Single-fill operations: generate a secret, hash it, check a reveal.

use super::hashing::keccak256;
use crate::domain::{CommitmentError, HashLock, SecretHash, SecureSecret, SECRET_LEN};
use rand::RngCore;
use tracing::debug;

/// Generate a cryptographically secure random secret.
pub fn generate_secret() -> SecureSecret {
    let mut bytes = [0u8; SECRET_LEN];
    rand::thread_rng().fill_bytes(&mut bytes);
    SecureSecret::new(bytes)
}

/// Generate one secret per fill slot.
pub fn generate_secrets(count: usize) -> Vec<SecureSecret> {
    (0..count).map(|_| generate_secret()).collect()
}

/// Hash a raw secret with Keccak-256.
///
/// The input must be exactly 32 bytes.
pub fn hash_secret(secret: &[u8]) -> Result<SecretHash, CommitmentError> {
    if secret.len() != SECRET_LEN {
        return Err(CommitmentError::InvalidInputLength {
            expected: SECRET_LEN,
            actual: secret.len(),
        });
    }
    Ok(SecretHash(keccak256(secret)))
}

/// Hash an already length-checked secret.
pub(crate) fn secret_hash_of(secret: &SecureSecret) -> SecretHash {
    SecretHash(keccak256(secret.as_bytes()))
}

/// Parse a secret from `0x`-prefixed hex.
pub fn parse_secret(s: &str) -> Result<SecureSecret, CommitmentError> {
    SecureSecret::from_hex(s)
}

/// Check a single-fill reveal against the stored hash-lock.
pub fn verify_secret(secret: &SecureSecret, hash_lock: &HashLock) -> Result<(), CommitmentError> {
    let computed = secret_hash_of(secret);
    if computed.as_bytes() != hash_lock.as_bytes() {
        debug!(hash_lock = %hash_lock, "Single-fill reveal rejected");
        return Err(CommitmentError::VerificationFailed);
    }
    Ok(())
}
