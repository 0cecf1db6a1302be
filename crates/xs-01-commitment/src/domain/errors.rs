//! # Domain Errors
//!
//! Error types for the Commitment Engine.

use thiserror::Error;

/// Hash type (32-byte Keccak-256).
pub type Hash = [u8; 32];

/// Length of every hash produced by the engine.
pub const HASH_LEN: usize = 32;

/// Length of a raw secret.
pub const SECRET_LEN: usize = 32;

/// Commitment engine error types.
///
/// `VerificationFailed` is the only variant that signals a dishonest or
/// mistaken reveal; every other variant is a malformed request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommitmentError {
    /// Secret or hash is not exactly the expected number of bytes.
    #[error("Invalid input length: expected {expected} bytes, got {actual}")]
    InvalidInputLength {
        /// Required length in bytes
        expected: usize,
        /// Length received
        actual: usize,
    },

    /// Input is not valid hex.
    #[error("Invalid encoding: {0}")]
    InvalidEncoding(String),

    /// Leaf or proof index outside the leaf set.
    #[error("Index out of range: {index} (leaf count {len})")]
    IndexOutOfRange {
        /// Requested index
        index: usize,
        /// Number of leaves
        len: usize,
    },

    /// A Merkle operation was given no leaves.
    #[error("Empty leaf set")]
    EmptyLeafSet,

    /// Recomputed hash or root does not match the stored commitment.
    #[error("Verification failed: reveal does not match hash-lock")]
    VerificationFailed,
}

impl CommitmentError {
    /// True when the error is a failed reveal rather than a malformed input.
    pub fn is_verification_failure(&self) -> bool {
        matches!(self, Self::VerificationFailed)
    }
}
