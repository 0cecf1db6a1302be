//! # Domain Errors
//!
//! Error types for the Swap Coordinator.

use serde::Serialize;
use thiserror::Error;
use xs_01_commitment::CommitmentError;
use xs_02_timelock::{Side, TimelockError};

/// Coordinator error types.
#[derive(Debug, Error)]
pub enum CoordinatorError {
    /// Commitment engine rejected the input or the reveal.
    #[error(transparent)]
    Commitment(#[from] CommitmentError),

    /// Timelock rejected the configuration or the action.
    #[error(transparent)]
    Timelock(#[from] TimelockError),

    /// Order requested with zero parts.
    #[error("Order must have at least one part")]
    ZeroParts,

    /// Order requested with more parts than configured.
    #[error("Too many parts: {requested} (max {max})")]
    TooManyParts {
        /// Requested part count
        requested: u32,
        /// Configured maximum
        max: u32,
    },

    /// Destination cancellation would open after source cancellation.
    #[error("Unsafe cross-chain ordering: cancel_dst={cancel_dst}s is after cancel_src={cancel_src}s")]
    UnsafeCrossChainOrdering {
        /// Destination cancel offset
        cancel_dst: u64,
        /// Source cancel offset
        cancel_src: u64,
    },

    /// Escrow stores a different hash-lock than the order.
    #[error("Hash-lock mismatch: escrow {escrow}, order {order}")]
    HashLockMismatch {
        /// Hash-lock observed on the escrow
        escrow: String,
        /// Hash-lock of the order
        order: String,
    },

    /// Escrow observed on the wrong side.
    #[error("Escrow side mismatch: expected {expected}, got {actual}")]
    SideMismatch {
        /// Side the operation needed
        expected: Side,
        /// Side of the escrow given
        actual: Side,
    },

    /// Fill index outside the order.
    #[error("Secret index {index} unknown for order with {parts} parts")]
    SecretIndexUnknown {
        /// Requested index
        index: usize,
        /// Order part count
        parts: u32,
    },

    /// Relayer request failed.
    #[error("Relayer error: {0}")]
    Relayer(String),

    /// Chain clock unavailable.
    #[error("Clock error: {0}")]
    Clock(String),

    /// Configuration could not be loaded or is invalid.
    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// How a failure should be surfaced to users.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorClass {
    /// Caller bug: wrong sizes, bad hex, bad indices, wrong sides.
    MalformedRequest,
    /// Reveal does not match the commitment. Expected from adversaries.
    VerificationFailed,
    /// The window for this action is not open at the moment.
    TimelockNotOpen,
    /// A collaborator (clock, relayer) could not be reached.
    Unavailable,
    /// Offsets or limits are misconfigured.
    Configuration,
}

impl CoordinatorError {
    /// Classify for user-facing reporting.
    pub fn class(&self) -> ErrorClass {
        match self {
            Self::Commitment(e) if e.is_verification_failure() => ErrorClass::VerificationFailed,
            Self::HashLockMismatch { .. } => ErrorClass::VerificationFailed,
            Self::Commitment(_)
            | Self::ZeroParts
            | Self::TooManyParts { .. }
            | Self::SideMismatch { .. }
            | Self::SecretIndexUnknown { .. } => ErrorClass::MalformedRequest,
            Self::Timelock(TimelockError::ActionNotPermitted { .. }) => ErrorClass::TimelockNotOpen,
            Self::Timelock(TimelockError::InvalidTimelockOrdering { .. })
            | Self::UnsafeCrossChainOrdering { .. }
            | Self::Config(_) => ErrorClass::Configuration,
            Self::Timelock(_) => ErrorClass::MalformedRequest,
            Self::Relayer(_) | Self::Clock(_) => ErrorClass::Unavailable,
        }
    }
}
