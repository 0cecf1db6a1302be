//! # Domain Errors
//!
//! Error types for the Timelock State Machine.

use super::value_objects::{Action, Side, Stage};
use thiserror::Error;

/// Timelock error types.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimelockError {
    /// Offsets are not strictly increasing on one side.
    #[error("Invalid timelock ordering on {side}: {earlier}={earlier_secs}s must be before {later}={later_secs}s")]
    InvalidTimelockOrdering {
        /// Side whose offsets are out of order
        side: Side,
        /// Name of the offset that must come first
        earlier: &'static str,
        /// Its value in seconds
        earlier_secs: u64,
        /// Name of the offset that must come later
        later: &'static str,
        /// Its value in seconds
        later_secs: u64,
    },

    /// The requested action is not legal in the current window.
    #[error("{action} not permitted on {side} escrow during {stage}")]
    ActionNotPermitted {
        /// Requested action
        action: Action,
        /// Escrow side
        side: Side,
        /// Stage at evaluation time
        stage: Stage,
    },

    /// Encoded timelock has the wrong size.
    #[error("Invalid encoded timelock length: expected {expected} bytes, got {actual}")]
    InvalidEncodedLength {
        /// Required length
        expected: usize,
        /// Length received
        actual: usize,
    },

    /// Binary encoding failed.
    #[error("Timelock codec error: {0}")]
    Codec(String),
}
