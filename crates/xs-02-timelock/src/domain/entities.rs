//! # Domain Entities
//!
//! The timelock attached to each escrow, and the offsets it is built from.
//!
//! [`TimelockRecord`] is the flat, fixed-order layout an escrow contract
//! stores. [`Timelock`] is the validated form every classifier works on; it
//! serializes through the record so the binary layout never drifts.

use super::errors::TimelockError;
use super::invariants::invariant_offsets_ordering;
use super::value_objects::{Side, Stage};
use serde::{Deserialize, Serialize};

/// Escrow object identifier (32 bytes).
pub type EscrowId = [u8; 32];

/// Encoded size of a timelock: escrow id, deployment time and seven offsets.
pub const ENCODED_TIMELOCK_LEN: usize = 32 + 8 + 7 * 8;

/// Window offsets in seconds, relative to escrow deployment.
///
/// Configured once per order and copied into both escrows.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelockOffsets {
    /// Source: resolver-only withdrawal opens.
    pub withdraw_src: u64,
    /// Source: public withdrawal opens.
    pub public_withdraw_src: u64,
    /// Source: resolver-only cancellation opens.
    pub cancel_src: u64,
    /// Source: public cancellation opens.
    pub public_cancel_src: u64,
    /// Destination: resolver-only withdrawal opens.
    pub withdraw_dst: u64,
    /// Destination: public withdrawal opens.
    pub public_withdraw_dst: u64,
    /// Destination: resolver-only cancellation opens.
    pub cancel_dst: u64,
}

impl Default for TimelockOffsets {
    fn default() -> Self {
        Self {
            withdraw_src: 10,
            public_withdraw_src: 120,
            cancel_src: 121,
            public_cancel_src: 122,
            withdraw_dst: 10,
            public_withdraw_dst: 100,
            cancel_dst: 101,
        }
    }
}

impl TimelockOffsets {
    /// Check the per-side ordering invariant.
    pub fn validate(&self) -> Result<(), TimelockError> {
        invariant_offsets_ordering(self)
    }

    /// Stage boundaries for one side, ascending.
    pub fn stage_offsets(&self, side: Side) -> Vec<(Stage, u64)> {
        match side {
            Side::Source => vec![
                (Stage::WithdrawWindow, self.withdraw_src),
                (Stage::PublicWithdrawWindow, self.public_withdraw_src),
                (Stage::CancelWindow, self.cancel_src),
                (Stage::PublicCancelWindow, self.public_cancel_src),
            ],
            Side::Destination => vec![
                (Stage::WithdrawWindow, self.withdraw_dst),
                (Stage::PublicWithdrawWindow, self.public_withdraw_dst),
                (Stage::CancelWindow, self.cancel_dst),
            ],
        }
    }
}

/// Flat on-chain layout of a timelock. Field order is the wire order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelockRecord {
    /// Owning escrow.
    pub escrow_id: EscrowId,
    /// Escrow creation time (chain clock, seconds).
    pub deployed_at: u64,
    /// See [`TimelockOffsets::withdraw_src`].
    pub withdraw_src: u64,
    /// See [`TimelockOffsets::public_withdraw_src`].
    pub public_withdraw_src: u64,
    /// See [`TimelockOffsets::cancel_src`].
    pub cancel_src: u64,
    /// See [`TimelockOffsets::public_cancel_src`].
    pub public_cancel_src: u64,
    /// See [`TimelockOffsets::withdraw_dst`].
    pub withdraw_dst: u64,
    /// See [`TimelockOffsets::public_withdraw_dst`].
    pub public_withdraw_dst: u64,
    /// See [`TimelockOffsets::cancel_dst`].
    pub cancel_dst: u64,
}

/// Validated, immutable timelock of one escrow.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "TimelockRecord", into = "TimelockRecord")]
pub struct Timelock {
    escrow_id: EscrowId,
    deployed_at: u64,
    offsets: TimelockOffsets,
}

impl Timelock {
    /// Create a timelock for an escrow deployed at `deployed_at`.
    ///
    /// Fails with `InvalidTimelockOrdering` if offsets are out of order.
    pub fn new(
        escrow_id: EscrowId,
        deployed_at: u64,
        offsets: TimelockOffsets,
    ) -> Result<Self, TimelockError> {
        offsets.validate()?;
        Ok(Self {
            escrow_id,
            deployed_at,
            offsets,
        })
    }

    /// Owning escrow.
    pub fn escrow_id(&self) -> &EscrowId {
        &self.escrow_id
    }

    /// Deployment timestamp.
    pub fn deployed_at(&self) -> u64 {
        self.deployed_at
    }

    /// Configured offsets.
    pub fn offsets(&self) -> &TimelockOffsets {
        &self.offsets
    }

    /// Absolute time at which `stage` opens on `side`.
    ///
    /// Returns `None` for a stage the side never reaches.
    pub fn window_start(&self, side: Side, stage: Stage) -> Option<u64> {
        if stage == Stage::Locked {
            return Some(self.deployed_at);
        }
        self.offsets
            .stage_offsets(side)
            .into_iter()
            .find(|(s, _)| *s == stage)
            .map(|(_, offset)| self.deployed_at.saturating_add(offset))
    }

    /// Flat record in wire order.
    pub fn to_record(&self) -> TimelockRecord {
        TimelockRecord::from(*self)
    }

    /// Fixed-width little-endian encoding of the flat record.
    pub fn encode(&self) -> Result<Vec<u8>, TimelockError> {
        bincode::serialize(self).map_err(|e| TimelockError::Codec(e.to_string()))
    }

    /// Decode and re-validate an encoded timelock.
    pub fn decode(bytes: &[u8]) -> Result<Self, TimelockError> {
        if bytes.len() != ENCODED_TIMELOCK_LEN {
            return Err(TimelockError::InvalidEncodedLength {
                expected: ENCODED_TIMELOCK_LEN,
                actual: bytes.len(),
            });
        }
        let record: TimelockRecord =
            bincode::deserialize(bytes).map_err(|e| TimelockError::Codec(e.to_string()))?;
        Self::try_from(record)
    }
}

impl TryFrom<TimelockRecord> for Timelock {
    type Error = TimelockError;

    fn try_from(record: TimelockRecord) -> Result<Self, Self::Error> {
        Self::new(
            record.escrow_id,
            record.deployed_at,
            TimelockOffsets {
                withdraw_src: record.withdraw_src,
                public_withdraw_src: record.public_withdraw_src,
                cancel_src: record.cancel_src,
                public_cancel_src: record.public_cancel_src,
                withdraw_dst: record.withdraw_dst,
                public_withdraw_dst: record.public_withdraw_dst,
                cancel_dst: record.cancel_dst,
            },
        )
    }
}

impl From<Timelock> for TimelockRecord {
    fn from(timelock: Timelock) -> Self {
        let o = timelock.offsets;
        Self {
            escrow_id: timelock.escrow_id,
            deployed_at: timelock.deployed_at,
            withdraw_src: o.withdraw_src,
            public_withdraw_src: o.public_withdraw_src,
            cancel_src: o.cancel_src,
            public_cancel_src: o.public_cancel_src,
            withdraw_dst: o.withdraw_dst,
            public_withdraw_dst: o.public_withdraw_dst,
            cancel_dst: o.cancel_dst,
        }
    }
}
