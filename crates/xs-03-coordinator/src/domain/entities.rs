//! # Domain Entities
//!
//! Orders as the maker holds them, escrows as a resolver observes them, and
//! the records exchanged with the relayer.

use super::errors::CoordinatorError;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use xs_01_commitment::{
    build_leaves_from_hashes, build_proof, HashLock, MerkleLeaf, MerkleProof, SecretHash,
    SecureSecret,
};
use xs_02_timelock::{Action, Side, Stage, Timelock, TimelockOffsets};

/// Order identifier shared with the relayer.
pub type OrderId = Uuid;

/// Maker-side order: the commitment plus every secret behind it.
///
/// Secrets stay here until [`reveal_for`](Self::reveal_for) hands one out.
#[derive(Clone, Debug)]
pub struct PreparedOrder {
    order_id: OrderId,
    hash_lock: HashLock,
    offsets: TimelockOffsets,
    secrets: Vec<SecureSecret>,
    secret_hashes: Vec<SecretHash>,
}

impl PreparedOrder {
    pub(crate) fn new(
        order_id: OrderId,
        hash_lock: HashLock,
        offsets: TimelockOffsets,
        secrets: Vec<SecureSecret>,
        secret_hashes: Vec<SecretHash>,
    ) -> Self {
        Self {
            order_id,
            hash_lock,
            offsets,
            secrets,
            secret_hashes,
        }
    }

    /// Order identifier.
    pub fn order_id(&self) -> OrderId {
        self.order_id
    }

    /// Commitment stored by both escrows.
    pub fn hash_lock(&self) -> &HashLock {
        &self.hash_lock
    }

    /// Offsets both escrows are deployed with.
    pub fn offsets(&self) -> &TimelockOffsets {
        &self.offsets
    }

    /// Number of fill slots.
    pub fn parts(&self) -> u32 {
        self.secrets.len() as u32
    }

    /// True when the hash-lock is a Merkle root.
    pub fn is_multi_fill(&self) -> bool {
        self.secrets.len() > 1
    }

    /// Secret hashes in fill order.
    pub fn secret_hashes(&self) -> &[SecretHash] {
        &self.secret_hashes
    }

    /// Merkle leaves in fill order.
    pub fn leaves(&self) -> Vec<MerkleLeaf> {
        build_leaves_from_hashes(&self.secret_hashes)
    }

    /// Inclusion proof for fill `index`; empty for single-fill orders.
    pub fn proof_for(&self, index: usize) -> Result<MerkleProof, CoordinatorError> {
        self.check_index(index)?;
        if !self.is_multi_fill() {
            return Ok(MerkleProof::empty());
        }
        Ok(build_proof(&self.leaves(), index)?)
    }

    /// Everything a withdrawer needs for fill `index`.
    pub fn reveal_for(&self, index: usize) -> Result<FillReveal, CoordinatorError> {
        Ok(FillReveal {
            secret: self.secret(index)?.clone(),
            index,
            proof: self.proof_for(index)?,
        })
    }

    /// Public part of the order, safe to share.
    pub fn commitment(&self) -> OrderCommitment {
        OrderCommitment {
            order_id: self.order_id,
            hash_lock: self.hash_lock,
            parts: self.parts(),
            secret_hashes: self.secret_hashes.clone(),
            offsets: self.offsets,
        }
    }

    pub(crate) fn secret(&self, index: usize) -> Result<&SecureSecret, CoordinatorError> {
        self.check_index(index)?;
        Ok(&self.secrets[index])
    }

    fn check_index(&self, index: usize) -> Result<(), CoordinatorError> {
        if index >= self.secrets.len() {
            return Err(CoordinatorError::SecretIndexUnknown {
                index,
                parts: self.parts(),
            });
        }
        Ok(())
    }
}

/// Shareable view of an order: no secrets.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderCommitment {
    /// Order identifier.
    pub order_id: OrderId,
    /// Hash-lock stored on both escrows.
    pub hash_lock: HashLock,
    /// Number of fill slots.
    pub parts: u32,
    /// Secret hashes in fill order.
    pub secret_hashes: Vec<SecretHash>,
    /// Timelock offsets.
    pub offsets: TimelockOffsets,
}

/// Data presented at withdrawal.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FillReveal {
    /// Secret for the fill.
    pub secret: SecureSecret,
    /// Fill index; 0 for single-fill orders.
    pub index: usize,
    /// Inclusion proof; empty for single-fill orders.
    pub proof: MerkleProof,
}

/// An escrow as observed on its chain.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EscrowView {
    /// Source or destination.
    pub side: Side,
    /// Hash-lock the escrow stores.
    pub hash_lock: HashLock,
    /// The escrow's timelock.
    pub timelock: Timelock,
}

/// Fill whose escrows are deployed and waiting for the maker's secret.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadyFill {
    /// Fill index.
    pub idx: usize,
    /// Source escrow deployment transaction.
    pub src_escrow_deploy_tx: String,
    /// Destination escrow deployment transaction.
    pub dst_escrow_deploy_tx: String,
}

/// Secret the maker has handed to the relayer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublishedSecret {
    /// Fill index.
    pub idx: usize,
    /// Revealed secret.
    pub secret: SecureSecret,
}

/// Outcome of asking to reveal a secret.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "decision", rename_all = "snake_case")]
pub enum RevealDecision {
    /// Secret submitted to the relayer.
    Revealed {
        /// Fill index revealed
        index: usize,
    },
    /// Too early; ask again at `until`.
    Deferred {
        /// Earliest time both escrows are withdrawable
        until: u64,
    },
    /// Must not reveal for this pair of escrows.
    Refused {
        /// Why
        reason: String,
    },
}

/// Upcoming stage change.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct NextStage {
    /// Stage about to open.
    pub stage: Stage,
    /// Absolute time it opens.
    pub opens_at: u64,
}

/// Stage of an escrow at a given time.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct StageReport {
    /// Escrow side.
    pub side: Side,
    /// Time the report was computed for.
    pub now: u64,
    /// Current stage.
    pub stage: Stage,
    /// Actions legal now.
    pub permitted: Vec<Action>,
    /// Next stage, if any.
    pub next: Option<NextStage>,
}
