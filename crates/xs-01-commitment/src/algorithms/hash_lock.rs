//! # Hash-Lock Construction
//!
//! Two separate commitment paths:
//!
//! | Parts | Hash-lock |
//! |-------|-----------|
//! | 1 | `keccak256(secret)` via [`commit_single`] |
//! | ≥ 2 | Merkle root over index-bound leaves via [`commit_multiple`] |
//!
//! A one-leaf `commit_multiple` is accepted for compatibility but produces a
//! different on-chain value than `commit_single` for the same secret.

use super::leaves::{build_leaves, leaf_for};
use super::merkle::{merkle_root, verify};
use super::secret::secret_hash_of;
use crate::domain::{CommitmentError, HashLock, MerkleLeaf, MerkleProof, SecureSecret};
use tracing::{debug, warn};

/// Hash-lock for a single-fill order.
pub fn commit_single(secret: &SecureSecret) -> HashLock {
    HashLock(secret_hash_of(secret).0)
}

/// Hash-lock for a multi-fill order: the Merkle root over `leaves`.
pub fn commit_multiple(leaves: &[MerkleLeaf]) -> Result<HashLock, CommitmentError> {
    if leaves.len() == 1 {
        warn!("Multi-fill hash-lock built from one leaf; it will not match the single-fill hash-lock");
    }
    let root = merkle_root(leaves)?;
    debug!(leaves = leaves.len(), "Committed multi-fill hash-lock");
    Ok(HashLock(root))
}

/// Pick the commitment path from the number of secrets.
pub fn commit_for_fills(secrets: &[SecureSecret]) -> Result<HashLock, CommitmentError> {
    match secrets {
        [] => Err(CommitmentError::EmptyLeafSet),
        [only] => Ok(commit_single(only)),
        many => commit_multiple(&build_leaves(many)),
    }
}

/// Check a multi-fill reveal: the secret for fill `index`, plus its proof.
pub fn verify_fill(
    secret: &SecureSecret,
    index: usize,
    proof: &MerkleProof,
    hash_lock: &HashLock,
) -> Result<(), CommitmentError> {
    let leaf = leaf_for(index, &secret_hash_of(secret));
    if !verify(proof, &leaf, index, hash_lock) {
        return Err(CommitmentError::VerificationFailed);
    }
    Ok(())
}
