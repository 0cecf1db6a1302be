//! # Merkle Tree
//!
//! Binary Merkle tree over index-ordered leaves.
//!
//! - Parents use sorted-pair hashing, so proofs carry no left/right flags.
//! - A lone node at the end of an odd-length level is promoted unchanged and
//!   contributes no proof element.
//! - A one-leaf tree's root is the leaf itself.
//!
//! Construction and verification share `next_level` and `hash_sorted_pair`;
//! changing either breaks compatibility with escrow verifiers.

use super::hashing::hash_sorted_pair;
use crate::domain::{CommitmentError, Hash, HashLock, MerkleLeaf, MerkleNode, MerkleProof};
use tracing::debug;

/// Compute the Merkle root over `leaves`.
pub fn merkle_root(leaves: &[MerkleLeaf]) -> Result<Hash, CommitmentError> {
    let mut level = leaf_level(leaves)?;
    while level.len() > 1 {
        level = next_level(&level);
    }
    Ok(level[0])
}

/// Build the sibling path for leaf `index`.
pub fn build_proof(leaves: &[MerkleLeaf], index: usize) -> Result<MerkleProof, CommitmentError> {
    let mut level = leaf_level(leaves)?;
    if index >= level.len() {
        return Err(CommitmentError::IndexOutOfRange {
            index,
            len: level.len(),
        });
    }

    let mut siblings = Vec::new();
    let mut position = index;
    while level.len() > 1 {
        // Even positions pair right, odd positions pair left.
        if let Some(sibling) = level.get(position ^ 1) {
            siblings.push(MerkleNode(*sibling));
        }
        level = next_level(&level);
        position /= 2;
    }

    debug!(index, leaves = leaves.len(), depth = siblings.len(), "Built Merkle proof");
    Ok(MerkleProof::new(siblings))
}

/// Recompute the root from `leaf` and `proof` and compare with `root`.
///
/// `index` is not needed to fold sorted pairs and is only recorded for
/// tracing. This function does **not** bind `index`: a valid proof for a leaf
/// verifies under any index. Position is enforced only when the leaf is
/// derived from the index, as [`verify_fill`](super::hash_lock::verify_fill)
/// does through [`leaf_for`](super::leaves::leaf_for).
pub fn verify(proof: &MerkleProof, leaf: &MerkleLeaf, index: usize, root: &HashLock) -> bool {
    let computed = proof
        .siblings()
        .iter()
        .fold(leaf.0, |acc, sibling| hash_sorted_pair(&acc, sibling.as_bytes()));
    let valid = computed == root.0;
    debug!(index, depth = proof.len(), valid, "Verified Merkle proof");
    valid
}

fn leaf_level(leaves: &[MerkleLeaf]) -> Result<Vec<Hash>, CommitmentError> {
    if leaves.is_empty() {
        return Err(CommitmentError::EmptyLeafSet);
    }
    Ok(leaves.iter().map(|leaf| leaf.0).collect())
}

fn next_level(level: &[Hash]) -> Vec<Hash> {
    level
        .chunks(2)
        .map(|pair| match pair.get(1) {
            Some(right) => hash_sorted_pair(&pair[0], right),
            None => pair[0],
        })
        .collect()
}
