//! # Merkle Leaves
//!
//! One leaf per partial-fill slot, binding the fill index to its secret hash:
//! `keccak256(u64_be(index) ‖ secret_hash)`. The index is the packed
//! big-endian `uint64` used by escrow verifiers, so leaves are position
//! dependent and never interchangeable.

use super::hashing::keccak256_concat;
use super::secret::secret_hash_of;
use crate::domain::{MerkleLeaf, SecretHash, SecureSecret};

/// Leaf for one fill slot.
pub fn leaf_for(index: usize, secret_hash: &SecretHash) -> MerkleLeaf {
    let encoded_index = (index as u64).to_be_bytes();
    MerkleLeaf(keccak256_concat(&encoded_index, secret_hash.as_bytes()))
}

/// Build leaves from secrets, hashing each secret first.
pub fn build_leaves(secrets: &[SecureSecret]) -> Vec<MerkleLeaf> {
    secrets
        .iter()
        .enumerate()
        .map(|(index, secret)| leaf_for(index, &secret_hash_of(secret)))
        .collect()
}

/// Build leaves from secret hashes already at hand.
pub fn build_leaves_from_hashes(secret_hashes: &[SecretHash]) -> Vec<MerkleLeaf> {
    secret_hashes
        .iter()
        .enumerate()
        .map(|(index, hash)| leaf_for(index, hash))
        .collect()
}
