//! Keccak-256 primitives shared by every commitment algorithm.

use crate::domain::Hash;
use sha3::{Digest, Keccak256};

/// Keccak-256 of a single buffer.
pub fn keccak256(data: &[u8]) -> Hash {
    let mut hasher = Keccak256::new();
    hasher.update(data);
    hasher.finalize().into()
}

/// Keccak-256 of `left ‖ right`.
pub fn keccak256_concat(left: &[u8], right: &[u8]) -> Hash {
    let mut hasher = Keccak256::new();
    hasher.update(left);
    hasher.update(right);
    hasher.finalize().into()
}

/// Commutative parent hash: the smaller node always goes first.
pub fn hash_sorted_pair(a: &Hash, b: &Hash) -> Hash {
    if a <= b {
        keccak256_concat(a, b)
    } else {
        keccak256_concat(b, a)
    }
}
