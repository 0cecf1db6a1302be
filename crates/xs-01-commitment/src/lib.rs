//! # XS-01 Commitment Engine
//!
//! Hash-lock commitments for cross-chain atomic swaps.
//!
//! **Subsystem ID:** 01
//! **Architecture:** Pure domain + algorithms (no I/O)
//! **Hash function:** Keccak-256
//!
//! ## Purpose
//!
//! Produce the values an escrow stores and later checks:
//! - Secrets and their hashes for single-fill orders
//! - Index-bound Merkle leaves and a Merkle root for multi-fill orders
//! - Inclusion proofs for the fill being settled
//!
//! ## Merkle Construction
//!
//! | Rule | Choice |
//! |------|--------|
//! | Leaf | `keccak256(u64_be(index) ‖ keccak256(secret))` |
//! | Leaf order | Index order, never sorted |
//! | Parent | `keccak256(min(a, b) ‖ max(a, b))` |
//! | Odd level | Lone trailing node promoted unchanged |
//! | One leaf | Root is the leaf |
//!
//! ## Module Structure
//!
//! ```text
//! xs-01-commitment/
//! ├── domain/          # SecureSecret, SecretHash, MerkleLeaf, HashLock, errors
//! └── algorithms/      # Secret generation, leaves, Merkle tree, hash-locks
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod algorithms;
pub mod domain;

// Re-exports
pub use algorithms::{
    build_leaves, build_leaves_from_hashes, build_proof, commit_for_fills, commit_multiple,
    commit_single, generate_secret, generate_secrets, hash_secret, leaf_for, merkle_root,
    parse_secret, verify, verify_fill, verify_secret,
};
pub use domain::{
    CommitmentError, Hash, HashLock, MerkleLeaf, MerkleNode, MerkleProof, SecretHash,
    SecureSecret, HASH_LEN, SECRET_LEN,
};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
