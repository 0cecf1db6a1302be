//! # Algorithms Module
//!
//! Pure commitment algorithms. Identical inputs always yield identical outputs.

pub mod hash_lock;
pub mod hashing;
pub mod leaves;
pub mod merkle;
pub mod secret;

pub use hash_lock::{commit_for_fills, commit_multiple, commit_single, verify_fill};
pub use leaves::{build_leaves, build_leaves_from_hashes, leaf_for};
pub use merkle::{build_proof, merkle_root, verify};
pub use secret::{generate_secret, generate_secrets, hash_secret, parse_secret, verify_secret};
