//! # Domain Value Objects
//!
//! Immutable 32-byte values exchanged between maker, resolver and escrow.
//! All of them display and serialize as `0x`-prefixed lowercase hex.

use super::errors::{CommitmentError, Hash, HASH_LEN};
use serde::{Deserialize, Serialize};

/// Encode bytes as `0x`-prefixed lowercase hex.
pub fn encode_hex(bytes: &[u8]) -> String {
    format!("0x{}", hex::encode(bytes))
}

/// Decode `0x`-prefixed (or bare) hex into exactly 32 bytes.
pub fn decode_hex32(s: &str) -> Result<Hash, CommitmentError> {
    let digits = s.strip_prefix("0x").unwrap_or(s);
    let bytes = hex::decode(digits).map_err(|e| CommitmentError::InvalidEncoding(e.to_string()))?;
    if bytes.len() != HASH_LEN {
        return Err(CommitmentError::InvalidInputLength {
            expected: HASH_LEN,
            actual: bytes.len(),
        });
    }
    let mut out = [0u8; HASH_LEN];
    out.copy_from_slice(&bytes);
    Ok(out)
}

macro_rules! hash_newtype {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name(pub $crate::domain::errors::Hash);

        impl $name {
            /// Borrow the raw 32 bytes.
            pub fn as_bytes(&self) -> &$crate::domain::errors::Hash {
                &self.0
            }

            /// `0x`-prefixed hex form.
            pub fn to_hex(&self) -> String {
                encode_hex(&self.0)
            }
        }

        impl From<$crate::domain::errors::Hash> for $name {
            fn from(bytes: $crate::domain::errors::Hash) -> Self {
                Self(bytes)
            }
        }

        impl AsRef<[u8]> for $name {
            fn as_ref(&self) -> &[u8] {
                &self.0
            }
        }

        impl std::fmt::Debug for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}({})", stringify!($name), self.to_hex())
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.to_hex())
            }
        }

        impl std::str::FromStr for $name {
            type Err = CommitmentError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                decode_hex32(s).map(Self)
            }
        }

        impl Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                serializer.serialize_str(&self.to_hex())
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let s = String::deserialize(deserializer)?;
                s.parse().map_err(serde::de::Error::custom)
            }
        }
    };
}

hash_newtype!(
    /// `keccak256(secret)`. Stored per fill, revealed together with the secret.
    SecretHash
);

hash_newtype!(
    /// `keccak256(u64_be(index) ‖ secret_hash)`. One per partial-fill slot.
    MerkleLeaf
);

hash_newtype!(
    /// Interior node or sibling hash inside a Merkle proof.
    MerkleNode
);

hash_newtype!(
    /// The on-chain commitment: a secret hash (single fill) or a Merkle root
    /// (multi fill). Which one is decided by the order's part count.
    HashLock
);

/// Sibling path from one leaf to the Merkle root, bottom-up.
///
/// Levels where the node was promoted without a sibling contribute no entry.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MerkleProof(Vec<MerkleNode>);

impl MerkleProof {
    /// Create a proof from sibling hashes ordered leaf to root.
    pub fn new(siblings: Vec<MerkleNode>) -> Self {
        Self(siblings)
    }

    /// Proof used for single-fill reveals.
    pub fn empty() -> Self {
        Self(Vec::new())
    }

    /// Sibling hashes in folding order.
    pub fn siblings(&self) -> &[MerkleNode] {
        &self.0
    }

    /// Number of siblings.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True for a single-leaf tree.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<Hash>> for MerkleProof {
    fn from(siblings: Vec<Hash>) -> Self {
        Self(siblings.into_iter().map(MerkleNode).collect())
    }
}
