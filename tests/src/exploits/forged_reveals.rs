//! # Forged Reveal Attacks
//!
//! A resolver or bystander tries to withdraw without the right secret.
//!
//! | Attack | Expected outcome |
//! |--------|------------------|
//! | Random secret | `VerificationFailed` |
//! | Secret of fill *i* presented as fill *j* | `VerificationFailed` |
//! | Valid secret with a proof for another index | `VerificationFailed` |
//! | Secret from another order | `VerificationFailed` |
//! | Inner Merkle node presented as a leaf | `VerificationFailed` |
//! | Multi-fill secret against a single-fill escrow | `VerificationFailed` |
//! | Index past the last part | `MalformedRequest` |

#[cfg(test)]
mod tests {
    use crate::fixtures::{escrow_pair, Harness};
    use xs_01_commitment::{
        generate_secret, hash_secret, merkle_root, verify, verify_fill, HashLock, MerkleLeaf,
        MerkleProof, SecureSecret,
    };
    use xs_02_timelock::Caller;
    use xs_03_coordinator::{ErrorClass, FillReveal, SwapCoordinationApi};

    const PARTS: u32 = 4;

    async fn withdraw_class(
        h: &Harness,
        parts: u32,
        reveal: &FillReveal,
        hash_lock: &HashLock,
    ) -> Option<ErrorClass> {
        let (src, _) = escrow_pair(*hash_lock, 0);
        h.coordinator
            .authorize_withdrawal(&src, Caller::Resolver, parts, reveal)
            .await
            .err()
            .map(|e| e.class())
    }

    #[tokio::test]
    async fn test_random_secret() {
        let h = Harness::new();
        h.at(15);
        let order = h.coordinator.prepare_order(PARTS).await.unwrap();
        let reveal = FillReveal {
            secret: generate_secret(),
            index: 0,
            proof: order.proof_for(0).unwrap(),
        };
        assert_eq!(
            withdraw_class(&h, PARTS, &reveal, order.hash_lock()).await,
            Some(ErrorClass::VerificationFailed)
        );
    }

    #[tokio::test]
    async fn test_secret_reused_under_other_index() {
        let h = Harness::new();
        h.at(15);
        let order = h.coordinator.prepare_order(PARTS).await.unwrap();
        let leaked = order.reveal_for(0).unwrap();

        for idx in 1..PARTS as usize {
            let reveal = FillReveal {
                secret: leaked.secret.clone(),
                index: idx,
                proof: order.proof_for(idx).unwrap(),
            };
            assert_eq!(
                withdraw_class(&h, PARTS, &reveal, order.hash_lock()).await,
                Some(ErrorClass::VerificationFailed)
            );
        }
    }

    #[tokio::test]
    async fn test_valid_secret_wrong_proof() {
        let h = Harness::new();
        h.at(15);
        let order = h.coordinator.prepare_order(PARTS).await.unwrap();
        let mut reveal = order.reveal_for(2).unwrap();
        reveal.proof = order.proof_for(1).unwrap();
        assert_eq!(
            withdraw_class(&h, PARTS, &reveal, order.hash_lock()).await,
            Some(ErrorClass::VerificationFailed)
        );
    }

    #[tokio::test]
    async fn test_secret_from_other_order() {
        let h = Harness::new();
        h.at(15);
        let victim = h.coordinator.prepare_order(PARTS).await.unwrap();
        let other = h.coordinator.prepare_order(PARTS).await.unwrap();
        let reveal = other.reveal_for(0).unwrap();
        assert_eq!(
            withdraw_class(&h, PARTS, &reveal, victim.hash_lock()).await,
            Some(ErrorClass::VerificationFailed)
        );
    }

    #[tokio::test]
    async fn test_inner_node_as_leaf() {
        let h = Harness::new();
        h.at(15);
        let order = h.coordinator.prepare_order(PARTS).await.unwrap();
        let leaves = order.leaves();

        // Raw Merkle verification accepts the level-1 node with the top sibling
        let full = order.proof_for(0).unwrap();
        let top = MerkleProof::new(vec![full.siblings()[1]]);
        let parent = MerkleLeaf::from(merkle_root(&leaves[..2]).unwrap());
        assert!(verify(&top, &parent, 0, order.hash_lock()));

        // A withdrawal must derive the leaf from a secret, so the node is useless
        let forged = SecureSecret::new(*parent.as_bytes());
        assert!(verify_fill(&forged, 0, &top, order.hash_lock()).is_err());
    }

    #[tokio::test]
    async fn test_multi_fill_secret_against_single_fill_escrow() {
        let h = Harness::new();
        h.at(15);
        let single = h.coordinator.prepare_order(1).await.unwrap();
        let multi = h.coordinator.prepare_order(PARTS).await.unwrap();
        let reveal = multi.reveal_for(0).unwrap();
        assert_eq!(
            withdraw_class(&h, 1, &reveal, single.hash_lock()).await,
            Some(ErrorClass::VerificationFailed)
        );

        // The honest secret still hashes to the single-fill lock
        let honest = single.reveal_for(0).unwrap();
        assert_eq!(
            hash_secret(honest.secret.as_bytes()).unwrap().as_bytes(),
            single.hash_lock().as_bytes()
        );
    }

    #[tokio::test]
    async fn test_index_past_last_part() {
        let h = Harness::new();
        h.at(15);
        let order = h.coordinator.prepare_order(PARTS).await.unwrap();
        let mut reveal = order.reveal_for(3).unwrap();
        reveal.index = PARTS as usize;
        assert_eq!(
            withdraw_class(&h, PARTS, &reveal, order.hash_lock()).await,
            Some(ErrorClass::MalformedRequest)
        );
        assert_eq!(h.coordinator.metrics().snapshot().verifications, 0);
    }
}
