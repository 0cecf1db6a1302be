//! # Wire Format Tests
//!
//! What crosses process and chain boundaries: the flat timelock record, escrow
//! observations as JSON, and order commitments shared with resolvers.

#[cfg(test)]
mod tests {
    use crate::fixtures::{escrow_pair, Harness, T0};
    use xs_01_commitment::{verify, HashLock, MerkleLeaf};
    use xs_02_timelock::{Timelock, TimelockError, ENCODED_TIMELOCK_LEN};
    use xs_03_coordinator::{EscrowView, OrderCommitment, SwapCoordinationApi};

    #[test]
    fn test_escrow_timelock_survives_chain_encoding() {
        let (src, _) = escrow_pair(HashLock::from([5u8; 32]), 0);
        let bytes = src.timelock.encode().unwrap();
        assert_eq!(bytes.len(), ENCODED_TIMELOCK_LEN);

        // escrow_id first, then deployed_at little-endian
        assert_eq!(&bytes[..32], src.timelock.escrow_id());
        assert_eq!(&bytes[32..40], &T0.to_le_bytes());
        assert_eq!(Timelock::decode(&bytes).unwrap(), src.timelock);
    }

    #[test]
    fn test_tampered_chain_bytes_rejected() {
        let (_, dst) = escrow_pair(HashLock::from([5u8; 32]), 0);
        let mut bytes = dst.timelock.encode().unwrap();

        // cancel_dst (last field) before public_withdraw_dst
        bytes[88..96].copy_from_slice(&50u64.to_le_bytes());
        assert!(matches!(
            Timelock::decode(&bytes),
            Err(TimelockError::InvalidTimelockOrdering { .. })
        ));
        assert!(matches!(
            Timelock::decode(&bytes[..95]),
            Err(TimelockError::InvalidEncodedLength { actual: 95, .. })
        ));
    }

    #[test]
    fn test_escrow_view_json_roundtrip_revalidates() {
        let (src, _) = escrow_pair(HashLock::from([9u8; 32]), 0);
        let json = serde_json::to_value(src).unwrap();
        assert!(json["hash_lock"].as_str().unwrap().starts_with("0x0909"));
        let back: EscrowView = serde_json::from_value(json.clone()).unwrap();
        assert_eq!(back, src);

        let mut broken = json;
        broken["timelock"]["withdraw_src"] = serde_json::json!(500);
        assert!(serde_json::from_value::<EscrowView>(broken).is_err());
    }

    #[tokio::test]
    async fn test_shared_commitment_lets_resolver_check_proofs() {
        let h = Harness::new();
        let order = h.coordinator.prepare_order(6).await.unwrap();

        // Resolver receives only the public commitment
        let shared = serde_json::to_string(&order.commitment()).unwrap();
        let commitment: OrderCommitment = serde_json::from_str(&shared).unwrap();
        assert_eq!(commitment.hash_lock, *order.hash_lock());
        assert_eq!(commitment.parts, 6);

        let leaves: Vec<MerkleLeaf> =
            xs_01_commitment::build_leaves_from_hashes(&commitment.secret_hashes);
        for (idx, leaf) in leaves.iter().enumerate() {
            let proof = xs_01_commitment::build_proof(&leaves, idx).unwrap();
            assert!(verify(&proof, leaf, idx, &commitment.hash_lock));
        }
    }
}
