//! # Integration Test Flows
//!
//! Maker and resolver walk through a swap end to end.
//!
//! ## Flow Tested:
//!
//! 1. **Maker**: prepare order (secrets + hash-lock)
//! 2. **Resolver**: deploy source and destination escrows, relayer marks fill ready
//! 3. **Maker**: reveal once both escrows are withdrawable
//! 4. **Resolver**: withdraw on both chains with the published secret
//! 5. **Anyone**: public withdrawal / cancellation once those windows open

#[cfg(test)]
mod tests {
    use crate::fixtures::{escrow_pair, Harness, T0};
    use xs_01_commitment::{verify_fill, verify_secret};
    use xs_02_timelock::{Action, Caller, Stage};
    use xs_03_coordinator::{
        ErrorClass, FillReveal, RelayerApi, RevealDecision, SwapCoordinationApi,
    };

    // =============================================================================
    // SINGLE FILL
    // =============================================================================

    #[tokio::test]
    async fn test_single_fill_happy_path() {
        let h = Harness::new();
        let order = h.coordinator.prepare_order(1).await.unwrap();
        let (src, dst) = escrow_pair(*order.hash_lock(), 0);
        h.relayer.mark_ready(order.order_id(), 0);

        // Both escrows locked: nothing to reveal yet
        let decision = h.coordinator.reveal_secret(&order, 0, &src, &dst).await.unwrap();
        assert_eq!(decision, RevealDecision::Deferred { until: T0 + 10 });

        h.at(10);
        let decision = h.coordinator.reveal_secret(&order, 0, &src, &dst).await.unwrap();
        assert_eq!(decision, RevealDecision::Revealed { index: 0 });
        assert!(h
            .coordinator
            .ready_fills(order.order_id())
            .await
            .unwrap()
            .is_empty());

        let published = h.relayer.published_secrets(order.order_id()).await.unwrap();
        assert!(verify_secret(&published[0].secret, order.hash_lock()).is_ok());

        let reveal = FillReveal {
            secret: published[0].secret.clone(),
            index: 0,
            proof: order.proof_for(0).unwrap(),
        };
        for escrow in [&dst, &src] {
            let action = h
                .coordinator
                .authorize_withdrawal(escrow, Caller::Resolver, 1, &reveal)
                .await
                .unwrap();
            assert_eq!(action, Action::Withdraw);
        }
    }

    // =============================================================================
    // MULTI FILL
    // =============================================================================

    #[tokio::test]
    async fn test_multi_fill_partial_then_complete() {
        let parts = 5u32;
        let h = Harness::new();
        let order = h.coordinator.prepare_order(parts).await.unwrap();
        assert!(order.is_multi_fill());

        // Two resolvers fill indices 1 and 3 with their own escrow pairs
        let pairs: Vec<_> = (0..parts)
            .map(|i| escrow_pair(*order.hash_lock(), u64::from(i)))
            .collect();
        h.relayer.mark_ready(order.order_id(), 1);
        h.relayer.mark_ready(order.order_id(), 3);

        h.at(20);
        for fill in h.coordinator.ready_fills(order.order_id()).await.unwrap() {
            let (src, dst) = &pairs[fill.idx];
            let decision = h
                .coordinator
                .reveal_secret(&order, fill.idx, src, dst)
                .await
                .unwrap();
            assert_eq!(decision, RevealDecision::Revealed { index: fill.idx });
        }

        let published = h.relayer.published_secrets(order.order_id()).await.unwrap();
        let mut indices: Vec<usize> = published.iter().map(|p| p.idx).collect();
        indices.sort_unstable();
        assert_eq!(indices, vec![1, 3]);

        for p in &published {
            let proof = order.proof_for(p.idx).unwrap();
            assert!(verify_fill(&p.secret, p.idx, &proof, order.hash_lock()).is_ok());

            let reveal = FillReveal {
                secret: p.secret.clone(),
                index: p.idx,
                proof,
            };
            let (src, dst) = &pairs[p.idx];
            h.coordinator
                .authorize_withdrawal(dst, Caller::Resolver, parts, &reveal)
                .await
                .unwrap();
            h.coordinator
                .authorize_withdrawal(src, Caller::Resolver, parts, &reveal)
                .await
                .unwrap();
        }

        // The last fill completes the order
        h.relayer.mark_ready(order.order_id(), parts as usize - 1);
        let (src, dst) = &pairs[parts as usize - 1];
        let decision = h
            .coordinator
            .reveal_secret(&order, parts as usize - 1, src, dst)
            .await
            .unwrap();
        assert_eq!(decision, RevealDecision::Revealed { index: 4 });

        let snapshot = h.coordinator.metrics().snapshot();
        assert_eq!(snapshot.secrets_revealed, 3);
        assert_eq!(snapshot.verifications, 4);
        assert_eq!(snapshot.verification_failures, 0);
    }

    // =============================================================================
    // PUBLIC WINDOWS
    // =============================================================================

    #[tokio::test]
    async fn test_public_withdrawal_when_resolver_is_idle() {
        let h = Harness::new();
        let order = h.coordinator.prepare_order(1).await.unwrap();
        let (_, dst) = escrow_pair(*order.hash_lock(), 0);
        let reveal = order.reveal_for(0).unwrap();

        h.at(99);
        let err = h
            .coordinator
            .authorize_withdrawal(&dst, Caller::Public, 1, &reveal)
            .await
            .unwrap_err();
        assert_eq!(err.class(), ErrorClass::TimelockNotOpen);

        h.at(100);
        let report = h.coordinator.stage_of(&dst).await.unwrap();
        assert_eq!(report.stage, Stage::PublicWithdrawWindow);
        assert_eq!(
            h.coordinator
                .authorize_withdrawal(&dst, Caller::Public, 1, &reveal)
                .await
                .unwrap(),
            Action::PublicWithdraw
        );
    }

    #[tokio::test]
    async fn test_abandoned_swap_is_cancelled_on_both_chains() {
        let h = Harness::new();
        let order = h.coordinator.prepare_order(2).await.unwrap();
        let (src, dst) = escrow_pair(*order.hash_lock(), 0);

        // Destination refund opens first
        h.at(101);
        assert_eq!(
            h.coordinator
                .authorize_cancel(&dst, Caller::Resolver)
                .await
                .unwrap(),
            Action::Cancel
        );
        assert!(h
            .coordinator
            .authorize_cancel(&src, Caller::Resolver)
            .await
            .is_err());

        h.at(121);
        assert_eq!(
            h.coordinator
                .authorize_cancel(&src, Caller::Resolver)
                .await
                .unwrap(),
            Action::Cancel
        );

        h.at(122);
        assert_eq!(
            h.coordinator
                .authorize_cancel(&src, Caller::Public)
                .await
                .unwrap(),
            Action::PublicCancel
        );
        let report = h.coordinator.stage_of(&src).await.unwrap();
        assert_eq!(report.stage, Stage::PublicCancelWindow);
        assert!(report.next.is_none());
    }
}
