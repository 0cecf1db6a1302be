//! # Timelock Races
//!
//! Attempts to exploit the edges of the time windows.
//!
//! The dangerous case is a maker revealing after the destination refund has
//! opened: the resolver could cancel on the destination and still withdraw on
//! the source with the public secret.

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crate::fixtures::{escrow, escrow_pair, Harness, T0};
    use xs_02_timelock::{Action, Caller, Side, Stage, TimelockOffsets};
    use xs_03_coordinator::{
        CoordinatorConfig, ErrorClass, InMemoryRelayer, ManualClock, NextStage, RelayerApi,
        RevealDecision, SwapCoordinationApi, SwapCoordinator,
    };

    // =============================================================================
    // LATE REVEALS
    // =============================================================================

    #[tokio::test]
    async fn test_reveal_refused_once_destination_refund_opens() {
        let h = Harness::new();
        let order = h.coordinator.prepare_order(1).await.unwrap();
        let (src, dst) = escrow_pair(*order.hash_lock(), 0);

        h.at(101);
        let decision = h.coordinator.reveal_secret(&order, 0, &src, &dst).await.unwrap();
        assert!(matches!(decision, RevealDecision::Refused { .. }));
        assert!(h
            .relayer
            .published_secrets(order.order_id())
            .await
            .unwrap()
            .is_empty());
        assert_eq!(h.coordinator.metrics().snapshot().reveals_refused, 1);
    }

    #[tokio::test]
    async fn test_reveal_refused_when_source_refund_opens_first() {
        let h = Harness::new();
        let order = h.coordinator.prepare_order(1).await.unwrap();

        // Destination deployed late, still in its public withdrawal window
        let (src, dst) = escrow_pair(*order.hash_lock(), 30);
        h.at(121);
        let report = h.coordinator.stage_of(&dst).await.unwrap();
        assert_eq!(report.stage, Stage::PublicWithdrawWindow);

        let decision = h.coordinator.reveal_secret(&order, 0, &src, &dst).await.unwrap();
        assert!(matches!(decision, RevealDecision::Refused { .. }));
    }

    #[tokio::test]
    async fn test_deferred_reveal_opens_exactly_at_deadline() {
        let h = Harness::new();
        let order = h.coordinator.prepare_order(2).await.unwrap();
        let (src, dst) = escrow_pair(*order.hash_lock(), 5);

        h.at(14);
        let decision = h.coordinator.reveal_secret(&order, 1, &src, &dst).await.unwrap();
        assert_eq!(decision, RevealDecision::Deferred { until: T0 + 15 });

        h.at(15);
        let decision = h.coordinator.reveal_secret(&order, 1, &src, &dst).await.unwrap();
        assert_eq!(decision, RevealDecision::Revealed { index: 1 });
    }

    // =============================================================================
    // WINDOW BOUNDARIES
    // =============================================================================

    #[tokio::test]
    async fn test_destination_withdraw_cancel_boundary() {
        let h = Harness::new();
        let order = h.coordinator.prepare_order(1).await.unwrap();
        let (_, dst) = escrow_pair(*order.hash_lock(), 0);
        let reveal = order.reveal_for(0).unwrap();

        h.at(100);
        assert_eq!(
            h.coordinator
                .authorize_withdrawal(&dst, Caller::Public, 1, &reveal)
                .await
                .unwrap(),
            Action::PublicWithdraw
        );
        let err = h
            .coordinator
            .authorize_cancel(&dst, Caller::Resolver)
            .await
            .unwrap_err();
        assert_eq!(err.class(), ErrorClass::TimelockNotOpen);

        // One second later withdrawal is closed for good
        h.at(101);
        for caller in [Caller::Resolver, Caller::Public] {
            let err = h
                .coordinator
                .authorize_withdrawal(&dst, caller, 1, &reveal)
                .await
                .unwrap_err();
            assert_eq!(err.class(), ErrorClass::TimelockNotOpen);
        }
        assert_eq!(
            h.coordinator
                .authorize_cancel(&dst, Caller::Resolver)
                .await
                .unwrap(),
            Action::Cancel
        );

        // Destination has no public cancellation
        h.at(10_000);
        assert!(h
            .coordinator
            .authorize_cancel(&dst, Caller::Public)
            .await
            .is_err());
        assert_eq!(h.coordinator.metrics().snapshot().actions_refused, 4);
    }

    #[tokio::test]
    async fn test_source_public_cancel_waits_for_its_window() {
        let h = Harness::new();
        let order = h.coordinator.prepare_order(1).await.unwrap();
        let (src, _) = escrow_pair(*order.hash_lock(), 0);

        h.at(121);
        let report = h.coordinator.stage_of(&src).await.unwrap();
        assert_eq!(report.permitted, vec![Action::Cancel]);
        assert_eq!(
            report.next,
            Some(NextStage {
                stage: Stage::PublicCancelWindow,
                opens_at: T0 + 122,
            })
        );
        assert!(h
            .coordinator
            .authorize_cancel(&src, Caller::Public)
            .await
            .is_err());
    }

    #[tokio::test]
    async fn test_clock_behind_deployment_is_locked() {
        let h = Harness::new();
        let order = h.coordinator.prepare_order(1).await.unwrap();
        let dst = escrow(
            Side::Destination,
            *order.hash_lock(),
            T0 + 50,
            TimelockOffsets::default(),
        );

        let report = h.coordinator.stage_of(&dst).await.unwrap();
        assert_eq!(report.stage, Stage::Locked);
        assert!(report.permitted.is_empty());
        assert_eq!(
            report.next,
            Some(NextStage {
                stage: Stage::WithdrawWindow,
                opens_at: T0 + 60,
            })
        );
    }

    // =============================================================================
    // CONFIGURATION AND OUTAGES
    // =============================================================================

    #[test]
    fn test_destination_refund_after_source_refund_rejected() {
        let offsets = TimelockOffsets {
            cancel_dst: 130,
            ..TimelockOffsets::default()
        };
        assert!(offsets.validate().is_ok());

        let config = CoordinatorConfig {
            offsets,
            ..CoordinatorConfig::default()
        };
        assert!(config.validate().is_err());

        let err = SwapCoordinator::with_config(
            Arc::new(ManualClock::new(T0)),
            Arc::new(InMemoryRelayer::new()),
            config,
        )
        .err()
        .unwrap();
        assert_eq!(err.class(), ErrorClass::Configuration);
    }

    #[tokio::test]
    async fn test_relayer_outage_does_not_count_as_reveal() {
        let h = Harness::new();
        let order = h.coordinator.prepare_order(1).await.unwrap();
        let (src, dst) = escrow_pair(*order.hash_lock(), 0);

        h.at(20);
        h.relayer.set_should_fail(true);
        let err = h
            .coordinator
            .reveal_secret(&order, 0, &src, &dst)
            .await
            .unwrap_err();
        assert_eq!(err.class(), ErrorClass::Unavailable);
        assert_eq!(h.coordinator.metrics().snapshot().secrets_revealed, 0);

        // Retry succeeds while the windows are still open
        h.relayer.set_should_fail(false);
        let decision = h.coordinator.reveal_secret(&order, 0, &src, &dst).await.unwrap();
        assert_eq!(decision, RevealDecision::Revealed { index: 0 });
    }
}
