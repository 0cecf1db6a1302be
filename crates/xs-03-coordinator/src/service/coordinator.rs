//! Swap Coordinator Service
//!
//! Implements `SwapCoordinationApi` over an injected chain clock and relayer.

use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::config::CoordinatorConfig;
use crate::domain::{
    invariant_hashlock_match, CoordinatorError, EscrowView, FillReveal, NextStage, OrderId,
    PreparedOrder, ReadyFill, RevealDecision, StageReport,
};
use crate::metrics::CoordinatorMetrics;
use crate::ports::{ChainClock, RelayerApi, SwapCoordinationApi};
use xs_01_commitment::{
    commit_for_fills, generate_secrets, hash_secret, verify_fill, verify_secret,
    CommitmentError, SecretHash,
};
use xs_02_timelock::{check_action, classify, next_transition, Action, Caller, Side, Stage};

/// Swap Coordinator implementation
///
/// Stateless apart from metrics: orders are owned by the caller.
pub struct SwapCoordinator {
    /// Chain clock (driven port)
    clock: Arc<dyn ChainClock>,
    /// Relayer (driven port)
    relayer: Arc<dyn RelayerApi>,
    config: CoordinatorConfig,
    metrics: Arc<CoordinatorMetrics>,
}

impl SwapCoordinator {
    /// Create a coordinator with the default configuration.
    pub fn new(clock: Arc<dyn ChainClock>, relayer: Arc<dyn RelayerApi>) -> Self {
        Self {
            clock,
            relayer,
            config: CoordinatorConfig::default(),
            metrics: Arc::new(CoordinatorMetrics::new()),
        }
    }

    /// Create a coordinator with a validated custom configuration.
    pub fn with_config(
        clock: Arc<dyn ChainClock>,
        relayer: Arc<dyn RelayerApi>,
        config: CoordinatorConfig,
    ) -> Result<Self, CoordinatorError> {
        config.validate()?;
        Ok(Self {
            clock,
            relayer,
            config,
            metrics: Arc::new(CoordinatorMetrics::new()),
        })
    }

    /// Active configuration.
    pub fn config(&self) -> &CoordinatorConfig {
        &self.config
    }

    /// Shared metrics.
    pub fn metrics(&self) -> Arc<CoordinatorMetrics> {
        Arc::clone(&self.metrics)
    }

    fn report(escrow: &EscrowView, now: u64) -> StageReport {
        let stage = classify(&escrow.timelock, escrow.side, now);
        StageReport {
            side: escrow.side,
            now,
            stage,
            permitted: stage.permitted_actions().to_vec(),
            next: next_transition(&escrow.timelock, escrow.side, now)
                .map(|(stage, opens_at)| NextStage { stage, opens_at }),
        }
    }

    fn gate(
        &self,
        escrow: &EscrowView,
        action: Action,
        now: u64,
    ) -> Result<Stage, CoordinatorError> {
        check_action(&escrow.timelock, escrow.side, action, now).map_err(|e| {
            self.metrics.record_action_refused();
            debug!(side = %escrow.side, %action, now, "Action refused by timelock");
            CoordinatorError::from(e)
        })
    }

    fn check_side(escrow: &EscrowView, expected: Side) -> Result<(), CoordinatorError> {
        if escrow.side != expected {
            return Err(CoordinatorError::SideMismatch {
                expected,
                actual: escrow.side,
            });
        }
        Ok(())
    }

    fn check_reveal_index(parts: u32, reveal: &FillReveal) -> Result<(), CoordinatorError> {
        if parts == 0 {
            return Err(CoordinatorError::ZeroParts);
        }
        if reveal.index >= parts as usize {
            return Err(CoordinatorError::SecretIndexUnknown {
                index: reveal.index,
                parts,
            });
        }
        Ok(())
    }
}

#[async_trait]
impl SwapCoordinationApi for SwapCoordinator {
    async fn prepare_order(&self, parts: u32) -> Result<PreparedOrder, CoordinatorError> {
        if parts == 0 {
            return Err(CoordinatorError::ZeroParts);
        }
        if parts > self.config.max_parts {
            return Err(CoordinatorError::TooManyParts {
                requested: parts,
                max: self.config.max_parts,
            });
        }

        let secrets = generate_secrets(parts as usize);
        let hash_lock = commit_for_fills(&secrets)?;
        let secret_hashes = secrets
            .iter()
            .map(|s| hash_secret(s.as_bytes()))
            .collect::<Result<Vec<SecretHash>, CommitmentError>>()?;
        let order = PreparedOrder::new(
            Uuid::new_v4(),
            hash_lock,
            self.config.offsets,
            secrets,
            secret_hashes,
        );

        self.metrics.record_order_prepared();
        info!(
            order_id = %order.order_id(),
            parts,
            hash_lock = %order.hash_lock(),
            "Order prepared"
        );
        Ok(order)
    }

    async fn stage_of(&self, escrow: &EscrowView) -> Result<StageReport, CoordinatorError> {
        let now = self.clock.now().await?;
        Ok(Self::report(escrow, now))
    }

    async fn authorize_withdrawal(
        &self,
        escrow: &EscrowView,
        caller: Caller,
        parts: u32,
        reveal: &FillReveal,
    ) -> Result<Action, CoordinatorError> {
        let action = caller.withdraw_action();
        let now = self.clock.now().await?;
        self.gate(escrow, action, now)?;

        Self::check_reveal_index(parts, reveal)?;
        let verified = if parts == 1 {
            verify_secret(&reveal.secret, &escrow.hash_lock)
        } else {
            verify_fill(&reveal.secret, reveal.index, &reveal.proof, &escrow.hash_lock)
        };
        self.metrics.record_verification(verified.is_ok());
        verified?;

        debug!(side = %escrow.side, %action, index = reveal.index, "Withdrawal authorized");
        Ok(action)
    }

    async fn authorize_cancel(
        &self,
        escrow: &EscrowView,
        caller: Caller,
    ) -> Result<Action, CoordinatorError> {
        let action = caller.cancel_action();
        let now = self.clock.now().await?;
        self.gate(escrow, action, now)?;
        debug!(side = %escrow.side, %action, "Cancel authorized");
        Ok(action)
    }

    async fn reveal_secret(
        &self,
        order: &PreparedOrder,
        index: usize,
        src: &EscrowView,
        dst: &EscrowView,
    ) -> Result<RevealDecision, CoordinatorError> {
        Self::check_side(src, Side::Source)?;
        Self::check_side(dst, Side::Destination)?;
        let secret = order.secret(index)?;
        invariant_hashlock_match(&src.hash_lock, order.hash_lock())?;
        invariant_hashlock_match(&dst.hash_lock, order.hash_lock())?;

        let now = self.clock.now().await?;
        let src_stage = classify(&src.timelock, Side::Source, now);
        let dst_stage = classify(&dst.timelock, Side::Destination, now);

        if dst_stage.is_cancellable() || src_stage.is_cancellable() {
            self.metrics.record_reveal_refused();
            let reason = format!(
                "escrows past withdrawal: source {src_stage}, destination {dst_stage}"
            );
            warn!(order_id = %order.order_id(), index, %reason, "Reveal refused");
            return Ok(RevealDecision::Refused { reason });
        }

        if !src_stage.is_withdrawable() || !dst_stage.is_withdrawable() {
            let until = [
                src.timelock.window_start(Side::Source, Stage::WithdrawWindow),
                dst.timelock.window_start(Side::Destination, Stage::WithdrawWindow),
            ]
            .into_iter()
            .flatten()
            .max()
            .unwrap_or(now);
            self.metrics.record_reveal_deferred();
            debug!(order_id = %order.order_id(), index, until, "Reveal deferred");
            return Ok(RevealDecision::Deferred { until });
        }

        self.relayer
            .submit_secret(order.order_id(), index, secret)
            .await?;
        self.metrics.record_reveal();
        info!(order_id = %order.order_id(), index, "Secret revealed");
        Ok(RevealDecision::Revealed { index })
    }

    async fn ready_fills(&self, order_id: OrderId) -> Result<Vec<ReadyFill>, CoordinatorError> {
        let fills = self.relayer.ready_to_accept_secret_fills(order_id).await?;
        debug!(%order_id, count = fills.len(), "Ready fills fetched");
        Ok(fills)
    }
}
