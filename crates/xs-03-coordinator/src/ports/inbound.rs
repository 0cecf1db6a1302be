//! # Inbound Ports
//!
//! API trait defining what the Swap Coordinator can do.

use crate::domain::{
    CoordinatorError, EscrowView, FillReveal, OrderId, PreparedOrder, ReadyFill, RevealDecision,
    StageReport,
};
use async_trait::async_trait;
use xs_02_timelock::{Action, Caller};

/// Swap coordination API - inbound port.
#[async_trait]
pub trait SwapCoordinationApi: Send + Sync {
    /// Generate `parts` secrets and commit to them.
    ///
    /// One part yields a plain secret hash; two or more yield a Merkle root.
    async fn prepare_order(&self, parts: u32) -> Result<PreparedOrder, CoordinatorError>;

    /// Current stage of an escrow by the chain clock.
    async fn stage_of(&self, escrow: &EscrowView) -> Result<StageReport, CoordinatorError>;

    /// Check that `caller` may withdraw from `escrow` with `reveal` right now.
    ///
    /// `parts` selects the commitment path: 1 for a plain hash, more for a
    /// Merkle root. Returns the action that would be submitted.
    async fn authorize_withdrawal(
        &self,
        escrow: &EscrowView,
        caller: Caller,
        parts: u32,
        reveal: &FillReveal,
    ) -> Result<Action, CoordinatorError>;

    /// Check that `caller` may cancel `escrow` right now.
    async fn authorize_cancel(
        &self,
        escrow: &EscrowView,
        caller: Caller,
    ) -> Result<Action, CoordinatorError>;

    /// Maker policy: publish the secret for fill `index` if both escrows allow it.
    async fn reveal_secret(
        &self,
        order: &PreparedOrder,
        index: usize,
        src: &EscrowView,
        dst: &EscrowView,
    ) -> Result<RevealDecision, CoordinatorError>;

    /// Fills whose escrows are deployed and waiting for a secret.
    async fn ready_fills(&self, order_id: OrderId) -> Result<Vec<ReadyFill>, CoordinatorError>;
}
