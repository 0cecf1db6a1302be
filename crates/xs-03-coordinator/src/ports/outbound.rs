//! # Outbound Ports
//!
//! Traits for external dependencies (chain clock, relayer).

use crate::domain::{CoordinatorError, OrderId, PublishedSecret, ReadyFill};
use async_trait::async_trait;
use xs_01_commitment::SecureSecret;

/// Trusted source of the current time - outbound port.
///
/// Implementations should read a chain's ledger clock so that independent
/// observers agree on the stage of an escrow.
#[async_trait]
pub trait ChainClock: Send + Sync {
    /// Current time in UNIX seconds.
    async fn now(&self) -> Result<u64, CoordinatorError>;
}

/// Relayer service - outbound port.
#[async_trait]
pub trait RelayerApi: Send + Sync {
    /// Hand the secret for fill `index` to the relayer for distribution.
    async fn submit_secret(
        &self,
        order_id: OrderId,
        index: usize,
        secret: &SecureSecret,
    ) -> Result<(), CoordinatorError>;

    /// Fills whose escrows are deployed and waiting for a secret.
    async fn ready_to_accept_secret_fills(
        &self,
        order_id: OrderId,
    ) -> Result<Vec<ReadyFill>, CoordinatorError>;

    /// Secrets already published for an order.
    async fn published_secrets(
        &self,
        order_id: OrderId,
    ) -> Result<Vec<PublishedSecret>, CoordinatorError>;
}
