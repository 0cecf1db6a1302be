//! In-Memory Relayer Adapter
//!
//! Implements `RelayerApi` for tests and simulations.

use crate::domain::{CoordinatorError, OrderId, PublishedSecret, ReadyFill};
use crate::ports::outbound::RelayerApi;
use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::HashMap;
use tracing::{debug, info};
use xs_01_commitment::SecureSecret;

#[derive(Default)]
struct OrderState {
    ready: Vec<ReadyFill>,
    secrets: Vec<PublishedSecret>,
}

/// In-memory relayer.
///
/// Fills are marked ready by the test; submitting a secret publishes it and
/// removes the fill from the ready list.
#[derive(Default)]
pub struct InMemoryRelayer {
    orders: RwLock<HashMap<OrderId, OrderState>>,
    should_fail: RwLock<bool>,
}

impl InMemoryRelayer {
    /// Create an empty relayer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that both escrows of fill `idx` are deployed.
    pub fn mark_ready(&self, order_id: OrderId, idx: usize) {
        let fill = ReadyFill {
            idx,
            src_escrow_deploy_tx: format!("0xsrc{idx:04x}"),
            dst_escrow_deploy_tx: format!("0xdst{idx:04x}"),
        };
        let mut orders = self.orders.write();
        let state = orders.entry(order_id).or_default();
        if !state.ready.iter().any(|f| f.idx == idx) {
            state.ready.push(fill);
        }
    }

    /// Make every call fail as if the relayer were down.
    pub fn set_should_fail(&self, fail: bool) {
        *self.should_fail.write() = fail;
    }

    fn check_available(&self) -> Result<(), CoordinatorError> {
        if *self.should_fail.read() {
            return Err(CoordinatorError::Relayer("relayer unavailable".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl RelayerApi for InMemoryRelayer {
    async fn submit_secret(
        &self,
        order_id: OrderId,
        index: usize,
        secret: &SecureSecret,
    ) -> Result<(), CoordinatorError> {
        self.check_available()?;
        let mut orders = self.orders.write();
        let state = orders.entry(order_id).or_default();
        if state.secrets.iter().any(|p| p.idx == index) {
            debug!(%order_id, index, "Secret already published");
            return Ok(());
        }
        state.ready.retain(|f| f.idx != index);
        state.secrets.push(PublishedSecret {
            idx: index,
            secret: secret.clone(),
        });
        info!(%order_id, index, "Secret published");
        Ok(())
    }

    async fn ready_to_accept_secret_fills(
        &self,
        order_id: OrderId,
    ) -> Result<Vec<ReadyFill>, CoordinatorError> {
        self.check_available()?;
        Ok(self
            .orders
            .read()
            .get(&order_id)
            .map(|s| s.ready.clone())
            .unwrap_or_default())
    }

    async fn published_secrets(
        &self,
        order_id: OrderId,
    ) -> Result<Vec<PublishedSecret>, CoordinatorError> {
        self.check_available()?;
        Ok(self
            .orders
            .read()
            .get(&order_id)
            .map(|s| s.secrets.clone())
            .unwrap_or_default())
    }
}
