//! End-to-end swap run over a manual clock and an in-memory relayer.
//!
//! The maker prepares an order, the resolver deploys both escrows of every
//! fill, the maker reveals once the windows open, and the resolver withdraws
//! on both chains with the published secrets.

use std::sync::Arc;

use anyhow::{Context, Result};
use serde_json::{json, Value};
use swap_telemetry::log_order_event;
use xs_01_commitment::HashLock;
use xs_02_timelock::{Caller, Side, Timelock};
use xs_03_coordinator::{
    CoordinatorConfig, EscrowView, FillReveal, InMemoryRelayer, ManualClock, RelayerApi,
    RevealDecision, SwapCoordinationApi, SwapCoordinator,
};

const START: u64 = 1_700_000_000;
const DST_DEPLOY_DELAY: u64 = 5;

fn escrow(
    side: Side,
    hash_lock: HashLock,
    deployed_at: u64,
    config: &CoordinatorConfig,
    idx: usize,
) -> Result<EscrowView> {
    let mut escrow_id = [0u8; 32];
    escrow_id[0] = side as u8;
    escrow_id[24..].copy_from_slice(&(idx as u64).to_be_bytes());
    Ok(EscrowView {
        side,
        hash_lock,
        timelock: Timelock::new(escrow_id, deployed_at, config.offsets)?,
    })
}

/// Run the swap and return a JSON transcript.
pub async fn run(config: CoordinatorConfig, parts: u32) -> Result<Value> {
    let clock = Arc::new(ManualClock::new(START));
    let relayer = Arc::new(InMemoryRelayer::new());
    let coordinator =
        SwapCoordinator::with_config(clock.clone(), relayer.clone(), config.clone())?;
    let mut events = Vec::new();

    let order = coordinator.prepare_order(parts).await?;
    let order_id = order.order_id();
    log_order_event!(info, "xswap", "Simulated order prepared", order_id, parts);
    events.push(json!({
        "at": clock.current(),
        "event": "order_prepared",
        "commitment": order.commitment(),
    }));

    let mut pairs = Vec::with_capacity(parts as usize);
    for idx in 0..parts as usize {
        let src = escrow(Side::Source, *order.hash_lock(), START, &config, idx)?;
        let dst = escrow(
            Side::Destination,
            *order.hash_lock(),
            START + DST_DEPLOY_DELAY,
            &config,
            idx,
        )?;
        relayer.mark_ready(order_id, idx);
        pairs.push((src, dst));
    }
    events.push(json!({ "at": clock.current(), "event": "escrows_deployed", "fills": parts }));

    let ready = coordinator.ready_fills(order_id).await?;
    for fill in ready {
        let (src, dst) = pairs
            .get(fill.idx)
            .with_context(|| format!("Relayer reported unknown fill {}", fill.idx))?;

        let mut decision = coordinator.reveal_secret(&order, fill.idx, src, dst).await?;
        if let RevealDecision::Deferred { until } = decision {
            events.push(json!({
                "at": clock.current(),
                "event": "reveal_deferred",
                "idx": fill.idx,
                "until": until,
            }));
            clock.set_time(until.max(clock.current()));
            decision = coordinator.reveal_secret(&order, fill.idx, src, dst).await?;
        }
        events.push(json!({
            "at": clock.current(),
            "event": "reveal",
            "idx": fill.idx,
            "decision": decision,
        }));
    }

    let published = relayer.published_secrets(order_id).await?;
    for secret in &published {
        let (src, dst) = pairs
            .get(secret.idx)
            .with_context(|| format!("Secret published for unknown fill {}", secret.idx))?;
        let reveal = FillReveal {
            secret: secret.secret.clone(),
            index: secret.idx,
            proof: order.proof_for(secret.idx)?,
        };
        let dst_action = coordinator
            .authorize_withdrawal(dst, Caller::Resolver, parts, &reveal)
            .await?;
        let src_action = coordinator
            .authorize_withdrawal(src, Caller::Resolver, parts, &reveal)
            .await?;
        events.push(json!({
            "at": clock.current(),
            "event": "withdrawn",
            "idx": secret.idx,
            "destination": dst_action,
            "source": src_action,
        }));
    }

    Ok(json!({
        "orderId": order_id,
        "parts": parts,
        "filled": published.len(),
        "events": events,
        "metrics": coordinator.metrics().snapshot(),
    }))
}
