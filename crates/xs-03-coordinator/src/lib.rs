//! # XS-03 Swap Coordinator
//!
//! Ties the commitment engine and the timelock classifier to the outside
//! world: a chain clock and a relayer.
//!
//! **Subsystem ID:** 03
//! **Architecture:** Hexagonal (Domain + Ports/Adapters)
//!
//! ## Purpose
//!
//! - Prepare orders: secrets, hash-lock, validated offsets
//! - Decide when the maker may reveal a secret, then publish it
//! - Authorize withdraw / cancel requests against an escrow's timelock and
//!   hash-lock
//!
//! ## Safety Rules
//!
//! | Rule | Enforced by |
//! |------|-------------|
//! | Offsets strictly increase per side | `xs-02-timelock` |
//! | Destination cancel opens no later than source cancel | `invariant_cross_chain_ordering` |
//! | Escrow hash-lock equals the order's | `invariant_hashlock_match` |
//! | No reveal while either escrow is locked or cancellable | `SwapCoordinator::reveal_secret` |
//!
//! ## Module Structure
//!
//! ```text
//! xs-03-coordinator/
//! ├── domain/          # PreparedOrder, EscrowView, FillReveal, errors, invariants
//! ├── ports/           # SwapCoordinationApi, ChainClock, RelayerApi
//! ├── adapters/        # ManualClock, SystemClock, InMemoryRelayer, HttpRelayerClient
//! ├── service/         # SwapCoordinator
//! ├── config.rs        # CoordinatorConfig
//! └── metrics.rs       # CoordinatorMetrics
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod adapters;
pub mod config;
pub mod domain;
pub mod metrics;
pub mod ports;
pub mod service;

// Re-exports
pub use adapters::{HttpRelayerClient, InMemoryRelayer, ManualClock, SystemClock};
pub use config::CoordinatorConfig;
pub use domain::{
    invariant_cross_chain_ordering, invariant_hashlock_match, CoordinatorError, ErrorClass,
    EscrowView, FillReveal, NextStage, OrderCommitment, OrderId, PreparedOrder, PublishedSecret,
    ReadyFill, RevealDecision, StageReport,
};
pub use metrics::{CoordinatorMetrics, MetricsSnapshot};
pub use ports::{ChainClock, RelayerApi, SwapCoordinationApi};
pub use service::SwapCoordinator;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
