//! Metrics for coordinator operations
//!
//! Thread-safe counters shared by the service and readable by operators.

use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};

/// Metrics collector for the Swap Coordinator.
#[derive(Debug, Default)]
pub struct CoordinatorMetrics {
    /// Orders prepared
    pub orders_prepared: AtomicU64,
    /// Secrets handed to the relayer
    pub secrets_revealed: AtomicU64,
    /// Reveals postponed because an escrow was still locked
    pub reveals_deferred: AtomicU64,
    /// Reveals refused because an escrow was already cancellable
    pub reveals_refused: AtomicU64,
    /// Secret verifications performed
    pub verifications: AtomicU64,
    /// Secret verifications that failed
    pub verification_failures: AtomicU64,
    /// Withdraw / cancel requests refused by the timelock
    pub actions_refused: AtomicU64,
}

impl CoordinatorMetrics {
    /// Create a new metrics collector
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a prepared order
    pub fn record_order_prepared(&self) {
        self.orders_prepared.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a published secret
    pub fn record_reveal(&self) {
        self.secrets_revealed.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a deferred reveal
    pub fn record_reveal_deferred(&self) {
        self.reveals_deferred.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a refused reveal
    pub fn record_reveal_refused(&self) {
        self.reveals_refused.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a secret verification and its outcome
    pub fn record_verification(&self, ok: bool) {
        self.verifications.fetch_add(1, Ordering::Relaxed);
        if !ok {
            self.verification_failures.fetch_add(1, Ordering::Relaxed);
        }
    }

    /// Record an action the timelock did not permit
    pub fn record_action_refused(&self) {
        self.actions_refused.fetch_add(1, Ordering::Relaxed);
    }

    /// Get current metrics snapshot
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            orders_prepared: self.orders_prepared.load(Ordering::Relaxed),
            secrets_revealed: self.secrets_revealed.load(Ordering::Relaxed),
            reveals_deferred: self.reveals_deferred.load(Ordering::Relaxed),
            reveals_refused: self.reveals_refused.load(Ordering::Relaxed),
            verifications: self.verifications.load(Ordering::Relaxed),
            verification_failures: self.verification_failures.load(Ordering::Relaxed),
            actions_refused: self.actions_refused.load(Ordering::Relaxed),
        }
    }

    /// Reset all counters
    pub fn reset(&self) {
        self.orders_prepared.store(0, Ordering::Relaxed);
        self.secrets_revealed.store(0, Ordering::Relaxed);
        self.reveals_deferred.store(0, Ordering::Relaxed);
        self.reveals_refused.store(0, Ordering::Relaxed);
        self.verifications.store(0, Ordering::Relaxed);
        self.verification_failures.store(0, Ordering::Relaxed);
        self.actions_refused.store(0, Ordering::Relaxed);
    }
}

/// Point-in-time copy of [`CoordinatorMetrics`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MetricsSnapshot {
    /// Orders prepared
    pub orders_prepared: u64,
    /// Secrets handed to the relayer
    pub secrets_revealed: u64,
    /// Reveals postponed
    pub reveals_deferred: u64,
    /// Reveals refused
    pub reveals_refused: u64,
    /// Secret verifications performed
    pub verifications: u64,
    /// Secret verifications that failed
    pub verification_failures: u64,
    /// Actions refused by the timelock
    pub actions_refused: u64,
}
