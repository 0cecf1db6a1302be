//! Chain Clock Adapters
//!
//! Implements `ChainClock` for simulations and local development.

use crate::domain::CoordinatorError;
use crate::ports::outbound::ChainClock;
use async_trait::async_trait;
use parking_lot::RwLock;
use std::time::{SystemTime, UNIX_EPOCH};

/// Settable clock for tests and simulations.
pub struct ManualClock {
    current_time: RwLock<u64>,
}

impl ManualClock {
    /// Create a clock reading `start`.
    pub fn new(start: u64) -> Self {
        Self {
            current_time: RwLock::new(start),
        }
    }

    /// Set current time.
    pub fn set_time(&self, time: u64) {
        *self.current_time.write() = time;
    }

    /// Advance time by `secs`.
    pub fn advance_time(&self, secs: u64) {
        let mut time = self.current_time.write();
        *time = time.saturating_add(secs);
    }

    /// Current reading without going through the port.
    pub fn current(&self) -> u64 {
        *self.current_time.read()
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new(1_700_000_000)
    }
}

#[async_trait]
impl ChainClock for ManualClock {
    async fn now(&self) -> Result<u64, CoordinatorError> {
        Ok(self.current())
    }
}

/// Local wall clock.
///
/// Development only: independent observers may disagree with it. Production
/// deployments should read the destination chain's ledger time.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

#[async_trait]
impl ChainClock for SystemClock {
    async fn now(&self) -> Result<u64, CoordinatorError> {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .map_err(|e| CoordinatorError::Clock(e.to_string()))
    }
}
