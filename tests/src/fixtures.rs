//! Shared fixtures: a coordinator on a manual clock and escrow builders.

use std::sync::Arc;

use xs_01_commitment::HashLock;
use xs_02_timelock::{Side, Timelock, TimelockOffsets};
use xs_03_coordinator::{
    CoordinatorConfig, EscrowView, InMemoryRelayer, ManualClock, SwapCoordinator,
};

/// Deployment time of the source escrow in every scenario.
pub const T0: u64 = 1_700_000_000;

/// Coordinator plus handles on its collaborators.
pub struct Harness {
    /// Clock the coordinator reads
    pub clock: Arc<ManualClock>,
    /// Relayer the coordinator publishes to
    pub relayer: Arc<InMemoryRelayer>,
    /// Coordinator under test
    pub coordinator: SwapCoordinator,
}

impl Harness {
    /// Default configuration, clock at [`T0`].
    pub fn new() -> Self {
        Self::with_config(CoordinatorConfig::default())
    }

    /// Custom configuration, clock at [`T0`].
    ///
    /// Panics if the configuration is invalid.
    pub fn with_config(config: CoordinatorConfig) -> Self {
        let clock = Arc::new(ManualClock::new(T0));
        let relayer = Arc::new(InMemoryRelayer::new());
        let coordinator = SwapCoordinator::with_config(clock.clone(), relayer.clone(), config)
            .expect("valid test configuration");
        Self {
            clock,
            relayer,
            coordinator,
        }
    }

    /// Move the clock to `T0 + secs`.
    pub fn at(&self, secs: u64) {
        self.clock.set_time(T0 + secs);
    }
}

impl Default for Harness {
    fn default() -> Self {
        Self::new()
    }
}

/// An escrow for `side` storing `hash_lock`, deployed at `deployed_at`.
pub fn escrow(
    side: Side,
    hash_lock: HashLock,
    deployed_at: u64,
    offsets: TimelockOffsets,
) -> EscrowView {
    let mut escrow_id = [0u8; 32];
    escrow_id[0] = side as u8 + 1;
    escrow_id[1..9].copy_from_slice(&deployed_at.to_be_bytes());
    EscrowView {
        side,
        hash_lock,
        timelock: Timelock::new(escrow_id, deployed_at, offsets).expect("valid test offsets"),
    }
}

/// Source and destination escrows for one fill, destination deployed `dst_delay` later.
pub fn escrow_pair(hash_lock: HashLock, dst_delay: u64) -> (EscrowView, EscrowView) {
    let offsets = TimelockOffsets::default();
    (
        escrow(Side::Source, hash_lock, T0, offsets),
        escrow(Side::Destination, hash_lock, T0 + dst_delay, offsets),
    )
}
