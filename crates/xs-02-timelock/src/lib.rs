//! # XS-02 Timelock State Machine
//!
//! Decides which escrow action is legal right now.
//!
//! **Subsystem ID:** 02
//! **Architecture:** Pure domain + algorithms (no I/O, no clock access)
//!
//! ## Windows
//!
//! Offsets are seconds after `deployed_at`. Source side:
//!
//! | Elapsed | Stage | Actions |
//! |---------|-------|---------|
//! | `< withdraw_src` | Locked | none |
//! | `[withdraw_src, public_withdraw_src)` | WithdrawWindow | withdraw |
//! | `[public_withdraw_src, cancel_src)` | PublicWithdrawWindow | withdraw, public withdraw |
//! | `[cancel_src, public_cancel_src)` | CancelWindow | cancel |
//! | `>= public_cancel_src` | PublicCancelWindow | cancel, public cancel |
//!
//! The destination side stops at `CancelWindow`: cancelling a destination
//! escrow returns the resolver's own deposit and stays resolver-only.
//!
//! `now` always comes from the caller, ideally a chain clock both parties
//! agree on. A `now` before `deployed_at` counts as zero elapsed time.
//!
//! ## Module Structure
//!
//! ```text
//! xs-02-timelock/
//! ├── domain/          # Timelock, TimelockOffsets, Stage, Action, errors
//! └── algorithms/      # classify, check_action, next_transition
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod algorithms;
pub mod domain;

// Re-exports
pub use algorithms::{check_action, classify, elapsed, is_action_permitted, next_transition};
pub use domain::{
    invariant_offsets_ordering, Action, Caller, EscrowId, Side, Stage, Timelock, TimelockError,
    TimelockOffsets, ENCODED_TIMELOCK_LEN,
};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
