//! # Stage Classifier
//!
//! Pure queries over a [`Timelock`] and a caller-supplied `now`. Nothing here
//! mutates state; re-evaluate whenever time moves.

use crate::domain::{Action, Side, Stage, Timelock, TimelockError};
use tracing::trace;

/// Seconds since deployment; clock skew (`now < deployed_at`) counts as zero.
pub fn elapsed(timelock: &Timelock, now: u64) -> u64 {
    now.saturating_sub(timelock.deployed_at())
}

/// Stage of the `side` escrow at `now`.
pub fn classify(timelock: &Timelock, side: Side, now: u64) -> Stage {
    let elapsed = elapsed(timelock, now);
    let stage = timelock
        .offsets()
        .stage_offsets(side)
        .into_iter()
        .take_while(|(_, offset)| elapsed >= *offset)
        .last()
        .map_or(Stage::Locked, |(stage, _)| stage);
    trace!(%side, elapsed, %stage, "Classified timelock");
    stage
}

/// True when `action` is legal on the `side` escrow at `now`.
pub fn is_action_permitted(timelock: &Timelock, side: Side, action: Action, now: u64) -> bool {
    classify(timelock, side, now).permits(action)
}

/// Check `action` and return the current stage, or why it is not legal.
pub fn check_action(
    timelock: &Timelock,
    side: Side,
    action: Action,
    now: u64,
) -> Result<Stage, TimelockError> {
    let stage = classify(timelock, side, now);
    if !stage.permits(action) {
        return Err(TimelockError::ActionNotPermitted {
            action,
            side,
            stage,
        });
    }
    Ok(stage)
}

/// The next stage on `side` and the absolute time it opens.
///
/// `None` once the terminal stage has been reached.
pub fn next_transition(timelock: &Timelock, side: Side, now: u64) -> Option<(Stage, u64)> {
    let elapsed = elapsed(timelock, now);
    timelock
        .offsets()
        .stage_offsets(side)
        .into_iter()
        .find(|(_, offset)| *offset > elapsed)
        .map(|(stage, offset)| (stage, timelock.deployed_at().saturating_add(offset)))
}
