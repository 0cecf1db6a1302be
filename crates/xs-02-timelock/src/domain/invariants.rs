//! # Domain Invariants
//!
//! Ordering rules every timelock must satisfy before it gates anything.

use super::entities::TimelockOffsets;
use super::errors::TimelockError;
use super::value_objects::Side;

/// Invariant: offsets strictly increase on each side.
///
/// Source: `withdraw < public_withdraw < cancel < public_cancel`.
/// Destination: `withdraw < public_withdraw < cancel`.
pub fn invariant_offsets_ordering(offsets: &TimelockOffsets) -> Result<(), TimelockError> {
    strictly_increasing(
        Side::Source,
        &[
            ("withdraw_src", offsets.withdraw_src),
            ("public_withdraw_src", offsets.public_withdraw_src),
            ("cancel_src", offsets.cancel_src),
            ("public_cancel_src", offsets.public_cancel_src),
        ],
    )?;
    strictly_increasing(
        Side::Destination,
        &[
            ("withdraw_dst", offsets.withdraw_dst),
            ("public_withdraw_dst", offsets.public_withdraw_dst),
            ("cancel_dst", offsets.cancel_dst),
        ],
    )
}

fn strictly_increasing(side: Side, named: &[(&'static str, u64)]) -> Result<(), TimelockError> {
    for pair in named.windows(2) {
        let (earlier, earlier_secs) = pair[0];
        let (later, later_secs) = pair[1];
        if earlier_secs >= later_secs {
            return Err(TimelockError::InvalidTimelockOrdering {
                side,
                earlier,
                earlier_secs,
                later,
                later_secs,
            });
        }
    }
    Ok(())
}
