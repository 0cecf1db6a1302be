//! # Domain Invariants
//!
//! Rules that span both escrows of a swap.

use super::errors::CoordinatorError;
use xs_01_commitment::HashLock;
use xs_02_timelock::TimelockOffsets;

/// Invariant: destination cancellation opens no later than source cancellation.
///
/// The resolver must be able to reclaim destination funds before the maker
/// can reclaim source funds.
pub fn invariant_cross_chain_ordering(offsets: &TimelockOffsets) -> Result<(), CoordinatorError> {
    if offsets.cancel_dst > offsets.cancel_src {
        return Err(CoordinatorError::UnsafeCrossChainOrdering {
            cancel_dst: offsets.cancel_dst,
            cancel_src: offsets.cancel_src,
        });
    }
    Ok(())
}

/// Invariant: an escrow stores the order's hash-lock.
pub fn invariant_hashlock_match(
    escrow: &HashLock,
    order: &HashLock,
) -> Result<(), CoordinatorError> {
    if escrow != order {
        return Err(CoordinatorError::HashLockMismatch {
            escrow: escrow.to_hex(),
            order: order.to_hex(),
        });
    }
    Ok(())
}
