//! Grounds hopper predicate.

use crate::vessels::GroundsHopper;

/// Grounds above the hopper baseline.
pub fn coffee_present(grounds: &GroundsHopper) -> bool {
    grounds.current_amount() > grounds.baseline()
}
