//! Plate predicates.
//!
//! "Plate empty" means no pot is placed; "pot empty" means a placed pot holds
//! nothing above its baseline.  The pot-level check takes a `&Pot`, so the
//! caller must resolve plate emptiness first.

use crate::vessels::{Pot, WeightVessel};

/// No pot on the plate.
pub fn plate_empty(pot: Option<&Pot>) -> bool {
    pot.is_none()
}

/// The pot holds nothing above its baseline.
pub fn pot_empty(pot: &Pot) -> bool {
    pot.current_weight() <= pot.baseline()
}
