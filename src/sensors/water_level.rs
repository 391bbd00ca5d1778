//! Reservoir level predicates.
//!
//! The same reservoir is observed twice: once before a brew (is there any
//! water to heat?) and once after pumping (has all of it reached the pot?).

use crate::vessels::{Reservoir, WeightVessel};

/// Water above the reservoir baseline.
pub fn water_present(reservoir: &Reservoir) -> bool {
    reservoir.raw_weight() > reservoir.baseline()
}

/// Reservoir back at its baseline, i.e. fully pumped out.
pub fn reservoir_drained(reservoir: &Reservoir) -> bool {
    reservoir.current_weight() == 0
}
