//! Warming plate under the pot.
//!
//! `start_warming` and `stop_warming` are independent guarded mutators,
//! not a toggle: when the guard does not hold the call leaves the state
//! unchanged.

use log::info;

use crate::sensors::plate_level::{plate_empty, pot_empty};
use crate::vessels::Pot;

#[derive(Debug, Clone, Default)]
pub struct WarmingPlate {
    warming: bool,
}

impl WarmingPlate {
    pub fn new() -> Self {
        Self { warming: false }
    }

    /// Switch on if a pot is present and holds something above its baseline.
    pub fn start_warming(&mut self, pot: Option<&Pot>) {
        let filled = !plate_empty(pot) && pot.is_some_and(|p| !pot_empty(p));
        if filled && !self.warming {
            self.warming = true;
            info!("PLATE: warming on");
        }
    }

    /// Switch off if the plate is empty or the pot is at/below its baseline.
    pub fn stop_warming(&mut self, pot: Option<&Pot>) {
        let off = plate_empty(pot) || pot.is_some_and(pot_empty);
        if off && self.warming {
            self.warming = false;
            info!("PLATE: warming off");
        }
    }

    pub fn is_warming(&self) -> bool {
        self.warming
    }
}
