//! Water pump: moves water from the reservoir into the pot.
//!
//! The pump works in fixed increments.  Each increment asks the source to
//! give up `step` units and credits the destination with whatever the
//! source *returned*, which for an underflowing reservoir is a negative
//! deficit rather than the requested step.

use log::debug;

use crate::vessels::WeightVessel;

#[derive(Debug, Clone)]
pub struct Pump {
    step: i32,
    strokes: u64,
}

impl Pump {
    pub fn new(step: i32) -> Self {
        Self { step, strokes: 0 }
    }

    /// Move one increment of `step` units and return the credited amount.
    pub fn pour_water(
        &mut self,
        step: i32,
        source: &mut impl WeightVessel,
        dest: &mut impl WeightVessel,
    ) -> i32 {
        let moved = source.reduce_weight(step);
        dest.increase_weight(moved);
        self.strokes += 1;
        debug!("PUMP: stroke {} moved {}", self.strokes, moved);
        moved
    }

    /// Pour in fixed increments until the source is at its baseline.
    /// Returns the total credited to `dest`; a drained source yields 0.
    pub fn push_water(
        &mut self,
        source: &mut impl WeightVessel,
        dest: &mut impl WeightVessel,
    ) -> i32 {
        if self.step <= 0 {
            return 0;
        }
        let mut total: i32 = 0;
        while source.current_weight() > 0 {
            let moved = self.pour_water(self.step, &mut *source, &mut *dest);
            total = total.saturating_add(moved);
        }
        total
    }

    /// Fixed increment used by [`push_water`](Self::push_water).
    pub fn step(&self) -> i32 {
        self.step
    }

    /// Increments performed since construction.
    pub fn strokes(&self) -> u64 {
        self.strokes
    }
}
