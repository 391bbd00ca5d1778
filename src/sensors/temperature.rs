//! Heat level predicate.

use crate::drivers::heater::Heater;

/// Water at or above the boil threshold.
pub fn is_boiling(heater: &Heater) -> bool {
    heater.water_temperature() >= heater.boil_threshold()
}
