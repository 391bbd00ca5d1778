//! Sensor predicates and the aggregating [`SensorSnapshot`].
//!
//! Sensors own no state: each one is a pure function over the part of the
//! machine it observes.  The snapshot reads all of them at once for
//! telemetry and diagnostics.

pub mod coffee_level;
pub mod plate_level;
pub mod temperature;
pub mod water_level;

use crate::fsm::context::MachineContext;
use coffee_level::coffee_present;
use plate_level::{plate_empty, pot_empty};
use temperature::is_boiling;
use water_level::{reservoir_drained, water_present};

/// A point-in-time reading of every sensor in the machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SensorSnapshot {
    /// Reservoir holds water above its baseline.
    pub water_present: bool,
    /// Water has reached the boil threshold.
    pub boiling: bool,
    /// Hopper holds grounds above its baseline.
    pub coffee_present: bool,
    /// Reservoir has been pumped back to its baseline.
    pub reservoir_drained: bool,
    /// No pot on the plate.
    pub plate_empty: bool,
    /// Pot level, `None` when the plate is empty.
    pub pot_empty: Option<bool>,
}

impl SensorSnapshot {
    pub fn capture(ctx: &MachineContext) -> Self {
        let pot = ctx.pot.as_ref();
        Self {
            water_present: water_present(&ctx.reservoir),
            boiling: is_boiling(&ctx.heater),
            coffee_present: coffee_present(&ctx.grounds),
            reservoir_drained: reservoir_drained(&ctx.reservoir),
            plate_empty: plate_empty(pot),
            pot_empty: pot.map(pot_empty),
        }
    }
}
