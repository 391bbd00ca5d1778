//! Shared mutable context threaded through every stage handler.
//!
//! `MachineContext` owns every part of the appliance: vessels, heater,
//! pump, plate, the lent pot and the indicator lamps.  Stage handlers read
//! sensors from it and drive actuators through it.

use crate::config::MachineConfig;
use crate::drivers::heater::Heater;
use crate::drivers::pump::Pump;
use crate::drivers::warming_plate::WarmingPlate;
use crate::vessels::{GroundsHopper, Pot, Reservoir};

// ---------------------------------------------------------------------------
// Indicators
// ---------------------------------------------------------------------------

/// Indicator state that lives alongside [`BrewState`](super::BrewState).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Indicators {
    /// Pressure valve open.  Closed only while the pump runs.
    pub pressure_valve_open: bool,
    /// Heat-level sensor has reported boiling water.
    pub water_heated: bool,
}

impl Default for Indicators {
    fn default() -> Self {
        Self {
            pressure_valve_open: true,
            water_heated: false,
        }
    }
}

// ---------------------------------------------------------------------------
// MachineContext
// ---------------------------------------------------------------------------

pub struct MachineContext {
    // -- Vessels --
    pub reservoir: Reservoir,
    pub grounds: GroundsHopper,
    /// Pot on the plate, if any.
    pub pot: Option<Pot>,

    // -- Actuators --
    pub heater: Heater,
    pub pump: Pump,
    pub plate: WarmingPlate,

    // -- Outputs --
    pub indicators: Indicators,

    // -- Configuration --
    pub config: MachineConfig,
}

impl MachineContext {
    /// Build every part from `config`.  The config is assumed validated.
    pub fn new(config: MachineConfig) -> Self {
        Self {
            reservoir: Reservoir::new(config.reservoir_baseline),
            grounds: GroundsHopper::new(config.grounds_baseline),
            pot: None,
            heater: Heater::new(
                config.room_temperature_c,
                config.heat_step_c,
                config.boil_threshold_c,
            ),
            pump: Pump::new(config.pump_step),
            plate: WarmingPlate::new(),
            indicators: Indicators::default(),
            config,
        }
    }
}
