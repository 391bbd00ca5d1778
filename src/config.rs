//! Machine configuration parameters
//!
//! All tunable parameters for the coffee maker.  Defaults reproduce the
//! reference appliance; a JSON document can override any of them.

use serde::{Deserialize, Serialize};

use crate::drivers::heater::heat_ramp;
use crate::error::{Error, Result};

/// Core machine configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MachineConfig {
    // --- Vessels ---
    /// Reservoir zero-reference weight
    pub reservoir_baseline: i32,
    /// Grounds hopper zero-reference amount
    pub grounds_baseline: i32,

    // --- Pump ---
    /// Weight moved from reservoir to pot per pump increment
    pub pump_step: i32,

    // --- Heater ---
    /// Water temperature before heating (Celsius)
    pub room_temperature_c: f32,
    /// Temperature at which the water counts as boiling (Celsius)
    pub boil_threshold_c: f32,
    /// Temperature gained per heater increment (Celsius)
    pub heat_step_c: f32,

    // --- Events ---
    /// Queue structured events for `drain_events`
    pub event_log_enabled: bool,
}

impl Default for MachineConfig {
    fn default() -> Self {
        Self {
            // Vessels
            reservoir_baseline: 0,
            grounds_baseline: 0,

            // Pump
            pump_step: 10,

            // Heater
            room_temperature_c: 20.0,
            boil_threshold_c: 100.0,
            heat_step_c: 0.91,

            event_log_enabled: true,
        }
    }
}

impl MachineConfig {
    /// Parse a JSON document and validate the result.
    /// Missing fields fall back to their defaults.
    pub fn from_json(text: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(text).map_err(|_| Error::Config("malformed JSON"))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject parameter sets the controller cannot run with.
    pub fn validate(&self) -> Result<()> {
        if self.pump_step <= 0 {
            return Err(Error::Config("pump_step must be positive"));
        }
        if !(self.heat_step_c > 0.0) {
            return Err(Error::Config("heat_step_c must be positive"));
        }
        if !(self.boil_threshold_c > self.room_temperature_c) {
            return Err(Error::Config(
                "boil_threshold_c must exceed room_temperature_c",
            ));
        }
        let ramp = heat_ramp(
            self.room_temperature_c,
            self.heat_step_c,
            self.boil_threshold_c,
        );
        if ramp.final_temp_c < self.boil_threshold_c {
            return Err(Error::Config("heater cannot reach boil_threshold_c"));
        }
        if self.reservoir_baseline < 0 || self.grounds_baseline < 0 {
            return Err(Error::Config("baselines must not be negative"));
        }
        Ok(())
    }
}
