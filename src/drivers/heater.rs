//! Water heater element.
//!
//! The element ramps the water from room temperature to the boil threshold
//! in fixed increments.  The ramp is computed by [`heat_ramp`], a pure
//! function with no wall-clock dependency, so a heat-up completes within a
//! single synchronous call.

use log::info;

/// Result of running the element to completion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeatRamp {
    /// Water temperature once the ramp stops (Celsius).
    pub final_temp_c: f32,
    /// Number of increments applied.
    pub steps: u32,
}

/// Upper bound on increments in one ramp.
pub const MAX_HEAT_STEPS: u32 = 10_000;

/// Advance `start_c` by `step_c` until it reaches or exceeds `threshold_c`,
/// or until [`MAX_HEAT_STEPS`] increments have been applied.
///
/// A non-positive `step_c` cannot make progress and leaves the temperature
/// where it started.  A capped ramp ends below the threshold.
pub fn heat_ramp(start_c: f32, step_c: f32, threshold_c: f32) -> HeatRamp {
    let mut temp = start_c;
    let mut steps = 0;
    if !(step_c > 0.0) {
        return HeatRamp {
            final_temp_c: temp,
            steps,
        };
    }
    while temp < threshold_c && steps < MAX_HEAT_STEPS {
        temp += step_c;
        steps += 1;
    }
    HeatRamp {
        final_temp_c: temp,
        steps,
    }
}

/// Single-shot heater: the temperature only ever rises.
#[derive(Debug, Clone)]
pub struct Heater {
    temperature_c: f32,
    step_c: f32,
    boil_threshold_c: f32,
}

impl Heater {
    pub fn new(room_temperature_c: f32, step_c: f32, boil_threshold_c: f32) -> Self {
        Self {
            temperature_c: room_temperature_c,
            step_c,
            boil_threshold_c,
        }
    }

    /// Run the element until the water boils.  Already-boiling water is
    /// left untouched.
    pub fn water_heating(&mut self) -> HeatRamp {
        let ramp = heat_ramp(self.temperature_c, self.step_c, self.boil_threshold_c);
        if ramp.steps > 0 {
            info!(
                "HEATER: {:.1} -> {:.1} C in {} steps",
                self.temperature_c, ramp.final_temp_c, ramp.steps
            );
        }
        self.temperature_c = ramp.final_temp_c;
        ramp
    }

    /// Current water temperature (Celsius).
    pub fn water_temperature(&self) -> f32 {
        self.temperature_c
    }

    pub fn boil_threshold(&self) -> f32 {
        self.boil_threshold_c
    }
}
