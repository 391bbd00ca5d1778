//! Actuator drivers: heater element, pump and warming plate.

pub mod heater;
pub mod pump;
pub mod warming_plate;
