//! Outbound controller events.
//!
//! The [`CoffeeMaker`](super::service::CoffeeMaker) queues these as it
//! works.  Adapters on the other side of the
//! [`EventSink`](super::ports::EventSink) port decide what to do with them.

use crate::error::Error;
use crate::fsm::{BrewState, StageId};

/// Structured events emitted by the controller.
#[derive(Debug, Clone, PartialEq)]
pub enum MakerEvent {
    /// A brew session was accepted.
    BrewStarted,

    /// The controller moved between brew states.
    StateChanged { from: BrewState, to: BrewState },

    /// The brew sequencer entered a stage.
    StageEntered(StageId),

    /// An operation was rejected.
    Fault(Error),

    /// A pot was placed on the plate.
    PotPlaced,

    /// The pot was taken off the plate.
    PotRemoved,

    /// The warming plate switched on (`true`) or off.
    WarmingChanged(bool),

    /// Snapshot recorded at the end of a brew session.
    Telemetry(TelemetryData),
}

/// A point-in-time view of the machine suitable for logging.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TelemetryData {
    pub state: BrewState,
    pub reservoir_weight: i32,
    /// `None` when the plate is empty.
    pub pot_weight: Option<i32>,
    pub water_temperature_c: f32,
    pub grounds_amount: i32,
    pub pressure_valve_open: bool,
    pub warming: bool,
}
