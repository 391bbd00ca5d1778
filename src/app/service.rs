//! Controller service: the coffee maker itself.
//!
//! [`CoffeeMaker`] owns the machine context, the brew sequencer and the
//! event queue.  Callers load water and grounds, lend it a pot, brew, and
//! take the pot back.
//!
//! ```text
//!  pour_water / drop_coffee ──▶ ┌──────────────────────────┐ ──▶ drain_events
//!  put_pot / take_pot       ──▶ │        CoffeeMaker        │
//!  brew_coffee              ──▶ │  Sequencer · Context      │
//!                               └──────────────────────────┘
//! ```

use log::{info, warn};

use crate::config::MachineConfig;
use crate::drivers::heater::Heater;
use crate::drivers::warming_plate::WarmingPlate;
use crate::error::{BrewFault, Error, PotError, Result};
use crate::events::EventQueue;
use crate::fsm::context::MachineContext;
use crate::fsm::states::build_stage_table;
use crate::fsm::{BrewSequencer, BrewState, StageId, StageOutcome};
use crate::sensors::SensorSnapshot;
use crate::sensors::plate_level::{plate_empty, pot_empty};
use crate::vessels::{GroundsHopper, Pot, Reservoir, WeightVessel};

use super::events::{MakerEvent, TelemetryData};
use super::ports::EventSink;

// ───────────────────────────────────────────────────────────────
// CoffeeMaker
// ───────────────────────────────────────────────────────────────

pub struct CoffeeMaker {
    seq: BrewSequencer,
    ctx: MachineContext,
    state: BrewState,
    events: EventQueue,
    brews_completed: u64,
}

impl CoffeeMaker {
    /// A machine with the reference configuration: empty reservoir and
    /// hopper, no pot, water at room temperature.
    pub fn new() -> Self {
        Self::build(MachineConfig::default())
    }

    /// A machine with custom tunables.  Fails on an invalid config.
    pub fn with_config(config: MachineConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::build(config))
    }

    fn build(config: MachineConfig) -> Self {
        Self {
            seq: BrewSequencer::new(build_stage_table()),
            ctx: MachineContext::new(config),
            state: BrewState::Idle,
            events: EventQueue::new(),
            brews_completed: 0,
        }
    }

    // ── Loading ───────────────────────────────────────────────

    /// Add water to the reservoir.  Unconditional.
    pub fn pour_water_into_the_boiler(&mut self, amount: i32) {
        self.ctx.reservoir.increase_weight(amount);
        info!(
            "Reservoir +{} (now {})",
            amount,
            self.ctx.reservoir.current_weight()
        );
    }

    /// Add grounds to the hopper.  Unconditional.
    pub fn drop_coffee(&mut self, amount: i32) {
        self.ctx.grounds.add(amount);
        info!(
            "Grounds +{} (now {})",
            amount,
            self.ctx.grounds.current_amount()
        );
    }

    // ── Pot exchange ──────────────────────────────────────────

    /// Place `pot` on the plate.
    ///
    /// Fails with [`PotError::PotAlreadyPresent`] if one is already held; the
    /// rejected pot is dropped.  A non-empty pot placed mid-brew starts the
    /// warming plate.
    pub fn put_pot(&mut self, pot: Pot) -> Result<()> {
        if !plate_empty(self.ctx.pot.as_ref()) {
            return Err(self.reject(PotError::PotAlreadyPresent.into()));
        }
        self.ctx.pot = Some(pot);
        self.emit(MakerEvent::PotPlaced);

        let filled = self.ctx.pot.as_ref().is_some_and(|p| !pot_empty(p));
        if self.state.is_brewing() && filled && !self.ctx.plate.is_warming() {
            self.update_plate(WarmingPlate::start_warming);
        }
        Ok(())
    }

    /// Remove the pot from the plate and hand it back.
    ///
    /// Fails with [`PotError::NoPotToTake`] if the plate is empty.  Warming
    /// stops once the pot is gone.
    pub fn take_pot(&mut self) -> Result<Pot> {
        let Some(pot) = self.ctx.pot.take() else {
            return Err(self.reject(PotError::NoPotToTake.into()));
        };
        if self.ctx.plate.is_warming() {
            self.update_plate(WarmingPlate::stop_warming);
        }
        self.emit(MakerEvent::PotRemoved);
        Ok(pot)
    }

    // ── Brewing ───────────────────────────────────────────────

    /// Run a full brew cycle.
    ///
    /// Stages run in order until the brew completes, faults, or a stage
    /// cannot make progress.  In the last case the session stays open and
    /// a further `brew_coffee` fails with [`BrewFault::AlreadyBrewing`].
    pub fn brew_coffee(&mut self) -> Result<()> {
        self.begin_brew()?;
        loop {
            match self.step()? {
                StageOutcome::Next(_) => {}
                StageOutcome::Stay => {
                    warn!(
                        "Brew stalled in {:?}, session left open",
                        self.seq.current_stage()
                    );
                    break;
                }
                StageOutcome::Complete | StageOutcome::Fault(_) => break,
            }
        }
        Ok(())
    }

    /// Open a brew session without running any stage.
    pub fn begin_brew(&mut self) -> Result<()> {
        if self.state.is_brewing() {
            return Err(self.reject(BrewFault::AlreadyBrewing.into()));
        }
        self.seq.begin(&mut self.ctx);
        self.emit(MakerEvent::BrewStarted);
        self.set_state(BrewState::Brewing);
        self.emit(MakerEvent::StageEntered(StageId::CheckWater));
        Ok(())
    }

    /// Run exactly one stage of the open session and return the resulting
    /// state.  A stage fault is returned as an error.  Outside a session
    /// this does nothing.
    pub fn advance_brew(&mut self) -> Result<BrewState> {
        self.step()?;
        Ok(self.state)
    }

    fn step(&mut self) -> Result<StageOutcome> {
        if !self.state.is_brewing() {
            return Ok(StageOutcome::Stay);
        }
        let was_warming = self.ctx.plate.is_warming();
        let outcome = self.seq.tick(&mut self.ctx);
        if self.ctx.plate.is_warming() != was_warming {
            self.emit(MakerEvent::WarmingChanged(self.ctx.plate.is_warming()));
        }

        match outcome {
            StageOutcome::Stay => {}
            StageOutcome::Next(stage) => self.emit(MakerEvent::StageEntered(stage)),
            StageOutcome::Complete => {
                self.set_state(BrewState::Ready);
                self.brews_completed += 1;
                let telemetry = self.telemetry();
                self.emit(MakerEvent::Telemetry(telemetry));
            }
            StageOutcome::Fault(fault) => {
                self.set_state(BrewState::Faulted(fault));
                return Err(self.reject(fault.into()));
            }
        }
        Ok(outcome)
    }

    // ── Queries ───────────────────────────────────────────────

    pub fn state(&self) -> BrewState {
        self.state
    }

    pub fn brew_in_progress(&self) -> bool {
        self.state.is_brewing()
    }

    /// Coffee has been delivered to the pot.
    pub fn drink_ready(&self) -> bool {
        self.state.is_ready()
    }

    /// Ready lamp.
    pub fn ready_indicator(&self) -> bool {
        self.state.is_ready()
    }

    pub fn pressure_valve_open(&self) -> bool {
        self.ctx.indicators.pressure_valve_open
    }

    /// The heat-level sensor has reported boiling water at least once.
    pub fn water_heated(&self) -> bool {
        self.ctx.indicators.water_heated
    }

    pub fn is_warming(&self) -> bool {
        self.ctx.plate.is_warming()
    }

    /// Active brew stage, if a session is open.
    pub fn current_stage(&self) -> Option<StageId> {
        self.seq.current_stage()
    }

    pub fn reservoir(&self) -> &Reservoir {
        &self.ctx.reservoir
    }

    pub fn grounds(&self) -> &GroundsHopper {
        &self.ctx.grounds
    }

    pub fn heater(&self) -> &Heater {
        &self.ctx.heater
    }

    /// Pot on the plate, if any.
    pub fn pot(&self) -> Option<&Pot> {
        self.ctx.pot.as_ref()
    }

    pub fn config(&self) -> &MachineConfig {
        &self.ctx.config
    }

    /// Successful brews since construction.
    pub fn brews_completed(&self) -> u64 {
        self.brews_completed
    }

    pub fn sensors(&self) -> SensorSnapshot {
        SensorSnapshot::capture(&self.ctx)
    }

    pub fn telemetry(&self) -> TelemetryData {
        TelemetryData {
            state: self.state,
            reservoir_weight: self.ctx.reservoir.current_weight(),
            pot_weight: self.ctx.pot.as_ref().map(|p| p.current_weight()),
            water_temperature_c: self.ctx.heater.water_temperature(),
            grounds_amount: self.ctx.grounds.current_amount(),
            pressure_valve_open: self.ctx.indicators.pressure_valve_open,
            warming: self.ctx.plate.is_warming(),
        }
    }

    // ── Events ────────────────────────────────────────────────

    /// Hand every queued event to `handler`, oldest first.
    pub fn drain_events(&mut self, handler: impl FnMut(MakerEvent)) {
        self.events.drain(handler);
    }

    /// Forward every queued event to `sink`, oldest first.
    pub fn drain_into(&mut self, sink: &mut impl EventSink) {
        self.events.drain(|event| sink.emit(&event));
    }

    pub fn pending_events(&self) -> usize {
        self.events.len()
    }

    // ── Internal ──────────────────────────────────────────────

    fn emit(&mut self, event: MakerEvent) {
        if self.ctx.config.event_log_enabled {
            self.events.push(event);
        }
    }

    fn set_state(&mut self, next: BrewState) {
        let prev = self.state;
        if prev == next {
            return;
        }
        info!("Brew state: {} -> {}", prev, next);
        self.state = next;
        self.emit(MakerEvent::StateChanged { from: prev, to: next });
    }

    fn reject(&mut self, err: Error) -> Error {
        warn!("Rejected: {}", err);
        self.emit(MakerEvent::Fault(err));
        err
    }

    /// Apply a plate mutator against the held pot and report any change.
    fn update_plate(&mut self, action: fn(&mut WarmingPlate, Option<&Pot>)) {
        let was = self.ctx.plate.is_warming();
        action(&mut self.ctx.plate, self.ctx.pot.as_ref());
        let now = self.ctx.plate.is_warming();
        if now != was {
            self.emit(MakerEvent::WarmingChanged(now));
        }
    }
}

impl Default for CoffeeMaker {
    fn default() -> Self {
        Self::new()
    }
}
