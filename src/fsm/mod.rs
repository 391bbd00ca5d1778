//! Brew state and the function-pointer stage sequencer.
//!
//! The controller is always in one [`BrewState`].  While it is `Brewing`,
//! the [`BrewSequencer`] walks a fixed table of stages:
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │  StageTable                                  │
//! │  ┌─────────────┬───────────┬───────────────┐ │
//! │  │ StageId     │ on_enter  │ on_update     │ │
//! │  ├─────────────┼───────────┼───────────────┤ │
//! │  │ CheckWater  │ -         │ fn(ctx)->Out  │ │
//! │  │ Heating     │ fn(ctx)   │ fn(ctx)->Out  │ │
//! │  │ CheckPlate  │ -         │ fn(ctx)->Out  │ │
//! │  │ CheckCoffee │ -         │ fn(ctx)->Out  │ │
//! │  │ Pumping     │ fn(ctx)   │ fn(ctx)->Out  │ │
//! │  │ Finish      │ -         │ fn(ctx)->Out  │ │
//! │  └─────────────┴───────────┴───────────────┘ │
//! └──────────────────────────────────────────────┘
//! ```
//!
//! Each tick runs `on_update` for the current stage.  `Next(id)` enters the
//! next stage, `Complete` and `Fault` end the session, `Stay` keeps the
//! current stage for another tick.

pub mod context;
pub mod states;

use core::fmt;

use context::MachineContext;
use log::info;

use crate::error::BrewFault;

// ---------------------------------------------------------------------------
// Brew state
// ---------------------------------------------------------------------------

/// Controller-level state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BrewState {
    #[default]
    Idle,
    Brewing,
    /// Coffee is in the pot and the ready lamp is lit.
    Ready,
    /// The last brew stopped on a precondition.
    Faulted(BrewFault),
}

impl BrewState {
    pub fn is_brewing(self) -> bool {
        matches!(self, Self::Brewing)
    }

    pub fn is_ready(self) -> bool {
        matches!(self, Self::Ready)
    }

    pub fn fault(self) -> Option<BrewFault> {
        match self {
            Self::Faulted(f) => Some(f),
            _ => None,
        }
    }
}

impl fmt::Display for BrewState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Idle => write!(f, "Idle"),
            Self::Brewing => write!(f, "Brewing"),
            Self::Ready => write!(f, "Ready"),
            Self::Faulted(fault) => write!(f, "Faulted({fault})"),
        }
    }
}

// ---------------------------------------------------------------------------
// Stage identity
// ---------------------------------------------------------------------------

/// Stages of one brew session, in execution order.
/// Must stay in sync with the table built in [`states::build_stage_table`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum StageId {
    CheckWater = 0,
    Heating = 1,
    CheckPlate = 2,
    CheckCoffee = 3,
    Pumping = 4,
    Finish = 5,
}

impl StageId {
    /// Total number of stages, used to size the table array.
    pub const COUNT: usize = 6;

    /// Convert an index back to `StageId`.  Out-of-range indices are a bug;
    /// release builds fall back to `Finish`.
    pub fn from_index(idx: usize) -> Self {
        match idx {
            0 => Self::CheckWater,
            1 => Self::Heating,
            2 => Self::CheckPlate,
            3 => Self::CheckCoffee,
            4 => Self::Pumping,
            5 => Self::Finish,
            _ => {
                debug_assert!(false, "invalid stage index: {idx}");
                Self::Finish
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Handler signatures
// ---------------------------------------------------------------------------

/// What a stage's update handler decided.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StageOutcome {
    /// No progress; remain in the current stage.
    Stay,
    /// Move on to another stage.
    Next(StageId),
    /// The brew finished successfully.
    Complete,
    /// The brew stopped on a precondition.
    Fault(BrewFault),
}

/// Runs once when a stage is entered.
pub type StageActionFn = fn(&mut MachineContext);

/// Per-tick handler for a stage.
pub type StageUpdateFn = fn(&mut MachineContext) -> StageOutcome;

/// Static descriptor for a single stage.
pub struct StageDescriptor {
    pub id: StageId,
    pub name: &'static str,
    pub on_enter: Option<StageActionFn>,
    pub on_update: StageUpdateFn,
}

// ---------------------------------------------------------------------------
// Sequencer engine
// ---------------------------------------------------------------------------

pub struct BrewSequencer {
    /// Fixed-size table indexed by `StageId as usize`.
    table: [StageDescriptor; StageId::COUNT],
    /// Index of the active stage; `None` outside a session.
    current: Option<usize>,
    tick_count: u64,
    stage_entry_tick: u64,
}

impl BrewSequencer {
    pub fn new(table: [StageDescriptor; StageId::COUNT]) -> Self {
        Self {
            table,
            current: None,
            tick_count: 0,
            stage_entry_tick: 0,
        }
    }

    /// Enter the first stage.  Any unfinished session is discarded.
    pub fn begin(&mut self, ctx: &mut MachineContext) {
        info!("SEQ: session starting");
        self.enter(StageId::CheckWater as usize, ctx);
    }

    /// Run one stage update.  Outside a session this reports `Stay`.
    pub fn tick(&mut self, ctx: &mut MachineContext) -> StageOutcome {
        let Some(idx) = self.current else {
            return StageOutcome::Stay;
        };
        self.tick_count += 1;

        let outcome = (self.table[idx].on_update)(ctx);
        match outcome {
            StageOutcome::Stay => {}
            StageOutcome::Next(next) => {
                info!(
                    "SEQ: {} -> {}",
                    self.table[idx].name,
                    self.table[next as usize].name
                );
                self.enter(next as usize, ctx);
            }
            StageOutcome::Complete => {
                info!("SEQ: session complete in {}", self.table[idx].name);
                self.current = None;
            }
            StageOutcome::Fault(fault) => {
                info!("SEQ: session stopped in {}: {fault}", self.table[idx].name);
                self.current = None;
            }
        }
        outcome
    }

    /// Active stage, if a session is running.
    pub fn current_stage(&self) -> Option<StageId> {
        self.current.map(StageId::from_index)
    }

    pub fn is_running(&self) -> bool {
        self.current.is_some()
    }

    /// Ticks spent in the active stage.
    pub fn ticks_in_current_stage(&self) -> u64 {
        self.tick_count - self.stage_entry_tick
    }

    fn enter(&mut self, idx: usize, ctx: &mut MachineContext) {
        self.current = Some(idx);
        self.stage_entry_tick = self.tick_count;
        if let Some(enter) = self.table[idx].on_enter {
            enter(ctx);
        }
    }
}
