//! Concrete stage handler functions and table builder.
//!
//! Each stage is a pair of plain `fn` pointers, no closures and no
//! dynamic dispatch.  Checks run in a fixed order; the plate is checked
//! only after the water has boiled.
//!
//! ```text
//!  CheckWater ──▶ Heating ──▶ CheckPlate ──▶ CheckCoffee ──▶ Pumping ──▶ Finish
//!      │                          │               │                        │
//!   NoWater                     NoPot          NoCoffee                 Complete
//! ```

use super::context::MachineContext;
use super::{StageDescriptor, StageId, StageOutcome};
use crate::error::BrewFault;
use crate::sensors::coffee_level::coffee_present;
use crate::sensors::plate_level::plate_empty;
use crate::sensors::temperature::is_boiling;
use crate::sensors::water_level::{reservoir_drained, water_present};
use crate::vessels::WeightVessel;
use log::{info, warn};

// ═══════════════════════════════════════════════════════════════════════════
//  Table builder
// ═══════════════════════════════════════════════════════════════════════════

pub fn build_stage_table() -> [StageDescriptor; StageId::COUNT] {
    [
        StageDescriptor {
            id: StageId::CheckWater,
            name: "CheckWater",
            on_enter: None,
            on_update: check_water_update,
        },
        StageDescriptor {
            id: StageId::Heating,
            name: "Heating",
            on_enter: Some(heating_enter),
            on_update: heating_update,
        },
        StageDescriptor {
            id: StageId::CheckPlate,
            name: "CheckPlate",
            on_enter: None,
            on_update: check_plate_update,
        },
        StageDescriptor {
            id: StageId::CheckCoffee,
            name: "CheckCoffee",
            on_enter: None,
            on_update: check_coffee_update,
        },
        StageDescriptor {
            id: StageId::Pumping,
            name: "Pumping",
            on_enter: Some(pumping_enter),
            on_update: pumping_update,
        },
        StageDescriptor {
            id: StageId::Finish,
            name: "Finish",
            on_enter: None,
            on_update: finish_update,
        },
    ]
}

// ═══════════════════════════════════════════════════════════════════════════
//  Precondition checks
// ═══════════════════════════════════════════════════════════════════════════

fn check_water_update(ctx: &mut MachineContext) -> StageOutcome {
    if !water_present(&ctx.reservoir) {
        warn!("CHECK: reservoir empty");
        return StageOutcome::Fault(BrewFault::NoWater);
    }
    StageOutcome::Next(StageId::Heating)
}

fn check_plate_update(ctx: &mut MachineContext) -> StageOutcome {
    if plate_empty(ctx.pot.as_ref()) {
        warn!("CHECK: no pot on the plate");
        return StageOutcome::Fault(BrewFault::NoPot);
    }
    StageOutcome::Next(StageId::CheckCoffee)
}

fn check_coffee_update(ctx: &mut MachineContext) -> StageOutcome {
    // Grounds are only judged once the water is known to be hot.
    if !ctx.indicators.water_heated {
        return StageOutcome::Stay;
    }
    if !coffee_present(&ctx.grounds) {
        warn!("CHECK: grounds hopper empty");
        return StageOutcome::Fault(BrewFault::NoCoffee);
    }
    StageOutcome::Next(StageId::Pumping)
}

// ═══════════════════════════════════════════════════════════════════════════
//  HEATING: element runs to completion within one tick
// ═══════════════════════════════════════════════════════════════════════════

fn heating_enter(ctx: &mut MachineContext) {
    info!(
        "HEATING: water at {:.1} C, target {:.1} C",
        ctx.heater.water_temperature(),
        ctx.heater.boil_threshold()
    );
}

fn heating_update(ctx: &mut MachineContext) -> StageOutcome {
    ctx.heater.water_heating();
    if is_boiling(&ctx.heater) {
        ctx.indicators.water_heated = true;
        return StageOutcome::Next(StageId::CheckPlate);
    }
    StageOutcome::Stay
}

// ═══════════════════════════════════════════════════════════════════════════
//  PUMPING: valve closed, reservoir emptied into the pot
// ═══════════════════════════════════════════════════════════════════════════

fn pumping_enter(ctx: &mut MachineContext) {
    ctx.indicators.pressure_valve_open = false;
    info!(
        "PUMPING: valve closed, {} to move",
        ctx.reservoir.current_weight()
    );
}

fn pumping_update(ctx: &mut MachineContext) -> StageOutcome {
    // The pot can be lifted between stages of a step-wise session.
    let Some(pot) = ctx.pot.as_mut() else {
        ctx.indicators.pressure_valve_open = true;
        warn!("PUMPING: pot removed, valve reopened");
        return StageOutcome::Fault(BrewFault::NoPot);
    };
    let moved = ctx.pump.push_water(&mut ctx.reservoir, pot);
    info!("PUMPING: {} delivered to the pot", moved);
    StageOutcome::Next(StageId::Finish)
}

// ═══════════════════════════════════════════════════════════════════════════
//  FINISH: drink level confirms the reservoir is empty
// ═══════════════════════════════════════════════════════════════════════════

fn finish_update(ctx: &mut MachineContext) -> StageOutcome {
    if !reservoir_drained(&ctx.reservoir) {
        return StageOutcome::Stay;
    }
    ctx.indicators.pressure_valve_open = true;
    ctx.plate.start_warming(ctx.pot.as_ref());
    info!("FINISH: drink ready, valve open");
    StageOutcome::Complete
}
