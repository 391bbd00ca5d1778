//! Brew cycle: success path, every fault, ordering and retries.

use coffeemaker::app::events::MakerEvent;
use coffeemaker::fsm::StageId;
use coffeemaker::{BrewFault, BrewState, CoffeeMaker, Error, MachineConfig, Pot, WeightVessel};

use super::mock_sink::{RecordingSink, filled_pot, loaded_maker};

#[test]
fn full_brew_fills_the_pot() {
    let mut maker = loaded_maker(400, 400);

    maker.brew_coffee().unwrap();

    assert_eq!(maker.state(), BrewState::Ready);
    assert!(maker.ready_indicator());
    assert!(maker.drink_ready());
    assert!(!maker.brew_in_progress());
    assert!(maker.pressure_valve_open());
    assert!(maker.water_heated());
    assert!(maker.is_warming());
    assert_eq!(maker.reservoir().current_weight(), 0);
    assert_eq!(maker.pot().map(|p| p.current_weight()), Some(400));
    assert!(maker.heater().water_temperature() >= 100.0);
    assert_eq!(maker.brews_completed(), 1);
}

#[test]
fn brew_without_water_fails_before_heating() {
    let mut maker = CoffeeMaker::new();
    maker.put_pot(Pot::new()).unwrap();
    maker.drop_coffee(10);

    assert_eq!(maker.brew_coffee(), Err(Error::Brew(BrewFault::NoWater)));
    assert!(!maker.brew_in_progress());
    assert_eq!(maker.state(), BrewState::Faulted(BrewFault::NoWater));
    assert!(!maker.water_heated());
    assert!((maker.heater().water_temperature() - 20.0).abs() < f32::EPSILON);
}

#[test]
fn brew_without_coffee_leaves_the_valve_open() {
    let mut maker = CoffeeMaker::new();
    maker.put_pot(Pot::new()).unwrap();
    maker.pour_water_into_the_boiler(400);

    assert_eq!(maker.brew_coffee(), Err(Error::Brew(BrewFault::NoCoffee)));
    assert!(!maker.brew_in_progress());
    assert!(maker.pressure_valve_open());
    assert!(!maker.ready_indicator());
    // No rollback: the water boiled but never left the reservoir.
    assert!(maker.water_heated());
    assert_eq!(maker.reservoir().current_weight(), 400);
    assert_eq!(maker.pot().map(|p| p.current_weight()), Some(0));
}

#[test]
fn plate_is_checked_after_heating() {
    let mut maker = CoffeeMaker::new();
    maker.pour_water_into_the_boiler(400);
    maker.drop_coffee(40);

    assert_eq!(maker.brew_coffee(), Err(Error::Brew(BrewFault::NoPot)));
    assert!(!maker.brew_in_progress());
    assert!(maker.water_heated());
    assert!(maker.heater().water_temperature() >= 100.0);
    assert_eq!(maker.reservoir().current_weight(), 400);
}

#[test]
fn water_is_checked_before_the_plate() {
    let mut maker = CoffeeMaker::new();
    assert_eq!(maker.brew_coffee(), Err(Error::Brew(BrewFault::NoWater)));
}

#[test]
fn retry_after_adding_coffee_succeeds() {
    let mut maker = loaded_maker(400, 0);
    assert_eq!(maker.brew_coffee(), Err(Error::Brew(BrewFault::NoCoffee)));

    maker.drop_coffee(30);
    maker.brew_coffee().unwrap();
    assert!(maker.drink_ready());
    assert_eq!(maker.pot().map(|p| p.current_weight()), Some(400));
}

#[test]
fn brewing_twice_while_in_progress_is_rejected() {
    let mut maker = loaded_maker(400, 40);
    maker.begin_brew().unwrap();

    assert_eq!(
        maker.brew_coffee(),
        Err(Error::Brew(BrewFault::AlreadyBrewing))
    );
    assert_eq!(
        maker.begin_brew(),
        Err(Error::Brew(BrewFault::AlreadyBrewing))
    );
    // The open session is untouched.
    assert!(maker.brew_in_progress());
    assert_eq!(maker.current_stage(), Some(StageId::CheckWater));
}

#[test]
fn step_wise_session_walks_every_stage() {
    let mut maker = loaded_maker(400, 40);
    maker.begin_brew().unwrap();

    let stages = [
        StageId::Heating,
        StageId::CheckPlate,
        StageId::CheckCoffee,
        StageId::Pumping,
        StageId::Finish,
    ];
    for stage in stages {
        assert_eq!(maker.advance_brew(), Ok(BrewState::Brewing));
        assert_eq!(maker.current_stage(), Some(stage));
    }
    assert!(!maker.pressure_valve_open());

    assert_eq!(maker.advance_brew(), Ok(BrewState::Ready));
    assert_eq!(maker.current_stage(), None);
    assert!(maker.pressure_valve_open());
}

#[test]
fn pot_lifted_mid_session_faults_in_pumping() {
    let mut maker = loaded_maker(400, 40);
    maker.begin_brew().unwrap();
    for _ in 0..3 {
        maker.advance_brew().unwrap();
    }
    assert_eq!(maker.current_stage(), Some(StageId::CheckCoffee));
    let _pot = maker.take_pot().unwrap();

    maker.advance_brew().unwrap();
    assert_eq!(maker.current_stage(), Some(StageId::Pumping));
    assert_eq!(maker.advance_brew(), Err(Error::Brew(BrewFault::NoPot)));
    assert!(!maker.brew_in_progress());
    assert!(maker.pressure_valve_open());
    assert_eq!(maker.reservoir().current_weight(), 400);
}

#[test]
fn filled_pot_placed_mid_brew_starts_warming() {
    let mut maker = CoffeeMaker::new();
    maker.pour_water_into_the_boiler(100);
    maker.drop_coffee(10);
    maker.begin_brew().unwrap();

    maker.put_pot(filled_pot(150)).unwrap();
    assert!(maker.is_warming());
}

#[test]
fn empty_pot_placed_mid_brew_stays_cold() {
    let mut maker = CoffeeMaker::new();
    maker.pour_water_into_the_boiler(100);
    maker.begin_brew().unwrap();

    maker.put_pot(Pot::new()).unwrap();
    assert!(!maker.is_warming());
}

#[test]
fn filled_pot_placed_while_idle_stays_cold() {
    let mut maker = CoffeeMaker::new();
    maker.put_pot(filled_pot(150)).unwrap();
    assert!(!maker.is_warming());
}

#[test]
fn partial_last_stroke_stalls_the_session() {
    // Baseline 30 with 35 poured: the last stroke underflows and the
    // reservoir never reads exactly empty.
    let config = MachineConfig {
        reservoir_baseline: 30,
        ..MachineConfig::default()
    };
    let mut maker = CoffeeMaker::with_config(config).unwrap();
    maker.put_pot(Pot::new()).unwrap();
    maker.pour_water_into_the_boiler(35);
    maker.drop_coffee(10);

    maker.brew_coffee().unwrap();
    assert!(maker.brew_in_progress());
    assert!(!maker.drink_ready());
    assert_eq!(maker.current_stage(), Some(StageId::Finish));
    assert_eq!(
        maker.brew_coffee(),
        Err(Error::Brew(BrewFault::AlreadyBrewing))
    );
}

#[test]
fn second_brew_on_an_empty_reservoir_clears_ready() {
    let mut maker = loaded_maker(200, 20);
    maker.brew_coffee().unwrap();
    assert!(maker.ready_indicator());

    assert_eq!(maker.brew_coffee(), Err(Error::Brew(BrewFault::NoWater)));
    assert!(!maker.ready_indicator());
    assert!(!maker.drink_ready());
    // Coffee from the first brew is still warming.
    assert!(maker.is_warming());
}

#[test]
fn second_brew_tops_up_the_pot() {
    let mut maker = loaded_maker(200, 20);
    maker.brew_coffee().unwrap();
    maker.pour_water_into_the_boiler(100);
    maker.brew_coffee().unwrap();

    assert_eq!(maker.pot().map(|p| p.current_weight()), Some(300));
    assert_eq!(maker.brews_completed(), 2);
}

#[test]
fn successful_brew_event_history() {
    let mut maker = loaded_maker(400, 40);
    maker.drain_events(|_| {});
    maker.brew_coffee().unwrap();

    let mut sink = RecordingSink::new();
    maker.drain_into(&mut sink);

    assert_eq!(sink.events.first(), Some(&MakerEvent::BrewStarted));
    assert_eq!(
        sink.transitions(),
        vec![
            (BrewState::Idle, BrewState::Brewing),
            (BrewState::Brewing, BrewState::Ready),
        ]
    );
    let pumping = sink
        .position(&MakerEvent::StageEntered(StageId::Pumping))
        .unwrap();
    let warming = sink.position(&MakerEvent::WarmingChanged(true)).unwrap();
    assert!(pumping < warming);
    assert!(matches!(
        sink.events.last(),
        Some(MakerEvent::Telemetry(t)) if t.pot_weight == Some(400) && t.warming
    ));
}

#[test]
fn fault_is_recorded_as_an_event() {
    let mut maker = CoffeeMaker::new();
    let _ = maker.brew_coffee();

    let mut sink = RecordingSink::new();
    maker.drain_into(&mut sink);
    assert!(sink.contains(&MakerEvent::Fault(Error::Brew(BrewFault::NoWater))));
    assert_eq!(
        sink.transitions().last(),
        Some(&(BrewState::Brewing, BrewState::Faulted(BrewFault::NoWater)))
    );
}

#[test]
fn sensor_snapshot_follows_the_brew() {
    let mut maker = loaded_maker(400, 40);
    let before = maker.sensors();
    assert!(before.water_present);
    assert!(!before.boiling);
    assert!(before.coffee_present);
    assert!(!before.reservoir_drained);
    assert!(!before.plate_empty);
    assert_eq!(before.pot_empty, Some(true));

    maker.brew_coffee().unwrap();
    let after = maker.sensors();
    assert!(!after.water_present);
    assert!(after.boiling);
    assert!(after.reservoir_drained);
    assert_eq!(after.pot_empty, Some(false));
    // Grounds are never consumed.
    assert!(after.coffee_present);
    assert_eq!(maker.grounds().current_amount(), 40);

    maker.take_pot().unwrap();
    let lifted = maker.sensors();
    assert!(lifted.plate_empty);
    assert_eq!(lifted.pot_empty, None);
}

#[test]
fn custom_config_is_kept_by_the_maker() {
    let config = MachineConfig {
        pump_step: 25,
        reservoir_baseline: 30,
        ..MachineConfig::default()
    };
    let mut maker = CoffeeMaker::with_config(config.clone()).unwrap();
    assert_eq!(maker.config(), &config);

    maker.put_pot(Pot::new()).unwrap();
    maker.pour_water_into_the_boiler(100);
    maker.drop_coffee(10);
    maker.brew_coffee().unwrap();
    assert_eq!(maker.state(), BrewState::Ready);
    assert_eq!(maker.pot().map(|p| p.current_weight()), Some(100));
}
