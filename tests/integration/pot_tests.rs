//! Pot exchange: placing, taking, and the warming plate.

use coffeemaker::app::events::MakerEvent;
use coffeemaker::{BrewState, CoffeeMaker, Error, Pot, PotError, WeightVessel};

use super::mock_sink::{RecordingSink, filled_pot, loaded_maker};

#[test]
fn take_from_an_empty_plate_fails() {
    let mut maker = CoffeeMaker::new();
    assert_eq!(maker.take_pot(), Err(Error::Pot(PotError::NoPotToTake)));
    assert_eq!(maker.state(), BrewState::Idle);
}

#[test]
fn second_pot_is_rejected() {
    let mut maker = CoffeeMaker::new();
    maker.put_pot(Pot::new()).unwrap();
    assert_eq!(
        maker.put_pot(filled_pot(50)),
        Err(Error::Pot(PotError::PotAlreadyPresent))
    );
    // The first pot stays on the plate.
    assert_eq!(maker.pot().map(|p| p.current_weight()), Some(0));
}

#[test]
fn put_then_take_returns_the_same_pot() {
    let mut maker = CoffeeMaker::new();
    maker.put_pot(filled_pot(75)).unwrap();
    let pot = maker.take_pot().unwrap();
    assert_eq!(pot.current_weight(), 75);
    assert!(maker.pot().is_none());
}

#[test]
fn taking_the_brewed_pot_stops_warming() {
    let mut maker = loaded_maker(400, 40);
    maker.brew_coffee().unwrap();
    assert!(maker.is_warming());

    let pot = maker.take_pot().unwrap();
    assert_eq!(pot.current_weight(), 400);
    assert!(!maker.is_warming());
    // Ready is about the brew, not the pot.
    assert!(maker.drink_ready());
}

#[test]
fn pot_can_be_returned_after_taking() {
    let mut maker = loaded_maker(400, 40);
    maker.brew_coffee().unwrap();
    let pot = maker.take_pot().unwrap();

    maker.put_pot(pot).unwrap();
    // Warming only restarts through a brew.
    assert!(!maker.is_warming());
    assert_eq!(maker.pot().map(|p| p.current_weight()), Some(400));
}

#[test]
fn pot_events_are_recorded() {
    let mut maker = loaded_maker(400, 40);
    maker.brew_coffee().unwrap();
    maker.take_pot().unwrap();
    let _ = maker.take_pot();

    let mut sink = RecordingSink::new();
    maker.drain_into(&mut sink);

    let placed = sink.position(&MakerEvent::PotPlaced).unwrap();
    let off = sink.position(&MakerEvent::WarmingChanged(false)).unwrap();
    let removed = sink.position(&MakerEvent::PotRemoved).unwrap();
    assert!(placed < off && off < removed);
    assert!(sink.contains(&MakerEvent::Fault(Error::Pot(PotError::NoPotToTake))));
}
