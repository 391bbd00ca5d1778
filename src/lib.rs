//! Drip coffee maker controller library.
//!
//! Models the reservoir, heater, grounds hopper, pump, pot and warming
//! plate of an automatic drip coffee maker, coordinated by
//! [`CoffeeMaker`] which enforces the legal order of a brew cycle.
//!
//! ```
//! use coffeemaker::{CoffeeMaker, Pot, WeightVessel};
//!
//! let mut maker = CoffeeMaker::new();
//! maker.put_pot(Pot::new())?;
//! maker.pour_water_into_the_boiler(400);
//! maker.drop_coffee(400);
//! maker.brew_coffee()?;
//! let pot = maker.take_pot()?;
//! assert_eq!(pot.current_weight(), 400);
//! # Ok::<(), coffeemaker::Error>(())
//! ```

#![deny(unused_must_use)]

pub mod adapters;
pub mod app;
pub mod config;
pub mod drivers;
pub mod error;
pub mod events;
pub mod fsm;
pub mod sensors;
pub mod vessels;

pub use app::service::CoffeeMaker;
pub use config::MachineConfig;
pub use error::{BrewFault, Error, PotError, Result};
pub use fsm::BrewState;
pub use vessels::{GroundsHopper, Pot, Reservoir, WeightVessel};
