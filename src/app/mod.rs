//! Application core: the coffee maker controller.
//!
//! [`service::CoffeeMaker`] is the only entry point callers need.  It emits
//! [`events::MakerEvent`]s that adapters consume through the
//! [`ports::EventSink`] port.

pub mod events;
pub mod ports;
pub mod service;
