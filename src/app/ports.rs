//! Port traits: the boundary between the controller and the outside world.
//!
//! ```text
//!   CoffeeMaker ──▶ EventSink ──▶ Adapter (log, test recorder, ...)
//! ```

use super::events::MakerEvent;

/// Consumer of structured [`MakerEvent`]s.
pub trait EventSink {
    fn emit(&mut self, event: &MakerEvent);
}
