//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing every controller event through the
//! `log` facade.  Whatever logger the host installs decides where it goes.

use log::{info, warn};

use crate::app::events::MakerEvent;
use crate::app::ports::EventSink;

/// Adapter that logs every [`MakerEvent`].
#[derive(Debug, Default)]
pub struct LogEventSink {
    emitted: u64,
}

impl LogEventSink {
    pub fn new() -> Self {
        Self { emitted: 0 }
    }

    /// Events logged so far.
    pub fn emitted(&self) -> u64 {
        self.emitted
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &MakerEvent) {
        self.emitted += 1;
        match event {
            MakerEvent::Telemetry(t) => {
                info!(
                    "TELEM | state={} | reservoir={} | pot={} | T={:.1}\u{00b0}C | \
                     grounds={} | valve={} | plate={}",
                    t.state,
                    t.reservoir_weight,
                    t.pot_weight
                        .map_or_else(|| "-".to_string(), |w| w.to_string()),
                    t.water_temperature_c,
                    t.grounds_amount,
                    if t.pressure_valve_open { "OPEN" } else { "CLOSED" },
                    if t.warming { "WARM" } else { "OFF" },
                );
            }
            MakerEvent::BrewStarted => info!("BREW  | started"),
            MakerEvent::StateChanged { from, to } => info!("STATE | {} -> {}", from, to),
            MakerEvent::StageEntered(stage) => info!("STAGE | {:?}", stage),
            MakerEvent::Fault(err) => warn!("FAULT | {}", err),
            MakerEvent::PotPlaced => info!("POT   | placed"),
            MakerEvent::PotRemoved => info!("POT   | removed"),
            MakerEvent::WarmingChanged(on) => {
                info!("PLATE | {}", if *on { "warming" } else { "off" });
            }
        }
    }
}
