//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing structured application events to
//! the serial logger.  Tests use a recording sink instead; a telemetry
//! uplink would implement the same trait.

use log::info;

use crate::app::events::AppEvent;
use crate::app::ports::EventSink;

/// Adapter that logs every [`AppEvent`] to the serial console.
pub struct LogEventSink;

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &AppEvent) {
        match event {
            AppEvent::FrameSent(frame) => info!("LINK  | sent frame {}", frame),
            AppEvent::FrameReceived(frame) => info!("LINK  | received frame {}", frame),
            AppEvent::TemperatureShown(t) => info!("LCD   | temperature {} C", t),
            AppEvent::OutOfRangeShown(t) => info!("LCD   | out of range (raw {})", t),
            AppEvent::GateInactiveShown => info!("LCD   | gate inactive (A < B)"),
            AppEvent::DutyChanged { from, to } => {
                info!("COOL  | duty {}% -> {}%", from, to);
            }
            AppEvent::LedSet(on) => info!("LED   | {}", if *on { "on" } else { "off" }),
            AppEvent::HeaterSet(on) => info!("HEAT  | {}", if *on { "on" } else { "off" }),
        }
    }
}
