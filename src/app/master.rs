//! Master cycle controller.
//!
//! One call to [`MasterController::run_cycle`] is one pass of the
//! sense → gate → transfer → display pipeline:
//!
//! ```text
//!  gate open?  ──yes──▶ read temp ──▶ send frame ──▶ changed? ──▶ LCD
//!      │no                                             │no
//!      ▼                                               ▼
//!  sentinel 255 ──▶ changed? ──▶ LCD + send frame   (skip LCD)
//! ```
//!
//! `old_temperature` is the change-detector: the LCD is rewritten only
//! when the value to show actually moved, so an idle steady-state cycle
//! costs one ADC read and one SPI byte, no LCD traffic.  While the gate
//! is open the frame is sent **every** cycle regardless of change; while
//! closed, the sentinel goes out once per transition.

use log::debug;

use crate::app::events::AppEvent;
use crate::app::ports::{DisplayPort, EventSink, FrameTx, SensorPort};
use crate::app::text::{
    decimal_string, GATE_INACTIVE_TEXT, OUT_OF_RANGE_TEXT, TEMPERATURE_PREFIX,
};
use crate::app::{FRAME_NO_SIGNAL, TEMP_VALID_MAX};

/// Loop-owned state for the master node.
pub struct MasterController {
    /// Last value transmitted/displayed.  Starts at 0 — a power-on first
    /// reading of exactly 0 therefore triggers no display update (known
    /// quirk, kept deliberately).
    old_temperature: u8,
}

impl MasterController {
    pub fn new() -> Self {
        Self { old_temperature: 0 }
    }

    /// Run one full master cycle against the injected hardware ports.
    ///
    /// The `hw` parameter satisfies sensor, link, and display ports at
    /// once — this avoids a triple mutable borrow while keeping the port
    /// boundary explicit.
    pub fn run_cycle(
        &mut self,
        hw: &mut (impl SensorPort + FrameTx + DisplayPort),
        sink: &mut impl EventSink,
    ) {
        if hw.gate_active() {
            let temperature = hw.read_temperature();

            // The slave re-decides from the freshest byte every cycle,
            // so the frame goes out even when nothing changed locally.
            hw.send_frame(temperature);
            sink.emit(&AppEvent::FrameSent(temperature));

            if temperature != self.old_temperature {
                self.show_reading(temperature, hw, sink);
                self.old_temperature = temperature;
            }
        } else {
            let sentinel = FRAME_NO_SIGNAL;

            // Only the transition into the gate-closed state is acted
            // on; repeat closed cycles are fully quiescent.
            if sentinel != self.old_temperature {
                hw.clear();
                hw.write(GATE_INACTIVE_TEXT);
                hw.send_frame(sentinel);
                sink.emit(&AppEvent::GateInactiveShown);
                sink.emit(&AppEvent::FrameSent(sentinel));
                self.old_temperature = sentinel;
            } else {
                debug!("gate closed, steady state");
            }
        }
    }

    /// Last transmitted/displayed value (test hook).
    pub fn last_temperature(&self) -> u8 {
        self.old_temperature
    }

    fn show_reading(
        &self,
        temperature: u8,
        display: &mut impl DisplayPort,
        sink: &mut impl EventSink,
    ) {
        if temperature > TEMP_VALID_MAX {
            display.clear();
            display.write(OUT_OF_RANGE_TEXT);
            sink.emit(&AppEvent::OutOfRangeShown(temperature));
        } else {
            let digits = decimal_string(temperature);
            display.clear();
            display.write(TEMPERATURE_PREFIX);
            display.write(&digits);
            sink.emit(&AppEvent::TemperatureShown(temperature));
        }
    }
}

impl Default for MasterController {
    fn default() -> Self {
        Self::new()
    }
}
