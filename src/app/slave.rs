//! Slave cycle controller.
//!
//! Receive-driven: the slave has no timer of its own — each received
//! frame triggers exactly one decode → actuate pass, so the node runs at
//! whatever cadence the master transmits.
//!
//! The cooler write is change-detected through `old_duty_cycle` to keep
//! redundant PWM register traffic off the bus; the LED and heater are
//! recomputed and written every cycle because the LED is edge-triggered
//! (a toggle, producing a blink) and the heater is a plain level.

use log::debug;

use crate::app::events::AppEvent;
use crate::app::ports::{ActuatorPort, EventSink};
use crate::control::{duty_cycle_for, heater_should_run, led_should_blink, pwm_register_for};

/// Loop-owned state for the slave node.
pub struct SlaveController {
    /// Last duty cycle applied to the cooler.  Starts at 0 — the first
    /// frame after power-on writes the register only if it commands a
    /// non-zero duty (same quirk as the master's change-detector).
    old_duty_cycle: u8,
    /// Current indicator LED level, owned here so the blink toggle needs
    /// no hardware read-back.
    led_on: bool,
}

impl SlaveController {
    pub fn new() -> Self {
        Self {
            old_duty_cycle: 0,
            led_on: false,
        }
    }

    /// Decode one received frame and drive all three outputs.
    pub fn process_frame(
        &mut self,
        temperature: u8,
        hw: &mut impl ActuatorPort,
        sink: &mut impl EventSink,
    ) {
        sink.emit(&AppEvent::FrameReceived(temperature));

        // ── Cooler (change-detected) ──────────────────────────
        let duty = duty_cycle_for(temperature);
        if duty != self.old_duty_cycle {
            hw.set_cooler_register(pwm_register_for(duty));
            sink.emit(&AppEvent::DutyChanged {
                from: self.old_duty_cycle,
                to: duty,
            });
            self.old_duty_cycle = duty;
        } else {
            debug!("duty unchanged at {}%", duty);
        }

        // ── Indicator LED (toggle while over-range) ───────────
        if led_should_blink(temperature) {
            self.led_on = !self.led_on;
        } else {
            self.led_on = false;
        }
        hw.set_led(self.led_on);
        sink.emit(&AppEvent::LedSet(self.led_on));

        // ── Heater (level) ────────────────────────────────────
        let heat = heater_should_run(temperature);
        hw.set_heater(heat);
        sink.emit(&AppEvent::HeaterSet(heat));
    }

    /// Duty cycle currently applied to the cooler (test hook).
    pub fn current_duty(&self) -> u8 {
        self.old_duty_cycle
    }

    /// Current indicator LED level (test hook).
    pub fn led_on(&self) -> bool {
        self.led_on
    }
}

impl Default for SlaveController {
    fn default() -> Self {
        Self::new()
    }
}
