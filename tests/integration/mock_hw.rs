//! Mock hardware adapters for integration tests.
//!
//! Record every port call so tests can assert on the full command
//! history without touching real ADC/SPI/GPIO registers.

use thermolink::app::events::AppEvent;
use thermolink::app::ports::{
    ActuatorPort, DisplayPort, EventSink, FrameTx, SensorPort,
};

// ── Master-side mock ──────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayCall {
    Clear,
    Write(String),
}

pub struct MockMasterHw {
    pub gate_open: bool,
    pub temperature: u8,
    pub sent_frames: Vec<u8>,
    pub display_calls: Vec<DisplayCall>,
}

#[allow(dead_code)]
impl MockMasterHw {
    pub fn new() -> Self {
        Self {
            gate_open: true,
            temperature: 0,
            sent_frames: Vec::new(),
            display_calls: Vec::new(),
        }
    }

    /// Number of full display updates (clear operations).
    pub fn clear_count(&self) -> usize {
        self.display_calls
            .iter()
            .filter(|c| matches!(c, DisplayCall::Clear))
            .count()
    }

    /// Text visible since the last clear, concatenated.
    pub fn visible_text(&self) -> String {
        let mut text = String::new();
        for call in &self.display_calls {
            match call {
                DisplayCall::Clear => text.clear(),
                DisplayCall::Write(s) => text.push_str(s),
            }
        }
        text
    }
}

impl SensorPort for MockMasterHw {
    fn gate_active(&mut self) -> bool {
        self.gate_open
    }

    fn read_temperature(&mut self) -> u8 {
        self.temperature
    }
}

impl FrameTx for MockMasterHw {
    fn send_frame(&mut self, frame: u8) {
        self.sent_frames.push(frame);
    }
}

impl DisplayPort for MockMasterHw {
    fn clear(&mut self) {
        self.display_calls.push(DisplayCall::Clear);
    }

    fn write(&mut self, text: &str) {
        self.display_calls.push(DisplayCall::Write(text.to_string()));
    }
}

// ── Slave-side mock ───────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActuatorCall {
    Cooler(u8),
    Led(bool),
    Heater(bool),
}

pub struct MockSlaveHw {
    pub calls: Vec<ActuatorCall>,
}

#[allow(dead_code)]
impl MockSlaveHw {
    pub fn new() -> Self {
        Self { calls: Vec::new() }
    }

    pub fn cooler_writes(&self) -> Vec<u8> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                ActuatorCall::Cooler(reg) => Some(*reg),
                _ => None,
            })
            .collect()
    }

    pub fn led_writes(&self) -> Vec<bool> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                ActuatorCall::Led(on) => Some(*on),
                _ => None,
            })
            .collect()
    }

    pub fn heater_writes(&self) -> Vec<bool> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                ActuatorCall::Heater(on) => Some(*on),
                _ => None,
            })
            .collect()
    }
}

impl ActuatorPort for MockSlaveHw {
    fn set_cooler_register(&mut self, register: u8) {
        self.calls.push(ActuatorCall::Cooler(register));
    }

    fn set_led(&mut self, on: bool) {
        self.calls.push(ActuatorCall::Led(on));
    }

    fn set_heater(&mut self, on: bool) {
        self.calls.push(ActuatorCall::Heater(on));
    }
}

// ── Recording event sink ──────────────────────────────────────

pub struct RecordingSink {
    pub events: Vec<AppEvent>,
}

#[allow(dead_code)]
impl RecordingSink {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }
}

impl EventSink for RecordingSink {
    fn emit(&mut self, event: &AppEvent) {
        self.events.push(*event);
    }
}
