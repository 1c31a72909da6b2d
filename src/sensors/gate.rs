//! Comparator gate: two analog inputs, active while A > B.
//!
//! Stateless by design — every call re-samples both channels and compares
//! live levels.  No hysteresis and no debounce; a reading sitting right
//! on the boundary may flap between cycles, and the master loop's
//! change-detector absorbs that downstream.
//!
//! ## Dual-target design
//!
//! On ESP-IDF: reads both ADC1 channels via the oneshot API.
//! On host/test: reads two static AtomicU16s for injection.

#[cfg(not(target_os = "espidf"))]
use core::sync::atomic::{AtomicU16, Ordering};

#[cfg(target_os = "espidf")]
use crate::drivers::hw_init;

#[cfg(not(target_os = "espidf"))]
static SIM_GATE_A: AtomicU16 = AtomicU16::new(0);
#[cfg(not(target_os = "espidf"))]
static SIM_GATE_B: AtomicU16 = AtomicU16::new(0);

#[cfg(not(target_os = "espidf"))]
pub fn sim_set_gate_levels(a: u16, b: u16) {
    SIM_GATE_A.store(a, Ordering::Relaxed);
    SIM_GATE_B.store(b, Ordering::Relaxed);
}

pub struct ComparatorGate {
    channel_a: u32,
    channel_b: u32,
}

impl ComparatorGate {
    pub fn new(channel_a: u32, channel_b: u32) -> Self {
        Self {
            channel_a,
            channel_b,
        }
    }

    /// `true` while the voltage on channel A strictly exceeds channel B.
    pub fn is_active(&self) -> bool {
        self.read_channel(self.channel_a) > self.read_channel(self.channel_b)
    }

    #[cfg(target_os = "espidf")]
    fn read_channel(&self, channel: u32) -> u16 {
        hw_init::adc1_read(channel)
    }

    #[cfg(not(target_os = "espidf"))]
    fn read_channel(&self, channel: u32) -> u16 {
        if channel == self.channel_a {
            SIM_GATE_A.load(Ordering::Relaxed)
        } else {
            SIM_GATE_B.load(Ordering::Relaxed)
        }
    }
}
