//! Cooling fan PWM driver (LEDC channel 0).
//!
//! Dumb actuator: takes a pre-scaled 8-bit compare register value and
//! writes it.  Duty-percent → register scaling is domain logic and lives
//! in [`crate::control`], not here.
//!
//! ## Dual-target design
//!
//! On ESP-IDF: drives the LEDC PWM channel via hw_init.
//! On host/test: tracks state in-memory only.

use crate::drivers::hw_init;

pub struct CoolerDriver {
    register: u8,
}

impl CoolerDriver {
    pub fn new() -> Self {
        Self { register: 0 }
    }

    /// Write the raw compare register (0 = off, 255 = full on).
    pub fn set_register(&mut self, register: u8) {
        hw_init::ledc_set(hw_init::LEDC_CH_COOLER, register);
        self.register = register;
    }

    pub fn current_register(&self) -> u8 {
        self.register
    }
}

impl Default for CoolerDriver {
    fn default() -> Self {
        Self::new()
    }
}
