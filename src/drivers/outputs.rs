//! Digital output drivers for the slave node: indicator LED and heater.
//!
//! Both are plain level drives with in-memory state tracking.  The blink
//! behaviour of the LED is not here — the slave controller owns the
//! toggle state and these drivers stay dumb.
//!
//! ## Dual-target design
//!
//! On ESP-IDF: drives real GPIO via hw_init.
//! On host/test: tracks state in-memory only.

use crate::drivers::hw_init;
use crate::pins;

pub struct IndicatorLed {
    on: bool,
}

impl IndicatorLed {
    pub fn new() -> Self {
        Self { on: false }
    }

    pub fn set(&mut self, on: bool) {
        hw_init::gpio_write(pins::LED_GPIO, on);
        self.on = on;
    }

    pub fn is_on(&self) -> bool {
        self.on
    }
}

pub struct HeaterSwitch {
    on: bool,
}

impl HeaterSwitch {
    pub fn new() -> Self {
        Self { on: false }
    }

    pub fn set(&mut self, on: bool) {
        hw_init::gpio_write(pins::HEATER_GPIO, on);
        self.on = on;
    }

    pub fn is_on(&self) -> bool {
        self.on
    }
}

impl Default for IndicatorLed {
    fn default() -> Self {
        Self::new()
    }
}

impl Default for HeaterSwitch {
    fn default() -> Self {
        Self::new()
    }
}
