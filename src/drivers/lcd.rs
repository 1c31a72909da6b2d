//! HD44780 character LCD driver, 4-bit parallel mode.
//!
//! Six GPIOs: register-select, enable, and the high data nibble.  Each
//! byte goes out as two nibbles latched by an enable pulse.  Timing uses
//! short busy-waits — the controller needs ~37 µs per instruction and
//! 1.5 ms for clear/home.
//!
//! ## Dual-target design
//!
//! On ESP-IDF: drives real GPIO via hw_init helpers.
//! On host/test: hw_init stubs make every write a no-op; the domain
//! layer is tested against a mock `DisplayPort` instead.

use crate::drivers::hw_init;
use crate::pins;

/// Clear-display instruction (also homes the cursor).
const CMD_CLEAR: u8 = 0x01;
/// Function set: 4-bit bus, two lines, 5x8 font.
const CMD_FUNCTION_SET: u8 = 0x28;
/// Display on, cursor off, blink off.
const CMD_DISPLAY_ON: u8 = 0x0C;
/// Entry mode: increment cursor, no shift.
const CMD_ENTRY_MODE: u8 = 0x06;

pub struct LcdDisplay {
    initialised: bool,
}

impl LcdDisplay {
    pub fn new() -> Self {
        Self { initialised: false }
    }

    /// Power-on init sequence.  Must run once before any text call.
    pub fn init(&mut self) {
        // Datasheet reset-by-instruction: three 0x3 nibbles, then 0x2 to
        // drop the bus to 4-bit mode.
        hw_init::delay_us(50_000);
        self.write_nibble(0x3, false);
        hw_init::delay_us(4_500);
        self.write_nibble(0x3, false);
        hw_init::delay_us(4_500);
        self.write_nibble(0x3, false);
        hw_init::delay_us(150);
        self.write_nibble(0x2, false);

        self.command(CMD_FUNCTION_SET);
        self.command(CMD_DISPLAY_ON);
        self.command(CMD_CLEAR);
        hw_init::delay_us(1_500);
        self.command(CMD_ENTRY_MODE);

        self.initialised = true;
    }

    /// Erase all content and home the cursor.
    pub fn clear(&mut self) {
        debug_assert!(self.initialised, "LCD used before init()");
        self.command(CMD_CLEAR);
        hw_init::delay_us(1_500); // clear is the slow instruction
    }

    /// Write text at the cursor, one character per data byte.
    pub fn write_str(&mut self, text: &str) {
        debug_assert!(self.initialised, "LCD used before init()");
        for byte in text.bytes() {
            self.write_byte(byte, true);
        }
    }

    pub fn is_initialised(&self) -> bool {
        self.initialised
    }

    fn command(&mut self, cmd: u8) {
        self.write_byte(cmd, false);
    }

    fn write_byte(&mut self, byte: u8, is_data: bool) {
        self.write_nibble(byte >> 4, is_data);
        self.write_nibble(byte & 0x0F, is_data);
        hw_init::delay_us(40);
    }

    fn write_nibble(&mut self, nibble: u8, is_data: bool) {
        hw_init::gpio_write(pins::LCD_RS_GPIO, is_data);
        hw_init::gpio_write(pins::LCD_D4_GPIO, nibble & 0x1 != 0);
        hw_init::gpio_write(pins::LCD_D5_GPIO, nibble & 0x2 != 0);
        hw_init::gpio_write(pins::LCD_D6_GPIO, nibble & 0x4 != 0);
        hw_init::gpio_write(pins::LCD_D7_GPIO, nibble & 0x8 != 0);

        // Latch on the enable pulse's falling edge.
        hw_init::gpio_write(pins::LCD_EN_GPIO, true);
        hw_init::delay_us(1);
        hw_init::gpio_write(pins::LCD_EN_GPIO, false);
    }
}

impl Default for LcdDisplay {
    fn default() -> Self {
        Self::new()
    }
}
