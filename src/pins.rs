//! GPIO / peripheral pin assignments for both ThermoLink boards.
//!
//! Single source of truth — every driver references this module rather than
//! hard-coding pin numbers.  Change a pin here and it propagates everywhere.
//!
//! The master and slave are separate physical boards running separate
//! binaries, so the two sections below never conflict at runtime.

// ---------------------------------------------------------------------------
// SPI transfer link (both nodes)
// ---------------------------------------------------------------------------

pub const SPI_SCLK_GPIO: i32 = 12;
pub const SPI_MOSI_GPIO: i32 = 11;
pub const SPI_MISO_GPIO: i32 = 13;
/// Slave-select line.  Driven manually by the master (active LOW) so the
/// select/deselect framing around each byte stays explicit.
pub const SPI_CS_GPIO: i32 = 10;

/// SPI clock rate.  One byte every 500 ms needs nothing faster, and a
/// slow clock tolerates long leads between the two boards.
pub const SPI_CLOCK_HZ: i32 = 62_500;

// ---------------------------------------------------------------------------
// Master node — sensors (ADC1)
// ---------------------------------------------------------------------------

/// LM35 temperature sensor output (10 mV/°C), ADC1 channel 4.
pub const TEMP_ADC_CH: u32 = 4;
/// Comparator gate, positive input (condition A), ADC1 channel 5.
pub const GATE_A_ADC_CH: u32 = 5;
/// Comparator gate, negative input (condition B), ADC1 channel 6.
pub const GATE_B_ADC_CH: u32 = 6;

// ---------------------------------------------------------------------------
// Master node — HD44780 character LCD (4-bit mode)
// ---------------------------------------------------------------------------

pub const LCD_RS_GPIO: i32 = 1;
pub const LCD_EN_GPIO: i32 = 2;
pub const LCD_D4_GPIO: i32 = 3;
pub const LCD_D5_GPIO: i32 = 4;
pub const LCD_D6_GPIO: i32 = 5;
pub const LCD_D7_GPIO: i32 = 6;

// ---------------------------------------------------------------------------
// Slave node — actuators
// ---------------------------------------------------------------------------

/// Cooling fan PWM output (LEDC channel 0).
pub const COOLER_PWM_GPIO: i32 = 7;
/// Over-range indicator LED (active HIGH).
pub const LED_GPIO: i32 = 8;
/// Heater relay drive (active HIGH).
pub const HEATER_GPIO: i32 = 9;

// ---------------------------------------------------------------------------
// PWM configuration
// ---------------------------------------------------------------------------

/// LEDC timer resolution (bits).  8-bit gives 0 – 255 duty levels, the
/// same register range the duty-cycle scaling in `control` targets.
pub const PWM_RESOLUTION_BITS: u32 = 8;
/// LEDC base frequency for the cooling fan (25 kHz — inaudible).
pub const COOLER_PWM_FREQ_HZ: u32 = 25_000;
