//! Temperature → cooling duty-cycle decision table.
//!
//! The table is plain data evaluated in order, so extending or auditing
//! the bands never touches control flow.  Bounds are inclusive integers;
//! anything the table does not cover — below 25 °C, above 55 °C, and the
//! 255 no-signal sentinel — falls through to 0 % (fan off).

/// One contiguous temperature band and the fan duty it commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DutyBand {
    /// Lowest temperature in the band (inclusive, °C).
    pub lower: u8,
    /// Highest temperature in the band (inclusive, °C).
    pub upper: u8,
    /// Commanded duty cycle (percent).
    pub duty: u8,
}

/// The fixed decision table, ordered by temperature.
pub const DUTY_BANDS: [DutyBand; 6] = [
    DutyBand { lower: 25, upper: 29, duty: 50 },
    DutyBand { lower: 30, upper: 34, duty: 60 },
    DutyBand { lower: 35, upper: 39, duty: 70 },
    DutyBand { lower: 40, upper: 44, duty: 80 },
    DutyBand { lower: 45, upper: 49, duty: 90 },
    DutyBand { lower: 50, upper: 55, duty: 100 },
];

/// Map a received temperature byte to a duty-cycle percentage.
///
/// Pure function of the input byte; the no-signal sentinel (255) lands in
/// the default 0 % case like any other uncovered value.
pub fn duty_cycle_for(temperature: u8) -> u8 {
    for band in &DUTY_BANDS {
        if temperature >= band.lower && temperature <= band.upper {
            return band.duty;
        }
    }
    0
}

/// Scale a duty percentage to the 8-bit LEDC compare register.
///
/// Truncating integer scaling (round toward zero): 80 % → 204.
pub fn pwm_register_for(duty_percent: u8) -> u8 {
    ((duty_percent as u16) * 255 / 100) as u8
}

/// LED blink condition: temperature strictly above the table's top band
/// but still inside sensor coverage, i.e. (55, 100].
///
/// The slave *toggles* its LED every cycle this holds, producing a blink
/// at the master's transmission cadence.
pub fn led_should_blink(temperature: u8) -> bool {
    temperature > 55 && temperature <= 100
}

/// Heater condition: below 20 °C.  Level-triggered, unlike the LED.
pub fn heater_should_run(temperature: u8) -> bool {
    temperature < 20
}
