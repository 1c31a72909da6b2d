//! LCD text: fixed status literals and the decimal encoder.
//!
//! The literals are part of the external display contract — spacing is
//! tuned to the physical 16-character line and must not drift.

/// Prefix before the numeric reading.
pub const TEMPERATURE_PREFIX: &str = "Temperature: ";

/// Shown when the reading falls outside 0–100 °C.
pub const OUT_OF_RANGE_TEXT: &str = "Out of range";

/// Shown when the comparator gate is closed (condition A below B).
/// Leading spaces centre the glyph group on the 16-char line.
pub const GATE_INACTIVE_TEXT: &str = "      A < B";

/// Maximum digits a `u8` renders to ("255").
const MAX_DIGITS: usize = 3;

/// Render an unsigned byte as its minimal decimal string — no leading
/// zeros, no sign.  Digits are extracted least-significant-first and
/// reversed; the do-while shape guarantees `0` still yields one digit.
pub fn decimal_string(mut value: u8) -> heapless::String<MAX_DIGITS> {
    let mut digits = heapless::Vec::<u8, MAX_DIGITS>::new();
    loop {
        // Capacity MAX_DIGITS always holds every digit of a u8.
        let _ = digits.push(b'0' + value % 10);
        value /= 10;
        if value == 0 {
            break;
        }
    }

    let mut out = heapless::String::new();
    for &d in digits.iter().rev() {
        let _ = out.push(d as char);
    }
    out
}
