//! Application core — pure domain logic, zero I/O.
//!
//! The master and slave cycle controllers live here.  All interaction
//! with hardware happens through **port traits** defined in [`ports`],
//! keeping this layer fully testable without real peripherals.

pub mod events;
pub mod master;
pub mod ports;
pub mod slave;
pub mod text;

/// Frame value meaning "no valid reading this cycle" (gate closed or the
/// sensed value is outside coverage).  Out-of-band for the 0–100 °C range.
pub const FRAME_NO_SIGNAL: u8 = 255;

/// Upper bound of the valid temperature range (°C).  Readings above this
/// are displayed as out-of-range but still transmitted verbatim.
pub const TEMP_VALID_MAX: u8 = 100;
