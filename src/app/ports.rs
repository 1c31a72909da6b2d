//! Port traits — the hexagonal boundary between domain logic and the outside world.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ controller (domain)
//! ```
//!
//! Driven adapters (sensors, the SPI link, the LCD, actuators, event
//! sinks) implement these traits.  The [`MasterController`] and
//! [`SlaveController`] consume them via generics, so the domain core
//! never touches hardware directly — tests substitute recording mocks.
//!
//! Blocking contract: `read_temperature`, `send_frame`, and
//! `receive_frame` all busy-wait on a hardware-completion flag with **no
//! timeout** — a conversion or transfer that never completes hangs the
//! node.  Host-side mock implementations are instantly ready.
//!
//! [`MasterController`]: super::master::MasterController
//! [`SlaveController`]: super::slave::SlaveController

// ───────────────────────────────────────────────────────────────
// Sensor port (driven adapter: hardware → master domain)
// ───────────────────────────────────────────────────────────────

/// Read-side port for the master node's two analog inputs.
pub trait SensorPort {
    /// Live comparator gate state: `true` when condition A exceeds
    /// condition B.  Re-evaluated on every call; no hysteresis.
    fn gate_active(&mut self) -> bool;

    /// Blocking temperature conversion, degrees Celsius.  No clamping —
    /// values outside 0–100 pass through for the controller to judge.
    fn read_temperature(&mut self) -> u8;
}

// ───────────────────────────────────────────────────────────────
// Transfer link ports (one byte per frame, master-initiated)
// ───────────────────────────────────────────────────────────────

/// Master side of the transfer link: fire-and-forget single-byte send.
pub trait FrameTx {
    /// Assert select, shift the byte out, block until the hardware
    /// signals completion, deassert select.  No ack, no retry.
    fn send_frame(&mut self, frame: u8);
}

/// Slave side of the transfer link.
pub trait FrameRx {
    /// Block until the master clocks a byte in, then return it.  If the
    /// master sent several frames since the last poll, only the freshest
    /// is seen (last-value-wins, no backpressure).
    fn receive_frame(&mut self) -> u8;
}

// ───────────────────────────────────────────────────────────────
// Display port (driven adapter: master domain → LCD)
// ───────────────────────────────────────────────────────────────

/// Opaque text sink for the master's status display.
pub trait DisplayPort {
    /// Erase the display.  Idempotent.
    fn clear(&mut self);

    /// Append `text` at the cursor.
    fn write(&mut self, text: &str);
}

// ───────────────────────────────────────────────────────────────
// Actuator port (driven adapter: slave domain → hardware)
// ───────────────────────────────────────────────────────────────

/// Write-side port for the slave node's three outputs.
pub trait ActuatorPort {
    /// Write the raw 8-bit compare register driving the cooling fan.
    fn set_cooler_register(&mut self, register: u8);

    /// Assert or deassert the over-range indicator LED.
    fn set_led(&mut self, on: bool);

    /// Switch the heater on or off.
    fn set_heater(&mut self, on: bool);
}

// ───────────────────────────────────────────────────────────────
// Event sink port (domain → logging / telemetry)
// ───────────────────────────────────────────────────────────────

/// The controllers emit structured [`AppEvent`](super::events::AppEvent)s
/// through this port.  Adapters decide where they go (serial log today;
/// tests record them for assertions).
pub trait EventSink {
    fn emit(&mut self, event: &super::events::AppEvent);
}
