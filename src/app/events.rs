//! Outbound application events.
//!
//! The cycle controllers emit these through the
//! [`EventSink`](super::ports::EventSink) port.  Adapters on the other
//! side decide what to do with them — the stock adapter logs to serial,
//! and the integration tests record them to assert on cycle behaviour.

/// Structured events emitted by the master and slave controllers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEvent {
    /// A frame left the master (every active cycle, plus the gate-closed
    /// transition).  Carries the raw byte.
    FrameSent(u8),

    /// The LCD now shows a numeric temperature.
    TemperatureShown(u8),

    /// The LCD now shows the out-of-range message (reading carried for
    /// the log even though the display does not render it).
    OutOfRangeShown(u8),

    /// The LCD now shows the gate-inactive message.
    GateInactiveShown,

    /// A frame arrived at the slave.
    FrameReceived(u8),

    /// The cooler duty cycle changed and the PWM register was rewritten.
    DutyChanged { from: u8, to: u8 },

    /// Indicator LED output written.
    LedSet(bool),

    /// Heater output written.
    HeaterSet(bool),
}
