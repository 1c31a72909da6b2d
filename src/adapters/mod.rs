//! Adapters — concrete implementations of the hexagonal port traits.
//!
//! | Adapter     | Implements                     | Connects to            |
//! |-------------|--------------------------------|------------------------|
//! | `hardware`  | SensorPort, FrameTx, DisplayPort | master node peripherals |
//! |             | FrameRx, ActuatorPort          | slave node peripherals |
//! | `log_sink`  | EventSink                      | serial log output      |

pub mod hardware;
pub mod log_sink;
