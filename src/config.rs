//! System configuration parameters
//!
//! Timing knobs for the master sampling loop.  The duty-cycle band table
//! and actuator thresholds are deliberately *not* here — they are fixed
//! compile-time data in [`crate::control`], since the control contract
//! does not allow runtime retuning.

use serde::{Deserialize, Serialize};

/// Master node configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MasterConfig {
    /// Delay between master sampling cycles (milliseconds)
    pub sample_interval_ms: u32,
    /// Settle delay after LCD init before the loop starts (milliseconds)
    pub splash_delay_ms: u32,
}

impl Default for MasterConfig {
    fn default() -> Self {
        Self {
            sample_interval_ms: 500, // 2 Hz sampling
            splash_delay_ms: 500,
        }
    }
}
