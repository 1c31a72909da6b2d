//! Sensor drivers for the master node: the LM35 temperature sensor and
//! the two-channel comparator gate.  Both read ADC1 through `hw_init`
//! helpers; on host targets they read injectable atomics instead.

pub mod gate;
pub mod temperature;
