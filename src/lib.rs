//! ThermoLink firmware library.
//!
//! Two-node temperature control loop: a master node samples an LM35
//! temperature sensor behind an analog comparator gate and ships one
//! byte per cycle over SPI; a slave node maps each byte to a cooling-fan
//! duty cycle and drives the fan, indicator LED, and heater.
//!
//! Exposes the pure-logic modules for integration testing and external
//! inspection. All ESP-IDF-specific code is guarded by
//! `#[cfg(target_os = "espidf")]` within each module.

#![deny(unused_must_use)]

pub mod app;
pub mod config;
pub mod control;

// Public because the two node binaries wire channels/pins at startup.
pub mod pins;

// Re-export the ESPidf-backed modules so the crate compiles on the host;
// the actual hardware access is guarded by cfg attributes inside.
pub mod adapters;
pub mod drivers;
pub mod sensors;
