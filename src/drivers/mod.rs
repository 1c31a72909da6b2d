//! Actuator/display drivers, the SPI link, and peripheral initialisation.

pub mod cooler;
pub mod hw_init;
pub mod lcd;
pub mod outputs;
pub mod spi_link;
