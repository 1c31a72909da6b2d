//! SPI transfer link drivers — one byte per frame, master-initiated.
//!
//! The master frames every byte with an explicit select window: drive CS
//! low, shift the byte, block on transfer-complete, drive CS high.  The
//! slave simply parks on the receive call until the master clocks a byte
//! in.  There is no acknowledgement, no timeout, and no retry at either
//! end; if the slave misses a frame the next one overwrites it.
//!
//! ## Dual-target design
//!
//! On ESP-IDF: real SPI peripheral via hw_init helpers.
//! On host/test: the hw_init stubs are inert; tests exercise the link
//! contract through mock `FrameTx`/`FrameRx` adapters instead.

use crate::drivers::hw_init;
use crate::pins;

/// Master role: owns the select line and the outbound shift path.
pub struct SpiMasterLink {
    frames_sent: u32,
}

impl SpiMasterLink {
    pub fn new() -> Self {
        Self { frames_sent: 0 }
    }

    /// Send one frame.  Blocks until the byte has fully shifted out.
    pub fn send(&mut self, frame: u8) {
        hw_init::gpio_write(pins::SPI_CS_GPIO, false); // select slave
        hw_init::spi_master_transfer(frame);
        hw_init::gpio_write(pins::SPI_CS_GPIO, true); // deselect
        self.frames_sent = self.frames_sent.wrapping_add(1);
    }

    pub fn frames_sent(&self) -> u32 {
        self.frames_sent
    }
}

/// Slave role: blocking inbound shift path.
pub struct SpiSlaveLink {
    frames_received: u32,
}

impl SpiSlaveLink {
    pub fn new() -> Self {
        Self { frames_received: 0 }
    }

    /// Block until a frame arrives, then return it.
    pub fn receive(&mut self) -> u8 {
        let frame = hw_init::spi_slave_receive();
        self.frames_received = self.frames_received.wrapping_add(1);
        frame
    }

    pub fn frames_received(&self) -> u32 {
        self.frames_received
    }
}
