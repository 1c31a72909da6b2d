//! ThermoLink slave node — entry point.
//!
//! Fully receive-driven: blocks on the SPI link, then decodes the frame
//! into cooler duty, LED, and heater writes.  No timer of its own — the
//! cadence is the master's transmission rate.

#![deny(unused_must_use)]

use anyhow::Result;
use log::info;

use thermolink::adapters::hardware::SlaveHardware;
use thermolink::adapters::log_sink::LogEventSink;
use thermolink::app::ports::FrameRx;
use thermolink::app::slave::SlaveController;
use thermolink::drivers::cooler::CoolerDriver;
use thermolink::drivers::outputs::{HeaterSwitch, IndicatorLed};
use thermolink::drivers::hw_init;
use thermolink::drivers::spi_link::SpiSlaveLink;

fn main() -> Result<()> {
    // ── 1. ESP-IDF bootstrap ──────────────────────────────────
    esp_idf_svc::sys::link_patches();
    esp_idf_logger::init()?;

    info!("ThermoLink slave v{}", env!("CARGO_PKG_VERSION"));

    // ── 2. Peripherals ────────────────────────────────────────
    if let Err(e) = hw_init::init_slave_peripherals() {
        // Peripheral init failure is critical — log and halt.
        log::error!("HAL init failed: {} — halting", e);
        #[allow(clippy::empty_loop)]
        loop {}
    }

    // ── 3. Adapters + controller ──────────────────────────────
    let mut hw = SlaveHardware::new(
        SpiSlaveLink::new(),
        CoolerDriver::new(),
        IndicatorLed::new(),
        HeaterSwitch::new(),
    );
    let mut sink = LogEventSink::new();
    let mut controller = SlaveController::new();

    info!("Slave ready. Waiting for frames.");

    // ── 4. Receive loop ───────────────────────────────────────
    loop {
        let frame = hw.receive_frame();
        controller.process_frame(frame, &mut hw, &mut sink);
    }
}
