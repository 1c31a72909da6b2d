//! ThermoLink master node — entry point.
//!
//! Sense → gate → transfer → display, one pass every sample interval:
//!
//! ```text
//! ┌──────────────────────────────────────────────────────┐
//! │                 MasterHardware (adapter)             │
//! │  ComparatorGate  Lm35Sensor  SpiMasterLink  LCD      │
//! │  ────────────── Port Trait Boundary ──────────────   │
//! │  ┌────────────────────────────────────────────────┐  │
//! │  │        MasterController (pure logic)           │  │
//! │  └────────────────────────────────────────────────┘  │
//! └──────────────────────────────────────────────────────┘
//! ```

#![deny(unused_must_use)]

use std::thread;
use std::time::Duration;

use anyhow::Result;
use log::info;

use thermolink::adapters::hardware::MasterHardware;
use thermolink::adapters::log_sink::LogEventSink;
use thermolink::app::master::MasterController;
use thermolink::config::MasterConfig;
use thermolink::drivers::lcd::LcdDisplay;
use thermolink::drivers::spi_link::SpiMasterLink;
use thermolink::drivers::hw_init;
use thermolink::pins;
use thermolink::sensors::gate::ComparatorGate;
use thermolink::sensors::temperature::Lm35Sensor;

fn main() -> Result<()> {
    // ── 1. ESP-IDF bootstrap ──────────────────────────────────
    esp_idf_svc::sys::link_patches();
    esp_idf_logger::init()?;

    info!("ThermoLink master v{}", env!("CARGO_PKG_VERSION"));

    // ── 2. Peripherals ────────────────────────────────────────
    if let Err(e) = hw_init::init_master_peripherals() {
        // Peripheral init failure is critical — log and halt.
        log::error!("HAL init failed: {} — halting", e);
        #[allow(clippy::empty_loop)]
        loop {}
    }

    let config = MasterConfig::default();

    let mut lcd = LcdDisplay::new();
    lcd.init();

    // ── 3. Adapters + controller ──────────────────────────────
    let mut hw = MasterHardware::new(
        ComparatorGate::new(pins::GATE_A_ADC_CH, pins::GATE_B_ADC_CH),
        Lm35Sensor::new(pins::TEMP_ADC_CH),
        SpiMasterLink::new(),
        lcd,
    );
    let mut sink = LogEventSink::new();
    let mut controller = MasterController::new();

    // Let the LCD settle before the first write lands.
    thread::sleep(Duration::from_millis(config.splash_delay_ms as u64));

    info!("Master ready. Entering sampling loop.");

    // ── 4. Sampling loop ──────────────────────────────────────
    loop {
        controller.run_cycle(&mut hw, &mut sink);
        thread::sleep(Duration::from_millis(config.sample_interval_ms as u64));
    }
}
