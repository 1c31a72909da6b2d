//! LM35 analog temperature sensor (10 mV per °C, linear).
//!
//! Read via the ESP32-S3 ADC in blocking one-shot mode — the conversion
//! API returns only once the sample is complete, which is the "busy-wait
//! until conversion-complete" contract of the sampling loop.  One raw
//! count is V_REF/ADC_MAX volts, so degrees are `raw / counts-per-degree`
//! with no clamping: readings that land outside the nominal 0–100 °C
//! window pass through and the master controller decides how to show them.
//!
//! ## Dual-target design
//!
//! On ESP-IDF: reads ADC1 via the oneshot API (initialised by hw_init).
//! On host/test: reads from a static AtomicU16 for injection.

#[cfg(not(target_os = "espidf"))]
use core::sync::atomic::{AtomicU16, Ordering};

#[cfg(target_os = "espidf")]
use crate::drivers::hw_init;

#[cfg(not(target_os = "espidf"))]
static SIM_TEMP_ADC: AtomicU16 = AtomicU16::new(0);

#[cfg(not(target_os = "espidf"))]
pub fn sim_set_temp_adc(raw: u16) {
    SIM_TEMP_ADC.store(raw, Ordering::Relaxed);
}

const ADC_MAX: f32 = 4095.0;
const V_REF: f32 = 3.3;
/// LM35 slope: 10 mV per degree Celsius.
const VOLTS_PER_DEG: f32 = 0.010;
/// Raw ADC counts per degree: 0.010 / (3.3 / 4095) ≈ 12.41.
const COUNTS_PER_DEG: f32 = VOLTS_PER_DEG / (V_REF / ADC_MAX);

pub struct Lm35Sensor {
    channel: u32,
}

impl Lm35Sensor {
    pub fn new(channel: u32) -> Self {
        Self { channel }
    }

    /// Blocking conversion, result in whole degrees Celsius.
    pub fn read(&self) -> u8 {
        let raw = self.read_adc();
        (raw as f32 / COUNTS_PER_DEG) as u8
    }

    #[cfg(target_os = "espidf")]
    fn read_adc(&self) -> u16 {
        hw_init::adc1_read(self.channel)
    }

    #[cfg(not(target_os = "espidf"))]
    fn read_adc(&self) -> u16 {
        let _ = self.channel;
        SIM_TEMP_ADC.load(Ordering::Relaxed)
    }
}
