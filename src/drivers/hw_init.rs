//! One-shot hardware peripheral initialization.
//!
//! Configures ADC channels, GPIO directions, the LEDC timer, and the SPI
//! peripheral using raw ESP-IDF sys calls.  Each node calls its own init
//! function once from `main()` before its loop starts; the per-call
//! helpers further down are the only register access points in the crate.

#[cfg(target_os = "espidf")]
use esp_idf_svc::sys::*;

#[cfg(target_os = "espidf")]
use log::info;

#[cfg(target_os = "espidf")]
use crate::pins;

// ── Error type ────────────────────────────────────────────────

/// Errors during one-shot peripheral initialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HwInitError {
    AdcInitFailed(i32),
    GpioConfigFailed(i32),
    LedcInitFailed,
    SpiInitFailed(i32),
}

impl core::fmt::Display for HwInitError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::AdcInitFailed(rc) => write!(f, "ADC1 init failed (rc={})", rc),
            Self::GpioConfigFailed(rc) => write!(f, "GPIO config failed (rc={})", rc),
            Self::LedcInitFailed => write!(f, "LEDC timer/channel config failed"),
            Self::SpiInitFailed(rc) => write!(f, "SPI init failed (rc={})", rc),
        }
    }
}

// ── Node init entry points ────────────────────────────────────

/// Master node: ADC (LM35 + gate A/B), LCD + chip-select GPIOs, SPI master.
#[cfg(target_os = "espidf")]
pub fn init_master_peripherals() -> Result<(), HwInitError> {
    // SAFETY: Called once from main() before the loop; single-threaded.
    unsafe {
        init_adc()?;
        init_gpio_outputs(&[
            pins::LCD_RS_GPIO,
            pins::LCD_EN_GPIO,
            pins::LCD_D4_GPIO,
            pins::LCD_D5_GPIO,
            pins::LCD_D6_GPIO,
            pins::LCD_D7_GPIO,
            pins::SPI_CS_GPIO,
        ])?;
        init_spi_master()?;
    }
    // Select line idles HIGH (deasserted) between frames.
    gpio_write(pins::SPI_CS_GPIO, true);
    info!("hw_init: master peripherals configured");
    Ok(())
}

#[cfg(not(target_os = "espidf"))]
pub fn init_master_peripherals() -> Result<(), HwInitError> {
    log::info!("hw_init(sim): master peripheral init skipped");
    Ok(())
}

/// Slave node: LED/heater GPIOs, cooler LEDC channel, SPI slave.
#[cfg(target_os = "espidf")]
pub fn init_slave_peripherals() -> Result<(), HwInitError> {
    // SAFETY: Called once from main() before the loop; single-threaded.
    unsafe {
        init_gpio_outputs(&[pins::LED_GPIO, pins::HEATER_GPIO])?;
        init_ledc();
        init_spi_slave()?;
    }
    info!("hw_init: slave peripherals configured");
    Ok(())
}

#[cfg(not(target_os = "espidf"))]
pub fn init_slave_peripherals() -> Result<(), HwInitError> {
    log::info!("hw_init(sim): slave peripheral init skipped");
    Ok(())
}

// ── ADC (oneshot) ─────────────────────────────────────────────

#[cfg(target_os = "espidf")]
static mut ADC1_HANDLE: adc_oneshot_unit_handle_t = core::ptr::null_mut();

/// SAFETY: Must be called only from the single-threaded init path or the
/// main-loop ADC read path.  No concurrent access is possible because
/// `init_adc()` completes before the loop starts.
#[cfg(target_os = "espidf")]
unsafe fn adc1_handle() -> adc_oneshot_unit_handle_t {
    unsafe { ADC1_HANDLE }
}

#[cfg(target_os = "espidf")]
unsafe fn init_adc() -> Result<(), HwInitError> {
    let init_cfg = adc_oneshot_unit_init_cfg_t {
        unit_id: adc_unit_t_ADC_UNIT_1,
        ulp_mode: adc_ulp_mode_t_ADC_ULP_MODE_DISABLE,
        ..Default::default()
    };
    // SAFETY: ADC1_HANDLE is only written here, once at boot.
    let ret = unsafe { adc_oneshot_new_unit(&init_cfg, &raw mut ADC1_HANDLE) };
    if ret != ESP_OK as i32 {
        return Err(HwInitError::AdcInitFailed(ret));
    }

    let chan_cfg = adc_oneshot_chan_cfg_t {
        atten: adc_atten_t_ADC_ATTEN_DB_12,
        bitwidth: adc_bitwidth_t_ADC_BITWIDTH_12,
    };

    for channel in [pins::TEMP_ADC_CH, pins::GATE_A_ADC_CH, pins::GATE_B_ADC_CH] {
        let ret = unsafe { adc_oneshot_config_channel(adc1_handle(), channel, &chan_cfg) };
        if ret != ESP_OK as i32 {
            return Err(HwInitError::AdcInitFailed(ret));
        }
    }

    info!("hw_init: ADC1 configured (temp + gate A/B)");
    Ok(())
}

/// Blocking one-shot conversion.  Returns only once the sample completes;
/// there is no timeout on the conversion by contract.
#[cfg(target_os = "espidf")]
pub fn adc1_read(channel: u32) -> u16 {
    let mut raw: i32 = 0;
    // SAFETY: adc1_handle() contract — single-threaded main-loop access only.
    let ret = unsafe { adc_oneshot_read(adc1_handle(), channel, &mut raw) };
    if ret != ESP_OK as i32 {
        return 0;
    }
    raw.max(0) as u16
}

#[cfg(not(target_os = "espidf"))]
pub fn adc1_read(_channel: u32) -> u16 {
    0
}

// ── GPIO outputs ──────────────────────────────────────────────

#[cfg(target_os = "espidf")]
unsafe fn init_gpio_outputs(output_pins: &[i32]) -> Result<(), HwInitError> {
    for &pin in output_pins {
        let cfg = gpio_config_t {
            pin_bit_mask: 1u64 << pin,
            mode: gpio_mode_t_GPIO_MODE_OUTPUT,
            pull_up_en: gpio_pullup_t_GPIO_PULLUP_DISABLE,
            pull_down_en: gpio_pulldown_t_GPIO_PULLDOWN_DISABLE,
            intr_type: gpio_int_type_t_GPIO_INTR_DISABLE,
        };
        let ret = unsafe { gpio_config(&cfg) };
        if ret != ESP_OK as i32 {
            return Err(HwInitError::GpioConfigFailed(ret));
        }
        unsafe { gpio_set_level(pin, 0) };
    }

    info!("hw_init: GPIO outputs configured");
    Ok(())
}

#[cfg(target_os = "espidf")]
pub fn gpio_write(pin: i32, high: bool) {
    // SAFETY: gpio_set_level writes to an already-configured output pin;
    // pin was validated during init_gpio_outputs(). Main-loop only.
    unsafe {
        gpio_set_level(pin, if high { 1 } else { 0 });
    }
}

#[cfg(not(target_os = "espidf"))]
pub fn gpio_write(_pin: i32, _high: bool) {}

// ── Busy delay ────────────────────────────────────────────────

/// Short busy-wait, used by the LCD driver for enable-pulse timing.
#[cfg(target_os = "espidf")]
pub fn delay_us(us: u32) {
    // SAFETY: ets_delay_us is a calibrated spin loop with no side effects.
    unsafe { ets_delay_us(us) };
}

#[cfg(not(target_os = "espidf"))]
pub fn delay_us(_us: u32) {}

// ── LEDC PWM (slave cooler) ───────────────────────────────────

pub const LEDC_CH_COOLER: u32 = 0;

#[cfg(target_os = "espidf")]
unsafe fn init_ledc() {
    // Timer 0: cooling fan (25 kHz, 8-bit)
    // SAFETY: Called from single main-task context via init_slave_peripherals().
    let timer0 = ledc_timer_config_t {
        speed_mode: ledc_mode_t_LEDC_LOW_SPEED_MODE,
        timer_num: ledc_timer_t_LEDC_TIMER_0,
        duty_resolution: ledc_timer_bit_t_LEDC_TIMER_8_BIT,
        freq_hz: pins::COOLER_PWM_FREQ_HZ,
        clk_cfg: soc_periph_ledc_clk_src_legacy_t_LEDC_AUTO_CLK,
        ..Default::default()
    };
    unsafe {
        ledc_timer_config(&timer0);
    }

    unsafe {
        ledc_channel_config(&ledc_channel_config_t {
            speed_mode: ledc_mode_t_LEDC_LOW_SPEED_MODE,
            channel: ledc_channel_t_LEDC_CHANNEL_0,
            timer_sel: ledc_timer_t_LEDC_TIMER_0,
            gpio_num: pins::COOLER_PWM_GPIO,
            duty: 0,
            hpoint: 0,
            ..Default::default()
        });
    }

    info!("hw_init: LEDC configured (cooler=CH0)");
}

#[cfg(target_os = "espidf")]
pub fn ledc_set(channel: u32, duty: u8) {
    // SAFETY: LEDC channel was configured in init_ledc(); duty register
    // writes are race-free since only the slave loop calls this function.
    unsafe {
        esp_idf_svc::sys::ledc_set_duty(ledc_mode_t_LEDC_LOW_SPEED_MODE, channel, duty as u32);
        esp_idf_svc::sys::ledc_update_duty(ledc_mode_t_LEDC_LOW_SPEED_MODE, channel);
    }
}

#[cfg(not(target_os = "espidf"))]
pub fn ledc_set(_channel: u32, _duty: u8) {}

// ── SPI transfer link ─────────────────────────────────────────
//
// One byte per frame, mode 0, MSB first, 62.5 kHz.  The master manages
// the select line itself (spics_io_num = -1) so the assert → shift →
// wait → deassert framing stays visible in the link driver.

#[cfg(target_os = "espidf")]
static mut SPI_DEVICE: spi_device_handle_t = core::ptr::null_mut();

/// SAFETY: written once by init_spi_master() before the loop starts;
/// read only from the single-threaded master loop afterwards.
#[cfg(target_os = "espidf")]
unsafe fn spi_device() -> spi_device_handle_t {
    unsafe { SPI_DEVICE }
}

#[cfg(target_os = "espidf")]
unsafe fn spi_bus_layout() -> spi_bus_config_t {
    let mut bus = spi_bus_config_t {
        sclk_io_num: pins::SPI_SCLK_GPIO,
        max_transfer_sz: 4,
        ..Default::default()
    };
    bus.__bindgen_anon_1.mosi_io_num = pins::SPI_MOSI_GPIO;
    bus.__bindgen_anon_2.miso_io_num = pins::SPI_MISO_GPIO;
    bus.__bindgen_anon_3.quadwp_io_num = -1;
    bus.__bindgen_anon_4.quadhd_io_num = -1;
    bus
}

#[cfg(target_os = "espidf")]
unsafe fn init_spi_master() -> Result<(), HwInitError> {
    let bus = unsafe { spi_bus_layout() };
    let ret = unsafe {
        spi_bus_initialize(
            spi_host_device_t_SPI2_HOST,
            &bus,
            spi_common_dma_t_SPI_DMA_DISABLED,
        )
    };
    if ret != ESP_OK as i32 {
        return Err(HwInitError::SpiInitFailed(ret));
    }

    let dev_cfg = spi_device_interface_config_t {
        mode: 0, // CPOL=0, CPHA=0
        clock_speed_hz: pins::SPI_CLOCK_HZ,
        spics_io_num: -1, // select driven manually via gpio_write
        queue_size: 1,
        ..Default::default()
    };
    // SAFETY: SPI_DEVICE is only written here, once at boot.
    let ret = unsafe {
        spi_bus_add_device(spi_host_device_t_SPI2_HOST, &dev_cfg, &raw mut SPI_DEVICE)
    };
    if ret != ESP_OK as i32 {
        return Err(HwInitError::SpiInitFailed(ret));
    }

    info!("hw_init: SPI master configured ({} Hz)", pins::SPI_CLOCK_HZ);
    Ok(())
}

/// Shift one byte out, blocking until the transfer completes.
///
/// The polling-transmit call spins on the transfer-complete flag with no
/// timeout — matching the link contract that a wedged transfer hangs the
/// node rather than being silently dropped.
#[cfg(target_os = "espidf")]
pub fn spi_master_transfer(frame: u8) {
    let mut trans = spi_transaction_t {
        length: 8, // bits
        ..Default::default()
    };
    trans.__bindgen_anon_1.tx_buffer = &frame as *const u8 as *const core::ffi::c_void;

    // SAFETY: spi_device() contract — single-threaded master-loop access;
    // `frame` outlives the synchronous polling call.
    unsafe {
        spi_device_polling_transmit(spi_device(), &mut trans);
    }
}

#[cfg(not(target_os = "espidf"))]
pub fn spi_master_transfer(_frame: u8) {}

#[cfg(target_os = "espidf")]
unsafe fn init_spi_slave() -> Result<(), HwInitError> {
    let bus = unsafe { spi_bus_layout() };
    let slave_cfg = spi_slave_interface_config_t {
        mode: 0,
        spics_io_num: pins::SPI_CS_GPIO,
        queue_size: 1,
        ..Default::default()
    };
    let ret = unsafe {
        spi_slave_initialize(
            spi_host_device_t_SPI2_HOST,
            &bus,
            &slave_cfg,
            spi_common_dma_t_SPI_DMA_DISABLED,
        )
    };
    if ret != ESP_OK as i32 {
        return Err(HwInitError::SpiInitFailed(ret));
    }

    info!("hw_init: SPI slave configured");
    Ok(())
}

/// Block until the master clocks a byte in, then return it.
///
/// Waits forever (`portMAX_DELAY`) — the slave loop has no cadence of its
/// own and simply parks here between frames.
#[cfg(target_os = "espidf")]
pub fn spi_slave_receive() -> u8 {
    let mut rx: u8 = 0;
    // Shift register primed with zero; the master ignores MISO anyway.
    let tx: u8 = 0x00;
    let mut trans = spi_slave_transaction_t {
        length: 8, // bits
        tx_buffer: &tx as *const u8 as *const core::ffi::c_void,
        rx_buffer: (&raw mut rx).cast(),
        ..Default::default()
    };

    // SAFETY: single-threaded slave-loop access; rx/tx outlive the
    // synchronous call, which returns only after a full byte arrived.
    unsafe {
        spi_slave_transmit(spi_host_device_t_SPI2_HOST, &mut trans, portMAX_DELAY);
    }
    rx
}

#[cfg(not(target_os = "espidf"))]
pub fn spi_slave_receive() -> u8 {
    0
}
