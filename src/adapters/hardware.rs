//! Hardware adapters — bridge real peripherals to the domain port traits.
//!
//! One adapter per node.  These are the only structs in the system that
//! combine hardware drivers behind port traits; on non-espidf targets the
//! underlying drivers use cfg-gated simulation stubs.

use crate::app::ports::{ActuatorPort, DisplayPort, FrameRx, FrameTx, SensorPort};
use crate::drivers::cooler::CoolerDriver;
use crate::drivers::lcd::LcdDisplay;
use crate::drivers::outputs::{HeaterSwitch, IndicatorLed};
use crate::drivers::spi_link::{SpiMasterLink, SpiSlaveLink};
use crate::sensors::gate::ComparatorGate;
use crate::sensors::temperature::Lm35Sensor;

// ── Master node ───────────────────────────────────────────────

/// Combines the master node's peripherals behind the sensing, link-send,
/// and display ports.
pub struct MasterHardware {
    gate: ComparatorGate,
    temperature: Lm35Sensor,
    link: SpiMasterLink,
    lcd: LcdDisplay,
}

impl MasterHardware {
    pub fn new(
        gate: ComparatorGate,
        temperature: Lm35Sensor,
        link: SpiMasterLink,
        lcd: LcdDisplay,
    ) -> Self {
        Self {
            gate,
            temperature,
            link,
            lcd,
        }
    }
}

impl SensorPort for MasterHardware {
    fn gate_active(&mut self) -> bool {
        self.gate.is_active()
    }

    fn read_temperature(&mut self) -> u8 {
        self.temperature.read()
    }
}

impl FrameTx for MasterHardware {
    fn send_frame(&mut self, frame: u8) {
        self.link.send(frame);
    }
}

impl DisplayPort for MasterHardware {
    fn clear(&mut self) {
        self.lcd.clear();
    }

    fn write(&mut self, text: &str) {
        self.lcd.write_str(text);
    }
}

// ── Slave node ────────────────────────────────────────────────

/// Combines the slave node's peripherals behind the link-receive and
/// actuator ports.
pub struct SlaveHardware {
    link: SpiSlaveLink,
    cooler: CoolerDriver,
    led: IndicatorLed,
    heater: HeaterSwitch,
}

impl SlaveHardware {
    pub fn new(
        link: SpiSlaveLink,
        cooler: CoolerDriver,
        led: IndicatorLed,
        heater: HeaterSwitch,
    ) -> Self {
        Self {
            link,
            cooler,
            led,
            heater,
        }
    }
}

impl FrameRx for SlaveHardware {
    fn receive_frame(&mut self) -> u8 {
        self.link.receive()
    }
}

impl ActuatorPort for SlaveHardware {
    fn set_cooler_register(&mut self, register: u8) {
        self.cooler.set_register(register);
    }

    fn set_led(&mut self, on: bool) {
        self.led.set(on);
    }

    fn set_heater(&mut self, on: bool) {
        self.heater.set(on);
    }
}
