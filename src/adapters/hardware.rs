//! Hardware adapter — bridges real peripherals to domain port traits.
//!
//! Owns the [`SensorHub`] and both actuator drivers, exposing them
//! through [`SensorPort`] and [`ActuatorPort`].  This is the only
//! module in the system that touches actual hardware.  On non-espidf
//! targets, the underlying drivers use cfg-gated simulation stubs.

use crate::app::ports::{ActuatorPort, SensorPort};
use crate::drivers::relay::RelayDriver;
use crate::drivers::status_led::StatusLed;
use crate::sensors::{SensorHub, SensorSnapshot};

/// Concrete adapter that combines all hardware behind port traits.
pub struct HardwareAdapter {
    sensor_hub: SensorHub,
    relay: RelayDriver,
    led: StatusLed,
}

impl HardwareAdapter {
    pub fn new(sensor_hub: SensorHub, relay: RelayDriver, led: StatusLed) -> Self {
        Self {
            sensor_hub,
            relay,
            led,
        }
    }
}

// ── SensorPort implementation ─────────────────────────────────

impl SensorPort for HardwareAdapter {
    fn read_all(&mut self) -> SensorSnapshot {
        self.sensor_hub.read_all()
    }

    fn read_soil_moisture(&mut self) -> u16 {
        self.sensor_hub.read_soil_moisture()
    }
}

// ── ActuatorPort implementation ───────────────────────────────

impl ActuatorPort for HardwareAdapter {
    fn set_relay(&mut self, on: bool) {
        self.relay.set(on);
    }

    fn set_led(&mut self, red: bool, green: bool, blue: bool) {
        self.led.set_colour(red, green, blue);
    }

    fn all_off(&mut self) {
        self.relay.off();
        self.led.off();
    }
}
