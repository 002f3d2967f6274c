//! Sensor subsystem — individual drivers and the aggregating [`SensorHub`].
//!
//! The hub owns every sensor driver and produces a [`SensorSnapshot`] each
//! control tick.  A failed DHT transfer keeps the previous good temperature
//! and humidity — a flaky sensor must not crash the control loop.

pub mod dht;
pub mod light;
pub mod soil_moisture;

use log::warn;

use dht::DhtSensor;
use light::LightSensor;
use soil_moisture::SoilMoistureSensor;

/// A point-in-time snapshot of every sensor in the system.
///
/// Superseded by the next tick's snapshot; nothing is persisted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SensorSnapshot {
    /// Air temperature (integer °C, DHT11 resolution).
    pub temperature_c: i16,
    /// Relative humidity (integer %).
    pub humidity_pct: u8,
    /// Ambient light level, normalised to the 16-bit ADC range.
    pub light_raw: u16,
    /// Soil-moisture probe reading, normalised to the 16-bit ADC range.
    pub soil_moisture: u16,
}

/// Aggregates all sensor drivers and produces a unified snapshot.
pub struct SensorHub {
    dht: DhtSensor,
    light: LightSensor,
    soil: SoilMoistureSensor,
    /// Last good DHT reading, retained across failed transfers.
    last_temperature_c: i16,
    last_humidity_pct: u8,
}

impl SensorHub {
    pub fn new(dht: DhtSensor, light: LightSensor, soil: SoilMoistureSensor) -> Self {
        Self {
            dht,
            light,
            soil,
            last_temperature_c: 0,
            last_humidity_pct: 0,
        }
    }

    /// Read every sensor and return a unified snapshot.
    pub fn read_all(&mut self) -> SensorSnapshot {
        match self.dht.read() {
            Ok(reading) => {
                self.last_temperature_c = reading.temperature_c;
                self.last_humidity_pct = reading.humidity_pct;
            }
            Err(e) => {
                warn!("sensors: DHT read failed ({e}), keeping previous values");
            }
        }

        SensorSnapshot {
            temperature_c: self.last_temperature_c,
            humidity_pct: self.last_humidity_pct,
            light_raw: self.light.read(),
            soil_moisture: self.soil.read(),
        }
    }

    /// Fast soil-moisture-only read for paths that do not need a full snapshot.
    pub fn read_soil_moisture(&mut self) -> u16 {
        self.soil.read()
    }
}

#[cfg(all(test, not(target_os = "espidf")))]
mod tests {
    use super::*;
    use crate::pins;

    fn hub() -> SensorHub {
        SensorHub::new(
            DhtSensor::new(pins::DHT_GPIO),
            LightSensor::new(pins::ADC1_CH_LIGHT),
            SoilMoistureSensor::new(pins::ADC1_CH_SOIL),
        )
    }

    // Single test: the sim atomics are process-wide, so the injection and
    // retain-last-good checks must not run concurrently.
    #[test]
    fn snapshot_injection_and_dht_failure_retention() {
        let mut hub = hub();
        dht::sim_set_reading(21, 55);
        dht::sim_set_fail(false);
        light::sim_set_light_adc(1000);
        soil_moisture::sim_set_soil_adc(2000);

        let snap = hub.read_all();
        assert_eq!(snap.temperature_c, 21);
        assert_eq!(snap.humidity_pct, 55);
        assert_eq!(snap.light_raw, 1000 << 4);
        assert_eq!(snap.soil_moisture, 2000 << 4);

        dht::sim_set_fail(true);
        let second = hub.read_all();
        assert_eq!(second.temperature_c, 21, "previous temperature retained");
        assert_eq!(second.humidity_pct, 55, "previous humidity retained");
        dht::sim_set_fail(false);

        // Values past the 12-bit range clamp instead of aliasing low.
        light::sim_set_light_adc(5_000);
        soil_moisture::sim_set_soil_adc(u16::MAX);
        let clamped = hub.read_all();
        assert_eq!(clamped.light_raw, 0x0FFF << 4);
        assert_eq!(clamped.soil_moisture, 0x0FFF << 4);
        light::sim_set_light_adc(1000);
        soil_moisture::sim_set_soil_adc(2000);
    }
}
