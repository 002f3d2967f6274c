//! Capacitive soil-moisture probe — analog voltage output.
//!
//! The probe reads *lower* as the soil gets wetter; the calibrated range
//! and both pump thresholds live in [`SystemConfig`](crate::config).
//! Like the light sensor, raw 12-bit samples are normalised to 16 bits.
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
static SIM_SOIL_ADC: AtomicU16 = AtomicU16::new(2048);

#[cfg(not(target_os = "espidf"))]
pub fn sim_set_soil_adc(raw: u16) {
    SIM_SOIL_ADC.store(raw, Ordering::Relaxed);
}

pub struct SoilMoistureSensor {
    adc_channel: u32,
}

impl SoilMoistureSensor {
    pub fn new(adc_channel: u32) -> Self {
        Self { adc_channel }
    }

    /// Moisture reading normalised to 0–65535.
    pub fn read(&mut self) -> u16 {
        // Clamp to the ADC's 12-bit range so an out-of-range injected value
        // cannot alias into a small reading when shifted.
        self.read_adc().min(0x0FFF) << 4
    }

    #[cfg(target_os = "espidf")]
    fn read_adc(&self) -> u16 {
        hw_init::adc1_read(self.adc_channel)
    }

    #[cfg(not(target_os = "espidf"))]
    fn read_adc(&self) -> u16 {
        let _ = self.adc_channel;
        SIM_SOIL_ADC.load(Ordering::Relaxed)
    }
}
