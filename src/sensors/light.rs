//! LDR ambient-light sensor — analog voltage via resistive divider.
//!
//! Readings are left-shifted to the 16-bit range so thresholds and reports
//! stay on one scale regardless of the ADC's native resolution.
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
static SIM_LIGHT_ADC: AtomicU16 = AtomicU16::new(2048);

#[cfg(not(target_os = "espidf"))]
pub fn sim_set_light_adc(raw: u16) {
    SIM_LIGHT_ADC.store(raw, Ordering::Relaxed);
}

pub struct LightSensor {
    adc_channel: u32,
}

impl LightSensor {
    pub fn new(adc_channel: u32) -> Self {
        Self { adc_channel }
    }

    /// Light level normalised to 0–65535.
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
        SIM_LIGHT_ADC.load(Ordering::Relaxed)
    }
}
