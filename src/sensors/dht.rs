//! DHT11 temperature/humidity sensor (single-wire protocol).
//!
//! The DHT11 answers a >18 ms low start pulse with a 40-bit frame:
//! humidity (int + frac), temperature (int + frac), checksum.  Bits are
//! encoded in the length of the data line's high phase (~28 µs = 0,
//! ~70 µs = 1).  Integer parts only — the DHT11 fractional bytes are
//! always zero.
//!
//! ## Dual-target design
//!
//! On ESP-IDF: bit-bangs the data GPIO with busy-wait timing.
//! On host/test: reads from static atomics for injection.

#[cfg(not(target_os = "espidf"))]
use core::sync::atomic::{AtomicBool, AtomicU16, Ordering};

use crate::error::SensorError;

// Sim injection state (host targets). Packed (temp, humidity) plus a
// failure flag so tests can exercise the hub's retain-last-good path.
#[cfg(not(target_os = "espidf"))]
static SIM_TEMP_C: AtomicU16 = AtomicU16::new(20);
#[cfg(not(target_os = "espidf"))]
static SIM_HUMIDITY: AtomicU16 = AtomicU16::new(50);
#[cfg(not(target_os = "espidf"))]
static SIM_FAIL: AtomicBool = AtomicBool::new(false);

#[cfg(not(target_os = "espidf"))]
pub fn sim_set_reading(temperature_c: i16, humidity_pct: u8) {
    SIM_TEMP_C.store(temperature_c as u16, Ordering::Relaxed);
    SIM_HUMIDITY.store(humidity_pct as u16, Ordering::Relaxed);
}

#[cfg(not(target_os = "espidf"))]
pub fn sim_set_fail(fail: bool) {
    SIM_FAIL.store(fail, Ordering::Relaxed);
}

#[derive(Debug, Clone, Copy)]
pub struct DhtReading {
    pub temperature_c: i16,
    pub humidity_pct: u8,
}

pub struct DhtSensor {
    gpio: i32,
}

impl DhtSensor {
    pub fn new(gpio: i32) -> Self {
        Self { gpio }
    }

    /// One full sensor transaction.  The DHT11 needs >1 s between reads;
    /// the 1 Hz control loop satisfies that naturally.
    pub fn read(&mut self) -> Result<DhtReading, SensorError> {
        let frame = self.read_frame()?;

        let sum = frame[0]
            .wrapping_add(frame[1])
            .wrapping_add(frame[2])
            .wrapping_add(frame[3]);
        if sum != frame[4] {
            return Err(SensorError::DhtChecksum);
        }

        let humidity = frame[0];
        let temperature = frame[2] as i16;
        if humidity > 100 {
            return Err(SensorError::OutOfRange);
        }
        Ok(DhtReading {
            temperature_c: temperature,
            humidity_pct: humidity,
        })
    }

    #[cfg(target_os = "espidf")]
    fn read_frame(&mut self) -> Result<[u8; 5], SensorError> {
        use esp_idf_svc::sys::{
            esp_rom_delay_us, gpio_get_level, gpio_mode_t_GPIO_MODE_INPUT,
            gpio_mode_t_GPIO_MODE_OUTPUT, gpio_set_direction, gpio_set_level,
        };

        // SAFETY: raw register access on a pin this driver owns; the control
        // loop is single-threaded so no concurrent access is possible.
        unsafe {
            // Start signal: hold low >18 ms, release, switch to input.
            gpio_set_direction(self.gpio, gpio_mode_t_GPIO_MODE_OUTPUT);
            gpio_set_level(self.gpio, 0);
            esp_rom_delay_us(20_000);
            gpio_set_level(self.gpio, 1);
            esp_rom_delay_us(30);
            gpio_set_direction(self.gpio, gpio_mode_t_GPIO_MODE_INPUT);
        }

        // Sensor response: ~80 µs low then ~80 µs high.
        self.wait_for_level(false, 90)?;
        self.wait_for_level(true, 90)?;
        self.wait_for_level(false, 90)?;

        let mut frame = [0u8; 5];
        for bit in 0..40 {
            // Each bit: ~50 µs low preamble, then a high phase whose
            // length encodes the value.
            self.wait_for_level(true, 70)?;
            let high_us = self.measure_level(true, 100)?;
            if high_us > 45 {
                frame[bit / 8] |= 1 << (7 - (bit % 8));
            }
        }

        // SAFETY: same single-threaded pin ownership as above.
        let _ = unsafe { gpio_get_level(self.gpio) };
        Ok(frame)
    }

    /// Busy-wait until the line reaches `level`, bailing after `timeout_us`.
    #[cfg(target_os = "espidf")]
    fn wait_for_level(&self, level: bool, timeout_us: u32) -> Result<(), SensorError> {
        self.measure_level(!level, timeout_us).map(|_| ())
    }

    /// Busy-wait while the line stays at `level`; returns the dwell in µs.
    #[cfg(target_os = "espidf")]
    fn measure_level(&self, level: bool, timeout_us: u32) -> Result<u32, SensorError> {
        use esp_idf_svc::sys::{esp_timer_get_time, gpio_get_level};

        let start = unsafe { esp_timer_get_time() };
        loop {
            // SAFETY: read-only register access, see read_frame.
            let current = unsafe { gpio_get_level(self.gpio) } != 0;
            let elapsed = (unsafe { esp_timer_get_time() } - start) as u32;
            if current != level {
                return Ok(elapsed);
            }
            if elapsed > timeout_us {
                return Err(SensorError::DhtTimeout);
            }
        }
    }

    #[cfg(not(target_os = "espidf"))]
    fn read_frame(&mut self) -> Result<[u8; 5], SensorError> {
        if SIM_FAIL.load(Ordering::Relaxed) {
            return Err(SensorError::DhtTimeout);
        }
        let humidity = SIM_HUMIDITY.load(Ordering::Relaxed) as u8;
        let temperature = SIM_TEMP_C.load(Ordering::Relaxed) as u8;
        let checksum = humidity.wrapping_add(temperature);
        Ok([humidity, 0, temperature, 0, checksum])
    }
}
