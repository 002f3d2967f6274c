//! ESP32 time adapter.
//!
//! Provides the monotonic uptime that drives all pump timing (cooldown,
//! dwell) as plain [`Duration`] values.
//!
//! - **`target_os = "espidf"`** — wraps `esp_timer_get_time()` from the
//!   ESP-IDF high-resolution timer (microsecond precision, monotonic).
//! - **`not(target_os = "espidf")`** — uses `std::time::Instant` for
//!   host-side testing and simulation.

use core::time::Duration;

/// Monotonic clock for the ESP32 platform.
pub struct MonotonicClock {
    #[cfg(not(target_os = "espidf"))]
    start: std::time::Instant,
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self {
            #[cfg(not(target_os = "espidf"))]
            start: std::time::Instant::now(),
        }
    }

    /// Uptime since boot (monotonic).
    #[cfg(target_os = "espidf")]
    pub fn uptime(&self) -> Duration {
        Duration::from_micros((unsafe { esp_idf_svc::sys::esp_timer_get_time() }) as u64)
    }

    /// Uptime since construction (monotonic).
    #[cfg(not(target_os = "espidf"))]
    pub fn uptime(&self) -> Duration {
        self.start.elapsed()
    }

    /// Seconds since boot (monotonic).
    pub fn uptime_secs(&self) -> u64 {
        self.uptime().as_secs()
    }
}
