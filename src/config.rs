//! System configuration parameters
//!
//! All tunable parameters for the growhouse controller.  Credentials and the
//! server endpoint are injected here rather than hardcoded in the control
//! logic; `main` seeds them from build-time environment variables.

use serde::{Deserialize, Serialize};

/// Core system configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemConfig {
    // --- Network ---
    /// Station-mode WiFi SSID.
    pub wifi_ssid: heapless::String<32>,
    /// Station-mode WiFi password (empty = open network).
    pub wifi_password: heapless::String<64>,
    /// Remote server host (IP or DNS name).
    pub server_host: heapless::String<64>,
    /// Remote server TCP port.
    pub server_port: u16,
    /// WiFi association timeout (seconds).
    pub wifi_connect_timeout_secs: u32,
    /// Per-request HTTP timeout (seconds).
    pub http_timeout_secs: u32,

    // --- Pump ---
    /// Minimum elapsed time between two pump activations (seconds).
    pub pump_cooldown_secs: u32,
    /// Duration the pump stays on once activated (seconds).
    pub pump_dwell_secs: u32,

    // --- Soil-moisture thresholds (16-bit ADC scale) ---
    /// Lower bound of the probe's calibrated range.
    pub moisture_min: u16,
    /// Upper bound of the probe's calibrated range.
    pub moisture_max: u16,
    /// Reading above which the report claims pump status OFF.
    pub moisture_activate_threshold: u16,
    /// Reading below which the pump is forced off unconditionally.
    pub moisture_deactivate_threshold: u16,

    // --- Timing ---
    /// Control loop interval (milliseconds).
    pub control_loop_interval_ms: u32,
    /// Server poll / report interval (seconds).
    pub poll_interval_secs: u32,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            // Network
            wifi_ssid: heapless::String::new(),
            wifi_password: heapless::String::new(),
            server_host: heapless::String::new(),
            server_port: 80,
            wifi_connect_timeout_secs: 30,
            http_timeout_secs: 10,

            // Pump
            pump_cooldown_secs: 600,
            pump_dwell_secs: 3,

            // Moisture calibration + thresholds
            moisture_min: 25_000,
            moisture_max: 56_000,
            moisture_activate_threshold: 46_700,
            moisture_deactivate_threshold: 28_000,

            // Timing
            control_loop_interval_ms: 1000, // 1 Hz
            poll_interval_secs: 120,        // report + fetch every 2 min
        }
    }
}

impl SystemConfig {
    /// Base URL for the remote API, e.g. `http://192.168.1.10:3000`.
    pub fn base_url(&self) -> String {
        format!("http://{}:{}", self.server_host, self.server_port)
    }
}
