//! Growhouse Monitor — Main Entry Point
//!
//! Hexagonal architecture on a single-threaded control loop.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                   Adapters (outer ring)                  │
//! │                                                          │
//! │  HardwareAdapter    LogEventSink    MonotonicClock       │
//! │  (Sensor+Actuator)  (EventSink)     (uptime)             │
//! │  WifiAdapter        HttpRemote                           │
//! │  (STA link)         (RemotePort)                         │
//! │                                                          │
//! │  ────────────── Port Trait Boundary ──────────────       │
//! │                                                          │
//! │  ┌────────────────────────────────────────────────┐      │
//! │  │           AppService (pure logic)              │      │
//! │  │  moisture rule · pump gate · sync protocol     │      │
//! │  └────────────────────────────────────────────────┘      │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! The loop ticks once per second: every tick samples sensors and runs the
//! pump rules; every poll interval (while WiFi is up) a sync round reports
//! to the server and applies its control commands.  A failed report retries
//! on the very next tick instead of waiting out the interval.
#![deny(unused_must_use)]

use core::time::Duration;

use anyhow::{anyhow, Context, Result};
use log::{debug, info, warn};

use growhouse::adapters::hardware::HardwareAdapter;
use growhouse::adapters::http::HttpRemote;
use growhouse::adapters::log_sink::LogEventSink;
use growhouse::adapters::time::MonotonicClock;
use growhouse::adapters::wifi::WifiAdapter;
use growhouse::app::service::{AppService, SyncCadence, SyncOutcome};
use growhouse::config::SystemConfig;
use growhouse::drivers::hw_init;
use growhouse::drivers::relay::RelayDriver;
use growhouse::drivers::status_led::StatusLed;
use growhouse::pins;
use growhouse::sensors::{dht::DhtSensor, light::LightSensor, soil_moisture::SoilMoistureSensor, SensorHub};

// Build-time configuration; see README for the expected variables.
const WIFI_SSID: &str = env!("WIFI_SSID");
const WIFI_PASSWORD: &str = env!("WIFI_PASSWORD");
const SERVER_HOST: &str = env!("SERVER_HOST");
const SERVER_PORT: Option<&str> = option_env!("SERVER_PORT");

fn load_config() -> Result<SystemConfig> {
    let mut config = SystemConfig::default();
    config
        .wifi_ssid
        .push_str(WIFI_SSID)
        .map_err(|_| anyhow!("WIFI_SSID exceeds 32 bytes"))?;
    config
        .wifi_password
        .push_str(WIFI_PASSWORD)
        .map_err(|_| anyhow!("WIFI_PASSWORD exceeds 64 bytes"))?;
    config
        .server_host
        .push_str(SERVER_HOST)
        .map_err(|_| anyhow!("SERVER_HOST exceeds 64 bytes"))?;
    if let Some(port) = SERVER_PORT {
        config.server_port = port.parse().context("SERVER_PORT is not a valid port")?;
    }
    Ok(config)
}

fn main() -> Result<()> {
    // ── 1. ESP-IDF bootstrap ──────────────────────────────────
    esp_idf_svc::sys::link_patches();
    esp_idf_logger::init()?;

    info!("╔══════════════════════════════════════╗");
    info!("║  Growhouse Monitor v{}             ║", env!("CARGO_PKG_VERSION"));
    info!("╚══════════════════════════════════════╝");

    let config = load_config()?;

    // ── 2. Initialise hardware peripherals ────────────────────
    if let Err(e) = hw_init::init_peripherals() {
        // Peripheral init failure is critical — log and halt.
        log::error!("HAL init failed: {e} — halting");
        #[allow(clippy::empty_loop)]
        loop {}
    }

    // ── 3. Construct adapters ─────────────────────────────────
    let sensor_hub = SensorHub::new(
        DhtSensor::new(pins::DHT_GPIO),
        LightSensor::new(pins::ADC1_CH_LIGHT),
        SoilMoistureSensor::new(pins::ADC1_CH_SOIL),
    );
    let mut hw = HardwareAdapter::new(sensor_hub, RelayDriver::new(), StatusLed::new());
    hw.all_off();

    let mut log_sink = LogEventSink::new();
    let clock = MonotonicClock::new();
    let mut remote = HttpRemote::new(
        config.base_url(),
        Duration::from_secs(config.http_timeout_secs as u64),
    );

    // ── 4. WiFi station ───────────────────────────────────────
    let peripherals = esp_idf_svc::hal::peripherals::Peripherals::take()?;
    let sysloop = esp_idf_svc::eventloop::EspSystemEventLoop::take()?;
    let nvs = esp_idf_svc::nvs::EspDefaultNvsPartition::take()?;
    let esp_wifi = esp_idf_svc::wifi::EspWifi::new(peripherals.modem, sysloop, Some(nvs))?;

    let mut wifi = WifiAdapter::new(Duration::from_secs(config.wifi_connect_timeout_secs as u64));
    wifi.attach_driver(esp_wifi);
    wifi.set_credentials(config.wifi_ssid.as_str(), config.wifi_password.as_str())
        .map_err(|e| anyhow!("WiFi credentials rejected: {e}"))?;
    if let Err(e) = wifi.connect() {
        // Not fatal: poll() keeps retrying with backoff while the control
        // loop runs offline.
        warn!("WiFi: initial connect failed ({e}), retrying in background");
    }

    // ── 5. Application service ────────────────────────────────
    let mut app = AppService::new(config.clone());
    app.start(&mut log_sink);

    info!("System ready. Entering control loop.");

    // ── 6. Control loop ───────────────────────────────────────
    let tick_ms = config.control_loop_interval_ms as u64;
    // Starts due: the first report goes out on the first iteration.
    let mut cadence = SyncCadence::new(&config);

    loop {
        std::thread::sleep(Duration::from_millis(tick_ms));
        let now = clock.uptime();

        app.tick(now, &mut hw, &mut log_sink);
        wifi.poll();

        if cadence.advance() {
            if wifi.is_connected() {
                match app.sync(now, &mut hw, &mut remote, &mut log_sink) {
                    SyncOutcome::Completed => cadence.completed(),
                    // Cadence stays due: retry on the next tick.
                    SyncOutcome::PostFailed => {}
                }
            } else {
                debug!("sync deferred: WiFi down");
            }
        }
    }
}
