//! Port traits — the hexagonal boundary between domain logic and the outside world.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ AppService (domain)
//! ```
//!
//! Driven adapters (sensors, actuators, the HTTP client, event sinks)
//! implement these traits.  The [`AppService`](super::service::AppService)
//! consumes them via generics, so the domain core never touches hardware
//! or sockets directly.

use crate::error::CommsError;
use crate::protocol::{LedCommand, PumpCommand, SensorReport};
use crate::sensors::SensorSnapshot;

// ───────────────────────────────────────────────────────────────
// Sensor port (driven adapter: hardware → domain)
// ───────────────────────────────────────────────────────────────

/// Read-side port: the domain calls this to obtain sensor data.
pub trait SensorPort {
    /// Read every sensor and return a unified snapshot.
    fn read_all(&mut self) -> SensorSnapshot;

    /// Soil-moisture-only read for paths that need just the probe value.
    fn read_soil_moisture(&mut self) -> u16;
}

// ───────────────────────────────────────────────────────────────
// Actuator port (driven adapter: domain → hardware)
// ───────────────────────────────────────────────────────────────

/// Write-side port: the domain calls this to command actuators.
pub trait ActuatorPort {
    /// Drive the pump relay (true = energised).
    fn set_relay(&mut self, on: bool);

    /// Set the RGB status light, one boolean per channel.
    fn set_led(&mut self, red: bool, green: bool, blue: bool);

    /// Kill all actuators (relay, LED) — safe shutdown.
    fn all_off(&mut self);
}

// ───────────────────────────────────────────────────────────────
// Remote port (driven adapter: domain ↔ HTTP server)
// ───────────────────────────────────────────────────────────────

/// The remote-server boundary.  One method per endpoint.
///
/// `Ok(None)` from a fetch means the server answered with a non-200 status
/// — the device ignores it, exactly like a transport failure, but the
/// distinction keeps the adapter honest about what happened.
pub trait RemotePort {
    /// `POST /api/sensor-data` with the snapshot report.
    fn post_sensor_data(&mut self, report: &SensorReport) -> Result<(), CommsError>;

    /// `GET /api/control-led`.
    fn fetch_led_command(&mut self) -> Result<Option<LedCommand>, CommsError>;

    /// `GET /api/control-pump`.
    fn fetch_pump_command(&mut self) -> Result<Option<PumpCommand>, CommsError>;
}

// ───────────────────────────────────────────────────────────────
// Event sink port (driven adapter: domain → logging / telemetry)
// ───────────────────────────────────────────────────────────────

/// The domain emits structured [`AppEvent`](super::events::AppEvent)s
/// through this port.  Adapters decide where they go (serial log, a future
/// MQTT sink, etc.).
pub trait EventSink {
    fn emit(&mut self, event: &super::events::AppEvent);
}
