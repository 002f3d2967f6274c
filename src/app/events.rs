//! Outbound application events.
//!
//! The [`AppService`](super::service::AppService) emits these through the
//! [`EventSink`](super::ports::EventSink) port.  Adapters on the other
//! side decide what to do with them — log to serial today, publish
//! somewhere else tomorrow.

use crate::error::CommsError;
use crate::protocol::PumpStatus;

/// Structured events emitted by the application core.
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// The application service has started.
    Started,

    /// Snapshot successfully reported to the server.
    Telemetry(TelemetryData),

    /// The pump relay changed state.
    PumpChanged { on: bool },

    /// The status light was overwritten by a remote command.
    LedChanged { red: bool, green: bool, blue: bool },

    /// The sensor-data POST failed; fetches were skipped this round.
    SyncFailed(CommsError),
}

/// A point-in-time telemetry snapshot suitable for logging or transmission.
#[derive(Debug, Clone, Copy)]
pub struct TelemetryData {
    pub temperature_c: i16,
    pub humidity_pct: u8,
    pub light_raw: u16,
    pub soil_moisture: u16,
    pub relay_on: bool,
    /// Status string sent to the dashboard (threshold-derived, not relay state).
    pub reported_status: PumpStatus,
}
