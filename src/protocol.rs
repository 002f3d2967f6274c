//! Wire types for the remote HTTP API.
//!
//! Three endpoints, all plain HTTP + JSON:
//!
//! | Endpoint              | Direction | Payload                                   |
//! |-----------------------|-----------|-------------------------------------------|
//! | `POST /api/sensor-data` | device → server | [`SensorReport`]                    |
//! | `GET /api/control-led`  | server → device | [`LedCommand`] (`{red,green,blue}`) |
//! | `GET /api/control-pump` | server → device | [`PumpCommand`] (`{pumpStatus}`)    |
//!
//! Field names are part of the server contract — do not rename without
//! touching the web app's API routes.

use serde::{Deserialize, Serialize};

/// Reported pump status, serialised as the literal strings `"ON"` / `"OFF"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PumpStatus {
    #[serde(rename = "ON")]
    On,
    #[serde(rename = "OFF")]
    Off,
}

/// One sensor snapshot, POSTed to `/api/sensor-data` every poll interval.
///
/// `pump_status` reports `"ON"` whenever the soil reading sits below the
/// activation threshold — a status the dashboard displays, not the live
/// relay state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SensorReport {
    pub temp: i16,
    pub humidity: u8,
    pub light: u16,
    pub soil_moisture: u16,
    pub pump_status: PumpStatus,
}

/// LED command from `GET /api/control-led`.  Channels arrive as 0/1 integers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct LedCommand {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl LedCommand {
    /// Channel states as booleans (any non-zero value counts as on).
    pub fn channels(&self) -> (bool, bool, bool) {
        (self.red != 0, self.green != 0, self.blue != 0)
    }
}

/// Pump command from `GET /api/control-pump`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PumpCommand {
    pub pump_status: PumpStatus,
}
