//! HTTP client adapter for the remote growhouse server.
//!
//! Implements [`RemotePort`] over plain HTTP:
//!
//! - `POST {base}/api/sensor-data`  — JSON snapshot report
//! - `GET  {base}/api/control-led`  — RGB channel command
//! - `GET  {base}/api/control-pump` — pump on/off command
//!
//! ## Dual-target design
//!
//! - **`target_os = "espidf"`**: `esp_idf_svc::http::client::EspHttpConnection`
//!   wrapped in the `embedded_svc` client, with a per-request timeout so a
//!   stalled server can never wedge the control loop.
//! - **all other targets**: an in-memory stub so host tests can exercise the
//!   response-handling paths without sockets.
//!
//! Response handling is split into plain functions over `(status, body)` so
//! the parsing rules are unit-testable on the host.

use core::time::Duration;

use log::{debug, warn};

use crate::app::ports::RemotePort;
use crate::error::CommsError;
use crate::protocol::{LedCommand, PumpCommand, SensorReport};

// ───────────────────────────────────────────────────────────────
// Response handling (target-independent)
// ───────────────────────────────────────────────────────────────

/// A control fetch yields `Ok(None)` on any non-200 status; a 200 with a
/// malformed body is an [`CommsError::UnexpectedResponse`].
fn parse_fetch<T: serde::de::DeserializeOwned>(
    status: u16,
    body: &str,
) -> Result<Option<T>, CommsError> {
    if status != 200 {
        debug!("http: control fetch returned {status}, ignoring");
        return Ok(None);
    }
    serde_json::from_str(body)
        .map(Some)
        .map_err(|_| CommsError::UnexpectedResponse)
}

// ───────────────────────────────────────────────────────────────
// Adapter
// ───────────────────────────────────────────────────────────────

pub struct HttpRemote {
    base_url: String,
    timeout: Duration,
    #[cfg(not(target_os = "espidf"))]
    sim_fail: bool,
    #[cfg(not(target_os = "espidf"))]
    sim_post_status: u16,
}

impl HttpRemote {
    pub fn new(base_url: String, timeout: Duration) -> Self {
        Self {
            base_url,
            timeout,
            #[cfg(not(target_os = "espidf"))]
            sim_fail: false,
            #[cfg(not(target_os = "espidf"))]
            sim_post_status: 200,
        }
    }

    /// Simulation: force every request to fail with a transport error.
    #[cfg(not(target_os = "espidf"))]
    pub fn sim_set_fail(&mut self, fail: bool) {
        self.sim_fail = fail;
    }

    /// Simulation: status code returned to POSTs.
    #[cfg(not(target_os = "espidf"))]
    pub fn sim_set_post_status(&mut self, status: u16) {
        self.sim_post_status = status;
    }

    // ── Platform-specific transport ───────────────────────────

    /// One HTTP exchange: returns `(status, body)`.
    #[cfg(target_os = "espidf")]
    fn exchange(&mut self, method: Method, path: &str, payload: Option<&[u8]>) -> Result<(u16, String), CommsError> {
        use embedded_svc::http::client::Client;
        use embedded_svc::http::Status;
        use embedded_svc::io::Write;
        use embedded_svc::utils::io;
        use esp_idf_svc::http::client::{Configuration, EspHttpConnection};

        let connection = EspHttpConnection::new(&Configuration {
            timeout: Some(self.timeout),
            ..Default::default()
        })
        .map_err(|_| CommsError::Transport)?;
        let mut client = Client::wrap(connection);

        let url = format!("{}{path}", self.base_url);
        let mut response = match method {
            Method::Get => client
                .get(&url)
                .map_err(|_| CommsError::Transport)?
                .submit()
                .map_err(|_| CommsError::Transport)?,
            Method::Post => {
                let body = payload.unwrap_or(&[]);
                let len = body.len().to_string();
                let headers = [
                    ("Content-Type", "application/json"),
                    ("Content-Length", len.as_str()),
                ];
                let mut request = client
                    .post(&url, &headers)
                    .map_err(|_| CommsError::Transport)?;
                request.write_all(body).map_err(|_| CommsError::Transport)?;
                request.submit().map_err(|_| CommsError::Transport)?
            }
        };

        let status = response.status();
        let mut buffer = [0u8; 1024];
        let read = io::try_read_full(&mut response, &mut buffer)
            .map_err(|_| CommsError::Transport)?;
        Ok((status, String::from_utf8_lossy(&buffer[..read]).into_owned()))
    }

    #[cfg(not(target_os = "espidf"))]
    fn exchange(&mut self, method: Method, path: &str, _payload: Option<&[u8]>) -> Result<(u16, String), CommsError> {
        if self.sim_fail {
            return Err(CommsError::Transport);
        }
        debug!("http(sim): {method:?} {}{path}", self.base_url);
        // No server on the host: report success, offer no commands.
        match method {
            Method::Post => Ok((self.sim_post_status, String::new())),
            Method::Get => Ok((204, String::new())),
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum Method {
    Get,
    Post,
}

// ───────────────────────────────────────────────────────────────
// RemotePort
// ───────────────────────────────────────────────────────────────

impl RemotePort for HttpRemote {
    fn post_sensor_data(&mut self, report: &SensorReport) -> Result<(), CommsError> {
        let payload =
            serde_json::to_vec(report).map_err(|_| CommsError::UnexpectedResponse)?;
        let (status, _body) = self.exchange(Method::Post, "/api/sensor-data", Some(&payload))?;
        // Any received response counts as a delivered report; only transport
        // failures abort the sync round. Off-nominal codes are still logged.
        if status != 200 {
            warn!("http: sensor-data POST returned {status}");
        }
        Ok(())
    }

    fn fetch_led_command(&mut self) -> Result<Option<LedCommand>, CommsError> {
        let (status, body) = self.exchange(Method::Get, "/api/control-led", None)?;
        parse_fetch(status, &body)
    }

    fn fetch_pump_command(&mut self) -> Result<Option<PumpCommand>, CommsError> {
        let (status, body) = self.exchange(Method::Get, "/api/control-pump", None)?;
        parse_fetch(status, &body)
    }
}

// ───────────────────────────────────────────────────────────────
// Tests
// ───────────────────────────────────────────────────────────────
