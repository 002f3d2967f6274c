//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing structured application events to
//! the ESP-IDF logger (which goes to UART / USB-CDC in production).
//! A future MQTT or dashboard adapter would implement the same trait.

use log::{info, warn};

use crate::app::events::AppEvent;
use crate::app::ports::EventSink;

/// Adapter that logs every [`AppEvent`] to the serial console.
pub struct LogEventSink;

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &AppEvent) {
        match event {
            AppEvent::Telemetry(t) => {
                info!(
                    "TELEM | T={}\u{00b0}C | RH={}% | light={} | soil={} | relay={} | reported={:?}",
                    t.temperature_c,
                    t.humidity_pct,
                    t.light_raw,
                    t.soil_moisture,
                    if t.relay_on { "ON" } else { "OFF" },
                    t.reported_status,
                );
            }
            AppEvent::PumpChanged { on } => {
                info!("PUMP  | relay {}", if *on { "ON" } else { "OFF" });
            }
            AppEvent::LedChanged { red, green, blue } => {
                info!("LED   | r={red} g={green} b={blue}");
            }
            AppEvent::SyncFailed(err) => {
                warn!("SYNC  | failed: {err}");
            }
            AppEvent::Started => {
                info!("START | growhouse monitor up");
            }
        }
    }
}
