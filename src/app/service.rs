//! Application service — the hexagonal core.
//!
//! [`AppService`] owns the pump controller and the last sensor snapshot.
//! It exposes a clean, hardware-agnostic API.  All I/O flows through
//! port traits injected at call sites, making the entire service
//! testable with mock adapters.
//!
//! ```text
//!  SensorPort ──▶ ┌────────────────────────┐ ──▶ EventSink
//!                 │       AppService        │
//! ActuatorPort ◀──│  pump gate · sync logic │◀──▶ RemotePort
//!                 └────────────────────────┘
//! ```
//!
//! Two entry points drive it: [`tick`](AppService::tick) runs every
//! control-loop interval, [`sync`](AppService::sync) runs every poll
//! interval when the network is up.

use core::time::Duration;

use log::{info, warn};

use crate::config::SystemConfig;
use crate::control::pump::{PumpController, RelayState};
use crate::protocol::{PumpStatus, SensorReport};
use crate::sensors::SensorSnapshot;

use super::commands::AppCommand;
use super::events::{AppEvent, TelemetryData};
use super::ports::{ActuatorPort, EventSink, RemotePort, SensorPort};

/// Result of one sync round against the remote server.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncOutcome {
    /// The report was posted; control fetches ran (each may have failed
    /// individually and been logged).
    Completed,
    /// The POST failed.  Both fetches were skipped and the caller should
    /// retry on the next tick rather than wait out a full poll interval.
    PostFailed,
}

/// Counts control ticks between sync rounds.
///
/// Starts due, so the first report goes out on the first loop iteration
/// rather than a full poll interval after boot.
pub struct SyncCadence {
    ticks: u64,
    poll_ticks: u64,
}

impl SyncCadence {
    pub fn new(config: &SystemConfig) -> Self {
        let poll_ticks = (config.poll_interval_secs as u64 * 1000
            / config.control_loop_interval_ms as u64)
            .max(1);
        Self {
            ticks: poll_ticks,
            poll_ticks,
        }
    }

    /// Advance one control tick; true while a sync round is due.
    pub fn advance(&mut self) -> bool {
        self.ticks = self.ticks.saturating_add(1);
        self.ticks >= self.poll_ticks
    }

    /// A completed round restarts the interval.  A failed POST deliberately
    /// does not call this, so the next tick retries immediately.
    pub fn completed(&mut self) {
        self.ticks = 0;
    }
}

// ───────────────────────────────────────────────────────────────
// AppService
// ───────────────────────────────────────────────────────────────

/// The application service orchestrates all domain logic.
pub struct AppService {
    config: SystemConfig,
    pump: PumpController,
    /// Most recent full snapshot, refreshed by [`tick`](Self::tick).
    snapshot: SensorSnapshot,
    tick_count: u64,
}

impl AppService {
    pub fn new(config: SystemConfig) -> Self {
        let pump = PumpController::new(&config);
        Self {
            config,
            pump,
            snapshot: SensorSnapshot::default(),
            tick_count: 0,
        }
    }

    /// Announce startup through the event sink.
    pub fn start(&mut self, sink: &mut impl EventSink) {
        info!("growhouse service starting");
        sink.emit(&AppEvent::Started);
    }

    /// One control-loop tick: sample sensors, run the moisture
    /// auto-activation rule, enforce pump safety/dwell, drive the relay.
    ///
    /// `now` is monotonic uptime; the service never reads a clock itself.
    pub fn tick<H>(&mut self, now: Duration, hw: &mut H, sink: &mut impl EventSink)
    where
        H: SensorPort + ActuatorPort,
    {
        self.tick_count += 1;
        self.snapshot = hw.read_all();

        let was_on = self.pump.relay_state().is_on();

        // Probe reads high when the soil is dry: above the deactivation
        // threshold means "needs water", so ask for the pump.  The
        // controller's cooldown gate decides whether it actually fires.
        if self.snapshot.soil_moisture > self.config.moisture_deactivate_threshold {
            self.pump.request(RelayState::On, self.snapshot.soil_moisture, now);
        }
        self.pump.update(self.snapshot.soil_moisture, now);

        let is_on = self.pump.relay_state().is_on();
        hw.set_relay(is_on);
        if was_on != is_on {
            sink.emit(&AppEvent::PumpChanged { on: is_on });
        }
    }

    /// One sync round: POST the snapshot report, then (only on success)
    /// fetch and apply the LED and pump control commands.
    ///
    /// A failed POST aborts the round immediately; individual fetch
    /// failures are logged and skipped without affecting each other.
    pub fn sync<R, H>(
        &mut self,
        now: Duration,
        hw: &mut H,
        remote: &mut R,
        sink: &mut impl EventSink,
    ) -> SyncOutcome
    where
        R: RemotePort,
        H: SensorPort + ActuatorPort,
    {
        let report = self.build_report();
        if let Err(err) = remote.post_sensor_data(&report) {
            warn!("sync: sensor-data POST failed ({err}), skipping control fetches");
            sink.emit(&AppEvent::SyncFailed(err));
            return SyncOutcome::PostFailed;
        }
        sink.emit(&AppEvent::Telemetry(self.telemetry(&report)));

        match remote.fetch_led_command() {
            Ok(Some(cmd)) => self.handle_command(cmd.into(), now, hw, sink),
            Ok(None) => {}
            Err(err) => warn!("sync: LED control fetch failed ({err})"),
        }

        match remote.fetch_pump_command() {
            Ok(Some(cmd)) => {
                // Fresh probe sample for the safety gate; the tick snapshot
                // may be up to one interval stale.
                self.snapshot.soil_moisture = hw.read_soil_moisture();
                self.handle_command(cmd.into(), now, hw, sink);
            }
            Ok(None) => {}
            Err(err) => warn!("sync: pump control fetch failed ({err})"),
        }

        SyncOutcome::Completed
    }

    /// Apply a single inbound command.
    ///
    /// LED commands take effect immediately; pump commands are routed
    /// through the controller's safety override and cooldown gate.
    pub fn handle_command<A>(
        &mut self,
        cmd: AppCommand,
        now: Duration,
        hw: &mut A,
        sink: &mut impl EventSink,
    ) where
        A: ActuatorPort,
    {
        match cmd {
            AppCommand::SetLed { red, green, blue } => {
                hw.set_led(red, green, blue);
                sink.emit(&AppEvent::LedChanged { red, green, blue });
            }
            AppCommand::SetPump(desired) => {
                let was_on = self.pump.relay_state().is_on();
                self.pump.request(desired, self.snapshot.soil_moisture, now);
                let is_on = self.pump.relay_state().is_on();
                hw.set_relay(is_on);
                if was_on != is_on {
                    sink.emit(&AppEvent::PumpChanged { on: is_on });
                }
            }
        }
    }

    /// Build the wire report from the latest snapshot.
    ///
    /// The reported pump status is *threshold-derived*: the dashboard shows
    /// "ON" whenever the soil reads below the activation threshold (i.e. it
    /// is wet enough that watering either ran or is unnecessary), regardless
    /// of the actual relay state.
    pub fn build_report(&self) -> SensorReport {
        let pump_status = if self.snapshot.soil_moisture < self.config.moisture_activate_threshold {
            PumpStatus::On
        } else {
            PumpStatus::Off
        };
        SensorReport {
            temp: self.snapshot.temperature_c,
            humidity: self.snapshot.humidity_pct,
            light: self.snapshot.light_raw,
            soil_moisture: self.snapshot.soil_moisture,
            pump_status,
        }
    }

    pub fn relay_state(&self) -> RelayState {
        self.pump.relay_state()
    }

    pub fn snapshot(&self) -> SensorSnapshot {
        self.snapshot
    }

    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    fn telemetry(&self, report: &SensorReport) -> TelemetryData {
        TelemetryData {
            temperature_c: self.snapshot.temperature_c,
            humidity_pct: self.snapshot.humidity_pct,
            light_raw: self.snapshot.light_raw,
            soil_moisture: self.snapshot.soil_moisture,
            relay_on: self.pump.relay_state().is_on(),
            reported_status: report.pump_status,
        }
    }
}
