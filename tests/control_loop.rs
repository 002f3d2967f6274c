//! Integration tests: AppService → pump rules → actuators → remote sync.

use core::time::Duration;

use growhouse::app::events::AppEvent;
use growhouse::app::ports::{ActuatorPort, EventSink, RemotePort, SensorPort};
use growhouse::app::service::{AppService, SyncOutcome};
use growhouse::config::SystemConfig;
use growhouse::error::CommsError;
use growhouse::protocol::{LedCommand, PumpCommand, PumpStatus, SensorReport};
use growhouse::sensors::SensorSnapshot;

// ── Mock implementations ──────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ActCall {
    SetRelay(bool),
    SetLed(bool, bool, bool),
    AllOff,
}

struct MockHw {
    soil: u16,
    calls: Vec<ActCall>,
}

impl MockHw {
    fn with_soil(soil: u16) -> Self {
        Self { soil, calls: Vec::new() }
    }

    fn relay_is_on(&self) -> bool {
        self.calls
            .iter()
            .rev()
            .find_map(|c| match c {
                ActCall::SetRelay(on) => Some(*on),
                ActCall::AllOff => Some(false),
                _ => None,
            })
            .unwrap_or(false)
    }
}

impl SensorPort for MockHw {
    fn read_all(&mut self) -> SensorSnapshot {
        SensorSnapshot {
            temperature_c: 24,
            humidity_pct: 58,
            light_raw: 41_000,
            soil_moisture: self.soil,
        }
    }

    fn read_soil_moisture(&mut self) -> u16 {
        self.soil
    }
}

impl ActuatorPort for MockHw {
    fn set_relay(&mut self, on: bool) {
        self.calls.push(ActCall::SetRelay(on));
    }

    fn set_led(&mut self, red: bool, green: bool, blue: bool) {
        self.calls.push(ActCall::SetLed(red, green, blue));
    }

    fn all_off(&mut self) {
        self.calls.push(ActCall::AllOff);
    }
}

struct MockRemote {
    post_result: Result<(), CommsError>,
    led_response: Result<Option<LedCommand>, CommsError>,
    pump_response: Result<Option<PumpCommand>, CommsError>,
    posts: Vec<SensorReport>,
    led_fetches: u32,
    pump_fetches: u32,
}

impl MockRemote {
    fn quiet() -> Self {
        Self {
            post_result: Ok(()),
            led_response: Ok(None),
            pump_response: Ok(None),
            posts: Vec::new(),
            led_fetches: 0,
            pump_fetches: 0,
        }
    }
}

impl RemotePort for MockRemote {
    fn post_sensor_data(&mut self, report: &SensorReport) -> Result<(), CommsError> {
        self.posts.push(*report);
        self.post_result
    }

    fn fetch_led_command(&mut self) -> Result<Option<LedCommand>, CommsError> {
        self.led_fetches += 1;
        self.led_response
    }

    fn fetch_pump_command(&mut self) -> Result<Option<PumpCommand>, CommsError> {
        self.pump_fetches += 1;
        self.pump_response
    }
}

#[derive(Default)]
struct SinkSpy {
    events: Vec<AppEvent>,
}

impl EventSink for SinkSpy {
    fn emit(&mut self, event: &AppEvent) {
        self.events.push(event.clone());
    }
}

fn service() -> AppService {
    AppService::new(SystemConfig::default())
}

fn secs(s: u64) -> Duration {
    Duration::from_secs(s)
}

// Default thresholds: activate 46 700, deactivate 28 000 (dry reads high).
const DRY: u16 = 47_000;
const DAMP: u16 = 30_000;
const SATURATED: u16 = 27_000;

// ── Control tick ──────────────────────────────────────────────

#[test]
fn dry_soil_activates_pump_on_tick() {
    let mut app = service();
    let mut hw = MockHw::with_soil(DRY);
    let mut sink = SinkSpy::default();

    app.tick(secs(0), &mut hw, &mut sink);

    assert!(hw.relay_is_on());
    assert!(sink.events.iter().any(|e| matches!(e, AppEvent::PumpChanged { on: true })));
}

#[test]
fn saturated_soil_keeps_pump_off() {
    let mut app = service();
    let mut hw = MockHw::with_soil(SATURATED);
    let mut sink = SinkSpy::default();

    app.tick(secs(0), &mut hw, &mut sink);

    assert!(!hw.relay_is_on());
}

#[test]
fn dwell_expires_between_ticks() {
    let mut app = service();
    let mut hw = MockHw::with_soil(DRY);
    let mut sink = SinkSpy::default();

    app.tick(secs(0), &mut hw, &mut sink);
    assert!(hw.relay_is_on());

    // Default dwell is 3 s; at t=4 the relay must be released.
    app.tick(secs(4), &mut hw, &mut sink);
    assert!(!hw.relay_is_on());
}

#[test]
fn second_activation_waits_out_cooldown() {
    let mut app = service();
    let mut hw = MockHw::with_soil(DRY);
    let mut sink = SinkSpy::default();

    app.tick(secs(0), &mut hw, &mut sink);
    app.tick(secs(4), &mut hw, &mut sink);
    assert!(!hw.relay_is_on());

    // Still dry, but inside the 600 s cooldown: no re-activation.
    app.tick(secs(300), &mut hw, &mut sink);
    assert!(!hw.relay_is_on());

    // Cooldown over: fires again.
    app.tick(secs(600), &mut hw, &mut sink);
    assert!(hw.relay_is_on());
}

#[test]
fn moisture_drop_mid_dwell_forces_relay_off() {
    let mut app = service();
    let mut hw = MockHw::with_soil(DRY);
    let mut sink = SinkSpy::default();

    app.tick(secs(0), &mut hw, &mut sink);
    assert!(hw.relay_is_on());

    hw.soil = SATURATED;
    app.tick(secs(1), &mut hw, &mut sink);
    assert!(!hw.relay_is_on());
}

// ── Report contents ───────────────────────────────────────────

#[test]
fn report_status_is_threshold_derived_not_relay_state() {
    let mut app = service();
    let mut sink = SinkSpy::default();

    // Dry soil: the relay fires, yet the report claims OFF because the
    // reading sits above the activation threshold.
    let mut hw = MockHw::with_soil(DRY);
    app.tick(secs(0), &mut hw, &mut sink);
    assert!(hw.relay_is_on());
    assert_eq!(app.build_report().pump_status, PumpStatus::Off);

    // Saturated soil: relay forced off, yet the report claims ON.
    hw.soil = SATURATED;
    app.tick(secs(1), &mut hw, &mut sink);
    assert!(!hw.relay_is_on());
    assert_eq!(app.build_report().pump_status, PumpStatus::On);
}

#[test]
fn sync_posts_the_latest_snapshot() {
    let mut app = service();
    let mut hw = MockHw::with_soil(DAMP);
    let mut remote = MockRemote::quiet();
    let mut sink = SinkSpy::default();

    app.tick(secs(0), &mut hw, &mut sink);
    let outcome = app.sync(secs(0), &mut hw, &mut remote, &mut sink);

    assert_eq!(outcome, SyncOutcome::Completed);
    assert_eq!(remote.posts.len(), 1);
    let report = &remote.posts[0];
    assert_eq!(report.temp, 24);
    assert_eq!(report.humidity, 58);
    assert_eq!(report.light, 41_000);
    assert_eq!(report.soil_moisture, DAMP);
    assert!(sink.events.iter().any(|e| matches!(e, AppEvent::Telemetry(_))));
}

// ── Sync protocol ─────────────────────────────────────────────

#[test]
fn failed_post_skips_both_control_fetches() {
    let mut app = service();
    let mut hw = MockHw::with_soil(DAMP);
    let mut remote = MockRemote::quiet();
    remote.post_result = Err(CommsError::Transport);
    let mut sink = SinkSpy::default();

    app.tick(secs(0), &mut hw, &mut sink);
    let outcome = app.sync(secs(0), &mut hw, &mut remote, &mut sink);

    assert_eq!(outcome, SyncOutcome::PostFailed);
    assert_eq!(remote.led_fetches, 0, "LED fetch must not run after a failed POST");
    assert_eq!(remote.pump_fetches, 0, "pump fetch must not run after a failed POST");
    assert!(sink.events.iter().any(|e| matches!(e, AppEvent::SyncFailed(_))));
}

#[test]
fn led_command_overwrites_all_channels() {
    let mut app = service();
    let mut hw = MockHw::with_soil(SATURATED);
    let mut remote = MockRemote::quiet();
    remote.led_response = Ok(Some(LedCommand { red: 1, green: 0, blue: 1 }));
    let mut sink = SinkSpy::default();

    app.tick(secs(0), &mut hw, &mut sink);
    app.sync(secs(0), &mut hw, &mut remote, &mut sink);

    assert!(hw.calls.contains(&ActCall::SetLed(true, false, true)));
    assert!(sink.events.iter().any(|e| matches!(
        e,
        AppEvent::LedChanged { red: true, green: false, blue: true }
    )));
}

#[test]
fn one_failed_fetch_does_not_block_the_other() {
    let mut app = service();
    let mut hw = MockHw::with_soil(DAMP);
    let mut remote = MockRemote::quiet();
    remote.led_response = Err(CommsError::Transport);
    let mut sink = SinkSpy::default();

    app.tick(secs(0), &mut hw, &mut sink);
    let outcome = app.sync(secs(0), &mut hw, &mut remote, &mut sink);

    assert_eq!(outcome, SyncOutcome::Completed);
    assert_eq!(remote.pump_fetches, 1, "pump fetch still runs");
}

#[test]
fn remote_pump_command_activates_relay() {
    let mut app = service();
    // Exactly at the deactivation threshold: the auto-rule (strictly
    // above) stays quiet and the safety override (strictly below) does
    // not veto, so only the remote command can start the pump.
    let mut hw = MockHw::with_soil(28_000);
    let mut remote = MockRemote::quiet();
    remote.pump_response = Ok(Some(PumpCommand { pump_status: PumpStatus::On }));
    let mut sink = SinkSpy::default();

    app.tick(secs(0), &mut hw, &mut sink);
    assert!(!hw.relay_is_on());

    app.sync(secs(0), &mut hw, &mut remote, &mut sink);
    assert!(hw.relay_is_on());
}

#[test]
fn remote_off_command_during_cooldown_is_ignored() {
    let mut app = service();
    let mut hw = MockHw::with_soil(DRY);
    let mut remote = MockRemote::quiet();
    remote.pump_response = Ok(Some(PumpCommand { pump_status: PumpStatus::Off }));
    let mut sink = SinkSpy::default();

    app.tick(secs(0), &mut hw, &mut sink);
    assert!(hw.relay_is_on());

    // One second into the dwell the cooldown gate still holds, so the
    // remote OFF is dropped and the dwell plays out.
    app.sync(secs(1), &mut hw, &mut remote, &mut sink);
    assert!(hw.relay_is_on());
}

#[test]
fn remote_pump_command_respects_safety_override() {
    let mut app = service();
    let mut hw = MockHw::with_soil(SATURATED);
    let mut remote = MockRemote::quiet();
    remote.pump_response = Ok(Some(PumpCommand { pump_status: PumpStatus::On }));
    let mut sink = SinkSpy::default();

    app.tick(secs(0), &mut hw, &mut sink);
    app.sync(secs(0), &mut hw, &mut remote, &mut sink);

    assert!(!hw.relay_is_on(), "saturated soil must veto remote activation");
}
