//! Water-pump controller.
//!
//! The pump has two states {OFF, ON}.  OFF→ON is gated by the moisture
//! safety override AND the cooldown window; ON→OFF happens when the dwell
//! deadline elapses or whenever moisture drops below the deactivation
//! threshold.
//!
//! All timing is expressed as plain [`Duration`] comparisons against a
//! monotonic `now` injected by the caller, so the controller never sleeps
//! and tests can drive it with synthetic clocks.
//!
//! ## Safety contract
//!
//! A soil reading below the deactivation threshold forces the relay off
//! unconditionally — before the cooldown gate, before the requested state
//! is even considered.

use core::time::Duration;

use log::{debug, info};

use crate::config::SystemConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelayState {
    Off,
    On,
}

impl RelayState {
    pub fn is_on(self) -> bool {
        matches!(self, Self::On)
    }
}

/// Cooldown/dwell state machine for the pump relay.
pub struct PumpController {
    cooldown: Duration,
    dwell: Duration,
    deactivate_threshold: u16,
    relay: RelayState,
    /// Uptime of the last successful activation.  `None` until the pump has
    /// run once, so the first request after boot is never cooldown-gated.
    last_activation: Option<Duration>,
    /// Uptime at which the current dwell expires.
    dwell_deadline: Option<Duration>,
}

impl PumpController {
    pub fn new(config: &SystemConfig) -> Self {
        Self {
            cooldown: Duration::from_secs(config.pump_cooldown_secs as u64),
            dwell: Duration::from_secs(config.pump_dwell_secs as u64),
            deactivate_threshold: config.moisture_deactivate_threshold,
            relay: RelayState::Off,
            last_activation: None,
            dwell_deadline: None,
        }
    }

    /// Request a relay state, applying the safety override and cooldown gate.
    ///
    /// Request sources are the moisture auto-activation rule and the remote
    /// `/api/control-pump` command — both go through the same gates.
    pub fn request(&mut self, desired: RelayState, soil_moisture: u16, now: Duration) {
        if soil_moisture < self.deactivate_threshold {
            self.force_off("moisture below deactivation threshold");
            return;
        }

        if let Some(last) = self.last_activation {
            if now.saturating_sub(last) < self.cooldown {
                debug!(
                    "pump: request {:?} ignored, cooldown ({}s remaining)",
                    desired,
                    (self.cooldown - now.saturating_sub(last)).as_secs()
                );
                return;
            }
        }

        match desired {
            RelayState::On => {
                self.relay = RelayState::On;
                self.last_activation = Some(now);
                self.dwell_deadline = Some(now + self.dwell);
                info!("pump: activated for {}s", self.dwell.as_secs());
            }
            RelayState::Off => {
                if self.relay.is_on() {
                    info!("pump: deactivated by request");
                }
                self.relay = RelayState::Off;
                self.dwell_deadline = None;
            }
        }
    }

    /// Per-tick update: enforce the safety override and expire the dwell.
    pub fn update(&mut self, soil_moisture: u16, now: Duration) {
        if soil_moisture < self.deactivate_threshold {
            self.force_off("moisture below deactivation threshold");
            return;
        }
        if let Some(deadline) = self.dwell_deadline {
            if now >= deadline {
                info!("pump: dwell elapsed, relay off");
                self.relay = RelayState::Off;
                self.dwell_deadline = None;
            }
        }
    }

    pub fn relay_state(&self) -> RelayState {
        self.relay
    }

    pub fn last_activation(&self) -> Option<Duration> {
        self.last_activation
    }

    fn force_off(&mut self, reason: &'static str) {
        if self.relay.is_on() {
            info!("pump: forced off ({reason})");
        }
        self.relay = RelayState::Off;
        self.dwell_deadline = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn controller() -> PumpController {
        PumpController::new(&SystemConfig::default())
    }

    const WET_ENOUGH: u16 = 30_000; // above the 28 000 deactivation threshold
    const TOO_DRY: u16 = 27_000; // below it (probe reads low when saturated)

    fn secs(s: u64) -> Duration {
        Duration::from_secs(s)
    }

    #[test]
    fn below_deactivation_threshold_forces_off() {
        let mut pump = controller();
        pump.request(RelayState::On, TOO_DRY, secs(0));
        assert_eq!(pump.relay_state(), RelayState::Off);
        // Even an explicit OFF request keeps it off.
        pump.request(RelayState::Off, TOO_DRY, secs(1));
        assert_eq!(pump.relay_state(), RelayState::Off);
    }

    #[test]
    fn first_activation_after_boot_is_allowed() {
        let mut pump = controller();
        pump.request(RelayState::On, WET_ENOUGH, secs(5));
        assert_eq!(pump.relay_state(), RelayState::On);
        assert_eq!(pump.last_activation(), Some(secs(5)));
    }

    #[test]
    fn activation_within_cooldown_is_ignored() {
        let mut pump = controller();
        pump.request(RelayState::On, WET_ENOUGH, secs(0));
        pump.update(WET_ENOUGH, secs(3)); // dwell expires
        assert_eq!(pump.relay_state(), RelayState::Off);

        pump.request(RelayState::On, WET_ENOUGH, secs(599));
        assert_eq!(pump.relay_state(), RelayState::Off);
        assert_eq!(pump.last_activation(), Some(secs(0)), "timestamp unchanged");
    }

    #[test]
    fn activation_after_cooldown_is_allowed() {
        let mut pump = controller();
        pump.request(RelayState::On, WET_ENOUGH, secs(0));
        pump.update(WET_ENOUGH, secs(3));
        pump.request(RelayState::On, WET_ENOUGH, secs(600));
        assert_eq!(pump.relay_state(), RelayState::On);
        assert_eq!(pump.last_activation(), Some(secs(600)));
    }

    #[test]
    fn relay_drops_exactly_when_dwell_elapses() {
        let mut pump = controller();
        pump.request(RelayState::On, WET_ENOUGH, secs(10));
        pump.update(WET_ENOUGH, secs(12));
        assert_eq!(pump.relay_state(), RelayState::On, "dwell still running");
        pump.update(WET_ENOUGH, secs(13));
        assert_eq!(pump.relay_state(), RelayState::Off, "dwell elapsed");
    }

    #[test]
    fn moisture_drop_cuts_dwell_short() {
        let mut pump = controller();
        pump.request(RelayState::On, WET_ENOUGH, secs(0));
        assert_eq!(pump.relay_state(), RelayState::On);
        pump.update(TOO_DRY, secs(1));
        assert_eq!(pump.relay_state(), RelayState::Off);
    }

    #[test]
    fn off_request_during_cooldown_is_ignored() {
        // Matches the original device behaviour: the cooldown gate sits in
        // front of both ON and OFF requests.
        let mut pump = controller();
        pump.request(RelayState::On, WET_ENOUGH, secs(0));
        pump.request(RelayState::Off, WET_ENOUGH, secs(1));
        assert_eq!(pump.relay_state(), RelayState::On, "still in dwell");
    }
}
