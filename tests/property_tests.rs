//! Property tests for the pump gating rules.
//!
//! Runs on host (x86_64) only — proptest is not available for ESP32 targets.
//! On ESP32, these tests are compiled out.

#![cfg(not(target_os = "espidf"))]

use core::time::Duration;

use growhouse::config::SystemConfig;
use growhouse::control::pump::{PumpController, RelayState};
use proptest::prelude::*;

fn secs(s: u64) -> Duration {
    Duration::from_secs(s)
}

proptest! {
    /// Whatever happened before, a reading below the deactivation threshold
    /// leaves the relay off after the next update.
    #[test]
    fn saturated_soil_always_ends_with_relay_off(
        dry_soil in 28_000u16..=u16::MAX,
        wet_soil in 0u16..28_000,
        t in 1u64..100_000,
    ) {
        let config = SystemConfig::default();
        let mut pump = PumpController::new(&config);

        pump.request(RelayState::On, dry_soil, secs(0));
        pump.update(wet_soil, secs(t));

        prop_assert_eq!(pump.relay_state(), RelayState::Off);
    }

    /// No two successful activations may sit closer than the cooldown,
    /// no matter how densely the requests arrive.
    #[test]
    fn activations_never_violate_cooldown(
        mut request_times in proptest::collection::vec(0u64..20_000, 1..60),
    ) {
        let config = SystemConfig::default();
        let cooldown = config.pump_cooldown_secs as u64;
        let mut pump = PumpController::new(&config);

        request_times.sort_unstable();

        let mut activations: Vec<u64> = Vec::new();
        let mut seen = None;
        for t in request_times {
            pump.request(RelayState::On, 47_000, secs(t));
            pump.update(47_000, secs(t));
            if pump.last_activation() != seen {
                seen = pump.last_activation();
                activations.push(t);
            }
        }

        for pair in activations.windows(2) {
            prop_assert!(
                pair[1] - pair[0] >= cooldown,
                "activations at {}s and {}s violate the {}s cooldown",
                pair[0], pair[1], cooldown
            );
        }
    }

    /// The relay never stays on longer than the dwell when moisture holds
    /// steady above the safety threshold.
    #[test]
    fn relay_never_outlives_the_dwell(
        start in 0u64..10_000,
        after in 0u64..100,
    ) {
        let config = SystemConfig::default();
        let dwell = config.pump_dwell_secs as u64;
        let mut pump = PumpController::new(&config);

        pump.request(RelayState::On, 47_000, secs(start));
        pump.update(47_000, secs(start + after));

        if after >= dwell {
            prop_assert_eq!(pump.relay_state(), RelayState::Off);
        } else {
            prop_assert_eq!(pump.relay_state(), RelayState::On);
        }
    }

    /// An OFF request outside the cooldown window always releases the relay
    /// (with moisture above the safety threshold it cannot re-trigger).
    #[test]
    fn off_request_after_cooldown_always_honoured(
        gap in 600u64..50_000,
    ) {
        let config = SystemConfig::default();
        let mut pump = PumpController::new(&config);

        pump.request(RelayState::On, 47_000, secs(0));
        pump.request(RelayState::Off, 47_000, secs(gap));

        prop_assert_eq!(pump.relay_state(), RelayState::Off);
    }
}
