//! Water-pump relay driver.
//!
//! A single digital output, active HIGH.  Cooldown, dwell, and the moisture
//! safety override live in [`PumpController`](crate::control::pump); this
//! driver is a dumb actuator.
//!
//! ## Dual-target design
//!
//! On ESP-IDF: drives the relay GPIO via hw_init.
//! On host/test: tracks state in-memory only.

use crate::drivers::hw_init;
use crate::pins;

pub struct RelayDriver {
    on: bool,
}

impl RelayDriver {
    pub fn new() -> Self {
        Self { on: false }
    }

    pub fn set(&mut self, on: bool) {
        hw_init::gpio_write(pins::RELAY_GPIO, on);
        self.on = on;
    }

    pub fn off(&mut self) {
        self.set(false);
    }

    pub fn is_on(&self) -> bool {
        self.on
    }
}
