//! RGB status light driver.
//!
//! Three digital outputs, one per channel — on/off only, no PWM dimming.
//! Each remote command fully overwrites all three channels.
//!
//! ## Dual-target design
//!
//! On ESP-IDF: drives three GPIOs via hw_init.
//! On host/test: tracks state in-memory only.

use crate::drivers::hw_init;
use crate::pins;

pub struct StatusLed {
    current: (bool, bool, bool),
}

impl StatusLed {
    pub fn new() -> Self {
        Self {
            current: (false, false, false),
        }
    }

    pub fn set_colour(&mut self, red: bool, green: bool, blue: bool) {
        hw_init::gpio_write(pins::LED_R_GPIO, red);
        hw_init::gpio_write(pins::LED_G_GPIO, green);
        hw_init::gpio_write(pins::LED_B_GPIO, blue);
        self.current = (red, green, blue);
    }

    pub fn off(&mut self) {
        self.set_colour(false, false, false);
    }

    pub fn current_colour(&self) -> (bool, bool, bool) {
        self.current
    }
}
