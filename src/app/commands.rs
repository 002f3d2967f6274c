//! Inbound commands to the application service.
//!
//! These represent actions requested by the outside world (the remote
//! server's control endpoints) that the
//! [`AppService`](super::service::AppService) interprets and acts upon.

use crate::control::pump::RelayState;
use crate::protocol::{LedCommand, PumpCommand, PumpStatus};

/// Commands that external adapters can send into the application core.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppCommand {
    /// Overwrite all three status-light channels.
    SetLed { red: bool, green: bool, blue: bool },

    /// Request a pump state.  Routed through the controller's safety
    /// override and cooldown gate — never applied directly.
    SetPump(RelayState),
}

impl From<LedCommand> for AppCommand {
    fn from(cmd: LedCommand) -> Self {
        let (red, green, blue) = cmd.channels();
        Self::SetLed { red, green, blue }
    }
}

impl From<PumpCommand> for AppCommand {
    fn from(cmd: PumpCommand) -> Self {
        match cmd.pump_status {
            PumpStatus::On => Self::SetPump(RelayState::On),
            PumpStatus::Off => Self::SetPump(RelayState::Off),
        }
    }
}
