//! Command-based control for the LED controller.
//!
//! The blink state machines are single-writer: only the tick thread may
//! mutate them. Contexts outside the tick thread (a button handler, a command
//! console) describe what they want as a [`ControllerCommand`] and post it
//! into a host-owned queue; the driver loop drains the queue before each
//! tick. Commands therefore take effect on the next tick, never sooner.

use crate::controller::LedRole;
use crate::types::BlinkPattern;

/// Actions targeting a single LED.
#[derive(Debug, Clone, Copy)]
pub enum LedAction {
    /// Force solid on.
    TurnOn,
    /// Force solid off.
    TurnOff,
    /// Start a blink sequence.
    Blink(BlinkPattern),
    /// Enable silent mode.
    SetSilent,
    /// Disable silent mode.
    ClearSilent,
}

/// Command targeting a specific LED.
#[derive(Debug, Clone, Copy)]
pub struct LedCommand {
    pub role: LedRole,
    pub action: LedAction,
}

impl LedCommand {
    /// Creates command.
    pub fn new(role: LedRole, action: LedAction) -> Self {
        Self { role, action }
    }
}

/// Commands understood by the controller's driver loop.
#[derive(Debug, Clone, Copy)]
pub enum ControllerCommand {
    /// Start the staggered indication pattern on all LEDs.
    StartIndication,
    /// Force all LEDs to solid off.
    StopIndication,
    /// Broadcast silent mode on.
    EnterSilentMode,
    /// Broadcast silent mode off.
    ExitSilentMode,
    /// Operate on a single LED.
    Led(LedCommand),
}
