//! Fixed board LED set with a staggered indication pattern and driver loop.

use crate::blinker::{LedBlinker, LedOutput};
use crate::command::{ControllerCommand, LedAction, LedCommand};
use crate::tick::TickSource;
use crate::types::BlinkPattern;

/// Stagger slot of the indication pattern, in ticks.
///
/// Every LED blinks 2 slots on / 3 slots off; each LED starts one slot after
/// the previous one, which makes the set chase instead of blinking in unison.
pub const INDICATION_SLOT_TICKS: u32 = 110;

/// The symbolic role of an LED on the board.
///
/// The set of roles is fixed at build time; the discriminant doubles as the
/// member index in [`LedController`], which is also the per-tick update order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LedRole {
    Orange = 0,
    Green = 1,
    Red = 2,
    Blue = 3,
}

impl LedRole {
    /// Number of LEDs on the board.
    pub const COUNT: usize = 4;

    /// All roles in member-index order.
    pub const ALL: [LedRole; LedRole::COUNT] = [
        LedRole::Orange,
        LedRole::Green,
        LedRole::Red,
        LedRole::Blue,
    ];

    #[inline]
    fn index(self) -> usize {
        self as usize
    }
}

/// Errors that can occur during controller operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ControllerError {
    /// An LED failed to configure its output during initialization.
    Configuration {
        /// The role whose output could not be configured.
        role: LedRole,
    },
}

impl core::fmt::Display for ControllerError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ControllerError::Configuration { role } => {
                write!(f, "failed to configure the {:?} LED output", role)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ControllerError {}

/// Drives the fixed set of board indicator LEDs.
///
/// Owns one [`LedBlinker`] per [`LedRole`] and fans the periodic tick out to
/// all of them in role order. Construct exactly one controller in the
/// application entry point and hand references to whoever needs to post
/// commands; there is no global instance.
///
/// The controller itself never blocks. The host either calls [`tick`] from
/// its own fixed-cadence context (one call per [`TICK_PERIOD_MS`]) or hands
/// a [`TickSource`] to [`run_forever`].
///
/// [`tick`]: LedController::tick
/// [`run_forever`]: LedController::run_forever
/// [`TICK_PERIOD_MS`]: crate::TICK_PERIOD_MS
pub struct LedController<O: LedOutput> {
    leds: [LedBlinker<O>; LedRole::COUNT],
}

impl<O: LedOutput> LedController<O> {
    /// Creates a controller from the four board LED outputs.
    ///
    /// Outputs are not touched until [`initialize`](LedController::initialize).
    pub fn new(orange: O, green: O, red: O, blue: O) -> Self {
        Self {
            leds: [
                LedBlinker::new(orange),
                LedBlinker::new(green),
                LedBlinker::new(red),
                LedBlinker::new(blue),
            ],
        }
    }

    /// Configures every member output as an inactive output pin.
    ///
    /// Stops at the first failure and reports the failing role. Members
    /// configured before the failure are left configured; partial
    /// initialization is not rolled back.
    pub fn initialize(&mut self) -> Result<(), ControllerError> {
        for (role, led) in LedRole::ALL.iter().zip(self.leds.iter_mut()) {
            led.init()
                .map_err(|_| ControllerError::Configuration { role: *role })?;
        }

        Ok(())
    }

    /// Starts the staggered indication pattern.
    ///
    /// Every LED gets the same on/off periods and a distinct start delay,
    /// one [`INDICATION_SLOT_TICKS`] apart, so the set appears to chase.
    pub fn start_indication_pattern(&mut self) {
        let chase = BlinkPattern::new(2 * INDICATION_SLOT_TICKS, 3 * INDICATION_SLOT_TICKS);

        self.led_mut(LedRole::Orange).blink(chase);
        self.led_mut(LedRole::Red)
            .blink(chase.pending(INDICATION_SLOT_TICKS));
        self.led_mut(LedRole::Blue)
            .blink(chase.pending(2 * INDICATION_SLOT_TICKS));
        self.led_mut(LedRole::Green)
            .blink(chase.pending(3 * INDICATION_SLOT_TICKS));
    }

    /// Forces every member to solid off.
    pub fn stop_indication_pattern(&mut self) {
        for led in &mut self.leds {
            led.turn_off();
        }
    }

    /// Broadcasts silent mode on to every member.
    pub fn enter_silent_mode(&mut self) {
        for led in &mut self.leds {
            led.set_silent();
        }
    }

    /// Broadcasts silent mode off to every member.
    pub fn exit_silent_mode(&mut self) {
        for led in &mut self.leds {
            led.clear_silent();
        }
    }

    /// Advances every member by one tick, in role order.
    ///
    /// Member updates are independent; the fixed order only affects sub-tick
    /// output jitter.
    pub fn tick(&mut self) {
        for led in &mut self.leds {
            led.update_tick();
        }
    }

    /// Applies a command to the controller or one of its members.
    pub fn handle_command(&mut self, command: ControllerCommand) {
        match command {
            ControllerCommand::StartIndication => self.start_indication_pattern(),
            ControllerCommand::StopIndication => self.stop_indication_pattern(),
            ControllerCommand::EnterSilentMode => self.enter_silent_mode(),
            ControllerCommand::ExitSilentMode => self.exit_silent_mode(),
            ControllerCommand::Led(LedCommand { role, action }) => {
                let led = self.led_mut(role);
                match action {
                    LedAction::TurnOn => led.turn_on(),
                    LedAction::TurnOff => led.turn_off(),
                    LedAction::Blink(pattern) => led.blink(pattern),
                    LedAction::SetSilent => led.set_silent(),
                    LedAction::ClearSilent => led.clear_silent(),
                }
            }
        }
    }

    /// Runs the tick loop forever.
    ///
    /// Each iteration drains `commands` (any queue the host wired up; see
    /// [`crate::command`]), advances every member by one tick and then waits
    /// for the next tick boundary. Because commands are only ever applied
    /// here, all LED state stays confined to the calling thread and changes
    /// posted from other contexts take effect on the next tick.
    ///
    /// There is no shutdown path; "stop indication" is a state change, not a
    /// loop teardown.
    pub fn run_forever<T: TickSource>(
        &mut self,
        tick_source: &mut T,
        mut commands: impl FnMut() -> Option<ControllerCommand>,
    ) -> ! {
        loop {
            while let Some(command) = commands() {
                self.handle_command(command);
            }

            self.tick();
            tick_source.wait_for_tick();
        }
    }

    /// Returns a reference to the member with the given role.
    pub fn led(&self, role: LedRole) -> &LedBlinker<O> {
        &self.leds[role.index()]
    }

    /// Returns a mutable reference to the member with the given role.
    pub fn led_mut(&mut self, role: LedRole) -> &mut LedBlinker<O> {
        &mut self.leds[role.index()]
    }
}
