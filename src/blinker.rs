//! Per-LED blink automaton with countdown state and tick-driven updates.
//!
//! Provides [`LedBlinker`] which drives a single LED output through solid
//! on/off states and configurable blink sequences. Also defines the
//! [`LedOutput`] trait for hardware abstraction.

use crate::types::{BlinkCount, BlinkPattern};

/// Initial state requested when configuring an output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinState {
    /// Output driven to its active level.
    Active,
    /// Output driven to its inactive level.
    Inactive,
}

/// Trait for abstracting an LED output.
///
/// Implement this for your LED hardware (GPIO, port expander, shift register,
/// etc.). The trait is agnostic to polarity and bus: "activate" means whatever
/// makes the LED visibly light up, and implementations with active-low wiring
/// handle the inversion internally.
///
/// Only configuration can fail. Once configured, `activate`, `deactivate` and
/// `toggle` are assumed infallible; handle hardware errors internally.
pub trait LedOutput {
    /// Configures the pin as an output driven to `initial`.
    ///
    /// # Errors
    /// Returns [`LedError::ConfigurationFailed`] if the output could not be
    /// set up (e.g. the underlying device is not ready).
    fn configure_as_output(&mut self, initial: PinState) -> Result<(), LedError>;

    /// Drives the output to its active level.
    fn activate(&mut self);

    /// Drives the output to its inactive level.
    fn deactivate(&mut self);

    /// Inverts the current output level.
    fn toggle(&mut self);
}

/// Errors that can occur while setting up an LED.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LedError {
    /// The output capability could not be configured.
    ///
    /// Non-retryable at this layer; the caller decides whether to retry or
    /// abort startup.
    ConfigurationFailed,
}

impl core::fmt::Display for LedError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            LedError::ConfigurationFailed => {
                write!(f, "failed to configure LED output")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for LedError {}

/// Operating mode of an LED.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LedMode {
    /// Solid on or off. Per-tick updates are no-ops.
    Solid,
    /// Blinking according to the loaded [`BlinkPattern`].
    Blink,
}

/// Live countdown state of a blink sequence.
///
/// Counters are non-negative and only ever count down within a phase; they
/// are reloaded from the pattern at phase boundaries and reset wholesale by
/// `blink`, `turn_on` and `turn_off`.
#[derive(Debug, Clone, Copy, Default)]
struct BlinkStatus {
    on_left: u32,
    off_left: u32,
    pending_left: u32,
    cycles_left: u32,
}

/// Drives a single LED through solid states and timed blink sequences.
///
/// The blinker owns one output and holds the blink configuration plus live
/// countdown state. It is designed to be updated at a fixed cadence (one call
/// to [`update_tick`] per tick, nominally every 1 ms) by a dedicated thread or
/// timer; every operation is synchronous and bounded.
///
/// In silent mode the countdown bookkeeping runs unchanged but activation
/// edges drive the output inactive instead of active. Deactivation edges are
/// never suppressed, so an LED leaving silent mode rejoins visible blinking
/// mid-cycle without a stale active state.
///
/// [`update_tick`]: LedBlinker::update_tick
pub struct LedBlinker<O: LedOutput> {
    output: O,
    mode: LedMode,
    config: BlinkPattern,
    status: BlinkStatus,
    silent: bool,
}

impl<O: LedOutput> LedBlinker<O> {
    /// Creates a new blinker in solid mode, bound to the given output.
    ///
    /// The output is not touched until [`init`](LedBlinker::init) configures
    /// it.
    pub fn new(output: O) -> Self {
        Self {
            output,
            mode: LedMode::Solid,
            config: BlinkPattern::new(0, 0).cycles(BlinkCount::Finite(0)),
            status: BlinkStatus::default(),
            silent: false,
        }
    }

    /// Configures the output as an inactive output pin.
    ///
    /// # Errors
    /// Propagates [`LedError::ConfigurationFailed`] from the output.
    pub fn init(&mut self) -> Result<(), LedError> {
        self.output.configure_as_output(PinState::Inactive)
    }

    /// Sets the LED to solid on.
    ///
    /// Cancels any in-progress blink sequence unconditionally.
    pub fn turn_on(&mut self) {
        self.mode = LedMode::Solid;
        self.reset_blinking();
        self.output.activate();
    }

    /// Sets the LED to solid off.
    ///
    /// Cancels any in-progress blink sequence unconditionally.
    pub fn turn_off(&mut self) {
        self.mode = LedMode::Solid;
        self.reset_blinking();
        self.output.deactivate();
    }

    /// Starts a blink sequence with the given pattern.
    ///
    /// The output is deactivated immediately, then the configuration and
    /// countdown state are loaded from the pattern. If there is no pending
    /// delay and the cycle count is not `Finite(0)`, the first "on" phase
    /// starts right away; otherwise the output stays inactive until the
    /// pending delay elapses.
    pub fn blink(&mut self, pattern: BlinkPattern) {
        self.output.deactivate();

        self.mode = LedMode::Blink;
        self.config = pattern;

        self.status.on_left = pattern.on_ticks;
        self.status.off_left = pattern.off_ticks;
        self.status.pending_left = pattern.pending_ticks;
        self.status.cycles_left = match pattern.cycles {
            BlinkCount::Finite(count) => count,
            BlinkCount::Infinite => 0,
        };

        if pattern.pending_ticks == 0 && pattern.cycles != BlinkCount::Finite(0) {
            self.output.activate();
        }
    }

    /// Enables silent mode.
    ///
    /// Ignored unless the LED is blinking. Counters are not altered; changes
    /// show at the next activation edge.
    pub fn set_silent(&mut self) {
        if self.mode != LedMode::Blink {
            return;
        }

        self.silent = true;
    }

    /// Disables silent mode.
    ///
    /// Ignored unless the LED is blinking. The LED resumes visible blinking
    /// from its current position in the sequence.
    pub fn clear_silent(&mut self) {
        if self.mode != LedMode::Blink {
            return;
        }

        self.silent = false;
    }

    /// Advances the blink sequence by one tick.
    ///
    /// Must be called at a fixed cadence, nominally every 1 ms. No-op in
    /// solid mode.
    pub fn update_tick(&mut self) {
        if self.mode != LedMode::Blink {
            return;
        }

        // Pending start delay holds off all phase processing.
        if self.status.pending_left != 0 {
            if countdown(&mut self.status.pending_left) {
                self.drive_active();
            }

            return;
        }

        // ON phase
        if countdown(&mut self.status.on_left) {
            self.output.deactivate();

            if self.cycles_expired() {
                return;
            }

            self.status.off_left = self.config.off_ticks;
        }

        // OFF phase
        if countdown(&mut self.status.off_left) {
            self.drive_active();
            self.status.on_left = self.config.on_ticks;
        }
    }

    /// Returns the current operating mode.
    pub fn mode(&self) -> LedMode {
        self.mode
    }

    /// Returns true if silent mode is active.
    pub fn is_silent(&self) -> bool {
        self.silent
    }

    /// Returns a reference to the underlying output.
    pub fn output(&self) -> &O {
        &self.output
    }

    /// Returns a mutable reference to the underlying output.
    ///
    /// Intended for host-side use of the output outside a blink sequence,
    /// e.g. [`LedOutput::toggle`] on a solid LED.
    pub fn output_mut(&mut self) -> &mut O {
        &mut self.output
    }

    /// Performs an activation edge, suppressed to a deactivation in silent
    /// mode. Deactivation edges never go through here.
    fn drive_active(&mut self) {
        if self.silent {
            self.output.deactivate();
        } else {
            self.output.activate();
        }
    }

    /// Counts down the cycle counter at the end of an "on" phase.
    ///
    /// Returns true once a bounded count expires. An infinite count is never
    /// checked, and a counter already at zero never expires.
    fn cycles_expired(&mut self) -> bool {
        match self.config.cycles {
            BlinkCount::Infinite => false,
            BlinkCount::Finite(_) => countdown(&mut self.status.cycles_left),
        }
    }

    fn reset_blinking(&mut self) {
        self.config = BlinkPattern::new(0, 0).cycles(BlinkCount::Finite(0));
        self.status = BlinkStatus::default();
    }
}

/// Decrements a counter and reports the zero crossing.
///
/// A counter that is already zero is never decremented and never reports a
/// crossing. This is what freezes a phase configured with zero duration, and
/// it must hold for every counter in the automaton.
fn countdown(counter: &mut u32) -> bool {
    if *counter != 0 {
        *counter -= 1;

        if *counter == 0 {
            return true;
        }
    }

    false
}
