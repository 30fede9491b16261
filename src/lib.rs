#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`BlinkPattern`**: One blink configuration with on/off periods, cycle count and start delay
//! - **`BlinkCount`**: How many cycles to run (`Finite(n)` or `Infinite`)
//! - **`LedBlinker`**: Drives a single LED through solid states and blink sequences
//! - **`LedOutput`**: Trait to implement for your LED hardware
//! - **`LedController`**: The fixed four-LED board set with the staggered indication pattern
//! - **`LedRole`**: Symbolic name of a board LED (`Orange`, `Green`, `Red`, `Blue`)
//! - **`TickSource`**: Trait to implement for your tick timing
//! - **`ControllerCommand`**: Commands posted from other contexts into the tick loop
//!
//! All durations are tick counts of the fixed-cadence update loop; with the
//! nominal [`TICK_PERIOD_MS`] of 1 ms a tick is a millisecond.

pub mod tick;
pub mod types;
pub mod blinker;
pub mod command;
pub mod controller;

pub use blinker::{LedBlinker, LedError, LedMode, LedOutput, PinState};
pub use command::{ControllerCommand, LedAction, LedCommand};
pub use controller::{ControllerError, LedController, LedRole, INDICATION_SLOT_TICKS};
pub use tick::TickSource;
pub use types::{BlinkCount, BlinkPattern};

/// Nominal period of one tick in milliseconds.
pub const TICK_PERIOD_MS: u32 = 1;
