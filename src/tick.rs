//! Tick abstraction for platform-agnostic update cadence.

/// Trait for abstracting the fixed-cadence tick of the driver loop.
///
/// Implement this with whatever your platform provides: a sleep until the
/// next millisecond boundary, a hardware timer flag, an RTOS delay. The
/// controller calls it once per loop iteration after updating all LEDs.
pub trait TickSource {
    /// Blocks until the next tick boundary.
    fn wait_for_tick(&mut self);
}
