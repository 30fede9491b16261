//! Core types for blink configuration.

/// How many on/off cycles a blink sequence should run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlinkCount {
    /// Blink a specific number of times, then stay off.
    Finite(u32),

    /// Blink indefinitely.
    Infinite,
}

impl Default for BlinkCount {
    fn default() -> Self {
        BlinkCount::Infinite
    }
}

/// Configuration for one blink sequence.
///
/// All durations are in ticks of the driving update loop (nominally 1 ms).
/// The pattern is loaded into an LED with [`LedBlinker::blink`] and stays in
/// effect until the next `blink`, `turn_on` or `turn_off` call.
///
/// A phase configured with zero ticks never expires: its counter is never
/// decremented, so the automaton freezes in that phase. This is part of the
/// countdown contract, not an error.
///
/// [`LedBlinker::blink`]: crate::blinker::LedBlinker::blink
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlinkPattern {
    /// Length of the "on" phase in ticks.
    pub on_ticks: u32,

    /// Length of the "off" phase in ticks.
    pub off_ticks: u32,

    /// Number of on/off cycles to run.
    pub cycles: BlinkCount,

    /// Delay before the first activation, in ticks.
    pub pending_ticks: u32,
}

impl BlinkPattern {
    /// Creates a pattern that blinks indefinitely with no start delay.
    #[inline]
    pub fn new(on_ticks: u32, off_ticks: u32) -> Self {
        Self {
            on_ticks,
            off_ticks,
            cycles: BlinkCount::default(),
            pending_ticks: 0,
        }
    }

    /// Sets the number of cycles to run.
    ///
    /// Default is `BlinkCount::Infinite`.
    pub fn cycles(mut self, count: BlinkCount) -> Self {
        self.cycles = count;
        self
    }

    /// Sets the delay before the first activation.
    ///
    /// Used to stagger several LEDs running the same pattern into a chase.
    pub fn pending(mut self, ticks: u32) -> Self {
        self.pending_ticks = ticks;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_pattern_defaults_to_infinite_and_no_delay() {
        let pattern = BlinkPattern::new(200, 300);
        assert_eq!(pattern.on_ticks, 200);
        assert_eq!(pattern.off_ticks, 300);
        assert_eq!(pattern.cycles, BlinkCount::Infinite);
        assert_eq!(pattern.pending_ticks, 0);
    }

    #[test]
    fn combinators_override_defaults() {
        let pattern = BlinkPattern::new(100, 100)
            .cycles(BlinkCount::Finite(5))
            .pending(50);
        assert_eq!(pattern.cycles, BlinkCount::Finite(5));
        assert_eq!(pattern.pending_ticks, 50);
    }
}
