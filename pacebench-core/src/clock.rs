//! Wall-Clock Timing
//!
//! The runner reads time only through the [`Clock`] trait so that tests can
//! script sample durations or count clock reads.

use std::time::Duration;

/// Monotonic time source
pub trait Clock {
    /// Time elapsed since this clock's (arbitrary, fixed) origin
    fn now(&self) -> Duration;
}

impl<C: Clock + ?Sized> Clock for &C {
    #[inline(always)]
    fn now(&self) -> Duration {
        (**self).now()
    }
}

/// High-resolution monotonic clock backed by [`std::time::Instant`]
#[derive(Debug, Clone, Copy)]
pub struct MonotonicClock {
    origin: std::time::Instant,
}

impl MonotonicClock {
    /// Create a clock whose origin is the current instant
    pub fn new() -> Self {
        Self {
            origin: std::time::Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    #[inline(always)]
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}

/// Brackets one sample
pub struct Timer {
    start: Duration,
}

impl Timer {
    /// Start a new timer
    #[inline(always)]
    pub fn start<C: Clock>(clock: &C) -> Self {
        Self { start: clock.now() }
    }

    /// Stop the timer and return the elapsed duration
    #[inline(always)]
    pub fn stop<C: Clock>(&self, clock: &C) -> Duration {
        clock.now().saturating_sub(self.start)
    }
}

/// Convert a duration to fractional milliseconds
#[inline]
pub fn duration_to_ms(duration: Duration) -> f64 {
    duration.as_secs_f64() * 1000.0
}
