// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use parking_lot::Mutex;
use std::fmt::Debug;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Source of monotonic time readings.
///
/// A reading is the duration since the clock's own origin; only differences
/// between two readings from the same clock are meaningful. Abstracting the
/// source lets verification code run against real time in test suites and
/// against [`ManualClock`] when the tests need to control elapsed time.
pub trait Clock: Debug {
    /// Returns the current reading.
    fn now(&self) -> Duration;
}

/// Clock backed by [`std::time::Instant`].
///
/// The origin is the moment the clock was created.
#[derive(Debug, Clone)]
pub struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
    /// Creates a clock whose origin is now.
    #[must_use]
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}

/// Manually advanced clock for deterministic tests.
///
/// Clones share the same reading, so the operation under test can advance
/// the clock that the verifier measures with:
///
/// ```
/// use overdue_core::{Clock, ManualClock};
/// use std::time::Duration;
///
/// let clock = ManualClock::new();
/// let handle = clock.clone();
///
/// handle.advance(Duration::from_secs(3));
/// assert_eq!(clock.now(), Duration::from_secs(3));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    reading: Arc<Mutex<Duration>>,
}

impl ManualClock {
    /// Creates a clock reading zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Moves the reading forward by `step`.
    pub fn advance(&self, step: Duration) {
        let mut reading = self.reading.lock();
        *reading += step;
    }

    /// Sets the reading to an absolute value.
    pub fn set(&self, reading: Duration) {
        *self.reading.lock() = reading;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Duration {
        *self.reading.lock()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_monotonic_clock_advances() {
        let clock = MonotonicClock::new();
        let first = clock.now();
        let second = clock.now();
        assert!(second >= first);
    }

    #[test]
    fn test_manual_clock_starts_at_zero() {
        let clock = ManualClock::new();
        assert_eq!(clock.now(), Duration::ZERO);
    }

    #[test]
    fn test_manual_clock_clones_share_reading() {
        let clock = ManualClock::new();
        let handle = clock.clone();

        handle.advance(Duration::from_millis(250));
        handle.advance(Duration::from_millis(750));

        assert_eq!(clock.now(), Duration::from_secs(1));
    }

    #[test]
    fn test_manual_clock_set_overrides() {
        let clock = ManualClock::new();
        clock.advance(Duration::from_secs(5));
        clock.set(Duration::from_secs(2));
        assert_eq!(clock.now(), Duration::from_secs(2));
    }
}
