// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::clock::Clock;
use crate::expectation::TimeoutExpectation;
use crate::window::ToleranceWindow;
use overdue_error::{AssertionError, TimeoutError};
use std::time::Duration;

/// Classifies the outcome of an already-measured operation.
///
/// Checks, in order: the operation failed at all, it failed with the
/// expected kind, and the measured `elapsed` falls inside the tolerance
/// window around the expected timeout. Returns the elapsed time on success
/// so callers can log or re-assert on it.
///
/// # Errors
///
/// - [`AssertionError::CompletedWithoutError`] if `outcome` is `Ok`
/// - [`AssertionError::WrongErrorKind`] if the error kind does not match
/// - [`AssertionError::OutsideWindow`] if `elapsed` misses the window
pub fn evaluate<T>(
    expectation: &TimeoutExpectation,
    outcome: Result<T, TimeoutError>,
    elapsed: Duration,
) -> Result<Duration, AssertionError> {
    let error = match outcome {
        Ok(_) => {
            return Err(AssertionError::CompletedWithoutError {
                expected: expectation.kind,
            })
        }
        Err(error) => error,
    };

    if error.kind() != expectation.kind {
        return Err(AssertionError::WrongErrorKind {
            expected: expectation.kind,
            actual: error,
        });
    }

    let window = ToleranceWindow::around(expectation.timeout);
    tracing::debug!(?elapsed, min = ?window.min(), max = ?window.max(), "measured timeout");

    if window.contains(elapsed) {
        Ok(elapsed)
    } else {
        Err(AssertionError::OutsideWindow {
            elapsed,
            min: window.min(),
            max: window.max(),
        })
    }
}

/// Measures a synchronous operation against `clock` and classifies it.
///
/// Takes a reading immediately before invoking `op`, another when it
/// returns, and hands the outcome to [`evaluate`]. The operation blocks the
/// calling thread for as long as it runs; any side effects are its own.
///
/// # Examples
///
/// ```
/// use overdue_core::{verify_times_out, ManualClock, TimeoutExpectation};
/// use overdue_error::TimeoutError;
/// use std::time::Duration;
///
/// let clock = ManualClock::new();
/// let op_clock = clock.clone();
///
/// let elapsed = verify_times_out(&clock, &TimeoutExpectation::default(), || {
///     op_clock.advance(Duration::from_secs(1));
///     Err::<(), _>(TimeoutError::Unknown)
/// })
/// .unwrap();
/// assert_eq!(elapsed, Duration::from_secs(1));
/// ```
///
/// # Errors
///
/// See [`evaluate`].
pub fn verify_times_out<T, F, C>(
    clock: &C,
    expectation: &TimeoutExpectation,
    op: F,
) -> Result<Duration, AssertionError>
where
    F: FnOnce() -> Result<T, TimeoutError>,
    C: Clock,
{
    let started_at = clock.now();
    let outcome = op();
    let elapsed = clock.now().saturating_sub(started_at);
    evaluate(expectation, outcome, elapsed)
}
