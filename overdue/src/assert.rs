// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use overdue_core::{evaluate, verify_times_out, MonotonicClock, TimeoutExpectation};
use overdue_error::TimeoutError;
use std::future::Future;
use std::time::Duration;

/// Asserts that a blocking operation times out as expected.
///
/// Invokes `op` on the calling thread, measures its wall-clock elapsed time
/// with a monotonic clock, and panics unless the operation failed with the
/// expected error kind inside the tolerance window
/// `[timeout, timeout + TIMEOUT_SLACK]`. Returns the measured elapsed time
/// on success.
///
/// # Panics
///
/// Panics with the assertion failure's message when the operation succeeds,
/// fails with a different error kind, or lands outside the window.
///
/// # Examples
///
/// ```
/// use overdue::{assert_times_out, TimeoutError, TimeoutExpectation};
/// use std::time::Duration;
///
/// let expectation = TimeoutExpectation::default().with_timeout(Duration::ZERO);
/// assert_times_out(&expectation, || Err::<(), _>(TimeoutError::Unknown));
/// ```
pub fn assert_times_out<T, F>(expectation: &TimeoutExpectation, op: F) -> Duration
where
    F: FnOnce() -> Result<T, TimeoutError>,
{
    let clock = MonotonicClock::new();
    match verify_times_out(&clock, expectation, op) {
        Ok(elapsed) => elapsed,
        Err(failure) => panic!("Timeout assertion failed: {failure}"),
    }
}

/// Asserts that a future times out as expected.
///
/// Awaits `fut` on the caller's task and measures elapsed time with
/// [`tokio::time::Instant`], so tests running under `tokio::time::pause` can
/// advance time deterministically. Otherwise behaves exactly like
/// [`assert_times_out`].
///
/// # Panics
///
/// Panics with the assertion failure's message when the future resolves
/// successfully, fails with a different error kind, or lands outside the
/// window.
///
/// # Examples
///
/// ```
/// use overdue::{assert_times_out_async, TimeoutError, TimeoutExpectation};
/// use std::time::Duration;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// tokio::time::pause();
///
/// let expectation = TimeoutExpectation::default();
/// assert_times_out_async(&expectation, async {
///     tokio::time::sleep(Duration::from_secs(1)).await;
///     Err::<(), _>(TimeoutError::Unknown)
/// })
/// .await;
/// # }
/// ```
pub async fn assert_times_out_async<T, F>(expectation: &TimeoutExpectation, fut: F) -> Duration
where
    F: Future<Output = Result<T, TimeoutError>>,
{
    let started_at = tokio::time::Instant::now();
    let outcome = fut.await;
    let elapsed = started_at.elapsed();
    match evaluate(expectation, outcome, elapsed) {
        Ok(elapsed) => elapsed,
        Err(failure) => panic!("Timeout assertion failed: {failure}"),
    }
}
