// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use overdue_error::TimeoutKind;
use std::time::Duration;

/// Default timeout applied when callers do not configure one.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(1);

/// What the operation under test is expected to do.
///
/// An operation satisfies the expectation when it fails with an error of
/// `kind` after at least `timeout` has elapsed (and no more than `timeout`
/// plus the standard slack).
///
/// # Examples
///
/// ```
/// use overdue_core::TimeoutExpectation;
/// use overdue_error::TimeoutKind;
/// use std::time::Duration;
///
/// // Defaults: an unknown timeout after one second.
/// let default = TimeoutExpectation::default();
/// assert_eq!(default.kind, TimeoutKind::Unknown);
/// assert_eq!(default.timeout, Duration::from_secs(1));
///
/// // A connect timeout after five seconds.
/// let connect = TimeoutExpectation::kind(TimeoutKind::Connect)
///     .with_timeout(Duration::from_secs(5));
/// assert_eq!(connect.kind, TimeoutKind::Connect);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeoutExpectation {
    /// The error kind the operation must fail with
    pub kind: TimeoutKind,
    /// Minimum time the operation must take before failing
    pub timeout: Duration,
}

impl TimeoutExpectation {
    /// Expectation for the given kind with the default one-second timeout.
    #[must_use]
    pub const fn kind(kind: TimeoutKind) -> Self {
        Self {
            kind,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Replaces the timeout, keeping the kind.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl Default for TimeoutExpectation {
    fn default() -> Self {
        Self::kind(TimeoutKind::Unknown)
    }
}
