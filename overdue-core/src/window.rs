// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::time::Duration;

/// Upper slack tolerated above the configured timeout.
///
/// Real blocking timeouts overshoot their deadline by scheduler and OS
/// jitter; measurements up to this much past the timeout still pass.
/// Empirical value, carried as a constant rather than derived.
pub const TIMEOUT_SLACK: Duration = Duration::from_secs(2);

/// Closed elapsed-time interval an assertion accepts.
///
/// An elapsed measurement passes when `min <= elapsed <= max`; both bounds
/// are inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToleranceWindow {
    min: Duration,
    max: Duration,
}

impl ToleranceWindow {
    /// Window around `timeout` with the standard [`TIMEOUT_SLACK`] above it.
    #[must_use]
    pub const fn around(timeout: Duration) -> Self {
        Self {
            min: timeout,
            max: timeout.saturating_add(TIMEOUT_SLACK),
        }
    }

    /// Window around `timeout` with a caller-chosen slack.
    #[must_use]
    pub const fn with_slack(timeout: Duration, slack: Duration) -> Self {
        Self {
            min: timeout,
            max: timeout.saturating_add(slack),
        }
    }

    /// Lower bound (the configured timeout).
    #[must_use]
    pub const fn min(&self) -> Duration {
        self.min
    }

    /// Upper bound (timeout plus slack).
    #[must_use]
    pub const fn max(&self) -> Duration {
        self.max
    }

    /// Whether `elapsed` falls inside the closed interval.
    #[must_use]
    pub fn contains(&self, elapsed: Duration) -> bool {
        self.min <= elapsed && elapsed <= self.max
    }
}
