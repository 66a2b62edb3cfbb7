#![allow(clippy::multiple_crate_versions)]
//! Error types for the overdue timeout-assertion library
//!
//! This crate defines two families of errors:
//!
//! - [`TimeoutError`]: the error an operation under test is expected to fail
//!   with. Operations handed to the assertion helpers return
//!   `Result<T, TimeoutError>`, and the helpers match the error's
//!   [`TimeoutKind`] against the expected one.
//! - [`AssertionError`]: how the assertion itself fails — the operation
//!   succeeded, failed with the wrong kind, or failed outside the tolerated
//!   elapsed-time window.
//!
//! # Examples
//!
//! ```
//! use overdue_error::{Result, TimeoutError, TimeoutKind};
//!
//! fn connect_somewhere() -> Result<()> {
//!     Err(TimeoutError::connect("10.255.255.1:80"))
//! }
//!
//! let err = connect_somewhere().unwrap_err();
//! assert_eq!(err.kind(), TimeoutKind::Connect);
//! ```

use std::time::Duration;

/// The error an operation under test fails with when it times out
///
/// Variants identify where the timeout occurred. Assertion helpers compare
/// the variant's [`TimeoutKind`] against an expected kind rather than the
/// full error value, so endpoint details never affect matching.
#[derive(Debug, thiserror::Error)]
pub enum TimeoutError {
    /// Timeout of unspecified origin
    ///
    /// The default expected kind when callers do not name one.
    #[error("Unknown timeout")]
    Unknown,

    /// Connection establishment timed out
    #[error("Connect timed out: {endpoint}")]
    Connect {
        /// The endpoint the connection attempt targeted
        endpoint: String,
    },

    /// Reading a response timed out
    #[error("Read timed out: {endpoint}")]
    Read {
        /// The endpoint the read targeted
        endpoint: String,
    },

    /// Timeout surfaced by another library
    ///
    /// Wraps timeout errors produced outside this crate (for example a
    /// runtime's elapsed error) so they can flow through the same matching.
    #[error("Foreign timeout: {0}")]
    Foreign(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl TimeoutError {
    /// Create a connect timeout for the given endpoint
    pub fn connect(endpoint: impl Into<String>) -> Self {
        Self::Connect {
            endpoint: endpoint.into(),
        }
    }

    /// Create a read timeout for the given endpoint
    pub fn read(endpoint: impl Into<String>) -> Self {
        Self::Read {
            endpoint: endpoint.into(),
        }
    }

    /// Wrap a timeout error produced by another library
    pub fn foreign(error: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Foreign(Box::new(error))
    }

    /// The kind of this timeout, used for expectation matching
    #[must_use]
    pub const fn kind(&self) -> TimeoutKind {
        match self {
            Self::Unknown => TimeoutKind::Unknown,
            Self::Connect { .. } => TimeoutKind::Connect,
            Self::Read { .. } => TimeoutKind::Read,
            Self::Foreign(_) => TimeoutKind::Foreign,
        }
    }
}

/// Fieldless classification of [`TimeoutError`] variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeoutKind {
    /// Timeout of unspecified origin
    Unknown,
    /// Connection establishment timed out
    Connect,
    /// Reading a response timed out
    Read,
    /// Timeout surfaced by another library
    Foreign,
}

impl std::fmt::Display for TimeoutKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Unknown => "unknown timeout",
            Self::Connect => "connect timeout",
            Self::Read => "read timeout",
            Self::Foreign => "foreign timeout",
        };
        f.write_str(name)
    }
}

/// How a timeout assertion fails
///
/// Produced by the non-panicking verification functions; the panicking
/// `assert_*` wrappers turn these into test failures via their `Display`
/// output.
#[derive(Debug, thiserror::Error)]
pub enum AssertionError {
    /// The operation completed successfully instead of timing out
    #[error("Expected a {expected} but the operation completed without error")]
    CompletedWithoutError {
        /// The kind that was expected
        expected: TimeoutKind,
    },

    /// The operation failed, but not with the expected kind
    #[error("Expected a {expected} but the operation failed with: {actual}")]
    WrongErrorKind {
        /// The kind that was expected
        expected: TimeoutKind,
        /// The error the operation actually produced
        #[source]
        actual: TimeoutError,
    },

    /// The operation timed out as expected, but outside the tolerance window
    #[error("Elapsed time {elapsed:?} outside the window [{min:?}, {max:?}]")]
    OutsideWindow {
        /// Measured elapsed time
        elapsed: Duration,
        /// Lower bound of the window (the configured timeout)
        min: Duration,
        /// Upper bound of the window (timeout plus slack)
        max: Duration,
    },
}

/// Convenience alias for operations under test
pub type Result<T> = std::result::Result<T, TimeoutError>;
