// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Core verification machinery for the overdue timeout-assertion library.
//!
//! This crate holds the non-panicking building blocks:
//!
//! - [`Clock`], [`MonotonicClock`] and [`ManualClock`] — time sources, with a
//!   manually advanced one for deterministic tests
//! - [`ToleranceWindow`] and [`TIMEOUT_SLACK`] — the accepted elapsed-time
//!   interval around a configured timeout
//! - [`TimeoutExpectation`] — what the operation under test is expected to do
//! - [`verify_times_out`] and [`evaluate`] — measurement and classification,
//!   returning `Result` instead of panicking
//!
//! The ergonomic panicking assertions live in the `overdue` umbrella crate;
//! test code normally uses those. Reach for this crate directly when an
//! injected clock or a non-panicking result is needed.
//!
//! # Examples
//!
//! ```
//! use overdue_core::{verify_times_out, ManualClock, TimeoutExpectation};
//! use overdue_error::TimeoutError;
//! use std::time::Duration;
//!
//! let clock = ManualClock::new();
//! let expectation = TimeoutExpectation::default(); // unknown timeout, 1 s
//!
//! let op_clock = clock.clone();
//! let elapsed = verify_times_out(&clock, &expectation, || {
//!     op_clock.advance(Duration::from_secs(1));
//!     Err::<(), _>(TimeoutError::Unknown)
//! })
//! .unwrap();
//!
//! assert_eq!(elapsed, Duration::from_secs(1));
//! ```

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
pub mod clock;
pub mod expectation;
pub mod verify;
pub mod window;

pub use self::clock::{Clock, ManualClock, MonotonicClock};
pub use self::expectation::{TimeoutExpectation, DEFAULT_TIMEOUT};
pub use self::verify::{evaluate, verify_times_out};
pub use self::window::{ToleranceWindow, TIMEOUT_SLACK};
