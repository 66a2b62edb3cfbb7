// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Timeout assertions and fixture endpoints for test suites.
//!
//! `overdue` verifies two things about an operation at once: that it fails
//! with an expected timeout-error kind, and that it takes at least the
//! configured timeout (and at most the timeout plus a fixed slack) to do so.
//! It also ships the literal endpoints such tests are usually pointed at: a
//! non-routable address for provoking connect timeouts and a loopback
//! address for read timeouts, together with a listener that accepts
//! connections and never answers.
//!
//! # Examples
//!
//! Asserting that an operation times out with the defaults (an unknown
//! timeout after one second):
//!
//! ```
//! use overdue::{assert_times_out, TimeoutExpectation, TimeoutError};
//! use std::time::Duration;
//!
//! let expectation = TimeoutExpectation::default();
//! assert_times_out(&expectation.with_timeout(Duration::ZERO), || {
//!     Err::<(), _>(TimeoutError::Unknown)
//! });
//! ```
//!
//! Driving a read timeout against a listener that never responds:
//!
//! ```no_run
//! use overdue::{assert_times_out_async, SilentListener, TimeoutError, TimeoutExpectation, TimeoutKind};
//! use std::time::Duration;
//! use tokio::io::AsyncReadExt;
//! use tokio::net::TcpStream;
//!
//! # #[tokio::main]
//! # async fn main() -> anyhow::Result<()> {
//! let listener = SilentListener::bind().await?;
//! let addr = listener.local_addr();
//!
//! let expectation = TimeoutExpectation::kind(TimeoutKind::Read)
//!     .with_timeout(Duration::from_secs(1));
//!
//! assert_times_out_async(&expectation, async {
//!     let mut stream = TcpStream::connect(addr).await.map_err(TimeoutError::foreign)?;
//!     let mut buf = [0u8; 1];
//!     match tokio::time::timeout(Duration::from_secs(1), stream.read(&mut buf)).await {
//!         Ok(_) => Ok(()),
//!         Err(_) => Err(TimeoutError::read(addr.to_string())),
//!     }
//! })
//! .await;
//! # Ok(())
//! # }
//! ```
//!
//! # Module Organization
//!
//! - `assert` - panicking assertion wrappers for test bodies
//! - `endpoints` - fixture host/port/URL accessors
//! - `listener` - loopback listener that accepts and never responds
//!
//! The non-panicking machinery (clocks, tolerance window, verification)
//! lives in `overdue-core` and is re-exported here.

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
pub mod assert;
pub mod endpoints;
pub mod listener;

pub use self::assert::{assert_times_out, assert_times_out_async};
pub use self::listener::SilentListener;
pub use overdue_core::{
    evaluate, verify_times_out, Clock, ManualClock, MonotonicClock, TimeoutExpectation,
    ToleranceWindow, DEFAULT_TIMEOUT, TIMEOUT_SLACK,
};
pub use overdue_error::{AssertionError, TimeoutError, TimeoutKind};
