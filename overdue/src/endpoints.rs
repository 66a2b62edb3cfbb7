// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Fixture endpoints for timeout tests.
//!
//! Two fixed targets, exposed as pure accessors:
//!
//! - the connect target is a non-routable address, so connection attempts
//!   hang until the system under test's connect timeout fires;
//! - the read target is a loopback endpoint, meant to be served by a local
//!   listener that accepts and never responds (see
//!   [`SilentListener`](crate::listener::SilentListener)).
//!
//! Every accessor returns the same literal on every call; there is no
//! configuration source behind them.

/// Host that connection attempts cannot reach (non-routable IPv4).
#[must_use]
pub const fn connect_host() -> &'static str {
    "10.255.255.1"
}

/// URL form of [`connect_host`].
#[must_use]
pub fn connect_url() -> String {
    format!("http://{}", connect_host())
}

/// Loopback host for read-timeout tests.
#[must_use]
pub const fn read_host() -> &'static str {
    "127.0.0.1"
}

/// Fixed port the local read listener is expected on.
#[must_use]
pub const fn read_port() -> u16 {
    4567
}

/// `host:port` form of the read endpoint.
#[must_use]
pub fn read_host_and_port() -> String {
    format!("{}:{}", read_host(), read_port())
}

/// URL form of the read endpoint.
#[must_use]
pub fn read_url() -> String {
    format!("http://{}", read_host_and_port())
}
