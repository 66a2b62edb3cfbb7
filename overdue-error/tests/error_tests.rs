// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use overdue_error::{AssertionError, Result, TimeoutError, TimeoutKind};
use std::io;
use std::time::Duration;

#[test]
fn test_error_display() {
    let err = TimeoutError::connect("10.255.255.1:80");
    assert_eq!(err.to_string(), "Connect timed out: 10.255.255.1:80");

    let err = TimeoutError::read("127.0.0.1:4567");
    assert_eq!(err.to_string(), "Read timed out: 127.0.0.1:4567");
}

#[test]
fn test_error_constructors() {
    let err = TimeoutError::connect("host:80");
    assert!(matches!(err, TimeoutError::Connect { .. }));

    let err = TimeoutError::read("host:80");
    assert!(matches!(err, TimeoutError::Read { .. }));

    let err = TimeoutError::foreign(io::Error::new(io::ErrorKind::TimedOut, "deadline elapsed"));
    assert!(matches!(err, TimeoutError::Foreign(_)));
}

#[test]
fn test_foreign_preserves_source() {
    let err = TimeoutError::foreign(io::Error::new(io::ErrorKind::TimedOut, "deadline elapsed"));
    let source = std::error::Error::source(&err).expect("foreign error keeps its source");
    assert!(source.to_string().contains("deadline elapsed"));
}

#[test]
fn test_kind_display() {
    assert_eq!(TimeoutKind::Unknown.to_string(), "unknown timeout");
    assert_eq!(TimeoutKind::Connect.to_string(), "connect timeout");
    assert_eq!(TimeoutKind::Read.to_string(), "read timeout");
    assert_eq!(TimeoutKind::Foreign.to_string(), "foreign timeout");
}

#[test]
fn test_assertion_error_completed_without_error() {
    let err = AssertionError::CompletedWithoutError {
        expected: TimeoutKind::Connect,
    };
    assert_eq!(
        err.to_string(),
        "Expected a connect timeout but the operation completed without error"
    );
}

#[test]
fn test_assertion_error_wrong_kind_reports_actual() {
    let err = AssertionError::WrongErrorKind {
        expected: TimeoutKind::Read,
        actual: TimeoutError::connect("10.255.255.1:80"),
    };
    let msg = err.to_string();
    assert!(msg.contains("Expected a read timeout"));
    assert!(msg.contains("Connect timed out: 10.255.255.1:80"));
}

#[test]
fn test_assertion_error_outside_window() {
    let err = AssertionError::OutsideWindow {
        elapsed: Duration::from_secs(4),
        min: Duration::from_secs(1),
        max: Duration::from_secs(3),
    };
    let msg = err.to_string();
    assert!(msg.contains("4s"));
    assert!(msg.contains("outside the window"));
}

#[test]
fn test_result_alias() {
    fn failing_operation() -> Result<()> {
        Err(TimeoutError::Unknown)
    }

    let err = failing_operation().unwrap_err();
    assert_eq!(err.kind(), TimeoutKind::Unknown);
}
