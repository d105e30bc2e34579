// Copyright (c) The testprism Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Shared fixtures for unit tests.

use chrono::DateTime;
use testprism_metadata::{ExecutionStatus, Test, TestExecution};

pub(crate) fn execution(
    timestamp: &str,
    status: ExecutionStatus,
    duration_ms: u64,
) -> TestExecution {
    TestExecution {
        timestamp: DateTime::parse_from_rfc3339(timestamp).expect("valid RFC 3339 timestamp"),
        status,
        duration_ms,
    }
}

pub(crate) fn test_with_executions(
    name: &str,
    path: &str,
    executions: Vec<TestExecution>,
) -> Test {
    Test {
        executions,
        ..Test::new(name, path)
    }
}

/// A test with a single execution, the common case in fixtures.
pub(crate) fn test_with_status(
    name: &str,
    path: &str,
    status: ExecutionStatus,
    duration_ms: u64,
) -> Test {
    test_with_executions(
        name,
        path,
        vec![execution("2024-01-01T00:00:00Z", status, duration_ms)],
    )
}

pub(crate) fn test_with_tags(name: &str, path: &str, tags: &[&str]) -> Test {
    Test {
        tags: Some(tags.iter().map(|tag| (*tag).to_owned()).collect()),
        ..test_with_status(name, path, ExecutionStatus::Success, 100)
    }
}
