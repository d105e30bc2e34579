// Copyright (c) The testprism Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Resolving the "current" execution of a test.
//!
//! Every status-dependent strategy in this crate goes through
//! [`current_execution`] rather than poking at the execution history
//! directly.

use serde::Serialize;
use testprism_metadata::{ExecutionStatus, Test, TestExecution};

/// Returns the execution with the greatest timestamp, or `None` if the test
/// has no executions.
///
/// Ties are deterministic: the first equal-timestamp entry in report order
/// wins.
pub fn last_execution(test: &Test) -> Option<&TestExecution> {
    test.executions
        .iter()
        .reduce(|latest, execution| {
            if execution.timestamp > latest.timestamp {
                execution
            } else {
                latest
            }
        })
}

/// The resolved status and duration of a test's most recent run.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedExecution {
    /// The status of the most recent execution.
    pub status: ExecutionStatus,

    /// The duration of the most recent execution, in milliseconds.
    pub duration_ms: u64,
}

/// Resolves the current status and duration of a test.
///
/// The execution history takes precedence; tests carrying only the legacy
/// denormalized pair (`lastExecutionType`/`durationMs`) resolve through it
/// instead. Tests with neither resolve to `None` and are excluded from
/// status buckets and aggregations.
pub fn current_execution(test: &Test) -> Option<ResolvedExecution> {
    if let Some(execution) = last_execution(test) {
        return Some(ResolvedExecution {
            status: execution.status,
            duration_ms: execution.duration_ms,
        });
    }

    test.last_execution_type.map(|status| ResolvedExecution {
        status,
        duration_ms: test.duration_ms.unwrap_or(0),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{execution, test_with_executions};
    use pretty_assertions::assert_eq;

    #[test]
    fn no_executions_resolves_to_none() {
        let test = Test::new("t", "a/t");
        assert_eq!(last_execution(&test), None);
        assert_eq!(current_execution(&test), None);
    }

    #[test]
    fn latest_timestamp_wins_regardless_of_order() {
        let test = test_with_executions(
            "t",
            "a/t",
            vec![
                execution("2024-01-03T00:00:00Z", ExecutionStatus::Failure, 30),
                execution("2024-01-01T00:00:00Z", ExecutionStatus::Success, 10),
                execution("2024-01-02T00:00:00Z", ExecutionStatus::Skipped, 20),
            ],
        );
        let latest = last_execution(&test).expect("has executions");
        assert_eq!(latest.status, ExecutionStatus::Failure);
        assert_eq!(latest.duration_ms, 30);
    }

    #[test]
    fn equal_timestamps_resolve_to_first_in_report_order() {
        let test = test_with_executions(
            "t",
            "a/t",
            vec![
                execution("2024-01-01T00:00:00Z", ExecutionStatus::Success, 10),
                execution("2024-01-01T00:00:00Z", ExecutionStatus::Error, 20),
            ],
        );
        let latest = last_execution(&test).expect("has executions");
        assert_eq!(latest.status, ExecutionStatus::Success);
    }

    #[test]
    fn denormalized_fields_are_a_fallback() {
        let mut test = Test::new("t", "a/t");
        test.last_execution_type = Some(ExecutionStatus::Skipped);
        test.duration_ms = Some(420);
        assert_eq!(
            current_execution(&test),
            Some(ResolvedExecution {
                status: ExecutionStatus::Skipped,
                duration_ms: 420,
            })
        );

        // The history takes precedence over the denormalized pair.
        test.executions = vec![execution("2024-01-01T00:00:00Z", ExecutionStatus::Failure, 7)];
        assert_eq!(
            current_execution(&test),
            Some(ResolvedExecution {
                status: ExecutionStatus::Failure,
                duration_ms: 7,
            })
        );
    }

    #[test]
    fn denormalized_status_without_duration_resolves_to_zero() {
        let mut test = Test::new("t", "a/t");
        test.last_execution_type = Some(ExecutionStatus::Success);
        assert_eq!(
            current_execution(&test),
            Some(ResolvedExecution {
                status: ExecutionStatus::Success,
                duration_ms: 0,
            })
        );
    }
}
