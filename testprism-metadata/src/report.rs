// Copyright (c) The testprism Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::errors::ExecutionStatusParseError;
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// A test report as produced by a parser backend and served to the dashboard.
///
/// Reports are immutable once loaded: the pipeline in `testprism-core` never
/// mutates its input and always produces fresh view models.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestReport {
    /// The report format version.
    pub version: u32,

    /// The time at which the report was generated, including the offset from
    /// UTC.
    pub date: DateTime<FixedOffset>,

    /// All tests in the report.
    pub tests: Vec<Test>,
}

/// A named, path-addressed test with a history of executions.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Test {
    /// The display name of the test.
    pub name: String,

    /// A slash-delimited hierarchy key, e.g. `src/auth/LoginComponent`.
    pub path: String,

    /// Optional tags attached to the test.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,

    /// Recorded executions of this test, in report order. The "current"
    /// execution is the one with the greatest timestamp, not necessarily the
    /// last element.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub executions: Vec<TestExecution>,

    /// Denormalized status of the most recent execution.
    ///
    /// Older report payloads carry this pair instead of a full execution
    /// history. `testprism_core::execution::current_execution` falls back to
    /// these fields when `executions` is empty.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_execution_type: Option<ExecutionStatus>,

    /// Denormalized duration of the most recent execution, in milliseconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_ms: Option<u64>,
}

impl Test {
    /// Creates a new test with the given name and path, and no executions.
    pub fn new(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            tags: None,
            executions: Vec::new(),
            last_execution_type: None,
            duration_ms: None,
        }
    }
}

/// One recorded run of a [`Test`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestExecution {
    /// The time at which the execution was recorded.
    pub timestamp: DateTime<FixedOffset>,

    /// The outcome of the execution.
    pub status: ExecutionStatus,

    /// How long the execution took, in milliseconds.
    pub duration_ms: u64,
}

/// The outcome of a single test execution.
///
/// Serialized as `SUCCESS`/`FAILURE`/`SKIPPED`/`ERROR`. The legacy alias set
/// `PASSED`/`FAILED` is accepted on input and normalized to the canonical
/// names on output.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
pub enum ExecutionStatus {
    /// The test passed.
    #[serde(rename = "SUCCESS", alias = "PASSED")]
    Success,

    /// The test ran to completion and failed.
    #[serde(rename = "FAILURE", alias = "FAILED")]
    Failure,

    /// The test was skipped.
    #[serde(rename = "SKIPPED")]
    Skipped,

    /// The test aborted with an unexpected error.
    #[serde(rename = "ERROR")]
    Error,
}

impl ExecutionStatus {
    /// All statuses, in the order the dashboard displays them. This is a
    /// hardcoded total order, not alphabetical.
    pub const ALL: [ExecutionStatus; 4] = [
        ExecutionStatus::Success,
        ExecutionStatus::Failure,
        ExecutionStatus::Skipped,
        ExecutionStatus::Error,
    ];

    /// Returns the canonical wire name of this status.
    pub fn name(self) -> &'static str {
        match self {
            ExecutionStatus::Success => "SUCCESS",
            ExecutionStatus::Failure => "FAILURE",
            ExecutionStatus::Skipped => "SKIPPED",
            ExecutionStatus::Error => "ERROR",
        }
    }

    /// Returns the canonical string values of all statuses.
    pub fn variants() -> Vec<&'static str> {
        Self::ALL.iter().map(|status| status.name()).collect()
    }
}

impl fmt::Display for ExecutionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ExecutionStatus {
    type Err = ExecutionStatusParseError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input.to_ascii_uppercase().as_str() {
            "SUCCESS" | "PASSED" => Ok(ExecutionStatus::Success),
            "FAILURE" | "FAILED" => Ok(ExecutionStatus::Failure),
            "SKIPPED" => Ok(ExecutionStatus::Skipped),
            "ERROR" => Ok(ExecutionStatus::Error),
            _ => Err(ExecutionStatusParseError::new(input)),
        }
    }
}

/// A status → color mapping supplied by the rendering theme.
///
/// The defaults are the dashboard's standard palette.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct StatusColors {
    /// Color for [`ExecutionStatus::Success`].
    pub success: String,

    /// Color for [`ExecutionStatus::Failure`].
    pub failure: String,

    /// Color for [`ExecutionStatus::Skipped`].
    pub skipped: String,

    /// Color for [`ExecutionStatus::Error`].
    pub error: String,
}

impl StatusColors {
    /// Returns the color for the given status.
    pub fn get(&self, status: ExecutionStatus) -> &str {
        match status {
            ExecutionStatus::Success => &self.success,
            ExecutionStatus::Failure => &self.failure,
            ExecutionStatus::Skipped => &self.skipped,
            ExecutionStatus::Error => &self.error,
        }
    }
}

impl Default for StatusColors {
    fn default() -> Self {
        Self {
            success: "#4caf50".to_owned(),
            failure: "#f44336".to_owned(),
            skipped: "#9e9e9e".to_owned(),
            error: "#ff9800".to_owned(),
        }
    }
}
