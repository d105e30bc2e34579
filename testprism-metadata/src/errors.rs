// Copyright (c) The testprism Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Errors produced by testprism-metadata.

use crate::report::ExecutionStatus;
use thiserror::Error;

/// Error returned while parsing an [`ExecutionStatus`] value from a string.
#[derive(Clone, Debug, Error)]
#[error(
    "unrecognized value for execution status: {input}\n(known values: {})",
    ExecutionStatus::variants().join(", ")
)]
pub struct ExecutionStatusParseError {
    input: String,
}

impl ExecutionStatusParseError {
    pub(crate) fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
        }
    }
}
