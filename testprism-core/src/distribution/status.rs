// Copyright (c) The testprism Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::{
    distribution::{DistributionSlice, DistributionStrategy},
    execution::current_execution,
    tree::StatusCounts,
};
use testprism_metadata::{ExecutionStatus, StatusColors, Test};

/// Counts tests by current execution status, one slice per status.
///
/// Slices follow the fixed `SUCCESS, FAILURE, SKIPPED, ERROR` order and
/// zero-count slices are omitted. Tests without a resolvable execution are
/// not counted.
#[derive(Clone, Debug, Default)]
pub struct ExecutionTypeDistributionStrategy {
    colors: StatusColors,
}

impl ExecutionTypeDistributionStrategy {
    /// Creates the strategy with a theme color mapping.
    pub fn new(colors: StatusColors) -> Self {
        Self { colors }
    }
}

impl DistributionStrategy for ExecutionTypeDistributionStrategy {
    fn distribution(&self, tests: &[&Test]) -> Vec<DistributionSlice> {
        let mut counts = StatusCounts::default();
        for &test in tests {
            if let Some(resolved) = current_execution(test) {
                counts += StatusCounts::of(resolved.status);
            }
        }

        ExecutionStatus::ALL
            .iter()
            .map(|&status| DistributionSlice {
                label: status.name().to_owned(),
                count: counts.get(status),
                color: self.colors.get(status).to_owned(),
            })
            .filter(|slice| slice.count > 0)
            .collect()
    }
}
