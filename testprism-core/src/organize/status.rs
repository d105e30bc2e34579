// Copyright (c) The testprism Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::{
    execution::current_execution,
    organize::{
        TreeOrganizationStrategy,
        builder::{NodeId, TreeBuilder},
    },
    tree::TestTreeNode,
};
use indexmap::IndexMap;
use testprism_metadata::{ExecutionStatus, Test};

/// Organizes tests into one bucket per current execution status.
///
/// Only statuses with at least one member get a group node — empty buckets
/// are omitted from the output, by contract. Roots are ordered by the fixed
/// `SUCCESS, FAILURE, SKIPPED, ERROR` total order; within a bucket, leaves
/// keep original input order. Tests without a resolvable execution are
/// silently excluded.
#[derive(Clone, Debug, Default)]
pub struct ExecutionTypeOrganizationStrategy {}

impl ExecutionTypeOrganizationStrategy {
    /// Creates the status strategy.
    pub fn new() -> Self {
        Self {}
    }
}

impl TreeOrganizationStrategy for ExecutionTypeOrganizationStrategy {
    fn name(&self) -> &'static str {
        "status"
    }

    fn build_tree<'a>(&self, tests: &[&'a Test]) -> Vec<TestTreeNode<'a>> {
        let mut builder = TreeBuilder::new();
        let mut buckets: IndexMap<ExecutionStatus, NodeId> = IndexMap::new();

        for &test in tests {
            let Some(resolved) = current_execution(test) else {
                continue;
            };
            let bucket = *buckets.entry(resolved.status).or_insert_with(|| {
                builder.add_group(resolved.status.name(), resolved.status.name(), None)
            });
            builder.add_leaf(test, Some(bucket));
        }

        builder.sort_roots_by_name_key(|name| {
            ExecutionStatus::ALL
                .iter()
                .position(|status| status.name() == name)
                .unwrap_or(ExecutionStatus::ALL.len())
        });
        builder.finish()
    }
}
