// Copyright (c) The testprism Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Organizing a flat test list into an annotated tree.
//!
//! An organization strategy decides the grouping axis (folder hierarchy,
//! execution status) and produces the root nodes of the tree, with
//! durations and per-status counts aggregated recursively over every group.
//! Strategies also provide the per-node icon and color lookup used by the
//! rendering layer.

mod builder;
mod folder;
mod status;

pub use folder::*;
pub use status::*;

use crate::{
    execution::current_execution,
    tree::{NodeIcon, TestTreeNode},
};
use indexmap::IndexMap;
use std::sync::Arc;
use testprism_metadata::{ExecutionStatus, StatusColors, Test};
use tracing::warn;

/// A pluggable tree organization strategy.
pub trait TreeOrganizationStrategy: Send + Sync {
    /// Returns the registry key and display identifier of this strategy.
    fn name(&self) -> &'static str;

    /// Builds the organized forest from the (already filtered) tests.
    /// Returns root nodes only; the full tree is reachable through
    /// [`TestTreeNode::children`].
    fn build_tree<'a>(&self, tests: &[&'a Test]) -> Vec<TestTreeNode<'a>>;

    /// Returns the icon token for a node: `folder` for groups, a
    /// status-specific token for leaves, `help` for leaves without a
    /// resolvable execution.
    fn icon(&self, node: &TestTreeNode<'_>) -> NodeIcon {
        let Some(test) = node.test() else {
            return NodeIcon::Folder;
        };
        match current_execution(test) {
            Some(resolved) => match resolved.status {
                ExecutionStatus::Success => NodeIcon::CheckCircle,
                ExecutionStatus::Failure => NodeIcon::Cancel,
                ExecutionStatus::Error => NodeIcon::Error,
                ExecutionStatus::Skipped => NodeIcon::SkipNext,
            },
            None => NodeIcon::Help,
        }
    }

    /// Returns the color for a node from the supplied theme mapping. Group
    /// nodes and unresolvable leaves inherit the surrounding color.
    fn color<'c>(&self, node: &TestTreeNode<'_>, colors: &'c StatusColors) -> &'c str {
        let Some(test) = node.test() else {
            return "inherit";
        };
        match current_execution(test) {
            Some(resolved) => colors.get(resolved.status),
            None => "inherit",
        }
    }
}

type OrganizationStrategyCtor = Box<dyn Fn() -> Arc<dyn TreeOrganizationStrategy> + Send + Sync>;

/// A type-keyed registry of organization strategies, open for extension.
///
/// `supported_types` reflects registration order.
pub struct OrganizationRegistry {
    strategies: IndexMap<String, OrganizationStrategyCtor>,
}

impl OrganizationRegistry {
    /// Creates a registry with the built-in `folder` and `status`
    /// strategies.
    pub fn new() -> Self {
        let mut registry = Self {
            strategies: IndexMap::new(),
        };
        registry.register("folder", || Arc::new(FolderOrganizationStrategy::new()));
        registry.register("status", || {
            Arc::new(ExecutionTypeOrganizationStrategy::new())
        });
        registry
    }

    /// Creates the strategy registered for `strategy_type`.
    ///
    /// An unknown type degrades to the `folder` strategy with a logged
    /// warning rather than failing: the tree widget treats a bad layout
    /// value as a recoverable configuration problem. This deliberately
    /// differs from the sort and distribution registries, which raise an
    /// error instead.
    pub fn create(&self, strategy_type: &str) -> Arc<dyn TreeOrganizationStrategy> {
        match self.strategies.get(strategy_type) {
            Some(ctor) => ctor(),
            None => {
                warn!("unknown organization type: {strategy_type}, defaulting to `folder`");
                Arc::new(FolderOrganizationStrategy::new())
            }
        }
    }

    /// Registers a strategy constructor under a type key, replacing any
    /// existing registration for that key.
    pub fn register(
        &mut self,
        strategy_type: impl Into<String>,
        ctor: impl Fn() -> Arc<dyn TreeOrganizationStrategy> + Send + Sync + 'static,
    ) {
        self.strategies
            .insert(strategy_type.into(), Box::new(ctor));
    }

    /// Returns the registered type keys, in registration order.
    pub fn supported_types(&self) -> Vec<&str> {
        self.strategies.keys().map(String::as_str).collect()
    }
}

impl Default for OrganizationRegistry {
    fn default() -> Self {
        Self::new()
    }
}
