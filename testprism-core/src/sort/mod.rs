// Copyright (c) The testprism Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Reordering sibling nodes of an organized tree.
//!
//! Sort strategies compose as an ordered pipeline: each strategy consumes
//! the forest, re-sorts every `children` array recursively, and returns the
//! result for the next strategy. Later strategies supersede earlier ones'
//! ordering at the same level. Aggregation fields are never touched.

mod name;

pub use name::*;

use crate::{errors::UnknownSortStrategyError, tree::TestTreeNode};
use indexmap::IndexMap;
use std::sync::Arc;

/// A pluggable sibling-ordering strategy.
pub trait TreeSortStrategy: std::fmt::Debug + Send + Sync {
    /// Sorts the given nodes and, recursively, their children. Consumes the
    /// input forest and returns a new one; aggregates are preserved.
    fn sort<'a>(&self, nodes: Vec<TestTreeNode<'a>>) -> Vec<TestTreeNode<'a>>;
}

type SortStrategyCtor = Box<dyn Fn() -> Arc<dyn TreeSortStrategy> + Send + Sync>;

/// A type-keyed registry of sort strategies, open for extension.
///
/// Unlike [`OrganizationRegistry`](crate::organize::OrganizationRegistry),
/// an unknown type here is a hard error: sort types only arrive through
/// explicit widget configuration, and silently not sorting would be
/// indistinguishable from a broken sort.
pub struct SortRegistry {
    strategies: IndexMap<String, SortStrategyCtor>,
}

impl SortRegistry {
    /// Creates a registry with the built-in `name` strategy.
    pub fn new() -> Self {
        let mut registry = Self {
            strategies: IndexMap::new(),
        };
        registry.register("name", || Arc::new(NameSortStrategy::new()));
        registry
    }

    /// Creates the strategy registered for `strategy_type`, or an error
    /// naming the unknown type and the known values.
    pub fn create(
        &self,
        strategy_type: &str,
    ) -> Result<Arc<dyn TreeSortStrategy>, UnknownSortStrategyError> {
        match self.strategies.get(strategy_type) {
            Some(ctor) => Ok(ctor()),
            None => Err(UnknownSortStrategyError::new(
                strategy_type,
                self.supported_types(),
            )),
        }
    }

    /// Registers a strategy constructor under a type key, replacing any
    /// existing registration for that key.
    pub fn register(
        &mut self,
        strategy_type: impl Into<String>,
        ctor: impl Fn() -> Arc<dyn TreeSortStrategy> + Send + Sync + 'static,
    ) {
        self.strategies
            .insert(strategy_type.into(), Box::new(ctor));
    }

    /// Returns the registered type keys, in registration order.
    pub fn supported_types(&self) -> Vec<&str> {
        self.strategies.keys().map(String::as_str).collect()
    }
}

impl Default for SortRegistry {
    fn default() -> Self {
        Self::new()
    }
}
