// Copyright (c) The testprism Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Summarizing a test list into labeled, colored count slices.
//!
//! Distribution strategies feed proportional charts: each strategy reduces
//! the (already filtered) tests to a handful of [`DistributionSlice`]s.
//! They share the registry pattern of the organization and sort strategies
//! but operate on the flat list, not the organized tree.

mod duration;
mod status;

pub use duration::*;
pub use status::*;

use crate::errors::UnknownDistributionStrategyError;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use testprism_metadata::Test;

/// One slice of a distribution: a label, a count and a display color.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DistributionSlice {
    /// Display label of the slice.
    pub label: String,

    /// Number of tests in the slice.
    pub count: usize,

    /// CSS-style color for the slice.
    pub color: String,
}

/// A pluggable distribution strategy.
pub trait DistributionStrategy: std::fmt::Debug + Send + Sync {
    /// Reduces the tests to ordered slices.
    fn distribution(&self, tests: &[&Test]) -> Vec<DistributionSlice>;
}

/// Optional strategy parameters, as carried in a pie widget's `properties`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DistributionParams {
    /// Duration intervals for the `duration` strategy; `None` uses the
    /// built-in buckets.
    pub intervals: Option<Vec<DurationInterval>>,
}

type DistributionStrategyCtor =
    Box<dyn Fn(Option<&DistributionParams>) -> Arc<dyn DistributionStrategy> + Send + Sync>;

/// A type-keyed registry of distribution strategies, open for extension.
///
/// Unknown types are hard errors, like [`SortRegistry`](crate::sort::SortRegistry)
/// and unlike the organization registry's fallback.
pub struct DistributionRegistry {
    strategies: IndexMap<String, DistributionStrategyCtor>,
}

impl DistributionRegistry {
    /// Creates a registry with the built-in `status` and `duration`
    /// strategies.
    pub fn new() -> Self {
        let mut registry = Self {
            strategies: IndexMap::new(),
        };
        registry.register("status", |_params| {
            Arc::new(ExecutionTypeDistributionStrategy::default())
        });
        registry.register("duration", |params| {
            let intervals = params.and_then(|params| params.intervals.clone());
            Arc::new(match intervals {
                Some(intervals) => DurationDistributionStrategy::new(intervals),
                None => DurationDistributionStrategy::default(),
            })
        });
        registry
    }

    /// Creates the strategy registered for `strategy_type`, passing any
    /// widget parameters through to its constructor.
    pub fn create(
        &self,
        strategy_type: &str,
        params: Option<&DistributionParams>,
    ) -> Result<Arc<dyn DistributionStrategy>, UnknownDistributionStrategyError> {
        match self.strategies.get(strategy_type) {
            Some(ctor) => Ok(ctor(params)),
            None => Err(UnknownDistributionStrategyError::new(
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
        ctor: impl Fn(Option<&DistributionParams>) -> Arc<dyn DistributionStrategy>
        + Send
        + Sync
        + 'static,
    ) {
        self.strategies
            .insert(strategy_type.into(), Box::new(ctor));
    }

    /// Returns the registered type keys, in registration order.
    pub fn supported_types(&self) -> Vec<&str> {
        self.strategies.keys().map(String::as_str).collect()
    }
}

impl Default for DistributionRegistry {
    fn default() -> Self {
        Self::new()
    }
}
