// Copyright (c) The testprism Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::filter::{
    CompositeFilterStrategy, NameFilterStrategy, StatusFilterStrategy, TagFilterStrategy,
};
use serde::Deserialize;
use testprism_metadata::ExecutionStatus;

/// Declarative filter configuration, as carried in a tree widget's
/// `properties`.
///
/// All fields default to empty, and empty fields contribute no filter stage,
/// so a default config builds an identity composite.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterConfig {
    /// Substring to match against test names.
    pub name: Option<String>,

    /// Statuses to keep; empty keeps everything.
    pub statuses: Vec<ExecutionStatus>,

    /// Tags a test must all carry; empty keeps everything.
    pub tags: Vec<String>,
}

impl FilterConfig {
    /// Builds the composite filter described by this configuration.
    pub fn build(&self) -> CompositeFilterStrategy {
        let mut filters: Vec<Box<dyn crate::filter::TestFilterStrategy>> = Vec::new();

        if let Some(name) = &self.name {
            filters.push(Box::new(NameFilterStrategy::new(name)));
        }
        if !self.statuses.is_empty() {
            filters.push(Box::new(StatusFilterStrategy::new(
                self.statuses.iter().copied(),
            )));
        }
        if !self.tags.is_empty() {
            filters.push(Box::new(TagFilterStrategy::new(self.tags.iter().cloned())));
        }

        CompositeFilterStrategy::new(filters)
    }
}
