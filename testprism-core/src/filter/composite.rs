// Copyright (c) The testprism Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::filter::TestFilterStrategy;
use testprism_metadata::Test;

/// Chains child filters in sequence, feeding each stage's output into the
/// next (logical AND across stages). An empty chain is the identity filter.
pub struct CompositeFilterStrategy {
    filters: Vec<Box<dyn TestFilterStrategy>>,
}

impl CompositeFilterStrategy {
    /// Creates a composite from an ordered list of child filters.
    pub fn new(filters: Vec<Box<dyn TestFilterStrategy>>) -> Self {
        Self { filters }
    }
}

impl TestFilterStrategy for CompositeFilterStrategy {
    fn filter<'a>(&self, tests: Vec<&'a Test>) -> Vec<&'a Test> {
        self.filters
            .iter()
            .fold(tests, |filtered, filter| filter.filter(filtered))
    }
}
