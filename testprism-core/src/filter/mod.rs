// Copyright (c) The testprism Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Filtering tests before they are organized into a tree.
//!
//! Filters are composable: each strategy takes a list of borrowed tests and
//! returns a subsequence of it, preserving relative order. An empty
//! configuration is always a no-op rather than "match nothing": an untouched
//! filter box or an empty status selection shows the whole report.

mod composite;
mod config;
mod name;
mod status;
mod tag;

pub use composite::*;
pub use config::*;
pub use name::*;
pub use status::*;
pub use tag::*;

use testprism_metadata::Test;

/// A pluggable test filter.
///
/// Implementations are stateless or constructor-parameterized and must not
/// mutate or reorder their input: `filter` returns a subsequence of `tests`
/// with relative order preserved and no duplication.
pub trait TestFilterStrategy: Send + Sync {
    /// Filters the given tests, returning the matching subsequence.
    fn filter<'a>(&self, tests: Vec<&'a Test>) -> Vec<&'a Test>;
}
