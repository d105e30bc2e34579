// Copyright (c) The testprism Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Errors produced by testprism-core.
//!
//! Unknown-type errors are only raised by the sort and distribution
//! registries. The organization registry instead degrades to the `folder`
//! strategy with a logged warning; see
//! [`OrganizationRegistry::create`](crate::organize::OrganizationRegistry::create)
//! for why the two policies differ.

use thiserror::Error;

/// Error returned when an unknown sort strategy type is requested from the
/// [`SortRegistry`](crate::sort::SortRegistry).
#[derive(Clone, Debug, Error)]
#[error(
    "unknown sort strategy: {input}\n(known values: {})",
    .supported.join(", ")
)]
pub struct UnknownSortStrategyError {
    input: String,
    supported: Vec<String>,
}

impl UnknownSortStrategyError {
    pub(crate) fn new(
        input: impl Into<String>,
        supported: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            input: input.into(),
            supported: supported.into_iter().map(|s| s.into()).collect(),
        }
    }
}

/// Error returned when an unknown distribution strategy type is requested
/// from the [`DistributionRegistry`](crate::distribution::DistributionRegistry).
#[derive(Clone, Debug, Error)]
#[error(
    "unknown distribution strategy type: {input}\n(known values: {})",
    .supported.join(", ")
)]
pub struct UnknownDistributionStrategyError {
    input: String,
    supported: Vec<String>,
}

impl UnknownDistributionStrategyError {
    pub(crate) fn new(
        input: impl Into<String>,
        supported: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            input: input.into(),
            supported: supported.into_iter().map(|s| s.into()).collect(),
        }
    }
}
