// Copyright (c) The testprism Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

#![warn(missing_docs)]

//! The test-tree pipeline for testprism dashboards.
//!
//! The core of this crate is a small rules engine that takes a flat list of
//! [`Test`](testprism_metadata::Test) records and a composable set of
//! strategies (filter, organize, sort) and produces a hierarchical, annotated
//! view model: see [`view::TestTreeViewBuilder`].
//!
//! Every operation here is a pure function over its inputs: no I/O, no shared
//! mutable state between invocations, and fresh output trees on every call.
//! Callers are free to rebuild on every keystroke of a filter box.

pub mod distribution;
pub mod errors;
pub mod execution;
pub mod filter;
pub mod organize;
pub mod sort;
pub mod tree;
pub mod view;

#[cfg(test)]
mod test_helpers;
