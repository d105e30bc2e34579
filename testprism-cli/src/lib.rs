// Copyright (c) The testprism Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Terminal viewer for testprism test reports.
//!
//! Loads a report JSON and renders the organized test tree or a
//! distribution summary, using the pipeline from `testprism-core`.

#![warn(missing_docs)]

mod dispatch;
mod output;

#[doc(hidden)]
pub use dispatch::*;
