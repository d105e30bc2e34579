// Copyright (c) The testprism Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

#![warn(missing_docs)]

//! Data model for testprism: test reports, execution records, and the
//! declarative dashboard layout.
//!
//! This crate contains only serializable types and no pipeline logic. The
//! organization/filter/sort pipeline that consumes these types lives in
//! `testprism-core`.

mod errors;
mod layout;
mod report;

pub use errors::*;
pub use layout::*;
pub use report::*;
