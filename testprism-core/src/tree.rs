// Copyright (c) The testprism Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The annotated tree view model produced by organization strategies.

use serde::Serialize;
use std::{fmt, ops::AddAssign};
use testprism_metadata::{ExecutionStatus, Test};

/// One node of the organized test tree.
///
/// A node is either a leaf wrapping exactly one test, or a group with
/// children and aggregates; the distinction is structural via
/// [`TestTreeNodeKind`], so a node can never carry both.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TestTreeNode<'a> {
    /// A stable identity for this node, derived from its path from the root
    /// plus its name. Rebuilding an unchanged input set yields identical
    /// ids, which is what lets expand/collapse state survive re-renders.
    pub id: String,

    /// The display label of the node.
    pub name: String,

    /// Leaf or group payload.
    #[serde(flatten)]
    pub kind: TestTreeNodeKind<'a>,
}

/// The payload of a [`TestTreeNode`].
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum TestTreeNodeKind<'a> {
    /// A leaf node wrapping one test.
    #[serde(rename_all = "camelCase")]
    Test {
        /// The test this node represents.
        test: &'a Test,
    },

    /// A group node aggregating its descendants.
    #[serde(rename_all = "camelCase")]
    Group {
        /// Child nodes, in strategy order.
        children: Vec<TestTreeNode<'a>>,

        /// Sum of all descendant leaf durations, in milliseconds.
        total_duration_ms: u64,

        /// Count of descendant leaves per status.
        test_count: StatusCounts,
    },
}

impl<'a> TestTreeNode<'a> {
    /// Returns the test this node wraps, or `None` for a group node.
    pub fn test(&self) -> Option<&'a Test> {
        match &self.kind {
            TestTreeNodeKind::Test { test } => Some(test),
            TestTreeNodeKind::Group { .. } => None,
        }
    }

    /// Returns the children of this node; empty for a leaf.
    pub fn children(&self) -> &[TestTreeNode<'a>] {
        match &self.kind {
            TestTreeNodeKind::Test { .. } => &[],
            TestTreeNodeKind::Group { children, .. } => children,
        }
    }

    /// Returns true if this is a group node with at least one child.
    pub fn has_children(&self) -> bool {
        !self.children().is_empty()
    }

    /// Returns the aggregated duration of a group node, or `None` for a
    /// leaf.
    pub fn total_duration_ms(&self) -> Option<u64> {
        match &self.kind {
            TestTreeNodeKind::Test { .. } => None,
            TestTreeNodeKind::Group {
                total_duration_ms, ..
            } => Some(*total_duration_ms),
        }
    }

    /// Returns the aggregated per-status counts of a group node, or `None`
    /// for a leaf.
    pub fn test_count(&self) -> Option<StatusCounts> {
        match &self.kind {
            TestTreeNodeKind::Test { .. } => None,
            TestTreeNodeKind::Group { test_count, .. } => Some(*test_count),
        }
    }
}

/// Per-status counts of descendant leaves.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct StatusCounts {
    /// Leaves whose current status is [`ExecutionStatus::Success`].
    pub success: usize,

    /// Leaves whose current status is [`ExecutionStatus::Failure`].
    pub failure: usize,

    /// Leaves whose current status is [`ExecutionStatus::Skipped`].
    pub skipped: usize,

    /// Leaves whose current status is [`ExecutionStatus::Error`].
    pub error: usize,
}

impl StatusCounts {
    /// Returns the counts a single leaf with the given status contributes: 1
    /// for its own status, 0 for the others.
    pub fn of(status: ExecutionStatus) -> Self {
        let mut counts = Self::default();
        *counts.get_mut(status) = 1;
        counts
    }

    /// Returns the count for one status.
    pub fn get(&self, status: ExecutionStatus) -> usize {
        match status {
            ExecutionStatus::Success => self.success,
            ExecutionStatus::Failure => self.failure,
            ExecutionStatus::Skipped => self.skipped,
            ExecutionStatus::Error => self.error,
        }
    }

    fn get_mut(&mut self, status: ExecutionStatus) -> &mut usize {
        match status {
            ExecutionStatus::Success => &mut self.success,
            ExecutionStatus::Failure => &mut self.failure,
            ExecutionStatus::Skipped => &mut self.skipped,
            ExecutionStatus::Error => &mut self.error,
        }
    }

    /// Returns the total number of counted leaves.
    pub fn total(&self) -> usize {
        self.success + self.failure + self.skipped + self.error
    }
}

impl AddAssign for StatusCounts {
    fn add_assign(&mut self, other: Self) {
        self.success += other.success;
        self.failure += other.failure;
        self.skipped += other.skipped;
        self.error += other.error;
    }
}

/// The icon token a renderer should use for a node.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
pub enum NodeIcon {
    /// A group node.
    #[serde(rename = "folder")]
    Folder,

    /// A successful test.
    #[serde(rename = "check_circle")]
    CheckCircle,

    /// A failed test.
    #[serde(rename = "cancel")]
    Cancel,

    /// An errored test.
    #[serde(rename = "error")]
    Error,

    /// A skipped test.
    #[serde(rename = "skip_next")]
    SkipNext,

    /// A test with no resolvable execution.
    #[serde(rename = "help")]
    Help,
}

impl NodeIcon {
    /// Returns the icon token string.
    pub fn as_str(self) -> &'static str {
        match self {
            NodeIcon::Folder => "folder",
            NodeIcon::CheckCircle => "check_circle",
            NodeIcon::Cancel => "cancel",
            NodeIcon::Error => "error",
            NodeIcon::SkipNext => "skip_next",
            NodeIcon::Help => "help",
        }
    }
}

impl fmt::Display for NodeIcon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
