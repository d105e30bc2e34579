// Copyright (c) The testprism Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::{
    sort::TreeSortStrategy,
    tree::{TestTreeNode, TestTreeNodeKind},
};
use std::mem;
use unicode_normalization::UnicodeNormalization;

/// Sorts siblings lexicographically by display name, at every level of the
/// tree independently.
///
/// Ordering uses a Unicode-aware collation key (NFKC-normalized and
/// case-folded, with the raw name as tiebreak), so `apple` sorts next to
/// `Apple` and the result is deterministic for any input.
#[derive(Clone, Debug, Default)]
pub struct NameSortStrategy {}

impl NameSortStrategy {
    /// Creates the name sort strategy.
    pub fn new() -> Self {
        Self {}
    }
}

impl TreeSortStrategy for NameSortStrategy {
    fn sort<'a>(&self, nodes: Vec<TestTreeNode<'a>>) -> Vec<TestTreeNode<'a>> {
        let mut nodes: Vec<TestTreeNode<'a>> = nodes
            .into_iter()
            .map(|mut node| {
                if let TestTreeNodeKind::Group { children, .. } = &mut node.kind {
                    let taken = mem::take(children);
                    *children = self.sort(taken);
                }
                node
            })
            .collect();
        nodes.sort_by_cached_key(|node| collation_key(&node.name));
        nodes
    }
}

fn collation_key(name: &str) -> (String, String) {
    let folded: String = name.nfkc().flat_map(char::to_lowercase).collect();
    (folded, name.to_owned())
}
