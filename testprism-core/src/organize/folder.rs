// Copyright (c) The testprism Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::{
    organize::{
        TreeOrganizationStrategy,
        builder::{NodeId, TreeBuilder},
    },
    tree::TestTreeNode,
};
use indexmap::IndexMap;
use testprism_metadata::Test;

const SEPARATOR: char = '/';

/// Organizes tests into a tree mirroring their slash-delimited paths.
///
/// Every proper path prefix becomes one group node, shared by all tests
/// under it (first occurrence wins); the test itself becomes a leaf under
/// the group for all but the last path segment, or a root leaf when the
/// path has no segments beyond the test's own name. Empty segments from
/// leading, trailing, or doubled slashes are discarded.
///
/// Nodes are not sorted: sibling order is the first-encounter order of the
/// input. Apply a sort strategy for display ordering.
#[derive(Clone, Debug, Default)]
pub struct FolderOrganizationStrategy {}

impl FolderOrganizationStrategy {
    /// Creates the folder strategy.
    pub fn new() -> Self {
        Self {}
    }
}

impl TreeOrganizationStrategy for FolderOrganizationStrategy {
    fn name(&self) -> &'static str {
        "folder"
    }

    fn build_tree<'a>(&self, tests: &[&'a Test]) -> Vec<TestTreeNode<'a>> {
        let mut builder = TreeBuilder::new();
        let mut groups: IndexMap<String, NodeId> = IndexMap::new();

        for &test in tests {
            let segments: Vec<&str> = test
                .path
                .split(SEPARATOR)
                .filter(|segment| !segment.is_empty())
                .collect();

            // Group nodes for every proper prefix; the last segment stands
            // for the test itself.
            let mut parent: Option<NodeId> = None;
            let mut prefix = String::new();
            for &segment in &segments[..segments.len().saturating_sub(1)] {
                if !prefix.is_empty() {
                    prefix.push(SEPARATOR);
                }
                prefix.push_str(segment);

                let group = match groups.get(prefix.as_str()) {
                    Some(&existing) => existing,
                    None => {
                        let created = builder.add_group(prefix.clone(), segment, parent);
                        groups.insert(prefix.clone(), created);
                        created
                    }
                };
                parent = Some(group);
            }

            builder.add_leaf(test, parent);
        }

        builder.finish()
    }
}
