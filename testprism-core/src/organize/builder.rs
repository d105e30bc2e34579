// Copyright (c) The testprism Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::{
    execution::current_execution,
    tree::{StatusCounts, TestTreeNode, TestTreeNodeKind},
};
use testprism_metadata::Test;

/// Index of a node in the [`TreeBuilder`] arena.
pub(super) type NodeId = usize;

enum BuilderNode<'a> {
    Group {
        id: String,
        name: String,
        children: Vec<NodeId>,
    },
    Leaf {
        id: String,
        name: String,
        test: &'a Test,
    },
}

impl BuilderNode<'_> {
    fn name(&self) -> &str {
        match self {
            BuilderNode::Group { name, .. } | BuilderNode::Leaf { name, .. } => name,
        }
    }
}

/// An arena for assembling a test tree in a single forward pass.
///
/// Strategies insert group and leaf nodes top-down (a parent always exists
/// before its children), then call [`finish`](Self::finish), which walks the
/// forest bottom-up and constructs each [`TestTreeNode`] with its aggregates
/// already computed. No node is mutated after its children are finalized,
/// and ownership of the finished forest transfers to the caller.
pub(super) struct TreeBuilder<'a> {
    nodes: Vec<BuilderNode<'a>>,
    roots: Vec<NodeId>,
}

impl<'a> TreeBuilder<'a> {
    pub(super) fn new() -> Self {
        Self {
            nodes: Vec::new(),
            roots: Vec::new(),
        }
    }

    /// Adds a group node under `parent`, or at the root when `parent` is
    /// `None`. Returns the new node's id.
    pub(super) fn add_group(
        &mut self,
        id: impl Into<String>,
        name: impl Into<String>,
        parent: Option<NodeId>,
    ) -> NodeId {
        self.push(
            BuilderNode::Group {
                id: id.into(),
                name: name.into(),
                children: Vec::new(),
            },
            parent,
        )
    }

    /// Adds a leaf node for `test` under `parent`, or at the root when
    /// `parent` is `None`. The leaf id is `{path}/{name}`, which is stable
    /// across rebuilds of the same input.
    pub(super) fn add_leaf(&mut self, test: &'a Test, parent: Option<NodeId>) -> NodeId {
        self.push(
            BuilderNode::Leaf {
                id: format!("{}/{}", test.path, test.name),
                name: test.name.clone(),
                test,
            },
            parent,
        )
    }

    fn push(&mut self, node: BuilderNode<'a>, parent: Option<NodeId>) -> NodeId {
        let node_id = self.nodes.len();
        self.nodes.push(node);
        match parent {
            Some(parent_id) => match &mut self.nodes[parent_id] {
                BuilderNode::Group { children, .. } => children.push(node_id),
                BuilderNode::Leaf { .. } => {
                    unreachable!("strategies only attach children to group nodes")
                }
            },
            None => self.roots.push(node_id),
        }
        node_id
    }

    /// Stably reorders the root nodes by a key of their display name.
    /// Non-root nodes keep their insertion order.
    pub(super) fn sort_roots_by_name_key<K: Ord>(&mut self, key: impl Fn(&str) -> K) {
        let nodes = &self.nodes;
        self.roots
            .sort_by_key(|&root| key(nodes[root].name()));
    }

    /// Consumes the arena and produces the annotated forest.
    pub(super) fn finish(self) -> Vec<TestTreeNode<'a>> {
        let mut nodes: Vec<Option<BuilderNode<'a>>> = self.nodes.into_iter().map(Some).collect();
        self.roots
            .iter()
            .map(|&root| build_node(&mut nodes, root).0)
            .collect()
    }
}

/// Builds the finished node for `node_id`, returning it together with its
/// contribution to the parent's aggregates.
fn build_node<'a>(
    nodes: &mut Vec<Option<BuilderNode<'a>>>,
    node_id: NodeId,
) -> (TestTreeNode<'a>, u64, StatusCounts) {
    let node = nodes[node_id]
        .take()
        .expect("every builder node has exactly one parent");

    match node {
        BuilderNode::Leaf { id, name, test } => {
            let (duration_ms, counts) = match current_execution(test) {
                Some(resolved) => (resolved.duration_ms, StatusCounts::of(resolved.status)),
                None => (0, StatusCounts::default()),
            };
            let node = TestTreeNode {
                id,
                name,
                kind: TestTreeNodeKind::Test { test },
            };
            (node, duration_ms, counts)
        }
        BuilderNode::Group { id, name, children } => {
            let mut built = Vec::with_capacity(children.len());
            let mut total_duration_ms = 0;
            let mut test_count = StatusCounts::default();
            for child_id in children {
                let (child, child_duration, child_counts) = build_node(nodes, child_id);
                total_duration_ms += child_duration;
                test_count += child_counts;
                built.push(child);
            }
            let node = TestTreeNode {
                id,
                name,
                kind: TestTreeNodeKind::Group {
                    children: built,
                    total_duration_ms,
                    test_count,
                },
            };
            (node, total_duration_ms, test_count)
        }
    }
}
