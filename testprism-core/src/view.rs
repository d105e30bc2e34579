// Copyright (c) The testprism Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Assembling the filter, organize and sort stages into a tree view.

use crate::{
    filter::TestFilterStrategy,
    organize::{FolderOrganizationStrategy, TreeOrganizationStrategy},
    sort::TreeSortStrategy,
    tree::{NodeIcon, TestTreeNode},
};
use std::sync::Arc;
use testprism_metadata::{StatusColors, Test};

/// Builds [`TestTreeView`]s from a configured pipeline.
///
/// The pipeline runs filter, then organize, then each sort strategy in
/// order. All stages except organization are optional; the default builder
/// organizes by folder with no filtering and no sorting.
pub struct TestTreeViewBuilder {
    organization: Arc<dyn TreeOrganizationStrategy>,
    filter: Option<Box<dyn TestFilterStrategy>>,
    sorts: Vec<Arc<dyn TreeSortStrategy>>,
}

impl TestTreeViewBuilder {
    /// Creates a builder around an organization strategy.
    pub fn new(organization: Arc<dyn TreeOrganizationStrategy>) -> Self {
        Self {
            organization,
            filter: None,
            sorts: Vec::new(),
        }
    }

    /// Sets the filter applied before organization, replacing any previous
    /// one.
    pub fn with_filter(mut self, filter: impl TestFilterStrategy + 'static) -> Self {
        self.filter = Some(Box::new(filter));
        self
    }

    /// Appends a sort strategy. Sorts run in the order they were added;
    /// a later sort supersedes an earlier one's sibling ordering.
    pub fn with_sort(mut self, sort: Arc<dyn TreeSortStrategy>) -> Self {
        self.sorts.push(sort);
        self
    }

    /// Runs the pipeline over `tests` and returns the resulting view.
    ///
    /// The view borrows the tests; rebuilding from the same input yields
    /// the same node ids, so selection and expansion state held by a
    /// caller keys stably across rebuilds.
    pub fn build<'a>(&self, tests: &'a [Test]) -> TestTreeView<'a> {
        let mut refs: Vec<&'a Test> = tests.iter().collect();
        if let Some(filter) = &self.filter {
            refs = filter.filter(refs);
        }
        let mut roots = self.organization.build_tree(&refs);
        for sort in &self.sorts {
            roots = sort.sort(roots);
        }
        TestTreeView {
            roots,
            organization: Arc::clone(&self.organization),
        }
    }
}

impl Default for TestTreeViewBuilder {
    fn default() -> Self {
        Self::new(Arc::new(FolderOrganizationStrategy::new()))
    }
}

/// An organized, annotated tree over a borrowed test list.
pub struct TestTreeView<'a> {
    roots: Vec<TestTreeNode<'a>>,
    organization: Arc<dyn TreeOrganizationStrategy>,
}

impl<'a> TestTreeView<'a> {
    /// Returns the root nodes of the view.
    pub fn roots(&self) -> &[TestTreeNode<'a>] {
        &self.roots
    }

    /// Returns the children of a node, empty for leaves.
    pub fn children<'s>(&self, node: &'s TestTreeNode<'a>) -> &'s [TestTreeNode<'a>] {
        node.children()
    }

    /// Returns true if the node has at least one child.
    pub fn has_children(&self, node: &TestTreeNode<'a>) -> bool {
        node.has_children()
    }

    /// Returns the icon token for a node, per the organization strategy.
    pub fn icon(&self, node: &TestTreeNode<'a>) -> NodeIcon {
        self.organization.icon(node)
    }

    /// Returns the display color for a node from the given theme mapping.
    pub fn color<'c>(&self, node: &TestTreeNode<'a>, colors: &'c StatusColors) -> &'c str {
        self.organization.color(node, colors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        filter::{FilterConfig, NameFilterStrategy},
        organize::ExecutionTypeOrganizationStrategy,
        sort::NameSortStrategy,
        test_helpers::test_with_status,
    };
    use pretty_assertions::assert_eq;
    use testprism_metadata::ExecutionStatus;

    fn sample_tests() -> Vec<Test> {
        vec![
            test_with_status("login", "auth/session/login", ExecutionStatus::Success, 120),
            test_with_status("logout", "auth/session/logout", ExecutionStatus::Failure, 80),
            test_with_status("parse", "core/parse", ExecutionStatus::Success, 40),
        ]
    }

    fn names<'a>(nodes: &'a [TestTreeNode<'a>]) -> Vec<&'a str> {
        nodes.iter().map(|node| node.name.as_str()).collect()
    }

    #[test]
    fn default_pipeline_organizes_by_folder_unsorted() {
        let tests = sample_tests();
        let view = TestTreeViewBuilder::default().build(&tests);
        assert_eq!(names(view.roots()), ["auth", "core"]);
        let session = &view.roots()[0].children()[0];
        assert_eq!(session.name, "session");
        assert_eq!(names(view.children(session)), ["login", "logout"]);
    }

    #[test]
    fn filter_runs_before_organization() {
        let tests = sample_tests();
        let view = TestTreeViewBuilder::default()
            .with_filter(NameFilterStrategy::new("log"))
            .build(&tests);
        // `core/parse` is filtered out entirely, so no `core` group appears.
        assert_eq!(names(view.roots()), ["auth"]);
        assert_eq!(view.roots()[0].test_count().unwrap().total(), 2);
    }

    #[test]
    fn sorts_apply_in_order_after_organization() {
        let tests = vec![
            test_with_status("t", "zebra/t", ExecutionStatus::Success, 1),
            test_with_status("t", "apple/t", ExecutionStatus::Success, 1),
        ];
        let view = TestTreeViewBuilder::default()
            .with_sort(Arc::new(NameSortStrategy::new()))
            .build(&tests);
        assert_eq!(names(view.roots()), ["apple", "zebra"]);
    }

    #[test]
    fn status_organization_with_filter_config() {
        let tests = sample_tests();
        let config = FilterConfig {
            statuses: vec![ExecutionStatus::Success],
            ..FilterConfig::default()
        };
        let view = TestTreeViewBuilder::new(Arc::new(ExecutionTypeOrganizationStrategy::new()))
            .with_filter(config.build())
            .build(&tests);
        assert_eq!(names(view.roots()), ["SUCCESS"]);
        assert_eq!(view.roots()[0].test_count().unwrap().success, 2);
    }

    #[test]
    fn view_exposes_icon_and_color() {
        let tests = sample_tests();
        let view = TestTreeViewBuilder::default().build(&tests);
        let colors = StatusColors::default();

        let auth = &view.roots()[0];
        assert!(view.has_children(auth));
        assert_eq!(view.icon(auth), NodeIcon::Folder);
        assert_eq!(view.color(auth, &colors), "inherit");

        let leaf = &view.roots()[1].children()[0];
        assert!(!view.has_children(leaf));
        assert_eq!(view.icon(leaf), NodeIcon::CheckCircle);
        assert_eq!(view.color(leaf, &colors), "#4caf50");
    }

    #[test]
    fn node_ids_are_stable_across_rebuilds() {
        let tests = sample_tests();
        let builder = TestTreeViewBuilder::default();

        fn collect_ids(nodes: &[TestTreeNode<'_>], out: &mut Vec<String>) {
            for node in nodes {
                out.push(node.id.clone());
                collect_ids(node.children(), out);
            }
        }

        let mut first = Vec::new();
        collect_ids(builder.build(&tests).roots(), &mut first);
        let mut second = Vec::new();
        collect_ids(builder.build(&tests).roots(), &mut second);
        assert_eq!(first, second);
    }
}
