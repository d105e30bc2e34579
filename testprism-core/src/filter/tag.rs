// Copyright (c) The testprism Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::filter::TestFilterStrategy;
use testprism_metadata::Test;

/// Filters tests by required tags.
///
/// A test matches when its tag set contains every required tag (AND
/// semantics), compared case-sensitively. Tests without tags fail any
/// non-empty requirement; an empty requirement list is a no-op.
#[derive(Clone, Debug)]
pub struct TagFilterStrategy {
    tags: Vec<String>,
}

impl TagFilterStrategy {
    /// Creates a new tag filter from the required tags.
    pub fn new(tags: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            tags: tags.into_iter().map(|tag| tag.into()).collect(),
        }
    }
}

impl TestFilterStrategy for TagFilterStrategy {
    fn filter<'a>(&self, tests: Vec<&'a Test>) -> Vec<&'a Test> {
        if self.tags.is_empty() {
            return tests;
        }

        tests
            .into_iter()
            .filter(|test| match &test.tags {
                Some(test_tags) => self
                    .tags
                    .iter()
                    .all(|required| test_tags.iter().any(|tag| tag == required)),
                None => false,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{test_with_status, test_with_tags};
    use pretty_assertions::assert_eq;
    use testprism_metadata::ExecutionStatus;

    fn fixture() -> Vec<Test> {
        vec![
            test_with_tags("test1", "path1/test1", &["smoke", "auth"]),
            test_with_tags("test2", "path2/test2", &["auth"]),
            test_with_tags("test3", "path3/test3", &["smoke"]),
        ]
    }

    #[test]
    fn single_tag() {
        let tests = fixture();
        let filtered = TagFilterStrategy::new(["smoke"]).filter(tests.iter().collect());
        let names: Vec<_> = filtered.iter().map(|test| test.name.as_str()).collect();
        assert_eq!(names, ["test1", "test3"]);
    }

    #[test]
    fn multiple_tags_require_all() {
        let tests = fixture();
        let filtered = TagFilterStrategy::new(["smoke", "auth"]).filter(tests.iter().collect());
        let names: Vec<_> = filtered.iter().map(|test| test.name.as_str()).collect();
        assert_eq!(names, ["test1"]);
    }

    #[test]
    fn matching_is_case_sensitive() {
        let tests = fixture();
        let filtered = TagFilterStrategy::new(["SMOKE"]).filter(tests.iter().collect());
        assert!(filtered.is_empty());
    }

    #[test]
    fn empty_requirement_is_identity() {
        let tests = fixture();
        let filtered =
            TagFilterStrategy::new(Vec::<String>::new()).filter(tests.iter().collect());
        assert_eq!(filtered.len(), tests.len());
    }

    #[test]
    fn untagged_tests_fail_nonempty_requirements() {
        let tests = vec![
            test_with_tags("tagged", "a/tagged", &["smoke"]),
            test_with_status("untagged", "a/untagged", ExecutionStatus::Success, 100),
        ];
        let filtered = TagFilterStrategy::new(["smoke"]).filter(tests.iter().collect());
        let names: Vec<_> = filtered.iter().map(|test| test.name.as_str()).collect();
        assert_eq!(names, ["tagged"]);
    }

    #[test]
    fn no_match_yields_empty() {
        let tests = fixture();
        let filtered = TagFilterStrategy::new(["nightly"]).filter(tests.iter().collect());
        assert!(filtered.is_empty());
    }
}
