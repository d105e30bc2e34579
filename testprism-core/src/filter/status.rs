// Copyright (c) The testprism Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::{execution::current_execution, filter::TestFilterStrategy};
use std::collections::BTreeSet;
use testprism_metadata::{ExecutionStatus, Test};

/// Filters tests by membership of their current status in an allow-list.
///
/// An empty allow-list is a no-op, not "match nothing". With a non-empty
/// list, tests without a resolvable execution are excluded.
#[derive(Clone, Debug)]
pub struct StatusFilterStrategy {
    statuses: BTreeSet<ExecutionStatus>,
}

impl StatusFilterStrategy {
    /// Creates a new status filter from the selected statuses.
    pub fn new(selected: impl IntoIterator<Item = ExecutionStatus>) -> Self {
        Self {
            statuses: selected.into_iter().collect(),
        }
    }
}

impl TestFilterStrategy for StatusFilterStrategy {
    fn filter<'a>(&self, tests: Vec<&'a Test>) -> Vec<&'a Test> {
        if self.statuses.is_empty() {
            return tests;
        }

        tests
            .into_iter()
            .filter(|test| {
                current_execution(test)
                    .is_some_and(|resolved| self.statuses.contains(&resolved.status))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::test_with_status;
    use pretty_assertions::assert_eq;

    fn fixture() -> Vec<Test> {
        vec![
            test_with_status("ErrorTest", "src/tests/ErrorTest", ExecutionStatus::Error, 100),
            test_with_status("SkippedTest", "src/tests/SkippedTest", ExecutionStatus::Skipped, 100),
            test_with_status("LoginPage", "src/pages/LoginPage", ExecutionStatus::Failure, 100),
            test_with_status("UserService", "src/services/UserService", ExecutionStatus::Success, 100),
            test_with_status("LoginComponent", "src/auth/LoginComponent", ExecutionStatus::Success, 100),
        ]
    }

    #[test]
    fn empty_selection_is_identity() {
        let tests = fixture();
        let filtered = StatusFilterStrategy::new([]).filter(tests.iter().collect());
        assert_eq!(filtered.len(), tests.len());
    }

    #[test]
    fn single_status() {
        let tests = fixture();
        let filtered =
            StatusFilterStrategy::new([ExecutionStatus::Success]).filter(tests.iter().collect());
        let names: Vec<_> = filtered.iter().map(|test| test.name.as_str()).collect();
        assert_eq!(names, ["UserService", "LoginComponent"]);
    }

    #[test]
    fn multiple_statuses_preserve_input_order() {
        let tests = fixture();
        let filtered =
            StatusFilterStrategy::new([ExecutionStatus::Success, ExecutionStatus::Failure])
                .filter(tests.iter().collect());
        let names: Vec<_> = filtered.iter().map(|test| test.name.as_str()).collect();
        assert_eq!(names, ["LoginPage", "UserService", "LoginComponent"]);
    }

    #[test]
    fn tests_without_executions_are_excluded_by_nonempty_selection() {
        let tests = vec![Test::new("NeverRan", "src/NeverRan")];
        let filtered =
            StatusFilterStrategy::new([ExecutionStatus::Success]).filter(tests.iter().collect());
        assert!(filtered.is_empty());

        // ...but pass through an empty selection untouched.
        let filtered = StatusFilterStrategy::new([]).filter(tests.iter().collect());
        assert_eq!(filtered.len(), 1);
    }
}
