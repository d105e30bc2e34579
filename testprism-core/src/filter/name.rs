// Copyright (c) The testprism Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::filter::TestFilterStrategy;
use testprism_metadata::Test;

/// Filters tests by a case-insensitive substring match on the test name.
///
/// The filter text is trimmed at construction time; text that is empty after
/// trimming makes this strategy a no-op.
#[derive(Clone, Debug)]
pub struct NameFilterStrategy {
    needle: String,
}

impl NameFilterStrategy {
    /// Creates a new name filter from raw filter-box text.
    pub fn new(filter_text: &str) -> Self {
        Self {
            needle: filter_text.trim().to_lowercase(),
        }
    }
}

impl TestFilterStrategy for NameFilterStrategy {
    fn filter<'a>(&self, tests: Vec<&'a Test>) -> Vec<&'a Test> {
        if self.needle.is_empty() {
            return tests;
        }

        tests
            .into_iter()
            .filter(|test| test.name.to_lowercase().contains(&self.needle))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::test_with_status;
    use pretty_assertions::assert_eq;
    use test_case::test_case;
    use testprism_metadata::ExecutionStatus;

    fn fixture() -> Vec<Test> {
        vec![
            test_with_status("LoginComponent", "src/auth/LoginComponent", ExecutionStatus::Success, 100),
            test_with_status("UserService", "src/services/UserService", ExecutionStatus::Success, 100),
            test_with_status("LoginPage", "src/pages/LoginPage", ExecutionStatus::Failure, 100),
        ]
    }

    #[test_case("Login", &["LoginComponent", "LoginPage"]; "substring match")]
    #[test_case("login", &["LoginComponent", "LoginPage"]; "case insensitive")]
    #[test_case("  Service  ", &["UserService"]; "whitespace trimmed")]
    #[test_case("NonExistent", &[]; "no matches")]
    fn name_filtering(needle: &str, expected: &[&str]) {
        let tests = fixture();
        let filtered = NameFilterStrategy::new(needle).filter(tests.iter().collect());
        let names: Vec<_> = filtered.iter().map(|test| test.name.as_str()).collect();
        assert_eq!(names, expected);
    }

    #[test]
    fn empty_filter_is_identity() {
        let tests = fixture();
        let refs: Vec<&Test> = tests.iter().collect();
        let filtered = NameFilterStrategy::new("   ").filter(refs.clone());
        assert_eq!(filtered.len(), refs.len());
        // Element identity is preserved, not just equality.
        for (filtered, original) in filtered.iter().zip(&refs) {
            assert!(std::ptr::eq(*filtered, *original));
        }
    }

    #[test]
    fn empty_input_yields_empty_output() {
        let filtered = NameFilterStrategy::new("Login").filter(Vec::new());
        assert!(filtered.is_empty());
    }
}
