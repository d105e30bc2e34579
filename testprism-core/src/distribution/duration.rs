// Copyright (c) The testprism Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::{
    distribution::{DistributionSlice, DistributionStrategy},
    execution::current_execution,
};
use serde::Deserialize;
use std::time::Duration;
use testprism_metadata::Test;

/// One duration bucket: the half-open interval `[min, max)` in
/// milliseconds, an unset bound being unbounded.
#[derive(Clone, Debug, Default, Eq, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DurationInterval {
    /// Explicit display label; derived from the bounds when unset.
    pub label: Option<String>,

    /// CSS-style color for the bucket's slice.
    pub color: String,

    /// Inclusive lower bound in milliseconds.
    pub min: Option<u64>,

    /// Exclusive upper bound in milliseconds.
    pub max: Option<u64>,
}

impl DurationInterval {
    fn contains(&self, duration_ms: u64) -> bool {
        self.min.is_none_or(|min| duration_ms >= min)
            && self.max.is_none_or(|max| duration_ms < max)
    }

    fn label(&self) -> String {
        if let Some(label) = &self.label {
            return label.clone();
        }
        match (self.min, self.max) {
            (None, Some(max)) => format!("Under {}", humanize(max)),
            (Some(min), None) => format!("Over {}", humanize(min)),
            (Some(min), Some(max)) => format!("{} - {}", humanize(min), humanize(max)),
            (None, None) => "All durations".to_owned(),
        }
    }
}

fn humanize(millis: u64) -> String {
    humantime::format_duration(Duration::from_millis(millis)).to_string()
}

/// Counts tests into configurable duration buckets.
///
/// A test's duration is its resolved current execution's, or 0 when the
/// test has never run; a test matching no interval is dropped. Every
/// configured interval produces a slice, zero-count ones included, so the
/// chart legend stays stable across reports.
#[derive(Clone, Debug)]
pub struct DurationDistributionStrategy {
    intervals: Vec<DurationInterval>,
}

impl DurationDistributionStrategy {
    /// Creates the strategy with the given buckets, tried in order.
    pub fn new(intervals: Vec<DurationInterval>) -> Self {
        Self { intervals }
    }

    /// The standard buckets: under 1s green, 1s to 5s amber, over 5s red.
    pub fn default_intervals() -> Vec<DurationInterval> {
        vec![
            DurationInterval {
                max: Some(1000),
                color: "#4CAF50".to_owned(),
                ..Default::default()
            },
            DurationInterval {
                min: Some(1000),
                max: Some(5000),
                color: "#FFC107".to_owned(),
                ..Default::default()
            },
            DurationInterval {
                min: Some(5000),
                color: "#F44336".to_owned(),
                ..Default::default()
            },
        ]
    }
}

impl Default for DurationDistributionStrategy {
    fn default() -> Self {
        Self::new(Self::default_intervals())
    }
}

impl DistributionStrategy for DurationDistributionStrategy {
    fn distribution(&self, tests: &[&Test]) -> Vec<DistributionSlice> {
        let mut counts = vec![0usize; self.intervals.len()];
        for &test in tests {
            let duration_ms = current_execution(test)
                .map(|resolved| resolved.duration_ms)
                .unwrap_or(0);
            if let Some(index) = self
                .intervals
                .iter()
                .position(|interval| interval.contains(duration_ms))
            {
                counts[index] += 1;
            }
        }

        self.intervals
            .iter()
            .zip(counts)
            .map(|(interval, count)| DistributionSlice {
                label: interval.label(),
                count,
                color: interval.color.clone(),
            })
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

    fn labels(slices: &[DistributionSlice]) -> Vec<&str> {
        slices.iter().map(|slice| slice.label.as_str()).collect()
    }

    #[test]
    fn default_buckets_are_labeled_and_ordered() {
        let tests = vec![
            test_with_status("fast", "x/fast", ExecutionStatus::Success, 200),
            test_with_status("mid", "x/mid", ExecutionStatus::Success, 2_500),
            test_with_status("slow", "x/slow", ExecutionStatus::Failure, 9_000),
        ];
        let refs: Vec<&Test> = tests.iter().collect();
        let slices = DurationDistributionStrategy::default().distribution(&refs);

        assert_eq!(labels(&slices), ["Under 1s", "1s - 5s", "Over 5s"]);
        let counts: Vec<usize> = slices.iter().map(|slice| slice.count).collect();
        assert_eq!(counts, [1, 1, 1]);
        let colors: Vec<&str> = slices.iter().map(|slice| slice.color.as_str()).collect();
        assert_eq!(colors, ["#4CAF50", "#FFC107", "#F44336"]);
    }

    #[test_case(0, 0; "zero is under the first bound")]
    #[test_case(999, 0; "just below an exclusive max")]
    #[test_case(1000, 1; "an inclusive min lands in the next bucket")]
    #[test_case(4999, 1; "just below the second max")]
    #[test_case(5000, 2; "open-ended tail catches the rest")]
    fn bounds_are_half_open(duration_ms: u64, expected_bucket: usize) {
        let tests = vec![test_with_status(
            "t",
            "x/t",
            ExecutionStatus::Success,
            duration_ms,
        )];
        let refs: Vec<&Test> = tests.iter().collect();
        let slices = DurationDistributionStrategy::default().distribution(&refs);
        for (index, slice) in slices.iter().enumerate() {
            assert_eq!(slice.count, usize::from(index == expected_bucket));
        }
    }

    #[test]
    fn zero_count_buckets_are_kept() {
        let slices = DurationDistributionStrategy::default().distribution(&[]);
        assert_eq!(slices.len(), 3);
        assert!(slices.iter().all(|slice| slice.count == 0));
    }

    #[test]
    fn unresolvable_tests_count_as_zero_duration() {
        let tests = vec![Test::new("never-ran", "x/never-ran")];
        let refs: Vec<&Test> = tests.iter().collect();
        let slices = DurationDistributionStrategy::default().distribution(&refs);
        assert_eq!(slices[0].count, 1);
    }

    #[test]
    fn tests_outside_every_interval_are_dropped() {
        let strategy = DurationDistributionStrategy::new(vec![DurationInterval {
            min: Some(1_000),
            max: Some(2_000),
            color: "#FFC107".to_owned(),
            ..Default::default()
        }]);
        let tests = vec![test_with_status("t", "x/t", ExecutionStatus::Success, 10)];
        let refs: Vec<&Test> = tests.iter().collect();
        let slices = strategy.distribution(&refs);
        assert_eq!(slices[0].count, 0);
    }

    #[test]
    fn explicit_labels_win_over_derived_ones() {
        let strategy = DurationDistributionStrategy::new(vec![DurationInterval {
            label: Some("snappy".to_owned()),
            max: Some(100),
            color: "#4CAF50".to_owned(),
            ..Default::default()
        }]);
        let slices = strategy.distribution(&[]);
        assert_eq!(labels(&slices), ["snappy"]);
    }

    #[test]
    fn unbounded_interval_label() {
        let strategy = DurationDistributionStrategy::new(vec![DurationInterval {
            color: "#9E9E9E".to_owned(),
            ..Default::default()
        }]);
        let slices = strategy.distribution(&[]);
        assert_eq!(labels(&slices), ["All durations"]);
    }

    #[test]
    fn intervals_deserialize_from_widget_properties() {
        let json = r##"[{"label": "quick", "color": "#4CAF50", "max": 250}, {"min": 250, "color": "#F44336"}]"##;
        let intervals: Vec<DurationInterval> =
            serde_json::from_str(json).expect("valid intervals");
        assert_eq!(intervals[0].label.as_deref(), Some("quick"));
        assert_eq!(intervals[0].max, Some(250));
        assert_eq!(intervals[1].min, Some(250));
        assert_eq!(intervals[1].max, None);
    }
}
