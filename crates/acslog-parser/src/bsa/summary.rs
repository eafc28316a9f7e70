// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! BSA summary buckets
//!
//! Counts are always re-derived from the stored subtests rather than kept as
//! running totals. A subtest contributes to at most one primary bucket
//! (matched on its result text) and to every overlay bucket whose needles
//! occur in its upper-cased raw status. Overlays are additive, so a
//! `PASSED (PARTIAL)` entry can count as "Passed (Partial)" without counting
//! as "Passed".

use crate::bsa::model::{BsaSubtest, BsaSummary};
use crate::bsa::status::{Matcher, Rule};

/// Named counter in a [`BsaSummary`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Bucket {
    Passed,
    PassedPartial,
    Warnings,
    Skipped,
    Failed,
    PalNotSupported,
    NotImplemented,
    FailedWithWaiver,
}

/// Primary bucket, first match on the stored result text
pub const PRIMARY_BUCKETS: &[Rule<Bucket>] = &[
    Rule {
        matcher: Matcher::AllOf(&["FAILED", "WAIVER"]),
        tag: Bucket::FailedWithWaiver,
    },
    Rule {
        matcher: Matcher::Equals("PASSED"),
        tag: Bucket::Passed,
    },
    Rule {
        matcher: Matcher::Equals("FAILED"),
        tag: Bucket::Failed,
    },
    Rule {
        matcher: Matcher::Equals("ABORTED"),
        tag: Bucket::Warnings,
    },
    Rule {
        matcher: Matcher::Equals("SKIPPED"),
        tag: Bucket::Skipped,
    },
    Rule {
        matcher: Matcher::Equals("WARNING"),
        tag: Bucket::Warnings,
    },
    Rule {
        matcher: Matcher::Equals("STATUS"),
        tag: Bucket::Warnings,
    },
];

/// Overlay buckets, every match on the upper-cased raw status
pub const OVERLAY_BUCKETS: &[Rule<Bucket>] = &[
    Rule {
        matcher: Matcher::AllOf(&["PASSED", "PARTIAL"]),
        tag: Bucket::PassedPartial,
    },
    Rule {
        matcher: Matcher::AllOf(&["PAL NOT SUPPORTED"]),
        tag: Bucket::PalNotSupported,
    },
    Rule {
        matcher: Matcher::AllOf(&["NOT IMPLEMENTED"]),
        tag: Bucket::NotImplemented,
    },
];

/// Buckets one subtest contributes to
#[must_use]
pub fn buckets(subtest: &BsaSubtest) -> Vec<Bucket> {
    let mut buckets: Vec<Bucket> = Rule::first(PRIMARY_BUCKETS, &subtest.result)
        .into_iter()
        .collect();
    if let Some(raw) = &subtest.raw_status {
        let raw = raw.to_uppercase();
        buckets.extend(Rule::all(OVERLAY_BUCKETS, &raw));
    }
    buckets
}

impl BsaSummary {
    /// Increment one bucket
    pub fn add(&mut self, bucket: Bucket) {
        let counter = match bucket {
            Bucket::Passed => &mut self.passed,
            Bucket::PassedPartial => &mut self.passed_partial,
            Bucket::Warnings => &mut self.warnings,
            Bucket::Skipped => &mut self.skipped,
            Bucket::Failed => &mut self.failed,
            Bucket::PalNotSupported => &mut self.pal_not_supported,
            Bucket::NotImplemented => &mut self.not_implemented,
            Bucket::FailedWithWaiver => &mut self.total_failed_with_waiver,
        };
        *counter += 1;
    }

    /// Sum of every bucket except failed-with-waiver
    #[must_use]
    pub fn rules_run(&self) -> u32 {
        self.passed
            + self.failed
            + self.skipped
            + self.warnings
            + self.pal_not_supported
            + self.not_implemented
            + self.passed_partial
    }

    /// Count the buckets of a sequence of subtests
    #[must_use]
    pub fn from_subtests<'a>(subtests: impl IntoIterator<Item = &'a BsaSubtest>) -> Self {
        let mut summary = Self::default();
        for bucket in subtests.into_iter().flat_map(buckets) {
            summary.add(bucket);
        }
        summary.total_rules_run = summary.rules_run();
        summary
    }

    /// Add another summary's buckets into this one and refresh the total
    pub fn absorb(&mut self, other: &Self) {
        self.passed += other.passed;
        self.passed_partial += other.passed_partial;
        self.warnings += other.warnings;
        self.skipped += other.skipped;
        self.failed += other.failed;
        self.pal_not_supported += other.pal_not_supported;
        self.not_implemented += other.not_implemented;
        self.total_failed_with_waiver += other.total_failed_with_waiver;
        self.total_rules_run = self.rules_run();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use similar_asserts::assert_eq;

    fn modern(result: &str, raw: &str) -> BsaSubtest {
        BsaSubtest::new("X", "", result).with_raw_status(raw)
    }

    #[test]
    fn test_partial_counts_only_overlay() {
        let sub = modern("PASSED(*PARTIAL)", "PASSED (PARTIAL)");
        assert_eq!(buckets(&sub), vec![Bucket::PassedPartial]);
    }

    #[test]
    fn test_not_tested_overlays() {
        let pal = modern(
            "NOT TESTED (PAL NOT SUPPORTED)",
            "NOT TESTED (PAL NOT SUPPORTED)",
        );
        assert_eq!(buckets(&pal), vec![Bucket::PalNotSupported]);

        // Overlay applies regardless of the primary class
        let skipped = modern("SKIPPED", "SKIPPED (TEST NOT IMPLEMENTED)");
        assert_eq!(
            buckets(&skipped),
            vec![Bucket::Skipped, Bucket::NotImplemented]
        );
    }

    #[test]
    fn test_waiver_beats_failed() {
        let legacy = BsaSubtest::new("3", "", "FAILED_WITH_WAIVER");
        assert_eq!(buckets(&legacy), vec![Bucket::FailedWithWaiver]);
        assert_eq!(buckets(&BsaSubtest::new("4", "", "FAILED")), vec![Bucket::Failed]);
    }

    #[test]
    fn test_warning_like_results() {
        for result in ["ABORTED", "WARNING", "STATUS"] {
            assert_eq!(
                buckets(&BsaSubtest::new("1", "", result)),
                vec![Bucket::Warnings]
            );
        }
        assert!(buckets(&BsaSubtest::new("1", "", "UNKNOWN")).is_empty());
    }

    #[test]
    fn test_summary_total_excludes_waiver() {
        let subtests = vec![
            BsaSubtest::new("1", "", "PASSED"),
            BsaSubtest::new("2", "", "FAILED"),
            BsaSubtest::new("3", "", "FAILED (WAIVER)"),
            modern("PASSED(*PARTIAL)", "PASSED (PARTIAL)"),
            modern("STATUS", "STATUS: 0x1"),
        ];
        let summary = BsaSummary::from_subtests(&subtests);
        assert_eq!(summary.passed, 1);
        assert_eq!(summary.failed, 1);
        assert_eq!(summary.total_failed_with_waiver, 1);
        assert_eq!(summary.passed_partial, 1);
        assert_eq!(summary.warnings, 1);
        assert_eq!(summary.total_rules_run, 4);
    }

    #[test]
    fn test_absorb_refreshes_total() {
        let a = BsaSummary::from_subtests(&[BsaSubtest::new("1", "", "PASSED")]);
        let b = BsaSummary::from_subtests(&[BsaSubtest::new("1", "", "SKIPPED")]);
        let mut run = BsaSummary::default();
        run.absorb(&a);
        run.absorb(&b);
        assert_eq!(run.total_rules_run, 2);
        assert_eq!(run.skipped, 1);
    }
}

#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    /// Result texts the session can store, plus arbitrary leftovers
    fn result_strategy() -> impl Strategy<Value = String> {
        prop_oneof![
            Just("PASSED".to_string()),
            Just("FAILED".to_string()),
            Just("SKIPPED".to_string()),
            Just("WARNING".to_string()),
            Just("ABORTED".to_string()),
            Just("STATUS".to_string()),
            Just("PASSED(*PARTIAL)".to_string()),
            Just("FAILED (WAIVER)".to_string()),
            "[A-Z ()]{0,20}",
        ]
    }

    fn subtest_strategy() -> impl Strategy<Value = BsaSubtest> {
        (
            "[A-Z0-9_]{1,8}",
            result_strategy(),
            proptest::option::of("[A-Za-z ()]{0,30}"), // raw status
        )
            .prop_map(|(id, result, raw)| {
                let sub = BsaSubtest::new(id, "", result);
                match raw {
                    Some(raw) => sub.with_raw_status(raw),
                    None => sub,
                }
            })
    }

    proptest! {
        /// Property: Total Rules Run is the bucket sum without waivers
        #[test]
        fn prop_total_rules_run_formula(
            subtests in proptest::collection::vec(subtest_strategy(), 0..40)
        ) {
            let s = BsaSummary::from_subtests(&subtests);
            prop_assert_eq!(
                s.total_rules_run,
                s.passed + s.failed + s.skipped + s.warnings
                    + s.pal_not_supported + s.not_implemented + s.passed_partial
            );
        }

        /// Property: each subtest lands in at most one primary bucket
        #[test]
        fn prop_single_primary_bucket(sub in subtest_strategy()) {
            let primary = buckets(&sub)
                .into_iter()
                .filter(|b| PRIMARY_BUCKETS.iter().any(|rule| rule.tag == *b))
                .count();
            prop_assert!(primary <= 1);
        }

        /// Property: absorbing split halves equals summarizing the whole
        #[test]
        fn prop_absorb_matches_whole(
            subtests in proptest::collection::vec(subtest_strategy(), 0..40),
            split in 0usize..40
        ) {
            let split = split.min(subtests.len());
            let (left, right) = subtests.split_at(split);
            let mut run = BsaSummary::from_subtests(left);
            run.absorb(&BsaSummary::from_subtests(right));
            prop_assert_eq!(run, BsaSummary::from_subtests(&subtests));
        }
    }
}
