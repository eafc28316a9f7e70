// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! FWTS log state machine
//!
//! The parser walks the log once, moving a single [`Cursor`] between
//! `Idle`, `InSuite` and `InSubtest`. Finished subtests are flushed into
//! their suite and finished suites into the run as soon as the next header
//! appears, so a cursor never holds a subtest without its owning suite.

use tracing::{debug, info, trace};

use crate::fwts::line::{self, FwtsClassifier, FwtsLine};
use crate::fwts::model::{FwtsReport, FwtsSubtest, FwtsSuite, OutcomeKind};

/// Id given to subtests synthesized for stray abort/skip lines
pub const IMPLICIT_SUBTEST_ID: &str = "Test 1 of 1";
/// Description of a subtest synthesized for a stray abort line
pub const ABORTED_TEST: &str = "Aborted test";
/// Description of a subtest synthesized for a stray skip line
pub const SKIPPED_TEST: &str = "Skipped test";

#[derive(Debug, Default)]
enum Cursor {
    #[default]
    Idle,
    InSuite(FwtsSuite),
    InSubtest(FwtsSuite, FwtsSubtest),
}

/// Incremental parser for one FWTS log
#[derive(Debug)]
pub struct FwtsParser {
    classifier: FwtsClassifier,
    cursor: Cursor,
    suites: Vec<FwtsSuite>,
}

impl FwtsParser {
    /// Create a parser recognizing the suite names known to `classifier`
    #[must_use]
    pub fn new(classifier: FwtsClassifier) -> Self {
        Self {
            classifier,
            cursor: Cursor::Idle,
            suites: Vec::new(),
        }
    }

    /// Create a parser whose suite names come from the preamble of `log`
    #[must_use]
    pub fn for_log(log: &str) -> Self {
        let classifier = FwtsClassifier::for_log(log);
        debug!(suites = ?classifier.suite_names(), "harvested FWTS suite names");
        Self::new(classifier)
    }

    /// Process a single line of the log
    pub fn feed_line(&mut self, line: &str) {
        let mut cursor = std::mem::take(&mut self.cursor);

        let opened = self
            .classifier
            .suite_start(line)
            .map(|start| FwtsSuite::new(start.name, start.description));
        if let Some(suite) = opened {
            self.close(cursor);
            debug!(suite = %suite.name, "suite started");
            cursor = Cursor::InSuite(suite);
        }

        self.cursor = self.step(cursor, line);
    }

    /// Flush open state and compute all summaries
    #[must_use]
    pub fn finish(mut self) -> FwtsReport {
        let cursor = std::mem::take(&mut self.cursor);
        self.close(cursor);

        let report = FwtsReport::from_suites(self.suites);
        info!(
            suites = report.test_results.len(),
            passed = report.suite_summary.total_passed,
            failed = report.suite_summary.total_failed,
            aborted = report.suite_summary.total_aborted,
            skipped = report.suite_summary.total_skipped,
            warnings = report.suite_summary.total_warnings,
            "parsed FWTS log"
        );
        report
    }

    fn close(&mut self, cursor: Cursor) {
        match cursor {
            Cursor::Idle => {}
            Cursor::InSuite(suite) => self.suites.push(suite),
            Cursor::InSubtest(mut suite, subtest) => {
                suite.subtests.push(subtest);
                self.suites.push(suite);
            }
        }
    }

    fn step(&self, cursor: Cursor, text: &str) -> Cursor {
        let event = self.classifier.classify(text);

        match (cursor, event) {
            (Cursor::Idle, FwtsLine::Noise) => Cursor::Idle,
            (Cursor::Idle, event) => {
                trace!(?event, "dropping line outside any suite");
                Cursor::Idle
            }

            (
                Cursor::InSuite(suite),
                FwtsLine::SubtestStart {
                    number,
                    total,
                    description,
                },
            ) => Cursor::InSubtest(suite, open_subtest(number, total, description)),
            (
                Cursor::InSubtest(mut suite, previous),
                FwtsLine::SubtestStart {
                    number,
                    total,
                    description,
                },
            ) => {
                suite.subtests.push(previous);
                Cursor::InSubtest(suite, open_subtest(number, total, description))
            }

            (Cursor::InSuite(suite), FwtsLine::Abort(reason)) => {
                debug!(suite = %suite.name, "abort outside a subtest");
                let mut subtest = FwtsSubtest::new(IMPLICIT_SUBTEST_ID, ABORTED_TEST);
                subtest.result.record(OutcomeKind::Aborted, reason);
                Cursor::InSubtest(suite, subtest)
            }
            (Cursor::InSubtest(suite, mut subtest), FwtsLine::Abort(reason)) => {
                subtest.result.abort_reasons.push(reason.to_string());
                Cursor::InSubtest(suite, subtest)
            }

            (Cursor::InSubtest(suite, mut subtest), FwtsLine::Outcome { kind, reason }) => {
                subtest.result.record(kind, reason);
                Cursor::InSubtest(suite, subtest)
            }
            (Cursor::InSuite(mut suite), FwtsLine::Outcome { .. }) => {
                if let Some(reason) = line::skip_reason(text) {
                    debug!(suite = %suite.name, "skip outside a subtest");
                    let mut subtest = FwtsSubtest::new(IMPLICIT_SUBTEST_ID, SKIPPED_TEST);
                    subtest.result.record(OutcomeKind::Skipped, reason);
                    suite.subtests.push(subtest);
                }
                Cursor::InSuite(suite)
            }

            (cursor, FwtsLine::Noise) => cursor,
        }
    }
}

fn open_subtest(number: &str, total: &str, description: &str) -> FwtsSubtest {
    FwtsSubtest::new(format!("{number} of {total}"), description)
}

/// Parse a complete FWTS log
#[must_use]
pub fn parse(log: &str) -> FwtsReport {
    let mut parser = FwtsParser::for_log(log);
    for line in log.lines() {
        parser.feed_line(line);
    }
    parser.finish()
}


#[cfg(test)]
mod property_tests {
    use super::*;
    use crate::fwts::model::FwtsSummary;
    use proptest::prelude::*;

    /// Lines drawn from the shapes an FWTS log contains
    fn line_strategy() -> impl Strategy<Value = String> {
        prop_oneof![
            "(klog|dmicheck|acpitables): [a-z ]{0,20}",
            (1u32..5, 1u32..5).prop_map(|(k, n)| format!("Test {k} of {n}: check")),
            "(PASSED|FAILED|SKIPPED|WARNING): [a-z ]{0,20}",
            "  Aborted [a-z ]{0,10}",
            ".{0,40}",
        ]
    }

    fn log_strategy() -> impl Strategy<Value = String> {
        proptest::collection::vec(line_strategy(), 0..60).prop_map(|lines| {
            format!(
                "Running tests: klog dmicheck acpitables\n=====\n{}",
                lines.join("\n")
            )
        })
    }

    proptest! {
        /// Property: the run summary is the sum of the suite summaries
        #[test]
        fn prop_run_summary_is_sum_of_suites(log in log_strategy()) {
            let report = parse(&log);
            let mut expected = FwtsSummary::default();
            for suite in &report.test_results {
                prop_assert_eq!(suite.summary, FwtsSummary::from_subtests(&suite.subtests));
                expected.absorb(&suite.summary);
            }
            prop_assert_eq!(report.suite_summary, expected);
        }

        /// Property: every suite name comes from the preamble
        #[test]
        fn prop_suites_are_known(log in log_strategy()) {
            let report = parse(&log);
            for suite in &report.test_results {
                prop_assert!(["klog", "dmicheck", "acpitables"].contains(&suite.name.as_str()));
            }
        }
    }
}
