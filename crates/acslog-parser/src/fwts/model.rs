// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! FWTS result tree
//!
//! Field names serialize to the keys consumed by the ACS report tooling
//! (`Test_suite`, `sub_test_result`, `total_PASSED`, ...).

use serde::{Deserialize, Serialize};

/// One outcome keyword recognized on an FWTS line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutcomeKind {
    /// `PASSED`
    Passed,
    /// `FAILED`
    Failed,
    /// `ABORTED` / `Aborted`
    Aborted,
    /// `SKIPPED`
    Skipped,
    /// `WARNING`
    Warning,
}

/// Per-category counts and reasons collected for one FWTS subtest
///
/// A single FWTS subtest may report several outcomes, so the counts are
/// independent and need not sum to one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FwtsOutcome {
    #[serde(rename = "PASSED")]
    pub passed: u32,
    #[serde(rename = "FAILED")]
    pub failed: u32,
    #[serde(rename = "ABORTED")]
    pub aborted: u32,
    #[serde(rename = "SKIPPED")]
    pub skipped: u32,
    #[serde(rename = "WARNINGS")]
    pub warnings: u32,
    pub pass_reasons: Vec<String>,
    pub fail_reasons: Vec<String>,
    pub abort_reasons: Vec<String>,
    pub skip_reasons: Vec<String>,
    pub warning_reasons: Vec<String>,
}

impl FwtsOutcome {
    /// Count one occurrence of `kind` and keep its reason
    pub fn record(&mut self, kind: OutcomeKind, reason: impl Into<String>) {
        let (count, reasons) = match kind {
            OutcomeKind::Passed => (&mut self.passed, &mut self.pass_reasons),
            OutcomeKind::Failed => (&mut self.failed, &mut self.fail_reasons),
            OutcomeKind::Aborted => (&mut self.aborted, &mut self.abort_reasons),
            OutcomeKind::Skipped => (&mut self.skipped, &mut self.skip_reasons),
            OutcomeKind::Warning => (&mut self.warnings, &mut self.warning_reasons),
        };
        *count += 1;
        reasons.push(reason.into());
    }

    /// Get the count for one outcome category
    #[must_use]
    pub fn count(&self, kind: OutcomeKind) -> u32 {
        match kind {
            OutcomeKind::Passed => self.passed,
            OutcomeKind::Failed => self.failed,
            OutcomeKind::Aborted => self.aborted,
            OutcomeKind::Skipped => self.skipped,
            OutcomeKind::Warning => self.warnings,
        }
    }

    /// Get the reasons recorded for one outcome category
    #[must_use]
    pub fn reasons(&self, kind: OutcomeKind) -> &[String] {
        match kind {
            OutcomeKind::Passed => &self.pass_reasons,
            OutcomeKind::Failed => &self.fail_reasons,
            OutcomeKind::Aborted => &self.abort_reasons,
            OutcomeKind::Skipped => &self.skip_reasons,
            OutcomeKind::Warning => &self.warning_reasons,
        }
    }
}

/// One `Test K of N` block inside an FWTS suite
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FwtsSubtest {
    /// `"K of N"`, or `"Test 1 of 1"` for synthesized subtests
    #[serde(rename = "sub_Test_Number")]
    pub id: String,
    #[serde(rename = "sub_Test_Description")]
    pub description: String,
    #[serde(rename = "sub_test_result")]
    pub result: FwtsOutcome,
}

impl FwtsSubtest {
    /// Create a subtest with no outcomes yet
    #[must_use]
    pub fn new(id: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            description: description.into(),
            result: FwtsOutcome::default(),
        }
    }
}

/// Roll-up counters for a suite or a whole run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FwtsSummary {
    #[serde(rename = "total_PASSED")]
    pub total_passed: u32,
    #[serde(rename = "total_FAILED")]
    pub total_failed: u32,
    #[serde(rename = "total_ABORTED")]
    pub total_aborted: u32,
    #[serde(rename = "total_SKIPPED")]
    pub total_skipped: u32,
    #[serde(rename = "total_WARNINGS")]
    pub total_warnings: u32,
}

impl FwtsSummary {
    /// Sum the outcome counts of a sequence of subtests
    #[must_use]
    pub fn from_subtests<'a>(subtests: impl IntoIterator<Item = &'a FwtsSubtest>) -> Self {
        let mut summary = Self::default();
        for sub in subtests {
            summary.total_passed += sub.result.passed;
            summary.total_failed += sub.result.failed;
            summary.total_aborted += sub.result.aborted;
            summary.total_skipped += sub.result.skipped;
            summary.total_warnings += sub.result.warnings;
        }
        summary
    }

    /// Add another summary into this one
    pub fn absorb(&mut self, other: &Self) {
        self.total_passed += other.total_passed;
        self.total_failed += other.total_failed;
        self.total_aborted += other.total_aborted;
        self.total_skipped += other.total_skipped;
        self.total_warnings += other.total_warnings;
    }
}

/// One FWTS test (`acpitables`, `uefirtvariable`, ...)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FwtsSuite {
    #[serde(rename = "Test_suite")]
    pub name: String,
    #[serde(rename = "Test_suite_Description")]
    pub description: String,
    pub subtests: Vec<FwtsSubtest>,
    #[serde(rename = "test_suite_summary")]
    pub summary: FwtsSummary,
}

impl FwtsSuite {
    /// Create an empty suite
    #[must_use]
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            subtests: Vec::new(),
            summary: FwtsSummary::default(),
        }
    }

    /// Recompute the summary from the subtests
    pub fn seal(&mut self) {
        self.summary = FwtsSummary::from_subtests(&self.subtests);
    }
}

/// Parsed FWTS log
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FwtsReport {
    pub test_results: Vec<FwtsSuite>,
    pub suite_summary: FwtsSummary,
}

impl FwtsReport {
    /// Build a report from finished suites, computing every summary
    #[must_use]
    pub fn from_suites(mut suites: Vec<FwtsSuite>) -> Self {
        let mut suite_summary = FwtsSummary::default();
        for suite in &mut suites {
            suite.seal();
            suite_summary.absorb(&suite.summary);
        }
        Self {
            test_results: suites,
            suite_summary,
        }
    }

    /// Look up the first suite with the given name
    #[must_use]
    pub fn suite(&self, name: &str) -> Option<&FwtsSuite> {
        self.test_results.iter().find(|s| s.name == name)
    }

    /// Total number of subtests across all suites
    #[must_use]
    pub fn subtest_count(&self) -> usize {
        self.test_results.iter().map(|s| s.subtests.len()).sum()
    }
}
