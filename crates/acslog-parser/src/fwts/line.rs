// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! FWTS line classification
//!
//! Classification is per line and keeps no state. Which tokens count as suite
//! names is decided once per log by [`harvest_suite_names`]; everything that
//! spans lines lives in [`crate::fwts::parser`].

use std::sync::LazyLock;

use regex::Regex;

use crate::fwts::model::OutcomeKind;

static SUBTEST_START: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^Test (\d+) of (\d+): (.+)").expect("valid regex"));
static WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\b(\w+)\b").expect("valid regex"));
static SEPARATOR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[=\-]+$").expect("valid regex"));

const RUNNING_TESTS: &str = "Running tests:";

/// Reason recorded when an outcome line carries no `KEYWORD:` text
pub const NO_SPECIFIC_REASON: &str = "No specific reason";

/// Outcome keywords in priority order; the first one found on a line wins.
///
/// | keyword   | outcome            |
/// |-----------|--------------------|
/// | `PASSED`  | [`OutcomeKind::Passed`]  |
/// | `FAILED`  | [`OutcomeKind::Failed`]  |
/// | `SKIPPED` | [`OutcomeKind::Skipped`] |
/// | `WARNING` | [`OutcomeKind::Warning`] |
pub const OUTCOME_KEYWORDS: &[(&str, OutcomeKind)] = &[
    ("PASSED", OutcomeKind::Passed),
    ("FAILED", OutcomeKind::Failed),
    ("SKIPPED", OutcomeKind::Skipped),
    ("WARNING", OutcomeKind::Warning),
];

const ABORT_MARKERS: &[&str] = &["Aborted", "ABORTED"];

/// A suite header line such as `acpitables: ACPI table settings sanity tests.`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuiteStart<'a> {
    pub name: &'a str,
    pub description: String,
}

/// Structural meaning of one FWTS line, apart from suite headers
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FwtsLine<'a> {
    /// `Test K of N: description`
    SubtestStart {
        number: &'a str,
        total: &'a str,
        description: &'a str,
    },
    /// Any line mentioning `Aborted`/`ABORTED`; carries the trimmed line
    Abort(&'a str),
    /// A line carrying an outcome keyword and its reason text
    Outcome { kind: OutcomeKind, reason: String },
    /// Everything else
    Noise,
}

/// Collect the suite names announced by the `Running tests:` preamble
///
/// Word tokens are taken from the text after the first `:` of the banner and
/// from every following line up to a separator made of `=`/`-` characters.
#[must_use]
pub fn harvest_suite_names(log: &str) -> Vec<String> {
    let mut names = Vec::new();
    let mut started = false;

    for line in log.lines() {
        if line.contains(RUNNING_TESTS) {
            started = true;
            let listed = line.split_once(':').map_or("", |(_, rest)| rest).trim();
            names.extend(words(listed));
        } else if started {
            let trimmed = line.trim();
            if SEPARATOR.is_match(trimmed) {
                break;
            }
            names.extend(words(trimmed));
        }
    }

    names
}

fn words(text: &str) -> impl Iterator<Item = String> + '_ {
    WORD.captures_iter(text).map(|caps| caps[1].to_string())
}

/// Classifier bound to the suite names of one log
#[derive(Debug, Clone, Default)]
pub struct FwtsClassifier {
    suite_names: Vec<String>,
}

impl FwtsClassifier {
    /// Create a classifier recognizing the given suite names
    #[must_use]
    pub fn new(suite_names: Vec<String>) -> Self {
        Self { suite_names }
    }

    /// Create a classifier from the preamble of `log`
    #[must_use]
    pub fn for_log(log: &str) -> Self {
        Self::new(harvest_suite_names(log))
    }

    /// Suite names this classifier recognizes
    #[must_use]
    pub fn suite_names(&self) -> &[String] {
        &self.suite_names
    }

    /// Check whether `line` opens a suite (`<name>:` at the start of the line)
    #[must_use]
    pub fn suite_start<'a>(&'a self, line: &str) -> Option<SuiteStart<'a>> {
        let name = self.suite_names.iter().find(|name| {
            line.strip_prefix(name.as_str())
                .is_some_and(|rest| rest.starts_with(':'))
        })?;
        let description = line
            .split_once(':')
            .map_or_else(|| "No description".to_string(), |(_, rest)| rest.trim().to_string());
        Some(SuiteStart {
            name: name.as_str(),
            description,
        })
    }

    /// Classify a line that is not consumed as a suite header
    #[must_use]
    pub fn classify<'a>(&self, line: &'a str) -> FwtsLine<'a> {
        classify(line)
    }
}

/// Classify one line into a subtest start, abort, outcome or noise
#[must_use]
pub fn classify(line: &str) -> FwtsLine<'_> {
    if let Some(caps) = SUBTEST_START.captures(line) {
        let (Some(number), Some(total), Some(description)) = (caps.get(1), caps.get(2), caps.get(3))
        else {
            return FwtsLine::Noise;
        };
        return FwtsLine::SubtestStart {
            number: number.as_str(),
            total: total.as_str(),
            description: description.as_str().trim(),
        };
    }

    if ABORT_MARKERS.iter().any(|marker| line.contains(marker)) {
        return FwtsLine::Abort(line.trim());
    }

    match outcome(line) {
        Some((kind, reason)) => FwtsLine::Outcome { kind, reason },
        None => FwtsLine::Noise,
    }
}

/// Find the highest-priority outcome keyword on `line` and its reason
#[must_use]
pub fn outcome(line: &str) -> Option<(OutcomeKind, String)> {
    OUTCOME_KEYWORDS
        .iter()
        .find(|(keyword, _)| line.contains(keyword))
        .map(|&(keyword, kind)| (kind, reason_after(line, keyword)))
}

/// Reason text of a `SKIPPED` mention, wherever it sits in the keyword order
///
/// Used for skip lines that arrive while no subtest is open.
#[must_use]
pub fn skip_reason(line: &str) -> Option<String> {
    line.contains("SKIPPED")
        .then(|| reason_after(line, "SKIPPED"))
}

/// Text following `KEYWORD:` up to the next `KEYWORD:`, trimmed
fn reason_after(line: &str, keyword: &str) -> String {
    let marker = format!("{keyword}:");
    match line.split(marker.as_str()).nth(1) {
        Some(reason) => reason.trim().to_string(),
        None => NO_SPECIFIC_REASON.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use similar_asserts::assert_eq;

    const PREAMBLE: &str = "\
Results generated by fwts: Version V24.01.00 (2024-01-30 05:42:25).

Running tests: version bios_info acpitables
    uefirtvariable dmicheck.
=================================================================================

version: Gather kernel system information.
";

    #[test]
    fn test_harvest_suite_names_with_continuation() {
        assert_eq!(
            harvest_suite_names(PREAMBLE),
            ["version", "bios_info", "acpitables", "uefirtvariable", "dmicheck"]
        );
    }

    #[test]
    fn test_harvest_without_banner() {
        assert!(harvest_suite_names("acpitables: tests\nPASSED: ok\n").is_empty());
    }

    #[test]
    fn test_suite_start_requires_colon_after_token() {
        let classifier = FwtsClassifier::for_log(PREAMBLE);
        let start = classifier
            .suite_start("version: Gather kernel system information.")
            .expect("suite start");
        assert_eq!(start.name, "version");
        assert_eq!(start.description, "Gather kernel system information.");

        assert!(classifier.suite_start("version 5.15").is_none());
        assert!(classifier.suite_start("  version: indented").is_none());
        assert!(classifier.suite_start("klog: not announced").is_none());
    }

    #[test]
    fn test_suite_start_empty_description() {
        let classifier = FwtsClassifier::new(vec!["dmicheck".to_string()]);
        let start = classifier.suite_start("dmicheck:").expect("suite start");
        assert_eq!(start.description, "");
    }

    #[test]
    fn test_classify_subtest_start() {
        assert_eq!(
            classify("Test 2 of 7: Check DSDT table.  "),
            FwtsLine::SubtestStart {
                number: "2",
                total: "7",
                description: "Check DSDT table.",
            }
        );
        assert_eq!(classify("  Test 2 of 7: indented"), FwtsLine::Noise);
    }

    #[test]
    fn test_classify_abort_wins_over_outcome() {
        assert_eq!(
            classify("  Aborted test, FAILED to open table.  "),
            FwtsLine::Abort("Aborted test, FAILED to open table.")
        );
        assert_eq!(classify("TEST ABORTED"), FwtsLine::Abort("TEST ABORTED"));
    }

    #[test]
    fn test_outcome_priority() {
        // PASSED beats FAILED on the same line
        assert_eq!(
            outcome("PASSED: no FAILED entries"),
            Some((OutcomeKind::Passed, "no FAILED entries".to_string()))
        );
        assert_eq!(
            outcome("WARNING: SKIPPED something"),
            Some((OutcomeKind::Skipped, NO_SPECIFIC_REASON.to_string()))
        );
        assert_eq!(outcome("nothing to see"), None);
    }

    #[test]
    fn test_skip_reason_ignores_priority() {
        assert_eq!(
            skip_reason("PASSED part, SKIPPED: rest"),
            Some("rest".to_string())
        );
        assert_eq!(skip_reason("PASSED: all good"), None);
    }

    #[test]
    fn test_reason_stops_at_repeated_marker() {
        assert_eq!(
            outcome("FAILED: first FAILED: second"),
            Some((OutcomeKind::Failed, "first".to_string()))
        );
        assert_eq!(
            outcome("Test FAILED."),
            Some((OutcomeKind::Failed, NO_SPECIFIC_REASON.to_string()))
        );
    }
}
