// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! BSA/SBSA parse session
//!
//! A [`BsaSession`] owns every accumulator of one run: the processing flag,
//! the current suite, tests opened by `START` and still waiting for `END`,
//! per-suite seen ids and the legacy cursor. Files fed to the same session
//! share all of it, so a test started in one file can end in the next.

use std::collections::{HashMap, HashSet};

use indexmap::IndexMap;
use tracing::{debug, info, trace};

use crate::bsa::line::{self, BsaLine};
use crate::bsa::model::{BsaReport, BsaSubtest, BsaSuite, BsaSummary};
use crate::bsa::status::{self, UNKNOWN};

/// A test opened by `START` and not yet closed by `END`
#[derive(Debug, Clone, Default)]
struct ActiveTest {
    suite: String,
    description: String,
}

/// A numbered legacy test waiting for its `: Result:` line
#[derive(Debug, Clone)]
struct PendingSubtest {
    number: String,
    description: String,
    rules: String,
}

impl PendingSubtest {
    fn append_rule(&mut self, text: &str) {
        append_spaced(&mut self.rules, text);
    }

    fn append_description(&mut self, text: &str) {
        append_spaced(&mut self.description, text);
    }

    fn close(self, word: Option<&str>) -> BsaSubtest {
        let result = word.map_or_else(|| UNKNOWN.to_string(), status::legacy_result);
        let rules = self.rules.trim();
        let mut subtest = BsaSubtest::new(self.number, self.description, result);
        if !rules.is_empty() {
            match subtest.result.as_str() {
                "FAILED" => subtest.rules_failed = Some(rules.to_string()),
                "SKIPPED" => subtest.rules_skipped = Some(rules.to_string()),
                _ => {}
            }
        }
        subtest
    }
}

fn append_spaced(target: &mut String, text: &str) {
    if !target.is_empty() {
        target.push(' ');
    }
    target.push_str(text);
}

#[derive(Debug, Default)]
enum Legacy {
    #[default]
    Idle,
    Pending(PendingSubtest),
}

/// Parse state for one BSA/SBSA run
#[derive(Debug, Default)]
pub struct BsaSession {
    processing: bool,
    suite_name: String,
    active: HashMap<String, ActiveTest>,
    seen: HashMap<String, HashSet<String>>,
    suites: IndexMap<String, Vec<BsaSubtest>>,
    legacy: Legacy,
}

impl BsaSession {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed every line of one decoded log file
    pub fn feed_file(&mut self, text: &str) {
        for raw in text.lines() {
            self.feed_line(raw);
        }
    }

    /// Feed one raw line, decoration included
    pub fn feed_line(&mut self, raw: &str) {
        let line = line::undecorate(raw);

        if !self.processing && line::starts_processing(line) {
            debug!("processing enabled");
            self.processing = true;
        }

        match line::classify(line) {
            BsaLine::Start {
                suite,
                id,
                description,
            } => {
                if suite != "-" {
                    self.suite_name = suite.to_string();
                }
                self.active.insert(
                    id.to_string(),
                    ActiveTest {
                        suite: self.suite_name.clone(),
                        description: description.to_string(),
                    },
                );
            }
            BsaLine::End { id, status } => self.end_test(id, status),
            BsaLine::SuiteBanner { name } => {
                debug!(suite = %name, "legacy suite banner");
                self.suite_name = name;
                self.processing = true;
                self.legacy = Legacy::Idle;
            }
            _ if !self.processing => {}
            BsaLine::Blank => {}
            BsaLine::InlineResult { number, name, word } => {
                self.legacy = Legacy::Idle;
                let subtest = BsaSubtest::new(number, name, status::legacy_result(word));
                let suite = self.suite_name.clone();
                self.accept(suite, subtest);
            }
            BsaLine::Numbered { number, name } => {
                self.legacy = Legacy::Pending(PendingSubtest {
                    number: number.to_string(),
                    description: name.to_string(),
                    rules: String::new(),
                });
            }
            event => self.step_legacy(event),
        }
    }

    /// Compute summaries and hand back the report
    #[must_use]
    pub fn finish(self) -> BsaReport {
        if let Legacy::Pending(pending) = &self.legacy {
            debug!(number = %pending.number, "dropping unterminated legacy test");
        }
        if !self.active.is_empty() {
            debug!(open = self.active.len(), "tests started without END");
        }

        let mut suite_summary = BsaSummary::default();
        let test_results: Vec<BsaSuite> = self
            .suites
            .into_iter()
            .map(|(name, subtests)| {
                let summary = BsaSummary::from_subtests(&subtests);
                suite_summary.absorb(&summary);
                BsaSuite {
                    name,
                    subtests,
                    summary,
                }
            })
            .collect();

        info!(
            suites = test_results.len(),
            rules_run = suite_summary.total_rules_run,
            passed = suite_summary.passed,
            failed = suite_summary.failed,
            "parsed BSA logs"
        );
        BsaReport {
            test_results,
            suite_summary,
        }
    }

    fn end_test(&mut self, id: &str, status_text: &str) {
        let ActiveTest { suite, description } = self.active.remove(id).unwrap_or_default();
        let class = status::classify(status_text);
        let mut subtest =
            BsaSubtest::new(id, description, status::result_text(status_text, class));
        if !status_text.is_empty() {
            subtest = subtest.with_raw_status(status_text);
        }
        self.accept(suite, subtest);
    }

    fn step_legacy(&mut self, event: BsaLine<'_>) {
        let legacy = std::mem::take(&mut self.legacy);
        self.legacy = match (legacy, event) {
            (Legacy::Pending(pending), BsaLine::ResultContinuation { word }) => {
                // owned by the suite current when the result arrives
                let suite = self.suite_name.clone();
                self.accept(suite, pending.close(word));
                Legacy::Idle
            }
            (Legacy::Pending(mut pending), BsaLine::Rule(text)) => {
                pending.append_rule(text);
                Legacy::Pending(pending)
            }
            (Legacy::Pending(mut pending), BsaLine::Text(text)) => {
                pending.append_description(text);
                Legacy::Pending(pending)
            }
            (legacy, event) => {
                trace!(?event, "ignoring line");
                legacy
            }
        };
    }

    /// Store `subtest` unless its id was already seen in `suite`
    fn accept(&mut self, suite: String, subtest: BsaSubtest) {
        if !self
            .seen
            .entry(suite.clone())
            .or_default()
            .insert(subtest.id.clone())
        {
            trace!(suite = %suite, id = %subtest.id, "duplicate test dropped");
            return;
        }
        self.suites.entry(suite).or_default().push(subtest);
    }
}

/// Parse a set of decoded BSA logs as one run, in order
#[must_use]
pub fn parse<I, S>(files: I) -> BsaReport
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut session = BsaSession::new();
    for file in files {
        session.feed_file(file.as_ref());
    }
    session.finish()
}
