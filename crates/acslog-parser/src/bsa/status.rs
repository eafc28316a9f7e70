// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Status text classification
//!
//! Every keyword decision in the BSA pipeline is an ordered table of
//! [`Rule`]s so that precedence reads top to bottom in one place:
//!
//! - [`STATUS_RULES`]: classify the text of an `END <id> <status>` line
//! - [`LEGACY_WORDS`]: map the word after `Result:` in the numbered dialect
//! - [`crate::bsa::summary`] holds the bucket tables used for counting

/// A substring test on already-normalized text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Matcher {
    /// Every needle occurs somewhere in the text
    AllOf(&'static [&'static str]),
    /// The text starts with the prefix
    StartsWith(&'static str),
    /// The text is exactly this value
    Equals(&'static str),
}

impl Matcher {
    /// Check the matcher against `text`
    #[must_use]
    pub fn matches(&self, text: &str) -> bool {
        match self {
            Self::AllOf(needles) => needles.iter().all(|needle| text.contains(needle)),
            Self::StartsWith(prefix) => text.starts_with(prefix),
            Self::Equals(value) => text == *value,
        }
    }
}

/// One row of a precedence table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rule<T> {
    pub matcher: Matcher,
    pub tag: T,
}

impl<T: Copy> Rule<T> {
    /// First matching tag in `rules`
    pub fn first(rules: &[Self], text: &str) -> Option<T> {
        rules
            .iter()
            .find(|rule| rule.matcher.matches(text))
            .map(|rule| rule.tag)
    }

    /// Every matching tag in `rules`, in table order
    pub fn all<'a>(rules: &'a [Self], text: &'a str) -> impl Iterator<Item = T> + 'a
    where
        T: 'a,
    {
        rules
            .iter()
            .filter(move |rule| rule.matcher.matches(text))
            .map(|rule| rule.tag)
    }
}

/// Normalized class of a BSA status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusClass {
    PassedPartial,
    PalNotSupported,
    NotImplemented,
    Passed,
    Failed,
    Skipped,
    Status,
    Unknown,
}

/// Status precedence, evaluated on the upper-cased status text
pub const STATUS_RULES: &[Rule<StatusClass>] = &[
    Rule {
        matcher: Matcher::AllOf(&["PASSED", "PARTIAL"]),
        tag: StatusClass::PassedPartial,
    },
    Rule {
        matcher: Matcher::AllOf(&["NOT TESTED", "PAL NOT SUPPORTED"]),
        tag: StatusClass::PalNotSupported,
    },
    Rule {
        matcher: Matcher::AllOf(&["NOT TESTED", "NOT IMPLEMENTED"]),
        tag: StatusClass::NotImplemented,
    },
    Rule {
        matcher: Matcher::AllOf(&["PASSED"]),
        tag: StatusClass::Passed,
    },
    Rule {
        matcher: Matcher::AllOf(&["FAILED"]),
        tag: StatusClass::Failed,
    },
    Rule {
        matcher: Matcher::AllOf(&["SKIPPED"]),
        tag: StatusClass::Skipped,
    },
    Rule {
        matcher: Matcher::StartsWith("STATUS:"),
        tag: StatusClass::Status,
    },
];

/// Legacy `Result:` words with a canonical spelling; others are kept verbatim
pub const LEGACY_WORDS: &[(&str, &str)] = &[
    ("PASS", "PASSED"),
    ("FAIL", "FAILED"),
    ("SKIPPED", "SKIPPED"),
];

/// Result text used when nothing better is known
pub const UNKNOWN: &str = "UNKNOWN";
/// Result text stored for partial passes
pub const PASSED_PARTIAL: &str = "PASSED(*PARTIAL)";

/// Classify status text (case-insensitive)
#[must_use]
pub fn classify(status: &str) -> StatusClass {
    let upper = status.to_uppercase();
    Rule::first(STATUS_RULES, &upper).unwrap_or(StatusClass::Unknown)
}

/// Text stored as `sub_test_result` for a classified `END` status
///
/// The two "not tested" classes keep the harness wording; unknown statuses
/// are kept verbatim.
#[must_use]
pub fn result_text(status: &str, class: StatusClass) -> String {
    match class {
        StatusClass::PalNotSupported | StatusClass::NotImplemented => status.to_string(),
        StatusClass::PassedPartial => PASSED_PARTIAL.to_string(),
        StatusClass::Passed => "PASSED".to_string(),
        StatusClass::Failed => "FAILED".to_string(),
        StatusClass::Skipped => "SKIPPED".to_string(),
        StatusClass::Status => "STATUS".to_string(),
        StatusClass::Unknown if status.is_empty() => UNKNOWN.to_string(),
        StatusClass::Unknown => status.to_string(),
    }
}

/// Canonical spelling of a legacy `Result:` word
#[must_use]
pub fn legacy_result(word: &str) -> String {
    LEGACY_WORDS
        .iter()
        .find(|(raw, _)| *raw == word)
        .map_or_else(|| word.to_string(), |(_, canonical)| (*canonical).to_string())
}
