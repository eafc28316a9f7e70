// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! BSA line classification
//!
//! Recognizes both dialects printed by the ACS binaries:
//!
//! ```text
//!  *** Starting PE tests ***
//!    1 : Check Arch64 exec state              : Result:  PASS
//!    2 : Check for number of PMU counters
//!        B_PE_02
//!        : Result:  FAIL
//!
//! START PE B_PE_01 : Check PE Arch64 exec state
//! END B_PE_01 PASSED
//! ```

use std::sync::LazyLock;

use regex::Regex;

static DECORATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\[.*?\]\s*").expect("valid regex"));
static START: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^START\s+([^\s:]+)\s+([A-Z0-9_]+)\s*:\s*(.*)$").expect("valid regex")
});
static END: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^END\s+([A-Z0-9_]+)\s+(.*)$").expect("valid regex"));
static SUITE_BANNER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*\* Starting (.*) tests \*\*\*").expect("valid regex"));
static INLINE_RESULT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(\d+)\s*:\s*(.*?)\s*: Result:\s*(\w+)$").expect("valid regex")
});
static NUMBERED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*(\d+)\s*:\s*(.*)$").expect("valid regex"));
static RESULT_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r": Result:\s*(\w+)").expect("valid regex"));

/// Banner printed before the rule-based test list
pub const RUNNING_TESTS_BANNER: &str = "---------------------- Running tests ------------------------";
const SELECTED_RULES: &str = "Selected rules:";
const STARTING_MARKER: &str = "*** Starting";
const RESULT_MARKER: &str = ": Result:";

/// Suite names printed under a different name than they are reported under
pub const SUITE_ALIASES: &[(&str, &str)] = &[("GICv2m", "GIC")];

/// Structural meaning of one (already undecorated) BSA line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BsaLine<'a> {
    /// `START <suite|-> <id> : <description>`
    Start {
        suite: &'a str,
        id: &'a str,
        description: &'a str,
    },
    /// `END <id> <status text>`
    End { id: &'a str, status: &'a str },
    /// `*** Starting <suite> tests ***`, name already aliased
    SuiteBanner { name: String },
    /// Empty line
    Blank,
    /// `<n> : <name> : Result: <WORD>`
    InlineResult {
        number: &'a str,
        name: &'a str,
        word: &'a str,
    },
    /// `<n> : <name>` with the result on a later line
    Numbered { number: &'a str, name: &'a str },
    /// A line carrying `: Result:`, with the word after it if any
    ResultContinuation { word: Option<&'a str> },
    /// Rule identifiers or an `Appendix ...` reference
    Rule(&'a str),
    /// Anything else
    Text(&'a str),
}

/// Trim a raw line and drop one leading `[...]` decoration
#[must_use]
pub fn undecorate(raw: &str) -> &str {
    let line = raw.trim();
    match DECORATION.find(line) {
        Some(m) => &line[m.end()..],
        None => line,
    }
}

/// Check whether `line` switches the session into processing mode
#[must_use]
pub fn starts_processing(line: &str) -> bool {
    line.starts_with("START ") || line.contains(RUNNING_TESTS_BANNER) || line.contains(SELECTED_RULES)
}

/// Apply [`SUITE_ALIASES`]
#[must_use]
pub fn canonical_suite(name: &str) -> &str {
    SUITE_ALIASES
        .iter()
        .find(|(alias, _)| *alias == name)
        .map_or(name, |(_, canonical)| canonical)
}

/// Requirement-level words printed on their own under a legacy test
pub const REQUIREMENT_LEVELS: &[&str] = &["Mandatory", "Recommended", "Optional", "Conditional"];

/// Check whether `line` is a rule annotation
///
/// Rule lines either start with `Appendix` or consist of upper-case rule ids
/// (`B_PE_01, B_PE_02`) and [`REQUIREMENT_LEVELS`] words separated by spaces
/// or commas.
#[must_use]
pub fn is_rule_line(line: &str) -> bool {
    if line.starts_with("Appendix") {
        return true;
    }
    !line.is_empty()
        && line
            .split([' ', ','])
            .filter(|token| !token.is_empty())
            .all(|token| is_rule_id(token) || REQUIREMENT_LEVELS.contains(&token))
}

fn is_rule_id(token: &str) -> bool {
    token
        .chars()
        .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_')
}

/// Classify one undecorated line
#[must_use]
pub fn classify(line: &str) -> BsaLine<'_> {
    if let Some(caps) = START.captures(line) {
        let group = |i| caps.get(i).map_or("", |m| m.as_str().trim());
        return BsaLine::Start {
            suite: group(1),
            id: group(2),
            description: group(3),
        };
    }

    if let Some(caps) = END.captures(line) {
        let group = |i| caps.get(i).map_or("", |m| m.as_str().trim());
        return BsaLine::End {
            id: group(1),
            status: group(2),
        };
    }

    if line.contains(STARTING_MARKER) {
        let name = match SUITE_BANNER.captures(line).and_then(|caps| caps.get(1)) {
            Some(m) => m.as_str().trim(),
            None => banner_fallback(line),
        };
        return BsaLine::SuiteBanner {
            name: canonical_suite(name).to_string(),
        };
    }

    if line.trim().is_empty() {
        return BsaLine::Blank;
    }

    if let Some(caps) = INLINE_RESULT.captures(line) {
        let group = |i| caps.get(i).map_or("", |m| m.as_str().trim());
        return BsaLine::InlineResult {
            number: group(1),
            name: group(2),
            word: group(3),
        };
    }

    if let Some(caps) = NUMBERED.captures(line) {
        let group = |i| caps.get(i).map_or("", |m| m.as_str().trim());
        return BsaLine::Numbered {
            number: group(1),
            name: group(2),
        };
    }

    if line.contains(RESULT_MARKER) {
        let word = RESULT_WORD
            .captures(line)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str());
        return BsaLine::ResultContinuation { word };
    }

    let text = line.trim();
    if is_rule_line(text) {
        BsaLine::Rule(text)
    } else {
        BsaLine::Text(text)
    }
}

/// Suite name of a banner that lacks the closing `tests ***`
fn banner_fallback(line: &str) -> &str {
    let after = line
        .split_once(STARTING_MARKER)
        .map_or("", |(_, rest)| rest);
    after.split("tests").next().unwrap_or("").trim()
}

#[cfg(test)]
mod tests {
    use super::*;
    use similar_asserts::assert_eq;

    #[test]
    fn test_undecorate() {
        assert_eq!(undecorate("  [  12.345] END B_PE_01 PASSED  "), "END B_PE_01 PASSED");
        assert_eq!(undecorate("[INFO][x] keep second"), "[x] keep second");
        assert_eq!(undecorate("no decoration"), "no decoration");
    }

    #[test]
    fn test_processing_triggers() {
        assert!(starts_processing("START PE B_PE_01 : x"));
        assert!(starts_processing(RUNNING_TESTS_BANNER));
        assert!(starts_processing("Selected rules: B_PE_01"));
        assert!(!starts_processing("STARTS here"));
    }

    #[test]
    fn test_classify_start_and_end() {
        assert_eq!(
            classify("START PE B_PE_01 : Check PE Arch64 exec state"),
            BsaLine::Start {
                suite: "PE",
                id: "B_PE_01",
                description: "Check PE Arch64 exec state",
            }
        );
        assert_eq!(
            classify("START - B_PE_02: "),
            BsaLine::Start {
                suite: "-",
                id: "B_PE_02",
                description: "",
            }
        );
        assert_eq!(
            classify("END B_PE_01 PASSED (PARTIAL)"),
            BsaLine::End {
                id: "B_PE_01",
                status: "PASSED (PARTIAL)",
            }
        );
        // lowercase ids are not modern test ids
        assert_eq!(classify("END pe_01 PASSED"), BsaLine::Text("END pe_01 PASSED"));
    }

    #[test]
    fn test_classify_suite_banner() {
        assert_eq!(
            classify("*** Starting GICv2m tests ***"),
            BsaLine::SuiteBanner {
                name: "GIC".to_string()
            }
        );
        assert_eq!(
            classify("*** Starting Peripheral tests"),
            BsaLine::SuiteBanner {
                name: "Peripheral".to_string()
            }
        );
    }

    #[test]
    fn test_classify_legacy_lines() {
        assert_eq!(
            classify("1 : Check Arch64 exec state              : Result:  PASS"),
            BsaLine::InlineResult {
                number: "1",
                name: "Check Arch64 exec state",
                word: "PASS",
            }
        );
        assert_eq!(
            classify("12 : Verify PE Register"),
            BsaLine::Numbered {
                number: "12",
                name: "Verify PE Register",
            }
        );
        assert_eq!(
            classify(": Result:  FAIL"),
            BsaLine::ResultContinuation { word: Some("FAIL") }
        );
        assert_eq!(
            classify("Checkpoint --  3 : Result: "),
            BsaLine::ResultContinuation { word: None }
        );
    }

    #[test]
    fn test_rule_lines() {
        assert!(is_rule_line("B_PE_01, B_PE_02"));
        assert!(is_rule_line("Mandatory"));
        assert!(is_rule_line("Appendix E.2 (deprecated)"));
        assert!(is_rule_line("S_L3PE_01"));
        assert!(!is_rule_line("Failed on PE -    0"));
        assert!(!is_rule_line("Checkpoint --  3"));
        assert!(!is_rule_line(""));
        assert!(is_rule_line("B_PE_01, Mandatory"));
    }

    #[test]
    fn test_capitalized_sentence_is_not_a_rule() {
        assert!(!is_rule_line("PE Register Check"));
        assert!(!is_rule_line("Mandatory check skipped"));
        assert!(!is_rule_line("B_pe_01"));
        assert_eq!(classify("PE Register Check"), BsaLine::Text("PE Register Check"));

        assert_eq!(classify("   B_PE_01  "), BsaLine::Rule("B_PE_01"));
        assert_eq!(
            classify("Failed on PE -    0"),
            BsaLine::Text("Failed on PE -    0")
        );
    }

    #[test]
    fn test_blank() {
        assert_eq!(classify(""), BsaLine::Blank);
        assert_eq!(classify("   "), BsaLine::Blank);
    }
}
