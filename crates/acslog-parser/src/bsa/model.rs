// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! BSA/SBSA result tree

use serde::{Deserialize, Serialize};

/// One accepted BSA test
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BsaSubtest {
    /// Legacy test number (`"12"`) or modern rule id (`"B_PE_01"`)
    #[serde(rename = "sub_Test_Number")]
    pub id: String,
    #[serde(rename = "sub_Test_Description")]
    pub description: String,
    /// Human-readable result text, see [`crate::bsa::status::result_text`]
    #[serde(rename = "sub_test_result")]
    pub result: String,
    /// Status text exactly as printed on an `END` line
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw_status: Option<String>,
    #[serde(
        rename = "RULES FAILED",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub rules_failed: Option<String>,
    #[serde(
        rename = "RULES SKIPPED",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub rules_skipped: Option<String>,
}

impl BsaSubtest {
    /// Create a subtest without raw status or rule annotations
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        description: impl Into<String>,
        result: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            description: description.into(),
            result: result.into(),
            raw_status: None,
            rules_failed: None,
            rules_skipped: None,
        }
    }

    /// Attach the raw `END` status text
    #[must_use]
    pub fn with_raw_status(mut self, raw_status: impl Into<String>) -> Self {
        self.raw_status = Some(raw_status.into());
        self
    }
}

/// Roll-up counters for a suite or a whole run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BsaSummary {
    #[serde(rename = "Total Rules Run")]
    pub total_rules_run: u32,
    #[serde(rename = "Passed")]
    pub passed: u32,
    #[serde(rename = "Passed (Partial)")]
    pub passed_partial: u32,
    #[serde(rename = "Warnings")]
    pub warnings: u32,
    #[serde(rename = "Skipped")]
    pub skipped: u32,
    #[serde(rename = "Failed")]
    pub failed: u32,
    #[serde(rename = "PAL Not Supported")]
    pub pal_not_supported: u32,
    #[serde(rename = "Not Implemented")]
    pub not_implemented: u32,
    pub total_failed_with_waiver: u32,
}

/// All subtests recorded for one suite
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BsaSuite {
    #[serde(rename = "Test_suite")]
    pub name: String,
    pub subtests: Vec<BsaSubtest>,
    #[serde(rename = "test_suite_summary")]
    pub summary: BsaSummary,
}

impl BsaSuite {
    /// Find a subtest by id
    #[must_use]
    pub fn subtest(&self, id: &str) -> Option<&BsaSubtest> {
        self.subtests.iter().find(|s| s.id == id)
    }
}

/// Parsed BSA run, possibly spanning several log files
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BsaReport {
    pub test_results: Vec<BsaSuite>,
    pub suite_summary: BsaSummary,
}

impl BsaReport {
    /// Look up a suite by name
    #[must_use]
    pub fn suite(&self, name: &str) -> Option<&BsaSuite> {
        self.test_results.iter().find(|s| s.name == name)
    }

    /// Total number of subtests across all suites
    #[must_use]
    pub fn subtest_count(&self) -> usize {
        self.test_results.iter().map(|s| s.subtests.len()).sum()
    }
}
