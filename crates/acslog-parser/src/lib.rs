// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! acslog-parser: structured results from firmware conformance test logs
//!
//! This library crate turns the plain-text logs written by platform test
//! harnesses into a result tree with roll-up counters. Two log families are
//! supported:
//!
//! - [`fwts`]: Firmware Test Suite `results.log` output, one file per run
//! - [`bsa`]: BSA/SBSA ACS output, mixing the legacy numbered dialect and the
//!   `START`/`END` dialect across one or more files
//!
//! The [`report`] module renders the parsed trees as JSON or JUnit XML.
//!
//! # Example
//!
//! ```
//! use acslog_parser::{bsa, fwts};
//!
//! let log = "Running tests: acpitables\n=====\nacpitables: ACPI table tests.\n\
//!            Test 1 of 1: Check tables\nPASSED: Table found\n";
//! let report = fwts::parse(log);
//! assert_eq!(report.suite_summary.total_passed, 1);
//!
//! let report = bsa::parse(["START PE PE_01 : Check PE\nEND PE_01 PASSED\n"]);
//! assert_eq!(report.suite_summary.passed, 1);
//! ```

pub mod bsa;
pub mod error;
pub mod fwts;
pub mod report;

pub use bsa::{BsaReport, BsaSession, BsaSubtest, BsaSuite, BsaSummary};
pub use error::ReportError;
pub use fwts::{FwtsOutcome, FwtsParser, FwtsReport, FwtsSubtest, FwtsSuite, FwtsSummary};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::bsa::{self, BsaReport, BsaSession};
    pub use crate::error::ReportError;
    pub use crate::fwts::{self, FwtsParser, FwtsReport};
    pub use crate::report::{junit, to_json};
}
