// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Firmware Test Suite (FWTS) logs
//!
//! An FWTS `results.log` starts with a `Running tests:` preamble naming every
//! test that will run. Each test then prints a `<name>: <description>` header
//! followed by `Test K of N: ...` blocks whose lines carry `PASSED`, `FAILED`,
//! `SKIPPED`, `WARNING` or abort markers.

pub mod line;
pub mod model;
pub mod parser;

pub use line::{FwtsClassifier, FwtsLine, harvest_suite_names};
pub use model::{FwtsOutcome, FwtsReport, FwtsSubtest, FwtsSuite, FwtsSummary, OutcomeKind};
pub use parser::{FwtsParser, parse};
