// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Fuzz target for the FWTS parser and JUnit writer

#![no_main]

use libfuzzer_sys::fuzz_target;

use acslog_parser::fwts;
use acslog_parser::report::junit;

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        let report = fwts::parse(input);
        // Any parsed tree must render
        let _ = junit::to_string(&report);
    }
});
