// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Fuzz target for the BSA session
//!
//! Input is split on NUL bytes so one run can span several "files".

#![no_main]

use libfuzzer_sys::fuzz_target;

use acslog_parser::BsaSession;

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        let mut session = BsaSession::new();
        for file in input.split('\0') {
            session.feed_file(file);
        }
        let report = session.finish();
        assert_eq!(
            report.suite_summary.total_rules_run,
            report.suite_summary.rules_run()
        );
    }
});
