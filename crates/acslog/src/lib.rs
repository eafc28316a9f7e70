// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! acslog library
//!
//! This module exports the command line configuration, input decoding and
//! subcommand runners of the `acslog` binary for use in integration tests.

pub mod config;
pub mod input;
pub mod run;
