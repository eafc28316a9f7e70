// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! CLI parsing tests for the `fwts` and `bsa` subcommands

use std::path::{Path, PathBuf};

use acslog::config::{Command, Config, ReportFormat};
use clap::Parser;
use tracing::Level;

// ============================================================================
// fwts subcommand
// ============================================================================

#[test]
fn test_fwts_positional_paths() {
    let config = Config::try_parse_from(["acslog", "fwts", "results.log", "out.xml"])
        .expect("parse should succeed");
    match config.command {
        Some(Command::Fwts { log, output, .. }) => {
            assert_eq!(log, PathBuf::from("results.log"));
            assert_eq!(output, PathBuf::from("out.xml"));
        }
        other => panic!("expected fwts command, got {other:?}"),
    }
}

#[test]
fn test_fwts_json_format() {
    let config =
        Config::try_parse_from(["acslog", "fwts", "results.log", "out.json", "--format", "json"])
            .expect("parse should succeed");
    assert!(matches!(
        config.command,
        Some(Command::Fwts {
            format: ReportFormat::Json,
            ..
        })
    ));
}

#[test]
fn test_fwts_rejects_unknown_format() {
    let result =
        Config::try_parse_from(["acslog", "fwts", "results.log", "out", "--format", "html"]);
    assert!(result.is_err(), "Only junit and json are accepted");
}

#[test]
fn test_fwts_requires_output() {
    let result = Config::try_parse_from(["acslog", "fwts", "results.log"]);
    assert!(result.is_err(), "Output path is required");
}

// ============================================================================
// bsa subcommand
// ============================================================================

#[test]
fn test_bsa_last_path_is_output() {
    let config = Config::try_parse_from(["acslog", "bsa", "a.log", "b.log", "bsa.json"])
        .expect("parse should succeed");
    let command = config.command.expect("command");
    assert_eq!(
        command.inputs(),
        [PathBuf::from("a.log"), PathBuf::from("b.log")]
    );
    assert_eq!(command.output(), Some(Path::new("bsa.json")));
}

#[test]
fn test_bsa_requires_input_and_output() {
    let result = Config::try_parse_from(["acslog", "bsa", "bsa.json"]);
    assert!(result.is_err(), "At least two paths are required");
}

// ============================================================================
// global flags
// ============================================================================

#[test]
fn test_no_arguments_shows_help() {
    let err = Config::try_parse_from(["acslog"]).expect_err("should fail without arguments");
    assert_eq!(
        err.kind(),
        clap::error::ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
    );
}

#[test]
fn test_verbose_after_subcommand() {
    let config = Config::try_parse_from(["acslog", "bsa", "a.log", "out.json", "-v"])
        .expect("parse should succeed");
    assert!(config.verbose);
    assert_eq!(config.log_level(), Level::DEBUG);
}

#[test]
fn test_quiet_sets_warn_log_level() {
    let config = Config::try_parse_from(["acslog", "-q", "fwts", "in.log", "out.xml"])
        .expect("parse should succeed");
    assert!(config.quiet);
    assert_eq!(config.log_level(), Level::WARN);
}
