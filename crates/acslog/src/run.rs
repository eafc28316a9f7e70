// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Subcommand execution

use std::fmt;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use acslog_parser::report::{junit, write_json};
use acslog_parser::{bsa, fwts};
use anyhow::{Context, Result};
use tracing::info;

use crate::config::{Command, ReportFormat};
use crate::input::read_log;

/// A report written to disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generated {
    pub format: ReportFormat,
    pub path: PathBuf,
}

impl fmt::Display for Generated {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} report generated at: {}",
            self.format.label(),
            self.path.display()
        )
    }
}

/// Run one subcommand to completion
///
/// # Errors
///
/// Returns an error if an input cannot be read or the report cannot be
/// written.
pub fn execute(command: &Command) -> Result<Generated> {
    match command {
        Command::Fwts {
            log,
            output,
            format,
        } => convert_fwts(log, output, *format),
        Command::Bsa { paths } => match paths.split_last() {
            Some((output, inputs)) if !inputs.is_empty() => convert_bsa(inputs, output),
            _ => Err(crate::config::ConfigError::MissingInputs.into()),
        },
    }
}

/// Convert one FWTS log
///
/// # Errors
///
/// Returns an error if the log cannot be read or the report cannot be
/// written.
pub fn convert_fwts(log: &Path, output: &Path, format: ReportFormat) -> Result<Generated> {
    let text = read_log(log)?;
    let report = fwts::parse(&text);
    info!(
        log = %log.display(),
        suites = report.test_results.len(),
        subtests = report.subtest_count(),
        "converted FWTS log"
    );

    let mut writer = create_output(output)?;
    match format {
        ReportFormat::Junit => junit::write(&report, &mut writer),
        ReportFormat::Json => write_json(&report, &mut writer),
    }
    .with_context(|| format!("failed to write {} report", format.label()))?;
    finish_output(writer, output)?;

    Ok(Generated {
        format,
        path: output.to_path_buf(),
    })
}

/// Convert a sequence of BSA logs as one run
///
/// # Errors
///
/// Returns an error if any log cannot be read or the report cannot be
/// written.
pub fn convert_bsa(inputs: &[PathBuf], output: &Path) -> Result<Generated> {
    let mut session = bsa::BsaSession::new();
    for input in inputs {
        let text = read_log(input)?;
        session.feed_file(&text);
    }
    let report = session.finish();
    info!(
        files = inputs.len(),
        suites = report.test_results.len(),
        subtests = report.subtest_count(),
        "converted BSA logs"
    );

    let mut writer = create_output(output)?;
    write_json(&report, &mut writer).context("failed to write JSON report")?;
    finish_output(writer, output)?;

    Ok(Generated {
        format: ReportFormat::Json,
        path: output.to_path_buf(),
    })
}

fn create_output(path: &Path) -> Result<BufWriter<File>> {
    let file = File::create(path)
        .with_context(|| format!("failed to create output file {}", path.display()))?;
    Ok(BufWriter::new(file))
}

fn finish_output(mut writer: BufWriter<File>, path: &Path) -> Result<()> {
    writer
        .flush()
        .with_context(|| format!("failed to flush {}", path.display()))
}
