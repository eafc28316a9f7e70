// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Command line configuration for acslog
//!
//! Each subcommand names its input logs and a single output file. Logging
//! verbosity is shared by all subcommands.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};

/// acslog - turn firmware conformance test logs into reports
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "acslog")]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Config {
    /// Log family to convert
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Enable verbose logging (debug level)
    ///
    /// Logs are written to stderr, so report output on stdout is unaffected.
    #[arg(short, long, global = true, default_value = "false")]
    pub verbose: bool,

    /// Quiet mode - suppress info-level logs
    ///
    /// Only errors and warnings will be logged.
    #[arg(short, long, global = true, default_value = "false")]
    pub quiet: bool,
}

/// Output format for FWTS reports
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReportFormat {
    /// JUnit XML, one testsuite per FWTS test
    #[default]
    Junit,
    /// The parsed result tree as JSON
    Json,
}

impl ReportFormat {
    /// Human-readable name used in the completion message
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Junit => "JUnit XML",
            Self::Json => "JSON",
        }
    }
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Convert an FWTS results.log
    ///
    /// Example:
    ///   acslog fwts results.log fwts.junit.xml
    Fwts {
        /// FWTS log to read
        log: PathBuf,

        /// Report file to write
        output: PathBuf,

        /// Report format
        #[arg(long, value_enum, env = "ACSLOG_FWTS_FORMAT", default_value_t = ReportFormat::Junit)]
        format: ReportFormat,
    },

    /// Convert one or more BSA/SBSA ACS logs into a single JSON report
    ///
    /// The last path is the output file; all others are inputs, parsed in
    /// order as one run.
    ///
    /// Example:
    ///   acslog bsa BsaResults.log BsaResultsKernel.log bsa.json
    Bsa {
        /// Input logs followed by the output path
        #[arg(required = true, num_args = 2.., value_name = "PATH")]
        paths: Vec<PathBuf>,
    },
}

impl Command {
    /// Input logs named on the command line, in order
    #[must_use]
    pub fn inputs(&self) -> &[PathBuf] {
        match self {
            Self::Fwts { log, .. } => std::slice::from_ref(log),
            Self::Bsa { paths } => match paths.split_last() {
                Some((_, inputs)) => inputs,
                None => &[],
            },
        }
    }

    /// Report file to write
    #[must_use]
    pub fn output(&self) -> Option<&Path> {
        match self {
            Self::Fwts { output, .. } => Some(output.as_path()),
            Self::Bsa { paths } if paths.len() >= 2 => paths.last().map(PathBuf::as_path),
            Self::Bsa { .. } => None,
        }
    }
}

impl Config {
    /// Get the log level based on verbose/quiet flags
    #[must_use]
    pub fn log_level(&self) -> tracing::Level {
        if self.verbose {
            tracing::Level::DEBUG
        } else if self.quiet {
            tracing::Level::WARN
        } else {
            tracing::Level::INFO
        }
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No subcommand was given
    /// - A BSA invocation lacks an input or an output path
    /// - An input log does not exist
    pub fn validate(&self) -> Result<&Command, ConfigError> {
        let command = self.command.as_ref().ok_or(ConfigError::MissingCommand)?;

        if command.output().is_none() || command.inputs().is_empty() {
            return Err(ConfigError::MissingInputs);
        }

        if let Some(missing) = command.inputs().iter().find(|path| !path.exists()) {
            return Err(ConfigError::InputNotFound(missing.clone()));
        }

        Ok(command)
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// No subcommand given
    #[error("No command given; expected `fwts` or `bsa`")]
    MissingCommand,

    /// BSA needs at least one input and an output
    #[error("Expected at least one input log followed by an output path")]
    MissingInputs,

    /// Input log does not exist
    #[error("Input log not found: {0}")]
    InputNotFound(PathBuf),
}
