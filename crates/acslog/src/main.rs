// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! acslog: convert firmware conformance test logs into reports
//!
//! `acslog fwts` turns an FWTS `results.log` into JUnit XML (or JSON) and
//! `acslog bsa` merges BSA/SBSA ACS logs into one JSON report.

use anyhow::Result;
use clap::Parser;
use tracing::debug;

use acslog::config::Config;
use acslog::run;

fn main() {
    if let Err(error) = try_main() {
        eprintln!("error: {error:#}");
        std::process::exit(1);
    }
}

fn try_main() -> Result<()> {
    let config = Config::parse();

    // Logs go to stderr; stdout carries only the completion message
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(config.log_level().into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let command = config.validate()?;
    debug!(?command, "running");

    let generated = run::execute(command)?;
    println!("{generated}");
    Ok(())
}
