// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

use std::io::Write;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::ReportError;

/// Render a report as pretty-printed JSON (2-space indent)
///
/// # Errors
///
/// Returns [`ReportError::Json`] if serialization fails.
pub fn to_json<T: Serialize>(report: &T) -> Result<String, ReportError> {
    Ok(serde_json::to_string_pretty(report)?)
}

/// Write a report as pretty-printed JSON followed by a newline
///
/// # Errors
///
/// Returns an error if serialization or the write fails.
pub fn write_json<T: Serialize>(report: &T, mut writer: impl Write) -> Result<(), ReportError> {
    serde_json::to_writer_pretty(&mut writer, report)?;
    writer.write_all(b"\n")?;
    Ok(())
}

/// Read a report back from JSON
///
/// # Errors
///
/// Returns [`ReportError::Json`] if the text is not a valid report.
pub fn from_json<T: DeserializeOwned>(text: &str) -> Result<T, ReportError> {
    Ok(serde_json::from_str(text)?)
}
