// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Error types for acslog-parser

use thiserror::Error;

/// Errors that can occur while rendering a parsed report
///
/// Parsing itself never fails: unrecognized lines are skipped.
#[derive(Debug, Error)]
pub enum ReportError {
    /// Error serializing or deserializing JSON
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Error produced by the XML writer
    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::Error),

    /// Error writing to the output sink
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Rendered XML was not valid UTF-8
    #[error("Invalid UTF-8 in rendered report: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}
