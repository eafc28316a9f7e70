// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Reading log files
//!
//! ACS logs are captured from UEFI shells and serial consoles, so they show
//! up as UTF-8, UTF-16 with a BOM, or bytes that are not valid in any
//! encoding. Undecodable bytes are replaced rather than rejected.

use std::path::{Path, PathBuf};

use tracing::debug;

const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];
const UTF16_LE_BOM: &[u8] = &[0xFF, 0xFE];
const UTF16_BE_BOM: &[u8] = &[0xFE, 0xFF];

/// Errors reading an input log
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    /// The file could not be read
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Text encoding detected from a byte order mark
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoding {
    Utf8,
    Utf16Le,
    Utf16Be,
}

/// Detect the encoding and return the payload with any BOM removed
#[must_use]
pub fn sniff(bytes: &[u8]) -> (Encoding, &[u8]) {
    if let Some(rest) = bytes.strip_prefix(UTF8_BOM) {
        (Encoding::Utf8, rest)
    } else if let Some(rest) = bytes.strip_prefix(UTF16_LE_BOM) {
        (Encoding::Utf16Le, rest)
    } else if let Some(rest) = bytes.strip_prefix(UTF16_BE_BOM) {
        (Encoding::Utf16Be, rest)
    } else {
        (Encoding::Utf8, bytes)
    }
}

/// Decode raw log bytes into text
#[must_use]
pub fn decode(bytes: &[u8]) -> String {
    let (encoding, payload) = sniff(bytes);
    match encoding {
        Encoding::Utf8 => String::from_utf8_lossy(payload).into_owned(),
        Encoding::Utf16Le => decode_utf16(payload, u16::from_le_bytes),
        Encoding::Utf16Be => decode_utf16(payload, u16::from_be_bytes),
    }
}

fn decode_utf16(payload: &[u8], unit: fn([u8; 2]) -> u16) -> String {
    let units: Vec<u16> = payload
        .chunks_exact(2)
        .map(|pair| unit([pair[0], pair[1]]))
        .collect();
    String::from_utf16_lossy(&units)
}

/// Read and decode one log file
///
/// # Errors
///
/// Returns [`InputError::Read`] if the file cannot be read.
pub fn read_log(path: &Path) -> Result<String, InputError> {
    let bytes = std::fs::read(path).map_err(|source| InputError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let (encoding, _) = sniff(&bytes);
    debug!(path = %path.display(), bytes = bytes.len(), ?encoding, "read log");
    Ok(decode(&bytes))
}
