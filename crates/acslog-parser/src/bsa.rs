// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! BSA/SBSA ACS logs
//!
//! Older ACS builds print `*** Starting <Suite> tests ***` banners and
//! numbered tests whose `: Result:` may sit several lines below the header.
//! Newer builds bracket each rule with `START <suite> <id> : <desc>` and
//! `END <id> <status>`. A single run may contain both, split over several
//! files, and tests are de-duplicated per suite by id.

pub mod line;
pub mod model;
pub mod parser;
pub mod status;
pub mod summary;

pub use line::{BsaLine, undecorate};
pub use model::{BsaReport, BsaSubtest, BsaSuite, BsaSummary};
pub use parser::{BsaSession, parse};
pub use status::StatusClass;
pub use summary::Bucket;
