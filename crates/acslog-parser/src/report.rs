// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Report emitters
//!
//! Both result trees serialize to JSON through serde. FWTS reports can also
//! be rendered as JUnit XML for CI dashboards.

mod json;
pub mod junit;

pub use json::{from_json, to_json, write_json};
