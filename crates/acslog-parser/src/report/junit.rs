// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! JUnit XML for FWTS reports
//!
//! Each FWTS suite becomes a `<testsuite>` and each subtest a `<testcase>`.
//! A subtest can fail, abort and skip at once, so a testcase may carry a
//! `<failure>`, an `<error>` and a `<skipped>` child together. Pass and
//! warning reasons go to `<system-out>`.

use std::io::Write;

use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};

use crate::error::ReportError;
use crate::fwts::{FwtsOutcome, FwtsReport, FwtsSubtest, FwtsSuite, OutcomeKind};

static TESTSUITES_TAG: &str = "testsuites";
static TESTSUITE_TAG: &str = "testsuite";
static TESTCASE_TAG: &str = "testcase";
static PROPERTIES_TAG: &str = "properties";
static PROPERTY_TAG: &str = "property";
static FAILURE_TAG: &str = "failure";
static ERROR_TAG: &str = "error";
static SKIPPED_TAG: &str = "skipped";
static SYSTEM_OUT_TAG: &str = "system-out";

pub const NO_FAILURE_REASON: &str = "No specific failure reason given.";
pub const NO_ABORT_REASON: &str = "No specific abort reason given.";
pub const DESCRIPTION_PROPERTY: &str = "suite_description";

/// Render a report as a JUnit XML document
///
/// # Errors
///
/// Returns an error if XML generation fails.
pub fn to_string(report: &FwtsReport) -> Result<String, ReportError> {
    let mut buf = Vec::new();
    write(report, &mut buf)?;
    Ok(String::from_utf8(buf)?)
}

/// Write a report as a JUnit XML document
///
/// # Errors
///
/// Returns an error if XML generation or the underlying write fails.
pub fn write(report: &FwtsReport, writer: impl Write) -> Result<(), ReportError> {
    let mut writer = Writer::new_with_indent(writer, b' ', 2);
    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;

    writer.write_event(Event::Start(BytesStart::new(TESTSUITES_TAG)))?;
    for suite in &report.test_results {
        write_suite(suite, &mut writer)?;
    }
    writer.write_event(Event::End(BytesEnd::new(TESTSUITES_TAG)))?;

    writer.write_indent()?;
    Ok(())
}

fn write_suite(suite: &FwtsSuite, writer: &mut Writer<impl Write>) -> Result<(), ReportError> {
    let FwtsSuite {
        name,
        description,
        subtests,
        summary,
    } = suite;

    let mut tag = BytesStart::new(TESTSUITE_TAG);
    tag.push_attribute(("name", name.as_str()));
    tag.push_attribute(("tests", subtests.len().to_string().as_str()));
    tag.push_attribute(("failures", summary.total_failed.to_string().as_str()));
    tag.push_attribute(("errors", summary.total_aborted.to_string().as_str()));
    tag.push_attribute(("skipped", summary.total_skipped.to_string().as_str()));
    writer.write_event(Event::Start(tag))?;

    writer.write_event(Event::Start(BytesStart::new(PROPERTIES_TAG)))?;
    let mut property = BytesStart::new(PROPERTY_TAG);
    property.push_attribute(("name", DESCRIPTION_PROPERTY));
    property.push_attribute(("value", description.as_str()));
    writer.write_event(Event::Empty(property))?;
    writer.write_event(Event::End(BytesEnd::new(PROPERTIES_TAG)))?;

    for subtest in subtests {
        write_testcase(name, subtest, writer)?;
    }

    writer.write_event(Event::End(BytesEnd::new(TESTSUITE_TAG)))?;
    Ok(())
}

fn write_testcase(
    classname: &str,
    subtest: &FwtsSubtest,
    writer: &mut Writer<impl Write>,
) -> Result<(), ReportError> {
    let result = &subtest.result;
    let mut tag = BytesStart::new(TESTCASE_TAG);
    tag.push_attribute(("classname", classname));
    tag.push_attribute(("name", subtest.description.as_str()));

    let failed = result.count(OutcomeKind::Failed) > 0;
    let aborted = result.count(OutcomeKind::Aborted) > 0;
    let skipped = result.count(OutcomeKind::Skipped) > 0;
    let system_out = system_out(result);
    let has_children = failed || aborted || skipped || system_out.is_some();
    if !has_children {
        writer.write_event(Event::Empty(tag))?;
        return Ok(());
    }
    writer.write_event(Event::Start(tag))?;

    if failed {
        let text = joined_or(result.reasons(OutcomeKind::Failed), NO_FAILURE_REASON);
        write_text_element(
            FAILURE_TAG,
            &[("message", "Test Failed"), ("type", "AssertionError")],
            &text,
            writer,
        )?;
    }

    if aborted {
        let text = joined_or(result.reasons(OutcomeKind::Aborted), NO_ABORT_REASON);
        write_text_element(
            ERROR_TAG,
            &[("message", "Test Aborted"), ("type", "AbortedTest")],
            &text,
            writer,
        )?;
    }

    if skipped {
        let mut tag = BytesStart::new(SKIPPED_TAG);
        let message = result.reasons(OutcomeKind::Skipped).join("\n");
        if !message.is_empty() {
            tag.push_attribute(("message", message.as_str()));
        }
        writer.write_event(Event::Empty(tag))?;
    }

    if let Some(text) = system_out {
        write_text_element(SYSTEM_OUT_TAG, &[], &text, writer)?;
    }

    writer.write_event(Event::End(BytesEnd::new(TESTCASE_TAG)))?;
    Ok(())
}

fn write_text_element(
    name: &str,
    attributes: &[(&str, &str)],
    text: &str,
    writer: &mut Writer<impl Write>,
) -> Result<(), ReportError> {
    let mut tag = BytesStart::new(name);
    for &attribute in attributes {
        tag.push_attribute(attribute);
    }
    writer.write_event(Event::Start(tag))?;
    writer.write_event(Event::Text(BytesText::new(text)))?;
    writer.write_event(Event::End(BytesEnd::new(name)))?;
    Ok(())
}

fn joined_or(reasons: &[String], fallback: &str) -> String {
    if reasons.is_empty() {
        fallback.to_string()
    } else {
        reasons.join("\n")
    }
}

/// Outcomes echoed to `<system-out>`, with their block headings
const SYSTEM_OUT_BLOCKS: &[(OutcomeKind, &str)] = &[
    (OutcomeKind::Passed, "PASSED Reasons:"),
    (OutcomeKind::Warning, "WARNINGS:"),
];

/// `PASSED Reasons:` and `WARNINGS:` blocks, if either has content
fn system_out(result: &FwtsOutcome) -> Option<String> {
    let blocks: Vec<String> = SYSTEM_OUT_BLOCKS
        .iter()
        .filter(|&&(kind, _)| result.count(kind) > 0 && !result.reasons(kind).is_empty())
        .map(|&(kind, heading)| format!("{heading}\n{}", result.reasons(kind).join("\n")))
        .collect();
    (!blocks.is_empty()).then(|| blocks.join("\n\n"))
}
