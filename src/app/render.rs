//! Rendering comparison reports for the terminal.
//!
//! Text output follows the copy-friendly layout: one header per section with
//! its count, then every apex on its own line followed by its other members
//! indented underneath.

use std::fmt::Write as _;

use anyhow::{Context, Result};
use serde_json::{Map, Value};

use crate::config::{OutputFormat, Section, SUBDOMAIN_INDENT};
use crate::grouping::GroupedResult;
use crate::run::ComparisonReport;

/// One printable section of a report.
struct SectionView<'a> {
    key: &'static str,
    title: &'static str,
    empty_message: &'static str,
    grouped: &'a GroupedResult,
}

fn sections(report: &ComparisonReport, section: Section) -> Vec<SectionView<'_>> {
    let result = &report.result;
    let all = [
        (
            Section::OnlyA,
            SectionView {
                key: "only_a",
                title: "Domains only in list A",
                empty_message: "No unique domains found in list A",
                grouped: &result.only_a,
            },
        ),
        (
            Section::OnlyB,
            SectionView {
                key: "only_b",
                title: "Domains only in list B",
                empty_message: "No unique domains found in list B",
                grouped: &result.only_b,
            },
        ),
        (
            Section::Both,
            SectionView {
                key: "both",
                title: "Domains in both lists",
                empty_message: "No common domains found",
                grouped: &result.both,
            },
        ),
        (
            Section::Combined,
            SectionView {
                key: "combined",
                title: "Combined lists",
                empty_message: "No domains found",
                grouped: &result.combined,
            },
        ),
    ];

    all.into_iter()
        .filter(|(s, _)| section == Section::All || *s == section)
        .map(|(_, view)| view)
        .collect()
}

/// Writes the apex/subdomain listing of one grouped result.
///
/// The apex line is printed even when the bare apex is not itself a member.
pub fn write_grouped(out: &mut String, grouped: &GroupedResult) {
    for group in grouped.groups() {
        let _ = writeln!(out, "{}", group.apex());
        for subdomain in group.subdomains() {
            let _ = writeln!(out, "{SUBDOMAIN_INDENT}{subdomain}");
        }
    }
}

/// Renders the report as plain text.
pub fn render_text(report: &ComparisonReport, section: Section) -> String {
    let mut out = String::new();
    for (i, view) in sections(report, section).iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        let _ = writeln!(out, "{} ({})", view.title, view.grouped.domain_count());
        if view.grouped.is_empty() {
            let _ = writeln!(out, "{}", view.empty_message);
        } else {
            write_grouped(&mut out, view.grouped);
        }
    }
    out
}

/// Renders the report as a pretty-printed JSON object.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn render_json(report: &ComparisonReport, section: Section) -> Result<String> {
    let mut object = Map::new();
    let counts = serde_json::to_value(report.counts).context("Failed to serialize counts")?;
    object.insert("counts".to_string(), counts);
    for view in sections(report, section) {
        let value = serde_json::to_value(view.grouped)
            .with_context(|| format!("Failed to serialize section {}", view.key))?;
        object.insert(view.key.to_string(), value);
    }
    serde_json::to_string_pretty(&Value::Object(object)).context("Failed to serialize report")
}

/// Renders the report in the requested format.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn render(report: &ComparisonReport, format: OutputFormat, section: Section) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(report, section)),
        OutputFormat::Json => render_json(report, section),
    }
}
