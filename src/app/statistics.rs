//! Statistics printing.

use log::info;
use strum::IntoEnumIterator;

use crate::compare::ComparisonCounts;
use crate::error_handling::{ListStats, RejectReason};

/// Prints the line accounting of one list to the log.
pub fn log_list_statistics(label: &str, stats: &ListStats) {
    for line in list_statistics_lines(label, stats) {
        info!("{line}");
    }
}

/// Line accounting of one list: a summary line, then the truncation count
/// and each non-zero rejection reason, indented.
fn list_statistics_lines(label: &str, stats: &ListStats) -> Vec<String> {
    let mut lines = vec![format!(
        "List {}: {} non-blank line{}, {} accepted, {} duplicate{}, {} rejected",
        label,
        stats.candidate_lines,
        if stats.candidate_lines == 1 { "" } else { "s" },
        stats.accepted,
        stats.duplicates,
        if stats.duplicates == 1 { "" } else { "s" },
        stats.total_rejected()
    )];

    if stats.truncated_lines > 0 {
        lines.push(format!(
            "   {} line{} ignored beyond the entry cap",
            stats.truncated_lines,
            if stats.truncated_lines == 1 { "" } else { "s" }
        ));
    }

    for reason in RejectReason::iter() {
        let count = stats.get_rejected_count(reason);
        if count > 0 {
            lines.push(format!("   {}: {}", reason.as_str(), count));
        }
    }
    lines
}

/// One-line summary of the comparison counts.
pub fn summary_line(counts: &ComparisonCounts) -> String {
    format!(
        "{} only in A, {} only in B, {} in both, {} unique domain{} in total",
        counts.only_a,
        counts.only_b,
        counts.both,
        counts.combined,
        if counts.combined == 1 { "" } else { "s" }
    )
}
