//! Raw list processing.
//!
//! Turns one newline-delimited text blob into a `GroupedResult`:
//! 1. Split on `\n` and drop lines that are blank after trimming
//! 2. Keep only the first `max_entries` remaining lines
//! 3. Normalize each line, silently dropping rejected ones
//! 4. Deduplicate and group by apex
//!
//! Nothing in the content of a list can make processing fail.

use std::collections::BTreeSet;

use log::{debug, warn};

use crate::config::MAX_ENTRIES;
use crate::domain::{normalize_with_reason, trim_line, CanonicalDomain};
use crate::error_handling::ListStats;
use crate::grouping::{group, GroupedResult};

/// A processed list together with what happened to its lines.
#[derive(Debug, Clone)]
pub struct ProcessedList {
    /// Surviving domains grouped by apex
    pub grouped: GroupedResult,
    /// Line accounting (candidates, truncation, duplicates, rejections)
    pub stats: ListStats,
}

/// Cleans raw domain lists with a fixed per-list entry cap.
///
/// The cap is held by the processor rather than read from global state, so
/// callers (and tests) can choose any boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListProcessor {
    max_entries: usize,
}

impl ListProcessor {
    /// Creates a processor that considers at most `max_entries` non-blank lines.
    pub fn new(max_entries: usize) -> Self {
        Self { max_entries }
    }

    /// The configured per-list cap.
    pub fn max_entries(&self) -> usize {
        self.max_entries
    }

    /// Processes a raw list into grouped canonical domains.
    ///
    /// # Examples
    ///
    /// ```
    /// use domain_list_filter::ListProcessor;
    ///
    /// let grouped = ListProcessor::default().process("Example.com\n\nhttp://www.example.com/\nbad domain");
    /// assert_eq!(grouped.domain_count(), 1);
    /// ```
    pub fn process(&self, raw_text: &str) -> GroupedResult {
        self.process_with_stats(raw_text).grouped
    }

    /// Processes a raw list and reports per-line outcomes.
    pub fn process_with_stats(&self, raw_text: &str) -> ProcessedList {
        let mut stats = ListStats::new();
        let mut domains: BTreeSet<CanonicalDomain> = BTreeSet::new();

        let candidates = raw_text.split('\n').filter(|line| !trim_line(line).is_empty());
        for (index, line) in candidates.enumerate() {
            stats.candidate_lines += 1;
            if index >= self.max_entries {
                stats.truncated_lines += 1;
                continue;
            }
            match normalize_with_reason(line) {
                Ok(domain) => {
                    if !domains.insert(domain) {
                        stats.duplicates += 1;
                    }
                }
                Err(reason) => stats.increment_rejected(reason),
            }
        }
        stats.accepted = domains.len();

        if stats.truncated_lines > 0 {
            warn!(
                "List has {} non-blank lines, only the first {} were processed",
                stats.candidate_lines, self.max_entries
            );
        }
        debug!(
            "Processed {} lines: {} accepted, {} duplicates, {} rejected",
            stats.processed_lines(),
            stats.accepted,
            stats.duplicates,
            stats.total_rejected()
        );

        ProcessedList {
            grouped: group(domains),
            stats,
        }
    }
}

impl Default for ListProcessor {
    fn default() -> Self {
        Self::new(MAX_ENTRIES)
    }
}
