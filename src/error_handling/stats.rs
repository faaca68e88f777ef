//! Per-list processing statistics.
//!
//! Tracks how many candidate lines a list contained and what happened to each
//! of them. The list processor is single-threaded, so plain counters suffice.

use std::collections::HashMap;

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use strum::IntoEnumIterator;

use super::types::RejectReason;

/// Statistics collected while processing one raw list.
///
/// All rejection reasons are initialized to zero on creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListStats {
    /// Non-blank lines found in the input (before the cap)
    pub candidate_lines: usize,
    /// Non-blank lines dropped because of the entry cap
    pub truncated_lines: usize,
    /// Distinct canonical domains that survived
    pub accepted: usize,
    /// Valid lines that collapsed into an already-seen domain
    pub duplicates: usize,
    rejected: HashMap<RejectReason, usize>,
}

impl ListStats {
    /// Creates statistics with every counter at zero.
    pub fn new() -> Self {
        let mut rejected = HashMap::new();
        for reason in RejectReason::iter() {
            rejected.insert(reason, 0);
        }

        ListStats {
            candidate_lines: 0,
            truncated_lines: 0,
            accepted: 0,
            duplicates: 0,
            rejected,
        }
    }

    /// Increment the counter for a rejection reason.
    pub fn increment_rejected(&mut self, reason: RejectReason) {
        *self.rejected.entry(reason).or_insert(0) += 1;
    }

    /// Get the count for a rejection reason.
    pub fn get_rejected_count(&self, reason: RejectReason) -> usize {
        self.rejected.get(&reason).copied().unwrap_or(0)
    }

    /// Total number of rejected lines across all reasons.
    pub fn total_rejected(&self) -> usize {
        self.rejected.values().sum()
    }

    /// Number of lines that went through normalization (after the cap).
    pub fn processed_lines(&self) -> usize {
        self.candidate_lines.saturating_sub(self.truncated_lines)
    }
}

impl Default for ListStats {
    fn default() -> Self {
        Self::new()
    }
}

impl Serialize for ListStats {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(5))?;
        map.serialize_entry("candidate_lines", &self.candidate_lines)?;
        map.serialize_entry("truncated_lines", &self.truncated_lines)?;
        map.serialize_entry("accepted", &self.accepted)?;
        map.serialize_entry("duplicates", &self.duplicates)?;
        // Fixed reason order so output is stable
        let rejected: Vec<(RejectReason, usize)> = RejectReason::iter()
            .map(|reason| (reason, self.get_rejected_count(reason)))
            .collect();
        map.serialize_entry("rejected", &RejectedCounts(&rejected))?;
        map.end()
    }
}

struct RejectedCounts<'a>(&'a [(RejectReason, usize)]);

impl Serialize for RejectedCounts<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (reason, count) in self.0 {
            map.serialize_entry(reason, count)?;
        }
        map.end()
    }
}
