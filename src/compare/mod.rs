//! Set comparison of two grouped domain lists.
//!
//! Both inputs are flattened back to plain sets, the set algebra is done on
//! those, and every resulting set is grouped again from scratch.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::domain::CanonicalDomain;
use crate::grouping::{group, GroupedResult};

/// The four views produced by comparing list A with list B.
///
/// `only_a`, `only_b` and `both` are pairwise disjoint and together make up
/// exactly `combined`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ComparisonResult {
    /// Domains in A but not in B
    pub only_a: GroupedResult,
    /// Domains in B but not in A
    pub only_b: GroupedResult,
    /// Domains in both A and B
    pub both: GroupedResult,
    /// Union of A and B
    pub combined: GroupedResult,
}

/// Sizes of the four comparison views.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ComparisonCounts {
    /// Domains only in A
    pub only_a: usize,
    /// Domains only in B
    pub only_b: usize,
    /// Domains in both lists
    pub both: usize,
    /// Total unique domains
    pub combined: usize,
}

impl ComparisonResult {
    /// Flattened domain counts of each view.
    pub fn counts(&self) -> ComparisonCounts {
        ComparisonCounts {
            only_a: self.only_a.domain_count(),
            only_b: self.only_b.domain_count(),
            both: self.both.domain_count(),
            combined: self.combined.domain_count(),
        }
    }
}

/// Compares two grouped lists.
///
/// # Examples
///
/// ```
/// use domain_list_filter::{compare, ListProcessor};
///
/// let processor = ListProcessor::default();
/// let a = processor.process("example.com\nsub.example.com");
/// let b = processor.process("example.com\nother.org");
///
/// let result = compare(&a, &b);
/// let counts = result.counts();
/// assert_eq!((counts.only_a, counts.only_b, counts.both, counts.combined), (1, 1, 1, 3));
/// ```
pub fn compare(grouped_a: &GroupedResult, grouped_b: &GroupedResult) -> ComparisonResult {
    let flat_a = grouped_a.flatten();
    let flat_b = grouped_b.flatten();

    ComparisonResult {
        only_a: regroup(flat_a.difference(&flat_b)),
        only_b: regroup(flat_b.difference(&flat_a)),
        both: regroup(flat_a.intersection(&flat_b)),
        combined: regroup(flat_a.union(&flat_b)),
    }
}

fn regroup<'a>(domains: impl Iterator<Item = &'a CanonicalDomain>) -> GroupedResult {
    group(domains.cloned().collect::<BTreeSet<_>>())
}
