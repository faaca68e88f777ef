//! Apex-domain grouping.
//!
//! Groups canonical domains under their two-label apex and orders the result
//! deterministically:
//! - groups are ordered by apex key, ascending
//! - within a group the bare apex domain (if present) comes first, followed by
//!   its subdomains in ascending order
//!
//! Ordering never depends on the iteration order of the input.

use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet};

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::domain::CanonicalDomain;

/// All domains sharing one apex key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainGroup {
    apex: String,
    domains: Vec<CanonicalDomain>,
}

impl DomainGroup {
    /// The apex key of this group.
    pub fn apex(&self) -> &str {
        &self.apex
    }

    /// Members in display order: bare apex first, then subdomains ascending.
    pub fn domains(&self) -> &[CanonicalDomain] {
        &self.domains
    }

    /// Whether the bare apex domain itself is a member.
    pub fn contains_apex(&self) -> bool {
        self.domains.first().is_some_and(|d| d.as_str() == self.apex)
    }

    /// Members other than the bare apex domain.
    pub fn subdomains(&self) -> impl Iterator<Item = &CanonicalDomain> {
        self.domains.iter().filter(move |d| d.as_str() != self.apex)
    }

    /// Number of members, bare apex included.
    pub fn len(&self) -> usize {
        self.domains.len()
    }

    /// Always false for groups produced by [`group`].
    pub fn is_empty(&self) -> bool {
        self.domains.is_empty()
    }
}

/// Domains partitioned by apex key, in deterministic display order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupedResult {
    groups: Vec<DomainGroup>,
}

impl GroupedResult {
    /// An empty grouping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Groups in ascending apex order.
    pub fn groups(&self) -> &[DomainGroup] {
        &self.groups
    }

    /// Looks up the group for an apex key.
    pub fn get(&self, apex: &str) -> Option<&DomainGroup> {
        self.groups
            .binary_search_by(|g| g.apex.as_str().cmp(apex))
            .ok()
            .map(|idx| &self.groups[idx])
    }

    /// Number of apex groups.
    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    /// Total number of domains across all groups.
    pub fn domain_count(&self) -> usize {
        self.groups.iter().map(DomainGroup::len).sum()
    }

    /// Whether there are no domains at all.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Iterates every domain in display order.
    pub fn iter_domains(&self) -> impl Iterator<Item = &CanonicalDomain> {
        self.groups.iter().flat_map(|g| g.domains.iter())
    }

    /// Flattens the grouping back into a plain set of domains.
    pub fn flatten(&self) -> BTreeSet<CanonicalDomain> {
        self.iter_domains().cloned().collect()
    }
}

impl Serialize for GroupedResult {
    // Serialized as an ordered map: apex -> [domains]
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.groups.len()))?;
        for group in &self.groups {
            map.serialize_entry(&group.apex, &group.domains)?;
        }
        map.end()
    }
}

/// Orders two members of the same group: apex first, then ascending.
fn member_order(apex: &str, a: &CanonicalDomain, b: &CanonicalDomain) -> Ordering {
    match (a.as_str() == apex, b.as_str() == apex) {
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        _ => a.cmp(b),
    }
}

/// Groups domains under their apex key.
///
/// Duplicates in the input collapse. The result is identical for any ordering
/// of the same input domains.
///
/// # Examples
///
/// ```
/// use domain_list_filter::{group, normalize};
///
/// let domains = ["www.example.com", "b.example.com", "a.example.com", "other.org"]
///     .iter()
///     .filter_map(|raw| normalize(raw));
/// let grouped = group(domains);
///
/// let apexes: Vec<&str> = grouped.groups().iter().map(|g| g.apex()).collect();
/// assert_eq!(apexes, ["example.com", "other.org"]);
///
/// let members: Vec<&str> = grouped.groups()[0].domains().iter().map(|d| d.as_str()).collect();
/// assert_eq!(members, ["example.com", "a.example.com", "b.example.com"]);
/// ```
pub fn group<I>(domains: I) -> GroupedResult
where
    I: IntoIterator<Item = CanonicalDomain>,
{
    let mut buckets: BTreeMap<String, BTreeSet<CanonicalDomain>> = BTreeMap::new();
    for domain in domains {
        buckets
            .entry(domain.apex().to_string())
            .or_default()
            .insert(domain);
    }

    let groups = buckets
        .into_iter()
        .map(|(apex, members)| {
            let mut domains: Vec<CanonicalDomain> = members.into_iter().collect();
            domains.sort_by(|a, b| member_order(&apex, a, b));
            DomainGroup { apex, domains }
        })
        .collect();

    GroupedResult { groups }
}
