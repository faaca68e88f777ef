//! Domain normalization and apex extraction.
//!
//! This module turns one raw line of user input into a canonical domain name,
//! or rejects it. Canonical domains are lowercase, carry no scheme, `www.`
//! prefix, path or port, and satisfy the hostname label grammar.
//!
//! Key functions:
//! - `normalize()` - Cleans a raw line, `None` if it is not a domain
//! - `normalize_with_reason()` - Same, but reports why a line was rejected
//! - `CanonicalDomain::apex()` - Last two labels, used as the grouping key
//!
//! The apex is a two-label heuristic, not Public Suffix List aware:
//! `example.co.uk` groups under `co.uk`.

use std::fmt;
use std::sync::LazyLock;

use log::trace;
use regex::Regex;
use serde::Serialize;

use crate::config::{
    domain_pattern, MAX_DOMAIN_LENGTH, PORT_SUFFIX_PATTERN, SCHEME_PATTERN, TRIM_CHARS,
    WWW_PREFIX, WWW_PREFIX_PATTERN,
};
use crate::error_handling::RejectReason;

// Patterns are constants exercised by the tests below.
static SCHEME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(SCHEME_PATTERN).expect("scheme pattern is valid"));
static WWW_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(WWW_PREFIX_PATTERN).expect("www pattern is valid"));
static PORT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(PORT_SUFFIX_PATTERN).expect("port pattern is valid"));
static DOMAIN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(&domain_pattern()).expect("domain pattern is valid"));

/// A normalized, validated, lowercase domain name.
///
/// Can only be obtained through [`normalize`], [`normalize_with_reason`] or
/// [`CanonicalDomain::parse`], so every value satisfies the domain grammar.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct CanonicalDomain(String);

impl CanonicalDomain {
    /// Validates a string that must already be in canonical form.
    ///
    /// No stripping or lowercasing is applied, so `"Example.com"` and
    /// `"https://example.com"` are rejected here even though [`normalize`]
    /// would accept them.
    ///
    /// # Errors
    ///
    /// Returns the `RejectReason` describing why the string is not canonical.
    pub fn parse(domain: &str) -> Result<Self, RejectReason> {
        validate(domain)?;
        Ok(CanonicalDomain(domain.to_string()))
    }

    /// The domain as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The apex key: last two labels, or the whole domain if it has at most two.
    ///
    /// # Examples
    ///
    /// ```
    /// use domain_list_filter::CanonicalDomain;
    ///
    /// let d = CanonicalDomain::parse("a.b.example.com").unwrap();
    /// assert_eq!(d.apex(), "example.com");
    /// ```
    pub fn apex(&self) -> &str {
        apex_of(&self.0)
    }

    /// Whether this domain is its own apex (a bare registrable root).
    pub fn is_apex(&self) -> bool {
        self.apex().len() == self.0.len()
    }

    /// Number of dot-separated labels.
    pub fn label_count(&self) -> usize {
        self.0.split('.').count()
    }
}

impl fmt::Display for CanonicalDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for CanonicalDomain {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<CanonicalDomain> for String {
    fn from(domain: CanonicalDomain) -> Self {
        domain.0
    }
}

/// Returns the suffix made of the last two labels of `domain`.
fn apex_of(domain: &str) -> &str {
    match domain.rmatch_indices('.').nth(1) {
        Some((idx, _)) => &domain[idx + 1..],
        None => domain,
    }
}

/// Strips ASCII whitespace, NUL and vertical tab from both ends of a line.
pub(crate) fn trim_line(raw: &str) -> &str {
    raw.trim_matches(TRIM_CHARS.as_slice())
}

/// Cleans a raw line into a canonical domain.
///
/// Strips the scheme, a single leading `www.`, anything after the first `/`
/// and a trailing port, then lowercases and validates.
///
/// # Arguments
///
/// * `raw` - One line of user input, untrimmed
///
/// # Returns
///
/// `Some(domain)` if the line holds a valid domain, `None` otherwise.
///
/// # Examples
///
/// ```
/// use domain_list_filter::normalize;
///
/// let d = normalize("HTTPS://WWW.Example.COM:8080/path").unwrap();
/// assert_eq!(d.as_str(), "example.com");
/// assert!(normalize("not a domain!!").is_none());
/// ```
pub fn normalize(raw: &str) -> Option<CanonicalDomain> {
    normalize_with_reason(raw).ok()
}

/// Cleans a raw line into a canonical domain, reporting why it was rejected.
///
/// # Errors
///
/// Returns the `RejectReason` for lines that do not hold a valid domain.
pub fn normalize_with_reason(raw: &str) -> Result<CanonicalDomain, RejectReason> {
    let trimmed = trim_line(raw);
    if trimmed.is_empty() {
        return Err(RejectReason::Empty);
    }

    let without_scheme = SCHEME_RE.replace(trimmed, "");
    let without_www = WWW_RE.replace(&without_scheme, "");
    let host_and_port = match without_www.find('/') {
        Some(idx) => &without_www[..idx],
        None => &without_www[..],
    };
    let host = PORT_RE.replace(host_and_port, "");
    let lowered = host.to_ascii_lowercase();

    match validate(&lowered) {
        Ok(()) => Ok(CanonicalDomain(lowered)),
        Err(reason) => {
            trace!("Rejected line {:?}: {}", trimmed, reason.as_str());
            Err(reason)
        }
    }
}

/// Checks the canonical domain grammar.
fn validate(domain: &str) -> Result<(), RejectReason> {
    if domain.is_empty() {
        return Err(RejectReason::Empty);
    }
    if domain.len() > MAX_DOMAIN_LENGTH {
        return Err(RejectReason::TooLong);
    }
    if !DOMAIN_RE.is_match(domain) {
        return Err(RejectReason::InvalidSyntax);
    }
    if domain.starts_with(WWW_PREFIX) {
        return Err(RejectReason::RedundantWwwPrefix);
    }
    Ok(())
}
