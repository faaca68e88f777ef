//! Configuration constants.
//!
//! This module defines the limits and patterns used by the normalization
//! pipeline and the list processor.

/// Maximum number of non-blank lines considered per list.
/// Lines beyond this are dropped silently (first lines win).
pub const MAX_ENTRIES: usize = 5000;

/// Maximum total length of a canonical domain in characters.
pub const MAX_DOMAIN_LENGTH: usize = 253;

/// Maximum length of a single dot-separated label.
pub const MAX_LABEL_LENGTH: usize = 63;

// Normalization patterns
/// Leading URL scheme such as `http://`, `ftp://` or `svn+ssh://`
pub const SCHEME_PATTERN: &str = r"^[a-zA-Z][a-zA-Z0-9+.\-]*://";
/// Leading `www.` label, any casing
pub const WWW_PREFIX_PATTERN: &str = r"(?i)^www\.";
/// Trailing `:<digits>` port suffix
pub const PORT_SUFFIX_PATTERN: &str = r":[0-9]+$";

/// Characters trimmed from both ends of a raw line: ASCII space, tab, line
/// feed, carriage return, NUL and vertical tab. Unicode spaces are kept.
pub const TRIM_CHARS: [char; 6] = [' ', '\t', '\n', '\r', '\0', '\x0B'];

/// Full canonical domain grammar (lowercase labels, no leading/trailing hyphen),
/// with label length bounded by [`MAX_LABEL_LENGTH`].
pub fn domain_pattern() -> String {
    let label = format!(
        r"[a-z0-9]([a-z0-9\-]{{0,{}}}[a-z0-9])?",
        MAX_LABEL_LENGTH - 2
    );
    format!(r"^{label}(\.{label})*$")
}

/// Prefix that a canonical domain must never carry.
pub const WWW_PREFIX: &str = "www.";

/// Indentation used for subdomain lines in text output.
pub const SUBDOMAIN_INDENT: &str = "  ";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_pattern_follows_label_limit() {
        let inner = MAX_LABEL_LENGTH - 2;
        assert_eq!(
            domain_pattern(),
            format!(
                r"^[a-z0-9]([a-z0-9\-]{{0,{inner}}}[a-z0-9])?(\.[a-z0-9]([a-z0-9\-]{{0,{inner}}}[a-z0-9])?)*$"
            )
        );
        assert!(domain_pattern().contains("{0,61}"));
    }

    #[test]
    fn test_trim_chars_are_ascii() {
        assert!(TRIM_CHARS.iter().all(char::is_ascii));
        assert!(!TRIM_CHARS.contains(&'\u{a0}'));
    }
}
