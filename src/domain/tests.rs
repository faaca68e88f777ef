// Domain module tests.

use super::*;
use crate::config::MAX_LABEL_LENGTH;

fn norm(raw: &str) -> Option<String> {
    normalize(raw).map(String::from)
}

#[test]
fn test_normalize_plain_domain() {
    assert_eq!(norm("example.com"), Some("example.com".to_string()));
}

#[test]
fn test_normalize_full_noise() {
    // Scheme, www, casing, port and path all stripped
    assert_eq!(
        norm("HTTPS://WWW.Example.COM:8080/path"),
        Some("example.com".to_string())
    );
}

#[test]
fn test_normalize_strips_surrounding_whitespace() {
    assert_eq!(norm("  \texample.com \r"), Some("example.com".to_string()));
}

#[test]
fn test_normalize_trims_ascii_only() {
    assert_eq!(norm("\0example.com\x0B"), Some("example.com".to_string()));
    // Unicode spaces are not trimmed and fail validation
    assert_eq!(
        normalize_with_reason("\u{a0}example.com"),
        Err(RejectReason::InvalidSyntax)
    );
    assert_eq!(
        normalize_with_reason("example.com\u{2003}"),
        Err(RejectReason::InvalidSyntax)
    );
}

#[test]
fn test_normalize_other_schemes() {
    assert_eq!(norm("ftp://files.example.org"), Some("files.example.org".to_string()));
    assert_eq!(norm("svn+ssh://repo.example.net/trunk"), Some("repo.example.net".to_string()));
    assert_eq!(norm("git-https://example.com"), Some("example.com".to_string()));
}

#[test]
fn test_normalize_scheme_must_start_with_letter() {
    // "1http://" is not a scheme, the leftover ':' fails validation
    assert_eq!(norm("1http://example.com"), None);
}

#[test]
fn test_normalize_www_case_insensitive() {
    assert_eq!(norm("WwW.example.com"), Some("example.com".to_string()));
    assert_eq!(norm("http://WWW.example.com"), Some("example.com".to_string()));
}

#[test]
fn test_normalize_www_only_as_leading_label() {
    // "www" in the middle or as a non-label prefix is kept
    assert_eq!(norm("mail.www.example.com"), Some("mail.www.example.com".to_string()));
    assert_eq!(norm("wwwexample.com"), Some("wwwexample.com".to_string()));
    assert_eq!(norm("www"), Some("www".to_string()));
}

#[test]
fn test_normalize_www_stripped_once() {
    assert_eq!(
        normalize_with_reason("www.www.example.com"),
        Err(RejectReason::RedundantWwwPrefix)
    );
}

#[test]
fn test_normalize_path_query_fragment() {
    assert_eq!(norm("example.com/"), Some("example.com".to_string()));
    assert_eq!(norm("example.com/a/b?c=d#e"), Some("example.com".to_string()));
    assert_eq!(norm("https://example.com/?q=1"), Some("example.com".to_string()));
}

#[test]
fn test_normalize_query_without_path_is_rejected() {
    // Only '/' truncates, a bare '?' stays and fails validation
    assert_eq!(norm("example.com?q=1"), None);
}

#[test]
fn test_normalize_port_without_path() {
    assert_eq!(norm("example.com:443"), Some("example.com".to_string()));
}

#[test]
fn test_normalize_non_numeric_port_rejected() {
    assert_eq!(
        normalize_with_reason("example.com:http"),
        Err(RejectReason::InvalidSyntax)
    );
}

#[test]
fn test_normalize_rejects_garbage() {
    assert_eq!(norm("not a domain!!"), None);
    assert_eq!(
        normalize_with_reason("not a domain!!"),
        Err(RejectReason::InvalidSyntax)
    );
}

#[test]
fn test_normalize_empty_inputs() {
    assert_eq!(normalize_with_reason(""), Err(RejectReason::Empty));
    assert_eq!(normalize_with_reason("   \t "), Err(RejectReason::Empty));
    // Becomes empty only after stripping
    assert_eq!(normalize_with_reason("https://"), Err(RejectReason::Empty));
    assert_eq!(normalize_with_reason("www./path"), Err(RejectReason::Empty));
    assert_eq!(normalize_with_reason("/just/a/path"), Err(RejectReason::Empty));
}

#[test]
fn test_normalize_label_rules() {
    assert_eq!(norm("-example.com"), None);
    assert_eq!(norm("example-.com"), None);
    assert_eq!(norm("exa-mple.com"), Some("exa-mple.com".to_string()));
    assert_eq!(norm("example..com"), None);
    assert_eq!(norm(".example.com"), None);
    assert_eq!(norm("example.com."), None);
    assert_eq!(norm("under_score.com"), None);
    assert_eq!(norm("localhost"), Some("localhost".to_string()));
    assert_eq!(norm("192.168.0.1"), Some("192.168.0.1".to_string()));
}

#[test]
fn test_normalize_label_length_limit() {
    let max_label = "a".repeat(MAX_LABEL_LENGTH);
    let too_long_label = "a".repeat(MAX_LABEL_LENGTH + 1);
    assert_eq!(
        norm(&format!("{max_label}.com")),
        Some(format!("{max_label}.com"))
    );
    assert_eq!(
        normalize_with_reason(&format!("{too_long_label}.com")),
        Err(RejectReason::InvalidSyntax)
    );
}

#[test]
fn test_normalize_total_length_limit() {
    // 4 labels of 63 chars + 3 dots = 255 chars
    let label = "a".repeat(63);
    let too_long = format!("{label}.{label}.{label}.{label}");
    assert_eq!(normalize_with_reason(&too_long), Err(RejectReason::TooLong));

    // 3 * 63 + 61 + 3 dots = 253 chars exactly
    let short_label = "b".repeat(61);
    let at_limit = format!("{label}.{label}.{label}.{short_label}");
    assert_eq!(at_limit.len(), MAX_DOMAIN_LENGTH);
    assert_eq!(norm(&at_limit), Some(at_limit.clone()));
}

#[test]
fn test_normalize_rejects_non_ascii() {
    assert_eq!(norm("münchen.de"), None);
    assert_eq!(norm("例え.jp"), None);
    // Punycode is plain ASCII and passes
    assert_eq!(norm("xn--mnchen-3ya.de"), Some("xn--mnchen-3ya.de".to_string()));
}

#[test]
fn test_normalize_rejects_userinfo_and_ipv6() {
    assert_eq!(norm("user@example.com"), None);
    assert_eq!(norm("http://[2001:db8::1]"), None);
}

#[test]
fn test_canonical_domain_parse_is_strict() {
    assert!(CanonicalDomain::parse("example.com").is_ok());
    assert_eq!(
        CanonicalDomain::parse("Example.com"),
        Err(RejectReason::InvalidSyntax)
    );
    assert_eq!(
        CanonicalDomain::parse("https://example.com"),
        Err(RejectReason::InvalidSyntax)
    );
    assert_eq!(
        CanonicalDomain::parse("www.example.com"),
        Err(RejectReason::RedundantWwwPrefix)
    );
    assert_eq!(CanonicalDomain::parse(""), Err(RejectReason::Empty));
}

#[test]
fn test_apex_two_labels_or_fewer() {
    let d = CanonicalDomain::parse("example.com").unwrap();
    assert_eq!(d.apex(), "example.com");
    assert!(d.is_apex());

    let single = CanonicalDomain::parse("localhost").unwrap();
    assert_eq!(single.apex(), "localhost");
    assert!(single.is_apex());
}

#[test]
fn test_apex_deep_subdomain() {
    let d = CanonicalDomain::parse("a.b.c.example.com").unwrap();
    assert_eq!(d.apex(), "example.com");
    assert!(!d.is_apex());
    assert_eq!(d.label_count(), 5);
}

#[test]
fn test_apex_multi_label_suffix_limitation() {
    // Two-label heuristic: not Public Suffix List aware
    let d = CanonicalDomain::parse("example.co.uk").unwrap();
    assert_eq!(d.apex(), "co.uk");
}

#[test]
fn test_canonical_domain_display_and_serialize() {
    let d = CanonicalDomain::parse("sub.example.com").unwrap();
    assert_eq!(d.to_string(), "sub.example.com");
    assert_eq!(
        serde_json::to_string(&d).unwrap(),
        "\"sub.example.com\""
    );
}

// Property-based tests using proptest
use proptest::prelude::*;

proptest! {
    #[test]
    fn test_normalize_never_panics(raw in "\\PC{0,300}") {
        let _ = normalize_with_reason(&raw);
    }

    #[test]
    fn test_normalize_idempotent(raw in "[a-zA-Z0-9:/._ -]{0,80}") {
        if let Some(first) = normalize(&raw) {
            let second = normalize(first.as_str());
            prop_assert_eq!(Some(first.clone()), second,
                "Re-normalizing a canonical domain should be a no-op");
            prop_assert!(CanonicalDomain::parse(first.as_str()).is_ok());
        }
    }

    #[test]
    fn test_normalize_strips_noise(
        labels in prop::collection::vec("[a-z][a-z0-9]{0,10}", 1..4),
        tld in "(com|org|net|io)",
        scheme in "(|http://|https://|HTTPS://|ftp://)",
        www in "(|www\\.|WWW\\.)",
        port in prop::option::of(1u16..65535),
        path in "(|/|/path|/a/b\\?q=1)"
    ) {
        let host = format!("{}.{}", labels.join("."), tld);
        prop_assume!(!host.starts_with("www."));
        let port = port.map(|p| format!(":{p}")).unwrap_or_default();
        let raw = format!("{scheme}{www}{}{port}{path}", host.to_uppercase());
        prop_assert_eq!(norm(&raw), Some(host));
    }

    #[test]
    fn test_apex_is_dot_suffix(labels in prop::collection::vec("[a-z][a-z0-9]{0,8}", 1..6)) {
        let domain = labels.join(".");
        prop_assume!(!domain.starts_with("www."));
        let d = CanonicalDomain::parse(&domain).unwrap();
        let apex = d.apex();
        prop_assert!(apex.split('.').count() <= 2);
        let suffix = format!(".{apex}");
        prop_assert!(domain == apex || domain.ends_with(&suffix));
    }
}
