// src/domain.rs
//! DNS name validation for query domains

use lazy_static::lazy_static;
use regex::Regex;
use std::net::IpAddr;

lazy_static! {
    static ref DNS_NAME: Regex = Regex::new(
        r"^([a-zA-Z0-9_][a-zA-Z0-9_-]{0,62})(\.[a-zA-Z0-9_][a-zA-Z0-9_-]{0,62})*[._]?$"
    )
    .expect("DNS name pattern is valid");
}

/// Check whether `name` is a syntactically valid DNS name.
///
/// Labels are 1-63 characters of letters, digits, `_` or `-` and may not start
/// with `-`. A single trailing `.` is accepted. IP literals and wildcard
/// patterns such as `*.example.com` are rejected; no case folding or IDNA
/// conversion is applied.
pub fn is_dns_name(name: &str) -> bool {
    if name.is_empty() || name.replace('.', "").len() > 255 {
        return false;
    }

    name.parse::<IpAddr>().is_err() && DNS_NAME.is_match(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_names() {
        assert!(is_dns_name("example.com"));
        assert!(is_dns_name("www.sslmate.com"));
        assert!(is_dns_name("localhost"));
        assert!(is_dns_name("example.com."));
        assert!(is_dns_name("_dmarc.example.com"));
        assert!(is_dns_name("xn--bcher-kva.example"));
        assert!(is_dns_name("UPPER.Example.COM"));
        assert!(is_dns_name("a-b.c-d.example"));
    }

    #[test]
    fn test_wildcards_rejected() {
        assert!(!is_dns_name("*.example.com"));
        assert!(!is_dns_name("*"));
        assert!(!is_dns_name("www.*.example.com"));
    }

    #[test]
    fn test_malformed_names_rejected() {
        assert!(!is_dns_name(""));
        assert!(!is_dns_name("."));
        assert!(!is_dns_name("-example.com"));
        assert!(!is_dns_name("example..com"));
        assert!(!is_dns_name("exa mple.com"));
        assert!(!is_dns_name("https://example.com"));
        assert!(!is_dns_name("example.com/path"));
        assert!(!is_dns_name("example.com&after=1"));
        assert!(!is_dns_name(&format!("{}.com", "a".repeat(64))));
    }

    #[test]
    fn test_label_length_boundary() {
        assert!(is_dns_name(&format!("{}.com", "a".repeat(63))));
    }

    #[test]
    fn test_total_length_limit() {
        let label = "a".repeat(60);
        let long = vec![label.as_str(); 5].join(".");
        assert!(!is_dns_name(&long));

        let ok = vec![label.as_str(); 4].join(".");
        assert!(is_dns_name(&ok));
    }

    #[test]
    fn test_ip_literals_rejected() {
        assert!(!is_dns_name("192.168.1.1"));
        assert!(!is_dns_name("::1"));
    }
}
