// src/api/query.rs
//! Query string construction for the issuances endpoint

/// Expansions always requested; the decoder relies on these sub-objects being present
const DEFAULT_PARAMS: &str = "?expand=dns_names&expand=issuer&expand=cert&expand=pubkey";

/// Build the query string for an issuances request.
///
/// Parameter order is fixed: expansions, `domain`, `after`, `match_wildcards`,
/// `include_subdomains`. Optional parameters are only emitted when set, and
/// `after` only when `position` is non-zero.
pub fn build_query(
    domain: &str,
    match_wildcards: bool,
    include_subdomains: bool,
    position: u64,
) -> String {
    let mut query = format!("{}&domain={}", DEFAULT_PARAMS, domain);

    if position > 0 {
        query.push_str(&format!("&after={}", position));
    }
    if match_wildcards {
        query.push_str("&match_wildcards=true");
    }
    if include_subdomains {
        query.push_str("&include_subdomains=true");
    }

    query
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_only() {
        assert_eq!(
            build_query("example.com", false, false, 0),
            "?expand=dns_names&expand=issuer&expand=cert&expand=pubkey&domain=example.com"
        );
    }

    #[test]
    fn test_wildcard_only() {
        assert_eq!(
            build_query("example.com", true, false, 0),
            "?expand=dns_names&expand=issuer&expand=cert&expand=pubkey&domain=example.com&match_wildcards=true"
        );
    }

    #[test]
    fn test_subdomain_only() {
        assert_eq!(
            build_query("example.com", false, true, 0),
            "?expand=dns_names&expand=issuer&expand=cert&expand=pubkey&domain=example.com&include_subdomains=true"
        );
    }

    #[test]
    fn test_with_position() {
        assert_eq!(
            build_query("example.com", false, false, 1234567),
            "?expand=dns_names&expand=issuer&expand=cert&expand=pubkey&domain=example.com&after=1234567"
        );
    }

    #[test]
    fn test_all_parameters() {
        assert_eq!(
            build_query("example.com", true, true, 1234567),
            "?expand=dns_names&expand=issuer&expand=cert&expand=pubkey&domain=example.com&after=1234567&match_wildcards=true&include_subdomains=true"
        );
    }

    #[test]
    fn test_optional_parameters_present_iff_requested() {
        for wildcards in [false, true] {
            for subdomains in [false, true] {
                for position in [0u64, 1, u64::MAX] {
                    let query = build_query("sslmate.com", wildcards, subdomains, position);
                    assert_eq!(query.contains("&after="), position > 0);
                    assert_eq!(query.contains("&match_wildcards=true"), wildcards);
                    assert_eq!(query.contains("&include_subdomains=true"), subdomains);
                    assert_eq!(
                        query,
                        build_query("sslmate.com", wildcards, subdomains, position)
                    );
                }
            }
        }
    }
}
