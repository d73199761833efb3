use crate::url::extract_host;
use url::Url;

/// Decides whether a discovered URL is in scope for further traversal
///
/// A URL is in scope when its scheme is http or https and its host contains
/// the crawl domain as a substring. The substring match keeps subdomains in
/// scope (`blog.example.com` matches crawl domain `example.com`). Off-domain
/// URLs are still collected as check candidates; they are just never expanded.
///
/// # Arguments
///
/// * `url` - The discovered URL
/// * `domain` - The lowercase crawl domain derived from the seed
pub fn is_in_scope(url: &Url, domain: &str) -> bool {
    if url.scheme() != "http" && url.scheme() != "https" {
        return false;
    }

    match extract_host(url) {
        Some(host) => host.contains(domain),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parsed(s: &str) -> Url {
        Url::parse(s).unwrap()
    }

    #[test]
    fn test_same_host_in_scope() {
        assert!(is_in_scope(&parsed("https://example.com/page"), "example.com"));
    }

    #[test]
    fn test_subdomain_in_scope() {
        assert!(is_in_scope(
            &parsed("https://blog.example.com/post"),
            "example.com"
        ));
    }

    #[test]
    fn test_other_host_out_of_scope() {
        assert!(!is_in_scope(&parsed("https://other.net/page"), "example.com"));
    }

    #[test]
    fn test_mailto_out_of_scope() {
        assert!(!is_in_scope(
            &parsed("mailto:someone@example.com"),
            "example.com"
        ));
    }

    #[test]
    fn test_ftp_out_of_scope() {
        assert!(!is_in_scope(&parsed("ftp://example.com/file"), "example.com"));
    }

    #[test]
    fn test_http_in_scope() {
        assert!(is_in_scope(&parsed("http://example.com/"), "example.com"));
    }

    #[test]
    fn test_uppercase_host_matches() {
        assert!(is_in_scope(&parsed("https://EXAMPLE.com/x"), "example.com"));
    }

    #[test]
    fn test_loopback_with_port_in_scope() {
        assert!(is_in_scope(&parsed("http://127.0.0.1:4545/a"), "127.0.0.1"));
    }
}
