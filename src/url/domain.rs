use url::Url;

/// Extracts the lowercase host from a URL
///
/// # Examples
///
/// ```
/// use url::Url;
/// use linksweep::url::extract_host;
///
/// let url = Url::parse("https://Example.COM/path").unwrap();
/// assert_eq!(extract_host(&url), Some("example.com".to_string()));
/// ```
pub fn extract_host(url: &Url) -> Option<String> {
    url.host_str().map(|h| h.to_lowercase())
}

/// Derives the crawl domain from a seed URL
///
/// The crawl domain is the lowercased host of the seed. It is the scope
/// boundary for traversal: only URLs whose host contains this string are
/// expanded during a crawl.
///
/// # Arguments
///
/// * `seed` - The seed URL the crawl starts from
///
/// # Returns
///
/// * `Some(String)` - The lowercase crawl domain
/// * `None` - The seed has no host
pub fn crawl_domain(seed: &Url) -> Option<String> {
    extract_host(seed)
}
