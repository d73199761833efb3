//! URL parsing and crawl-scope classification
//!
//! This module handles seed URL validation, host extraction, and the
//! in-scope check that bounds the crawl to the seed's domain.

mod domain;
mod scope;

pub use domain::{crawl_domain, extract_host};
pub use scope::is_in_scope;

use crate::UrlError;
use url::Url;

/// Parses and validates a seed URL
///
/// A valid seed is an absolute URL with an http or https scheme and a host.
///
/// # Arguments
///
/// * `raw` - The URL string to parse
///
/// # Returns
///
/// * `Ok(Url)` - The parsed seed URL
/// * `Err(UrlError)` - The URL is malformed, has a non-HTTP scheme, or no host
pub fn parse_seed_url(raw: &str) -> Result<Url, UrlError> {
    let url = Url::parse(raw).map_err(|e| UrlError::Parse {
        url: raw.to_string(),
        message: e.to_string(),
    })?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(UrlError::InvalidScheme(url.scheme().to_string()));
    }

    if url.host_str().is_none() {
        return Err(UrlError::MissingHost(raw.to_string()));
    }

    Ok(url)
}
