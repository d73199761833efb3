//! Single-URL existence check

use crate::checker::result::CheckResult;
use reqwest::Client;

/// Checks one URL with a HEAD request, following redirects
///
/// Records the final status code of the response. Any transport-level
/// failure (DNS, refused connection, timeout, TLS, unsupported scheme,
/// exceeded redirect limit) collapses into the unreachable sentinel; the
/// subtypes are logged at debug level but not distinguished in the result.
///
/// This function never fails: every outcome is expressed as a `CheckResult`.
///
/// # Arguments
///
/// * `client` - The shared HTTP client
/// * `url` - The URL to check
pub async fn check_url(client: &Client, url: String) -> CheckResult {
    match client.head(&url).send().await {
        Ok(response) => CheckResult {
            status: response.status().as_u16(),
            url,
        },
        Err(e) => {
            tracing::debug!("Transport failure for {}: {}", url, e);
            CheckResult::unreachable(url)
        }
    }
}
