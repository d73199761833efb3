//! Shared HTTP client construction
//!
//! One `reqwest::Client` is built per run and cloned into the crawler and the
//! checker workers. Cloning is cheap; the underlying connection pool is
//! shared.

use crate::config::HttpConfig;
use reqwest::{redirect::Policy, Client};
use std::time::Duration;

/// Maximum redirect hops followed before a check is treated as failed
const MAX_REDIRECTS: usize = 10;

/// Builds the HTTP client used for crawling and link checking
///
/// Every request carries the configured timeout, so an unresponsive server
/// can never hang a crawl or a check batch. Redirects are followed up to
/// [`MAX_REDIRECTS`] hops; exceeding the limit surfaces as a transport error.
///
/// # Arguments
///
/// * `config` - The HTTP configuration (timeout and user agent)
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
pub fn build_client(config: &HttpConfig) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(config.user_agent.clone())
        .timeout(Duration::from_secs(config.timeout_secs))
        .connect_timeout(Duration::from_secs(config.timeout_secs))
        .redirect(Policy::limited(MAX_REDIRECTS))
        .gzip(true)
        .brotli(true)
        .build()
}
