//! Site crawler: bounded breadth-first link discovery
//!
//! This module contains the crawling logic, including:
//! - The FIFO frontier and visited-set bookkeeping
//! - Page fetching and anchor extraction
//! - The breadth-first traversal loop

mod extractor;
mod frontier;
mod traversal;

pub use extractor::{extract_links, links_from_html};
pub use frontier::{Frontier, QueuedPage, VisitedSet};
pub use traversal::crawl_site;

use crate::url::{crawl_domain, parse_seed_url};
use crate::{SweepError, UrlError};
use reqwest::Client;

/// Crawls a website breadth-first and returns every discovered link
///
/// The returned collection is the full candidate set for link checking: every
/// anchor resolved on every visited page, off-domain links included,
/// duplicates preserved in discovery order. Only in-scope links are traversed
/// further. The crawl is eager and fully materialized; a streaming variant is
/// a possible extension for very large sites.
///
/// A single page failing to fetch or parse contributes zero links and the
/// crawl continues.
///
/// # Arguments
///
/// * `client` - The shared HTTP client
/// * `seed_url` - The absolute URL the crawl starts from (depth 1)
/// * `max_depth` - Maximum link-hop depth; pages beyond it are never fetched
///
/// # Returns
///
/// * `Ok(Vec<String>)` - All discovered candidate links
/// * `Err(SweepError)` - The seed URL is invalid
pub async fn crawl(
    client: &Client,
    seed_url: &str,
    max_depth: u32,
) -> Result<Vec<String>, SweepError> {
    let seed = parse_seed_url(seed_url)?;
    let domain = crawl_domain(&seed)
        .ok_or_else(|| UrlError::MissingHost(seed_url.to_string()))?;

    Ok(crawl_site(client, seed, &domain, max_depth).await)
}
