//! Breadth-first traversal loop
//!
//! Traversal is sequential and single-threaded: the frontier and visited set
//! have exactly one mutating control flow, so level-order visitation and the
//! fetch-once guarantee need no synchronization.

use crate::crawler::extractor::extract_links;
use crate::crawler::frontier::{Frontier, VisitedSet};
use crate::url::is_in_scope;
use reqwest::Client;
use url::Url;

/// Runs a breadth-first crawl from a parsed seed
///
/// Dequeues pages in FIFO order; a page is skipped without fetching when it
/// was already visited or its depth exceeds `max_depth`. Every extracted link
/// lands in the candidate list, but only in-scope, not-yet-visited links are
/// enqueued for expansion at depth + 1.
///
/// With `max_depth` 0 the seed itself is over the limit and nothing is
/// fetched; with 1 only the seed is fetched.
///
/// # Arguments
///
/// * `client` - The shared HTTP client
/// * `seed` - The parsed seed URL
/// * `domain` - The crawl domain (lowercase host of the seed)
/// * `max_depth` - Maximum hop depth to expand
///
/// # Returns
///
/// All discovered candidate links in discovery order
pub async fn crawl_site(client: &Client, seed: Url, domain: &str, max_depth: u32) -> Vec<String> {
    let mut frontier = Frontier::seeded(seed);
    let mut visited = VisitedSet::default();
    let mut candidates = Vec::new();

    while let Some(page) = frontier.dequeue() {
        if visited.contains(&page.url) || page.depth > max_depth {
            continue;
        }
        visited.mark(&page.url);

        tracing::info!("Crawling {} (depth {})", page.url, page.depth);

        let links = extract_links(client, &page.url).await;
        tracing::debug!("{} links found on {}", links.len(), page.url);

        for link in links {
            candidates.push(link.clone());

            let Ok(parsed) = Url::parse(&link) else {
                continue;
            };
            if is_in_scope(&parsed, domain) && !visited.contains(&parsed) {
                frontier.enqueue(parsed, page.depth + 1);
            }
        }
    }

    tracing::info!(
        "Crawl finished: {} pages visited, {} candidate links",
        visited.len(),
        candidates.len()
    );

    candidates
}
