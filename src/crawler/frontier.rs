//! Crawl frontier and visited-set bookkeeping
//!
//! The frontier is a plain FIFO queue; popping in insertion order is what
//! makes the traversal breadth-first. The visited set is a separate hash set
//! keyed by the full URL string.
//!
//! The authoritative visited check happens at dequeue time. Enqueueing also
//! skips already-visited URLs, but a URL can still be queued more than once
//! before its first visit; the dequeue-time check guarantees it is only ever
//! fetched once, at the cost of some queue bloat.

use std::collections::{HashSet, VecDeque};
use url::Url;

/// A page awaiting visitation, tagged with its link-hop depth from the seed
#[derive(Debug, Clone)]
pub struct QueuedPage {
    /// The page URL
    pub url: Url,

    /// Hop depth; the seed itself is depth 1
    pub depth: u32,
}

/// FIFO queue of pages to visit
#[derive(Debug, Default)]
pub struct Frontier {
    queue: VecDeque<QueuedPage>,
}

impl Frontier {
    /// Creates a frontier seeded with a single page at depth 1
    pub fn seeded(seed: Url) -> Self {
        let mut frontier = Self::default();
        frontier.enqueue(seed, 1);
        frontier
    }

    /// Appends a page to the back of the queue
    pub fn enqueue(&mut self, url: Url, depth: u32) {
        self.queue.push_back(QueuedPage { url, depth });
    }

    /// Removes and returns the head of the queue
    pub fn dequeue(&mut self) -> Option<QueuedPage> {
        self.queue.pop_front()
    }

    /// Returns the number of queued pages
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Returns whether the queue is empty
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

/// Set of URLs that have already been dequeued and processed
#[derive(Debug, Default)]
pub struct VisitedSet {
    seen: HashSet<String>,
}

impl VisitedSet {
    /// Marks a URL as visited; returns false if it was already marked
    pub fn mark(&mut self, url: &Url) -> bool {
        self.seen.insert(url.as_str().to_string())
    }

    /// Returns whether a URL has been visited
    pub fn contains(&self, url: &Url) -> bool {
        self.seen.contains(url.as_str())
    }

    /// Returns the number of visited URLs
    pub fn len(&self) -> usize {
        self.seen.len()
    }

    /// Returns whether no URL has been visited yet
    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(s: &str) -> Url {
        Url::parse(s).unwrap()
    }

    #[test]
    fn test_frontier_is_fifo() {
        let mut frontier = Frontier::seeded(page("https://a.test/"));
        frontier.enqueue(page("https://a.test/b"), 2);
        frontier.enqueue(page("https://a.test/c"), 2);

        assert_eq!(frontier.dequeue().unwrap().url.as_str(), "https://a.test/");
        assert_eq!(frontier.dequeue().unwrap().url.as_str(), "https://a.test/b");
        assert_eq!(frontier.dequeue().unwrap().url.as_str(), "https://a.test/c");
        assert!(frontier.dequeue().is_none());
    }

    #[test]
    fn test_seed_starts_at_depth_one() {
        let mut frontier = Frontier::seeded(page("https://a.test/"));
        assert_eq!(frontier.dequeue().unwrap().depth, 1);
    }

    #[test]
    fn test_frontier_allows_duplicate_entries() {
        // Dedup is the dequeue-time visited check's job, not the queue's.
        let mut frontier = Frontier::default();
        frontier.enqueue(page("https://a.test/x"), 2);
        frontier.enqueue(page("https://a.test/x"), 3);
        assert_eq!(frontier.len(), 2);
    }

    #[test]
    fn test_visited_mark_is_idempotent() {
        let mut visited = VisitedSet::default();
        assert!(visited.mark(&page("https://a.test/")));
        assert!(!visited.mark(&page("https://a.test/")));
        assert_eq!(visited.len(), 1);
    }

    #[test]
    fn test_visited_distinguishes_fragments() {
        let mut visited = VisitedSet::default();
        visited.mark(&page("https://a.test/page"));
        assert!(!visited.contains(&page("https://a.test/page#section")));
    }
}
