//! Fixed-size worker pool with fan-in aggregation
//!
//! The pool spawns a bounded number of worker tasks rather than one task per
//! URL, so sockets and memory stay bounded against large URL lists. Workers
//! pull from a shared queue and send each completed [`CheckResult`] over an
//! mpsc channel to a single aggregating receiver; no mutable aggregation
//! state is ever shared between workers.

use crate::checker::probe::check_url;
use crate::checker::result::CheckResult;
use reqwest::Client;
use std::collections::{HashSet, VecDeque};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::{mpsc, Mutex};

/// Checks a batch of URLs concurrently and classifies each one
///
/// Input URLs are de-duplicated (first occurrence wins) before dispatch, so
/// the output contains at most one result per distinct URL. Results arrive in
/// completion order, not submission order; callers must not rely on ordering.
///
/// If a worker dies abnormally, the URLs it never reported are logged and
/// reclassified as broken with the unreachable sentinel instead of being
/// silently dropped from the batch.
///
/// # Arguments
///
/// * `client` - The shared HTTP client, cloned into each worker
/// * `urls` - The candidate URLs to check
/// * `workers` - Number of concurrent workers (in-flight checks)
///
/// # Returns
///
/// The classified results and the wall-clock time the batch took
pub async fn check_links(
    client: &Client,
    urls: Vec<String>,
    workers: usize,
) -> (Vec<CheckResult>, Duration) {
    let started = Instant::now();

    let mut seen = HashSet::new();
    let unique: Vec<String> = urls
        .into_iter()
        .filter(|url| seen.insert(url.clone()))
        .collect();

    if unique.is_empty() {
        return (Vec::new(), started.elapsed());
    }

    let total = unique.len();
    let queue = Arc::new(Mutex::new(VecDeque::from(unique)));
    let (tx, mut rx) = mpsc::channel::<CheckResult>(workers.max(1));

    let worker_count = workers.max(1).min(total);
    let mut handles = Vec::with_capacity(worker_count);

    for _ in 0..worker_count {
        let client = client.clone();
        let queue = Arc::clone(&queue);
        let tx = tx.clone();

        handles.push(tokio::spawn(async move {
            loop {
                let next = queue.lock().await.pop_front();
                let Some(url) = next else {
                    break;
                };

                let result = check_url(&client, url).await;
                if result.is_broken() {
                    tracing::info!(
                        "Broken link found: {} - HTTP status code: {}",
                        result.url,
                        result.status
                    );
                }

                // Receiver gone means the batch was abandoned; stop working.
                if tx.send(result).await.is_err() {
                    break;
                }
            }
        }));
    }

    // The workers hold the remaining senders; dropping ours lets recv() end
    // once they all finish.
    drop(tx);

    let mut results = Vec::with_capacity(total);
    while let Some(result) = rx.recv().await {
        results.push(result);
    }

    for handle in handles {
        if let Err(e) = handle.await {
            tracing::error!("Check worker terminated abnormally: {}", e);
        }
    }

    // A dead worker can lose the URL it had in flight. Surface the loss as
    // broken-with-unknown-cause rather than omitting it from the batch.
    if results.len() < total {
        let reported: HashSet<String> = results.iter().map(|r| r.url.clone()).collect();
        let missing: Vec<String> = seen
            .into_iter()
            .filter(|url| !reported.contains(url))
            .collect();

        for url in missing {
            tracing::warn!("No result for {}; recording as unreachable", url);
            results.push(CheckResult::unreachable(url));
        }
    }

    (results, started.elapsed())
}
