//! Run summary reporting

use crate::checker::CheckResult;
use std::time::Duration;

/// Summary of one check run
#[derive(Debug, Clone)]
pub struct RunSummary {
    /// Number of distinct URLs that were checked
    pub processed: usize,

    /// Number of links classified as broken
    pub broken: usize,

    /// Wall-clock time the check batch took
    pub elapsed: Duration,
}

impl RunSummary {
    /// Builds a summary from a batch of check results
    pub fn from_results(results: &[CheckResult], elapsed: Duration) -> Self {
        Self {
            processed: results.len(),
            broken: results.iter().filter(|r| r.is_broken()).count(),
            elapsed,
        }
    }
}

/// Prints the run summary and every broken link to stdout
///
/// The summary is always printed, even when a run was partial. Broken lines
/// use the same format as the results file.
pub fn print_run_summary(summary: &RunSummary, broken: &[CheckResult]) {
    println!(
        "Processed {} sites in {:.2} seconds.",
        summary.processed,
        summary.elapsed.as_secs_f64()
    );
    println!("Found {} broken links:", summary.broken);

    for result in broken {
        println!("{} - HTTP status code: {}", result.url, result.status);
    }
}
