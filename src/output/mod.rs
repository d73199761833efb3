//! Result output: broken-link files, the CSV report filter, and summaries
//!
//! The results file format is load-bearing: one broken link per line as
//! `<url> - HTTP status code: <code>`. The filter in this module and any
//! downstream tooling parse that exact format.

mod filter;
mod report;
mod stats;

pub use filter::{filter_report, parse_result_line, ReportRow};
pub use report::write_broken_links;
pub use stats::{print_run_summary, RunSummary};
