//! Link checker: concurrent reachability checks and classification
//!
//! This module contains the validation half of the pipeline:
//! - One lightweight HEAD request per URL, redirects followed
//! - A fixed-size worker pool feeding results over a fan-in channel
//! - The broken/healthy classification rule

mod pool;
mod probe;
mod result;

pub use pool::check_links;
pub use probe::check_url;
pub use result::{CheckResult, STATUS_UNREACHABLE};
