//! Configuration loading and validation
//!
//! Tuning knobs live in an optional TOML file; every field has a default so
//! the tool runs without one. CLI flags override loaded values.

mod parser;
mod types;
mod validation;

pub use parser::load_config;
pub use types::{CheckerConfig, Config, CrawlerConfig, HttpConfig};
pub use validation::validate;
