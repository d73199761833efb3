//! Linksweep: a broken-link sweeper
//!
//! This crate crawls a website breadth-first to discover its link graph (or
//! ingests a provided URL list) and checks every candidate link concurrently,
//! classifying each as healthy or broken.

pub mod checker;
pub mod config;
pub mod crawler;
pub mod http;
pub mod input;
pub mod output;
pub mod url;

use thiserror::Error;

/// Main error type for linksweep operations
#[derive(Debug, Error)]
pub enum SweepError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("URL error: {0}")]
    Url(#[from] UrlError),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] ::url::ParseError),

    #[error("HTTP client error: {0}")]
    Client(#[from] reqwest::Error),

    #[error("Failed to read URL list '{path}': {source}")]
    InputList {
        path: String,
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),
}

/// URL-specific errors
#[derive(Debug, Error)]
pub enum UrlError {
    #[error("Failed to parse URL '{url}': {message}")]
    Parse { url: String, message: String },

    #[error("Invalid URL scheme '{0}': only http and https are supported")]
    InvalidScheme(String),

    #[error("URL has no host: {0}")]
    MissingHost(String),
}

/// Result type alias for linksweep operations
pub type Result<T> = std::result::Result<T, SweepError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use crate::checker::{check_links, CheckResult, STATUS_UNREACHABLE};
pub use crate::config::Config;
pub use crate::crawler::crawl;
pub use crate::url::{crawl_domain, is_in_scope, parse_seed_url};
