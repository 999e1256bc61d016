//! Websift: a batch URL relevance scanner
//!
//! This crate reads a list of URLs, fetches each page in sequential batches
//! of concurrent requests, checks the page text against a configured keyword
//! set, and appends every matching URL to a durable result file as it is
//! found.

pub mod config;
pub mod scanner;
pub mod sink;
pub mod url;

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for websift operations
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Failed to read URL list {path}: {source}")]
    InputRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Result sink error: {0}")]
    Sink(#[from] sink::SinkError),

    #[error("HTTP client error: {0}")]
    Client(#[from] reqwest::Error),
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

/// Result type alias for websift operations
pub type Result<T> = std::result::Result<T, ScanError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::Config;
pub use scanner::{run_scan, Coordinator, FetchOutcome, RunReport, RunState};
pub use sink::{ResultSink, ScanStats};
pub use self::url::normalize_url;
