//! Scanner module: batch fetching and keyword filtering
//!
//! This module contains the core scanning logic, including:
//! - HTTP fetching with per-request timeouts
//! - Page text extraction and keyword matching
//! - Batch scheduling with bounded concurrency
//! - Overall run coordination

mod coordinator;
mod fetcher;
mod matcher;
mod parser;
mod scheduler;

pub use coordinator::{read_url_lines, run_scan, Coordinator, RunReport, RunState};
pub use fetcher::{build_http_client, scan_url, FailureReason, FetchOutcome};
pub use matcher::KeywordSet;
pub use parser::extract_text;
pub use scheduler::{batch_count, BatchScheduler};
