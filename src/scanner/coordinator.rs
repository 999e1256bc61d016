//! Run coordinator - main scan orchestration logic
//!
//! Owns one scan from input load to final artifact: read the URL list,
//! drive the batch scheduler over it, and report where the results landed.
//! Loading failures are fatal to the run and surface immediately; every
//! failure after loading is per-URL and absorbed inside the scan.

use crate::config::{hash_content, validate, Config};
use crate::scanner::fetcher::build_http_client;
use crate::scanner::scheduler::BatchScheduler;
use crate::sink::{ResultSink, ScanStats};
use crate::url::normalize_url;
use crate::ScanError;
use chrono::{DateTime, Utc};
use std::path::{Path, PathBuf};
use std::time::Duration;
use url::Url;

/// Phases of one scan run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Idle,
    Loading,
    Scanning,
    Done,
    Failed,
}

/// What a completed run reports back
#[derive(Debug, Clone)]
pub struct RunReport {
    /// Where the result artifact was written
    pub output_path: PathBuf,

    /// Statistics over every URL scanned
    pub stats: ScanStats,

    /// SHA-256 hex digest of the raw input file
    pub input_fingerprint: String,

    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}

impl RunReport {
    /// True when the run completed without a single keyword match
    ///
    /// This is a valid terminal state, distinct from any failure.
    pub fn no_matches(&self) -> bool {
        self.stats.matched == 0
    }
}

/// Coordinates one scan run over one input URL list
///
/// The coordinator owns the URL sequence and the result artifact handle for
/// the duration of a run and retains nothing afterwards; runs are fully
/// independent of each other.
pub struct Coordinator {
    config: Config,
    input: PathBuf,
    state: RunState,
}

impl Coordinator {
    /// Creates a coordinator for the URL list at `input`
    ///
    /// The configuration is validated here, before anything is read or
    /// written.
    pub fn new(config: Config, input: &Path) -> Result<Self, ScanError> {
        validate(&config)?;

        Ok(Self {
            config,
            input: input.to_path_buf(),
            state: RunState::Idle,
        })
    }

    /// The current run phase
    pub fn state(&self) -> RunState {
        self.state
    }

    fn enter(&mut self, next: RunState) {
        tracing::debug!("Run state: {:?} -> {:?}", self.state, next);
        self.state = next;
    }

    /// Runs the scan to completion
    ///
    /// On success the run ends in `Done` with a report; any fatal error
    /// (unreadable input, sink failure, client build failure) ends it in
    /// `Failed`.
    pub async fn run(&mut self) -> Result<RunReport, ScanError> {
        let result = self.run_inner().await;
        if result.is_err() {
            self.enter(RunState::Failed);
        }
        result
    }

    async fn run_inner(&mut self) -> Result<RunReport, ScanError> {
        let started_at = Utc::now();

        self.enter(RunState::Loading);
        let raw = std::fs::read_to_string(&self.input).map_err(|source| ScanError::InputRead {
            path: self.input.clone(),
            source,
        })?;

        let input_fingerprint = hash_content(&raw);
        let urls: Vec<String> = raw.lines().map(|line| line.trim().to_string()).collect();

        tracing::info!(
            "Loaded {} URL candidates from {} (sha256 {})",
            urls.len(),
            self.input.display(),
            &input_fingerprint[..12]
        );

        let unfetchable = urls
            .iter()
            .filter(|line| !line.is_empty() && Url::parse(&normalize_url(line)).is_err())
            .count();
        if unfetchable > 0 {
            tracing::warn!(
                "{} entries do not parse as absolute URLs and will fail at fetch time",
                unfetchable
            );
        }

        self.enter(RunState::Scanning);
        let output_path = PathBuf::from(&self.config.output.results_path);
        let mut sink = ResultSink::create(&output_path)?;

        let timeout = Duration::from_secs(self.config.scan.request_timeout_secs);
        let client = build_http_client(timeout)?;
        let scheduler = BatchScheduler::new(client, &self.config.scan);

        let stats = scheduler.run(&urls, &mut sink).await?;

        self.enter(RunState::Done);
        let finished_at = Utc::now();

        tracing::info!(
            "Scan complete: {} of {} URLs matched across {} batches, results at {}",
            stats.matched,
            stats.scanned,
            stats.batches,
            output_path.display()
        );

        Ok(RunReport {
            output_path,
            stats,
            input_fingerprint,
            started_at,
            finished_at,
        })
    }
}

/// Reads the URL list at `path`: one candidate per line, trimmed but
/// otherwise raw
///
/// Empty and malformed lines are kept; they flow through normalization and
/// fail naturally at fetch time.
pub fn read_url_lines(path: &Path) -> Result<Vec<String>, ScanError> {
    let content = std::fs::read_to_string(path).map_err(|source| ScanError::InputRead {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(content.lines().map(|line| line.trim().to_string()).collect())
}

/// Runs one complete scan over the URL list at `input`
///
/// # Example
///
/// ```no_run
/// use std::path::Path;
/// use websift::config::Config;
/// use websift::scanner::run_scan;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let report = run_scan(Config::default(), Path::new("urls.txt")).await?;
/// println!("Results at {}", report.output_path.display());
/// # Ok(())
/// # }
/// ```
pub async fn run_scan(config: Config, input: &Path) -> Result<RunReport, ScanError> {
    let mut coordinator = Coordinator::new(config, input)?;
    coordinator.run().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_read_url_lines_trims_and_keeps_blanks() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "  http://example.com  \n\nwww.example.org\n").unwrap();
        file.flush().unwrap();

        let lines = read_url_lines(file.path()).unwrap();
        assert_eq!(
            lines,
            vec![
                "http://example.com".to_string(),
                String::new(),
                "www.example.org".to_string(),
            ]
        );
    }

    #[test]
    fn test_read_url_lines_missing_file() {
        let result = read_url_lines(Path::new("/nonexistent/urls.txt"));
        assert!(matches!(result, Err(ScanError::InputRead { .. })));
    }

    #[test]
    fn test_new_coordinator_rejects_invalid_config() {
        let mut config = Config::default();
        config.scan.batch_size = 0;

        let result = Coordinator::new(config, Path::new("urls.txt"));
        assert!(matches!(result, Err(ScanError::Config(_))));
    }

    #[test]
    fn test_new_coordinator_starts_idle() {
        let coordinator = Coordinator::new(Config::default(), Path::new("urls.txt")).unwrap();
        assert_eq!(coordinator.state(), RunState::Idle);
    }
}
