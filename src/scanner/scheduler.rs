//! Batch scheduler
//!
//! Partitions the URL list into fixed-size batches and runs each batch with
//! one concurrent fetch task per URL. Batches never overlap: every worker in
//! a batch is joined before that batch's matches are appended to the sink
//! and the next batch starts. Peak concurrency therefore equals the batch
//! size, and the inter-batch delay throttles the sustained request rate
//! against target servers.

use crate::config::ScanConfig;
use crate::scanner::fetcher::{scan_url, FailureReason, FetchOutcome};
use crate::scanner::matcher::KeywordSet;
use crate::sink::{ResultSink, ScanStats};
use crate::ScanError;
use reqwest::Client;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinSet;

/// Drives sequential batches of concurrent fetch workers
pub struct BatchScheduler {
    client: Client,
    keywords: Arc<KeywordSet>,
    batch_size: usize,
    batch_delay: Duration,
}

impl BatchScheduler {
    /// Creates a scheduler from a validated scan configuration
    pub fn new(client: Client, config: &ScanConfig) -> Self {
        Self {
            client,
            keywords: Arc::new(KeywordSet::new(&config.keywords)),
            batch_size: config.batch_size,
            batch_delay: Duration::from_millis(config.batch_delay_ms),
        }
    }

    /// Runs every batch in sequence, appending matches to the sink as each
    /// batch drains
    ///
    /// Returns accumulated statistics for the whole run. An empty URL list
    /// completes immediately with zeroed stats.
    pub async fn run(
        &self,
        urls: &[String],
        sink: &mut ResultSink,
    ) -> Result<ScanStats, ScanError> {
        let mut stats = ScanStats::default();
        let total_batches = batch_count(urls.len(), self.batch_size);

        for (index, batch) in urls.chunks(self.batch_size).enumerate() {
            let matched = self.run_batch(batch, &mut stats).await;

            sink.append_batch(&matched)?;
            stats.batches += 1;

            tracing::info!(
                "Batch {}/{} complete: {} matched here, {} matched so far",
                index + 1,
                total_batches,
                matched.len(),
                stats.matched
            );

            // Throttle between batches, not after the last one
            if index + 1 < total_batches && !self.batch_delay.is_zero() {
                tokio::time::sleep(self.batch_delay).await;
            }
        }

        Ok(stats)
    }

    /// Runs a single batch: one spawned task per URL, all joined before
    /// returning
    ///
    /// Matches come back in input-line order, which is stronger than the
    /// contract requires but keeps runs reproducible under a stubbed fetch
    /// layer.
    async fn run_batch(&self, batch: &[String], stats: &mut ScanStats) -> Vec<String> {
        let mut tasks = JoinSet::new();

        for (offset, raw_line) in batch.iter().enumerate() {
            let client = self.client.clone();
            let keywords = Arc::clone(&self.keywords);
            let raw_line = raw_line.clone();
            tasks.spawn(async move { (offset, scan_url(&client, &raw_line, &keywords).await) });
        }

        let mut outcomes: Vec<(usize, FetchOutcome)> = Vec::with_capacity(batch.len());
        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok(entry) => outcomes.push(entry),
                Err(e) => {
                    // A panicked worker is contained here; its siblings in
                    // the set keep running to completion
                    tracing::error!("Fetch worker aborted: {}", e);
                    stats.record(&FetchOutcome::Failed {
                        reason: FailureReason::Connection(format!("worker aborted: {}", e)),
                    });
                }
            }
        }
        outcomes.sort_by_key(|(offset, _)| *offset);

        let mut matched = Vec::new();
        for (_, outcome) in outcomes {
            stats.record(&outcome);
            if let FetchOutcome::Matched { url } = outcome {
                matched.push(url);
            }
        }
        matched
    }
}

/// Number of batches produced for `total` URLs at `batch_size`
pub fn batch_count(total: usize, batch_size: usize) -> usize {
    total.div_ceil(batch_size)
}
