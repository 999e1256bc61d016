//! Per-run scan statistics
//!
//! Counters are accumulated by the batch scheduler as outcomes arrive and
//! surfaced through the run report.

use crate::scanner::{FailureReason, FetchOutcome};

/// Counters accumulated over one run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanStats {
    /// URLs whose fetch produced any outcome
    pub scanned: u64,

    /// Pages whose text contained a keyword
    pub matched: u64,

    /// Pages fetched successfully with no keyword
    pub not_matched: u64,

    /// Fetches that exceeded the request timeout
    pub timeouts: u64,

    /// Connection-level failures
    pub connection_errors: u64,

    /// Non-200 responses
    pub http_errors: u64,

    /// Bodies that could not be decoded
    pub decode_errors: u64,

    /// Batches completed
    pub batches: u64,
}

impl ScanStats {
    /// Records one fetch outcome
    pub fn record(&mut self, outcome: &FetchOutcome) {
        self.scanned += 1;
        match outcome {
            FetchOutcome::Matched { .. } => self.matched += 1,
            FetchOutcome::NotMatched => self.not_matched += 1,
            FetchOutcome::Failed { reason } => match reason {
                FailureReason::Timeout => self.timeouts += 1,
                FailureReason::Connection(_) => self.connection_errors += 1,
                FailureReason::Status(_) => self.http_errors += 1,
                FailureReason::Decode(_) => self.decode_errors += 1,
            },
        }
    }

    /// Total failed fetches across all reason classes
    pub fn failed(&self) -> u64 {
        self.timeouts + self.connection_errors + self.http_errors + self.decode_errors
    }
}

/// Prints a formatted scan summary to stdout
pub fn print_stats(stats: &ScanStats) {
    println!("=== Scan Summary ===\n");

    println!("  URLs scanned: {}", stats.scanned);
    println!("  Matched: {}", stats.matched);
    println!("  Not matched: {}", stats.not_matched);

    if stats.failed() > 0 {
        println!("  Failed: {}", stats.failed());
        if stats.timeouts > 0 {
            println!("    timeouts: {}", stats.timeouts);
        }
        if stats.connection_errors > 0 {
            println!("    connection errors: {}", stats.connection_errors);
        }
        if stats.http_errors > 0 {
            println!("    HTTP errors: {}", stats.http_errors);
        }
        if stats.decode_errors > 0 {
            println!("    decode errors: {}", stats.decode_errors);
        }
    }

    println!("  Batches: {}", stats.batches);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_each_outcome_class() {
        let mut stats = ScanStats::default();

        stats.record(&FetchOutcome::Matched {
            url: "http://example.com".to_string(),
        });
        stats.record(&FetchOutcome::NotMatched);
        stats.record(&FetchOutcome::Failed {
            reason: FailureReason::Timeout,
        });
        stats.record(&FetchOutcome::Failed {
            reason: FailureReason::Connection("refused".to_string()),
        });
        stats.record(&FetchOutcome::Failed {
            reason: FailureReason::Status(500),
        });
        stats.record(&FetchOutcome::Failed {
            reason: FailureReason::Decode("bad charset".to_string()),
        });

        assert_eq!(stats.scanned, 6);
        assert_eq!(stats.matched, 1);
        assert_eq!(stats.not_matched, 1);
        assert_eq!(stats.timeouts, 1);
        assert_eq!(stats.connection_errors, 1);
        assert_eq!(stats.http_errors, 1);
        assert_eq!(stats.decode_errors, 1);
        assert_eq!(stats.failed(), 4);
    }

    #[test]
    fn test_default_is_zeroed() {
        let stats = ScanStats::default();
        assert_eq!(stats.scanned, 0);
        assert_eq!(stats.failed(), 0);
        assert_eq!(stats.batches, 0);
    }
}
