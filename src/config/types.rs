use serde::Deserialize;

/// Keyword set applied when the configuration names none
pub const DEFAULT_KEYWORDS: &[&str] = &["horse", "equine"];

/// Main configuration structure for websift
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub scan: ScanConfig,
    pub output: OutputConfig,
}

/// Scan behavior configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    /// Number of URLs fetched concurrently per batch
    #[serde(rename = "batch-size")]
    pub batch_size: usize,

    /// Per-request timeout in seconds
    #[serde(rename = "request-timeout-secs")]
    pub request_timeout_secs: u64,

    /// Pause between batches in milliseconds
    #[serde(rename = "batch-delay-ms")]
    pub batch_delay_ms: u64,

    /// Keywords a page must contain (case-insensitive substring match)
    pub keywords: Vec<String>,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            batch_size: 10,
            request_timeout_secs: 10,
            batch_delay_ms: 2000,
            keywords: DEFAULT_KEYWORDS.iter().map(|k| k.to_string()).collect(),
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Path the matched URLs are appended to
    #[serde(rename = "results-path")]
    pub results_path: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            results_path: "relevant_urls.txt".to_string(),
        }
    }
}
