//! HTTP fetch worker
//!
//! Each worker performs one GET with a bounded timeout, classifies the
//! response, and reports a single outcome. Failures are values, not
//! exceptions: they flow through the same channel as matches, so the
//! scheduler treats all outcomes uniformly and one bad URL can never abort
//! its batch. No fetch is ever retried.

use crate::scanner::matcher::KeywordSet;
use crate::scanner::parser::extract_text;
use crate::url::normalize_url;
use reqwest::{Client, StatusCode};
use std::fmt;
use std::time::Duration;

/// Result of scanning one URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The page was fetched and its text contains a keyword
    Matched { url: String },

    /// The page was fetched but no keyword was found
    NotMatched,

    /// The fetch failed; the reason is logged and counted, never retried
    Failed { reason: FailureReason },
}

/// Why a fetch failed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureReason {
    /// The request exceeded the configured timeout
    Timeout,

    /// Connection-level failure (refused, DNS, malformed URL, ...)
    Connection(String),

    /// The server answered with a non-200 status
    Status(u16),

    /// The body could not be decoded as text
    Decode(String),
}

impl fmt::Display for FailureReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureReason::Timeout => write!(f, "timeout"),
            FailureReason::Connection(message) => write!(f, "connection error: {}", message),
            FailureReason::Status(code) => write!(f, "HTTP {}", code),
            FailureReason::Decode(message) => write!(f, "decode error: {}", message),
        }
    }
}

/// Builds the HTTP client shared by all fetch workers in a run
///
/// Redirects follow reqwest's default policy, and plain HTTP is allowed:
/// the normalizer emits `http://` URLs by contract.
pub fn build_http_client(timeout: Duration) -> Result<Client, reqwest::Error> {
    let user_agent = format!("websift/{}", env!("CARGO_PKG_VERSION"));

    Client::builder()
        .user_agent(user_agent)
        .timeout(timeout)
        .connect_timeout(timeout.min(Duration::from_secs(10)))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Scans a single raw URL line: normalize, fetch, classify
///
/// Always returns an outcome. Failures are logged here with the URL and
/// cause; the caller only counts them.
pub async fn scan_url(client: &Client, raw_line: &str, keywords: &KeywordSet) -> FetchOutcome {
    let url = normalize_url(raw_line);

    let response = match client.get(&url).send().await {
        Ok(response) => response,
        Err(e) => {
            let reason = classify_request_error(&e);
            tracing::warn!("Fetch failed for {}: {}", url, reason);
            return FetchOutcome::Failed { reason };
        }
    };

    let status = response.status();
    if status != StatusCode::OK {
        tracing::warn!("Fetch failed for {}: HTTP {}", url, status.as_u16());
        return FetchOutcome::Failed {
            reason: FailureReason::Status(status.as_u16()),
        };
    }

    let body = match response.text().await {
        Ok(body) => body,
        Err(e) => {
            let reason = if e.is_timeout() {
                FailureReason::Timeout
            } else {
                FailureReason::Decode(e.to_string())
            };
            tracing::warn!("Body read failed for {}: {}", url, reason);
            return FetchOutcome::Failed { reason };
        }
    };

    let text = extract_text(&body);
    if keywords.matches(&text) {
        tracing::debug!("Keyword match on {}", url);
        FetchOutcome::Matched { url }
    } else {
        FetchOutcome::NotMatched
    }
}

/// Maps a reqwest send error onto the failure taxonomy
fn classify_request_error(e: &reqwest::Error) -> FailureReason {
    if e.is_timeout() {
        FailureReason::Timeout
    } else if e.is_connect() {
        FailureReason::Connection("connection refused or unreachable".to_string())
    } else {
        // Builder errors for malformed URLs land here too; they fail the
        // same way a dead host does, per the pass-through normalization rule
        FailureReason::Connection(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_http_client() {
        let client = build_http_client(Duration::from_secs(10));
        assert!(client.is_ok());
    }

    #[test]
    fn test_failure_reason_display() {
        assert_eq!(FailureReason::Timeout.to_string(), "timeout");
        assert_eq!(FailureReason::Status(404).to_string(), "HTTP 404");
        assert_eq!(
            FailureReason::Connection("refused".to_string()).to_string(),
            "connection error: refused"
        );
        assert_eq!(
            FailureReason::Decode("bad charset".to_string()).to_string(),
            "decode error: bad charset"
        );
    }

    // Fetch behavior against live responses is covered by the wiremock
    // integration tests
}
