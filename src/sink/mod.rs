//! Result sink: durable, append-only output of matched URLs
//!
//! The sink is handed one group of matches per batch, after that batch's
//! workers have all completed, so it is never written concurrently. Every
//! append is flushed and fsynced before returning; a crash mid-run loses at
//! most the current batch.

mod stats;

pub use stats::{print_stats, ScanStats};

use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while writing the result artifact
#[derive(Debug, Error)]
pub enum SinkError {
    #[error("Failed to create result file {path}: {source}")]
    Create {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to append to result file {path}: {source}")]
    Append {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Append-only writer for matched URLs, one per line
pub struct ResultSink {
    file: File,
    path: PathBuf,
    matched: u64,
}

impl ResultSink {
    /// Creates the result file, truncating any previous artifact at the path
    ///
    /// Parent directories are created as needed.
    pub fn create(path: &Path) -> Result<Self, SinkError> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|source| SinkError::Create {
                    path: path.to_path_buf(),
                    source,
                })?;
            }
        }

        let file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(path)
            .map_err(|source| SinkError::Create {
                path: path.to_path_buf(),
                source,
            })?;

        Ok(Self {
            file,
            path: path.to_path_buf(),
            matched: 0,
        })
    }

    /// Appends one batch of matched URLs and fsyncs before returning
    ///
    /// An empty batch is a no-op. On error, the count of URLs already
    /// durably written is logged so nothing discovered is silently lost.
    pub fn append_batch(&mut self, urls: &[String]) -> Result<(), SinkError> {
        if urls.is_empty() {
            return Ok(());
        }

        let mut buf = String::new();
        for url in urls {
            buf.push_str(url);
            buf.push('\n');
        }

        self.file
            .write_all(buf.as_bytes())
            .map_err(|e| self.append_error(e))?;
        self.file.sync_data().map_err(|e| self.append_error(e))?;

        self.matched += urls.len() as u64;
        tracing::debug!("Appended {} URLs to {}", urls.len(), self.path.display());
        Ok(())
    }

    fn append_error(&self, source: std::io::Error) -> SinkError {
        tracing::error!(
            "Write to {} failed; {} URLs were durably written before the failure",
            self.path.display(),
            self.matched
        );
        SinkError::Append {
            path: self.path.clone(),
            source,
        }
    }

    /// Number of URLs durably written so far
    pub fn matched_count(&self) -> u64 {
        self.matched
    }

    /// Path of the result artifact
    pub fn path(&self) -> &Path {
        &self.path
    }
}
