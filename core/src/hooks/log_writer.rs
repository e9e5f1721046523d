//! Append-only JSONL log of hook run records.

use std::path::{Path, PathBuf};

use thiserror::Error;
use tokio::fs::{create_dir_all, OpenOptions};
use tokio::io::AsyncWriteExt;

use super::record::HookRunRecord;

/// Writes one JSON line per hook run to an append-only log file.
#[derive(Debug, Clone)]
pub struct HookLogWriter {
    path: PathBuf,
}

impl HookLogWriter {
    /// Create a new writer that appends to the provided path.
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Absolute path to the JSONL log file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append the given record as a JSON line, creating parent directories
    /// and the log file if necessary.
    pub async fn append(&self, record: &HookRunRecord) -> Result<(), HookLogWriterError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                create_dir_all(parent).await?;
            }
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await?;

        let line = serde_json::to_string(record)?;
        file.write_all(line.as_bytes()).await?;
        file.write_all(b"\n").await?;
        file.flush().await?;
        Ok(())
    }
}

/// Errors produced while writing hook run logs.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum HookLogWriterError {
    #[error("failed to serialize hook run record: {0}")]
    Serialize(String),
    #[error("failed to write hook run log: {0}")]
    Io(String),
}

impl From<serde_json::Error> for HookLogWriterError {
    fn from(err: serde_json::Error) -> Self {
        HookLogWriterError::Serialize(err.to_string())
    }
}

impl From<std::io::Error> for HookLogWriterError {
    fn from(err: std::io::Error) -> Self {
        HookLogWriterError::Io(err.to_string())
    }
}
