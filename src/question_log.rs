//! Append-only question log
//!
//! Every accepted question becomes one plain-text record:
//!
//! ```text
//! [2026/02/22 HKT 13:30]"what do you build?"
//! --------------------------------------
//! ```
//!
//! Records are never rewritten or deleted. Concurrent requests may
//! interleave records, but each record goes out in a single append.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tokio::io::AsyncWriteExt;

/// Timestamps are always rendered in Hong Kong time
pub const LOG_TIMEZONE: Tz = chrono_tz::Asia::Hong_Kong;
pub const LOG_TIMEZONE_LABEL: &str = "HKT";
pub const RECORD_SEPARATOR: &str = "--------------------------------------";

/// I/O failure while appending a record
#[derive(Debug, Error)]
#[error("failed to append to {}: {source}", .path.display())]
pub struct LogError {
    pub path: PathBuf,
    #[source]
    pub source: std::io::Error,
}

/// Format an instant as `YYYY/MM/DD HKT HH:MM`
#[must_use]
pub fn format_timestamp(at: DateTime<Utc>) -> String {
    let local = at.with_timezone(&LOG_TIMEZONE);
    format!(
        "{} {LOG_TIMEZONE_LABEL} {}",
        local.format("%Y/%m/%d"),
        local.format("%H:%M")
    )
}

/// Build the full record for a question, separator line included
#[must_use]
pub fn format_record(question: &str, at: DateTime<Utc>) -> String {
    format!(
        "[{}]\"{}\"\n{RECORD_SEPARATOR}\n",
        format_timestamp(at),
        question.trim()
    )
}

/// Destination for question records
#[async_trait]
pub trait QuestionSink: Send + Sync {
    /// Append one pre-formatted record
    ///
    /// # Errors
    ///
    /// Any I/O failure, tagged with the log's location.
    async fn append(&self, record: &str) -> Result<(), LogError>;
}

/// Question log backed by a file opened in append mode per write
#[derive(Debug, Clone)]
pub struct FileQuestionLog {
    path: PathBuf,
}

impl FileQuestionLog {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn error(&self, source: std::io::Error) -> LogError {
        LogError {
            path: self.path.clone(),
            source,
        }
    }
}

#[async_trait]
impl QuestionSink for FileQuestionLog {
    async fn append(&self, record: &str) -> Result<(), LogError> {
        let mut file = tokio::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await
            .map_err(|e| self.error(e))?;

        file.write_all(record.as_bytes())
            .await
            .map_err(|e| self.error(e))?;
        file.flush().await.map_err(|e| self.error(e))
    }
}
