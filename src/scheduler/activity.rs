//! Activity Log Module
//!
//! Append-only record of backup attempts, kept in memory for the API and
//! streamed one line per record to a log file.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;
use serde::Serialize;

// == Outcome ==
/// Result of a single backup attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "reason")]
pub enum Outcome {
    /// The copy finished and the timestamped destination exists
    Success,
    /// The copy did not complete; carries the error message
    Failure(String),
}

// == Activity Record ==
/// One logged outcome of a single task execution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActivityRecord {
    /// Tick timestamp the attempt ran at
    pub timestamp: NaiveDateTime,
    /// Source path of the task
    pub source: String,
    /// Resolved timestamped path on success, the configured destination
    /// directory on failure
    pub destination: String,
    /// Whether the copy completed
    pub outcome: Outcome,
}

impl ActivityRecord {
    /// Creates a success record with the resolved destination path.
    pub fn success(timestamp: NaiveDateTime, source: &Path, destination: &Path) -> Self {
        Self {
            timestamp,
            source: source.display().to_string(),
            destination: destination.display().to_string(),
            outcome: Outcome::Success,
        }
    }

    /// Creates a failure record carrying the error message.
    pub fn failure(
        timestamp: NaiveDateTime,
        source: &Path,
        destination: &Path,
        reason: impl Into<String>,
    ) -> Self {
        Self {
            timestamp,
            source: source.display().to_string(),
            destination: destination.display().to_string(),
            outcome: Outcome::Failure(reason.into()),
        }
    }

    /// Returns true if the attempt succeeded.
    pub fn is_success(&self) -> bool {
        self.outcome == Outcome::Success
    }

    // == Log Line ==
    /// Renders the log file line for this record.
    pub fn log_line(&self) -> String {
        let stamp = self.timestamp.format("%Y-%m-%d %H:%M:%S");
        match &self.outcome {
            Outcome::Success => format!(
                "{} - Backup completed: {} -> {}",
                stamp, self.source, self.destination
            ),
            Outcome::Failure(reason) => format!(
                "{} - Backup failed: {} -> {}. Error: {}",
                stamp, self.source, self.destination, reason
            ),
        }
    }
}

// == Activity Log ==
/// Append-only sequence of backup attempt records.
#[derive(Debug)]
pub struct ActivityLog {
    /// Records in append order
    records: Vec<ActivityRecord>,
    /// Log file the rendered lines are appended to, if configured
    path: Option<PathBuf>,
}

impl ActivityLog {
    // == Constructor ==
    /// Creates a log, optionally mirrored to a file.
    pub fn new(path: Option<PathBuf>) -> Self {
        Self {
            records: Vec::new(),
            path,
        }
    }

    // == Record ==
    /// Appends a record.
    ///
    /// The file write is best-effort and never fails observably: a log line
    /// that cannot be written is dropped rather than logged again.
    pub fn record(&mut self, record: ActivityRecord) {
        if let Some(path) = &self.path {
            let _ = append_line(path, &record.log_line());
        }
        self.records.push(record);
    }

    // == Accessors ==
    /// Returns the records in append order.
    pub fn records(&self) -> &[ActivityRecord] {
        &self.records
    }

    /// Returns the current number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if nothing has been recorded yet.
    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

fn append_line(path: &Path, line: &str) -> std::io::Result<()> {
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    writeln!(file, "{}", line)
}
