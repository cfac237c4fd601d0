//! Request DTOs for the backup scheduler API
//!
//! Defines the structure of incoming HTTP request bodies.

use std::path::Path;

use serde::Deserialize;

use crate::scheduler::{BackupTask, Frequency};

/// Request body for creating or replacing a task
/// (POST /tasks, PUT /tasks/:id)
///
/// # Fields
/// - `source`: absolute path of the file or directory to back up
/// - `destination`: absolute path of the directory receiving the copies
/// - `frequency`: one of `Minute`, `Hour`, `Daily`, `Weekly`, `Monthly`
#[derive(Debug, Clone, Deserialize)]
pub struct TaskRequest {
    /// The backup source path
    pub source: String,
    /// The destination directory
    pub destination: String,
    /// How often the task runs
    pub frequency: Frequency,
}

impl TaskRequest {
    /// Validates the request data
    ///
    /// Paths must be non-empty and absolute; whether the source exists is
    /// checked at execution time, not here.
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        if self.source.is_empty() {
            return Some("Source cannot be empty".to_string());
        }
        if !Path::new(&self.source).is_absolute() {
            return Some("Source must be an absolute path".to_string());
        }
        if self.destination.is_empty() {
            return Some("Destination cannot be empty".to_string());
        }
        if !Path::new(&self.destination).is_absolute() {
            return Some("Destination must be an absolute path".to_string());
        }
        None
    }

    /// Builds a task with a fresh id from this request.
    pub fn into_task(self) -> BackupTask {
        BackupTask::new(self.source, self.destination, self.frequency)
    }
}
