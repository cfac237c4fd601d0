//! Response DTOs for the backup scheduler API
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::Serialize;
use uuid::Uuid;

use crate::scheduler::{ActivityRecord, BackupTask};

/// A single task as exposed by the API (GET /tasks, POST /tasks)
#[derive(Debug, Clone, Serialize)]
pub struct TaskResponse {
    /// Stable task identifier
    pub id: Uuid,
    /// The backup source path
    pub source: String,
    /// The destination directory
    pub destination: String,
    /// How often the task runs
    pub frequency: String,
}

impl From<&BackupTask> for TaskResponse {
    fn from(task: &BackupTask) -> Self {
        Self {
            id: task.id,
            source: task.source.display().to_string(),
            destination: task.destination.display().to_string(),
            frequency: format!("{:?}", task.frequency),
        }
    }
}

/// Response body for the task list (GET /tasks)
#[derive(Debug, Clone, Serialize)]
pub struct TaskListResponse {
    /// Tasks in display order
    pub tasks: Vec<TaskResponse>,
    /// Number of tasks
    pub count: usize,
}

impl TaskListResponse {
    /// Creates a list response from the stored tasks.
    pub fn new(tasks: &[BackupTask]) -> Self {
        let tasks: Vec<TaskResponse> = tasks.iter().map(TaskResponse::from).collect();
        let count = tasks.len();
        Self { tasks, count }
    }
}

/// Response body for the DELETE operation (DELETE /tasks/:id)
#[derive(Debug, Clone, Serialize)]
pub struct DeleteResponse {
    /// Success message
    pub message: String,
    /// The id of the deleted task
    pub id: Uuid,
}

impl DeleteResponse {
    /// Creates a new DeleteResponse
    pub fn new(id: Uuid) -> Self {
        Self {
            message: format!("Task '{}' deleted successfully", id),
            id,
        }
    }
}

/// Response body for the activity endpoint (GET /activity)
#[derive(Debug, Clone, Serialize)]
pub struct ActivityResponse {
    /// Backup attempt records in append order
    pub records: Vec<ActivityRecord>,
    /// Number of records
    pub count: usize,
}

impl ActivityResponse {
    /// Creates an activity response from the recorded attempts.
    pub fn new(records: &[ActivityRecord]) -> Self {
        Self {
            records: records.to_vec(),
            count: records.len(),
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}
