//! API Handlers
//!
//! HTTP request handlers for each backup scheduler endpoint.

use std::sync::Arc;
use tokio::sync::RwLock;

use axum::{
    extract::{Path, State},
    Json,
};
use tracing::warn;
use uuid::Uuid;

use crate::error::{Result, SchedulerError};
use crate::models::{
    ActivityResponse, DeleteResponse, HealthResponse, TaskListResponse, TaskRequest, TaskResponse,
};
use crate::scheduler::{ActivityLog, TaskStore};

/// Application state shared across all handlers and the scheduler clock.
///
/// The task store and activity log are wrapped in Arc<RwLock<>>: the API
/// mutates the store while the clock reads it, and both append to the log.
#[derive(Clone)]
pub struct AppState {
    /// Thread-safe task store
    pub store: Arc<RwLock<TaskStore>>,
    /// Thread-safe activity log
    pub activity: Arc<RwLock<ActivityLog>>,
}

impl AppState {
    /// Creates a new AppState from a store and an activity log.
    pub fn new(store: TaskStore, activity: ActivityLog) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
            activity: Arc::new(RwLock::new(activity)),
        }
    }

    /// Creates a new AppState from configuration.
    ///
    /// Restores the persisted task list; a list that cannot be read or
    /// parsed is reported and the service starts with an empty one rather
    /// than refusing to boot.
    pub fn from_config(config: &crate::config::Config) -> Self {
        let store = TaskStore::load(&config.tasks_file).unwrap_or_else(|e| {
            warn!("Failed to restore task list: {}; starting empty", e);
            TaskStore::new(&config.tasks_file)
        });
        let activity = ActivityLog::new(Some(config.activity_log_file.clone()));
        Self::new(store, activity)
    }
}

/// Handler for GET /tasks
///
/// Returns the scheduled tasks in display order.
pub async fn list_tasks_handler(State(state): State<AppState>) -> Json<TaskListResponse> {
    let store = state.store.read().await;
    Json(TaskListResponse::new(store.tasks()))
}

/// Handler for POST /tasks
///
/// Schedules a new backup task and returns it with its assigned id.
pub async fn add_task_handler(
    State(state): State<AppState>,
    Json(req): Json<TaskRequest>,
) -> Result<Json<TaskResponse>> {
    // Validate request
    if let Some(error_msg) = req.validate() {
        return Err(SchedulerError::InvalidRequest(error_msg));
    }

    let task = req.into_task();
    let response = TaskResponse::from(&task);

    // Acquire write lock and append the task
    let mut store = state.store.write().await;
    store.add(task);

    Ok(Json(response))
}

/// Handler for PUT /tasks/:id
///
/// Replaces the task with the given id; the id and list position survive.
pub async fn update_task_handler(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<TaskRequest>,
) -> Result<Json<TaskResponse>> {
    // Validate request
    if let Some(error_msg) = req.validate() {
        return Err(SchedulerError::InvalidRequest(error_msg));
    }

    // Acquire write lock and replace the task
    let mut store = state.store.write().await;
    store.update(id, req.into_task())?;

    let task = store.get(id).ok_or_else(|| {
        SchedulerError::Internal(format!("updated task {} missing from store", id))
    })?;
    Ok(Json(TaskResponse::from(task)))
}

/// Handler for DELETE /tasks/:id
///
/// Removes the task with the given id.
pub async fn delete_task_handler(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<DeleteResponse>> {
    // Acquire write lock
    let mut store = state.store.write().await;
    store.remove(id)?;

    Ok(Json(DeleteResponse::new(id)))
}

/// Handler for GET /activity
///
/// Returns the recorded backup attempts in append order.
pub async fn activity_handler(State(state): State<AppState>) -> Json<ActivityResponse> {
    let activity = state.activity.read().await;
    Json(ActivityResponse::new(activity.records()))
}

/// Handler for GET /health
///
/// Returns health status of the service.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
