//! API Routes
//!
//! Configures the Axum router with all backup scheduler endpoints.

use axum::{
    routing::{get, put},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    activity_handler, add_task_handler, delete_task_handler, health_handler, list_tasks_handler,
    update_task_handler, AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `GET /tasks` - List scheduled tasks in display order
/// - `POST /tasks` - Schedule a new task
/// - `PUT /tasks/:id` - Replace the task with the given id
/// - `DELETE /tasks/:id` - Remove the task with the given id
/// - `GET /activity` - List recorded backup attempts
/// - `GET /health` - Health check endpoint
///
/// # Middleware
/// - CORS: Allows any origin (configurable for production)
/// - Tracing: Logs all requests for debugging
pub fn create_router(state: AppState) -> Router {
    // Configure CORS middleware
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build router with all endpoints
    Router::new()
        .route("/tasks", get(list_tasks_handler).post(add_task_handler))
        .route(
            "/tasks/:id",
            put(update_task_handler).delete(delete_task_handler),
        )
        .route("/activity", get(activity_handler))
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
