//! API Module
//!
//! HTTP handlers and routing for the backup scheduler REST API.
//!
//! # Endpoints
//! - `GET /tasks` - List scheduled tasks
//! - `POST /tasks` - Schedule a new task
//! - `PUT /tasks/:id` - Replace a task
//! - `DELETE /tasks/:id` - Remove a task
//! - `GET /activity` - List recorded backup attempts
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
