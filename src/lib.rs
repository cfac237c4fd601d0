//! Backup Scheduler - a lightweight scheduled backup service
//!
//! Periodically copies configured files or directories to timestamped
//! destinations on a single shared minute-level clock.

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod scheduler;
pub mod tasks;

pub use api::AppState;
pub use config::Config;
pub use tasks::{run_due_tasks, spawn_scheduler_task};
