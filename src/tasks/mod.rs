//! Background Tasks Module
//!
//! Contains background tasks that run for the lifetime of the service.
//!
//! # Tasks
//! - Scheduler clock: fires the shared tick and runs every due backup

mod ticker;

pub use ticker::{run_due_tasks, spawn_scheduler_task};
