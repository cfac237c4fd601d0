//! Configuration Module
//!
//! Handles loading and managing service configuration from environment variables.

use std::env;
use std::path::PathBuf;

/// Service configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Scheduler tick period in seconds
    pub tick_interval: u64,
    /// HTTP server port
    pub server_port: u16,
    /// Path of the persisted task list
    pub tasks_file: PathBuf,
    /// Path of the append-only activity log
    pub activity_log_file: PathBuf,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `TICK_INTERVAL` - Scheduler tick period in seconds (default: 60)
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    /// - `TASKS_FILE` - Task list path (default: backup_tasks.json)
    /// - `ACTIVITY_LOG_FILE` - Activity log path (default: backup_activity.log)
    pub fn from_env() -> Self {
        Self {
            tick_interval: env::var("TICK_INTERVAL")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(60),
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3000),
            tasks_file: env::var("TASKS_FILE")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("backup_tasks.json")),
            activity_log_file: env::var("ACTIVITY_LOG_FILE")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("backup_activity.log")),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tick_interval: 60,
            server_port: 3000,
            tasks_file: PathBuf::from("backup_tasks.json"),
            activity_log_file: PathBuf::from("backup_activity.log"),
        }
    }
}
