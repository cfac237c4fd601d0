//! Backup Scheduler - a lightweight scheduled backup service
//!
//! Periodically copies configured files or directories to timestamped
//! destinations on a single shared minute-level clock.

mod api;
mod config;
mod error;
mod models;
mod scheduler;
mod tasks;

use std::net::SocketAddr;

use anyhow::Context;
use tokio::signal;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api::{create_router, AppState};
use config::Config;
use tasks::spawn_scheduler_task;

/// Main entry point for the backup scheduler service.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging
/// 2. Load configuration from environment variables
/// 3. Restore the persisted task list and open the activity log
/// 4. Start the background scheduler clock
/// 5. Create Axum router with all endpoints
/// 6. Start HTTP server on configured port
/// 7. Handle graceful shutdown on SIGINT/SIGTERM
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing subscriber with env filter
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "backup_scheduler=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Backup Scheduler");

    // Load configuration from environment variables
    let config = Config::from_env();
    info!(
        "Configuration loaded: tick_interval={}s, port={}, tasks_file={}, activity_log={}",
        config.tick_interval,
        config.server_port,
        config.tasks_file.display(),
        config.activity_log_file.display()
    );

    // Restore the task list and open the activity log
    let state = AppState::from_config(&config);
    info!(
        "Task store initialized with {} task(s)",
        state.store.read().await.len()
    );

    // Start the scheduler clock
    let scheduler_handle = spawn_scheduler_task(
        state.store.clone(),
        state.activity.clone(),
        config.tick_interval,
    );
    info!("Scheduler clock started");

    // Create router with all endpoints
    let app = create_router(state);

    // Bind to configured port
    let addr = SocketAddr::from(([0, 0, 0, 0], config.server_port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("bind {}", addr))?;
    info!("Server listening on http://{}", addr);

    // Start server with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(scheduler_handle))
        .await
        .context("serve")?;

    info!("Server shutdown complete");
    Ok(())
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM).
///
/// On shutdown signal, aborts the scheduler clock and allows graceful shutdown.
async fn shutdown_signal(scheduler_handle: tokio::task::JoinHandle<()>) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating shutdown...");
        }
        _ = terminate => {
            info!("Received SIGTERM, initiating shutdown...");
        }
    }

    // Abort the scheduler clock; an in-flight copy is not cancelled
    scheduler_handle.abort();
    warn!("Scheduler clock stopped");
}
