//! Scheduler Clock Task
//!
//! Background task that fires the single shared tick and runs every due
//! backup against one captured timestamp.

use std::sync::Arc;
use std::time::Duration;

use chrono::{Local, NaiveDateTime};
use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::scheduler::{run_backup, ActivityLog, Outcome, TaskStore};

// == Run Due Tasks ==
/// Evaluates every task against a single timestamp and executes the due
/// ones in list order.
///
/// The task list is snapshotted under a read lock and the lock released
/// before any copy starts, so caller mutations are never blocked behind a
/// slow backup. Each outcome is appended to the activity log; a failing
/// task is recorded and the remaining due tasks still run.
///
/// Separate from the timer wiring so tests can drive ticks with a fixed
/// timestamp. Returns the number of tasks executed.
pub async fn run_due_tasks(
    store: &Arc<RwLock<TaskStore>>,
    activity: &Arc<RwLock<ActivityLog>>,
    now: NaiveDateTime,
) -> usize {
    let due: Vec<_> = {
        let store = store.read().await;
        store
            .tasks()
            .iter()
            .filter(|task| task.frequency.is_due(now))
            .cloned()
            .collect()
    };

    let mut executed = 0;
    for task in &due {
        let record = run_backup(task, now);
        match &record.outcome {
            Outcome::Success => {
                info!("Backup completed: {} -> {}", record.source, record.destination);
            }
            Outcome::Failure(reason) => {
                warn!(
                    "Backup failed: {} -> {}: {}",
                    record.source, record.destination, reason
                );
            }
        }
        activity.write().await.record(record);
        executed += 1;
    }

    executed
}

// == Spawn Scheduler Task ==
/// Spawns the single recurring scheduler clock.
///
/// Each fire captures "now" once, judges every task against that one
/// instant, and runs the due ones to completion before sleeping again -
/// a tick never overlaps the previous one, so a long copy delays the next
/// tick rather than racing it.
///
/// # Arguments
/// * `store` - shared task store, read-only from here
/// * `activity` - shared activity log receiving one record per execution
/// * `tick_interval_secs` - seconds between ticks
///
/// # Returns
/// A JoinHandle for the spawned task, which can be used to abort the clock
/// during graceful shutdown.
pub fn spawn_scheduler_task(
    store: Arc<RwLock<TaskStore>>,
    activity: Arc<RwLock<ActivityLog>>,
    tick_interval_secs: u64,
) -> JoinHandle<()> {
    let interval = Duration::from_secs(tick_interval_secs);

    tokio::spawn(async move {
        info!(
            "Starting scheduler clock with a tick every {} seconds",
            tick_interval_secs
        );

        loop {
            tokio::time::sleep(interval).await;

            let now = Local::now().naive_local();
            let executed = run_due_tasks(&store, &activity, now).await;

            if executed > 0 {
                info!("Tick executed {} backup task(s)", executed);
            } else {
                debug!("Tick found no tasks due");
            }
        }
    })
}
