//! Backup Task Module
//!
//! Defines the scheduled backup task and the recurrence rule that decides
//! when it runs.

use std::path::PathBuf;

use chrono::{Datelike, NaiveDateTime, Timelike, Weekday};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// == Frequency ==
/// Recurrence rule attached to a backup task.
///
/// A fixed enumeration; there are no cron-like expressions. Serialized as
/// the variant names (`"Minute"`, `"Hour"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Frequency {
    /// Runs on every tick
    Minute,
    /// Runs at the top of each hour
    Hour,
    /// Runs at midnight
    Daily,
    /// Runs at midnight on Mondays
    Weekly,
    /// Runs at midnight on the first of the month
    Monthly,
}

impl Frequency {
    // == Is Due ==
    /// Checks whether a task with this frequency is due at the given instant.
    ///
    /// Stateless: the rule only looks at the minute/hour/weekday/day fields
    /// of `now`, so every task in a tick is judged against the same shared
    /// timestamp. If the clock skips a boundary minute (e.g. process sleep),
    /// that run is missed and never caught up.
    pub fn is_due(&self, now: NaiveDateTime) -> bool {
        match self {
            Frequency::Minute => true,
            Frequency::Hour => now.minute() == 0,
            Frequency::Daily => now.hour() == 0 && now.minute() == 0,
            Frequency::Weekly => {
                now.weekday() == Weekday::Mon && now.hour() == 0 && now.minute() == 0
            }
            Frequency::Monthly => now.day() == 1 && now.hour() == 0 && now.minute() == 0,
        }
    }
}

// == Backup Task ==
/// A scheduled backup: copy `source` into `destination` per `frequency`.
///
/// The id is assigned once at creation and is the handle for update/delete;
/// list position is display order only. The source is not validated against
/// the filesystem here - existence is checked at execution time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackupTask {
    /// Stable identifier assigned at creation
    pub id: Uuid,
    /// Absolute path of the file or directory to back up
    pub source: PathBuf,
    /// Directory that receives the timestamped copies
    pub destination: PathBuf,
    /// How often the task runs
    pub frequency: Frequency,
}

impl BackupTask {
    /// Creates a new task with a fresh id.
    pub fn new(
        source: impl Into<PathBuf>,
        destination: impl Into<PathBuf>,
        frequency: Frequency,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            source: source.into(),
            destination: destination.into(),
            frequency,
        }
    }
}
