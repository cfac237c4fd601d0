//! Task Store Module
//!
//! Owns the ordered list of backup tasks and mirrors every mutation to the
//! JSON file the list is restored from at startup.

use std::fs;
use std::io;
use std::path::PathBuf;

use tracing::warn;
use uuid::Uuid;

use crate::error::{Result, SchedulerError};
use crate::scheduler::BackupTask;

// == Task Store ==
/// Ordered collection of backup tasks with a persisted mirror on disk.
///
/// The in-memory list is authoritative for the running process: a mutation
/// that cannot be persisted still takes effect and is only reported as a
/// warning.
#[derive(Debug)]
pub struct TaskStore {
    /// Tasks in insertion order (also the display order)
    tasks: Vec<BackupTask>,
    /// Path of the persisted task list
    path: PathBuf,
}

impl TaskStore {
    // == Constructor ==
    /// Creates an empty store persisting to the given path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            tasks: Vec::new(),
            path: path.into(),
        }
    }

    // == Load ==
    /// Reads the persisted task list in full.
    ///
    /// A file that does not exist yet yields an empty store; an existing
    /// file that cannot be read or parsed is an error for the caller to
    /// report.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let tasks = if path.exists() {
            let contents = fs::read_to_string(&path).map_err(|e| {
                SchedulerError::Persistence(format!("read {}: {}", path.display(), e))
            })?;
            serde_json::from_str(&contents).map_err(|e| {
                SchedulerError::Persistence(format!("parse {}: {}", path.display(), e))
            })?
        } else {
            Vec::new()
        };

        Ok(Self { tasks, path })
    }

    // == Add ==
    /// Appends a task to the end of the list.
    ///
    /// Never fails on well-formed input; duplicate source/destination pairs
    /// are permitted.
    pub fn add(&mut self, task: BackupTask) {
        self.tasks.push(task);
        self.persist();
    }

    // == Update ==
    /// Replaces the task with the given id in place.
    ///
    /// The record keeps its id and its position in the list; only the task
    /// fields are swapped. Fails without mutating when no task has the id.
    pub fn update(&mut self, id: Uuid, task: BackupTask) -> Result<()> {
        match self.tasks.iter_mut().find(|t| t.id == id) {
            Some(slot) => {
                *slot = BackupTask { id, ..task };
                self.persist();
                Ok(())
            }
            None => Err(SchedulerError::TaskNotFound(id)),
        }
    }

    // == Remove ==
    /// Removes the task with the given id.
    ///
    /// Fails without mutating when no task has the id.
    pub fn remove(&mut self, id: Uuid) -> Result<BackupTask> {
        match self.tasks.iter().position(|t| t.id == id) {
            Some(pos) => {
                let task = self.tasks.remove(pos);
                self.persist();
                Ok(task)
            }
            None => Err(SchedulerError::TaskNotFound(id)),
        }
    }

    // == Accessors ==
    /// Looks up a task by id.
    pub fn get(&self, id: Uuid) -> Option<&BackupTask> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Returns the tasks in insertion order.
    pub fn tasks(&self) -> &[BackupTask] {
        &self.tasks
    }

    /// Returns the current number of tasks.
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Returns true if no tasks are scheduled.
    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    // == Persist ==
    /// Rewrites the task file in full after a mutation.
    ///
    /// Best-effort: a failed write is reported as a warning and the
    /// in-memory list stays authoritative.
    fn persist(&self) {
        if let Err(e) = self.write_to_disk() {
            warn!("Failed to persist task list to {}: {}", self.path.display(), e);
        }
    }

    /// Writes the list to a temp path and renames it over the task file, so
    /// a crash mid-write leaves the previous file intact.
    fn write_to_disk(&self) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let contents = serde_json::to_string_pretty(&self.tasks)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, contents)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}
