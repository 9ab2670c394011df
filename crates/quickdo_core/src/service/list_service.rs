//! Task list use-case service.
//!
//! # Responsibility
//! - Provide ordered read, append and first-match removal over the slot.
//!
//! # Invariants
//! - Every mutation rewrites the full stored sequence through `save_all`.
//! - Insertion order equals storage order equals display order.

use crate::model::task::Task;
use crate::repo::slot_repo::{RepoResult, SlotRepository};
use log::warn;

/// Use-case facade over a slot repository.
pub struct TaskListService<R: SlotRepository> {
    repo: R,
}

impl<R: SlotRepository> TaskListService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Loads the stored sequence as validated tasks.
    ///
    /// Stored entries that fail task validation are dropped with a recovery
    /// warning instead of failing the whole load.
    pub fn tasks(&self) -> RepoResult<Vec<Task>> {
        let stored = self.repo.load_all()?;
        let mut tasks = Vec::with_capacity(stored.len());
        for text in stored {
            match Task::parse(&text) {
                Ok(task) => tasks.push(task),
                Err(err) => warn!(
                    "event=task_load module=service status=recovered error_code=invalid_entry error={err}"
                ),
            }
        }
        Ok(tasks)
    }

    /// Appends one task to the stored sequence.
    pub fn add_task(&self, task: &Task) -> RepoResult<()> {
        let mut stored = self.repo.load_all()?;
        stored.push(task.text().to_string());
        self.repo.save_all(&stored)
    }

    /// Removes the first stored value equal to `text`.
    ///
    /// Returns whether a value was removed. A missing value is not an
    /// error: the slot is shared last-write-wins state across connections.
    pub fn remove_task(&self, text: &str) -> RepoResult<bool> {
        let mut stored = self.repo.load_all()?;
        let Some(position) = stored.iter().position(|stored_text| stored_text == text) else {
            return Ok(false);
        };
        stored.remove(position);
        self.repo.save_all(&stored)?;
        Ok(true)
    }
}
