//! Single owner of the task list and its transient UI state.
//!
//! The controller never touches storage. Every mutation that must be
//! persisted hands back a [`Snapshot`] of the whole list, which the caller
//! passes to `TaskStore::save`. Loads and saves are not cancelled or
//! coalesced: whichever load completes last decides the in-memory list, and
//! whichever save completes last decides what is on disk.

use super::task::{Task, TaskId, normalize_title};
use super::task_list::{TaskList, TaskViews};
use crate::error::TodoError;

/// Full copy of the list taken right after a mutation.
#[must_use = "a snapshot must be handed to TaskStore::save"]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot(Vec<Task>);

impl Snapshot {
    pub fn tasks(&self) -> &[Task] {
        &self.0
    }
}

#[derive(Debug, Default)]
pub struct TaskListController {
    tasks: TaskList,
    input: String,
    refreshing: bool,
    pending_delete: Option<TaskId>,
}

impl TaskListController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply the startup load. Absent data leaves the list untouched.
    pub fn initialize(&mut self, loaded: Option<Vec<Task>>) {
        match loaded {
            Some(tasks) => {
                log::info!("Loaded {} tasks", tasks.len());
                self.tasks.replace(tasks);
                if let Some(id) = &self.pending_delete {
                    if !self.tasks.contains(id) {
                        self.pending_delete = None;
                    }
                }
            }
            None => log::debug!("No saved tasks, keeping current list"),
        }
    }

    pub fn tasks(&self) -> &[Task] {
        self.tasks.as_slice()
    }

    pub fn views(&self) -> TaskViews<'_> {
        self.tasks.views()
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, value: String) {
        self.input = value;
    }

    pub fn add_task(&mut self, raw: &str) -> Result<Snapshot, TodoError> {
        let title = normalize_title(raw)?;
        let task = Task::new(title);
        log::debug!("Adding task {}", task.id);
        self.tasks.prepend(task);
        Ok(self.snapshot())
    }

    /// Add a task from the input buffer, clearing it on success.
    pub fn submit_input(&mut self) -> Result<Snapshot, TodoError> {
        let input = std::mem::take(&mut self.input);
        match self.add_task(&input) {
            Ok(snapshot) => Ok(snapshot),
            Err(e) => {
                self.input = input;
                Err(e)
            }
        }
    }

    pub fn toggle_task(&mut self, id: &TaskId) -> Option<Snapshot> {
        if self.tasks.toggle(id) {
            Some(self.snapshot())
        } else {
            log::debug!("Toggle ignored, no task {}", id);
            None
        }
    }

    /// Ask for confirmation before deleting `id`.
    pub fn request_delete(&mut self, id: &TaskId) {
        if self.tasks.contains(id) {
            self.pending_delete = Some(id.clone());
        }
    }

    pub fn pending_delete(&self) -> Option<&TaskId> {
        self.pending_delete.as_ref()
    }

    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    /// Delete `id` if it is the task awaiting confirmation.
    pub fn confirm_delete(&mut self, id: &TaskId) -> Option<Snapshot> {
        if self.pending_delete.as_ref() != Some(id) {
            return None;
        }
        self.pending_delete = None;
        let removed = self.tasks.remove(id)?;
        log::debug!("Deleted task {}", removed.id);
        Some(self.snapshot())
    }

    pub fn begin_refresh(&mut self) {
        self.refreshing = true;
    }

    /// Apply a refresh load. The flag clears whether or not data came back.
    pub fn finish_refresh(&mut self, loaded: Option<Vec<Task>>) {
        self.initialize(loaded);
        self.refreshing = false;
    }

    pub fn is_refreshing(&self) -> bool {
        self.refreshing
    }

    fn snapshot(&self) -> Snapshot {
        Snapshot(self.tasks.as_slice().to_vec())
    }
}
