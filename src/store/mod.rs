pub mod file;
pub mod memory;

use std::collections::HashSet;
use std::sync::Arc;

use async_trait::async_trait;

use crate::core::task::Task;
use crate::error::StoreError;

pub use file::FileStore;
pub use memory::MemoryStore;

/// Slot holding the serialized task list.
pub const TASKS_KEY: &str = "tasks";

/// Opaque async string key/value storage.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    async fn set(&self, key: &str, value: String) -> Result<(), StoreError>;
}

/// Serialize a task list to the persisted JSON form.
pub fn encode_tasks(tasks: &[Task]) -> Result<String, StoreError> {
    Ok(serde_json::to_string(tasks)?)
}

/// Decode a persisted list. Any malformed record, or a repeated id, rejects
/// the whole list.
pub fn decode_tasks(raw: &str) -> Result<Vec<Task>, StoreError> {
    let tasks: Vec<Task> = serde_json::from_str(raw)?;
    let mut seen = HashSet::with_capacity(tasks.len());
    for task in &tasks {
        if !seen.insert(&task.id) {
            return Err(StoreError::Malformed(format!("duplicate task id {}", task.id)));
        }
    }
    Ok(tasks)
}

/// Task list persistence over a [`KeyValueStore`]. Failures are logged
/// here and never reach the caller as errors it must handle.
pub struct TaskStore<S: ?Sized> {
    backend: Arc<S>,
    key: String,
}

impl<S: ?Sized> Clone for TaskStore<S> {
    fn clone(&self) -> Self {
        Self {
            backend: Arc::clone(&self.backend),
            key: self.key.clone(),
        }
    }
}

impl<S: KeyValueStore + ?Sized> TaskStore<S> {
    pub fn new(backend: Arc<S>) -> Self {
        Self::with_key(backend, TASKS_KEY)
    }

    pub fn with_key(backend: Arc<S>, key: impl Into<String>) -> Self {
        Self {
            backend,
            key: key.into(),
        }
    }

    pub fn backend(&self) -> &S {
        &self.backend
    }

    /// Load the saved list. Missing, unreadable, or malformed data is `None`.
    pub async fn load(&self) -> Option<Vec<Task>> {
        let raw = match self.backend.get(&self.key).await {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                log::error!("Error loading tasks: {}", e);
                return None;
            }
        };
        match decode_tasks(&raw) {
            Ok(tasks) => Some(tasks),
            Err(e) => {
                log::error!("Error loading tasks: {}", e);
                None
            }
        }
    }

    /// Write the full list. The error is logged and returned for diagnostics only.
    pub async fn save(&self, tasks: &[Task]) -> Result<(), StoreError> {
        let result = match encode_tasks(tasks) {
            Ok(json) => self.backend.set(&self.key, json).await,
            Err(e) => Err(e),
        };
        match &result {
            Ok(()) => log::debug!("Saved {} tasks", tasks.len()),
            Err(e) => log::error!("Error saving tasks: {}", e),
        }
        result
    }
}
