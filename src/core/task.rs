use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{StoreError, TodoError};

/// Opaque task identity. Fresh ids are UUID v4 strings; ids loaded from
/// older data can be any non-empty string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(String);

impl TaskId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for TaskId {
    type Error = StoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if value.trim().is_empty() {
            return Err(StoreError::Malformed("empty task id".into()));
        }
        Ok(Self(value))
    }
}

/// Trim a raw title, rejecting input that is empty or whitespace only.
pub fn normalize_title(raw: &str) -> Result<String, TodoError> {
    let title = raw.trim();
    if title.is_empty() {
        return Err(TodoError::EmptyTitle);
    }
    Ok(title.to_string())
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "StoredTask")]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
    /// Last completion toggle; absent in data written before it existed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Task {
    /// Build a pending task. `title` must already be normalized.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: TaskId::generate(),
            title: title.into(),
            completed: false,
            created_at: Utc::now(),
            updated_at: None,
        }
    }

    pub fn toggle(&mut self) {
        self.completed = !self.completed;
        self.updated_at = Some(Utc::now());
    }
}

/// Wire shape of a persisted task. Everything loaded goes through
/// `TryFrom<StoredTask>` so malformed records never reach the list.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredTask {
    id: String,
    title: String,
    completed: bool,
    created_at: DateTime<Utc>,
    #[serde(default)]
    updated_at: Option<DateTime<Utc>>,
}

impl TryFrom<StoredTask> for Task {
    type Error = StoreError;

    fn try_from(raw: StoredTask) -> Result<Self, Self::Error> {
        let id = TaskId::try_from(raw.id)?;
        let title = normalize_title(&raw.title)
            .map_err(|_| StoreError::Malformed(format!("task {} has an empty title", id)))?;
        Ok(Self {
            id,
            title,
            completed: raw.completed,
            created_at: raw.created_at,
            updated_at: raw.updated_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_task_is_pending() {
        let task = Task::new("Buy milk");
        assert_eq!(task.title, "Buy milk");
        assert!(!task.completed);
        assert!(task.updated_at.is_none());
        assert!(!task.id.as_str().is_empty());
    }

    #[test]
    fn generated_ids_differ() {
        let a = Task::new("a");
        let b = Task::new("b");
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn toggle_flips_and_stamps() {
        let mut task = Task::new("Walk dog");
        task.toggle();
        assert!(task.completed);
        assert!(task.updated_at.is_some());
        task.toggle();
        assert!(!task.completed);
    }

    #[test]
    fn normalize_trims() {
        assert_eq!(normalize_title("  Buy milk \n").unwrap(), "Buy milk");
    }

    #[test]
    fn normalize_rejects_blank() {
        assert_eq!(normalize_title(""), Err(TodoError::EmptyTitle));
        assert_eq!(normalize_title("   \t"), Err(TodoError::EmptyTitle));
    }

    #[test]
    fn serializes_camel_case() {
        let task = Task::new("Pay rent");
        let json = serde_json::to_value(&task).unwrap();
        assert_eq!(json["title"], "Pay rent");
        assert_eq!(json["completed"], false);
        assert!(json["createdAt"].is_string());
        assert!(json.get("updatedAt").is_none());
    }

    #[test]
    fn parses_javascript_record() {
        let json = r#"{"id":"1718000000000","title":"Buy milk","completed":true,"createdAt":"2024-06-10T06:13:20.000Z"}"#;
        let task: Task = serde_json::from_str(json).unwrap();
        assert_eq!(task.id.as_str(), "1718000000000");
        assert!(task.completed);
        assert_eq!(task.created_at.timestamp_millis(), 1_718_000_000_000);
        assert!(task.updated_at.is_none());
    }

    #[test]
    fn rejects_blank_title_and_id() {
        let blank_title = r#"{"id":"1","title":"   ","completed":false,"createdAt":"2024-06-10T06:13:20Z"}"#;
        assert!(serde_json::from_str::<Task>(blank_title).is_err());

        let blank_id = r#"{"id":"","title":"x","completed":false,"createdAt":"2024-06-10T06:13:20Z"}"#;
        assert!(serde_json::from_str::<Task>(blank_id).is_err());
    }

    #[test]
    fn rejects_unparseable_timestamp() {
        let json = r#"{"id":"1","title":"x","completed":false,"createdAt":"Mon Jun 10 2024"}"#;
        assert!(serde_json::from_str::<Task>(json).is_err());
    }

    #[test]
    fn rejects_wrong_field_type() {
        let json = r#"{"id":"1","title":"x","completed":"yes","createdAt":"2024-06-10T06:13:20Z"}"#;
        assert!(serde_json::from_str::<Task>(json).is_err());
    }
}
