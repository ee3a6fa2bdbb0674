use crate::core::task::{Task, TaskId};

#[derive(Debug, Clone)]
pub enum Message {
    // Input
    InputChanged(String),
    Submit,
    DismissValidation,

    // Task actions
    ToggleTask(TaskId),
    ConfirmDeleteTask(TaskId),
    CancelDeleteTask,
    DeleteTask(TaskId),

    // Persistence
    Refresh,
    TasksLoaded(Option<Vec<Task>>),
    RefreshCompleted(Option<Vec<Task>>),
    TasksSaved(Result<(), String>),
}
