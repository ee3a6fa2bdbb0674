use thiserror::Error;

/// Rejected user input. Surfaced to the user, never changes state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TodoError {
    #[error("Please enter a task title")]
    EmptyTitle,
}

/// Persistence failures. Logged by `TaskStore` and never shown to the user.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Malformed task data: {0}")]
    Malformed(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
