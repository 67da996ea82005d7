use thiserror::Error;

/// Rejected input on task creation. Surfaced to the user at the boundary;
/// a rejected task never reaches the store.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("description must not be empty")]
    EmptyDescription,
    #[error("due date must not be empty")]
    EmptyDueDate,
}
