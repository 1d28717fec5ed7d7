//! Domain errors

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Menu title must not be empty")]
    TitleRequired,

    #[error("Invalid link: {0}")]
    InvalidLink(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Menu item not found: {0}")]
    MenuNotFound(i64),

    #[error("Parent menu item not found: {0}")]
    ParentNotFound(i64),

    #[error("{kind} not found: {id}")]
    LookupNotFound { kind: &'static str, id: i64 },

    #[error("Moving menu item {id} under {parent_id} would create a cycle")]
    CycleDetected { id: i64, parent_id: i64 },

    #[error("Database error: {0}")]
    DatabaseError(String),
}
