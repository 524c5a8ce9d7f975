//! Domain-level error types.

use thiserror::Error;

/// Domain errors - what the post store reports to its callers.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Entity not found: {entity_type} with id {id}")]
    NotFound { entity_type: &'static str, id: i64 },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Storage failure: {0}")]
    Storage(#[from] RepoError),
}

impl DomainError {
    pub fn post_not_found(id: i64) -> Self {
        DomainError::NotFound {
            entity_type: "Post",
            id,
        }
    }
}

/// Repository-level errors.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Database connection failed: {0}")]
    Connection(String),

    #[error("Query execution failed: {0}")]
    Query(String),

    #[error("Constraint violation: {0}")]
    Constraint(String),
}
