//! Storage-level error types.

use thiserror::Error;

/// Repository-level errors.
///
/// The message carried by each variant is driver text: fine for logs, never for clients.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Database connection failed: {0}")]
    Connection(String),

    #[error("Query execution failed: {0}")]
    Query(String),

    #[error("Constraint violation: {0}")]
    Constraint(String),
}
