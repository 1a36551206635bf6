//! Errors returned by the registry implementations.

use thiserror::Error;

use crate::persistent::errors::StorageError;

/// Errors that can occur when accessing the registry.
#[derive(Debug, Error)]
pub enum DbError {
    /// The persistent storage layer failed.
    #[error("sqlite: {0}")]
    Storage(#[from] StorageError),
}

/// Result type for registry operations.
pub type DbResult<T> = Result<T, DbError>;
