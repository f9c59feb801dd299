//! Store boundary errors.

use pocketbook_shared::AppError;
use thiserror::Error;

/// Failure reported by a store implementation.
///
/// Services only branch on `NotFound`, `Conflict` and `MissingReference`;
/// everything else is carried through as `Backend`.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The addressed record does not exist.
    #[error("record not found")]
    NotFound,

    /// A unique constraint rejected the write.
    #[error("unique constraint violated: {0}")]
    Conflict(String),

    /// A foreign key points at a record that does not exist.
    #[error("referenced record missing: {0}")]
    MissingReference(String),

    /// Connectivity, query or any other storage failure.
    #[error("storage failure: {0}")]
    Backend(String),
}

impl StoreError {
    /// Create a backend error from anything displayable.
    #[must_use]
    pub fn backend(err: impl std::fmt::Display) -> Self {
        Self::Backend(err.to_string())
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound => Self::NotFound("record not found".to_string()),
            StoreError::Conflict(msg) => Self::Conflict(msg),
            StoreError::MissingReference(msg) => Self::Validation(msg),
            StoreError::Backend(msg) => Self::Database(msg),
        }
    }
}
