//! Category error types.

use pocketbook_shared::AppError;
use pocketbook_shared::types::CategoryId;
use thiserror::Error;

use crate::store::StoreError;

/// Category operation errors.
#[derive(Debug, Error)]
pub enum CategoryError {
    /// Category not found.
    #[error("category not found: {0}")]
    NotFound(CategoryId),

    /// Name is empty after trimming.
    #[error("category name cannot be empty")]
    EmptyName,

    /// Another category already uses this name.
    #[error("category name already exists: {0}")]
    DuplicateName(String),

    /// Store operation failed.
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl From<CategoryError> for AppError {
    fn from(err: CategoryError) -> Self {
        match err {
            CategoryError::NotFound(_) => Self::NotFound(err.to_string()),
            CategoryError::EmptyName => Self::Validation(err.to_string()),
            CategoryError::DuplicateName(_) => Self::Conflict(err.to_string()),
            CategoryError::Store(inner) => inner.into(),
        }
    }
}
