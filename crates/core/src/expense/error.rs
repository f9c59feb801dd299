//! Expense error types.

use pocketbook_shared::AppError;
use pocketbook_shared::types::{CategoryId, ExpenseId};
use rust_decimal::Decimal;
use thiserror::Error;

use crate::store::StoreError;

/// Expense operation errors.
#[derive(Debug, Error)]
pub enum ExpenseError {
    /// Expense not found.
    #[error("expense not found: {0}")]
    NotFound(ExpenseId),

    /// Payment mode is not one of the accepted values.
    #[error("invalid payment mode '{0}': expected 'UPI' or 'Cash'")]
    InvalidPaymentMode(String),

    /// Amount is too large for the stored precision.
    #[error("amount {0} is out of range: its magnitude must stay below 100000000")]
    AmountOutOfRange(Decimal),

    /// Referenced category does not exist.
    #[error("category does not exist: {0}")]
    InvalidCategory(CategoryId),

    /// Store operation failed.
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl From<ExpenseError> for AppError {
    fn from(err: ExpenseError) -> Self {
        match err {
            ExpenseError::NotFound(_) => Self::NotFound(err.to_string()),
            ExpenseError::InvalidPaymentMode(_)
            | ExpenseError::AmountOutOfRange(_)
            | ExpenseError::InvalidCategory(_) => Self::Validation(err.to_string()),
            ExpenseError::Store(inner) => inner.into(),
        }
    }
}
