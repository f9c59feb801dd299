//! Budget error types.

use pocketbook_shared::AppError;
use pocketbook_shared::types::BudgetId;
use rust_decimal::Decimal;
use thiserror::Error;

use crate::store::StoreError;

/// Budget-related errors.
#[derive(Debug, Error)]
pub enum BudgetError {
    /// Budget not found.
    #[error("budget not found: {0}")]
    NotFound(BudgetId),

    /// No budget is set for the period.
    #[error("no budget set for {month:02}/{year}")]
    PeriodNotFound {
        /// Requested month.
        month: i32,
        /// Requested year.
        year: i32,
    },

    /// Month outside 1..=12.
    #[error("month must be between 1 and 12, got {0}")]
    InvalidMonth(i32),

    /// Amount cannot be negative.
    #[error("budget amount cannot be negative, got {0}")]
    NegativeAmount(Decimal),

    /// Amount is too large for the stored precision.
    #[error("budget amount {0} is out of range: it must stay below 100000000")]
    AmountOutOfRange(Decimal),

    /// A budget already exists for the period.
    #[error("a budget already exists for {month:02}/{year}")]
    PeriodConflict {
        /// Requested month.
        month: i32,
        /// Requested year.
        year: i32,
    },

    /// Store operation failed.
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl From<BudgetError> for AppError {
    fn from(err: BudgetError) -> Self {
        match err {
            BudgetError::NotFound(_) | BudgetError::PeriodNotFound { .. } => {
                Self::NotFound(err.to_string())
            }
            BudgetError::InvalidMonth(_)
            | BudgetError::NegativeAmount(_)
            | BudgetError::AmountOutOfRange(_) => Self::Validation(err.to_string()),
            BudgetError::PeriodConflict { .. } => Self::Conflict(err.to_string()),
            BudgetError::Store(inner) => inner.into(),
        }
    }
}
