//! Budget domain types.

use chrono::{DateTime, Utc};
use pocketbook_shared::types::BudgetId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::status::BudgetHealth;

/// Spending limit for one calendar month.
///
/// At most one budget exists per `(month, year)` period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Budget {
    /// Store-assigned identifier.
    pub id: BudgetId,
    /// Calendar month, 1 through 12.
    pub month: i32,
    /// Calendar year.
    pub year: i32,
    /// Limit for the month. Never negative.
    pub budget_amount: Decimal,
    /// When the budget was first created.
    pub created_at: DateTime<Utc>,
    /// When the amount was last written.
    pub updated_at: DateTime<Utc>,
}

/// Request body for creating or replacing a month's budget.
#[derive(Debug, Clone, Deserialize)]
pub struct BudgetInput {
    /// Calendar month, 1 through 12.
    pub month: i32,
    /// Calendar year.
    pub year: i32,
    /// Limit for the month.
    pub budget_amount: Decimal,
}

/// Budget together with the month's spend, computed on every read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BudgetStatus {
    /// The budget being evaluated.
    pub budget: Budget,
    /// Sum of expense amounts dated inside the month.
    pub spent_amount: Decimal,
    /// `budget_amount - spent_amount`; negative once exceeded.
    pub remaining: Decimal,
    /// Whether spend went past the limit.
    pub status: BudgetHealth,
}
