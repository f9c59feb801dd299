//! Spend-vs-budget evaluation.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::types::{Budget, BudgetStatus};

/// Outcome of comparing a month's spend with its budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BudgetHealth {
    /// Spend is at or below the limit.
    WithinBudget,
    /// Spend is strictly above the limit.
    Exceeded,
}

impl BudgetHealth {
    /// Classify `spent` against `limit`. Spending exactly the limit is not exceeding it.
    #[must_use]
    pub fn classify(limit: Decimal, spent: Decimal) -> Self {
        if spent > limit {
            Self::Exceeded
        } else {
            Self::WithinBudget
        }
    }

    /// Returns true when spend went past the limit.
    #[must_use]
    pub const fn is_exceeded(self) -> bool {
        matches!(self, Self::Exceeded)
    }
}

impl BudgetStatus {
    /// Evaluate a budget against the amount already spent in its month.
    #[must_use]
    pub fn evaluate(budget: Budget, spent: Decimal) -> Self {
        let remaining = budget.budget_amount - spent;
        let status = BudgetHealth::classify(budget.budget_amount, spent);

        Self {
            budget,
            spent_amount: spent,
            remaining,
            status,
        }
    }
}
