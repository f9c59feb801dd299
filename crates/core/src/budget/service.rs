//! Budget service: the upsert path and the status evaluator.

use std::sync::Arc;

use pocketbook_shared::types::BudgetId;
use rust_decimal::Decimal;
use tracing::{debug, info};

use super::error::BudgetError;
use super::period::is_valid_month;
use super::store::BudgetStore;
use super::types::{Budget, BudgetInput, BudgetStatus};
use crate::expense::ExpenseStore;
use crate::money::fits_storage;
use crate::store::StoreError;

/// Budget service for monthly limits.
pub struct BudgetService<B: BudgetStore, E: ExpenseStore> {
    budgets: Arc<B>,
    expenses: Arc<E>,
}

impl<B: BudgetStore, E: ExpenseStore> BudgetService<B, E> {
    /// Create a new budget service.
    #[must_use]
    pub fn new(budgets: Arc<B>, expenses: Arc<E>) -> Self {
        Self { budgets, expenses }
    }

    /// Set the budget for a month, creating it or overwriting its amount.
    ///
    /// An existing budget keeps its ID. Concurrent calls for the same period
    /// converge on one row because the create branch is an atomic upsert.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The month is outside 1..=12
    /// - The amount is negative
    /// - The store fails
    pub async fn create_or_update(&self, input: BudgetInput) -> Result<Budget, BudgetError> {
        validate(&input)?;
        let BudgetInput {
            month,
            year,
            budget_amount,
        } = input;

        let budget = match self.budgets.find_by_period(month, year).await? {
            Some(existing) => match self.budgets.update_amount(existing.id, budget_amount).await {
                Ok(updated) => updated,
                Err(StoreError::NotFound) => {
                    debug!(budget_id = %existing.id, "Budget vanished before update, upserting");
                    self.budgets.upsert(month, year, budget_amount).await?
                }
                Err(e) => return Err(e.into()),
            },
            None => self.budgets.upsert(month, year, budget_amount).await?,
        };

        info!(
            budget_id = %budget.id,
            month,
            year,
            amount = %budget.budget_amount,
            "Budget saved"
        );
        Ok(budget)
    }

    /// Create a budget for a period that has none.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The month is outside 1..=12
    /// - The amount is negative
    /// - The period already has a budget
    /// - The store fails
    pub async fn create(&self, input: BudgetInput) -> Result<Budget, BudgetError> {
        validate(&input)?;
        let BudgetInput {
            month,
            year,
            budget_amount,
        } = input;

        let budget = self
            .budgets
            .create(month, year, budget_amount)
            .await
            .map_err(|e| match e {
                StoreError::Conflict(_) => BudgetError::PeriodConflict { month, year },
                other => BudgetError::Store(other),
            })?;

        info!(budget_id = %budget.id, month, year, "Budget created");
        Ok(budget)
    }

    /// List all budgets, newest period first.
    ///
    /// # Errors
    ///
    /// Returns an error if the store fails.
    pub async fn list(&self) -> Result<Vec<Budget>, BudgetError> {
        Ok(self.budgets.list().await?)
    }

    /// Get a budget by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the budget does not exist or the store fails.
    pub async fn get(&self, id: BudgetId) -> Result<Budget, BudgetError> {
        self.budgets
            .find_by_id(id)
            .await?
            .ok_or(BudgetError::NotFound(id))
    }

    /// Evaluate a month's spend against its budget.
    ///
    /// The month is not range-checked here; an out-of-range month simply has
    /// no budget.
    ///
    /// # Errors
    ///
    /// Returns an error if no budget is set for the period or the store fails.
    pub async fn get_status(&self, month: i32, year: i32) -> Result<BudgetStatus, BudgetError> {
        let budget = self
            .budgets
            .find_by_period(month, year)
            .await?
            .ok_or(BudgetError::PeriodNotFound { month, year })?;

        let spent = self.expenses.total_for_month(month, year).await?;
        Ok(BudgetStatus::evaluate(budget, spent))
    }

    /// Delete a budget. Expenses in its month are untouched.
    ///
    /// # Errors
    ///
    /// Returns an error if the budget does not exist or the store fails.
    pub async fn delete(&self, id: BudgetId) -> Result<(), BudgetError> {
        if !self.budgets.delete(id).await? {
            return Err(BudgetError::NotFound(id));
        }

        info!(budget_id = %id, "Budget deleted");
        Ok(())
    }
}

/// Reject out-of-range months and amounts before touching the store.
fn validate(input: &BudgetInput) -> Result<(), BudgetError> {
    if !is_valid_month(input.month) {
        return Err(BudgetError::InvalidMonth(input.month));
    }
    if input.budget_amount < Decimal::ZERO {
        return Err(BudgetError::NegativeAmount(input.budget_amount));
    }
    if !fits_storage(input.budget_amount) {
        return Err(BudgetError::AmountOutOfRange(input.budget_amount));
    }
    Ok(())
}
