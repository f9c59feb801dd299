//! Expense service implementation.

use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use pocketbook_shared::types::{CategoryId, ExpenseId};
use tracing::{info, warn};

use super::error::ExpenseError;
use super::store::ExpenseStore;
use super::types::{
    CreateExpenseInput, Expense, ExpenseFilter, NewExpense, PaymentMode, UpdateExpenseInput,
};
use crate::budget::BudgetStore;
use crate::budget::period::period_of;
use crate::budget::status::BudgetHealth;
use crate::category::CategoryStore;
use crate::money::fits_storage;
use crate::store::StoreError;

/// Expense service: validation, persistence and the advisory budget check.
pub struct ExpenseService<E: ExpenseStore, C: CategoryStore, B: BudgetStore> {
    expenses: Arc<E>,
    categories: Arc<C>,
    budgets: Arc<B>,
}

impl<E: ExpenseStore, C: CategoryStore, B: BudgetStore> ExpenseService<E, C, B> {
    /// Create a new expense service.
    #[must_use]
    pub fn new(expenses: Arc<E>, categories: Arc<C>, budgets: Arc<B>) -> Self {
        Self {
            expenses,
            categories,
            budgets,
        }
    }

    /// Record an expense.
    ///
    /// When the expense pushes its month over budget the returned value carries
    /// a `warning`. The check never fails the call.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The payment mode is not `UPI` or `Cash`
    /// - The amount does not fit the stored precision
    /// - The category does not exist
    /// - The store fails
    pub async fn create(&self, input: CreateExpenseInput) -> Result<Expense, ExpenseError> {
        let payment_mode = input.payment_mode.parse()?;
        let amount = checked_amount(input.amount)?;
        self.ensure_category(input.category_id).await?;

        let new_expense = NewExpense {
            category_id: input.category_id,
            amount,
            description: input.description,
            payment_mode,
            expense_date: input.expense_date.unwrap_or_else(|| Utc::now().date_naive()),
        };

        let mut expense = self
            .expenses
            .create(new_expense)
            .await
            .map_err(|e| reference_error(e, input.category_id))?;

        info!(
            expense_id = %expense.id,
            category_id = %expense.category_id,
            amount = %expense.amount,
            "Expense created"
        );

        self.attach_budget_warning(&mut expense).await;
        Ok(expense)
    }

    /// List expenses matching a filter.
    ///
    /// # Errors
    ///
    /// Returns an error if the store fails.
    pub async fn list(&self, filter: ExpenseFilter) -> Result<Vec<Expense>, ExpenseError> {
        Ok(self.expenses.list(filter).await?)
    }

    /// Get an expense by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the expense does not exist or the store fails.
    pub async fn get(&self, id: ExpenseId) -> Result<Expense, ExpenseError> {
        self.expenses
            .find_by_id(id)
            .await?
            .ok_or(ExpenseError::NotFound(id))
    }

    /// Apply a partial update.
    ///
    /// The expense must exist before any supplied field is validated.
    /// Payment mode, amount and category are checked only when present. The
    /// budget check runs against the final expense date.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The expense does not exist
    /// - A supplied payment mode is invalid
    /// - A supplied amount does not fit the stored precision
    /// - A supplied category does not exist
    /// - The store fails
    pub async fn update(
        &self,
        id: ExpenseId,
        input: UpdateExpenseInput,
    ) -> Result<Expense, ExpenseError> {
        let mut expense = self.get(id).await?;

        if let Some(mode) = input.payment_mode.as_deref() {
            expense.payment_mode = mode.parse::<PaymentMode>()?;
        }
        if let Some(amount) = input.amount {
            expense.amount = checked_amount(amount)?;
        }
        if let Some(category_id) = input.category_id {
            self.ensure_category(category_id).await?;
            expense.category_id = category_id;
        }
        if let Some(description) = input.description {
            expense.description = description;
        }
        if let Some(expense_date) = input.expense_date {
            expense.expense_date = expense_date;
        }

        let category_id = expense.category_id;
        let mut expense = self
            .expenses
            .update(expense)
            .await
            .map_err(|e| match e {
                StoreError::NotFound => ExpenseError::NotFound(id),
                other => reference_error(other, category_id),
            })?;

        info!(expense_id = %id, amount = %expense.amount, "Expense updated");

        self.attach_budget_warning(&mut expense).await;
        Ok(expense)
    }

    /// Delete an expense. No budget check runs.
    ///
    /// # Errors
    ///
    /// Returns an error if the expense does not exist or the store fails.
    pub async fn delete(&self, id: ExpenseId) -> Result<(), ExpenseError> {
        if !self.expenses.delete(id).await? {
            return Err(ExpenseError::NotFound(id));
        }

        info!(expense_id = %id, "Expense deleted");
        Ok(())
    }

    async fn ensure_category(&self, id: CategoryId) -> Result<(), ExpenseError> {
        match self.categories.find_by_id(id).await? {
            Some(_) => Ok(()),
            None => Err(ExpenseError::InvalidCategory(id)),
        }
    }

    /// Best-effort: failures are logged and dropped, the write already succeeded.
    async fn attach_budget_warning(&self, expense: &mut Expense) {
        match self.budget_warning(expense.expense_date).await {
            Ok(warning) => expense.warning = warning,
            Err(e) => {
                warn!(
                    expense_id = %expense.id,
                    expense_date = %expense.expense_date,
                    error = %e,
                    "Budget check failed, returning expense without warning"
                );
            }
        }
    }

    async fn budget_warning(&self, date: NaiveDate) -> Result<Option<String>, StoreError> {
        let (month, year) = period_of(date);

        let Some(budget) = self.budgets.find_by_period(month, year).await? else {
            return Ok(None);
        };
        let spent = self.expenses.total_for_month(month, year).await?;

        if !BudgetHealth::classify(budget.budget_amount, spent).is_exceeded() {
            return Ok(None);
        }

        info!(
            month,
            year,
            spent = %spent,
            budget = %budget.budget_amount,
            "Monthly budget exceeded"
        );

        Ok(Some(format!(
            "Monthly budget exceeded for {month:02}/{year}: spent {spent} of {}",
            budget.budget_amount
        )))
    }
}

/// A foreign-key rejection means the category vanished after it was checked.
fn reference_error(err: StoreError, category_id: CategoryId) -> ExpenseError {
    match err {
        StoreError::MissingReference(_) => ExpenseError::InvalidCategory(category_id),
        other => ExpenseError::Store(other),
    }
}

fn checked_amount(amount: Decimal) -> Result<Decimal, ExpenseError> {
    if fits_storage(amount) {
        Ok(amount)
    } else {
        Err(ExpenseError::AmountOutOfRange(amount))
    }
}

#[cfg(test)]
#[path = "service_tests.rs"]
mod tests;
