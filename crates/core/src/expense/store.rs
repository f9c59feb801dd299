//! Expense persistence boundary.

use pocketbook_shared::types::ExpenseId;
use rust_decimal::Decimal;

use super::types::{Expense, ExpenseFilter, NewExpense};
use crate::store::StoreError;

/// Repository trait for expense persistence.
pub trait ExpenseStore: Send + Sync {
    /// Insert an expense. An unknown category yields `StoreError::MissingReference`.
    fn create(
        &self,
        input: NewExpense,
    ) -> impl std::future::Future<Output = Result<Expense, StoreError>> + Send;

    /// Find an expense by ID.
    fn find_by_id(
        &self,
        id: ExpenseId,
    ) -> impl std::future::Future<Output = Result<Option<Expense>, StoreError>> + Send;

    /// List expenses matching `filter`.
    ///
    /// Newest `expense_date` first, then newest `created_at`, then highest ID.
    fn list(
        &self,
        filter: ExpenseFilter,
    ) -> impl std::future::Future<Output = Result<Vec<Expense>, StoreError>> + Send;

    /// Persist every stored field of `expense`. A missing row yields `StoreError::NotFound`.
    fn update(
        &self,
        expense: Expense,
    ) -> impl std::future::Future<Output = Result<Expense, StoreError>> + Send;

    /// Delete an expense. Returns `false` when no row matched.
    fn delete(
        &self,
        id: ExpenseId,
    ) -> impl std::future::Future<Output = Result<bool, StoreError>> + Send;

    /// Sum of amounts dated inside the calendar month. Zero when nothing matches
    /// or the pair is not a valid month.
    fn total_for_month(
        &self,
        month: i32,
        year: i32,
    ) -> impl std::future::Future<Output = Result<Decimal, StoreError>> + Send;
}
