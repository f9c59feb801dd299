//! Budget persistence boundary.

use pocketbook_shared::types::BudgetId;
use rust_decimal::Decimal;

use super::types::Budget;
use crate::store::StoreError;

/// Repository trait for budget persistence.
pub trait BudgetStore: Send + Sync {
    /// Insert a budget. An occupied period yields `StoreError::Conflict`.
    fn create(
        &self,
        month: i32,
        year: i32,
        amount: Decimal,
    ) -> impl std::future::Future<Output = Result<Budget, StoreError>> + Send;

    /// Find a budget by ID.
    fn find_by_id(
        &self,
        id: BudgetId,
    ) -> impl std::future::Future<Output = Result<Option<Budget>, StoreError>> + Send;

    /// List budgets, newest period first.
    fn list(&self) -> impl std::future::Future<Output = Result<Vec<Budget>, StoreError>> + Send;

    /// Find the budget for a period.
    fn find_by_period(
        &self,
        month: i32,
        year: i32,
    ) -> impl std::future::Future<Output = Result<Option<Budget>, StoreError>> + Send;

    /// Overwrite the amount and bump `updated_at`. A missing row yields `StoreError::NotFound`.
    fn update_amount(
        &self,
        id: BudgetId,
        amount: Decimal,
    ) -> impl std::future::Future<Output = Result<Budget, StoreError>> + Send;

    /// Insert the period's budget or overwrite its amount in one atomic statement.
    ///
    /// An existing row keeps its `id` and `created_at`.
    fn upsert(
        &self,
        month: i32,
        year: i32,
        amount: Decimal,
    ) -> impl std::future::Future<Output = Result<Budget, StoreError>> + Send;

    /// Delete a budget. Returns `false` when no row matched.
    fn delete(
        &self,
        id: BudgetId,
    ) -> impl std::future::Future<Output = Result<bool, StoreError>> + Send;
}
