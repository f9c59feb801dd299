//! Expense repository for database operations.
//!
//! Also owns the monthly aggregation the budget evaluator reads.

use chrono::Utc;
use rust_decimal::Decimal;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ActiveValue::Unchanged, ColumnTrait,
    DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, QuerySelect, Set,
};

use pocketbook_core::StoreError;
use pocketbook_core::budget::period::month_bounds;
use pocketbook_core::expense::{Expense, ExpenseFilter, ExpenseStore, NewExpense, PaymentMode};
use pocketbook_shared::types::{CategoryId, ExpenseId};

use super::store_error;
use crate::entities::{expenses, sea_orm_active_enums::PaymentMode as DbPaymentMode};

/// Expense repository implementation.
#[derive(Debug, Clone)]
pub struct ExpenseRepository {
    db: DatabaseConnection,
}

impl ExpenseRepository {
    /// Create a new expense repository.
    #[must_use]
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl ExpenseStore for ExpenseRepository {
    async fn create(&self, input: NewExpense) -> Result<Expense, StoreError> {
        let model = expenses::ActiveModel {
            category_id: Set(input.category_id.into_inner()),
            amount: Set(input.amount),
            description: Set(input.description),
            payment_mode: Set(to_db_payment_mode(input.payment_mode)),
            expense_date: Set(input.expense_date),
            created_at: Set(Utc::now().into()),
            ..Default::default()
        }
        .insert(&self.db)
        .await
        .map_err(store_error)?;

        Ok(to_domain(model))
    }

    async fn find_by_id(&self, id: ExpenseId) -> Result<Option<Expense>, StoreError> {
        let model = expenses::Entity::find_by_id(id.into_inner())
            .one(&self.db)
            .await
            .map_err(store_error)?;

        Ok(model.map(to_domain))
    }

    async fn list(&self, filter: ExpenseFilter) -> Result<Vec<Expense>, StoreError> {
        let mut query = expenses::Entity::find();

        if let Some(category_id) = filter.category_id {
            query = query.filter(expenses::Column::CategoryId.eq(category_id.into_inner()));
        }
        if let Some(mode) = filter.payment_mode {
            query = query.filter(expenses::Column::PaymentMode.eq(to_db_payment_mode(mode)));
        }
        if let Some(start) = filter.start_date {
            query = query.filter(expenses::Column::ExpenseDate.gte(start));
        }
        if let Some(end) = filter.end_date {
            query = query.filter(expenses::Column::ExpenseDate.lte(end));
        }

        let models = query
            .order_by_desc(expenses::Column::ExpenseDate)
            .order_by_desc(expenses::Column::CreatedAt)
            .order_by_desc(expenses::Column::Id)
            .all(&self.db)
            .await
            .map_err(store_error)?;

        Ok(models.into_iter().map(to_domain).collect())
    }

    async fn update(&self, expense: Expense) -> Result<Expense, StoreError> {
        let model = expenses::ActiveModel {
            id: Unchanged(expense.id.into_inner()),
            category_id: Set(expense.category_id.into_inner()),
            amount: Set(expense.amount),
            description: Set(expense.description),
            payment_mode: Set(to_db_payment_mode(expense.payment_mode)),
            expense_date: Set(expense.expense_date),
            created_at: NotSet,
        }
        .update(&self.db)
        .await
        .map_err(store_error)?;

        Ok(to_domain(model))
    }

    async fn delete(&self, id: ExpenseId) -> Result<bool, StoreError> {
        let result = expenses::Entity::delete_many()
            .filter(expenses::Column::Id.eq(id.into_inner()))
            .exec(&self.db)
            .await
            .map_err(store_error)?;

        Ok(result.rows_affected > 0)
    }

    async fn total_for_month(&self, month: i32, year: i32) -> Result<Decimal, StoreError> {
        let Some((start, end)) = month_bounds(month, year) else {
            return Ok(Decimal::ZERO);
        };

        let total: Option<Option<Decimal>> = expenses::Entity::find()
            .select_only()
            .column_as(Expr::col(expenses::Column::Amount).sum(), "total")
            .filter(expenses::Column::ExpenseDate.gte(start))
            .filter(expenses::Column::ExpenseDate.lt(end))
            .into_tuple()
            .one(&self.db)
            .await
            .map_err(store_error)?;

        Ok(total.flatten().unwrap_or(Decimal::ZERO))
    }
}

fn to_db_payment_mode(mode: PaymentMode) -> DbPaymentMode {
    match mode {
        PaymentMode::Upi => DbPaymentMode::Upi,
        PaymentMode::Cash => DbPaymentMode::Cash,
    }
}

fn from_db_payment_mode(mode: DbPaymentMode) -> PaymentMode {
    match mode {
        DbPaymentMode::Upi => PaymentMode::Upi,
        DbPaymentMode::Cash => PaymentMode::Cash,
    }
}

fn to_domain(model: expenses::Model) -> Expense {
    Expense {
        id: ExpenseId::new(model.id),
        category_id: CategoryId::new(model.category_id),
        amount: model.amount,
        description: model.description,
        payment_mode: from_db_payment_mode(model.payment_mode),
        expense_date: model.expense_date,
        created_at: model.created_at.to_utc(),
        warning: None,
    }
}
