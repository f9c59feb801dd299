//! Budget repository for budget database operations.

use chrono::Utc;
use rust_decimal::Decimal;
use sea_orm::sea_query::OnConflict;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};

use pocketbook_core::StoreError;
use pocketbook_core::budget::{Budget, BudgetStore};
use pocketbook_shared::types::BudgetId;

use super::store_error;
use crate::entities::budgets;

/// Budget repository implementation.
#[derive(Debug, Clone)]
pub struct BudgetRepository {
    db: DatabaseConnection,
}

impl BudgetRepository {
    /// Create a new budget repository.
    #[must_use]
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn new_row(month: i32, year: i32, amount: Decimal) -> budgets::ActiveModel {
    let now = Utc::now();
    budgets::ActiveModel {
        month: Set(month),
        year: Set(year),
        budget_amount: Set(amount),
        created_at: Set(now.into()),
        updated_at: Set(now.into()),
        ..Default::default()
    }
}

impl BudgetStore for BudgetRepository {
    async fn create(&self, month: i32, year: i32, amount: Decimal) -> Result<Budget, StoreError> {
        let model = new_row(month, year, amount)
            .insert(&self.db)
            .await
            .map_err(store_error)?;

        Ok(to_domain(model))
    }

    async fn find_by_id(&self, id: BudgetId) -> Result<Option<Budget>, StoreError> {
        let model = budgets::Entity::find_by_id(id.into_inner())
            .one(&self.db)
            .await
            .map_err(store_error)?;

        Ok(model.map(to_domain))
    }

    async fn list(&self) -> Result<Vec<Budget>, StoreError> {
        let models = budgets::Entity::find()
            .order_by_desc(budgets::Column::Year)
            .order_by_desc(budgets::Column::Month)
            .all(&self.db)
            .await
            .map_err(store_error)?;

        Ok(models.into_iter().map(to_domain).collect())
    }

    async fn find_by_period(&self, month: i32, year: i32) -> Result<Option<Budget>, StoreError> {
        let model = budgets::Entity::find()
            .filter(budgets::Column::Month.eq(month))
            .filter(budgets::Column::Year.eq(year))
            .one(&self.db)
            .await
            .map_err(store_error)?;

        Ok(model.map(to_domain))
    }

    async fn update_amount(&self, id: BudgetId, amount: Decimal) -> Result<Budget, StoreError> {
        let model = budgets::Entity::find_by_id(id.into_inner())
            .one(&self.db)
            .await
            .map_err(store_error)?
            .ok_or(StoreError::NotFound)?;

        let mut active: budgets::ActiveModel = model.into();
        active.budget_amount = Set(amount);
        active.updated_at = Set(Utc::now().into());

        let updated = active.update(&self.db).await.map_err(store_error)?;
        Ok(to_domain(updated))
    }

    async fn upsert(&self, month: i32, year: i32, amount: Decimal) -> Result<Budget, StoreError> {
        let model = budgets::Entity::insert(new_row(month, year, amount))
            .on_conflict(
                OnConflict::columns([budgets::Column::Month, budgets::Column::Year])
                    .update_columns([budgets::Column::BudgetAmount, budgets::Column::UpdatedAt])
                    .to_owned(),
            )
            .exec_with_returning(&self.db)
            .await
            .map_err(store_error)?;

        Ok(to_domain(model))
    }

    async fn delete(&self, id: BudgetId) -> Result<bool, StoreError> {
        let result = budgets::Entity::delete_many()
            .filter(budgets::Column::Id.eq(id.into_inner()))
            .exec(&self.db)
            .await
            .map_err(store_error)?;

        Ok(result.rows_affected > 0)
    }
}

fn to_domain(model: budgets::Model) -> Budget {
    Budget {
        id: BudgetId::new(model.id),
        month: model.month,
        year: model.year,
        budget_amount: model.budget_amount,
        created_at: model.created_at.to_utc(),
        updated_at: model.updated_at.to_utc(),
    }
}
