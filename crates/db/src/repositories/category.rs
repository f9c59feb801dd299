//! Category repository for database operations.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};

use pocketbook_core::StoreError;
use pocketbook_core::category::{Category, CategoryStore};
use pocketbook_shared::types::CategoryId;

use super::store_error;
use crate::entities::categories;

/// Category repository implementation.
#[derive(Debug, Clone)]
pub struct CategoryRepository {
    db: DatabaseConnection,
}

impl CategoryRepository {
    /// Create a new category repository.
    #[must_use]
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl CategoryStore for CategoryRepository {
    async fn create(&self, name: String) -> Result<Category, StoreError> {
        let model = categories::ActiveModel {
            name: Set(name),
            created_at: Set(Utc::now().into()),
            ..Default::default()
        }
        .insert(&self.db)
        .await
        .map_err(store_error)?;

        Ok(to_domain(model))
    }

    async fn find_by_id(&self, id: CategoryId) -> Result<Option<Category>, StoreError> {
        let model = categories::Entity::find_by_id(id.into_inner())
            .one(&self.db)
            .await
            .map_err(store_error)?;

        Ok(model.map(to_domain))
    }

    async fn list(&self) -> Result<Vec<Category>, StoreError> {
        let models = categories::Entity::find()
            .order_by_asc(categories::Column::Name)
            .all(&self.db)
            .await
            .map_err(store_error)?;

        Ok(models.into_iter().map(to_domain).collect())
    }

    async fn update(&self, id: CategoryId, name: String) -> Result<Category, StoreError> {
        let model = categories::Entity::find_by_id(id.into_inner())
            .one(&self.db)
            .await
            .map_err(store_error)?
            .ok_or(StoreError::NotFound)?;

        let mut active: categories::ActiveModel = model.into();
        active.name = Set(name);

        let updated = active.update(&self.db).await.map_err(store_error)?;
        Ok(to_domain(updated))
    }

    async fn delete(&self, id: CategoryId) -> Result<bool, StoreError> {
        let result = categories::Entity::delete_many()
            .filter(categories::Column::Id.eq(id.into_inner()))
            .exec(&self.db)
            .await
            .map_err(store_error)?;

        Ok(result.rows_affected > 0)
    }
}

fn to_domain(model: categories::Model) -> Category {
    Category {
        id: CategoryId::new(model.id),
        name: model.name,
        created_at: model.created_at.to_utc(),
    }
}
