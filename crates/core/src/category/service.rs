//! Category service implementation.

use std::sync::Arc;

use pocketbook_shared::types::CategoryId;
use tracing::info;

use super::error::CategoryError;
use super::store::CategoryStore;
use super::types::{Category, CategoryInput};
use crate::store::StoreError;

/// Category service for managing expense categories.
pub struct CategoryService<C: CategoryStore> {
    store: Arc<C>,
}

impl<C: CategoryStore> CategoryService<C> {
    /// Create a new category service.
    #[must_use]
    pub fn new(store: Arc<C>) -> Self {
        Self { store }
    }

    /// Create a category.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The name is blank
    /// - The name is already taken
    /// - The store fails
    pub async fn create(&self, input: CategoryInput) -> Result<Category, CategoryError> {
        let name = normalize_name(&input.name)?;

        let category = self
            .store
            .create(name.clone())
            .await
            .map_err(|e| duplicate_or_store(e, name))?;

        info!(category_id = %category.id, name = %category.name, "Category created");
        Ok(category)
    }

    /// List all categories.
    ///
    /// # Errors
    ///
    /// Returns an error if the store fails.
    pub async fn list(&self) -> Result<Vec<Category>, CategoryError> {
        Ok(self.store.list().await?)
    }

    /// Get a category by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the category does not exist or the store fails.
    pub async fn get(&self, id: CategoryId) -> Result<Category, CategoryError> {
        self.store
            .find_by_id(id)
            .await?
            .ok_or(CategoryError::NotFound(id))
    }

    /// Rename a category.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The name is blank
    /// - The category does not exist
    /// - The name is already taken
    /// - The store fails
    pub async fn update(
        &self,
        id: CategoryId,
        input: CategoryInput,
    ) -> Result<Category, CategoryError> {
        let name = normalize_name(&input.name)?;

        let category = self
            .store
            .update(id, name.clone())
            .await
            .map_err(|e| match e {
                StoreError::NotFound => CategoryError::NotFound(id),
                other => duplicate_or_store(other, name),
            })?;

        info!(category_id = %id, name = %category.name, "Category updated");
        Ok(category)
    }

    /// Delete a category together with its expenses.
    ///
    /// # Errors
    ///
    /// Returns an error if the category does not exist or the store fails.
    pub async fn delete(&self, id: CategoryId) -> Result<(), CategoryError> {
        if !self.store.delete(id).await? {
            return Err(CategoryError::NotFound(id));
        }

        info!(category_id = %id, "Category deleted");
        Ok(())
    }
}

/// Trim a requested name and reject it when nothing is left.
fn normalize_name(raw: &str) -> Result<String, CategoryError> {
    let name = raw.trim();
    if name.is_empty() {
        return Err(CategoryError::EmptyName);
    }
    Ok(name.to_string())
}

fn duplicate_or_store(err: StoreError, name: String) -> CategoryError {
    match err {
        StoreError::Conflict(_) => CategoryError::DuplicateName(name),
        other => CategoryError::Store(other),
    }
}
