//! Category persistence boundary.

use pocketbook_shared::types::CategoryId;

use super::types::Category;
use crate::store::StoreError;

/// Repository trait for category persistence.
///
/// Implemented by the db crate; the service never talks to a database directly.
pub trait CategoryStore: Send + Sync {
    /// Insert a category. A taken name yields `StoreError::Conflict`.
    fn create(
        &self,
        name: String,
    ) -> impl std::future::Future<Output = Result<Category, StoreError>> + Send;

    /// Find a category by ID.
    fn find_by_id(
        &self,
        id: CategoryId,
    ) -> impl std::future::Future<Output = Result<Option<Category>, StoreError>> + Send;

    /// List every category ordered by name.
    fn list(&self) -> impl std::future::Future<Output = Result<Vec<Category>, StoreError>> + Send;

    /// Rename a category. A missing row yields `StoreError::NotFound`.
    fn update(
        &self,
        id: CategoryId,
        name: String,
    ) -> impl std::future::Future<Output = Result<Category, StoreError>> + Send;

    /// Delete a category and, through the schema, its expenses.
    ///
    /// Returns `false` when no row matched.
    fn delete(
        &self,
        id: CategoryId,
    ) -> impl std::future::Future<Output = Result<bool, StoreError>> + Send;
}
