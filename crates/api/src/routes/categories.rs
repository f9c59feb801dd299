//! Category routes.

use axum::{Json, Router, extract::State, http::StatusCode, routing::get};

use pocketbook_core::category::{Category, CategoryInput};
use pocketbook_shared::types::CategoryId;

use crate::AppState;
use crate::error::ApiError;
use crate::extractors::{AppJson, AppPath};

/// Creates the category routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/categories", get(list_categories).post(create_category))
        .route(
            "/categories/{id}",
            get(get_category)
                .put(update_category)
                .delete(delete_category),
        )
}

/// GET `/categories` - List categories by name.
async fn list_categories(State(state): State<AppState>) -> Result<Json<Vec<Category>>, ApiError> {
    Ok(Json(state.categories.list().await?))
}

/// POST `/categories` - Create a category.
async fn create_category(
    State(state): State<AppState>,
    AppJson(input): AppJson<CategoryInput>,
) -> Result<(StatusCode, Json<Category>), ApiError> {
    let category = state.categories.create(input).await?;
    Ok((StatusCode::CREATED, Json(category)))
}

/// GET `/categories/{id}`
async fn get_category(
    State(state): State<AppState>,
    AppPath(id): AppPath<CategoryId>,
) -> Result<Json<Category>, ApiError> {
    Ok(Json(state.categories.get(id).await?))
}

/// PUT `/categories/{id}` - Rename a category.
async fn update_category(
    State(state): State<AppState>,
    AppPath(id): AppPath<CategoryId>,
    AppJson(input): AppJson<CategoryInput>,
) -> Result<Json<Category>, ApiError> {
    Ok(Json(state.categories.update(id, input).await?))
}

/// DELETE `/categories/{id}` - Delete a category and its expenses.
async fn delete_category(
    State(state): State<AppState>,
    AppPath(id): AppPath<CategoryId>,
) -> Result<StatusCode, ApiError> {
    state.categories.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
