//! Budget routes.

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    routing::get,
};

use pocketbook_core::budget::{Budget, BudgetInput, BudgetStatus};
use pocketbook_shared::types::BudgetId;

use crate::AppState;
use crate::error::ApiError;
use crate::extractors::{AppJson, AppPath};

/// Creates the budget routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/budgets", get(list_budgets).post(save_budget))
        .route("/budgets/{id}", get(get_budget).delete(delete_budget))
        .route("/budgets/{month}/{year}", get(get_budget_status))
}

/// GET `/budgets` - List budgets, newest period first.
async fn list_budgets(State(state): State<AppState>) -> Result<Json<Vec<Budget>>, ApiError> {
    Ok(Json(state.budgets.list().await?))
}

/// POST `/budgets` - Create the month's budget or replace its amount.
async fn save_budget(
    State(state): State<AppState>,
    AppJson(input): AppJson<BudgetInput>,
) -> Result<(StatusCode, Json<Budget>), ApiError> {
    let budget = state.budgets.create_or_update(input).await?;
    Ok((StatusCode::CREATED, Json(budget)))
}

/// GET `/budgets/{id}`
async fn get_budget(
    State(state): State<AppState>,
    AppPath(id): AppPath<BudgetId>,
) -> Result<Json<Budget>, ApiError> {
    Ok(Json(state.budgets.get(id).await?))
}

/// GET `/budgets/{month}/{year}` - Spend against the month's budget.
async fn get_budget_status(
    State(state): State<AppState>,
    AppPath((month, year)): AppPath<(i32, i32)>,
) -> Result<Json<BudgetStatus>, ApiError> {
    Ok(Json(state.budgets.get_status(month, year).await?))
}

/// DELETE `/budgets/{id}`
async fn delete_budget(
    State(state): State<AppState>,
    AppPath(id): AppPath<BudgetId>,
) -> Result<StatusCode, ApiError> {
    state.budgets.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
