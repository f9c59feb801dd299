//! Expense routes.

use axum::{Json, Router, extract::State, http::StatusCode, routing::get};
use chrono::NaiveDate;
use serde::Deserialize;

use pocketbook_core::expense::{
    CreateExpenseInput, Expense, ExpenseError, ExpenseFilter, UpdateExpenseInput,
};
use pocketbook_shared::types::{CategoryId, ExpenseId};

use crate::AppState;
use crate::error::ApiError;
use crate::extractors::{AppJson, AppPath, AppQuery};

/// Creates the expense routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/expenses", get(list_expenses).post(create_expense))
        .route(
            "/expenses/{id}",
            get(get_expense).put(update_expense).delete(delete_expense),
        )
}

/// Query parameters for listing expenses.
#[derive(Debug, Default, Deserialize)]
pub struct ExpenseQuery {
    /// Only this category.
    pub category_id: Option<CategoryId>,
    /// Only this payment mode, `UPI` or `Cash`.
    pub payment_mode: Option<String>,
    /// Earliest expense date, inclusive.
    pub start_date: Option<NaiveDate>,
    /// Latest expense date, inclusive.
    pub end_date: Option<NaiveDate>,
}

impl TryFrom<ExpenseQuery> for ExpenseFilter {
    type Error = ExpenseError;

    fn try_from(query: ExpenseQuery) -> Result<Self, Self::Error> {
        Ok(Self {
            category_id: query.category_id,
            payment_mode: query.payment_mode.as_deref().map(str::parse).transpose()?,
            start_date: query.start_date,
            end_date: query.end_date,
        })
    }
}

/// GET `/expenses` - List expenses, newest first.
async fn list_expenses(
    State(state): State<AppState>,
    AppQuery(query): AppQuery<ExpenseQuery>,
) -> Result<Json<Vec<Expense>>, ApiError> {
    let filter = ExpenseFilter::try_from(query)?;
    Ok(Json(state.expenses.list(filter).await?))
}

/// POST `/expenses` - Record an expense.
///
/// The response carries `warning` when the expense pushes its month over budget.
async fn create_expense(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateExpenseInput>,
) -> Result<(StatusCode, Json<Expense>), ApiError> {
    let expense = state.expenses.create(input).await?;
    Ok((StatusCode::CREATED, Json(expense)))
}

/// GET `/expenses/{id}`
async fn get_expense(
    State(state): State<AppState>,
    AppPath(id): AppPath<ExpenseId>,
) -> Result<Json<Expense>, ApiError> {
    Ok(Json(state.expenses.get(id).await?))
}

/// PUT `/expenses/{id}` - Apply the fields present in the body.
async fn update_expense(
    State(state): State<AppState>,
    AppPath(id): AppPath<ExpenseId>,
    AppJson(input): AppJson<UpdateExpenseInput>,
) -> Result<Json<Expense>, ApiError> {
    Ok(Json(state.expenses.update(id, input).await?))
}

/// DELETE `/expenses/{id}`
async fn delete_expense(
    State(state): State<AppState>,
    AppPath(id): AppPath<ExpenseId>,
) -> Result<StatusCode, ApiError> {
    state.expenses.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
