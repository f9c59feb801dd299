//! API route definitions.

use axum::Router;

use crate::AppState;

pub mod budgets;
pub mod categories;
pub mod expenses;
pub mod health;

/// Creates the API router with all routes.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(health::routes())
        .merge(categories::routes())
        .merge(expenses::routes())
        .merge(budgets::routes())
}
