//! HTTP API layer with Axum routes.
//!
//! This crate provides:
//! - REST API routes under `/api`
//! - Request extractors that answer malformed input with 400
//! - Error-to-response mapping

pub mod error;
pub mod extractors;
pub mod routes;

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use pocketbook_core::budget::BudgetService;
use pocketbook_core::category::CategoryService;
use pocketbook_core::expense::ExpenseService;
use pocketbook_db::{BudgetRepository, CategoryRepository, ExpenseRepository};
use pocketbook_shared::config::ServerConfig;
use sea_orm::DatabaseConnection;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

pub use error::ApiError;

/// Category service backed by PostgreSQL.
pub type Categories = CategoryService<CategoryRepository>;
/// Expense service backed by PostgreSQL.
pub type Expenses = ExpenseService<ExpenseRepository, CategoryRepository, BudgetRepository>;
/// Budget service backed by PostgreSQL.
pub type Budgets = BudgetService<BudgetRepository, ExpenseRepository>;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub db: Arc<DatabaseConnection>,
    /// Category service.
    pub categories: Arc<Categories>,
    /// Expense service.
    pub expenses: Arc<Expenses>,
    /// Budget service.
    pub budgets: Arc<Budgets>,
}

impl AppState {
    /// Build every service over one connection pool.
    #[must_use]
    pub fn new(db: DatabaseConnection) -> Self {
        let category_repo = Arc::new(CategoryRepository::new(db.clone()));
        let expense_repo = Arc::new(ExpenseRepository::new(db.clone()));
        let budget_repo = Arc::new(BudgetRepository::new(db.clone()));

        Self {
            db: Arc::new(db),
            categories: Arc::new(CategoryService::new(category_repo.clone())),
            expenses: Arc::new(ExpenseService::new(
                expense_repo.clone(),
                category_repo,
                budget_repo.clone(),
            )),
            budgets: Arc::new(BudgetService::new(budget_repo, expense_repo)),
        }
    }
}

/// Creates the main application router.
pub fn create_router(state: AppState, config: &ServerConfig) -> Router {
    Router::new()
        .nest("/api", routes::api_routes())
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.request_timeout_secs,
        )))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
