//! Monthly budgets, the upsert path and spend-vs-budget evaluation.

pub mod error;
pub mod period;
pub mod service;
pub mod status;
pub mod store;
pub mod types;


pub use error::BudgetError;
pub use service::BudgetService;
pub use status::BudgetHealth;
pub use store::BudgetStore;
pub use types::{Budget, BudgetInput, BudgetStatus};
