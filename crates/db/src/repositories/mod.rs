//! Repository abstractions for data access.
//!
//! Each repository implements one of the core store traits, hiding the
//! `SeaORM` implementation details from the services.

pub mod budget;
pub mod category;
pub mod expense;

pub use budget::BudgetRepository;
pub use category::CategoryRepository;
pub use expense::ExpenseRepository;

use pocketbook_core::StoreError;
use sea_orm::{DbErr, SqlErr};

/// Translate a database error into the store vocabulary the services branch on.
pub(crate) fn store_error(err: DbErr) -> StoreError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(msg)) => StoreError::Conflict(msg),
        Some(SqlErr::ForeignKeyConstraintViolation(msg)) => StoreError::MissingReference(msg),
        _ => match err {
            DbErr::RecordNotUpdated | DbErr::RecordNotFound(_) => StoreError::NotFound,
            other => StoreError::backend(other),
        },
    }
}
