//! Core business logic for Pocketbook.
//!
//! This crate contains pure business logic with ZERO web or database dependencies.
//! Persistence is reached only through the store traits each module declares;
//! the db crate implements them and the api crate wires them together.
//!
//! # Modules
//!
//! - `category` - Expense categories
//! - `expense` - Expense write path, filtering and the budget warning
//! - `budget` - Monthly budgets, upsert and status evaluation
//! - `money` - Range of the stored money columns
//! - `store` - Errors shared by every store implementation

pub mod budget;
pub mod category;
pub mod expense;
pub mod money;
pub mod store;

#[cfg(test)]
pub(crate) mod testing;

pub use store::StoreError;
