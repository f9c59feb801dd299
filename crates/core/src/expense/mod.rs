//! Expenses and the write path that flags over-budget months.

pub mod error;
pub mod service;
pub mod store;
pub mod types;

pub use error::ExpenseError;
pub use service::ExpenseService;
pub use store::ExpenseStore;
pub use types::{
    CreateExpenseInput, Expense, ExpenseFilter, NewExpense, PaymentMode, UpdateExpenseInput,
};
