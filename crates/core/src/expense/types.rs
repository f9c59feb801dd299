//! Expense domain types.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use pocketbook_shared::types::{CategoryId, ExpenseId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::error::ExpenseError;

/// How an expense was paid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaymentMode {
    /// Unified Payments Interface transfer.
    #[serde(rename = "UPI")]
    Upi,
    /// Cash.
    Cash,
}

impl PaymentMode {
    /// Wire and storage spelling.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Upi => "UPI",
            Self::Cash => "Cash",
        }
    }
}

impl fmt::Display for PaymentMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaymentMode {
    type Err = ExpenseError;

    /// Matching is exact: `"upi"` or `" Cash"` are rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "UPI" => Ok(Self::Upi),
            "Cash" => Ok(Self::Cash),
            other => Err(ExpenseError::InvalidPaymentMode(other.to_string())),
        }
    }
}

/// A recorded expense.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    /// Store-assigned identifier.
    pub id: ExpenseId,
    /// Category the expense is filed under.
    pub category_id: CategoryId,
    /// Amount spent. Negative values are accepted as refunds.
    pub amount: Decimal,
    /// Free-text note.
    pub description: String,
    /// How it was paid.
    pub payment_mode: PaymentMode,
    /// Calendar date the expense counts towards.
    pub expense_date: NaiveDate,
    /// When the record was created.
    pub created_at: DateTime<Utc>,
    /// Over-budget notice computed for this response only. Never stored.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

/// Validated fields handed to the store for insertion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewExpense {
    /// Category the expense is filed under.
    pub category_id: CategoryId,
    /// Amount spent.
    pub amount: Decimal,
    /// Free-text note.
    pub description: String,
    /// How it was paid.
    pub payment_mode: PaymentMode,
    /// Calendar date the expense counts towards.
    pub expense_date: NaiveDate,
}

/// Request body for recording an expense.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateExpenseInput {
    /// Category the expense is filed under. Must exist.
    pub category_id: CategoryId,
    /// Amount spent. Its magnitude must stay below 100000000.
    pub amount: Decimal,
    /// Free-text note.
    #[serde(default)]
    pub description: String,
    /// `"UPI"` or `"Cash"`.
    pub payment_mode: String,
    /// Defaults to today (UTC) when absent.
    #[serde(default)]
    pub expense_date: Option<NaiveDate>,
}

/// Request body for a partial expense update.
///
/// A present field is applied as given, zero and empty values included.
/// An absent field keeps its stored value.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct UpdateExpenseInput {
    /// New category. Must exist.
    pub category_id: Option<CategoryId>,
    /// New amount.
    pub amount: Option<Decimal>,
    /// New description.
    pub description: Option<String>,
    /// New payment mode, `"UPI"` or `"Cash"`.
    pub payment_mode: Option<String>,
    /// New expense date.
    pub expense_date: Option<NaiveDate>,
}

/// Conjunction of optional predicates for listing expenses.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpenseFilter {
    /// Only this category.
    pub category_id: Option<CategoryId>,
    /// Only this payment mode.
    pub payment_mode: Option<PaymentMode>,
    /// Only dates on or after this day.
    pub start_date: Option<NaiveDate>,
    /// Only dates on or before this day.
    pub end_date: Option<NaiveDate>,
}

impl ExpenseFilter {
    /// Returns true if the expense satisfies every set predicate.
    #[must_use]
    pub fn matches(&self, expense: &Expense) -> bool {
        self.category_id.is_none_or(|id| expense.category_id == id)
            && self.payment_mode.is_none_or(|mode| expense.payment_mode == mode)
            && self.start_date.is_none_or(|start| expense.expense_date >= start)
            && self.end_date.is_none_or(|end| expense.expense_date <= end)
    }
}
