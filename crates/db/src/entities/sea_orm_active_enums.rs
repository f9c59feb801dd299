//! String-backed enums stored in `CHECK`-constrained columns.

use sea_orm::entity::prelude::*;

/// `expenses.payment_mode`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(10))")]
pub enum PaymentMode {
    /// Unified Payments Interface transfer.
    #[sea_orm(string_value = "UPI")]
    Upi,
    /// Cash.
    #[sea_orm(string_value = "Cash")]
    Cash,
}
