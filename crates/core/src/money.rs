//! Limits of the stored money columns.
//!
//! Amounts are persisted as `DECIMAL(10, 2)`: two decimal places and at most
//! eight integer digits. Values are rounded to cents the way the database
//! rounds them before the range check.

use rust_decimal::{Decimal, RoundingStrategy};

/// Smallest magnitude the money columns cannot hold.
pub const AMOUNT_LIMIT: Decimal = Decimal::from_parts(100_000_000, 0, 0, false, 0);

/// Returns true when `amount`, rounded to cents, fits the money columns.
#[must_use]
pub fn fits_storage(amount: Decimal) -> bool {
    amount
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
        .abs()
        < AMOUNT_LIMIT
}
