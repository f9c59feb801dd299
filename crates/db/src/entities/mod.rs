//! `SeaORM` entities for the Pocketbook schema.

pub mod budgets;
pub mod categories;
pub mod expenses;
pub mod sea_orm_active_enums;
