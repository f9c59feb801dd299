//! Integration tests for the PostgreSQL store implementations.
//!
//! Requires a migrated database (`cargo run --bin migrator -- up`) reachable
//! through `DATABASE_URL`. Run with `cargo test -p pocketbook-db -- --ignored`.
//! Each budget/total test owns a distinct far-future year so parallel tests
//! never share a period.

use chrono::{NaiveDate, Utc};
use futures::future::join_all;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};

use pocketbook_core::StoreError;
use pocketbook_core::budget::BudgetStore;
use pocketbook_core::category::{Category, CategoryStore};
use pocketbook_core::expense::{ExpenseFilter, ExpenseStore, NewExpense, PaymentMode};
use pocketbook_db::entities::{budgets, expenses};
use pocketbook_db::{BudgetRepository, CategoryRepository, ExpenseRepository};
use pocketbook_shared::config::DatabaseConfig;
use pocketbook_shared::types::{CategoryId, ExpenseId};

/// Get database URL from environment or use default.
fn get_database_url() -> String {
    std::env::var("DATABASE_URL").unwrap_or_else(|_| DatabaseConfig::default().url)
}

async fn connect() -> DatabaseConnection {
    let config = DatabaseConfig {
        url: get_database_url(),
        max_connections: 4,
        ..Default::default()
    };
    pocketbook_db::connect(&config)
        .await
        .expect("Failed to connect to database")
}

fn unique_name(prefix: &str) -> String {
    let nanos = Utc::now().timestamp_nanos_opt().unwrap_or_default();
    format!("{prefix}-{nanos}")
}

/// Remove every row a previous run left in the test's year.
async fn clear_year(db: &DatabaseConnection, year: i32) {
    budgets::Entity::delete_many()
        .filter(budgets::Column::Year.eq(year))
        .exec(db)
        .await
        .expect("Failed to clear budgets");
    expenses::Entity::delete_many()
        .filter(expenses::Column::ExpenseDate.gte(date(year, 1, 1)))
        .filter(expenses::Column::ExpenseDate.lte(date(year, 12, 31)))
        .exec(db)
        .await
        .expect("Failed to clear expenses");
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

async fn category(db: &DatabaseConnection) -> Category {
    CategoryRepository::new(db.clone())
        .create(unique_name("cat"))
        .await
        .expect("Failed to create category")
}

fn new_expense(category_id: CategoryId, amount: Decimal, expense_date: NaiveDate) -> NewExpense {
    NewExpense {
        category_id,
        amount,
        description: "integration".to_string(),
        payment_mode: PaymentMode::Upi,
        expense_date,
    }
}

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn test_category_crud_and_unique_name() {
    let db = connect().await;
    let repo = CategoryRepository::new(db.clone());
    let name = unique_name("Groceries");

    let created = repo.create(name.clone()).await.unwrap();
    assert_eq!(created.name, name);

    let duplicate = repo.create(name.clone()).await;
    assert!(matches!(duplicate, Err(StoreError::Conflict(_))));

    let renamed = repo
        .update(created.id, format!("{name}-renamed"))
        .await
        .unwrap();
    assert_eq!(renamed.id, created.id);
    assert_eq!(renamed.created_at, created.created_at);

    assert!(repo.delete(created.id).await.unwrap());
    assert!(!repo.delete(created.id).await.unwrap());
    assert!(repo.find_by_id(created.id).await.unwrap().is_none());
    assert!(matches!(
        repo.update(created.id, unique_name("gone")).await,
        Err(StoreError::NotFound)
    ));
}

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn test_deleting_category_cascades_to_expenses() {
    let db = connect().await;
    let cat = category(&db).await;
    let expenses = ExpenseRepository::new(db.clone());

    let expense = expenses
        .create(new_expense(cat.id, dec!(12.34), date(2024, 3, 3)))
        .await
        .unwrap();
    CategoryRepository::new(db.clone())
        .delete(cat.id)
        .await
        .unwrap();

    assert!(expenses.find_by_id(expense.id).await.unwrap().is_none());
}

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn test_expense_unknown_category_is_missing_reference() {
    let db = connect().await;
    let repo = ExpenseRepository::new(db);

    let result = repo
        .create(new_expense(CategoryId::new(i32::MAX), dec!(1), date(2024, 1, 1)))
        .await;

    assert!(matches!(result, Err(StoreError::MissingReference(_))));
}

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn test_expense_update_and_missing_row() {
    let db = connect().await;
    let cat = category(&db).await;
    let repo = ExpenseRepository::new(db);

    let mut expense = repo
        .create(new_expense(cat.id, dec!(40.00), date(2024, 8, 8)))
        .await
        .unwrap();
    expense.amount = Decimal::ZERO;
    expense.description = String::new();
    expense.payment_mode = PaymentMode::Cash;

    let updated = repo.update(expense.clone()).await.unwrap();
    assert_eq!(updated.amount, Decimal::ZERO);
    assert_eq!(updated.description, "");
    assert_eq!(updated.payment_mode, PaymentMode::Cash);
    assert_eq!(updated.created_at, expense.created_at);

    expense.id = ExpenseId::new(i32::MAX);
    assert!(matches!(repo.update(expense).await, Err(StoreError::NotFound)));
}

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn test_expense_list_filters_and_order() {
    let db = connect().await;
    let year = 2901;
    clear_year(&db, year).await;
    let cat = category(&db).await;
    let repo = ExpenseRepository::new(db);

    for (day, mode) in [(5, PaymentMode::Upi), (20, PaymentMode::Cash), (12, PaymentMode::Upi)] {
        repo.create(NewExpense {
            payment_mode: mode,
            ..new_expense(cat.id, dec!(1), date(year, 2, day))
        })
        .await
        .unwrap();
    }

    let listed = repo
        .list(ExpenseFilter {
            category_id: Some(cat.id),
            ..Default::default()
        })
        .await
        .unwrap();
    let days: Vec<NaiveDate> = listed.iter().map(|e| e.expense_date).collect();
    assert_eq!(days, [date(year, 2, 20), date(year, 2, 12), date(year, 2, 5)]);

    let upi_from_10th = repo
        .list(ExpenseFilter {
            category_id: Some(cat.id),
            payment_mode: Some(PaymentMode::Upi),
            start_date: Some(date(year, 2, 10)),
            end_date: Some(date(year, 2, 28)),
        })
        .await
        .unwrap();
    assert_eq!(upi_from_10th.len(), 1);
    assert_eq!(upi_from_10th[0].expense_date, date(year, 2, 12));
}

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn test_total_for_month_is_bounded_by_calendar_month() {
    let db = connect().await;
    let year = 2902;
    clear_year(&db, year).await;
    let cat = category(&db).await;
    let repo = ExpenseRepository::new(db);

    let rows = [
        (1, 31, dec!(100.25)),
        (2, 1, dec!(50)),
        (2, 28, dec!(-10.25)),
        (3, 1, dec!(7)),
    ];
    for (m, d, amount) in rows {
        repo.create(new_expense(cat.id, amount, date(year, m, d)))
            .await
            .unwrap();
    }

    assert_eq!(repo.total_for_month(2, year).await.unwrap(), dec!(39.75));
    assert_eq!(repo.total_for_month(4, year).await.unwrap(), Decimal::ZERO);
    assert_eq!(repo.total_for_month(13, year).await.unwrap(), Decimal::ZERO);
}

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn test_budget_create_conflict_and_upsert_keeps_identity() {
    let db = connect().await;
    let year = 2903;
    clear_year(&db, year).await;
    let repo = BudgetRepository::new(db);

    let created = repo.create(5, year, dec!(100)).await.unwrap();
    assert!(matches!(
        repo.create(5, year, dec!(200)).await,
        Err(StoreError::Conflict(_))
    ));

    let upserted = repo.upsert(5, year, dec!(300)).await.unwrap();
    assert_eq!(upserted.id, created.id);
    assert_eq!(upserted.created_at, created.created_at);
    assert_eq!(upserted.budget_amount, dec!(300));

    let found = repo.find_by_period(5, year).await.unwrap().unwrap();
    assert_eq!(found.budget_amount, dec!(300));
    assert_eq!(repo.find_by_id(created.id).await.unwrap(), Some(found));

    let updated = repo.update_amount(created.id, dec!(0)).await.unwrap();
    assert_eq!(updated.budget_amount, Decimal::ZERO);
    assert!(updated.updated_at >= upserted.updated_at);

    assert!(repo.delete(created.id).await.unwrap());
    assert!(matches!(
        repo.update_amount(created.id, dec!(1)).await,
        Err(StoreError::NotFound)
    ));
}

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn test_budget_list_orders_newest_period_first() {
    let db = connect().await;
    let year = 2904;
    clear_year(&db, year).await;
    clear_year(&db, year + 1).await;
    let repo = BudgetRepository::new(db);

    repo.upsert(11, year, dec!(1)).await.unwrap();
    repo.upsert(2, year + 1, dec!(1)).await.unwrap();
    repo.upsert(3, year, dec!(1)).await.unwrap();

    let periods: Vec<(i32, i32)> = repo
        .list()
        .await
        .unwrap()
        .into_iter()
        .filter(|b| b.year == year || b.year == year + 1)
        .map(|b| (b.month, b.year))
        .collect();

    assert_eq!(periods, [(2, year + 1), (11, year), (3, year)]);
}

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn test_concurrent_upserts_leave_one_row() {
    let db = connect().await;
    let year = 2906;
    clear_year(&db, year).await;
    let repo = BudgetRepository::new(db.clone());

    let results = join_all((1..=16).map(|i| {
        let repo = repo.clone();
        async move { repo.upsert(6, year, Decimal::from(i * 10)).await }
    }))
    .await;

    let ids: Vec<_> = results.into_iter().map(|r| r.unwrap().id).collect();
    assert!(ids.iter().all(|id| *id == ids[0]));

    let rows = budgets::Entity::find()
        .filter(budgets::Column::Month.eq(6))
        .filter(budgets::Column::Year.eq(year))
        .all(&db)
        .await
        .unwrap();
    assert_eq!(rows.len(), 1);
}

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn test_schema_rejects_invalid_budget_rows() {
    let db = connect().await;
    let year = 2907;
    clear_year(&db, year).await;
    let repo = BudgetRepository::new(db);

    assert!(matches!(
        repo.create(13, year, dec!(1)).await,
        Err(StoreError::Backend(_))
    ));
    assert!(matches!(
        repo.create(1, year, dec!(-1)).await,
        Err(StoreError::Backend(_))
    ));
}
