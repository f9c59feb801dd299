//! Database seeder for Pocketbook development.
//!
//! Seeds a handful of categories, a batch of expenses dated in the current
//! month and a budget for that month. Running it twice leaves the existing
//! rows alone.
//!
//! Usage: cargo run --bin seeder

use std::sync::Arc;

use chrono::{Datelike, NaiveDate, Utc};
use rust_decimal::Decimal;
use tracing::info;
use tracing_subscriber::EnvFilter;

use pocketbook_core::budget::{BudgetError, BudgetInput, BudgetService};
use pocketbook_core::category::{Category, CategoryError, CategoryInput, CategoryService};
use pocketbook_core::expense::{CreateExpenseInput, ExpenseService, PaymentMode};
use pocketbook_db::{BudgetRepository, CategoryRepository, ExpenseRepository};
use pocketbook_shared::AppConfig;

const CATEGORY_NAMES: [&str; 5] = [
    "Food",
    "Transport",
    "Utilities",
    "Entertainment",
    "Healthcare",
];
const EXPENSE_COUNT: u32 = 10;
const MONTHLY_BUDGET: u32 = 5000;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "seeder=info,pocketbook=info".into());
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = AppConfig::load()?;
    let db = pocketbook_db::connect(&config.database).await?;
    pocketbook_db::run_migrations(&db).await?;

    let categories = Arc::new(CategoryRepository::new(db.clone()));
    let expenses = Arc::new(ExpenseRepository::new(db.clone()));
    let budgets = Arc::new(BudgetRepository::new(db));

    let category_service = CategoryService::new(Arc::clone(&categories));
    let expense_service =
        ExpenseService::new(Arc::clone(&expenses), categories, Arc::clone(&budgets));
    let budget_service = BudgetService::new(budgets, expenses);

    let today = Utc::now().date_naive();

    let (seeded, created) = seed_categories(&category_service).await?;
    if created {
        seed_expenses(&expense_service, &seeded, today).await?;
    } else {
        info!("Categories already present, skipping expenses");
    }
    seed_budget(&budget_service, today).await?;

    info!("Seeding complete");
    Ok(())
}

/// Creates the demo categories, returning them and whether any were new.
async fn seed_categories(
    service: &CategoryService<CategoryRepository>,
) -> anyhow::Result<(Vec<Category>, bool)> {
    let mut created = false;

    for name in CATEGORY_NAMES {
        let input = CategoryInput {
            name: name.to_string(),
        };
        match service.create(input).await {
            Ok(category) => {
                info!(id = %category.id, name, "Seeded category");
                created = true;
            }
            Err(CategoryError::DuplicateName(_)) => info!(name, "Category exists"),
            Err(e) => return Err(e.into()),
        }
    }

    let seeded = service
        .list()
        .await?
        .into_iter()
        .filter(|c| CATEGORY_NAMES.contains(&c.name.as_str()))
        .collect();

    Ok((seeded, created))
}

async fn seed_expenses(
    service: &ExpenseService<ExpenseRepository, CategoryRepository, BudgetRepository>,
    categories: &[Category],
    today: NaiveDate,
) -> anyhow::Result<()> {
    if categories.is_empty() {
        return Ok(());
    }

    for (i, category) in (0..EXPENSE_COUNT).zip(categories.iter().cycle()) {
        let payment_mode = if i % 2 == 0 {
            PaymentMode::Upi
        } else {
            PaymentMode::Cash
        };
        let expense_date =
            NaiveDate::from_ymd_opt(today.year(), today.month(), i % today.day() + 1)
                .unwrap_or(today);

        let expense = service
            .create(CreateExpenseInput {
                category_id: category.id,
                amount: Decimal::from(100 * (i + 1)),
                description: "Mock expense description".to_string(),
                payment_mode: payment_mode.to_string(),
                expense_date: Some(expense_date),
            })
            .await?;

        info!(id = %expense.id, amount = %expense.amount, "Seeded expense");
    }

    Ok(())
}

async fn seed_budget(
    service: &BudgetService<BudgetRepository, ExpenseRepository>,
    today: NaiveDate,
) -> anyhow::Result<()> {
    let input = BudgetInput {
        month: today.month().cast_signed(),
        year: today.year(),
        budget_amount: Decimal::from(MONTHLY_BUDGET),
    };

    match service.create(input).await {
        Ok(budget) => {
            info!(id = %budget.id, month = budget.month, year = budget.year, "Seeded budget");
        }
        Err(BudgetError::PeriodConflict { month, year }) => {
            info!(month, year, "Budget exists for current month");
        }
        Err(e) => return Err(e.into()),
    }

    Ok(())
}
