//! In-memory store fakes for service tests.

use std::collections::BTreeMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use chrono::Utc;
use pocketbook_shared::types::{BudgetId, CategoryId, ExpenseId};
use rust_decimal::Decimal;

use crate::budget::period::month_bounds;
use crate::budget::{Budget, BudgetStore};
use crate::category::{Category, CategoryStore};
use crate::expense::{Expense, ExpenseFilter, ExpenseStore, NewExpense};
use crate::store::StoreError;

fn next_id<V>(rows: &BTreeMap<i32, V>) -> i32 {
    rows.keys().next_back().map_or(1, |last| last + 1)
}

#[derive(Default)]
pub struct InMemoryCategories {
    rows: Mutex<BTreeMap<i32, Category>>,
}

impl InMemoryCategories {
    pub fn insert(&self, name: &str) -> CategoryId {
        let mut rows = self.rows.lock().unwrap();
        let id = CategoryId::new(next_id(&rows));
        rows.insert(
            id.into_inner(),
            Category {
                id,
                name: name.to_string(),
                created_at: Utc::now(),
            },
        );
        id
    }
}

impl CategoryStore for InMemoryCategories {
    async fn create(&self, name: String) -> Result<Category, StoreError> {
        let mut rows = self.rows.lock().unwrap();
        if rows.values().any(|c| c.name == name) {
            return Err(StoreError::Conflict(format!("categories.name = {name}")));
        }
        let category = Category {
            id: CategoryId::new(next_id(&rows)),
            name,
            created_at: Utc::now(),
        };
        rows.insert(category.id.into_inner(), category.clone());
        Ok(category)
    }

    async fn find_by_id(&self, id: CategoryId) -> Result<Option<Category>, StoreError> {
        Ok(self.rows.lock().unwrap().get(&id.into_inner()).cloned())
    }

    async fn list(&self) -> Result<Vec<Category>, StoreError> {
        let mut all: Vec<Category> = self.rows.lock().unwrap().values().cloned().collect();
        all.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(all)
    }

    async fn update(&self, id: CategoryId, name: String) -> Result<Category, StoreError> {
        let mut rows = self.rows.lock().unwrap();
        if rows.values().any(|c| c.name == name && c.id != id) {
            return Err(StoreError::Conflict(format!("categories.name = {name}")));
        }
        let category = rows.get_mut(&id.into_inner()).ok_or(StoreError::NotFound)?;
        category.name = name;
        Ok(category.clone())
    }

    async fn delete(&self, id: CategoryId) -> Result<bool, StoreError> {
        Ok(self.rows.lock().unwrap().remove(&id.into_inner()).is_some())
    }
}

/// Expense fake with switches for the failure paths the services must absorb.
#[derive(Default)]
pub struct InMemoryExpenses {
    rows: Mutex<BTreeMap<i32, Expense>>,
    fail_totals: AtomicBool,
    reject_references: AtomicBool,
}

impl InMemoryExpenses {
    /// Make `total_for_month` return a backend error.
    pub fn fail_totals(&self) {
        self.fail_totals.store(true, Ordering::SeqCst);
    }

    /// Make writes fail as if the category row had disappeared.
    pub fn reject_references(&self) {
        self.reject_references.store(true, Ordering::SeqCst);
    }

    pub fn count(&self) -> usize {
        self.rows.lock().unwrap().len()
    }
}

impl ExpenseStore for InMemoryExpenses {
    async fn create(&self, input: NewExpense) -> Result<Expense, StoreError> {
        if self.reject_references.load(Ordering::SeqCst) {
            return Err(StoreError::MissingReference("expenses.category_id".into()));
        }
        let mut rows = self.rows.lock().unwrap();
        let expense = Expense {
            id: ExpenseId::new(next_id(&rows)),
            category_id: input.category_id,
            amount: input.amount,
            description: input.description,
            payment_mode: input.payment_mode,
            expense_date: input.expense_date,
            created_at: Utc::now(),
            warning: None,
        };
        rows.insert(expense.id.into_inner(), expense.clone());
        Ok(expense)
    }

    async fn find_by_id(&self, id: ExpenseId) -> Result<Option<Expense>, StoreError> {
        Ok(self.rows.lock().unwrap().get(&id.into_inner()).cloned())
    }

    async fn list(&self, filter: ExpenseFilter) -> Result<Vec<Expense>, StoreError> {
        let mut matching: Vec<Expense> = self
            .rows
            .lock()
            .unwrap()
            .values()
            .filter(|e| filter.matches(e))
            .cloned()
            .collect();
        matching.sort_by(|a, b| {
            b.expense_date
                .cmp(&a.expense_date)
                .then(b.created_at.cmp(&a.created_at))
                .then(b.id.cmp(&a.id))
        });
        Ok(matching)
    }

    async fn update(&self, expense: Expense) -> Result<Expense, StoreError> {
        if self.reject_references.load(Ordering::SeqCst) {
            return Err(StoreError::MissingReference("expenses.category_id".into()));
        }
        let mut rows = self.rows.lock().unwrap();
        let stored = rows
            .get_mut(&expense.id.into_inner())
            .ok_or(StoreError::NotFound)?;
        *stored = Expense {
            warning: None,
            created_at: stored.created_at,
            ..expense
        };
        Ok(stored.clone())
    }

    async fn delete(&self, id: ExpenseId) -> Result<bool, StoreError> {
        Ok(self.rows.lock().unwrap().remove(&id.into_inner()).is_some())
    }

    async fn total_for_month(&self, month: i32, year: i32) -> Result<Decimal, StoreError> {
        if self.fail_totals.load(Ordering::SeqCst) {
            return Err(StoreError::backend("connection reset"));
        }
        let Some((start, end)) = month_bounds(month, year) else {
            return Ok(Decimal::ZERO);
        };
        Ok(self
            .rows
            .lock()
            .unwrap()
            .values()
            .filter(|e| e.expense_date >= start && e.expense_date < end)
            .map(|e| e.amount)
            .sum())
    }
}

/// Budget fake. `vanish_on_update` simulates a row deleted between read and write.
#[derive(Default)]
pub struct InMemoryBudgets {
    rows: Mutex<BTreeMap<i32, Budget>>,
    vanish_on_update: AtomicBool,
}

impl InMemoryBudgets {
    pub fn vanish_on_update(&self) {
        self.vanish_on_update.store(true, Ordering::SeqCst);
    }

    pub fn count(&self) -> usize {
        self.rows.lock().unwrap().len()
    }
}

impl BudgetStore for InMemoryBudgets {
    async fn create(&self, month: i32, year: i32, amount: Decimal) -> Result<Budget, StoreError> {
        let mut rows = self.rows.lock().unwrap();
        if rows.values().any(|b| b.month == month && b.year == year) {
            return Err(StoreError::Conflict(format!("budgets.(month, year) = ({month}, {year})")));
        }
        let now = Utc::now();
        let budget = Budget {
            id: BudgetId::new(next_id(&rows)),
            month,
            year,
            budget_amount: amount,
            created_at: now,
            updated_at: now,
        };
        rows.insert(budget.id.into_inner(), budget.clone());
        Ok(budget)
    }

    async fn find_by_id(&self, id: BudgetId) -> Result<Option<Budget>, StoreError> {
        Ok(self.rows.lock().unwrap().get(&id.into_inner()).cloned())
    }

    async fn list(&self) -> Result<Vec<Budget>, StoreError> {
        let mut all: Vec<Budget> = self.rows.lock().unwrap().values().cloned().collect();
        all.sort_by(|a, b| b.year.cmp(&a.year).then(b.month.cmp(&a.month)));
        Ok(all)
    }

    async fn find_by_period(&self, month: i32, year: i32) -> Result<Option<Budget>, StoreError> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .values()
            .find(|b| b.month == month && b.year == year)
            .cloned())
    }

    async fn update_amount(&self, id: BudgetId, amount: Decimal) -> Result<Budget, StoreError> {
        let mut rows = self.rows.lock().unwrap();
        if self.vanish_on_update.swap(false, Ordering::SeqCst) {
            rows.remove(&id.into_inner());
        }
        let budget = rows.get_mut(&id.into_inner()).ok_or(StoreError::NotFound)?;
        budget.budget_amount = amount;
        budget.updated_at = Utc::now();
        Ok(budget.clone())
    }

    async fn upsert(&self, month: i32, year: i32, amount: Decimal) -> Result<Budget, StoreError> {
        let mut rows = self.rows.lock().unwrap();
        if let Some(existing) = rows
            .values_mut()
            .find(|b| b.month == month && b.year == year)
        {
            existing.budget_amount = amount;
            existing.updated_at = Utc::now();
            return Ok(existing.clone());
        }
        let now = Utc::now();
        let budget = Budget {
            id: BudgetId::new(next_id(&rows)),
            month,
            year,
            budget_amount: amount,
            created_at: now,
            updated_at: now,
        };
        rows.insert(budget.id.into_inner(), budget.clone());
        Ok(budget)
    }

    async fn delete(&self, id: BudgetId) -> Result<bool, StoreError> {
        Ok(self.rows.lock().unwrap().remove(&id.into_inner()).is_some())
    }
}
