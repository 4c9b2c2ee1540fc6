//! In-memory expense repository for tests

use crate::domain::entities::{Expense, NewExpense};
use crate::domain::repository::ExpenseRepository;
use crate::domain::services::ExpenseFilter;
use crate::domain::value_objects::{ExpenseId, UserId};
use crate::error::ExpenseResult;
use chrono::Utc;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Default)]
struct Store {
    next_id: i64,
    expenses: BTreeMap<ExpenseId, Expense>,
}

/// Expense repository backed by a `BTreeMap`
///
/// Clones share the same store.
#[derive(Clone, Default)]
pub struct InMemoryExpenseRepository {
    inner: Arc<Mutex<Store>>,
}

impl InMemoryExpenseRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored expenses across all owners
    pub async fn count(&self) -> usize {
        self.inner.lock().await.expenses.len()
    }
}

impl ExpenseRepository for InMemoryExpenseRepository {
    async fn list(&self, owner: UserId, filter: &ExpenseFilter) -> ExpenseResult<Vec<Expense>> {
        let store = self.inner.lock().await;
        let mut expenses: Vec<Expense> = store
            .expenses
            .values()
            .filter(|e| e.user_id == owner && filter.matches(e))
            .cloned()
            .collect();

        expenses.sort_by(|a, b| {
            b.date
                .cmp(&a.date)
                .then_with(|| b.expense_id.cmp(&a.expense_id))
        });
        Ok(expenses)
    }

    async fn create(&self, expense: &NewExpense) -> ExpenseResult<Expense> {
        let mut store = self.inner.lock().await;
        store.next_id += 1;

        let now = Utc::now();
        let expense = Expense {
            expense_id: ExpenseId::new(store.next_id),
            user_id: expense.user_id,
            amount: expense.amount,
            category: expense.category.clone(),
            date: expense.date,
            description: expense.description.clone(),
            created_at: now,
            updated_at: now,
        };
        store.expenses.insert(expense.expense_id, expense.clone());
        Ok(expense)
    }

    async fn find(&self, owner: UserId, expense_id: ExpenseId) -> ExpenseResult<Option<Expense>> {
        let store = self.inner.lock().await;
        Ok(store
            .expenses
            .get(&expense_id)
            .filter(|e| e.user_id == owner)
            .cloned())
    }

    async fn update(&self, expense: &Expense) -> ExpenseResult<Option<Expense>> {
        let mut store = self.inner.lock().await;
        let Some(stored) = store
            .expenses
            .get_mut(&expense.expense_id)
            .filter(|e| e.user_id == expense.user_id)
        else {
            return Ok(None);
        };

        *stored = Expense {
            created_at: stored.created_at,
            updated_at: Utc::now(),
            ..expense.clone()
        };
        Ok(Some(stored.clone()))
    }

    async fn delete(&self, owner: UserId, expense_id: ExpenseId) -> ExpenseResult<bool> {
        let mut store = self.inner.lock().await;
        let owned = store
            .expenses
            .get(&expense_id)
            .is_some_and(|e| e.user_id == owner);

        if owned {
            store.expenses.remove(&expense_id);
        }
        Ok(owned)
    }
}
