//! Domain Entities
//!
//! Core business entities for the expense domain.

use chrono::{DateTime, NaiveDate, Utc};

use crate::domain::value_objects::{Amount, Category, ExpenseId, UserId};

/// Expense entity - a single spending record owned by one user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expense {
    pub expense_id: ExpenseId,
    pub user_id: UserId,
    pub amount: Amount,
    pub category: Category,
    pub date: NaiveDate,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Expense to be inserted; the store assigns id and timestamps
#[derive(Debug, Clone)]
pub struct NewExpense {
    pub user_id: UserId,
    pub amount: Amount,
    pub category: Category,
    pub date: NaiveDate,
    pub description: Option<String>,
}

/// Partial update
///
/// `None` leaves a field unchanged. For `description`, `Some(None)` clears it.
#[derive(Debug, Clone, Default)]
pub struct ExpensePatch {
    pub amount: Option<Amount>,
    pub category: Option<Category>,
    pub date: Option<NaiveDate>,
    pub description: Option<Option<String>>,
}

impl ExpensePatch {
    /// Whether applying this patch would change nothing
    pub fn is_empty(&self) -> bool {
        self.amount.is_none()
            && self.category.is_none()
            && self.date.is_none()
            && self.description.is_none()
    }

    /// Apply the supplied fields to `expense`
    pub fn apply(self, expense: &mut Expense) {
        if let Some(amount) = self.amount {
            expense.amount = amount;
        }
        if let Some(category) = self.category {
            expense.category = category;
        }
        if let Some(date) = self.date {
            expense.date = date;
        }
        if let Some(description) = self.description {
            expense.description = description;
        }
    }
}
