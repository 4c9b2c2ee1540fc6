//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.
//!
//! Every method is scoped to an owner; there is no lookup by id alone.

use crate::domain::entities::{Expense, NewExpense};
use crate::domain::services::ExpenseFilter;
use crate::domain::value_objects::{ExpenseId, UserId};
use crate::error::ExpenseResult;

/// Expense repository trait
#[trait_variant::make(ExpenseRepository: Send)]
pub trait LocalExpenseRepository {
    /// Owner's expenses matching `filter`, newest date first
    async fn list(&self, owner: UserId, filter: &ExpenseFilter) -> ExpenseResult<Vec<Expense>>;

    /// Insert and return the stored record
    async fn create(&self, expense: &NewExpense) -> ExpenseResult<Expense>;

    /// Find one of the owner's expenses
    async fn find(&self, owner: UserId, expense_id: ExpenseId) -> ExpenseResult<Option<Expense>>;

    /// Overwrite the mutable fields of `expense`, scoped to `expense.user_id`
    ///
    /// Returns `None` if the row no longer exists for that owner.
    async fn update(&self, expense: &Expense) -> ExpenseResult<Option<Expense>>;

    /// Delete one of the owner's expenses; `false` if nothing was deleted
    async fn delete(&self, owner: UserId, expense_id: ExpenseId) -> ExpenseResult<bool>;
}
