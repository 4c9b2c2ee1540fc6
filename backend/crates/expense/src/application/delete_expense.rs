//! Delete Expense Use Case

use crate::domain::repository::ExpenseRepository;
use crate::domain::value_objects::{ExpenseId, UserId};
use crate::error::{ExpenseError, ExpenseResult};
use std::sync::Arc;

/// Delete Expense Use Case
pub struct DeleteExpenseUseCase<R>
where
    R: ExpenseRepository,
{
    repo: Arc<R>,
}

impl<R> DeleteExpenseUseCase<R>
where
    R: ExpenseRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Permanently delete; repeating the call reports `NotFound`
    pub async fn execute(&self, owner: UserId, expense_id: ExpenseId) -> ExpenseResult<()> {
        if !self.repo.delete(owner, expense_id).await? {
            return Err(ExpenseError::NotFound);
        }

        tracing::info!(
            user_id = %owner,
            expense_id = %expense_id,
            "Expense deleted"
        );

        Ok(())
    }
}
