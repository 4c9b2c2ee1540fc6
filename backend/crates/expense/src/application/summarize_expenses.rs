//! Summarize Expenses Use Case
//!
//! Same filter as listing, rolled up per category.

use crate::application::list_expenses::ListExpensesUseCase;
use crate::domain::repository::ExpenseRepository;
use crate::domain::services::{ExpenseSummary, FilterParams};
use crate::domain::value_objects::UserId;
use crate::error::ExpenseResult;
use std::sync::Arc;

pub struct SummarizeExpensesUseCase<R>
where
    R: ExpenseRepository,
{
    repo: Arc<R>,
}

impl<R> SummarizeExpensesUseCase<R>
where
    R: ExpenseRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, owner: UserId, params: FilterParams) -> ExpenseResult<ExpenseSummary> {
        let expenses = ListExpensesUseCase::new(self.repo.clone())
            .execute(owner, params)
            .await?;

        Ok(ExpenseSummary::from_expenses(&expenses))
    }
}
