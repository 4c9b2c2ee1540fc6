//! List Expenses Use Case

use crate::domain::entities::Expense;
use crate::domain::repository::ExpenseRepository;
use crate::domain::services::{ExpenseFilter, FilterParams};
use crate::domain::value_objects::UserId;
use crate::error::ExpenseResult;
use std::sync::Arc;

/// List Expenses Use Case
pub struct ListExpensesUseCase<R>
where
    R: ExpenseRepository,
{
    repo: Arc<R>,
}

impl<R> ListExpensesUseCase<R>
where
    R: ExpenseRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, owner: UserId, params: FilterParams) -> ExpenseResult<Vec<Expense>> {
        let filter = ExpenseFilter::from_params(params)?;

        if filter.range.is_empty() {
            return Ok(Vec::new());
        }

        self.repo.list(owner, &filter).await
    }
}
