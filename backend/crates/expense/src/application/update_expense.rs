//! Update Expense Use Case
//!
//! Partial update: only supplied fields change.

use crate::domain::entities::{Expense, ExpensePatch};
use crate::domain::repository::ExpenseRepository;
use crate::domain::value_objects::{
    Amount, Category, ExpenseId, UserId, normalize_description, parse_date,
};
use crate::error::{ExpenseError, ExpenseResult};
use rust_decimal::Decimal;
use std::sync::Arc;

/// Input for update expense
///
/// Outer `None`: field not sent. `Some(None)`: field sent as `null`, which
/// clears `description` and is rejected for the required fields.
#[derive(Debug, Clone, Default)]
pub struct UpdateExpenseInput {
    pub amount: Option<Option<Decimal>>,
    pub category: Option<Option<String>>,
    pub date: Option<Option<String>>,
    pub description: Option<Option<String>>,
}

impl UpdateExpenseInput {
    fn into_patch(self) -> ExpenseResult<ExpensePatch> {
        Ok(ExpensePatch {
            amount: self
                .amount
                .map(|v| required("amount", v).and_then(Amount::new))
                .transpose()?,
            category: self
                .category
                .map(|v| required("category", v).and_then(Category::new))
                .transpose()?,
            date: self
                .date
                .map(|v| required("date", v).and_then(|d| parse_date("date", &d)))
                .transpose()?,
            description: self.description.map(normalize_description),
        })
    }
}

fn required<T>(field: &str, value: Option<T>) -> ExpenseResult<T> {
    value.ok_or_else(|| ExpenseError::Validation(format!("{} cannot be null", field)))
}

/// Update Expense Use Case
pub struct UpdateExpenseUseCase<R>
where
    R: ExpenseRepository,
{
    repo: Arc<R>,
}

impl<R> UpdateExpenseUseCase<R>
where
    R: ExpenseRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(
        &self,
        owner: UserId,
        expense_id: ExpenseId,
        input: UpdateExpenseInput,
    ) -> ExpenseResult<Expense> {
        // Ownership before validation, so a foreign id never reveals anything
        let mut expense = self
            .repo
            .find(owner, expense_id)
            .await?
            .ok_or(ExpenseError::NotFound)?;

        let patch = input.into_patch()?;
        if patch.is_empty() {
            return Ok(expense);
        }

        patch.apply(&mut expense);

        let expense = self
            .repo
            .update(&expense)
            .await?
            .ok_or(ExpenseError::NotFound)?;

        tracing::info!(
            user_id = %owner,
            expense_id = %expense_id,
            "Expense updated"
        );

        Ok(expense)
    }
}
