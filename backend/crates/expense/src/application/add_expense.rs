//! Add Expense Use Case

use crate::domain::entities::{Expense, NewExpense};
use crate::domain::repository::ExpenseRepository;
use crate::domain::value_objects::{
    Amount, Category, UserId, normalize_description, parse_date,
};
use crate::error::{ExpenseError, ExpenseResult};
use rust_decimal::Decimal;
use std::sync::Arc;

/// Input for add expense
#[derive(Debug, Clone, Default)]
pub struct AddExpenseInput {
    pub amount: Option<Decimal>,
    pub category: Option<String>,
    pub date: Option<String>,
    pub description: Option<String>,
}

/// Add Expense Use Case
pub struct AddExpenseUseCase<R>
where
    R: ExpenseRepository,
{
    repo: Arc<R>,
}

impl<R> AddExpenseUseCase<R>
where
    R: ExpenseRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, owner: UserId, input: AddExpenseInput) -> ExpenseResult<Expense> {
        let (Some(amount), Some(category), Some(date)) = (
            input.amount,
            input.category.filter(|c| !c.trim().is_empty()),
            input.date.filter(|d| !d.trim().is_empty()),
        ) else {
            return Err(ExpenseError::Validation(
                "Please provide amount, category, and date".to_string(),
            ));
        };

        let new_expense = NewExpense {
            user_id: owner,
            amount: Amount::new(amount)?,
            category: Category::new(category)?,
            date: parse_date("date", &date)?,
            description: normalize_description(input.description),
        };

        let expense = self.repo.create(&new_expense).await?;

        tracing::info!(
            user_id = %owner,
            expense_id = %expense.expense_id,
            "Expense added"
        );

        Ok(expense)
    }
}
