//! PostgreSQL Repository Implementations

use crate::domain::entities::{Expense, NewExpense};
use crate::domain::repository::ExpenseRepository;
use crate::domain::services::ExpenseFilter;
use crate::domain::value_objects::{Amount, Category, ExpenseId, UserId};
use crate::error::{ExpenseError, ExpenseResult};
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;

/// PostgreSQL-backed repository
#[derive(Clone)]
pub struct PgExpenseRepository {
    pool: PgPool,
}

impl PgExpenseRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl ExpenseRepository for PgExpenseRepository {
    async fn list(&self, owner: UserId, filter: &ExpenseFilter) -> ExpenseResult<Vec<Expense>> {
        // Absent filters bind as NULL and drop out of the predicate
        let rows = sqlx::query_as::<_, ExpenseRow>(
            r#"
            SELECT
                expenseid,
                userid,
                amount,
                category,
                date,
                description,
                created_at,
                updated_at
            FROM expenses
            WHERE userid = $1
              AND ($2::TEXT IS NULL OR category = $2)
              AND ($3::DATE IS NULL OR date >= $3)
              AND ($4::DATE IS NULL OR date <= $4)
            ORDER BY date DESC, expenseid DESC
            "#,
        )
        .bind(owner.get())
        .bind(filter.category.as_deref())
        .bind(filter.range.start)
        .bind(filter.range.end)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(ExpenseRow::into_expense).collect()
    }

    async fn create(&self, expense: &NewExpense) -> ExpenseResult<Expense> {
        let row = sqlx::query_as::<_, ExpenseRow>(
            r#"
            INSERT INTO expenses (
                userid,
                amount,
                category,
                date,
                description
            ) VALUES ($1, $2, $3, $4, $5)
            RETURNING
                expenseid,
                userid,
                amount,
                category,
                date,
                description,
                created_at,
                updated_at
            "#,
        )
        .bind(expense.user_id.get())
        .bind(expense.amount.value())
        .bind(expense.category.as_str())
        .bind(expense.date)
        .bind(expense.description.as_deref())
        .fetch_one(&self.pool)
        .await?;

        row.into_expense()
    }

    async fn find(&self, owner: UserId, expense_id: ExpenseId) -> ExpenseResult<Option<Expense>> {
        let row = sqlx::query_as::<_, ExpenseRow>(
            r#"
            SELECT
                expenseid,
                userid,
                amount,
                category,
                date,
                description,
                created_at,
                updated_at
            FROM expenses
            WHERE expenseid = $1 AND userid = $2
            "#,
        )
        .bind(expense_id.get())
        .bind(owner.get())
        .fetch_optional(&self.pool)
        .await?;

        row.map(ExpenseRow::into_expense).transpose()
    }

    async fn update(&self, expense: &Expense) -> ExpenseResult<Option<Expense>> {
        let row = sqlx::query_as::<_, ExpenseRow>(
            r#"
            UPDATE expenses
            SET amount = $3,
                category = $4,
                date = $5,
                description = $6,
                updated_at = NOW()
            WHERE expenseid = $1 AND userid = $2
            RETURNING
                expenseid,
                userid,
                amount,
                category,
                date,
                description,
                created_at,
                updated_at
            "#,
        )
        .bind(expense.expense_id.get())
        .bind(expense.user_id.get())
        .bind(expense.amount.value())
        .bind(expense.category.as_str())
        .bind(expense.date)
        .bind(expense.description.as_deref())
        .fetch_optional(&self.pool)
        .await?;

        row.map(ExpenseRow::into_expense).transpose()
    }

    async fn delete(&self, owner: UserId, expense_id: ExpenseId) -> ExpenseResult<bool> {
        let deleted = sqlx::query("DELETE FROM expenses WHERE expenseid = $1 AND userid = $2")
            .bind(expense_id.get())
            .bind(owner.get())
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(deleted > 0)
    }
}

// Internal row types for sqlx mapping
#[derive(sqlx::FromRow)]
struct ExpenseRow {
    expenseid: i64,
    userid: i64,
    amount: Decimal,
    category: String,
    date: NaiveDate,
    description: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl ExpenseRow {
    fn into_expense(self) -> ExpenseResult<Expense> {
        let amount = Amount::new(self.amount)
            .map_err(|e| ExpenseError::Internal(format!("Invalid stored amount: {}", e)))?;
        let category = Category::new(&self.category)
            .map_err(|e| ExpenseError::Internal(format!("Invalid stored category: {}", e)))?;

        Ok(Expense {
            expense_id: ExpenseId::new(self.expenseid),
            user_id: UserId::new(self.userid),
            amount,
            category,
            date: self.date,
            description: self.description,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}
