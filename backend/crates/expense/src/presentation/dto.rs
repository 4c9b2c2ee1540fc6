//! API DTOs (Data Transfer Objects)

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};

use crate::application::{AddExpenseInput, UpdateExpenseInput};
use crate::domain::entities::Expense;
use crate::domain::services::{CategoryTotal, ExpenseSummary, FilterParams};

/// Expense as returned by every endpoint
///
/// `amount` serializes as a decimal string with two places, e.g. `"12.50"`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpenseResponse {
    pub expenseid: i64,
    pub amount: Decimal,
    pub category: String,
    pub date: NaiveDate,
    pub description: Option<String>,
    pub userid: i64,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

impl From<Expense> for ExpenseResponse {
    fn from(expense: Expense) -> Self {
        Self {
            expenseid: expense.expense_id.get(),
            amount: expense.amount.value(),
            category: expense.category.to_string(),
            date: expense.date,
            description: expense.description,
            userid: expense.user_id.get(),
            created_at: expense.created_at,
            updated_at: expense.updated_at,
        }
    }
}

/// Query for GET /api/expenses and GET /api/expenses/summary
///
/// Kept as strings so that validation messages come from the domain.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseQuery {
    pub category: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub month: Option<String>,
    pub year: Option<String>,
}

impl From<ExpenseQuery> for FilterParams {
    fn from(query: ExpenseQuery) -> Self {
        Self {
            category: query.category,
            start_date: query.start_date,
            end_date: query.end_date,
            month: query.month,
            year: query.year,
        }
    }
}

/// Request for POST /api/expenses
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateExpenseRequest {
    pub amount: Option<Decimal>,
    pub category: Option<String>,
    pub date: Option<String>,
    pub description: Option<String>,
}

impl From<CreateExpenseRequest> for AddExpenseInput {
    fn from(req: CreateExpenseRequest) -> Self {
        Self {
            amount: req.amount,
            category: req.category,
            date: req.date,
            description: req.description,
        }
    }
}

/// Request for PUT /api/expenses/{id}
///
/// A missing key stays `None`; an explicit `null` becomes `Some(None)`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateExpenseRequest {
    #[serde(default, deserialize_with = "deserialize_some")]
    pub amount: Option<Option<Decimal>>,
    #[serde(default, deserialize_with = "deserialize_some")]
    pub category: Option<Option<String>>,
    #[serde(default, deserialize_with = "deserialize_some")]
    pub date: Option<Option<String>>,
    #[serde(default, deserialize_with = "deserialize_some")]
    pub description: Option<Option<String>>,
}

impl From<UpdateExpenseRequest> for UpdateExpenseInput {
    fn from(req: UpdateExpenseRequest) -> Self {
        Self {
            amount: req.amount,
            category: req.category,
            date: req.date,
            description: req.description,
        }
    }
}

fn deserialize_some<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    T::deserialize(deserializer).map(Some)
}

/// Response for DELETE /api/expenses/{id}
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteExpenseResponse {
    pub expenseid: i64,
    pub message: String,
}

/// Response for GET /api/expenses/summary
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryResponse {
    pub count: usize,
    pub total: Decimal,
    pub by_category: Vec<CategoryTotalResponse>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryTotalResponse {
    pub category: String,
    pub total: Decimal,
}

impl From<ExpenseSummary> for SummaryResponse {
    fn from(summary: ExpenseSummary) -> Self {
        Self {
            count: summary.count,
            total: summary.total,
            by_category: summary
                .by_category
                .into_iter()
                .map(|CategoryTotal { category, total }| CategoryTotalResponse {
                    category: category.to_string(),
                    total,
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_update_request_distinguishes_missing_and_null() {
        let req: UpdateExpenseRequest =
            serde_json::from_value(json!({ "description": null, "category": "Food" })).unwrap();

        assert!(req.amount.is_none());
        assert!(req.date.is_none());
        assert_eq!(req.description, Some(None));
        assert_eq!(req.category, Some(Some("Food".to_string())));
    }

    #[test]
    fn test_amount_accepts_number_or_string() {
        let from_number: CreateExpenseRequest =
            serde_json::from_value(json!({ "amount": 12.5 })).unwrap();
        let from_string: CreateExpenseRequest =
            serde_json::from_value(json!({ "amount": "12.5" })).unwrap();

        assert_eq!(from_number.amount, from_string.amount);
    }

    #[test]
    fn test_query_uses_camel_case() {
        let query: ExpenseQuery =
            serde_json::from_value(json!({ "startDate": "2024-01-01", "endDate": "2024-01-31" }))
                .unwrap();
        assert_eq!(query.start_date.as_deref(), Some("2024-01-01"));
        assert_eq!(query.end_date.as_deref(), Some("2024-01-31"));
    }
}
