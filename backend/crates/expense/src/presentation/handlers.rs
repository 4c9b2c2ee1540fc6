//! HTTP Handlers

use crate::application::{
    AddExpenseUseCase, DeleteExpenseUseCase, ListExpensesUseCase, SummarizeExpensesUseCase,
    UpdateExpenseUseCase,
};
use crate::domain::repository::ExpenseRepository;
use crate::domain::value_objects::ExpenseId;
use crate::error::{ExpenseError, ExpenseResult};
use crate::presentation::dto::{
    CreateExpenseRequest, DeleteExpenseResponse, ExpenseQuery, ExpenseResponse, SummaryResponse,
    UpdateExpenseRequest,
};
use auth::CurrentUser;
use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use kernel::extract::{ApiJson, ApiPath, ApiQuery};
use std::sync::Arc;

/// Shared state for expense handlers
#[derive(Clone)]
pub struct ExpenseAppState<R>
where
    R: ExpenseRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
}

/// A path id that is not a number names no expense
fn parse_expense_id(raw: &str) -> ExpenseResult<ExpenseId> {
    raw.parse().map_err(|_| ExpenseError::NotFound)
}

/// GET /api/expenses
pub async fn list_expenses<R>(
    State(state): State<ExpenseAppState<R>>,
    CurrentUser(user_id): CurrentUser,
    ApiQuery(query): ApiQuery<ExpenseQuery>,
) -> ExpenseResult<Json<Vec<ExpenseResponse>>>
where
    R: ExpenseRepository + Clone + Send + Sync + 'static,
{
    let expenses = ListExpensesUseCase::new(state.repo.clone())
        .execute(user_id, query.into())
        .await?;

    Ok(Json(expenses.into_iter().map(ExpenseResponse::from).collect()))
}

/// GET /api/expenses/summary
pub async fn summarize_expenses<R>(
    State(state): State<ExpenseAppState<R>>,
    CurrentUser(user_id): CurrentUser,
    ApiQuery(query): ApiQuery<ExpenseQuery>,
) -> ExpenseResult<Json<SummaryResponse>>
where
    R: ExpenseRepository + Clone + Send + Sync + 'static,
{
    let summary = SummarizeExpensesUseCase::new(state.repo.clone())
        .execute(user_id, query.into())
        .await?;

    Ok(Json(summary.into()))
}

/// POST /api/expenses
pub async fn add_expense<R>(
    State(state): State<ExpenseAppState<R>>,
    CurrentUser(user_id): CurrentUser,
    ApiJson(req): ApiJson<CreateExpenseRequest>,
) -> ExpenseResult<(StatusCode, Json<ExpenseResponse>)>
where
    R: ExpenseRepository + Clone + Send + Sync + 'static,
{
    let expense = AddExpenseUseCase::new(state.repo.clone())
        .execute(user_id, req.into())
        .await?;

    Ok((StatusCode::CREATED, Json(expense.into())))
}

/// PUT /api/expenses/{id}
pub async fn update_expense<R>(
    State(state): State<ExpenseAppState<R>>,
    CurrentUser(user_id): CurrentUser,
    ApiPath(id): ApiPath<String>,
    ApiJson(req): ApiJson<UpdateExpenseRequest>,
) -> ExpenseResult<Json<ExpenseResponse>>
where
    R: ExpenseRepository + Clone + Send + Sync + 'static,
{
    let expense_id = parse_expense_id(&id)?;

    let expense = UpdateExpenseUseCase::new(state.repo.clone())
        .execute(user_id, expense_id, req.into())
        .await?;

    Ok(Json(expense.into()))
}

/// DELETE /api/expenses/{id}
pub async fn delete_expense<R>(
    State(state): State<ExpenseAppState<R>>,
    CurrentUser(user_id): CurrentUser,
    ApiPath(id): ApiPath<String>,
) -> ExpenseResult<Json<DeleteExpenseResponse>>
where
    R: ExpenseRepository + Clone + Send + Sync + 'static,
{
    let expense_id = parse_expense_id(&id)?;

    DeleteExpenseUseCase::new(state.repo.clone())
        .execute(user_id, expense_id)
        .await?;

    Ok(Json(DeleteExpenseResponse {
        expenseid: expense_id.get(),
        message: "Expense deleted successfully".to_string(),
    }))
}
