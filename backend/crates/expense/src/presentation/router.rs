//! Expense Router

use crate::domain::repository::ExpenseRepository;
use crate::infra::postgres::PgExpenseRepository;
use crate::presentation::handlers::{self, ExpenseAppState};
use auth::{AuthConfig, AuthMiddlewareState, require_bearer};
use axum::{Router, middleware, routing::get};
use std::sync::Arc;

/// Create the Expense router with PostgreSQL repository
pub fn expense_router(repo: PgExpenseRepository, auth_config: Arc<AuthConfig>) -> Router {
    expense_router_generic(repo, auth_config)
}

/// Create a generic Expense router for any repository implementation
///
/// Every route requires a bearer token.
pub fn expense_router_generic<R>(repo: R, auth_config: Arc<AuthConfig>) -> Router
where
    R: ExpenseRepository + Clone + Send + Sync + 'static,
{
    let state = ExpenseAppState {
        repo: Arc::new(repo),
    };

    Router::new()
        .route(
            "/",
            get(handlers::list_expenses::<R>).post(handlers::add_expense::<R>),
        )
        .route("/summary", get(handlers::summarize_expenses::<R>))
        .route(
            "/{id}",
            axum::routing::put(handlers::update_expense::<R>)
                .delete(handlers::delete_expense::<R>),
        )
        .route_layer(middleware::from_fn_with_state(
            AuthMiddlewareState::new(auth_config),
            require_bearer,
        ))
        .with_state(state)
}
