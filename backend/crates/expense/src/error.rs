//! Expense Error Types
//!
//! This module provides expense-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Expense-specific result type alias
pub type ExpenseResult<T> = Result<T, ExpenseError>;

/// Expense-specific error variants
///
/// These are domain-specific errors that map to appropriate HTTP status codes
/// and can be converted to `AppError` for unified error handling.
#[derive(Debug, Error)]
pub enum ExpenseError {
    /// Missing or malformed input
    #[error("{0}")]
    Validation(String),

    /// No such expense for this owner. An expense owned by someone else
    /// reports the same way.
    #[error("Expense not found or user not authorized")]
    NotFound,

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ExpenseError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.kind().status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            ExpenseError::Validation(_) => ErrorKind::BadRequest,
            ExpenseError::NotFound => ErrorKind::NotFound,
            ExpenseError::Database(_) | ExpenseError::Internal(_) => {
                ErrorKind::InternalServerError
            }
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            ExpenseError::Database(e) => {
                tracing::error!(error = %e, "Expense database error");
            }
            ExpenseError::Internal(msg) => {
                tracing::error!(message = %msg, "Expense internal error");
            }
            _ => {
                tracing::debug!(error = %self, "Expense error");
            }
        }
    }
}

impl From<ExpenseError> for AppError {
    fn from(err: ExpenseError) -> Self {
        let kind = err.kind();
        // Store failures stay in the log
        if kind.is_server_error() {
            AppError::new(kind, "Server error")
        } else {
            AppError::new(kind, err.to_string())
        }
    }
}

impl IntoResponse for ExpenseError {
    fn into_response(self) -> Response {
        self.log();
        AppError::from(self).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            ExpenseError::Validation("x".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(ExpenseError::NotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            ExpenseError::Internal("x".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_server_errors_are_not_leaked() {
        let app: AppError = ExpenseError::Internal("connection reset by peer".into()).into();
        assert_eq!(app.message(), "Server error");

        let app: AppError = ExpenseError::NotFound.into();
        assert_eq!(app.message(), "Expense not found or user not authorized");
    }
}
