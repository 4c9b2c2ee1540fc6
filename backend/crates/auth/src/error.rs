//! Auth Error Types
//!
//! This module provides auth-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Auth-specific error variants
#[derive(Debug, Error)]
pub enum AuthError {
    /// Missing or malformed input
    #[error("{0}")]
    Validation(String),

    /// Account name already registered
    #[error("User already exists")]
    AccountNameTaken,

    /// Unknown account or wrong password (deliberately indistinguishable)
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// No bearer token on a protected route
    #[error("Not authorized, no token")]
    MissingToken,

    /// Bearer token malformed, tampered with, or expired
    #[error("Not authorized, token failed")]
    InvalidToken,

    /// Authenticated caller no longer resolves to a user
    #[error("User not found")]
    UserNotFound,

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AuthError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.kind().status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::Validation(_) | AuthError::AccountNameTaken => ErrorKind::BadRequest,
            AuthError::InvalidCredentials | AuthError::MissingToken | AuthError::InvalidToken => {
                ErrorKind::Unauthorized
            }
            AuthError::UserNotFound => ErrorKind::NotFound,
            AuthError::Database(_) | AuthError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError
    ///
    /// Server-side failures collapse to a generic message; the detail is
    /// only logged.
    pub fn to_app_error(&self) -> AppError {
        let kind = self.kind();
        if kind.is_server_error() {
            AppError::new(kind, "Server error")
        } else {
            AppError::new(kind, self.to_string())
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            AuthError::Database(e) => {
                tracing::error!(error = %e, "Auth database error");
            }
            AuthError::Internal(msg) => {
                tracing::error!(message = %msg, "Auth internal error");
            }
            AuthError::InvalidCredentials => {
                tracing::warn!("Invalid login attempt");
            }
            AuthError::InvalidToken => {
                tracing::warn!("Rejected bearer token");
            }
            _ => {
                tracing::debug!(error = %self, "Auth error");
            }
        }
    }
}

impl From<AuthError> for AppError {
    fn from(err: AuthError) -> Self {
        err.to_app_error()
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}
