//! Error conversions - HTTP rendering and extractor rejections
//!
//! Renders [`AppError`] as the API's `{"message": ...}` body and converts
//! axum's extractor rejections so malformed input surfaces as 400 instead of
//! axum's plain-text defaults.

#[cfg(feature = "axum")]
use super::app_error::AppError;

// ============================================================================
// Axum conversions (feature-gated)
// ============================================================================

/// JSON body written for every error response
#[derive(Debug, serde::Serialize)]
pub struct ErrorBody<'a> {
    pub message: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<&'a str>,
}

#[cfg(feature = "axum")]
impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        use axum::Json;
        use axum::http::StatusCode;

        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        let body = ErrorBody {
            message: self.message(),
            action: self.action(),
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(feature = "axum")]
impl From<axum::extract::rejection::JsonRejection> for AppError {
    fn from(rejection: axum::extract::rejection::JsonRejection) -> Self {
        AppError::bad_request(rejection.body_text()).with_source(rejection)
    }
}

#[cfg(feature = "axum")]
impl From<axum::extract::rejection::QueryRejection> for AppError {
    fn from(rejection: axum::extract::rejection::QueryRejection) -> Self {
        AppError::bad_request(rejection.body_text()).with_source(rejection)
    }
}

#[cfg(feature = "axum")]
impl From<axum::extract::rejection::PathRejection> for AppError {
    fn from(rejection: axum::extract::rejection::PathRejection) -> Self {
        AppError::bad_request(rejection.body_text()).with_source(rejection)
    }
}
