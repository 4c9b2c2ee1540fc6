//! Request extractors
//!
//! Thin wrappers over axum's `Json`, `Query` and `Path` whose rejections are
//! [`AppError`]s, so a malformed request gets the same `{"message": ...}`
//! body as every other failure.

use axum::extract::{FromRequest, FromRequestParts};

use crate::error::app_error::AppError;

/// JSON request body
#[derive(Debug, Clone, Copy, Default, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct ApiJson<T>(pub T);

/// Query string
#[derive(Debug, Clone, Copy, Default, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct ApiQuery<T>(pub T);

/// Path parameters
#[derive(Debug, Clone, Copy, Default, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct ApiPath<T>(pub T);
