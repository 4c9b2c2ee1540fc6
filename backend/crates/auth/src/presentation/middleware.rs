//! Auth Middleware
//!
//! Bearer-token gate for protected routes, and the extractor handlers use
//! to learn who the caller is.

use axum::extract::{FromRequestParts, Request, State};
use axum::http::{HeaderMap, header, request::Parts};
use axum::middleware::Next;
use axum::response::Response;
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::token::TokenService;
use crate::domain::value_object::UserId;
use crate::error::AuthError;

/// Middleware state
#[derive(Clone)]
pub struct AuthMiddlewareState {
    pub tokens: TokenService,
}

impl AuthMiddlewareState {
    pub fn new(config: Arc<AuthConfig>) -> Self {
        Self {
            tokens: TokenService::new(config),
        }
    }
}

/// Authenticated caller, placed in request extensions by [`require_bearer`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrentUser(pub UserId);

impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<CurrentUser>()
            .copied()
            .ok_or(AuthError::MissingToken)
    }
}

/// Middleware that requires a valid bearer token
///
/// Only the token is checked; whether the user still exists is left to the
/// handler.
pub async fn require_bearer(
    State(state): State<AuthMiddlewareState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AuthError> {
    let token = bearer_token(req.headers()).ok_or(AuthError::MissingToken)?;
    let claims = state.tokens.verify(token)?;

    req.extensions_mut().insert(CurrentUser(claims.user_id()));

    Ok(next.run(req).await)
}

/// Extract the token from `Authorization: Bearer <token>`
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.trim().split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }

    let token = token.trim();
    (!token.is_empty()).then_some(token)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn test_bearer_token() {
        assert_eq!(bearer_token(&headers("Bearer abc.def.ghi")), Some("abc.def.ghi"));
        assert_eq!(bearer_token(&headers("bearer abc")), Some("abc"));
        assert_eq!(bearer_token(&headers("BEARER   abc  ")), Some("abc"));
    }

    #[test]
    fn test_bearer_token_rejects_other_forms() {
        assert_eq!(bearer_token(&HeaderMap::new()), None);
        assert_eq!(bearer_token(&headers("Basic dXNlcjpwYXNz")), None);
        assert_eq!(bearer_token(&headers("Bearer")), None);
        assert_eq!(bearer_token(&headers("Bearer ")), None);
        assert_eq!(bearer_token(&headers("abc.def.ghi")), None);
    }
}
