//! HTTP Handlers

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use kernel::extract::ApiJson;
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::{
    ChangePasswordInput, ChangePasswordUseCase, CurrentUserUseCase, LoginInput, LoginUseCase,
    RegisterInput, RegisterUseCase,
};
use crate::domain::repository::UserRepository;
use crate::error::AuthResult;
use crate::presentation::dto::{
    AuthResponse, ChangePasswordRequest, LoginRequest, MeResponse, RegisterRequest,
};
use crate::presentation::middleware::CurrentUser;

/// Shared state for auth handlers
#[derive(Clone)]
pub struct AuthAppState<R>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<AuthConfig>,
}

// ============================================================================
// Register
// ============================================================================

/// POST /api/auth/register
pub async fn register<R>(
    State(state): State<AuthAppState<R>>,
    ApiJson(req): ApiJson<RegisterRequest>,
) -> AuthResult<(StatusCode, Json<AuthResponse>)>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let use_case = RegisterUseCase::new(state.repo.clone(), state.config.clone());

    let output = use_case
        .execute(RegisterInput {
            name: req.name,
            acc_name: req.accname,
            password: req.accpassword,
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(AuthResponse::new(&output.user, output.token)),
    ))
}

// ============================================================================
// Login
// ============================================================================

/// POST /api/auth/login
pub async fn login<R>(
    State(state): State<AuthAppState<R>>,
    ApiJson(req): ApiJson<LoginRequest>,
) -> AuthResult<Json<AuthResponse>>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let use_case = LoginUseCase::new(state.repo.clone(), state.config.clone());

    let output = use_case
        .execute(LoginInput {
            acc_name: req.accname,
            password: req.accpassword,
        })
        .await?;

    Ok(Json(AuthResponse::new(&output.user, output.token)))
}

// ============================================================================
// Current User
// ============================================================================

/// GET /api/auth/me
pub async fn me<R>(
    State(state): State<AuthAppState<R>>,
    CurrentUser(user_id): CurrentUser,
) -> AuthResult<Json<MeResponse>>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let user = CurrentUserUseCase::new(state.repo.clone())
        .execute(user_id)
        .await?;

    Ok(Json(MeResponse::from(&user)))
}

// ============================================================================
// Change Password
// ============================================================================

/// PUT /api/auth/password
pub async fn change_password<R>(
    State(state): State<AuthAppState<R>>,
    CurrentUser(user_id): CurrentUser,
    ApiJson(req): ApiJson<ChangePasswordRequest>,
) -> AuthResult<StatusCode>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let use_case = ChangePasswordUseCase::new(state.repo.clone(), state.config.clone());

    use_case
        .execute(
            user_id,
            ChangePasswordInput {
                current_password: req.current_password,
                new_password: req.new_password,
            },
        )
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
