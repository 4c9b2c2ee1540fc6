//! Auth Router

use axum::{
    Router, middleware,
    routing::{get, post, put},
};
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::repository::UserRepository;
use crate::infra::postgres::PgUserRepository;
use crate::presentation::handlers::{self, AuthAppState};
use crate::presentation::middleware::{AuthMiddlewareState, require_bearer};

/// Create the Auth router with PostgreSQL repository
pub fn auth_router(repo: PgUserRepository, config: Arc<AuthConfig>) -> Router {
    auth_router_generic(repo, config)
}

/// Create a generic Auth router for any repository implementation
pub fn auth_router_generic<R>(repo: R, config: Arc<AuthConfig>) -> Router
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let state = AuthAppState {
        repo: Arc::new(repo),
        config: config.clone(),
    };

    let protected = Router::new()
        .route("/me", get(handlers::me::<R>))
        .route("/password", put(handlers::change_password::<R>))
        .route_layer(middleware::from_fn_with_state(
            AuthMiddlewareState::new(config),
            require_bearer,
        ));

    Router::new()
        .route("/register", post(handlers::register::<R>))
        .route("/login", post(handlers::login::<R>))
        .merge(protected)
        .with_state(state)
}
