//! Register Use Case
//!
//! Creates a new user account and signs it in.

use std::sync::Arc;

use crate::application::{AuthOutput, config::AuthConfig, token::TokenService};
use crate::domain::entity::user::NewUser;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{
    account_name::AccountName, display_name::DisplayName,
    user_password::{RawPassword, UserPassword},
};
use crate::error::{AuthError, AuthResult};

/// Register input
///
/// Fields are optional so that "missing" and "empty" are reported alike.
pub struct RegisterInput {
    pub name: Option<String>,
    pub acc_name: Option<String>,
    pub password: Option<String>,
}

/// Register use case
pub struct RegisterUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
    config: Arc<AuthConfig>,
}

impl<U> RegisterUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>, config: Arc<AuthConfig>) -> Self {
        Self { user_repo, config }
    }

    pub async fn execute(&self, input: RegisterInput) -> AuthResult<AuthOutput> {
        let (Some(name), Some(acc_name), Some(password)) = (
            non_blank(input.name),
            non_blank(input.acc_name),
            non_blank(input.password),
        ) else {
            return Err(AuthError::Validation("Please add all fields".to_string()));
        };

        let name = DisplayName::new(name).map_err(|e| AuthError::Validation(e.to_string()))?;
        let acc_name =
            AccountName::new(acc_name).map_err(|e| AuthError::Validation(e.to_string()))?;

        if self.user_repo.exists_by_account_name(&acc_name).await? {
            return Err(AuthError::AccountNameTaken);
        }

        let raw_password = RawPassword::new(password)?;
        let password = UserPassword::from_raw(&raw_password, self.config.pepper())?;

        // The unique index still guards against a concurrent registration
        let user = self
            .user_repo
            .create(&NewUser {
                name,
                acc_name,
                password,
            })
            .await?;

        let token = TokenService::new(self.config.clone()).issue(user.user_id)?;

        tracing::info!(
            user_id = %user.user_id,
            acc_name = %user.acc_name,
            "User registered"
        );

        Ok(AuthOutput { user, token })
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
