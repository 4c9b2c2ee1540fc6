//! Change Password Use Case

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{UserId, user_password::RawPassword};
use crate::error::{AuthError, AuthResult};

pub struct ChangePasswordInput {
    pub current_password: Option<String>,
    pub new_password: Option<String>,
}

/// Change password use case
///
/// Requires the current password even though the caller holds a valid
/// token. Outstanding tokens stay valid after the change.
pub struct ChangePasswordUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
    config: Arc<AuthConfig>,
}

impl<U> ChangePasswordUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>, config: Arc<AuthConfig>) -> Self {
        Self { user_repo, config }
    }

    pub async fn execute(&self, user_id: UserId, input: ChangePasswordInput) -> AuthResult<()> {
        let (Some(current), Some(new)) = (input.current_password, input.new_password) else {
            return Err(AuthError::Validation(
                "Please provide current and new password".to_string(),
            ));
        };

        let mut user = self
            .user_repo
            .find_by_id(user_id)
            .await?
            .ok_or(AuthError::UserNotFound)?;

        let current = RawPassword::new(current).map_err(|_| AuthError::InvalidCredentials)?;
        if !user.verify_password(&current, self.config.pepper()) {
            return Err(AuthError::InvalidCredentials);
        }

        let new = RawPassword::new(new)?;
        if user.change_password(&new, self.config.pepper())? {
            self.user_repo.update_password(&user).await?;
            tracing::info!(user_id = %user.user_id, "Password changed");
        }

        Ok(())
    }
}
