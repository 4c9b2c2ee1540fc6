//! Login Use Case
//!
//! Verifies credentials and issues a bearer token.

use std::sync::{Arc, OnceLock};

use crate::application::{AuthOutput, config::AuthConfig, token::TokenService};
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{
    account_name::AccountName,
    user_password::{RawPassword, UserPassword},
};
use crate::error::{AuthError, AuthResult};

/// Hash checked against when the account does not exist, so an unknown
/// account costs one Argon2 verification like a wrong password does.
pub(crate) fn dummy_password() -> Option<&'static UserPassword> {
    static DUMMY: OnceLock<Option<UserPassword>> = OnceLock::new();
    DUMMY
        .get_or_init(|| {
            let raw = RawPassword::new("no-such-account".to_string()).ok()?;
            UserPassword::from_raw(&raw, None).ok()
        })
        .as_ref()
}

/// Login input
pub struct LoginInput {
    pub acc_name: Option<String>,
    pub password: Option<String>,
}

/// Login use case
pub struct LoginUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
    config: Arc<AuthConfig>,
}

impl<U> LoginUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>, config: Arc<AuthConfig>) -> Self {
        Self { user_repo, config }
    }

    pub async fn execute(&self, input: LoginInput) -> AuthResult<AuthOutput> {
        let (Some(acc_name), Some(password)) = (input.acc_name, input.password) else {
            return Err(AuthError::Validation(
                "Please provide account name and password".to_string(),
            ));
        };

        // Unknown account, malformed name and wrong password all look the same
        let acc_name = AccountName::new(acc_name).map_err(|_| AuthError::InvalidCredentials)?;
        let raw_password = RawPassword::new(password).map_err(|_| AuthError::InvalidCredentials)?;

        let Some(user) = self.user_repo.find_by_account_name(&acc_name).await? else {
            if let Some(dummy) = dummy_password() {
                let _ = dummy.verify(&raw_password, self.config.pepper());
            }
            return Err(AuthError::InvalidCredentials);
        };

        if !user.verify_password(&raw_password, self.config.pepper()) {
            return Err(AuthError::InvalidCredentials);
        }

        let token = TokenService::new(self.config.clone()).issue(user.user_id)?;

        tracing::info!(user_id = %user.user_id, "User logged in");

        Ok(AuthOutput { user, token })
    }
}
