//! Register Use Case
//!
//! Creates a new user record. Registering never logs the user in.

use std::sync::Arc;

use platform::password::{ClearTextPassword, hash_password_async};

use crate::application::config::AuthConfig;
use crate::application::validation::{Credentials, REGISTER_PIPELINE, run_pipeline};
use crate::domain::entity::user::NewUser;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{user_id::UserId, user_name::UserName};
use crate::error::AuthResult;

/// Register input
pub struct RegisterInput {
    pub username: String,
    pub password: Option<String>,
}

/// Register output; never carries the hash
pub struct RegisterOutput {
    pub id: UserId,
    pub username: UserName,
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
    U: UserRepository + Send + Sync,
{
    pub fn new(user_repo: Arc<U>, config: Arc<AuthConfig>) -> Self {
        Self { user_repo, config }
    }

    pub async fn execute(&self, input: RegisterInput) -> AuthResult<RegisterOutput> {
        let username = UserName::new(&input.username)?;

        run_pipeline(
            REGISTER_PIPELINE,
            self.user_repo.as_ref(),
            Credentials {
                username: &username,
                password: input.password.as_deref(),
            },
        )
        .await?;

        // The pipeline guarantees a password is present.
        let password = ClearTextPassword::new(input.password.unwrap_or_default());
        let password_hash = hash_password_async(password, self.config.password_pepper.clone()).await?;

        // A concurrent register may still win the name; the store reports
        // that as UsernameTaken.
        let user = self
            .user_repo
            .insert(NewUser::new(username, password_hash))
            .await?;

        tracing::info!(
            user_id = %user.id,
            username = %user.username,
            "User registered"
        );

        Ok(RegisterOutput {
            id: user.id,
            username: user.username,
        })
    }
}
