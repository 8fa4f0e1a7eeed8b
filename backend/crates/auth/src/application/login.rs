//! Login Use Case
//!
//! Authenticates a user and creates a session.

use std::sync::Arc;

use platform::password::{ClearTextPassword, verify_password_async};

use crate::application::config::AuthConfig;
use crate::application::session_token;
use crate::application::validation::{Credentials, LOGIN_PIPELINE, run_pipeline};
use crate::domain::entity::auth_session::AuthSession;
use crate::domain::repository::{SessionRepository, UserRepository};
use crate::domain::value_object::user_name::UserName;
use crate::error::{AuthError, AuthResult};

/// Login input
pub struct LoginInput {
    pub username: String,
    pub password: Option<String>,
}

/// Login output
pub struct LoginOutput {
    /// Signed session token for the cookie
    pub session_token: String,
    pub username: UserName,
}

/// Login use case
pub struct LoginUseCase<U, S>
where
    U: UserRepository,
    S: SessionRepository,
{
    user_repo: Arc<U>,
    session_repo: Arc<S>,
    config: Arc<AuthConfig>,
}

impl<U, S> LoginUseCase<U, S>
where
    U: UserRepository + Send + Sync,
    S: SessionRepository + Send + Sync,
{
    pub fn new(user_repo: Arc<U>, session_repo: Arc<S>, config: Arc<AuthConfig>) -> Self {
        Self {
            user_repo,
            session_repo,
            config,
        }
    }

    /// Every credential problem collapses to `InvalidCredentials` so the
    /// response does not reveal which check failed.
    pub async fn execute(&self, input: LoginInput) -> AuthResult<LoginOutput> {
        let username =
            UserName::new(&input.username).map_err(|_| AuthError::InvalidCredentials)?;

        run_pipeline(
            LOGIN_PIPELINE,
            self.user_repo.as_ref(),
            Credentials {
                username: &username,
                password: input.password.as_deref(),
            },
        )
        .await?;

        let user = self
            .user_repo
            .find_by_username(&username)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        let Some(password) = input.password else {
            return Err(AuthError::InvalidCredentials);
        };

        let password_valid = verify_password_async(
            ClearTextPassword::new(password),
            user.password_hash.clone(),
            self.config.password_pepper.clone(),
        )
        .await?;

        if !password_valid {
            tracing::debug!(user_id = %user.id, "Password mismatch");
            return Err(AuthError::InvalidCredentials);
        }

        let session = AuthSession::new(user, self.config.session_ttl_chrono()?);
        self.session_repo.create(&session).await?;

        let session_token = session_token::issue(&self.config, session.session_id);

        tracing::info!(
            user_id = %session.user.id,
            session_id = %session.session_id,
            "User logged in"
        );

        Ok(LoginOutput {
            session_token,
            username: session.user.username,
        })
    }
}
