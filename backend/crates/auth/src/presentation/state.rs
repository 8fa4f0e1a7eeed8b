//! Shared handler state

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::repository::{SessionRepository, UserRepository};

/// Shared state for auth handlers and the session guard
pub struct AuthAppState<U, S>
where
    U: UserRepository,
    S: SessionRepository,
{
    pub user_repo: Arc<U>,
    pub session_repo: Arc<S>,
    pub config: Arc<AuthConfig>,
}

impl<U, S> AuthAppState<U, S>
where
    U: UserRepository,
    S: SessionRepository,
{
    pub fn new(user_repo: U, session_repo: S, config: AuthConfig) -> Self {
        Self {
            user_repo: Arc::new(user_repo),
            session_repo: Arc::new(session_repo),
            config: Arc::new(config),
        }
    }
}

// Manual impl: the repositories sit behind Arc and need not be Clone.
impl<U, S> Clone for AuthAppState<U, S>
where
    U: UserRepository,
    S: SessionRepository,
{
    fn clone(&self) -> Self {
        Self {
            user_repo: self.user_repo.clone(),
            session_repo: self.session_repo.clone(),
            config: self.config.clone(),
        }
    }
}
