//! Check Session Use Case
//!
//! Resolves the session a request refers to, if any.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::session_token;
use crate::domain::entity::auth_session::AuthSession;
use crate::domain::repository::SessionRepository;
use crate::error::AuthResult;

/// Check session use case
pub struct CheckSessionUseCase<S>
where
    S: SessionRepository,
{
    session_repo: Arc<S>,
    config: Arc<AuthConfig>,
}

impl<S> CheckSessionUseCase<S>
where
    S: SessionRepository + Send + Sync,
{
    pub fn new(session_repo: Arc<S>, config: Arc<AuthConfig>) -> Self {
        Self {
            session_repo,
            config,
        }
    }

    /// Active session for `token`, or `None` when anonymous
    ///
    /// Missing, forged, unknown and expired tokens are all anonymous.
    /// Expired sessions are removed on the way. Only store faults are errors.
    pub async fn resolve(&self, token: Option<&str>) -> AuthResult<Option<AuthSession>> {
        let Some(session_id) = token.and_then(|t| session_token::parse(&self.config, t)) else {
            return Ok(None);
        };

        let Some(session) = self.session_repo.find_by_id(session_id).await? else {
            return Ok(None);
        };

        if session.is_expired() {
            if let Err(e) = self.session_repo.delete(session_id).await {
                tracing::warn!(error = %e, session_id = %session_id, "Failed to drop expired session");
            }
            return Ok(None);
        }

        Ok(Some(session))
    }
}
