//! Logout Use Case
//!
//! Destroys the current session. Logout never fails from the client's
//! point of view; the outcome only selects the message.

use std::sync::Arc;

use crate::domain::entity::auth_session::AuthSession;
use crate::domain::repository::SessionRepository;

pub const MSG_BYE: &str = "bye";
pub const MSG_CANNOT_LEAVE: &str = "sorry, you cannot leave";
pub const MSG_UNKNOWN_CLIENT: &str = "but i do not know you";

/// How a logout attempt ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogoutOutcome {
    /// Session destroyed
    LoggedOut,
    /// Session existed but the store could not destroy it
    DestroyFailed,
    /// Request had no active session
    NoSession,
}

impl LogoutOutcome {
    pub fn message(&self) -> &'static str {
        match self {
            LogoutOutcome::LoggedOut => MSG_BYE,
            LogoutOutcome::DestroyFailed => MSG_CANNOT_LEAVE,
            LogoutOutcome::NoSession => MSG_UNKNOWN_CLIENT,
        }
    }
}

/// Logout use case
pub struct LogoutUseCase<S>
where
    S: SessionRepository,
{
    session_repo: Arc<S>,
}

impl<S> LogoutUseCase<S>
where
    S: SessionRepository + Send + Sync,
{
    pub fn new(session_repo: Arc<S>) -> Self {
        Self { session_repo }
    }

    pub async fn execute(&self, session: Option<AuthSession>) -> LogoutOutcome {
        let Some(session) = session else {
            return LogoutOutcome::NoSession;
        };

        match self.session_repo.delete(session.session_id).await {
            Ok(()) => {
                tracing::info!(
                    user_id = %session.user.id,
                    session_id = %session.session_id,
                    "User logged out"
                );
                LogoutOutcome::LoggedOut
            }
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    session_id = %session.session_id,
                    "Failed to destroy session"
                );
                LogoutOutcome::DestroyFailed
            }
        }
    }
}
