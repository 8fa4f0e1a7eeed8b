//! Session Context
//!
//! The session a request belongs to, resolved from its cookie and handed
//! to handlers as an explicit extractor.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use platform::cookie::extract_cookie;

use crate::application::CheckSessionUseCase;
use crate::domain::entity::auth_session::AuthSession;
use crate::domain::repository::{SessionRepository, UserRepository};
use crate::error::AuthError;
use crate::presentation::state::AuthAppState;

/// Active session of the current request, `None` when anonymous
///
/// Rejects only on session-store faults.
#[derive(Debug, Clone)]
pub struct CurrentSession(pub Option<AuthSession>);

impl<U, S> FromRequestParts<AuthAppState<U, S>> for CurrentSession
where
    U: UserRepository + Send + Sync + 'static,
    S: SessionRepository + Send + Sync + 'static,
{
    type Rejection = AuthError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AuthAppState<U, S>,
    ) -> Result<Self, Self::Rejection> {
        let token = extract_cookie(&parts.headers, &state.config.session_cookie_name);

        let session = CheckSessionUseCase::new(state.session_repo.clone(), state.config.clone())
            .resolve(token.as_deref())
            .await?;

        Ok(Self(session))
    }
}
