//! Auth Middleware
//!
//! Session guard for restricted routes.

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;

use crate::domain::entity::user::UserRecord;
use crate::error::AuthError;
use crate::presentation::session::CurrentSession;

/// User bound to the request's session, set by [`restricted`]
#[derive(Debug, Clone)]
pub struct AuthenticatedUser(pub UserRecord);

/// Let the request through only with an active session
///
/// Anonymous requests get 401 "You shall not pass!". Store faults while
/// resolving the session are rejected by the extractor as server errors.
pub async fn restricted(
    CurrentSession(session): CurrentSession,
    mut req: Request,
    next: Next,
) -> Result<Response, AuthError> {
    let session = session.ok_or(AuthError::NotAuthenticated)?;

    req.extensions_mut().insert(AuthenticatedUser(session.user));

    Ok(next.run(req).await)
}
