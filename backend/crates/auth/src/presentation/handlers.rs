//! HTTP Handlers

use axum::extract::rejection::JsonRejection;
use axum::extract::{Extension, State};
use axum::http::{StatusCode, header};
use axum::response::IntoResponse;
use axum::Json;

use crate::application::{
    ListUsersUseCase, LoginInput, LoginUseCase, LogoutUseCase, RegisterInput, RegisterUseCase,
};
use crate::domain::repository::{SessionRepository, UserRepository};
use crate::error::{AuthError, AuthResult};
use crate::presentation::dto::{
    LoginRequest, MessageResponse, RegisterRequest, RegisterResponse, UserSummary,
};
use crate::presentation::middleware::AuthenticatedUser;
use crate::presentation::session::CurrentSession;
use crate::presentation::state::AuthAppState;

fn parse_body<T>(payload: Result<Json<T>, JsonRejection>) -> AuthResult<T> {
    payload
        .map(|Json(body)| body)
        .map_err(|rejection| AuthError::MalformedBody(rejection.body_text()))
}

// ============================================================================
// Register
// ============================================================================

/// POST /api/auth/register
pub async fn register<U, S>(
    State(state): State<AuthAppState<U, S>>,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> AuthResult<impl IntoResponse>
where
    U: UserRepository + Send + Sync + 'static,
    S: SessionRepository + Send + Sync + 'static,
{
    let req = parse_body(payload)?;

    let use_case = RegisterUseCase::new(state.user_repo.clone(), state.config.clone());

    let output = use_case
        .execute(RegisterInput {
            username: req.username.unwrap_or_default(),
            password: req.password,
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            id: output.id,
            username: output.username,
        }),
    ))
}

// ============================================================================
// Login
// ============================================================================

/// POST /api/auth/login
pub async fn login<U, S>(
    State(state): State<AuthAppState<U, S>>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> AuthResult<impl IntoResponse>
where
    U: UserRepository + Send + Sync + 'static,
    S: SessionRepository + Send + Sync + 'static,
{
    let req = parse_body(payload)?;

    let use_case = LoginUseCase::new(
        state.user_repo.clone(),
        state.session_repo.clone(),
        state.config.clone(),
    );

    let output = use_case
        .execute(LoginInput {
            username: req.username.unwrap_or_default(),
            password: req.password,
        })
        .await?;

    let cookie = state
        .config
        .session_cookie()
        .build_set_cookie(&output.session_token);

    Ok((
        StatusCode::OK,
        [(header::SET_COOKIE, cookie)],
        Json(MessageResponse::new(format!("Welcome {}!", output.username))),
    ))
}

// ============================================================================
// Logout
// ============================================================================

/// GET /api/auth/logout
///
/// Always 200 and always clears the cookie; the message tells the outcome.
pub async fn logout<U, S>(
    State(state): State<AuthAppState<U, S>>,
    CurrentSession(session): CurrentSession,
) -> impl IntoResponse
where
    U: UserRepository + Send + Sync + 'static,
    S: SessionRepository + Send + Sync + 'static,
{
    let outcome = LogoutUseCase::new(state.session_repo.clone())
        .execute(session)
        .await;

    let cookie = state.config.session_cookie().build_delete_cookie();

    (
        StatusCode::OK,
        [(header::SET_COOKIE, cookie)],
        Json(MessageResponse::new(outcome.message())),
    )
}

// ============================================================================
// Users (restricted)
// ============================================================================

/// GET /api/users
pub async fn list_users<U, S>(
    State(state): State<AuthAppState<U, S>>,
    Extension(AuthenticatedUser(viewer)): Extension<AuthenticatedUser>,
) -> AuthResult<Json<Vec<UserSummary>>>
where
    U: UserRepository + Send + Sync + 'static,
    S: SessionRepository + Send + Sync + 'static,
{
    let users = ListUsersUseCase::new(state.user_repo.clone())
        .execute()
        .await?;

    tracing::debug!(user_id = %viewer.id, count = users.len(), "Listed users");

    Ok(Json(users.into_iter().map(UserSummary::from).collect()))
}
