//! Auth Error Types
//!
//! Two families share this enum:
//! - validation failures, which end a request with a fixed status and a
//!   user-facing message
//! - unexpected faults (store, hasher, internal), which always render as a
//!   generic server error and are logged with detail
//!
//! Both render through the unified `kernel::error::AppError`.

use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use platform::password::PasswordHashError;
use thiserror::Error;

use crate::domain::value_object::user_name::UserNameError;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

pub const MSG_USERNAME_TAKEN: &str = "Username taken";
pub const MSG_INVALID_CREDENTIALS: &str = "Invalid credentials";
pub const MSG_PASSWORD_TOO_SHORT: &str = "Password must be longer than 3 chars";
pub const MSG_NOT_AUTHENTICATED: &str = "You shall not pass!";

/// Auth-specific error variants
#[derive(Debug, Error)]
pub enum AuthError {
    /// Request body is not the expected JSON shape
    #[error("{0}")]
    MalformedBody(String),

    /// Submitted username is empty or oversized
    #[error("{0}")]
    InvalidUsername(#[from] UserNameError),

    #[error("Username taken")]
    UsernameTaken,

    /// Password absent or 3 characters or shorter
    #[error("Password must be longer than 3 chars")]
    PasswordTooShort,

    /// Unknown username or wrong password; deliberately indistinguishable
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// No active session on a restricted route
    #[error("You shall not pass!")]
    NotAuthenticated,

    #[error("Password hashing error: {0}")]
    Password(#[from] PasswordHashError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AuthError {
    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::MalformedBody(_) | AuthError::InvalidUsername(_) => ErrorKind::BadRequest,
            AuthError::UsernameTaken | AuthError::PasswordTooShort => {
                ErrorKind::UnprocessableEntity
            }
            AuthError::InvalidCredentials | AuthError::NotAuthenticated => {
                ErrorKind::Unauthorized
            }
            AuthError::Password(_) | AuthError::Database(_) | AuthError::Internal(_) => {
                ErrorKind::InternalServerError
            }
        }
    }

    /// Whether this is an expected, user-facing short-circuit
    pub fn is_validation_failure(&self) -> bool {
        !self.kind().is_server_error()
    }

    /// Convert to AppError, keeping fault detail as the (logged-only) source
    pub fn into_app_error(self) -> AppError {
        match self {
            AuthError::MalformedBody(_) | AuthError::InvalidUsername(_) => {
                AppError::bad_request(self.to_string())
            }
            AuthError::UsernameTaken | AuthError::PasswordTooShort => {
                AppError::unprocessable(self.to_string())
            }
            AuthError::InvalidCredentials | AuthError::NotAuthenticated => {
                AppError::unauthorized(self.to_string())
            }
            AuthError::Database(e) => AppError::from(e),
            AuthError::Password(e) => AppError::internal("Password hashing failed").with_source(e),
            AuthError::Internal(msg) => AppError::internal(msg),
        }
    }

    /// Log expected failures; faults are logged by `AppError` on render
    fn log(&self) {
        match self {
            AuthError::InvalidCredentials => {
                tracing::warn!("Invalid login attempt");
            }
            AuthError::NotAuthenticated => {
                tracing::debug!("Rejected request without session");
            }
            err if err.is_validation_failure() => {
                tracing::debug!(error = %err, "Auth validation failed");
            }
            _ => {}
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        self.log();
        self.into_app_error().into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn test_validation_statuses() {
        assert_eq!(AuthError::UsernameTaken.kind().status_code(), 422);
        assert_eq!(AuthError::PasswordTooShort.kind().status_code(), 422);
        assert_eq!(AuthError::InvalidCredentials.kind().status_code(), 401);
        assert_eq!(AuthError::NotAuthenticated.kind().status_code(), 401);
        assert_eq!(AuthError::MalformedBody("x".into()).kind().status_code(), 400);
    }

    #[test]
    fn test_messages_are_user_facing() {
        assert_eq!(AuthError::UsernameTaken.to_string(), MSG_USERNAME_TAKEN);
        assert_eq!(AuthError::PasswordTooShort.to_string(), MSG_PASSWORD_TOO_SHORT);
        assert_eq!(AuthError::InvalidCredentials.to_string(), MSG_INVALID_CREDENTIALS);
        assert_eq!(AuthError::NotAuthenticated.to_string(), MSG_NOT_AUTHENTICATED);
    }

    #[test]
    fn test_app_error_kind_matches_auth_kind() {
        let errors = [
            AuthError::MalformedBody("expected value".into()),
            AuthError::InvalidUsername(UserNameError::Empty),
            AuthError::UsernameTaken,
            AuthError::PasswordTooShort,
            AuthError::InvalidCredentials,
            AuthError::NotAuthenticated,
        ];

        for err in errors {
            let kind = err.kind();
            let message = err.to_string();
            let app = err.into_app_error();
            assert_eq!(app.kind(), kind);
            assert_eq!(app.public_message(), message);
        }
    }

    #[test]
    fn test_faults_are_not_validation_failures() {
        let err = AuthError::Internal("store offline".into());
        assert!(!err.is_validation_failure());

        let app = err.into_app_error();
        assert!(app.is_server_error());
        assert_eq!(app.public_message(), "Internal Server Error");
    }

    #[test]
    fn test_pool_timeout_maps_to_503() {
        let response = AuthError::Database(sqlx::Error::PoolTimedOut).into_response();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }
}
