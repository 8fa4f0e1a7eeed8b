//! Auth (Authentication) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, value objects, repository traits
//! - `application/` - Validation pipeline and use cases
//! - `infra/` - In-memory and PostgreSQL stores
//! - `presentation/` - HTTP handlers, DTOs, router, session guard
//!
//! ## Features
//! - Register / login / logout with username + password
//! - Server-side sessions referenced by a signed cookie
//! - `restricted` guard for routes that need a logged-in user
//!
//! ## Security Model
//! - Passwords hashed with Argon2id, optionally peppered
//! - Session cookies signed with HMAC-SHA256; forged cookies are anonymous
//! - Unknown user and wrong password are indistinguishable to the client

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

#[cfg(test)]
mod test_support;

// Re-exports for convenience
pub use application::config::AuthConfig;
pub use domain::repository::{SessionRepository, UserRepository};
pub use error::{AuthError, AuthResult};
pub use infra::{
    InMemorySessionRepository, InMemoryUserRepository, PgSessionRepository, PgUserRepository,
};
pub use presentation::{AuthAppState, api_router, auth_router, restricted, users_router};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};
