//! Repository Traits
//!
//! Interfaces for the two external collaborators: the credential store and
//! the session store. Implementations are in the infrastructure layer.

use uuid::Uuid;

use crate::domain::entity::{
    auth_session::AuthSession,
    user::{NewUser, UserRecord},
};
use crate::domain::value_object::user_name::UserName;
use crate::error::AuthResult;

/// Credential store
#[trait_variant::make(UserRepository: Send)]
pub trait LocalUserRepository {
    /// Find user by exact user name
    async fn find_by_username(&self, username: &UserName) -> AuthResult<Option<UserRecord>>;

    /// Insert a new user and return it with its assigned id
    ///
    /// A duplicate user name is `AuthError::UsernameTaken`.
    async fn insert(&self, user: NewUser) -> AuthResult<UserRecord>;

    /// All users ordered by id
    async fn list(&self) -> AuthResult<Vec<UserRecord>>;
}

/// Session store
///
/// Implementations own concurrency safety; each call is atomic per
/// session id.
#[trait_variant::make(SessionRepository: Send)]
pub trait LocalSessionRepository {
    /// Create a new session
    async fn create(&self, session: &AuthSession) -> AuthResult<()>;

    /// Find session by ID
    async fn find_by_id(&self, session_id: Uuid) -> AuthResult<Option<AuthSession>>;

    /// Delete a session; deleting an unknown id is not an error
    async fn delete(&self, session_id: Uuid) -> AuthResult<()>;

    /// Clean up expired sessions, returning how many were removed
    async fn cleanup_expired(&self) -> AuthResult<u64>;
}
