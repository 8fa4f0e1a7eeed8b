//! Test doubles for store faults and races

use uuid::Uuid;

use crate::domain::entity::{
    auth_session::AuthSession,
    user::{NewUser, UserRecord},
};
use crate::domain::repository::{SessionRepository, UserRepository};
use crate::domain::value_object::user_name::UserName;
use crate::error::{AuthError, AuthResult};
use crate::infra::memory::InMemorySessionRepository;

/// Credential store whose every call fails with a database fault
#[derive(Clone, Copy, Default)]
pub struct FailingUserRepository;

fn store_fault() -> AuthError {
    sqlx::Error::Protocol("credential store offline".into()).into()
}

impl UserRepository for FailingUserRepository {
    async fn find_by_username(&self, _username: &UserName) -> AuthResult<Option<UserRecord>> {
        Err(store_fault())
    }

    async fn insert(&self, _user: NewUser) -> AuthResult<UserRecord> {
        Err(store_fault())
    }

    async fn list(&self) -> AuthResult<Vec<UserRecord>> {
        Err(store_fault())
    }
}

/// Credential store where another request always claims the name between
/// the availability check and the insert
#[derive(Clone, Copy, Default)]
pub struct RacingUserRepository;

impl UserRepository for RacingUserRepository {
    async fn find_by_username(&self, _username: &UserName) -> AuthResult<Option<UserRecord>> {
        Ok(None)
    }

    async fn insert(&self, _user: NewUser) -> AuthResult<UserRecord> {
        Err(AuthError::UsernameTaken)
    }

    async fn list(&self) -> AuthResult<Vec<UserRecord>> {
        Ok(Vec::new())
    }
}

/// Session store that works except that sessions cannot be destroyed
#[derive(Clone, Default)]
pub struct UndeletableSessionRepository {
    inner: InMemorySessionRepository,
}

impl SessionRepository for UndeletableSessionRepository {
    async fn create(&self, session: &AuthSession) -> AuthResult<()> {
        self.inner.create(session).await
    }

    async fn find_by_id(&self, session_id: Uuid) -> AuthResult<Option<AuthSession>> {
        self.inner.find_by_id(session_id).await
    }

    async fn delete(&self, _session_id: Uuid) -> AuthResult<()> {
        Err(sqlx::Error::PoolClosed.into())
    }

    async fn cleanup_expired(&self) -> AuthResult<u64> {
        self.inner.cleanup_expired().await
    }
}
