//! In-Memory Repository Implementations
//!
//! Used when no database is configured, and by tests. Each method takes
//! the lock once, so every operation is atomic.

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entity::{
    auth_session::AuthSession,
    user::{NewUser, UserRecord},
};
use crate::domain::repository::{SessionRepository, UserRepository};
use crate::domain::value_object::{user_id::UserId, user_name::UserName};
use crate::error::{AuthError, AuthResult};

// ============================================================================
// Users
// ============================================================================

#[derive(Default)]
struct UserTable {
    by_id: BTreeMap<i64, UserRecord>,
    id_by_name: HashMap<String, i64>,
}

/// In-memory credential store with sequential ids starting at 1
#[derive(Clone, Default)]
pub struct InMemoryUserRepository {
    table: Arc<RwLock<UserTable>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl UserRepository for InMemoryUserRepository {
    async fn find_by_username(&self, username: &UserName) -> AuthResult<Option<UserRecord>> {
        let table = self.table.read().await;
        Ok(table
            .id_by_name
            .get(username.as_str())
            .and_then(|id| table.by_id.get(id))
            .cloned())
    }

    async fn insert(&self, user: NewUser) -> AuthResult<UserRecord> {
        let mut table = self.table.write().await;

        if table.id_by_name.contains_key(user.username.as_str()) {
            return Err(AuthError::UsernameTaken);
        }

        let id = table.by_id.keys().next_back().map_or(1, |last| last + 1);
        let record = user.into_record(UserId::new(id));

        table
            .id_by_name
            .insert(record.username.as_str().to_string(), id);
        table.by_id.insert(id, record.clone());

        Ok(record)
    }

    async fn list(&self) -> AuthResult<Vec<UserRecord>> {
        Ok(self.table.read().await.by_id.values().cloned().collect())
    }
}

// ============================================================================
// Sessions
// ============================================================================

/// In-memory session store
#[derive(Clone, Default)]
pub struct InMemorySessionRepository {
    sessions: Arc<RwLock<HashMap<Uuid, AuthSession>>>,
}

impl InMemorySessionRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionRepository for InMemorySessionRepository {
    async fn create(&self, session: &AuthSession) -> AuthResult<()> {
        self.sessions
            .write()
            .await
            .insert(session.session_id, session.clone());
        Ok(())
    }

    async fn find_by_id(&self, session_id: Uuid) -> AuthResult<Option<AuthSession>> {
        Ok(self.sessions.read().await.get(&session_id).cloned())
    }

    async fn delete(&self, session_id: Uuid) -> AuthResult<()> {
        self.sessions.write().await.remove(&session_id);
        Ok(())
    }

    async fn cleanup_expired(&self) -> AuthResult<u64> {
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|_, session| !session.is_expired());
        let deleted = (before - sessions.len()) as u64;

        if deleted > 0 {
            tracing::info!(sessions_deleted = deleted, "Cleaned up expired auth sessions");
        }

        Ok(deleted)
    }
}
