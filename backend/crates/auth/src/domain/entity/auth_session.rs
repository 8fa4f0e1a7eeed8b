//! Auth Session Entity
//!
//! Server-side association between a client and the user it logged in as.
//! The client only ever holds a signed reference to `session_id`.

use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

use crate::domain::entity::user::UserRecord;

/// Auth session entity
#[derive(Debug, Clone)]
pub struct AuthSession {
    /// Session ID (UUID v4)
    pub session_id: Uuid,
    /// Copy of the authenticated user taken at login
    pub user: UserRecord,
    /// Session expiration (Unix timestamp ms)
    pub expires_at_ms: i64,
    pub created_at: DateTime<Utc>,
}

impl AuthSession {
    /// Create a new session bound to `user`
    ///
    /// TTL is provided by the application layer (config), not hard-coded here.
    pub fn new(user: UserRecord, ttl: Duration) -> Self {
        let now = Utc::now();

        Self {
            session_id: Uuid::new_v4(),
            user,
            expires_at_ms: (now + ttl).timestamp_millis(),
            created_at: now,
        }
    }

    /// Check if session has expired
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp_millis() > self.expires_at_ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_object::{user_id::UserId, user_name::UserName};

    fn sue() -> UserRecord {
        UserRecord {
            id: UserId::new(2),
            username: UserName::new("sue").unwrap(),
            password_hash: "$argon2id$stub".to_string(),
        }
    }

    #[test]
    fn test_new_session_is_live() {
        let session = AuthSession::new(sue(), Duration::hours(1));
        assert!(!session.is_expired());
        assert_eq!(session.user.id, UserId::new(2));
    }

    #[test]
    fn test_negative_ttl_is_expired() {
        let session = AuthSession::new(sue(), Duration::seconds(-1));
        assert!(session.is_expired());
    }

    #[test]
    fn test_session_ids_are_unique() {
        let a = AuthSession::new(sue(), Duration::hours(1));
        let b = AuthSession::new(sue(), Duration::hours(1));
        assert_ne!(a.session_id, b.session_id);
    }
}
