//! PostgreSQL Repository Implementations
//!
//! Schema lives in `database/migrations`.

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entity::{
    auth_session::AuthSession,
    user::{NewUser, UserRecord},
};
use crate::domain::repository::{SessionRepository, UserRepository};
use crate::domain::value_object::{user_id::UserId, user_name::UserName};
use crate::error::{AuthError, AuthResult};

/// PostgreSQL-backed credential store
#[derive(Clone)]
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl UserRepository for PgUserRepository {
    async fn find_by_username(&self, username: &UserName) -> AuthResult<Option<UserRecord>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT user_id, username, password
            FROM users
            WHERE username = $1
            "#,
        )
        .bind(username.as_str())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(UserRow::into_record))
    }

    async fn insert(&self, user: NewUser) -> AuthResult<UserRecord> {
        let result = sqlx::query_as::<_, UserRow>(
            r#"
            INSERT INTO users (username, password)
            VALUES ($1, $2)
            RETURNING user_id, username, password
            "#,
        )
        .bind(user.username.as_str())
        .bind(&user.password_hash)
        .fetch_one(&self.pool)
        .await;

        result.map(UserRow::into_record).map_err(insert_error)
    }

    async fn list(&self) -> AuthResult<Vec<UserRecord>> {
        let rows = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT user_id, username, password
            FROM users
            ORDER BY user_id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(UserRow::into_record).collect())
    }
}

// ============================================================================
// Sessions
// ============================================================================

/// PostgreSQL-backed session store
#[derive(Clone)]
pub struct PgSessionRepository {
    pool: PgPool,
}

impl PgSessionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl SessionRepository for PgSessionRepository {
    async fn create(&self, session: &AuthSession) -> AuthResult<()> {
        sqlx::query(
            r#"
            INSERT INTO auth_sessions (session_id, user_id, expires_at_ms, created_at)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(session.session_id)
        .bind(session.user.id.get())
        .bind(session.expires_at_ms)
        .bind(session.created_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Expired rows are returned as-is; expiry is checked by the caller
    async fn find_by_id(&self, session_id: Uuid) -> AuthResult<Option<AuthSession>> {
        let row = sqlx::query_as::<_, AuthSessionRow>(
            r#"
            SELECT
                s.session_id,
                s.expires_at_ms,
                s.created_at,
                u.user_id,
                u.username,
                u.password
            FROM auth_sessions s
            JOIN users u ON u.user_id = s.user_id
            WHERE s.session_id = $1
            "#,
        )
        .bind(session_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(AuthSessionRow::into_session))
    }

    async fn delete(&self, session_id: Uuid) -> AuthResult<()> {
        sqlx::query("DELETE FROM auth_sessions WHERE session_id = $1")
            .bind(session_id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn cleanup_expired(&self) -> AuthResult<u64> {
        let now_ms = Utc::now().timestamp_millis();

        let deleted = sqlx::query("DELETE FROM auth_sessions WHERE expires_at_ms < $1")
            .bind(now_ms)
            .execute(&self.pool)
            .await?
            .rows_affected();

        if deleted > 0 {
            tracing::info!(sessions_deleted = deleted, "Cleaned up expired auth sessions");
        }

        Ok(deleted)
    }
}

/// A lost race on the unique username index is a taken name, not a fault
fn insert_error(err: sqlx::Error) -> AuthError {
    match err {
        sqlx::Error::Database(db_err) if db_err.is_unique_violation() => AuthError::UsernameTaken,
        other => other.into(),
    }
}

// ============================================================================
// Row types
// ============================================================================

#[derive(sqlx::FromRow)]
struct UserRow {
    user_id: i64,
    username: String,
    password: String,
}

impl UserRow {
    fn into_record(self) -> UserRecord {
        UserRecord {
            id: UserId::new(self.user_id),
            username: UserName::from_db(self.username),
            password_hash: self.password,
        }
    }
}

#[derive(sqlx::FromRow)]
struct AuthSessionRow {
    session_id: Uuid,
    expires_at_ms: i64,
    created_at: DateTime<Utc>,
    user_id: i64,
    username: String,
    password: String,
}

impl AuthSessionRow {
    fn into_session(self) -> AuthSession {
        AuthSession {
            session_id: self.session_id,
            user: UserRow {
                user_id: self.user_id,
                username: self.username,
                password: self.password,
            }
            .into_record(),
            expires_at_ms: self.expires_at_ms,
            created_at: self.created_at,
        }
    }
}
