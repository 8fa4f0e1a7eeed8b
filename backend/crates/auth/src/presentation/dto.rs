//! API DTOs (Data Transfer Objects)

use serde::{Deserialize, Serialize};

use crate::domain::entity::user::UserRecord;
use crate::domain::value_object::{user_id::UserId, user_name::UserName};

// ============================================================================
// Register / Login
// ============================================================================

/// Register request
///
/// A missing or `null` field is not a JSON error: an absent username fails
/// the username check and an absent password fails the length check.
#[derive(Debug, Clone, Deserialize)]
pub struct RegisterRequest {
    pub username: Option<String>,
    pub password: Option<String>,
}

/// Register response; never includes the hash
#[derive(Debug, Clone, Serialize)]
pub struct RegisterResponse {
    pub id: UserId,
    pub username: UserName,
}

/// Login request
#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    pub username: Option<String>,
    pub password: Option<String>,
}

// ============================================================================
// Shared
// ============================================================================

/// `{ "message": ... }` body used by login and logout
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Public view of a user record
#[derive(Debug, Clone, Serialize)]
pub struct UserSummary {
    pub id: UserId,
    pub username: UserName,
}

impl From<UserRecord> for UserSummary {
    fn from(user: UserRecord) -> Self {
        Self {
            id: user.id,
            username: user.username,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_fields_optional() {
        let req: RegisterRequest = serde_json::from_str("{}").unwrap();
        assert!(req.username.is_none());
        assert!(req.password.is_none());

        let req: LoginRequest =
            serde_json::from_str(r#"{"username":null,"password":null}"#).unwrap();
        assert!(req.username.is_none());
        assert!(req.password.is_none());
    }

    #[test]
    fn test_user_summary_hides_hash() {
        let user = UserRecord {
            id: UserId::new(7),
            username: UserName::new("sue").unwrap(),
            password_hash: "$argon2id$secret".into(),
        };

        let json = serde_json::to_value(UserSummary::from(user)).unwrap();
        assert_eq!(json, serde_json::json!({ "id": 7, "username": "sue" }));
    }
}
