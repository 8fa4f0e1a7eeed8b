//! User Record Entity
//!
//! A registered account as persisted by the credential store. Records are
//! created on register and never mutated afterwards.

use crate::domain::value_object::{user_id::UserId, user_name::UserName};

/// Persisted user record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRecord {
    /// Store-assigned identifier
    pub id: UserId,
    /// Unique login handle
    pub username: UserName,
    /// Argon2id PHC string; never leaves the server
    pub password_hash: String,
}

/// Insert payload; the store assigns the id
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: UserName,
    pub password_hash: String,
}

impl NewUser {
    pub fn new(username: UserName, password_hash: String) -> Self {
        Self {
            username,
            password_hash,
        }
    }

    /// Attach the store-assigned id
    pub fn into_record(self, id: UserId) -> UserRecord {
        UserRecord {
            id,
            username: self.username,
            password_hash: self.password_hash,
        }
    }
}
