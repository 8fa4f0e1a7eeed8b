//! User Name Value Object
//!
//! The username is the public login handle and the uniqueness key of the
//! credential store.
//!
//! ## Invariants
//! - Surrounding whitespace is trimmed
//! - Non-empty, at most [`USER_NAME_MAX_LENGTH`] characters
//! - Case is preserved; comparison is exact

use derive_more::Display;
use serde::{Serialize, Serializer};
use thiserror::Error;

/// Matches the `VARCHAR(255)` column of the users table
pub const USER_NAME_MAX_LENGTH: usize = 255;

/// Error returned when user name validation fails
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UserNameError {
    #[error("Username is required")]
    Empty,

    #[error("Username must be at most {max} chars")]
    TooLong { length: usize, max: usize },
}

/// Validated user name
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display)]
#[display("{_0}")]
pub struct UserName(String);

impl UserName {
    pub fn new(input: impl AsRef<str>) -> Result<Self, UserNameError> {
        let trimmed = input.as_ref().trim();

        if trimmed.is_empty() {
            return Err(UserNameError::Empty);
        }

        let length = trimmed.chars().count();
        if length > USER_NAME_MAX_LENGTH {
            return Err(UserNameError::TooLong {
                length,
                max: USER_NAME_MAX_LENGTH,
            });
        }

        Ok(Self(trimmed.to_string()))
    }

    /// Create from a stored value (already validated on insert)
    pub fn from_db(stored: String) -> Self {
        Self(stored)
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Serialize for UserName {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_user_name() {
        let name = UserName::new("sue").unwrap();
        assert_eq!(name.as_str(), "sue");
        assert_eq!(name.to_string(), "sue");
    }

    #[test]
    fn test_trims_surrounding_whitespace() {
        assert_eq!(UserName::new("  sue\t").unwrap().as_str(), "sue");
    }

    #[test]
    fn test_preserves_case() {
        assert_ne!(UserName::new("Sue").unwrap(), UserName::new("sue").unwrap());
    }

    #[test]
    fn test_empty_rejected() {
        assert_eq!(UserName::new(""), Err(UserNameError::Empty));
        assert_eq!(UserName::new("   "), Err(UserNameError::Empty));
    }

    #[test]
    fn test_too_long_rejected() {
        let long = "a".repeat(USER_NAME_MAX_LENGTH + 1);
        assert!(matches!(
            UserName::new(long),
            Err(UserNameError::TooLong { length: 256, .. })
        ));
        assert!(UserName::new("a".repeat(USER_NAME_MAX_LENGTH)).is_ok());
    }

    #[test]
    fn test_serializes_as_string() {
        let name = UserName::new("sue").unwrap();
        assert_eq!(serde_json::to_string(&name).unwrap(), "\"sue\"");
    }
}
