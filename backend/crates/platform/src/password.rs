//! Password Hashing and Verification
//!
//! - Argon2id hashing with a fresh random salt per hash (PHC string output)
//! - Zeroization of clear text on drop
//! - Constant-time verification; malformed digests verify as `false`
//! - Optional application-wide pepper
//!
//! Argon2 is deliberately slow, so the async helpers run it on the
//! blocking pool and only the calling request waits.

use std::fmt;

use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier, password_hash::SaltString};
use rand::rngs::OsRng;
use thiserror::Error;
use unicode_normalization::UnicodeNormalization;
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

/// Password hashing errors
#[derive(Debug, Error)]
pub enum PasswordHashError {
    /// Hashing operation failed
    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    /// The blocking task running the hasher panicked or was cancelled
    #[error("Password hashing task failed: {0}")]
    TaskFailed(String),
}

// ============================================================================
// Clear Text Password (Zeroized on drop)
// ============================================================================

/// Clear text password with automatic memory zeroization
///
/// Input is NFKC-normalized so visually identical passwords hash the same.
/// No policy is applied here; length rules belong to the caller.
///
/// ```rust
/// use platform::password::{ClearTextPassword, verify_password};
///
/// let digest = ClearTextPassword::new("1234").hash(None).unwrap().into_phc_string();
/// assert!(verify_password("1234", &digest, None));
/// ```
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct ClearTextPassword(String);

impl ClearTextPassword {
    pub fn new(raw: impl AsRef<str>) -> Self {
        Self(raw.as_ref().nfkc().collect())
    }

    /// Password bytes with the pepper appended, wiped after use
    fn peppered(&self, pepper: Option<&[u8]>) -> Zeroizing<Vec<u8>> {
        let mut bytes = self.0.as_bytes().to_vec();
        if let Some(p) = pepper {
            bytes.extend_from_slice(p);
        }
        Zeroizing::new(bytes)
    }

    /// Hash the password using Argon2id with a random 128-bit salt
    pub fn hash(&self, pepper: Option<&[u8]>) -> Result<HashedPassword, PasswordHashError> {
        let salt = SaltString::generate(&mut OsRng);

        // OWASP recommended Argon2id parameters:
        // m=19456 (19 MiB), t=2, p=1
        let hash = Argon2::default()
            .hash_password(&self.peppered(pepper), &salt)
            .map_err(|e| PasswordHashError::HashingFailed(e.to_string()))?;

        Ok(HashedPassword {
            hash: hash.to_string(),
        })
    }
}

impl fmt::Debug for ClearTextPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ClearTextPassword")
            .field(&"[REDACTED]")
            .finish()
    }
}

// ============================================================================
// Hashed Password (Safe to store)
// ============================================================================

/// Hashed password in PHC string format
#[derive(Clone, PartialEq, Eq)]
pub struct HashedPassword {
    hash: String,
}

impl HashedPassword {
    /// PHC string for storage
    pub fn into_phc_string(self) -> String {
        self.hash
    }
}

impl fmt::Debug for HashedPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HashedPassword")
            .field("hash", &"[HASH]")
            .finish()
    }
}

fn verify_digest(password: &ClearTextPassword, digest: &str, pepper: Option<&[u8]>) -> bool {
    let Ok(parsed_hash) = PasswordHash::new(digest) else {
        return false;
    };

    Argon2::default()
        .verify_password(&password.peppered(pepper), &parsed_hash)
        .is_ok()
}

// ============================================================================
// Hasher contract
// ============================================================================

/// `hash(plaintext) -> digest`
///
/// Same input yields a different digest on every call.
pub fn hash_password(plaintext: &str, pepper: Option<&[u8]>) -> Result<String, PasswordHashError> {
    ClearTextPassword::new(plaintext)
        .hash(pepper)
        .map(HashedPassword::into_phc_string)
}

/// `compare(plaintext, digest) -> bool`
///
/// Never fails: a malformed digest is simply not a match.
pub fn verify_password(plaintext: &str, digest: &str, pepper: Option<&[u8]>) -> bool {
    verify_digest(&ClearTextPassword::new(plaintext), digest, pepper)
}

/// [`hash_password`] on the blocking pool
pub async fn hash_password_async(
    password: ClearTextPassword,
    pepper: Option<Vec<u8>>,
) -> Result<String, PasswordHashError> {
    tokio::task::spawn_blocking(move || {
        password
            .hash(pepper.as_deref())
            .map(HashedPassword::into_phc_string)
    })
    .await
    .map_err(|e| PasswordHashError::TaskFailed(e.to_string()))?
}

/// [`verify_password`] on the blocking pool
///
/// Only a failed blocking task is an error; a mismatch or malformed digest
/// is `Ok(false)`.
pub async fn verify_password_async(
    password: ClearTextPassword,
    digest: String,
    pepper: Option<Vec<u8>>,
) -> Result<bool, PasswordHashError> {
    tokio::task::spawn_blocking(move || verify_digest(&password, &digest, pepper.as_deref()))
        .await
        .map_err(|e| PasswordHashError::TaskFailed(e.to_string()))
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify() {
        let digest = hash_password("1234", None).unwrap();

        assert!(verify_password("1234", &digest, None));
        assert!(!verify_password("12345", &digest, None));
    }

    #[test]
    fn test_same_input_hashes_differently() {
        let a = hash_password("correct horse", None).unwrap();
        let b = hash_password("correct horse", None).unwrap();

        assert_ne!(a, b);
        assert!(a.starts_with("$argon2id$"));
        assert!(verify_password("correct horse", &a, None));
        assert!(verify_password("correct horse", &b, None));
    }

    #[test]
    fn test_malformed_digest_is_false() {
        assert!(!verify_password("1234", "", None));
        assert!(!verify_password("1234", "not_a_valid_hash", None));
        assert!(!verify_password("1234", "$argon2id$v=19$garbage", None));
    }

    #[test]
    fn test_hash_with_pepper() {
        let pepper = b"my_secret_pepper";
        let digest = hash_password("TestPassword123!", Some(pepper)).unwrap();

        assert!(verify_password("TestPassword123!", &digest, Some(pepper)));
        assert!(!verify_password("TestPassword123!", &digest, None));
        assert!(!verify_password("TestPassword123!", &digest, Some(b"wrong_pepper")));
    }

    #[test]
    fn test_nfkc_normalization() {
        // Fullwidth digits normalize to ASCII
        let digest = hash_password("１２３４", None).unwrap();
        assert!(verify_password("1234", &digest, None));
    }

    #[test]
    fn test_debug_redaction() {
        let password = ClearTextPassword::new("secret");
        let debug_output = format!("{:?}", password);
        assert!(debug_output.contains("REDACTED"));
        assert!(!debug_output.contains("secret"));
    }

    #[tokio::test]
    async fn test_async_helpers() {
        let digest = hash_password_async(ClearTextPassword::new("hunter22"), None)
            .await
            .unwrap();

        let ok = verify_password_async(ClearTextPassword::new("hunter22"), digest.clone(), None)
            .await
            .unwrap();
        assert!(ok);

        let bad = verify_password_async(ClearTextPassword::new("hunter23"), digest, None)
            .await
            .unwrap();
        assert!(!bad);
    }
}
