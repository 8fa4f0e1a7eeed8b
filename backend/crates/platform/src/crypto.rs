//! Cryptographic Utilities
//!
//! Secure randomness and HMAC-SHA256 signed tokens of the form
//! `<payload>.<base64url(signature)>`.

use base64::{Engine, engine::general_purpose};
use hmac::{Hmac, Mac};
use rand::{RngCore, rngs::OsRng};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Length of a signing key in bytes
pub const KEY_LENGTH: usize = 32;

/// Generate a random signing key
pub fn random_key() -> [u8; KEY_LENGTH] {
    let mut key = [0u8; KEY_LENGTH];
    OsRng.fill_bytes(&mut key);
    key
}

/// Sign `payload` and return `payload.signature`
///
/// The payload must not contain `.`.
pub fn sign_token(key: &[u8; KEY_LENGTH], payload: &str) -> String {
    let signature = mac(key, payload).finalize().into_bytes();
    format!(
        "{}.{}",
        payload,
        general_purpose::URL_SAFE_NO_PAD.encode(signature)
    )
}

/// Verify a token produced by [`sign_token`] and return its payload
///
/// Any malformed or tampered token yields `None`. The signature check is
/// constant-time.
pub fn verify_token<'a>(key: &[u8; KEY_LENGTH], token: &'a str) -> Option<&'a str> {
    let (payload, signature_b64) = token.split_once('.')?;
    if signature_b64.contains('.') {
        return None;
    }

    let signature = general_purpose::URL_SAFE_NO_PAD
        .decode(signature_b64)
        .ok()?;

    mac(key, payload).verify_slice(&signature).ok()?;
    Some(payload)
}

fn mac(key: &[u8; KEY_LENGTH], payload: &str) -> HmacSha256 {
    let mut mac = HmacSha256::new_from_slice(key).expect("HMAC can take key of any size");
    mac.update(payload.as_bytes());
    mac
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_keys_differ() {
        let key = random_key();
        assert!(key.iter().any(|&b| b != 0));
        assert_ne!(key, random_key());
    }

    #[test]
    fn test_sign_and_verify() {
        let key = [42u8; KEY_LENGTH];
        let token = sign_token(&key, "session-id");
        assert!(token.starts_with("session-id."));
        assert_eq!(verify_token(&key, &token), Some("session-id"));
    }

    #[test]
    fn test_signature_is_deterministic_sha256_width() {
        let key = [0u8; KEY_LENGTH];
        let token = sign_token(&key, "abc");
        assert_eq!(token, sign_token(&key, "abc"));

        let (_, sig) = token.split_once('.').unwrap();
        let raw = general_purpose::URL_SAFE_NO_PAD.decode(sig).unwrap();
        assert_eq!(raw.len(), 32);
    }

    #[test]
    fn test_verify_rejects_wrong_key() {
        let token = sign_token(&[1u8; KEY_LENGTH], "payload");
        assert_eq!(verify_token(&[2u8; KEY_LENGTH], &token), None);
    }

    #[test]
    fn test_verify_rejects_tampering() {
        let key = [7u8; KEY_LENGTH];
        let token = sign_token(&key, "payload");
        let (_, sig) = token.split_once('.').unwrap();

        assert_eq!(verify_token(&key, &format!("other.{sig}")), None);
        assert_eq!(verify_token(&key, "payload"), None);
        assert_eq!(verify_token(&key, "payload.!!!"), None);
        assert_eq!(verify_token(&key, &format!("{token}.extra")), None);
    }
}
