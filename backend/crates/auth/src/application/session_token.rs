//! Session Token
//!
//! The cookie value is `<session uuid>.<HMAC-SHA256 signature>`. Only the
//! signature check happens here; the session itself lives in the store.

use platform::crypto::{sign_token, verify_token};
use uuid::Uuid;

use crate::application::config::AuthConfig;

/// Sign a session id for the cookie
pub fn issue(config: &AuthConfig, session_id: Uuid) -> String {
    sign_token(&config.session_secret, &session_id.to_string())
}

/// Recover the session id from a cookie value
///
/// Returns `None` for anything not signed with the configured secret.
pub fn parse(config: &AuthConfig, token: &str) -> Option<Uuid> {
    verify_token(&config.session_secret, token)?.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issue_then_parse() {
        let config = AuthConfig::with_random_secret();
        let id = Uuid::new_v4();
        assert_eq!(parse(&config, &issue(&config, id)), Some(id));
    }

    #[test]
    fn test_other_secret_rejected() {
        let token = issue(&AuthConfig::with_random_secret(), Uuid::new_v4());
        assert_eq!(parse(&AuthConfig::with_random_secret(), &token), None);
    }

    #[test]
    fn test_signed_garbage_rejected() {
        let config = AuthConfig::with_random_secret();
        let token = sign_token(&config.session_secret, "not-a-uuid");
        assert_eq!(parse(&config, &token), None);
    }
}
