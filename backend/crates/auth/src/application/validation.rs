//! Validation Pipeline
//!
//! Each stage is a pass/fail precondition on the submitted credentials.
//! Stages compose into ordered pipelines that stop at the first failure;
//! nothing after a failed stage runs, including the handler.
//!
//! | Stage | Fails when | Result |
//! |---|---|---|
//! | `UsernameAvailable` | the user name is already registered | 422 "Username taken" |
//! | `UsernameExists` | the user name is not registered | 401 "Invalid credentials" |
//! | `PasswordLength` | password absent or 3 chars or shorter | 422 "Password must be longer than 3 chars" |
//!
//! Credential-store faults pass through untouched so they surface as
//! server errors rather than as a validation result.

use crate::domain::repository::UserRepository;
use crate::domain::value_object::user_name::UserName;
use crate::error::{AuthError, AuthResult};

/// Passwords must be strictly longer than this many characters
pub const PASSWORD_MIN_EXCLUSIVE: usize = 3;

/// Submitted credentials as seen by the stages
#[derive(Debug, Clone, Copy)]
pub struct Credentials<'a> {
    pub username: &'a UserName,
    pub password: Option<&'a str>,
}

/// A single validation stage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    UsernameAvailable,
    UsernameExists,
    PasswordLength,
}

/// register: `[UsernameAvailable, PasswordLength]`
pub const REGISTER_PIPELINE: &[Stage] = &[Stage::UsernameAvailable, Stage::PasswordLength];

/// login: `[UsernameExists]`; the password is checked by the use case
pub const LOGIN_PIPELINE: &[Stage] = &[Stage::UsernameExists];

impl Stage {
    pub async fn check<U>(self, repo: &U, input: Credentials<'_>) -> AuthResult<()>
    where
        U: UserRepository + Sync,
    {
        match self {
            Stage::UsernameAvailable => username_available(repo, input.username).await,
            Stage::UsernameExists => username_exists(repo, input.username).await,
            Stage::PasswordLength => password_length(input.password),
        }
    }
}

/// Run `stages` in order, stopping at the first failure
pub async fn run_pipeline<U>(stages: &[Stage], repo: &U, input: Credentials<'_>) -> AuthResult<()>
where
    U: UserRepository + Sync,
{
    for stage in stages {
        stage.check(repo, input).await?;
    }
    Ok(())
}

pub async fn username_available<U>(repo: &U, username: &UserName) -> AuthResult<()>
where
    U: UserRepository + Sync,
{
    match repo.find_by_username(username).await? {
        Some(_) => Err(AuthError::UsernameTaken),
        None => Ok(()),
    }
}

pub async fn username_exists<U>(repo: &U, username: &UserName) -> AuthResult<()>
where
    U: UserRepository + Sync,
{
    match repo.find_by_username(username).await? {
        Some(_) => Ok(()),
        None => Err(AuthError::InvalidCredentials),
    }
}

/// Length is counted in characters, not bytes
pub fn password_length(password: Option<&str>) -> AuthResult<()> {
    match password {
        Some(p) if p.chars().count() > PASSWORD_MIN_EXCLUSIVE => Ok(()),
        _ => Err(AuthError::PasswordTooShort),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entity::user::NewUser;
    use crate::infra::memory::InMemoryUserRepository;
    use crate::test_support::FailingUserRepository;

    async fn repo_with(names: &[&str]) -> InMemoryUserRepository {
        let repo = InMemoryUserRepository::new();
        for name in names {
            repo.insert(NewUser::new(UserName::new(name).unwrap(), "hash".into()))
                .await
                .unwrap();
        }
        repo
    }

    fn name(s: &str) -> UserName {
        UserName::new(s).unwrap()
    }

    #[test]
    fn test_password_length_boundary() {
        assert!(matches!(password_length(None), Err(AuthError::PasswordTooShort)));
        assert!(matches!(password_length(Some("")), Err(AuthError::PasswordTooShort)));
        assert!(matches!(password_length(Some("123")), Err(AuthError::PasswordTooShort)));
        assert!(password_length(Some("1234")).is_ok());
    }

    #[test]
    fn test_password_length_counts_chars() {
        // 3 chars, 9 bytes
        assert!(matches!(password_length(Some("日本語")), Err(AuthError::PasswordTooShort)));
        assert!(password_length(Some("日本語!")).is_ok());
    }

    #[tokio::test]
    async fn test_username_available() {
        let repo = repo_with(&["sue"]).await;

        assert!(matches!(
            username_available(&repo, &name("sue")).await,
            Err(AuthError::UsernameTaken)
        ));
        assert!(username_available(&repo, &name("bob")).await.is_ok());
    }

    #[tokio::test]
    async fn test_username_exists() {
        let repo = repo_with(&["sue"]).await;

        assert!(username_exists(&repo, &name("sue")).await.is_ok());
        assert!(matches!(
            username_exists(&repo, &name("bob")).await,
            Err(AuthError::InvalidCredentials)
        ));
    }

    #[tokio::test]
    async fn test_register_pipeline_stops_at_first_failure() {
        let repo = repo_with(&["sue"]).await;
        let taken = name("sue");

        // Both stages would fail; the first one decides.
        let result = run_pipeline(
            REGISTER_PIPELINE,
            &repo,
            Credentials {
                username: &taken,
                password: Some("1"),
            },
        )
        .await;
        assert!(matches!(result, Err(AuthError::UsernameTaken)));

        let free = name("bob");
        let result = run_pipeline(
            REGISTER_PIPELINE,
            &repo,
            Credentials {
                username: &free,
                password: Some("1"),
            },
        )
        .await;
        assert!(matches!(result, Err(AuthError::PasswordTooShort)));
    }

    #[tokio::test]
    async fn test_store_fault_is_not_a_validation_failure() {
        let repo = FailingUserRepository;
        let sue = name("sue");
        let input = Credentials {
            username: &sue,
            password: Some("1234"),
        };

        let err = run_pipeline(LOGIN_PIPELINE, &repo, input).await.unwrap_err();
        assert!(matches!(err, AuthError::Database(_)));
        assert!(!err.is_validation_failure());

        let err = run_pipeline(REGISTER_PIPELINE, &repo, input).await.unwrap_err();
        assert!(matches!(err, AuthError::Database(_)));
    }
}
