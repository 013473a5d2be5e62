//! Authentication backends.

use std::time::Duration;

use async_trait::async_trait;
use tokio::time::sleep;
use uuid::Uuid;

use crate::error::AuthError;
use crate::model::UserSession;

/// Something that can turn credentials into a user.
#[async_trait]
pub trait Authenticator: Send + Sync {
    /// Sign in an existing user. `username` overrides the derived display name.
    async fn login(
        &self,
        email: &str,
        password: &str,
        username: Option<&str>,
    ) -> Result<UserSession, AuthError>;

    /// Register a new user.
    async fn signup(&self, email: &str, password: &str, username: &str) -> Result<UserSession, AuthError>;

    /// Get the name of this authenticator.
    fn name(&self) -> &str;
}

/// Stub authenticator: waits a fixed delay, then accepts any credentials.
pub struct MockAuthenticator {
    delay: Duration,
}

impl MockAuthenticator {
    /// Default simulated round-trip.
    pub const DEFAULT_DELAY: Duration = Duration::from_millis(1000);

    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    /// Create an authenticator with a delay in milliseconds.
    pub fn with_millis(millis: u64) -> Self {
        Self::new(Duration::from_millis(millis))
    }

    /// No delay at all, for tests.
    pub fn instant() -> Self {
        Self::new(Duration::ZERO)
    }

    fn user(username: &str, email: &str) -> UserSession {
        UserSession {
            id: Uuid::new_v4().to_string(),
            username: username.to_string(),
            email: email.to_string(),
            phone: None,
            bio: None,
            location: None,
        }
    }
}

impl Default for MockAuthenticator {
    fn default() -> Self {
        Self::new(Self::DEFAULT_DELAY)
    }
}

/// Display name derived from the part of the email before `@`.
pub fn username_from_email(email: &str) -> &str {
    email.split('@').next().unwrap_or(email)
}

#[async_trait]
impl Authenticator for MockAuthenticator {
    async fn login(
        &self,
        email: &str,
        _password: &str,
        username: Option<&str>,
    ) -> Result<UserSession, AuthError> {
        sleep(self.delay).await;
        let username = username
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| username_from_email(email));
        Ok(Self::user(username, email))
    }

    async fn signup(&self, email: &str, _password: &str, username: &str) -> Result<UserSession, AuthError> {
        sleep(self.delay).await;
        Ok(Self::user(username, email))
    }

    fn name(&self) -> &str {
        "MockAuthenticator"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    #[tokio::test]
    async fn test_login_derives_username_from_email() {
        let auth = MockAuthenticator::instant();
        let user = auth.login("priya.sharma@example.com", "pw", None).await.unwrap();
        assert_eq!(user.username, "priya.sharma");
        assert_eq!(user.email, "priya.sharma@example.com");
        assert!(!user.id.is_empty());
    }

    #[tokio::test]
    async fn test_blank_username_falls_back_to_email() {
        let auth = MockAuthenticator::instant();
        let user = auth.login("arjun@example.com", "pw", Some("  ")).await.unwrap();
        assert_eq!(user.username, "arjun");

        let user = auth.login("arjun@example.com", "pw", Some("Arjun K")).await.unwrap();
        assert_eq!(user.username, "Arjun K");
    }

    #[tokio::test]
    async fn test_login_delay() {
        let auth = MockAuthenticator::with_millis(50);

        let start = Instant::now();
        auth.signup("a@b.co", "pw", "arjun").await.unwrap();
        assert!(start.elapsed() >= Duration::from_millis(50));
    }

    #[tokio::test]
    async fn test_ids_are_unique() {
        let auth = MockAuthenticator::instant();
        let a = auth.signup("a@b.co", "pw", "a").await.unwrap();
        let b = auth.signup("a@b.co", "pw", "a").await.unwrap();
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_authenticator_name() {
        assert_eq!(MockAuthenticator::default().name(), "MockAuthenticator");
    }
}
