//! Session store.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use storage::{json, keys, kv, Database};
use tokio::sync::RwLock;
use tracing::{info, warn};

use crate::authenticator::Authenticator;
use crate::error::AuthError;
use crate::model::{ProfileUpdate, UserSession};
use crate::validation::{validate_bio, validate_email, validate_username};

/// Holds the signed-in user and persists it under [`keys::USER`].
pub struct SessionStore {
    database: Database,
    authenticator: Arc<dyn Authenticator>,
    user: RwLock<Option<UserSession>>,
    loading: AtomicBool,
}

/// Clears the loading flag however the call ends.
struct LoadingGuard<'a>(&'a AtomicBool);

impl<'a> LoadingGuard<'a> {
    fn start(flag: &'a AtomicBool) -> Self {
        flag.store(true, Ordering::SeqCst);
        Self(flag)
    }
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

impl SessionStore {
    pub fn new(database: Database, authenticator: Arc<dyn Authenticator>) -> Self {
        Self {
            database,
            authenticator,
            user: RwLock::new(None),
            loading: AtomicBool::new(false),
        }
    }

    /// Create a store and restore any persisted user.
    pub async fn open(database: Database, authenticator: Arc<dyn Authenticator>) -> Result<Self, AuthError> {
        let store = Self::new(database, authenticator);
        store.load().await?;
        Ok(store)
    }

    /// Restore the persisted user. A malformed record means logged out.
    pub async fn load(&self) -> Result<(), AuthError> {
        let stored: Option<UserSession> = json::load_json(self.database.pool(), keys::USER).await?;
        if let Some(user) = &stored {
            info!("Restored session for {}", user.username);
        }
        *self.user.write().await = stored;
        Ok(())
    }

    pub async fn current_user(&self) -> Option<UserSession> {
        self.user.read().await.clone()
    }

    pub async fn is_logged_in(&self) -> bool {
        self.user.read().await.is_some()
    }

    /// Whether a login or signup call is in flight.
    pub fn is_loading(&self) -> bool {
        self.loading.load(Ordering::SeqCst)
    }

    /// Sign in. Without `username` the display name is the email's local part.
    pub async fn login(
        &self,
        email: &str,
        password: &str,
        username: Option<&str>,
    ) -> Result<UserSession, AuthError> {
        let email = email.trim();
        validate_email(email)?;

        let _loading = LoadingGuard::start(&self.loading);
        let user = self
            .authenticator
            .login(email, password, username)
            .await
            .map_err(|err| {
                warn!("Login failed via {}: {}", self.authenticator.name(), err);
                match err {
                    AuthError::Invalid(_) | AuthError::Storage(_) => err,
                    _ => AuthError::LoginFailed,
                }
            })?;

        self.replace_user(user).await
    }

    /// Register and sign in. The username is required.
    pub async fn signup(&self, email: &str, password: &str, username: &str) -> Result<UserSession, AuthError> {
        validate_username(username)?;
        let email = email.trim();
        validate_email(email)?;

        let _loading = LoadingGuard::start(&self.loading);
        let user = self
            .authenticator
            .signup(email, password, username.trim())
            .await
            .map_err(|err| {
                warn!("Signup failed via {}: {}", self.authenticator.name(), err);
                match err {
                    AuthError::Invalid(_) | AuthError::Storage(_) => err,
                    _ => AuthError::SignupFailed,
                }
            })?;

        self.replace_user(user).await
    }

    async fn replace_user(&self, user: UserSession) -> Result<UserSession, AuthError> {
        json::save_json(self.database.pool(), keys::USER, &user).await?;
        info!("Signed in as {}", user.username);
        *self.user.write().await = Some(user.clone());
        Ok(user)
    }

    /// Merge profile edits into the current user and persist.
    ///
    /// Returns `Ok(None)` without writing anything when nobody is signed in.
    pub async fn update_profile(&self, update: ProfileUpdate) -> Result<Option<UserSession>, AuthError> {
        if let Some(username) = &update.username {
            validate_username(username)?;
        }
        if let Some(email) = &update.email {
            validate_email(email)?;
        }
        if let Some(bio) = &update.bio {
            validate_bio(bio)?;
        }

        let mut current = self.user.write().await;
        let Some(user) = current.as_ref() else {
            return Ok(None);
        };

        let mut updated = user.clone();
        update.apply_to(&mut updated);
        json::save_json(self.database.pool(), keys::USER, &updated).await?;
        *current = Some(updated.clone());

        Ok(Some(updated))
    }

    /// Sign out and forget the persisted user.
    pub async fn logout(&self) -> Result<(), AuthError> {
        let mut current = self.user.write().await;
        kv::delete_entry(self.database.pool(), keys::USER).await?;
        if let Some(user) = current.take() {
            info!("Signed out {}", user.username);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::authenticator::MockAuthenticator;
    use async_trait::async_trait;
    use std::time::Duration;

    struct RejectingAuthenticator;

    #[async_trait]
    impl Authenticator for RejectingAuthenticator {
        async fn login(&self, _: &str, _: &str, _: Option<&str>) -> Result<UserSession, AuthError> {
            Err(AuthError::LoginFailed)
        }

        async fn signup(&self, _: &str, _: &str, _: &str) -> Result<UserSession, AuthError> {
            Err(AuthError::SignupFailed)
        }

        fn name(&self) -> &str {
            "RejectingAuthenticator"
        }
    }

    async fn store_with(db: &Database) -> SessionStore {
        SessionStore::open(db.clone(), Arc::new(MockAuthenticator::instant()))
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_login_persists_user() {
        let db = Database::in_memory().await.unwrap();
        let store = store_with(&db).await;

        let user = store.login("meera@example.com", "secret", None).await.unwrap();
        assert_eq!(user.username, "meera");
        assert!(store.is_logged_in().await);

        let reloaded = store_with(&db).await;
        assert_eq!(reloaded.current_user().await, Some(user));
    }

    #[tokio::test]
    async fn test_signup_requires_username() {
        let db = Database::in_memory().await.unwrap();
        let store = store_with(&db).await;

        let err = store.signup("meera@example.com", "pw", "  ").await.unwrap_err();
        assert_eq!(err.to_string(), "Username is required");
        assert!(!store.is_logged_in().await);
    }

    #[tokio::test]
    async fn test_invalid_email_is_reported_inline() {
        let db = Database::in_memory().await.unwrap();
        let store = store_with(&db).await;

        let err = store.login("not-an-email", "pw", None).await.unwrap_err();
        assert!(err.to_string().starts_with("Invalid email"));
    }

    #[tokio::test]
    async fn test_rejection_surfaces_message() {
        let db = Database::in_memory().await.unwrap();
        let store = SessionStore::new(db, Arc::new(RejectingAuthenticator));

        let err = store.login("a@b.co", "pw", None).await.unwrap_err();
        assert_eq!(err.to_string(), "Login failed");
        let err = store.signup("a@b.co", "pw", "abc").await.unwrap_err();
        assert_eq!(err.to_string(), "Signup failed");
        assert!(!store.is_loading());
    }

    #[tokio::test]
    async fn test_loading_flag_while_in_flight() {
        let db = Database::in_memory().await.unwrap();
        let store = Arc::new(SessionStore::new(
            db,
            Arc::new(MockAuthenticator::new(Duration::from_secs(1))),
        ));

        let pending = {
            let store = Arc::clone(&store);
            tokio::spawn(async move { store.login("a@b.co", "pw", None).await })
        };

        tokio::time::sleep(Duration::from_millis(10)).await;
        assert!(store.is_loading());

        pending.await.unwrap().unwrap();
        assert!(!store.is_loading());
    }

    #[tokio::test]
    async fn test_update_profile_merges() {
        let db = Database::in_memory().await.unwrap();
        let store = store_with(&db).await;
        store.signup("ravi@example.com", "pw", "ravi").await.unwrap();

        let updated = store
            .update_profile(ProfileUpdate {
                bio: Some("Chasing monsoons".to_string()),
                location: Some("Pune".to_string()),
                ..ProfileUpdate::default()
            })
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated.username, "ravi");
        assert_eq!(updated.bio.as_deref(), Some("Chasing monsoons"));

        let reloaded = store_with(&db).await;
        assert_eq!(reloaded.current_user().await.unwrap().location.as_deref(), Some("Pune"));
    }

    #[tokio::test]
    async fn test_update_profile_without_user_is_noop() {
        let db = Database::in_memory().await.unwrap();
        let store = store_with(&db).await;

        let result = store
            .update_profile(ProfileUpdate {
                bio: Some("hi".to_string()),
                ..ProfileUpdate::default()
            })
            .await
            .unwrap();
        assert!(result.is_none());
        assert!(kv::get_entry(db.pool(), keys::USER).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_logout_clears_storage() {
        let db = Database::in_memory().await.unwrap();
        let store = store_with(&db).await;
        store.login("a@b.co", "pw", Some("Asha")).await.unwrap();

        store.logout().await.unwrap();
        assert!(!store.is_logged_in().await);

        let reloaded = store_with(&db).await;
        assert!(reloaded.current_user().await.is_none());
    }

    #[tokio::test]
    async fn test_malformed_user_means_logged_out() {
        let db = Database::in_memory().await.unwrap();
        kv::put_entry(db.pool(), keys::USER, "{\"id\": 5}").await.unwrap();

        let store = store_with(&db).await;
        assert!(store.current_user().await.is_none());
    }
}
