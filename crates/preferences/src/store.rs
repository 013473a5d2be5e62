//! Preference store.

use std::sync::{Arc, Mutex, MutexGuard};

use serde_json::Value;
use storage::{json, kv, Database};
use tokio::sync::{watch, RwLock};
use tracing::{info, warn};

use crate::error::{PreferenceError, Result};
use crate::groups::{
    AppPreferences, LanguageRegion, NotificationSettings, PreferenceGroup, Preferences,
    PrivacySettings, SettingsGroup,
};
use crate::theme::{is_dark, ColorScheme, SchemeFollower};

/// Holds the four preference groups, persists every change, and derives
/// the dark-mode flag from the theme.
///
/// Create one per app with [`PreferenceStore::open`] and call
/// [`dispose`](Self::dispose) when shutting down.
pub struct PreferenceStore {
    database: Database,
    state: RwLock<Preferences>,
    dark_mode: Arc<watch::Sender<bool>>,
    follower: Mutex<SchemeFollower>,
}

impl PreferenceStore {
    /// Create a store holding defaults. Nothing is read until [`load`](Self::load).
    ///
    /// `system_scheme` carries the host's color scheme and its changes.
    pub fn new(database: Database, system_scheme: watch::Receiver<ColorScheme>) -> Self {
        let initial = is_dark(AppPreferences::default().theme, *system_scheme.borrow());
        let (dark_mode, _) = watch::channel(initial);
        let dark_mode = Arc::new(dark_mode);
        let follower = SchemeFollower::new(system_scheme, Arc::clone(&dark_mode));

        Self {
            database,
            state: RwLock::new(Preferences::default()),
            dark_mode,
            follower: Mutex::new(follower),
        }
    }

    /// Create a store and load persisted preferences.
    pub async fn open(database: Database, system_scheme: watch::Receiver<ColorScheme>) -> Result<Self> {
        let store = Self::new(database, system_scheme);
        store.load().await?;
        Ok(store)
    }

    /// Read every group from storage, falling back to defaults for missing
    /// groups, missing keys and malformed values.
    pub async fn load(&self) -> Result<()> {
        let loaded = Preferences {
            notifications: self.load_group().await?,
            privacy: self.load_group().await?,
            app: self.load_group().await?,
            language_region: self.load_group().await?,
        };

        let mut state = self.state.write().await;
        *state = loaded;
        self.follower().apply(state.app.theme);
        drop(state);

        info!("Preferences loaded");
        Ok(())
    }

    async fn load_group<G: SettingsGroup>(&self) -> Result<G> {
        let stored = json::load_json::<G>(self.database.pool(), G::GROUP.storage_key()).await?;
        Ok(stored.unwrap_or_default())
    }

    /// Current value of all groups.
    pub async fn snapshot(&self) -> Preferences {
        self.state.read().await.clone()
    }

    /// Current value of one group.
    pub async fn get<G: SettingsGroup>(&self) -> G {
        G::get(&*self.state.read().await).clone()
    }

    pub async fn notifications(&self) -> NotificationSettings {
        self.get().await
    }

    pub async fn privacy(&self) -> PrivacySettings {
        self.get().await
    }

    pub async fn app_preferences(&self) -> AppPreferences {
        self.get().await
    }

    pub async fn language_region(&self) -> LanguageRegion {
        self.get().await
    }

    /// Modify one group in place and persist the whole group.
    ///
    /// In-memory state only changes once the write has succeeded.
    pub async fn update<G, F>(&self, apply: F) -> Result<G>
    where
        G: SettingsGroup,
        F: FnOnce(&mut G),
    {
        self.try_update(|group: &mut G| {
            apply(group);
            Ok(())
        })
        .await
    }

    /// Like [`update`](Self::update), but `apply` may reject the change.
    async fn try_update<G, F>(&self, apply: F) -> Result<G>
    where
        G: SettingsGroup,
        F: FnOnce(&mut G) -> Result<()>,
    {
        let mut state = self.state.write().await;
        let mut updated = G::get(&state).clone();
        apply(&mut updated)?;

        json::save_json(self.database.pool(), G::GROUP.storage_key(), &updated).await?;
        *G::get_mut(&mut state) = updated.clone();
        self.follower().apply(state.app.theme);

        Ok(updated)
    }

    /// Shallow-merge a JSON object of settings into a group and persist it.
    ///
    /// Keys the group does not know are ignored. A value of the wrong type
    /// rejects the whole update and leaves the group unchanged.
    pub async fn merge_partial(&self, group: PreferenceGroup, partial: Value) -> Result<()> {
        match group {
            PreferenceGroup::Notifications => self.merge::<NotificationSettings>(partial).await,
            PreferenceGroup::Privacy => self.merge::<PrivacySettings>(partial).await,
            PreferenceGroup::AppPreferences => self.merge::<AppPreferences>(partial).await,
            PreferenceGroup::LanguageRegion => self.merge::<LanguageRegion>(partial).await,
        }
    }

    async fn merge<G: SettingsGroup>(&self, partial: Value) -> Result<()> {
        let invalid = |message: String| PreferenceError::InvalidValue {
            group: G::GROUP,
            message,
        };

        let Value::Object(partial) = partial else {
            return Err(invalid("expected a JSON object".to_string()));
        };

        self.try_update::<G, _>(|group| {
            let mut merged = match serde_json::to_value(&*group) {
                Ok(Value::Object(map)) => map,
                Ok(_) => return Err(invalid("group is not an object".to_string())),
                Err(err) => return Err(invalid(err.to_string())),
            };
            merged.extend(partial);

            *group = serde_json::from_value(Value::Object(merged)).map_err(|err| invalid(err.to_string()))?;
            Ok(())
        })
        .await?;
        Ok(())
    }

    /// Restore every group to its defaults and delete all persisted groups.
    ///
    /// Storage is cleared first in one transaction; in-memory state is
    /// replaced under a single write lock afterwards.
    pub async fn reset_to_defaults(&self) -> Result<()> {
        let mut state = self.state.write().await;

        let keys: Vec<&str> = PreferenceGroup::ALL.iter().map(|g| g.storage_key()).collect();
        kv::delete_entries(self.database.pool(), &keys).await?;

        *state = Preferences::default();
        self.follower().apply(state.app.theme);

        info!("Preferences reset to defaults");
        Ok(())
    }

    /// Whether the UI should currently render in dark mode.
    pub fn dark_mode(&self) -> bool {
        *self.dark_mode.borrow()
    }

    /// Receiver that observes every dark-mode change.
    pub fn subscribe_dark_mode(&self) -> watch::Receiver<bool> {
        self.dark_mode.subscribe()
    }

    /// Whether the store is currently following the host color scheme.
    pub fn is_following_system(&self) -> bool {
        self.follower().is_following()
    }

    /// Stop following the host color scheme.
    pub fn dispose(&self) {
        self.follower().stop();
    }

    fn follower(&self) -> MutexGuard<'_, SchemeFollower> {
        self.follower.lock().unwrap_or_else(|poisoned| {
            warn!("Scheme follower lock was poisoned");
            poisoned.into_inner()
        })
    }
}
