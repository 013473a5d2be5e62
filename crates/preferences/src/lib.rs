//! User preferences for Roamly.
//!
//! Four independent groups (notifications, privacy, app preferences,
//! language/region), each persisted under its own key and merged over
//! compile-time defaults when loaded. The app-preferences theme also drives
//! a dark-mode flag, following the host color scheme when set to `system`.
//!
//! # Example
//!
//! ```no_run
//! use preferences::{AppPreferences, ColorScheme, PreferenceStore, Theme};
//! use storage::Database;
//! use tokio::sync::watch;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let db = Database::in_memory().await?;
//! let (_host_scheme, scheme_rx) = watch::channel(ColorScheme::Light);
//! let store = PreferenceStore::open(db, scheme_rx).await?;
//!
//! store.update::<AppPreferences, _>(|app| app.theme = Theme::Dark).await?;
//! assert!(store.dark_mode());
//!
//! store.dispose();
//! # Ok(())
//! # }
//! ```

mod error;
mod groups;
mod store;
mod theme;

pub use error::{PreferenceError, Result};
pub use groups::{
    AppPreferences, LanguageRegion, MapStyle, NotificationSettings, PreferenceGroup, Preferences,
    PrivacySettings, SettingsGroup, Theme, Units,
};
pub use store::PreferenceStore;
pub use theme::{is_dark, ColorScheme};
