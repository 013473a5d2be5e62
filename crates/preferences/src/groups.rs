//! The four preference groups and their defaults.
//!
//! Every group deserializes with `#[serde(default)]`, so a persisted blob
//! missing keys gets the default for each missing key, and keys the group
//! does not know are ignored.

use std::fmt;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use storage::keys;

/// Identifies one of the independent settings groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PreferenceGroup {
    Notifications,
    Privacy,
    AppPreferences,
    LanguageRegion,
}

impl PreferenceGroup {
    pub const ALL: [PreferenceGroup; 4] = [
        PreferenceGroup::Notifications,
        PreferenceGroup::Privacy,
        PreferenceGroup::AppPreferences,
        PreferenceGroup::LanguageRegion,
    ];

    /// Key the group is persisted under.
    pub fn storage_key(&self) -> &'static str {
        match self {
            PreferenceGroup::Notifications => keys::PREFERENCES_NOTIFICATIONS,
            PreferenceGroup::Privacy => keys::PREFERENCES_PRIVACY,
            PreferenceGroup::AppPreferences => keys::PREFERENCES_APP,
            PreferenceGroup::LanguageRegion => keys::PREFERENCES_LANGUAGE_REGION,
        }
    }
}

impl fmt::Display for PreferenceGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PreferenceGroup::Notifications => "notification",
            PreferenceGroup::Privacy => "privacy",
            PreferenceGroup::AppPreferences => "app",
            PreferenceGroup::LanguageRegion => "language/region",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NotificationSettings {
    pub push_notifications: bool,
    pub email_notifications: bool,
    pub sms_notifications: bool,
    pub trip_reminders: bool,
    pub friend_requests: bool,
    pub group_messages: bool,
    pub direct_messages: bool,
    pub promotions: bool,
    pub weather_alerts: bool,
    pub price_alerts: bool,
}

impl Default for NotificationSettings {
    fn default() -> Self {
        Self {
            push_notifications: true,
            email_notifications: false,
            sms_notifications: false,
            trip_reminders: true,
            friend_requests: true,
            group_messages: true,
            direct_messages: true,
            promotions: false,
            weather_alerts: true,
            price_alerts: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PrivacySettings {
    pub profile_visibility: bool,
    pub show_travel_history: bool,
    pub allow_friend_requests: bool,
    pub show_online_status: bool,
    pub data_sharing: bool,
    pub location_tracking: bool,
    pub two_factor_auth: bool,
}

impl Default for PrivacySettings {
    fn default() -> Self {
        Self {
            profile_visibility: true,
            show_travel_history: false,
            allow_friend_requests: true,
            show_online_status: true,
            data_sharing: false,
            location_tracking: true,
            two_factor_auth: false,
        }
    }
}

/// Visual theme choice.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
    /// Follow the host's color scheme.
    #[default]
    System,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MapStyle {
    #[default]
    Standard,
    Satellite,
    Terrain,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Units {
    #[default]
    Metric,
    Imperial,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AppPreferences {
    pub auto_sync: bool,
    pub offline_mode: bool,
    pub high_quality_images: bool,
    pub background_refresh: bool,
    pub sound_effects: bool,
    pub haptic_feedback: bool,
    pub theme: Theme,
    pub map_style: MapStyle,
    pub units: Units,
}

impl Default for AppPreferences {
    fn default() -> Self {
        Self {
            auto_sync: true,
            offline_mode: false,
            high_quality_images: true,
            background_refresh: true,
            sound_effects: false,
            haptic_feedback: true,
            theme: Theme::System,
            map_style: MapStyle::Standard,
            units: Units::Metric,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LanguageRegion {
    pub language: String,
    pub region: String,
    pub currency: String,
}

impl Default for LanguageRegion {
    fn default() -> Self {
        Self {
            language: "en".to_string(),
            region: "US".to_string(),
            currency: "USD".to_string(),
        }
    }
}

/// Snapshot of all four groups.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Preferences {
    pub notifications: NotificationSettings,
    pub privacy: PrivacySettings,
    pub app: AppPreferences,
    pub language_region: LanguageRegion,
}

/// A settings group that can be addressed generically inside [`Preferences`].
pub trait SettingsGroup:
    Serialize + DeserializeOwned + Default + Clone + PartialEq + Send + Sync + 'static
{
    const GROUP: PreferenceGroup;

    fn get(prefs: &Preferences) -> &Self;

    fn get_mut(prefs: &mut Preferences) -> &mut Self;
}

impl SettingsGroup for NotificationSettings {
    const GROUP: PreferenceGroup = PreferenceGroup::Notifications;

    fn get(prefs: &Preferences) -> &Self {
        &prefs.notifications
    }

    fn get_mut(prefs: &mut Preferences) -> &mut Self {
        &mut prefs.notifications
    }
}

impl SettingsGroup for PrivacySettings {
    const GROUP: PreferenceGroup = PreferenceGroup::Privacy;

    fn get(prefs: &Preferences) -> &Self {
        &prefs.privacy
    }

    fn get_mut(prefs: &mut Preferences) -> &mut Self {
        &mut prefs.privacy
    }
}

impl SettingsGroup for AppPreferences {
    const GROUP: PreferenceGroup = PreferenceGroup::AppPreferences;

    fn get(prefs: &Preferences) -> &Self {
        &prefs.app
    }

    fn get_mut(prefs: &mut Preferences) -> &mut Self {
        &mut prefs.app
    }
}

impl SettingsGroup for LanguageRegion {
    const GROUP: PreferenceGroup = PreferenceGroup::LanguageRegion;

    fn get(prefs: &Preferences) -> &Self {
        &prefs.language_region
    }

    fn get_mut(prefs: &mut Preferences) -> &mut Self {
        &mut prefs.language_region
    }
}
