//! Well-known storage keys.
//!
//! Each key is written by exactly one store.

/// Signed-in user record, written by the session store.
pub const USER: &str = "user";

/// Finished trips, written by the trip history store.
pub const TRIP_HISTORY: &str = "tripHistory";

pub const PREFERENCES_NOTIFICATIONS: &str = "preferences-notifications";
pub const PREFERENCES_PRIVACY: &str = "preferences-privacy";
pub const PREFERENCES_APP: &str = "preferences-app";
pub const PREFERENCES_LANGUAGE_REGION: &str = "preferences-language-region";
