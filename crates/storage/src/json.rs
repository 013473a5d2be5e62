//! Typed JSON access on top of [`crate::kv`].

use serde::de::DeserializeOwned;
use serde::Serialize;
use sqlx::SqlitePool;
use tracing::warn;

use crate::kv;
use crate::Result;

/// Load and decode the value under `key`.
///
/// A missing key and a value that fails to decode both yield `Ok(None)`;
/// the latter is logged so corrupted entries fall back to defaults instead
/// of failing the caller.
pub async fn load_json<T: DeserializeOwned>(pool: &SqlitePool, key: &str) -> Result<Option<T>> {
    let Some(entry) = kv::get_entry(pool, key).await? else {
        return Ok(None);
    };

    match serde_json::from_str(&entry.value) {
        Ok(value) => Ok(Some(value)),
        Err(err) => {
            warn!("Ignoring malformed value for key {}: {}", key, err);
            Ok(None)
        }
    }
}

/// Encode `value` and store it under `key`.
pub async fn save_json<T: Serialize + ?Sized>(pool: &SqlitePool, key: &str, value: &T) -> Result<()> {
    let encoded = serde_json::to_string(value)?;
    kv::put_entry(pool, key, &encoded).await
}
