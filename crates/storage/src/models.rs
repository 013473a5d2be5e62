//! Storage models.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A single persisted key and its JSON-encoded value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct KvEntry {
    /// Storage key (e.g. "preferences-app").
    pub key: String,
    /// JSON text.
    pub value: String,
    /// Last update timestamp.
    pub updated_at: String,
}
