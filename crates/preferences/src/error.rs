//! Error types for preference operations.

use storage::StorageError;
use thiserror::Error;

use crate::groups::PreferenceGroup;

/// Errors that can occur while updating or persisting preferences.
#[derive(Debug, Error)]
pub enum PreferenceError {
    /// Reading or writing the persisted group failed.
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    /// A partial update did not fit the group's shape.
    #[error("invalid {group} settings: {message}")]
    InvalidValue {
        group: PreferenceGroup,
        message: String,
    },
}

/// Result type for preference operations.
pub type Result<T> = std::result::Result<T, PreferenceError>;
