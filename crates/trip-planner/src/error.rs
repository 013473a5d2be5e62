//! Error types for trip planning.

use storage::StorageError;
use thiserror::Error;

/// Errors that can occur while finishing or storing a trip.
#[derive(Debug, Error)]
pub enum PlannerError {
    /// `finalize` was called before reaching the confirmation step.
    #[error("trip can only be finalized from the confirmation step (currently on step {step})")]
    NotAtConfirmation { step: u8 },

    /// The wizard already produced its trip record.
    #[error("trip already finalized as {0}")]
    AlreadyFinalized(String),

    /// A field required to build the trip record is missing.
    #[error("trip is incomplete: missing {0}")]
    Incomplete(&'static str),

    /// A record with this id is already in the history.
    #[error("trip already exists: {0}")]
    DuplicateTrip(String),

    /// Persisting the history failed.
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
}

/// Result type for trip planning operations.
pub type Result<T> = std::result::Result<T, PlannerError>;
