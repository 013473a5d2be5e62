//! Error types for the application shell.

use preferences::PreferenceError;
use session::AuthError;
use storage::StorageError;
use thiserror::Error;
use trip_planner::PlannerError;

/// Errors raised while wiring or driving the app.
#[derive(Debug, Error)]
pub enum ShellError {
    /// An environment variable held a value that does not parse.
    #[error("configuration error: {0}")]
    Configuration(String),

    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("preference error: {0}")]
    Preferences(#[from] PreferenceError),

    #[error("{0}")]
    Auth(#[from] AuthError),

    #[error("trip planning error: {0}")]
    Planner(#[from] PlannerError),

    /// No trip wizard is open.
    #[error("trip planning is not in progress")]
    NotPlanning,

    /// Expense form input was rejected.
    #[error("invalid expense: {0}")]
    InvalidExpense(String),

    /// A chat message could not be sent.
    #[error("cannot send message: {0}")]
    InvalidMessage(String),

    #[error("invalid payment method: {0}")]
    InvalidPaymentMethod(String),
}

/// Result type for shell operations.
pub type Result<T> = std::result::Result<T, ShellError>;
