//! Error types for authentication and session operations.

use storage::StorageError;
use thiserror::Error;

use crate::validation::ValidationError;

/// Errors surfaced by the session store.
///
/// The `Display` text is what the auth screen shows inline.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Form input rejected before contacting the authenticator.
    #[error("{0}")]
    Invalid(#[from] ValidationError),

    /// The authenticator rejected the login.
    #[error("Login failed")]
    LoginFailed,

    /// The authenticator rejected the signup.
    #[error("Signup failed")]
    SignupFailed,

    /// Reading or writing the stored session failed.
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
}
