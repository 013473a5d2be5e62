//! User session and stubbed authentication for Roamly.
//!
//! There is no real identity provider: [`MockAuthenticator`] waits a fixed
//! delay and accepts any credentials. The [`SessionStore`] keeps the single
//! signed-in user and persists it locally.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use session::{MockAuthenticator, SessionStore};
//! use storage::Database;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let db = Database::in_memory().await?;
//! let sessions = SessionStore::open(db, Arc::new(MockAuthenticator::default())).await?;
//!
//! let user = sessions.login("priya@example.com", "secret", None).await?;
//! assert_eq!(user.username, "priya");
//! # Ok(())
//! # }
//! ```

mod authenticator;
mod error;
mod model;
mod store;
pub mod validation;

pub use authenticator::{username_from_email, Authenticator, MockAuthenticator};
pub use error::AuthError;
pub use model::{ProfileUpdate, UserSession};
pub use store::SessionStore;
pub use validation::ValidationError;
