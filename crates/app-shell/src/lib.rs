//! Application shell for Roamly.
//!
//! [`AppContext`] owns the database and every store, the tab navigator, the
//! onboarding carousel, the expenses ledger, the chat inbox, saved payment
//! cards and the trip wizard while one is open. There are no globals: create
//! a context, pass it around, dispose it.
//!
//! # Example
//!
//! ```no_run
//! use app_shell::{AppConfig, AppContext, Tab};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = AppConfig::from_env()?;
//!     let mut app = AppContext::open(&config).await?;
//!
//!     app.navigator_mut().select_tab(Tab::Expenses);
//!     println!("{} spent", app.ledger().total_spent());
//!
//!     app.dispose().await;
//!     Ok(())
//! }
//! ```

pub mod chat;
mod config;
mod context;
mod error;
pub mod expenses;
pub mod navigation;
pub mod onboarding;
pub mod payments;

pub use chat::{ChatInbox, ChatMessage, Conversation, ConversationKind};
pub use config::{AppConfig, DEFAULT_DATABASE_URL};
pub use context::{AppContext, AppStage};
pub use error::{Result, ShellError};
pub use expenses::{Expense, ExpenseCategory, ExpenseLedger, NewExpense, TripBudget};
pub use navigation::{Navigator, SubScreen, Tab};
pub use onboarding::{Onboarding, Slide, SLIDES};
pub use payments::{CardBrand, PaymentMethod, PaymentMethods};
