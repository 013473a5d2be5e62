//! Trip planning for Roamly.
//!
//! - [`TripWizard`] - the multi-step controller that builds a trip
//! - [`TripConfiguration`] - what the wizard has collected, as a tagged union
//!   over package and own trips
//! - [`steps`] - pure step sequencing (`next_screen` / `previous_screen`)
//! - [`TripHistory`] - the store finished trips are appended to
//!
//! # Example
//!
//! ```no_run
//! use chrono::NaiveDate;
//! use storage::Database;
//! use trip_planner::{StepInput, TripHistory, TripType, TripWizard};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let db = Database::in_memory().await?;
//! let history = TripHistory::load(db).await?;
//!
//! let mut wizard = TripWizard::new();
//! wizard.advance(Some(StepInput::TripType(TripType::Package)));
//! wizard.advance(Some(StepInput::Destination("Goa, India".into())));
//! wizard.advance(Some(StepInput::PackageStart {
//!     from: NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
//!     package_id: "goa-beach-bliss".into(),
//! }));
//! wizard.advance(None); // summary -> confirmation
//!
//! let record = wizard.finalize(&history).await?;
//! assert_eq!(record.budget, 32_000);
//! # Ok(())
//! # }
//! ```

mod cart;
mod config;
mod error;
mod history;
mod record;
pub mod steps;
mod wizard;

pub use cart::{CartItem, WatchCart};
pub use config::{OwnTripConfig, PackageTripConfig, StepInput, TripConfiguration, TripType};
pub use error::{PlannerError, Result};
pub use history::TripHistory;
pub use record::{
    format_duration, record_matches, sample_trips, TripFilter, TripRecord, TripStats, TripStatus,
    SAMPLE_TRIP_IDS,
};
pub use steps::{next_screen, previous_screen, Screen, StepId, TOTAL_STEPS};
pub use wizard::{Transition, TripWizard};
