//! The trip-planning wizard controller.

use catalog::{destinations, Spot};
use chrono::{DateTime, Utc};
use tracing::{debug, info};

use crate::config::{StepInput, TripConfiguration};
use crate::error::{PlannerError, Result};
use crate::history::TripHistory;
use crate::record::{format_duration, TripRecord, TripStatus};
use crate::steps::{self, Screen, StepId, TOTAL_STEPS};

/// Outcome of an `advance` or `retreat` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// The wizard moved to this screen.
    Moved(Screen),
    /// Nothing changed: required fields are missing or the step is terminal.
    Stayed,
    /// Back was pressed on the first step; the caller should close the wizard.
    Exit,
}

/// Walks the user through configuring a trip.
///
/// Owns the configuration while the trip is in progress and hands a
/// [`TripRecord`] to the history when finalized.
#[derive(Debug, Clone, Default)]
pub struct TripWizard {
    config: TripConfiguration,
    screen: Screen,
    finalized: Option<String>,
}

impl TripWizard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn config(&self) -> &TripConfiguration {
        &self.config
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// `(current step number, total steps)` for the header.
    pub fn progress(&self) -> (u8, u8) {
        (self.screen.step_number(), TOTAL_STEPS)
    }

    /// Whether "Continue" is enabled on the current screen.
    pub fn can_advance(&self) -> bool {
        steps::is_satisfied(&self.config, self.screen)
            && steps::next_screen(&self.config, self.screen).is_some()
    }

    /// Id of the record produced by [`finalize`](Self::finalize), if any.
    pub fn finalized_id(&self) -> Option<&str> {
        self.finalized.as_deref()
    }

    /// Merge `input` into the configuration and move forward if the current
    /// screen is complete.
    ///
    /// A no-op on the terminal step. The trip type can only be changed on
    /// the trip-type step.
    pub fn advance(&mut self, input: Option<StepInput>) -> Transition {
        if self.screen.is_terminal() {
            return Transition::Stayed;
        }

        if let Some(input) = input {
            if matches!(input, StepInput::TripType(_)) && self.screen != Screen::FIRST {
                debug!("Ignoring trip type change on {:?}", self.screen);
            } else {
                self.config.apply(input);
            }
        }

        if !steps::is_satisfied(&self.config, self.screen) {
            return Transition::Stayed;
        }

        match steps::next_screen(&self.config, self.screen) {
            Some(next) => {
                debug!("Wizard {:?} -> {:?}", self.screen, next);
                self.screen = next;
                Transition::Moved(next)
            }
            None => Transition::Stayed,
        }
    }

    /// Go back one screen, or report [`Transition::Exit`] on the first step.
    pub fn retreat(&mut self) -> Transition {
        match steps::previous_screen(&self.config, self.screen) {
            Some(previous) => {
                debug!("Wizard {:?} <- {:?}", previous, self.screen);
                self.screen = previous;
                Transition::Moved(previous)
            }
            None => Transition::Exit,
        }
    }

    /// Add a spot to the watch cart. Returns `false` if it was already there
    /// or the trip is not an own trip.
    pub fn add_spot(&mut self, spot: &Spot) -> bool {
        self.config.add_spot(spot)
    }

    pub fn remove_spot(&mut self, spot_id: &str) -> bool {
        self.config.remove_spot(spot_id)
    }

    /// Current estimated total: package price, or cart plus one hotel night.
    pub fn running_total(&self) -> u64 {
        self.config.estimated_cost()
    }

    /// Build the trip record and append it to `history`.
    ///
    /// Only allowed on the confirmation step, and only once per wizard.
    pub async fn finalize(&mut self, history: &TripHistory) -> Result<TripRecord> {
        self.check_finalizable()?;

        let mut now = Utc::now();
        while history.contains(&now.timestamp_millis().to_string()).await {
            now += chrono::Duration::milliseconds(1);
        }

        let record = self.build_record(now)?;
        history.append(record.clone()).await?;

        info!("Finalized trip {} to {}", record.id, record.destination);
        self.finalized = Some(record.id.clone());
        Ok(record)
    }

    fn check_finalizable(&self) -> Result<()> {
        if let Some(id) = &self.finalized {
            return Err(PlannerError::AlreadyFinalized(id.clone()));
        }
        if self.screen != Screen::Step(StepId::Confirmation) {
            return Err(PlannerError::NotAtConfirmation {
                step: self.screen.step_number(),
            });
        }
        Ok(())
    }

    /// Derive the record for a trip created at `now`.
    pub fn build_record(&self, now: DateTime<Utc>) -> Result<TripRecord> {
        let destination = self
            .config
            .destination()
            .filter(|d| !d.is_empty())
            .ok_or(PlannerError::Incomplete("destination"))?
            .to_string();
        let start_date = self
            .config
            .from_date()
            .ok_or(PlannerError::Incomplete("start date"))?;
        let end_date = self
            .config
            .to_date()
            .ok_or(PlannerError::Incomplete("end date"))?;
        let transport = self
            .config
            .transport()
            .ok_or(PlannerError::Incomplete("transport"))?;

        let (name, accommodation, activities) = match &self.config {
            TripConfiguration::Undecided => return Err(PlannerError::Incomplete("trip type")),
            TripConfiguration::Package(c) => {
                let package = c.package().ok_or(PlannerError::Incomplete("package"))?;
                (
                    package.name.to_string(),
                    package.hotel.to_string(),
                    package.activities.iter().map(|a| a.to_string()).collect(),
                )
            }
            TripConfiguration::Own(c) => {
                let hotel = c.hotel().ok_or(PlannerError::Incomplete("hotel"))?;
                (
                    format!("Trip to {}", destination),
                    hotel.name.to_string(),
                    c.watch_cart.names(),
                )
            }
        };

        let transportation = match self.config.as_own().and_then(|c| c.route()) {
            Some(route) => format!("{} via {}", transport.label(), route.name),
            None => transport.label().to_string(),
        };

        let days = (end_date - start_date).num_days().max(1);

        Ok(TripRecord {
            id: now.timestamp_millis().to_string(),
            name,
            image: destinations::image_for(&destination).to_string(),
            destination,
            start_date,
            end_date,
            status: TripStatus::Upcoming,
            budget: self.config.estimated_cost(),
            spent: 0,
            travelers: 1,
            duration: format_duration(days),
            activities,
            accommodation,
            transportation,
            created_date: now.date_naive(),
            description: None,
        })
    }
}
